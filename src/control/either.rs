//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is the right-biased sum type used by [`EitherW`]: `Right`
//! carries the element the transformer operates on, `Left` carries an
//! auxiliary payload (typically an error) that is threaded through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use lambars_trans::control::Either;
//!
//! let right: Either<String, i32> = Either::Right(21);
//! assert_eq!(right.and_then(|value| Either::Right(value * 2)), Either::Right(42));
//!
//! let left: Either<String, i32> = Either::Left("err".to_string());
//! assert_eq!(left.clone().map(|value| value * 2), left);
//! ```
//!
//! [`EitherW`]: crate::witness::EitherW

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// By convention `Left` represents failure or an alternative and `Right`
/// represents success. Combinators such as [`Either::map`] and
/// [`Either::and_then`] act on the `Right` value only.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into `Option<L>`, discarding a `Right` value.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_trans::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(1);
    /// assert_eq!(right.right(), Some(1));
    ///
    /// let left: Either<&str, i32> = Either::Left("no");
    /// assert_eq!(left.right(), None);
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the right value, leaving a `Left` untouched.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies `function` to the left value, leaving a `Right` untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Sequences a computation on the right value.
    ///
    /// A `Left` short-circuits: `function` is never called.
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Returns `self` if it is a `Right`, otherwise `alternative`.
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Right(_) => self,
            Self::Left(_) => alternative,
        }
    }

    /// Eliminates both cases into a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_trans::control::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// let length = value.fold(|number| number as usize, |text| text.len());
    /// assert_eq!(length, 5);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the two cases.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Either::Right(3), Either::Right(6))]
    #[case(Either::Left("err"), Either::Left("err"))]
    fn map_only_touches_right(
        #[case] input: Either<&str, i32>,
        #[case] expected: Either<&str, i32>,
    ) {
        assert_eq!(input.map(|value| value * 2), expected);
    }

    #[rstest]
    fn and_then_on_left_never_calls_function() {
        let left: Either<&str, i32> = Either::Left("err");
        let result = left.and_then(|_| -> Either<&str, i32> { panic!("must not be called") });
        assert_eq!(result, Either::Left("err"));
    }

    #[rstest]
    #[case(Either::Right(1), Either::Right(2), Either::Right(1))]
    #[case(Either::Left("a"), Either::Right(2), Either::Right(2))]
    #[case(Either::Left("a"), Either::Left("b"), Either::Left("b"))]
    fn or_prefers_first_right(
        #[case] first: Either<&str, i32>,
        #[case] second: Either<&str, i32>,
        #[case] expected: Either<&str, i32>,
    ) {
        assert_eq!(first.or(second), expected);
    }

    #[rstest]
    fn result_conversion_keeps_cases() {
        let ok: Result<i32, String> = Ok(1);
        let either: Either<String, i32> = ok.into();
        assert_eq!(either, Either::Right(1));

        let back: Result<i32, String> = Either::Left("bad".to_string()).into();
        assert_eq!(back, Err("bad".to_string()));
    }

    #[rstest]
    fn swap_exchanges_cases() {
        let value: Either<i32, &str> = Either::Left(1);
        assert_eq!(value.swap(), Either::Right(1));
    }

    #[rstest]
    fn debug_renders_variant_name() {
        let value: Either<i32, &str> = Either::Right("x");
        assert_eq!(format!("{value:?}"), "Right(\"x\")");
    }
}
