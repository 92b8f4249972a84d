//! Witness for `Result<A, E>`, the try container.

use std::fmt;
use std::marker::PhantomData;

use super::{Bind, Witness};
use crate::kind::Kind;

/// Capability witness for `Result<A, E>`.
///
/// `Err` short-circuits `bind` and is carried over unchanged. The zero is
/// `Err(E::default())`, so the witness exists only for `E: Default`.
///
/// # Examples
///
/// ```rust
/// use lambars_trans::witness::{Bind, ResultW};
///
/// type TryW = ResultW<String>;
///
/// let parsed = <TryW as Bind<&str, i32>>::bind(Ok("42"), |text| {
///     text.parse::<i32>().map_err(|error| error.to_string())
/// });
/// assert_eq!(parsed, Ok(42));
/// ```
pub struct ResultW<E>(PhantomData<fn() -> E>);

impl<E> Kind for ResultW<E> {
    type Of<A> = Result<A, E>;
}

impl<A, E: Default> Witness<A> for ResultW<E> {
    #[inline]
    fn pure(value: A) -> Self::Of<A> {
        Ok(value)
    }

    #[inline]
    fn fold<S, F>(container: Self::Of<A>, init: S, mut function: F) -> S
    where
        F: FnMut(S, A) -> S,
    {
        match container {
            Ok(value) => function(init, value),
            Err(_) => init,
        }
    }

    #[inline]
    fn zero() -> Self::Of<A> {
        Err(E::default())
    }

    #[inline]
    fn plus(left: Self::Of<A>, right: Self::Of<A>) -> Self::Of<A> {
        left.or(right)
    }
}

impl<A, B, E: Default> Bind<A, B> for ResultW<E> {
    #[inline]
    fn bind<F>(container: Result<A, E>, function: F) -> Result<B, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        container.and_then(function)
    }
}

impl<E> Clone for ResultW<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ResultW<E> {}

impl<E> Default for ResultW<E> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<E> fmt::Debug for ResultW<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ResultW")
    }
}
