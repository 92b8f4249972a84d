//! Witness for `Option<A>`.

use super::{Bind, Witness};
use crate::kind::Kind;

/// Capability witness for `Option<A>`.
///
/// `None` is the zero; `plus` keeps the first present value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptionW;

impl Kind for OptionW {
    type Of<A> = Option<A>;
}

impl<A> Witness<A> for OptionW {
    #[inline]
    fn pure(value: A) -> Self::Of<A> {
        Some(value)
    }

    #[inline]
    fn fold<S, F>(container: Self::Of<A>, init: S, mut function: F) -> S
    where
        F: FnMut(S, A) -> S,
    {
        match container {
            Some(value) => function(init, value),
            None => init,
        }
    }

    #[inline]
    fn zero() -> Self::Of<A> {
        None
    }

    #[inline]
    fn plus(left: Self::Of<A>, right: Self::Of<A>) -> Self::Of<A> {
        left.or(right)
    }
}

impl<A, B> Bind<A, B> for OptionW {
    #[inline]
    fn bind<F>(container: Option<A>, function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        container.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(4), Some(8))]
    #[case(Some(-1), None)]
    #[case(None, None)]
    fn bind_sequences_presence(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        let result = OptionW::bind(input, |value| (value > 0).then_some(value * 2));
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case(Some(3), 13)]
    #[case(None, 10)]
    fn fold_visits_at_most_once(#[case] input: Option<i32>, #[case] expected: i32) {
        assert_eq!(OptionW::fold(input, 10, |total, value| total + value), expected);
    }

    #[rstest]
    #[case(Some(1), Some(2), Some(1))]
    #[case(None, Some(2), Some(2))]
    #[case(None, None, None)]
    fn plus_keeps_first_present(
        #[case] left: Option<i32>,
        #[case] right: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(OptionW::plus(left, right), expected);
    }
}
