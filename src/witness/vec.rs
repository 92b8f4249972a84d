//! Witness for `Vec<A>`, the array container.

use super::{Bind, Witness};
use crate::kind::Kind;

/// Capability witness for `Vec<A>`.
///
/// `bind` applies the function to every element in index order and
/// concatenates the results; `fold` runs left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VecW;

impl Kind for VecW {
    type Of<A> = Vec<A>;
}

impl<A> Witness<A> for VecW {
    #[inline]
    fn pure(value: A) -> Self::Of<A> {
        vec![value]
    }

    #[inline]
    fn fold<S, F>(container: Self::Of<A>, init: S, function: F) -> S
    where
        F: FnMut(S, A) -> S,
    {
        container.into_iter().fold(init, function)
    }

    #[inline]
    fn zero() -> Self::Of<A> {
        Vec::new()
    }

    #[inline]
    fn plus(mut left: Self::Of<A>, right: Self::Of<A>) -> Self::Of<A> {
        left.extend(right);
        left
    }
}

impl<A, B> Bind<A, B> for VecW {
    #[inline]
    fn bind<F>(container: Vec<A>, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        container.into_iter().flat_map(function).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2, 3], vec![1, 10, 2, 20, 3, 30])]
    #[case(vec![], vec![])]
    fn bind_concatenates_in_order(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        let result = VecW::bind(input, |value| vec![value, value * 10]);
        assert_eq!(result, expected);
    }

    #[rstest]
    fn bind_on_empty_never_calls_function() {
        let result: Vec<i32> = VecW::bind(Vec::<i32>::new(), |_| -> Vec<i32> {
            panic!("must not be called")
        });
        assert!(result.is_empty());
    }

    #[rstest]
    fn fold_runs_left_to_right() {
        let rendered = VecW::fold(vec![1, 2, 3], String::new(), |accumulator, value| {
            format!("{accumulator}{value}")
        });
        assert_eq!(rendered, "123");
    }

    #[rstest]
    fn plus_concatenates() {
        assert_eq!(VecW::plus(vec![1], vec![2, 3]), vec![1, 2, 3]);
    }
}
