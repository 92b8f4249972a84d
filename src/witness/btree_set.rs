//! Witness for `BTreeSet<A>`, the ordered set container.

use std::collections::BTreeSet;

use super::{Bind, Witness, concat_map};
use crate::kind::Kind;

/// Capability witness for `BTreeSet<A>`.
///
/// `fold` visits elements in ascending order; `bind` and `plus` are set
/// union.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BTreeSetW;

impl Kind for BTreeSetW {
    type Of<A> = BTreeSet<A>;
}

impl<A: Ord> Witness<A> for BTreeSetW {
    #[inline]
    fn pure(value: A) -> Self::Of<A> {
        BTreeSet::from([value])
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
        BTreeSet::new()
    }

    fn plus(mut left: Self::Of<A>, mut right: Self::Of<A>) -> Self::Of<A> {
        left.append(&mut right);
        left
    }
}

impl<A: Ord, B: Ord> Bind<A, B> for BTreeSetW {
    fn bind<F>(container: BTreeSet<A>, function: F) -> BTreeSet<B>
    where
        F: FnMut(A) -> BTreeSet<B>,
    {
        concat_map::<Self, A, B, _, _>(container, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fold_visits_in_ascending_order() {
        let set = BTreeSet::from([3, 1, 2]);
        let visited = BTreeSetW::fold(set, Vec::new(), |mut seen, value| {
            seen.push(value);
            seen
        });
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[rstest]
    fn bind_merges_results() {
        let result = BTreeSetW::bind(BTreeSet::from([1, 2]), |value| {
            BTreeSet::from([value, value + 1])
        });
        assert_eq!(result, BTreeSet::from([1, 2, 3]));
    }
}
