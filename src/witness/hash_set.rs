//! Witness for `HashSet<A, S>`.
//!
//! # Traversal order
//!
//! `fold` visits elements in the set's own iteration order, which is the
//! bucket order of the underlying table. It is independent of insertion
//! order, unspecified across sets, and stable for one set value within a
//! single call. Results that depend only on the multiset of elements (sums,
//! counts, `exists`) are therefore deterministic; results that depend on
//! order are not.

use std::collections::HashSet;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use super::{Bind, Witness, concat_map};
use crate::kind::Kind;

/// Capability witness for `HashSet<A, S>`.
///
/// `bind` is the union of the sets produced for every element; `plus` is
/// set union. The hasher `S` defaults to the standard library's
/// `RandomState`.
pub struct HashSetW<S = RandomState>(PhantomData<fn() -> S>);

/// Hash-set witness using the `rustc-hash` Fx hasher.
#[cfg(feature = "fxhash")]
pub type FxHashSetW = HashSetW<rustc_hash::FxBuildHasher>;

/// Hash-set witness using the `ahash` hasher.
#[cfg(feature = "ahash")]
pub type AHashSetW = HashSetW<ahash::RandomState>;

impl<S> Kind for HashSetW<S> {
    type Of<A> = HashSet<A, S>;
}

impl<A, S> Witness<A> for HashSetW<S>
where
    A: Hash + Eq,
    S: BuildHasher + Default,
{
    #[inline]
    fn pure(value: A) -> Self::Of<A> {
        let mut set = HashSet::with_capacity_and_hasher(1, S::default());
        set.insert(value);
        set
    }

    #[inline]
    fn fold<T, F>(container: Self::Of<A>, init: T, function: F) -> T
    where
        F: FnMut(T, A) -> T,
    {
        container.into_iter().fold(init, function)
    }

    #[inline]
    fn zero() -> Self::Of<A> {
        HashSet::with_hasher(S::default())
    }

    fn plus(left: Self::Of<A>, right: Self::Of<A>) -> Self::Of<A> {
        let (mut larger, smaller) = if left.len() >= right.len() {
            (left, right)
        } else {
            (right, left)
        };
        larger.extend(smaller);
        larger
    }
}

impl<A, B, S> Bind<A, B> for HashSetW<S>
where
    A: Hash + Eq,
    B: Hash + Eq,
    S: BuildHasher + Default,
{
    fn bind<F>(container: HashSet<A, S>, function: F) -> HashSet<B, S>
    where
        F: FnMut(A) -> HashSet<B, S>,
    {
        concat_map::<Self, A, B, _, _>(container, function)
    }
}

impl<S> Clone for HashSetW<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for HashSetW<S> {}

impl<S> Default for HashSetW<S> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<S> fmt::Debug for HashSetW<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("HashSetW")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set_of(values: &[i32]) -> HashSet<i32> {
        values.iter().copied().collect()
    }

    #[rstest]
    fn bind_unions_and_deduplicates() {
        let result = HashSetW::bind(set_of(&[1, 2, 3]), |value| set_of(&[value % 2, 10]));
        assert_eq!(result, set_of(&[0, 1, 10]));
    }

    #[rstest]
    fn plus_is_union_regardless_of_size() {
        assert_eq!(
            HashSetW::plus(set_of(&[1]), set_of(&[1, 2, 3])),
            set_of(&[1, 2, 3])
        );
        assert_eq!(
            HashSetW::plus(set_of(&[1, 2, 3]), set_of(&[4])),
            set_of(&[1, 2, 3, 4])
        );
    }

    #[rstest]
    fn fold_sum_is_order_independent() {
        let total = HashSetW::fold(set_of(&[5, 1, 9]), 0, |sum, value| sum + value);
        assert_eq!(total, 15);
    }

    #[cfg(feature = "fxhash")]
    #[rstest]
    fn fx_hasher_witness_behaves_like_default() {
        let set: HashSet<i32, rustc_hash::FxBuildHasher> = [1, 2].into_iter().collect();
        let result = FxHashSetW::map(set, |value| value * 3);
        assert_eq!(result.len(), 2);
        assert!(result.contains(&6));
    }
}
