//! Witness for `VecDeque<A>`, the queue container.

use std::collections::VecDeque;

use super::{Bind, Witness};
use crate::kind::Kind;

/// Capability witness for `VecDeque<A>`.
///
/// Elements are visited front to back, so `fold` sees them in dequeue
/// order and `plus` enqueues the right queue behind the left one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VecDequeW;

impl Kind for VecDequeW {
    type Of<A> = VecDeque<A>;
}

impl<A> Witness<A> for VecDequeW {
    #[inline]
    fn pure(value: A) -> Self::Of<A> {
        VecDeque::from([value])
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
        VecDeque::new()
    }

    #[inline]
    fn plus(mut left: Self::Of<A>, mut right: Self::Of<A>) -> Self::Of<A> {
        left.append(&mut right);
        left
    }
}

impl<A, B> Bind<A, B> for VecDequeW {
    #[inline]
    fn bind<F>(container: VecDeque<A>, function: F) -> VecDeque<B>
    where
        F: FnMut(A) -> VecDeque<B>,
    {
        container.into_iter().flat_map(function).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bind_preserves_dequeue_order() {
        let queue = VecDeque::from([1, 2]);
        let result = VecDequeW::bind(queue, |value| VecDeque::from([value, -value]));
        assert_eq!(result, VecDeque::from([1, -1, 2, -2]));
    }

    #[rstest]
    fn plus_enqueues_right_behind_left() {
        let joined = VecDequeW::plus(VecDeque::from([1, 2]), VecDeque::from([3]));
        assert_eq!(joined.front(), Some(&1));
        assert_eq!(joined.back(), Some(&3));
    }
}
