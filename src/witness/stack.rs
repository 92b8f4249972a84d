//! Witness for [`PersistentStack<A>`](crate::persistent::PersistentStack).

use super::{Bind, Witness};
use crate::kind::Kind;
use crate::persistent::PersistentStack;

/// Capability witness for `PersistentStack<A>`.
///
/// The stack is read from the top down: `fold` starts at the top, `bind`
/// calls its function top-first and stacks each result above the results of
/// the elements beneath it, and `plus` places `left` on top of `right`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StackW;

impl Kind for StackW {
    type Of<A> = PersistentStack<A>;
}

impl<A: Clone> Witness<A> for StackW {
    #[inline]
    fn pure(value: A) -> Self::Of<A> {
        PersistentStack::singleton(value)
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
        PersistentStack::new()
    }

    #[inline]
    fn plus(left: Self::Of<A>, right: Self::Of<A>) -> Self::Of<A> {
        left.append(right)
    }
}

impl<A: Clone, B: Clone> Bind<A, B> for StackW {
    fn bind<F>(container: PersistentStack<A>, function: F) -> PersistentStack<B>
    where
        F: FnMut(A) -> PersistentStack<B>,
    {
        let results: Vec<PersistentStack<B>> = container.into_iter().map(function).collect();
        // Join bottom-up so every `plus` copies only the small upper stack.
        results
            .into_iter()
            .rev()
            .fold(<Self as Witness<B>>::zero(), |below, above| {
                <Self as Witness<B>>::plus(above, below)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn stack_of(values: &[i32]) -> PersistentStack<i32> {
        values.iter().copied().collect()
    }

    #[rstest]
    fn bind_keeps_top_first_order() {
        let result = StackW::bind(stack_of(&[1, 2]), |value| stack_of(&[value, value * 10]));
        assert_eq!(result, stack_of(&[1, 10, 2, 20]));
    }

    #[rstest]
    fn bind_calls_function_from_the_top() {
        let mut calls = Vec::new();
        let _ = StackW::bind(stack_of(&[3, 2, 1]), |value| {
            calls.push(value);
            StackW::pure(value)
        });
        assert_eq!(calls, vec![3, 2, 1]);
    }

    #[rstest]
    fn fold_starts_at_the_top() {
        let rendered = StackW::fold(stack_of(&[1, 2, 3]), String::new(), |text, value| {
            format!("{text}{value}")
        });
        assert_eq!(rendered, "123");
    }
}
