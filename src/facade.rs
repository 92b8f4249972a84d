//! Free-function facade over [`Trans`] for every pair of provided witnesses.
//!
//! Each module `facade::<outer>_<inner>` exposes the transformer operations
//! with the witness pair fixed, so callers never name a witness:
//!
//! ```rust
//! use lambars_trans::facade::option_vec;
//! use lambars_trans::num::Additive;
//!
//! let nested = Some(vec![1, 2, 3]);
//! assert_eq!(option_vec::map_t(nested.clone(), |value| value + 1), Some(vec![2, 3, 4]));
//! assert_eq!(option_vec::count_t(nested.clone()), 3);
//! assert_eq!(option_vec::sum_t::<Additive, _>(nested), 6);
//! ```
//!
//! Witnesses with a type parameter (`ResultW<E>`, `EitherW<L>`,
//! `HashSetW<S>`) keep it as the leading generic parameter of every function,
//! renamed per layer (`OuterE`, `InnerL`, ...). It is normally inferred from
//! the argument:
//!
//! ```rust
//! use lambars_trans::control::Either;
//! use lambars_trans::facade::either_option;
//!
//! let nested: Either<String, Option<i32>> = Either::Right(Some(4));
//! assert_eq!(either_option::filter_t(nested, |value| *value > 5), Either::Right(None));
//! ```
//!
//! [`transformer_facade!`](crate::transformer_facade) generates the modules
//! and can be invoked for user-defined witnesses as well.
//!
//! [`Trans`]: crate::trans::Trans

#[allow(unused_imports)]
use crate::witness::{BTreeSetW, EitherW, HashSetW, OptionW, ResultW, StackW, VecDequeW, VecW};

/// Generates one facade module per ordered pair of the listed witnesses.
///
/// Each entry is `module_name => Witness` or `module_name => Witness<Param>`.
/// The cross product of the list, the diagonal included, produces modules
/// named `<outer>_<inner>`. Witness names are resolved from the invoking
/// module.
///
/// # Examples
///
/// ```rust
/// mod pairs {
///     use lambars_trans::witness::{OptionW, VecW};
///
///     lambars_trans::transformer_facade! {
///         list => VecW,
///         maybe => OptionW,
///     }
/// }
///
/// assert_eq!(pairs::list_maybe::lift_value_t(1), vec![Some(1)]);
/// assert_eq!(pairs::maybe_list::lift_value_t(1), Some(vec![1]));
/// ```
#[macro_export]
macro_rules! transformer_facade {
    ($($name:ident => $witness:ident $(<$param:ident>)?),* $(,)?) => {
        $crate::transformer_facade!(
            @outer [$($name => $witness $(<$param>)?),*] [$($name => $witness $(<$param>)?),*]
        );
    };

    (@outer [] $inner:tt) => {};

    (@outer [$name:ident => $witness:ident $(<$param:ident>)? $(, $($rest:tt)*)?] $inner:tt) => {
        $crate::transformer_facade!(@row ($name => $witness $(<$param>)?) $inner);
        $crate::transformer_facade!(@outer [$($($rest)*)?] $inner);
    };

    (@row $outer:tt [$($name:ident => $witness:ident $(<$param:ident>)?),*]) => {
        $(
            $crate::transformer_facade!(@pair $outer ($name => $witness $(<$param>)?));
        )*
    };

    (
        @pair ($outer_name:ident => $outer:ident $(<$outer_param:ident>)?)
        ($inner_name:ident => $inner:ident $(<$inner_param:ident>)?)
    ) => {
        $crate::paste::paste! {
            #[doc = "Transformer operations with `" $outer "` outside and `" $inner "` inside."]
            pub mod [<$outer_name _ $inner_name>] {
                #[allow(unused_imports)]
                use super::*;

                $crate::transformer_facade!(
                    @fns
                    [$([<Outer $outer_param>])? $([<Inner $inner_param>])?]
                    ($outer $(<[<Outer $outer_param>]>)?)
                    ($inner $(<[<Inner $inner_param>]>)?)
                );
            }
        }
    };

    (@fns [$($generic:ident)*] ($outer:ty) ($inner:ty)) => {
        /// Binds through both layers.
        #[inline]
        pub fn bind_t<$($generic,)* A, B, F>(
            nested: $crate::kind::Nested<$outer, $inner, A>,
            function: F,
        ) -> $crate::kind::Nested<$outer, $inner, B>
        where
            $outer: $crate::witness::Bind<$crate::kind::Of<$inner, A>, $crate::kind::Of<$inner, B>>,
            $inner: $crate::witness::Bind<A, B>,
            F: FnMut(A) -> $crate::kind::Of<$inner, B>,
        {
            $crate::trans::Trans::<$outer, $inner>::bind::<A, B, F>(nested, function)
        }

        /// Maps every inner element.
        #[inline]
        pub fn map_t<$($generic,)* A, B, F>(
            nested: $crate::kind::Nested<$outer, $inner, A>,
            function: F,
        ) -> $crate::kind::Nested<$outer, $inner, B>
        where
            $outer: $crate::witness::Bind<$crate::kind::Of<$inner, A>, $crate::kind::Of<$inner, B>>,
            $inner: $crate::witness::Bind<A, B>,
            F: FnMut(A) -> B,
        {
            $crate::trans::Trans::<$outer, $inner>::map::<A, B, F>(nested, function)
        }

        /// Query-position spelling of `map_t`.
        #[inline]
        pub fn select<$($generic,)* A, B, F>(
            nested: $crate::kind::Nested<$outer, $inner, A>,
            function: F,
        ) -> $crate::kind::Nested<$outer, $inner, B>
        where
            $outer: $crate::witness::Bind<$crate::kind::Of<$inner, A>, $crate::kind::Of<$inner, B>>,
            $inner: $crate::witness::Bind<A, B>,
            F: FnMut(A) -> B,
        {
            $crate::trans::Trans::<$outer, $inner>::select::<A, B, F>(nested, function)
        }

        /// Binds and projects the original and bound values.
        #[inline]
        pub fn select_many<$($generic,)* A, B, C, F, P>(
            nested: $crate::kind::Nested<$outer, $inner, A>,
            binder: F,
            project: P,
        ) -> $crate::kind::Nested<$outer, $inner, C>
        where
            $outer: $crate::witness::Bind<$crate::kind::Of<$inner, A>, $crate::kind::Of<$inner, C>>,
            $inner: $crate::witness::Bind<A, C> + $crate::witness::Bind<B, C>,
            A: Clone,
            F: FnMut(A) -> $crate::kind::Of<$inner, B>,
            P: FnMut(A, B) -> C,
        {
            $crate::trans::Trans::<$outer, $inner>::select_many::<A, B, C, F, P>(
                nested, binder, project,
            )
        }

        /// Replaces every inner element failing `predicate` with the inner zero.
        #[inline]
        pub fn filter_t<$($generic,)* A, P>(
            nested: $crate::kind::Nested<$outer, $inner, A>,
            predicate: P,
        ) -> $crate::kind::Nested<$outer, $inner, A>
        where
            $outer: $crate::witness::Bind<$crate::kind::Of<$inner, A>, $crate::kind::Of<$inner, A>>,
            $inner: $crate::witness::Bind<A, A>,
            P: FnMut(&A) -> bool,
        {
            $crate::trans::Trans::<$outer, $inner>::filter::<A, P>(nested, predicate)
        }

        /// Folds every inner element, outer order first.
        #[inline]
        pub fn fold_t<$($generic,)* A, S, F>(
            nested: $crate::kind::Nested<$outer, $inner, A>,
            init: S,
            function: F,
        ) -> S
        where
            $outer: $crate::witness::Witness<$crate::kind::Of<$inner, A>>,
            $inner: $crate::witness::Witness<A>,
            F: FnMut(S, A) -> S,
        {
            $crate::trans::Trans::<$outer, $inner>::fold::<A, S, F>(nested, init, function)
        }

        /// Returns `true` if any inner element satisfies `predicate`.
        #[inline]
        pub fn exists_t<$($generic,)* A, P>(
            nested: $crate::kind::Nested<$outer, $inner, A>,
            predicate: P,
        ) -> bool
        where
            $outer: $crate::witness::Witness<$crate::kind::Of<$inner, A>>,
            $inner: $crate::witness::Witness<A>,
            P: FnMut(&A) -> bool,
        {
            $crate::trans::Trans::<$outer, $inner>::exists::<A, P>(nested, predicate)
        }

        /// Returns `true` if every inner element satisfies `predicate`.
        #[inline]
        pub fn for_all_t<$($generic,)* A, P>(
            nested: $crate::kind::Nested<$outer, $inner, A>,
            predicate: P,
        ) -> bool
        where
            $outer: $crate::witness::Witness<$crate::kind::Of<$inner, A>>,
            $inner: $crate::witness::Witness<A>,
            P: FnMut(&A) -> bool,
        {
            $crate::trans::Trans::<$outer, $inner>::for_all::<A, P>(nested, predicate)
        }

        /// Runs `action` on every inner element.
        #[inline]
        pub fn iter_t<$($generic,)* A, F>(
            nested: $crate::kind::Nested<$outer, $inner, A>,
            action: F,
        )
        where
            $outer: $crate::witness::Witness<$crate::kind::Of<$inner, A>>,
            $inner: $crate::witness::Witness<A>,
            F: FnMut(A),
        {
            $crate::trans::Trans::<$outer, $inner>::iter::<A, F>(nested, action);
        }

        /// Counts the inner elements.
        #[inline]
        pub fn count_t<$($generic,)* A>(nested: $crate::kind::Nested<$outer, $inner, A>) -> usize
        where
            $outer: $crate::witness::Witness<$crate::kind::Of<$inner, A>>,
            $inner: $crate::witness::Witness<A>,
        {
            $crate::trans::Trans::<$outer, $inner>::count::<A>(nested)
        }

        /// Sums the inner elements with the numeric witness `N`.
        #[inline]
        pub fn sum_t<$($generic,)* N, A>(nested: $crate::kind::Nested<$outer, $inner, A>) -> A
        where
            $outer: $crate::witness::Witness<$crate::kind::Of<$inner, A>>,
            $inner: $crate::witness::Witness<A>,
            N: $crate::num::Num<A>,
        {
            $crate::trans::Trans::<$outer, $inner>::sum::<N, A>(nested)
        }

        /// Lifts an inner container into the outer layer.
        #[inline]
        pub fn lift_t<$($generic,)* A>(
            inner: $crate::kind::Of<$inner, A>,
        ) -> $crate::kind::Nested<$outer, $inner, A>
        where
            $outer: $crate::witness::Witness<$crate::kind::Of<$inner, A>>,
        {
            $crate::trans::Trans::<$outer, $inner>::lift::<A>(inner)
        }

        /// Lifts a bare value through both layers.
        #[inline]
        pub fn lift_value_t<$($generic,)* A>(value: A) -> $crate::kind::Nested<$outer, $inner, A>
        where
            $outer: $crate::witness::Witness<$crate::kind::Of<$inner, A>>,
            $inner: $crate::witness::Witness<A>,
        {
            $crate::trans::Trans::<$outer, $inner>::lift_value::<A>(value)
        }

        /// Swaps the two layers.
        #[inline]
        pub fn sequence_t<$($generic,)* A>(
            nested: $crate::kind::Nested<$outer, $inner, A>,
        ) -> $crate::kind::Nested<$inner, $outer, A>
        where
            $outer: $crate::witness::Witness<$crate::kind::Of<$inner, A>>
                + $crate::witness::Witness<A>,
            $inner: $crate::witness::Bind<A, $crate::kind::Of<$outer, A>>
                + $crate::witness::Bind<$crate::kind::Of<$outer, A>, $crate::kind::Of<$outer, A>>,
            $crate::kind::Of<$inner, A>: Clone,
            $crate::kind::Of<$outer, A>: Clone,
        {
            $crate::trans::Trans::<$outer, $inner>::sequence::<A>(nested)
        }

        /// Maps an outer container into the inner layer and swaps the layers.
        #[inline]
        pub fn traverse_t<$($generic,)* A, B, F>(
            outer: $crate::kind::Of<$outer, A>,
            function: F,
        ) -> $crate::kind::Nested<$inner, $outer, B>
        where
            $outer: $crate::witness::Bind<A, $crate::kind::Of<$inner, B>>
                + $crate::witness::Witness<B>,
            $inner: $crate::witness::Bind<B, $crate::kind::Of<$outer, B>>
                + $crate::witness::Bind<$crate::kind::Of<$outer, B>, $crate::kind::Of<$outer, B>>,
            $crate::kind::Of<$inner, B>: Clone,
            $crate::kind::Of<$outer, B>: Clone,
            F: FnMut(A) -> $crate::kind::Of<$inner, B>,
        {
            $crate::trans::Trans::<$outer, $inner>::traverse::<A, B, F>(outer, function)
        }
    };
}

transformer_facade! {
    vec => VecW,
    vec_deque => VecDequeW,
    stack => StackW,
    hash_set => HashSetW<S>,
    btree_set => BTreeSetW,
    option => OptionW,
    result => ResultW<E>,
    either => EitherW<L>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    use crate::num::Additive;
    use rstest::rstest;
    use std::collections::{BTreeSet, HashSet};

    #[rstest]
    fn vec_option_filter_matches_engine() {
        let nested = vec![Some(2), None, Some(3), Some(4)];
        assert_eq!(
            vec_option::filter_t(nested.clone(), |value| value % 2 == 0),
            crate::trans::Trans::<VecW, OptionW>::filter(nested, |value| value % 2 == 0)
        );
    }

    #[rstest]
    fn either_either_keeps_layer_parameters_apart() {
        let nested: Either<String, Either<u8, i32>> = Either::Right(Either::Right(3));
        let mapped = either_either::map_t(nested, |value| value * 2);
        assert_eq!(mapped, Either::Right(Either::Right(6)));
    }

    #[rstest]
    fn hash_set_inner_infers_default_hasher() {
        let nested = Some(HashSet::from([1, 2, 3]));
        assert_eq!(option_hash_set::sum_t::<_, Additive, _>(nested), 6);
    }

    #[rstest]
    fn btree_set_outer_orders_inner_options() {
        let nested = BTreeSet::from([Some(3), None, Some(1)]);
        let mut seen = Vec::new();
        btree_set_option::iter_t(nested, |value| seen.push(value));
        assert_eq!(seen, vec![1, 3]);
    }

    #[rstest]
    fn result_vec_sequence_swaps_layers() {
        let nested: Result<Vec<i32>, String> = Ok(vec![1, 2]);
        assert_eq!(result_vec::sequence_t(nested), vec![Ok(1), Ok(2)]);
    }

    #[rstest]
    fn stack_option_traverse_collects_presence() {
        let outer: crate::persistent::PersistentStack<i32> = [1, 2, 3].into_iter().collect();
        let traversed = stack_option::traverse_t(outer, |value| (value > 0).then_some(value * 10));
        let collected = traversed.map(|stack| stack.iter().copied().collect::<Vec<_>>());
        assert_eq!(collected, Some(vec![10, 20, 30]));
    }
}
