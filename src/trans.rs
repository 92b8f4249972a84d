//! The composition engine - monad transformer operations over `Outer<Inner<A>>`.
//!
//! [`Trans<O, I>`] is generic over two capability witnesses, the outer
//! container `O` and the inner container `I`. Every operation is derived
//! from the witnesses' primitives (`pure`, `bind`, `fold`, `zero`, `plus`)
//! and contains no container-specific logic, so it works for any pair of
//! witnesses that satisfy the [witness laws](crate::witness).
//!
//! # Derivations
//!
//! ```text
//! bind(n, f)       = O.bind(n, |ia| O.pure(I.bind(ia, f)))
//! map(n, f)        = bind(n, |a| I.pure(f(a)))
//! fold(n, s, step) = O.fold(n, s, |s, ia| I.fold(ia, s, step))
//! filter(n, p)     = bind(n, |a| if p(&a) { I.pure(a) } else { I.zero() })
//! lift(ia)         = O.pure(ia)
//! ```
//!
//! `exists`, `for_all`, `iter`, `count` and `sum` are all `fold` with a
//! particular step; `select` and `select_many` are the query-position
//! spellings of `map` and `bind`-then-`map`.
//!
//! The outer layer is opened exactly once per traversal, so its structure
//! (list length, option presence, either branch) is preserved: only the
//! inner values change. When the outer layer is already empty or in its
//! error branch, the supplied function is never called.
//!
//! # Examples
//!
//! ```rust
//! use lambars_trans::num::Additive;
//! use lambars_trans::trans::Trans;
//! use lambars_trans::witness::{OptionW, VecW};
//!
//! type VecOption = Trans<VecW, OptionW>;
//!
//! let nested = vec![Some(2), None, Some(3), Some(4)];
//! let evens = VecOption::filter(nested, |value| value % 2 == 0);
//! assert_eq!(evens, vec![Some(2), None, None, Some(4)]);
//!
//! assert_eq!(VecOption::sum::<Additive, _>(evens.clone()), 6);
//! assert_eq!(VecOption::count(evens), 2);
//! ```
//!
//! # Preconditions
//!
//! The engine assumes the witness laws and does not check them at runtime.
//! `filter` in particular relies on `I.zero()` being absorbing. Panics raised
//! by user functions propagate unchanged.

use std::fmt;
use std::marker::PhantomData;

use crate::kind::{Kind, Nested, Of};
use crate::num::Num;
use crate::witness::{Bind, Witness};

/// Monad transformer operations for the outer witness `O` and the inner
/// witness `I`.
///
/// `Trans` is zero-sized and never needs to be constructed: all operations
/// are associated functions, monomorphised for the two witnesses.
pub struct Trans<O, I>(PhantomData<fn() -> (O, I)>);

impl<O: Kind, I: Kind> Trans<O, I> {
    // =========================================================================
    // Bind / Map
    // =========================================================================

    /// Binds through both layers: each inner `A` is replaced by the inner
    /// container `function` returns for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_trans::control::Either;
    /// use lambars_trans::trans::Trans;
    /// use lambars_trans::witness::{EitherW, OptionW};
    ///
    /// type EitherOption = Trans<EitherW<String>, OptionW>;
    ///
    /// let nested: Either<String, Option<i32>> = Either::Right(Some(-1));
    /// let result = EitherOption::bind(nested, |value| (value > 0).then_some(value));
    /// assert_eq!(result, Either::Right(None));
    /// ```
    pub fn bind<A, B, F>(nested: Nested<O, I, A>, mut function: F) -> Nested<O, I, B>
    where
        O: Bind<Of<I, A>, Of<I, B>>,
        I: Bind<A, B>,
        F: FnMut(A) -> Of<I, B>,
    {
        <O as Bind<Of<I, A>, Of<I, B>>>::bind(nested, |inner| {
            <O as Witness<Of<I, B>>>::pure(<I as Bind<A, B>>::bind(inner, &mut function))
        })
    }

    /// Maps every inner element, defined as `bind` with a `pure` re-wrap.
    pub fn map<A, B, F>(nested: Nested<O, I, A>, mut function: F) -> Nested<O, I, B>
    where
        O: Bind<Of<I, A>, Of<I, B>>,
        I: Bind<A, B>,
        F: FnMut(A) -> B,
    {
        Self::bind::<A, B, _>(nested, |value| <I as Witness<B>>::pure(function(value)))
    }

    /// Query-position spelling of [`Trans::map`].
    #[inline]
    pub fn select<A, B, F>(nested: Nested<O, I, A>, function: F) -> Nested<O, I, B>
    where
        O: Bind<Of<I, A>, Of<I, B>>,
        I: Bind<A, B>,
        F: FnMut(A) -> B,
    {
        Self::map::<A, B, F>(nested, function)
    }

    /// Binds and then projects the pair of the original and bound values.
    ///
    /// Equivalent to `bind(n, |a| I.bind(binder(a), |b| I.pure(project(a, b))))`.
    /// `A` is cloned once for the binder and once per bound value.
    pub fn select_many<A, B, C, F, P>(
        nested: Nested<O, I, A>,
        mut binder: F,
        mut project: P,
    ) -> Nested<O, I, C>
    where
        O: Bind<Of<I, A>, Of<I, C>>,
        I: Bind<A, C> + Bind<B, C>,
        A: Clone,
        F: FnMut(A) -> Of<I, B>,
        P: FnMut(A, B) -> C,
    {
        Self::bind::<A, C, _>(nested, |value: A| {
            let bound = binder(value.clone());
            <I as Bind<B, C>>::bind(bound, |inner_value| {
                <I as Witness<C>>::pure(project(value.clone(), inner_value))
            })
        })
    }

    // =========================================================================
    // Filter
    // =========================================================================

    /// Replaces every inner element failing `predicate` with the inner zero.
    ///
    /// The outer structure is untouched: a list keeps its length, elements
    /// that were already absent stay absent.
    pub fn filter<A, P>(nested: Nested<O, I, A>, mut predicate: P) -> Nested<O, I, A>
    where
        O: Bind<Of<I, A>, Of<I, A>>,
        I: Bind<A, A>,
        P: FnMut(&A) -> bool,
    {
        Self::bind::<A, A, _>(nested, |value| {
            if predicate(&value) {
                <I as Witness<A>>::pure(value)
            } else {
                <I as Witness<A>>::zero()
            }
        })
    }

    // =========================================================================
    // Fold and its specialisations
    // =========================================================================

    /// Folds every inner element: the outer fold order, then each inner
    /// container's own order.
    pub fn fold<A, S, F>(nested: Nested<O, I, A>, init: S, mut function: F) -> S
    where
        O: Witness<Of<I, A>>,
        I: Witness<A>,
        F: FnMut(S, A) -> S,
    {
        <O as Witness<Of<I, A>>>::fold(nested, init, |state, inner| {
            <I as Witness<A>>::fold(inner, state, &mut function)
        })
    }

    /// Returns `true` if any inner element satisfies `predicate`.
    ///
    /// `fold` with boolean or; `predicate` is not called once a match is found.
    pub fn exists<A, P>(nested: Nested<O, I, A>, mut predicate: P) -> bool
    where
        O: Witness<Of<I, A>>,
        I: Witness<A>,
        P: FnMut(&A) -> bool,
    {
        Self::fold::<A, _, _>(nested, false, |found, value| found || predicate(&value))
    }

    /// Returns `true` if every inner element satisfies `predicate`.
    ///
    /// Vacuously `true` when there are no inner elements.
    pub fn for_all<A, P>(nested: Nested<O, I, A>, mut predicate: P) -> bool
    where
        O: Witness<Of<I, A>>,
        I: Witness<A>,
        P: FnMut(&A) -> bool,
    {
        Self::fold::<A, _, _>(nested, true, |holds, value| holds && predicate(&value))
    }

    /// Runs `action` on every inner element in fold order.
    pub fn iter<A, F>(nested: Nested<O, I, A>, mut action: F)
    where
        O: Witness<Of<I, A>>,
        I: Witness<A>,
        F: FnMut(A),
    {
        Self::fold::<A, _, _>(nested, (), |(), value| action(value));
    }

    /// Counts the inner elements.
    pub fn count<A>(nested: Nested<O, I, A>) -> usize
    where
        O: Witness<Of<I, A>>,
        I: Witness<A>,
    {
        Self::fold::<A, _, _>(nested, 0, |count, _| count + 1)
    }

    /// Sums the inner elements with the numeric witness `N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_trans::num::{Additive, SaturatingAdd};
    /// use lambars_trans::trans::Trans;
    /// use lambars_trans::witness::{OptionW, VecW};
    ///
    /// type OptionVec = Trans<OptionW, VecW>;
    ///
    /// assert_eq!(OptionVec::sum::<Additive, _>(Some(vec![1, 2, 3])), 6);
    /// assert_eq!(OptionVec::sum::<SaturatingAdd, u8>(Some(vec![200, 100])), u8::MAX);
    /// assert_eq!(OptionVec::sum::<Additive, i32>(None), 0);
    /// ```
    pub fn sum<N, A>(nested: Nested<O, I, A>) -> A
    where
        O: Witness<Of<I, A>>,
        I: Witness<A>,
        N: Num<A>,
    {
        Self::fold::<A, _, _>(nested, N::zero(), N::add)
    }

    // =========================================================================
    // Lift
    // =========================================================================

    /// Lifts an inner container into the outer layer.
    #[inline]
    pub fn lift<A>(inner: Of<I, A>) -> Nested<O, I, A>
    where
        O: Witness<Of<I, A>>,
    {
        <O as Witness<Of<I, A>>>::pure(inner)
    }

    /// Lifts a bare value through both layers.
    #[inline]
    pub fn lift_value<A>(value: A) -> Nested<O, I, A>
    where
        O: Witness<Of<I, A>>,
        I: Witness<A>,
    {
        Self::lift::<A>(<I as Witness<A>>::pure(value))
    }

    // =========================================================================
    // Layer swapping
    // =========================================================================

    /// Swaps the two layers: `Outer<Inner<A>>` becomes `Inner<Outer<A>>`.
    ///
    /// Built with `I.bind` over an accumulated outer container, so the inner
    /// witness decides how alternatives combine: `Vec<Option<A>>` becomes
    /// `None` if any element is absent, `Option<Vec<A>>` becomes the list of
    /// every choice.
    ///
    /// Only the elements reachable through `O.fold` take part, so an outer
    /// failure payload (`Err(e)`, `Left(l)`) is not carried over: a failed
    /// outer layer sequences to `I.pure(O.zero())`. Each step clones the
    /// accumulated outer container, making the swap quadratic in the outer
    /// length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_trans::trans::Trans;
    /// use lambars_trans::witness::{OptionW, VecW};
    ///
    /// assert_eq!(Trans::<VecW, OptionW>::sequence(vec![Some(1), Some(2)]), Some(vec![1, 2]));
    /// assert_eq!(Trans::<VecW, OptionW>::sequence(vec![Some(1), None]), None);
    /// assert_eq!(Trans::<OptionW, VecW>::sequence(Some(vec![1, 2])), vec![Some(1), Some(2)]);
    /// ```
    pub fn sequence<A>(nested: Nested<O, I, A>) -> Of<I, Of<O, A>>
    where
        O: Witness<Of<I, A>> + Witness<A>,
        I: Bind<A, Of<O, A>> + Bind<Of<O, A>, Of<O, A>>,
        Of<I, A>: Clone,
        Of<O, A>: Clone,
    {
        let start = <I as Witness<Of<O, A>>>::pure(<O as Witness<A>>::zero());
        <O as Witness<Of<I, A>>>::fold(nested, start, |collected, inner| {
            <I as Bind<Of<O, A>, Of<O, A>>>::bind(collected, |prefix| {
                <I as Bind<A, Of<O, A>>>::bind(inner.clone(), |value| {
                    <I as Witness<Of<O, A>>>::pure(<O as Witness<A>>::plus(
                        prefix.clone(),
                        <O as Witness<A>>::pure(value),
                    ))
                })
            })
        })
    }

    /// Maps every element of an outer container into the inner layer and
    /// swaps the layers: `sequence(O.map(outer, function))`.
    pub fn traverse<A, B, F>(outer: Of<O, A>, function: F) -> Of<I, Of<O, B>>
    where
        O: Bind<A, Of<I, B>> + Witness<B>,
        I: Bind<B, Of<O, B>> + Bind<Of<O, B>, Of<O, B>>,
        Of<I, B>: Clone,
        Of<O, B>: Clone,
        F: FnMut(A) -> Of<I, B>,
    {
        Self::sequence::<B>(<O as Bind<A, Of<I, B>>>::map(outer, function))
    }
}

impl<O, I> Clone for Trans<O, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, I> Copy for Trans<O, I> {}

impl<O, I> Default for Trans<O, I> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<O, I> fmt::Debug for Trans<O, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Trans")
            .field("outer", &std::any::type_name::<O>())
            .field("inner", &std::any::type_name::<I>())
            .finish()
    }
}
