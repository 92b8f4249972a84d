//! Runtime verification of the witness and transformer laws.
//!
//! The engine assumes every witness is lawful and never checks it while
//! running. This module lets a witness author (or a test suite) evaluate the
//! laws on concrete inputs and get back a [`LawViolation`] naming the law, the
//! witness, and the two sides that disagreed.
//!
//! Each evaluated law emits a `trace` event and each violation a `debug`
//! event through [`tracing`], both carrying `law` and `witness` fields.
//!
//! # Examples
//!
//! ```rust
//! use lambars_trans::laws::{TransLaws, WitnessLaws};
//! use lambars_trans::witness::{OptionW, VecW};
//!
//! assert!(WitnessLaws::<VecW>::check_all(1, vec![1, 2, 3]).is_ok());
//! assert!(TransLaws::<VecW, OptionW>::check_all(1, vec![Some(1), None]).is_ok());
//! ```

use std::fmt::{self, Debug};
use std::marker::PhantomData;

use thiserror::Error;
use tracing::{debug, trace};

use crate::kind::{Kind, Nested, Of};
use crate::num::Num;
use crate::trans::Trans;
use crate::witness::{Bind, Witness};

/// The laws the checker knows how to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// `bind(pure(a), f) == f(a)`
    LeftIdentity,
    /// `bind(ma, pure) == ma`
    RightIdentity,
    /// `bind(bind(ma, f), g) == bind(ma, |a| bind(f(a), g))`
    Associativity,
    /// `bind(zero(), f) == zero()`
    LeftZero,
    /// `fold(pure(a), s, f) == f(s, a)`
    FoldPure,
    /// `fold(zero(), s, f) == s`
    FoldZero,
    /// `map(ma, f) == bind(ma, |a| pure(f(a)))`
    MapAsBind,
    /// Filtering with a constant `false` empties every inner container.
    FilterAbsorption,
    /// `exists` and `for_all` agree with the folds they are defined by.
    FoldSpecialisation,
    /// `sum` equals summing the flattened elements.
    SumFlatten,
    /// Lifting an inner container neither adds nor removes elements.
    LiftRoundTrip,
}

impl fmt::Display for Law {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftIdentity => "left identity",
            Self::RightIdentity => "right identity",
            Self::Associativity => "associativity",
            Self::LeftZero => "left zero",
            Self::FoldPure => "fold of pure",
            Self::FoldZero => "fold of zero",
            Self::MapAsBind => "map as bind",
            Self::FilterAbsorption => "filter absorption",
            Self::FoldSpecialisation => "fold specialisation",
            Self::SumFlatten => "sum of flattened elements",
            Self::LiftRoundTrip => "lift round trip",
        };
        formatter.write_str(name)
    }
}

/// A law that did not hold for a concrete input.
///
/// # Examples
///
/// ```rust
/// use lambars_trans::laws::{Law, LawViolation};
///
/// let violation = LawViolation {
///     law: Law::LeftZero,
///     witness: "MyW",
///     detail: "[1] != []".to_string(),
/// };
/// assert_eq!(violation.to_string(), "MyW violates left zero: [1] != []");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{witness} violates {law}: {detail}")]
pub struct LawViolation {
    /// The law that failed.
    pub law: Law,
    /// Type name of the witness (or witness pair) under test.
    pub witness: &'static str,
    /// Both sides of the failed equation, rendered with `Debug`.
    pub detail: String,
}

fn verify<T>(law: Law, witness: &'static str, left: &T, right: &T) -> Result<(), LawViolation>
where
    T: PartialEq + Debug,
{
    trace!(%law, witness, "evaluating law");
    if left == right {
        return Ok(());
    }
    debug!(%law, witness, ?left, ?right, "law violated");
    Err(LawViolation {
        law,
        witness,
        detail: format!("{left:?} != {right:?}"),
    })
}

// =============================================================================
// WitnessLaws
// =============================================================================

/// Law checks for a single capability witness `W`.
pub struct WitnessLaws<W>(PhantomData<fn() -> W>);

impl<W: Kind> WitnessLaws<W> {
    fn name() -> &'static str {
        std::any::type_name::<W>()
    }

    /// `bind(pure(value), function) == function(value)`
    pub fn left_identity<A, B, F>(value: A, mut function: F) -> Result<(), LawViolation>
    where
        W: Bind<A, B>,
        A: Clone,
        Of<W, B>: PartialEq + Debug,
        F: FnMut(A) -> Of<W, B>,
    {
        let left = <W as Bind<A, B>>::bind(<W as Witness<A>>::pure(value.clone()), &mut function);
        let right = function(value);
        verify(Law::LeftIdentity, Self::name(), &left, &right)
    }

    /// `bind(container, pure) == container`
    pub fn right_identity<A>(container: Of<W, A>) -> Result<(), LawViolation>
    where
        W: Bind<A, A>,
        Of<W, A>: Clone + PartialEq + Debug,
    {
        let left = <W as Bind<A, A>>::bind(container.clone(), <W as Witness<A>>::pure);
        verify(Law::RightIdentity, Self::name(), &left, &container)
    }

    /// `bind(bind(container, first), second) == bind(container, |a| bind(first(a), second))`
    pub fn associativity<A, B, C, F, G>(
        container: Of<W, A>,
        mut first: F,
        mut second: G,
    ) -> Result<(), LawViolation>
    where
        W: Bind<A, B> + Bind<B, C> + Bind<A, C>,
        Of<W, A>: Clone,
        Of<W, C>: PartialEq + Debug,
        F: FnMut(A) -> Of<W, B>,
        G: FnMut(B) -> Of<W, C>,
    {
        let left = <W as Bind<B, C>>::bind(
            <W as Bind<A, B>>::bind(container.clone(), &mut first),
            &mut second,
        );
        let right = <W as Bind<A, C>>::bind(container, |value| {
            <W as Bind<B, C>>::bind(first(value), &mut second)
        });
        verify(Law::Associativity, Self::name(), &left, &right)
    }

    /// `bind(zero(), function) == zero()`
    pub fn left_zero<A, B, F>(function: F) -> Result<(), LawViolation>
    where
        W: Bind<A, B>,
        Of<W, B>: PartialEq + Debug,
        F: FnMut(A) -> Of<W, B>,
    {
        let left = <W as Bind<A, B>>::bind(<W as Witness<A>>::zero(), function);
        let right = <W as Witness<B>>::zero();
        verify(Law::LeftZero, Self::name(), &left, &right)
    }

    /// `fold(pure(value), init, function) == function(init, value)`
    pub fn fold_pure<A, S, F>(value: A, init: S, mut function: F) -> Result<(), LawViolation>
    where
        W: Witness<A>,
        A: Clone,
        S: Clone + PartialEq + Debug,
        F: FnMut(S, A) -> S,
    {
        let left = <W as Witness<A>>::fold(
            <W as Witness<A>>::pure(value.clone()),
            init.clone(),
            &mut function,
        );
        let right = function(init, value);
        verify(Law::FoldPure, Self::name(), &left, &right)
    }

    /// `fold(zero(), init, function) == init`
    pub fn fold_zero<A, S, F>(init: S, function: F) -> Result<(), LawViolation>
    where
        W: Witness<A>,
        S: Clone + PartialEq + Debug,
        F: FnMut(S, A) -> S,
    {
        let left = <W as Witness<A>>::fold(<W as Witness<A>>::zero(), init.clone(), function);
        verify(Law::FoldZero, Self::name(), &left, &init)
    }

    /// Evaluates every witness law, using `value` and `container` as samples.
    ///
    /// Stops at the first violation.
    pub fn check_all<A>(value: A, container: Of<W, A>) -> Result<(), LawViolation>
    where
        W: Bind<A, A>,
        A: Clone,
        Of<W, A>: Clone + PartialEq + Debug,
    {
        Self::left_identity::<A, A, _>(value.clone(), |_| container.clone())?;
        Self::left_identity::<A, A, _>(value.clone(), <W as Witness<A>>::pure)?;
        Self::right_identity::<A>(container.clone())?;
        Self::associativity::<A, A, A, _, _>(
            container.clone(),
            |element: A| {
                <W as Witness<A>>::plus(
                    <W as Witness<A>>::pure(element.clone()),
                    <W as Witness<A>>::pure(element),
                )
            },
            |_| container.clone(),
        )?;
        Self::left_zero::<A, A, _>(<W as Witness<A>>::pure)?;
        Self::fold_pure::<A, usize, _>(value, 0, |count, _| count + 1)?;
        Self::fold_zero::<A, usize, _>(0, |count, _| count + 1)
    }
}

// =============================================================================
// TransLaws
// =============================================================================

/// Law checks for the transformer built from the witnesses `O` and `I`.
pub struct TransLaws<O, I>(PhantomData<fn() -> (O, I)>);

impl<O: Kind, I: Kind> TransLaws<O, I> {
    fn name() -> &'static str {
        std::any::type_name::<Trans<O, I>>()
    }

    /// `bind(lift_value(value), function) == lift(function(value))`
    pub fn left_identity<A, B, F>(value: A, mut function: F) -> Result<(), LawViolation>
    where
        O: Bind<Of<I, A>, Of<I, B>>,
        I: Bind<A, B>,
        A: Clone,
        Nested<O, I, B>: PartialEq + Debug,
        F: FnMut(A) -> Of<I, B>,
    {
        let lifted = Trans::<O, I>::lift_value::<A>(value.clone());
        let left = Trans::<O, I>::bind::<A, B, _>(lifted, &mut function);
        let right = Trans::<O, I>::lift::<B>(function(value));
        verify(Law::LeftIdentity, Self::name(), &left, &right)
    }

    /// `bind(nested, I.pure) == nested`
    pub fn right_identity<A>(nested: Nested<O, I, A>) -> Result<(), LawViolation>
    where
        O: Bind<Of<I, A>, Of<I, A>>,
        I: Bind<A, A>,
        Nested<O, I, A>: Clone + PartialEq + Debug,
    {
        let left = Trans::<O, I>::bind::<A, A, _>(nested.clone(), <I as Witness<A>>::pure);
        verify(Law::RightIdentity, Self::name(), &left, &nested)
    }

    /// `bind(bind(nested, first), second) == bind(nested, |a| I.bind(first(a), second))`
    pub fn associativity<A, B, C, F, G>(
        nested: Nested<O, I, A>,
        mut first: F,
        mut second: G,
    ) -> Result<(), LawViolation>
    where
        O: Bind<Of<I, A>, Of<I, B>> + Bind<Of<I, B>, Of<I, C>> + Bind<Of<I, A>, Of<I, C>>,
        I: Bind<A, B> + Bind<B, C> + Bind<A, C>,
        Nested<O, I, A>: Clone,
        Nested<O, I, C>: PartialEq + Debug,
        F: FnMut(A) -> Of<I, B>,
        G: FnMut(B) -> Of<I, C>,
    {
        let left = Trans::<O, I>::bind::<B, C, _>(
            Trans::<O, I>::bind::<A, B, _>(nested.clone(), &mut first),
            &mut second,
        );
        let right = Trans::<O, I>::bind::<A, C, _>(nested, |value| {
            <I as Bind<B, C>>::bind(first(value), &mut second)
        });
        verify(Law::Associativity, Self::name(), &left, &right)
    }

    /// `map(nested, function) == bind(nested, |a| I.pure(function(a)))`
    pub fn map_as_bind<A, B, F>(
        nested: Nested<O, I, A>,
        mut function: F,
    ) -> Result<(), LawViolation>
    where
        O: Bind<Of<I, A>, Of<I, B>>,
        I: Bind<A, B>,
        Nested<O, I, A>: Clone,
        Nested<O, I, B>: PartialEq + Debug,
        F: FnMut(A) -> B,
    {
        let left = Trans::<O, I>::map::<A, B, _>(nested.clone(), &mut function);
        let right = Trans::<O, I>::bind::<A, B, _>(nested, |value| {
            <I as Witness<B>>::pure(function(value))
        });
        verify(Law::MapAsBind, Self::name(), &left, &right)
    }

    /// Filtering with a constant `false` predicate replaces every inner
    /// container with the result of binding it to `I.zero()`, leaving the
    /// outer shape intact.
    pub fn filter_absorption<A>(nested: Nested<O, I, A>) -> Result<(), LawViolation>
    where
        O: Bind<Of<I, A>, Of<I, A>>,
        I: Bind<A, A>,
        Nested<O, I, A>: Clone + PartialEq + Debug,
    {
        let left = Trans::<O, I>::filter::<A, _>(nested.clone(), |_| false);
        let right = <O as Bind<Of<I, A>, Of<I, A>>>::map(nested, |inner| {
            <I as Bind<A, A>>::bind(inner, |_| <I as Witness<A>>::zero())
        });
        verify(Law::FilterAbsorption, Self::name(), &left, &right)
    }

    /// `exists` and `for_all` agree with their defining folds for `predicate`.
    pub fn fold_specialisation<A, P>(
        nested: Nested<O, I, A>,
        mut predicate: P,
    ) -> Result<(), LawViolation>
    where
        O: Witness<Of<I, A>>,
        I: Witness<A>,
        Nested<O, I, A>: Clone,
        P: FnMut(&A) -> bool,
    {
        let exists = Trans::<O, I>::exists::<A, _>(nested.clone(), &mut predicate);
        let exists_by_fold = Trans::<O, I>::fold::<A, _, _>(nested.clone(), false, |found, value| {
            found || predicate(&value)
        });
        verify(Law::FoldSpecialisation, Self::name(), &exists, &exists_by_fold)?;

        let for_all = Trans::<O, I>::for_all::<A, _>(nested.clone(), &mut predicate);
        let for_all_by_fold = Trans::<O, I>::fold::<A, _, _>(nested, true, |holds, value| {
            holds && predicate(&value)
        });
        verify(Law::FoldSpecialisation, Self::name(), &for_all, &for_all_by_fold)
    }

    /// `sum::<N>(nested)` equals summing the flattened elements with `N`.
    pub fn sum_flatten<N, A>(nested: Nested<O, I, A>) -> Result<(), LawViolation>
    where
        O: Witness<Of<I, A>>,
        I: Witness<A>,
        N: Num<A>,
        A: PartialEq + Debug,
        Nested<O, I, A>: Clone,
    {
        let summed = Trans::<O, I>::sum::<N, A>(nested.clone());
        let flattened = Trans::<O, I>::fold::<A, _, _>(nested, Vec::new(), |mut elements, value| {
            elements.push(value);
            elements
        });
        let expected = flattened.into_iter().fold(N::zero(), N::add);
        verify(Law::SumFlatten, Self::name(), &summed, &expected)
    }

    /// Folding `lift(inner)` yields exactly the elements of folding `inner`.
    pub fn lift_round_trip<A>(inner: Of<I, A>) -> Result<(), LawViolation>
    where
        O: Witness<Of<I, A>>,
        I: Witness<A>,
        A: PartialEq + Debug,
        Of<I, A>: Clone,
    {
        let push = |mut elements: Vec<A>, value: A| {
            elements.push(value);
            elements
        };
        let lifted = Trans::<O, I>::lift::<A>(inner.clone());
        let through_lift = Trans::<O, I>::fold::<A, _, _>(lifted, Vec::new(), push);
        let direct = <I as Witness<A>>::fold(inner, Vec::new(), push);
        verify(Law::LiftRoundTrip, Self::name(), &through_lift, &direct)
    }

    /// Evaluates every transformer law that needs no numeric witness.
    ///
    /// Stops at the first violation.
    pub fn check_all<A>(value: A, nested: Nested<O, I, A>) -> Result<(), LawViolation>
    where
        O: Bind<Of<I, A>, Of<I, A>>,
        I: Bind<A, A>,
        A: Clone + PartialEq + Debug,
        Of<I, A>: Clone,
        Nested<O, I, A>: Clone + PartialEq + Debug,
    {
        Self::left_identity::<A, A, _>(value.clone(), <I as Witness<A>>::pure)?;
        Self::right_identity::<A>(nested.clone())?;
        Self::associativity::<A, A, A, _, _>(
            nested.clone(),
            <I as Witness<A>>::pure,
            |_| <I as Witness<A>>::pure(value.clone()),
        )?;
        Self::map_as_bind::<A, A, _>(nested.clone(), |element| element)?;
        Self::filter_absorption::<A>(nested.clone())?;
        Self::fold_specialisation::<A, _>(nested, |element| *element == value)?;
        Self::lift_round_trip::<A>(<I as Witness<A>>::pure(value))
    }
}
