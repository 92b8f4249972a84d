//! Capability witnesses - the minimal algebraic contract of one container.
//!
//! A capability witness is a zero-sized type implementing [`Witness<A>`] for
//! the container it names through [`Kind`]. The trait is deliberately small:
//! every transformer operation in [`Trans`] is derived from these primitives.
//!
//! | Primitive | Meaning |
//! |-----------|---------|
//! | `pure`    | lift a bare value into the container |
//! | `bind`    | sequential composition ([`Bind`]) |
//! | `fold`    | left fold over every element the container holds |
//! | `zero`    | the absorbing "no value" element |
//! | `plus`    | the container's natural append |
//!
//! # Laws
//!
//! Every witness must satisfy:
//!
//! ```text
//! bind(pure(a), f)      == f(a)                          // left identity
//! bind(ma, pure)        == ma                            // right identity
//! bind(bind(ma, f), g)  == bind(ma, |a| bind(f(a), g))   // associativity
//! bind(zero(), f)       == zero()                        // left zero
//! fold(pure(a), s, f)   == f(s, a)
//! fold(zero(), s, f)    == s
//! ```
//!
//! The laws are a precondition of the engine, not something it checks at
//! runtime. [`WitnessLaws`] verifies them for sample inputs.
//!
//! # Provided witnesses
//!
//! | Witness | Container | Element bound |
//! |---------|-----------|---------------|
//! | [`VecW`] | `Vec<A>` | - |
//! | [`VecDequeW`] | `VecDeque<A>` (queue) | - |
//! | [`StackW`] | [`PersistentStack<A>`] | `Clone` |
//! | [`HashSetW<S>`] | `HashSet<A, S>` | `Hash + Eq` |
//! | [`BTreeSetW`] | `BTreeSet<A>` | `Ord` |
//! | [`OptionW`] | `Option<A>` | - |
//! | [`ResultW<E>`] | `Result<A, E>` (try) | `E: Default` |
//! | [`EitherW<L>`] | [`Either<L, A>`] | `L: Default` |
//!
//! [`Trans`]: crate::trans::Trans
//! [`WitnessLaws`]: crate::laws::WitnessLaws
//! [`PersistentStack<A>`]: crate::persistent::PersistentStack
//! [`Either<L, A>`]: crate::control::Either

mod btree_set;
mod either;
mod hash_set;
mod option;
mod result;
mod stack;
mod vec;
mod vec_deque;

pub use btree_set::BTreeSetW;
pub use either::EitherW;
pub use hash_set::HashSetW;
pub use option::OptionW;
pub use result::ResultW;
pub use stack::StackW;
pub use vec::VecW;
pub use vec_deque::VecDequeW;

#[cfg(feature = "ahash")]
pub use hash_set::AHashSetW;
#[cfg(feature = "fxhash")]
pub use hash_set::FxHashSetW;

pub use crate::kind::Kind;
use crate::kind::Of;

/// The capability witness contract for element type `A`.
///
/// Implemented once per container by a zero-sized type. Implementations
/// constrain `A` as their container requires (`impl<A: Ord> Witness<A> for
/// BTreeSetW`). Sequential composition, which relates two element types,
/// lives on [`Bind`].
///
/// # Examples
///
/// ```rust
/// use lambars_trans::witness::{OptionW, VecW, Witness};
///
/// assert_eq!(<VecW as Witness<i32>>::plus(vec![1], vec![2]), vec![1, 2]);
///
/// let absent: Option<i32> = <OptionW as Witness<i32>>::zero();
/// assert_eq!(<OptionW as Witness<i32>>::fold(absent, 0, |sum, value| sum + value), 0);
/// ```
pub trait Witness<A>: Kind {
    /// Lifts a bare value into the container (`Return`).
    fn pure(value: A) -> Self::Of<A>;

    /// Left fold over every element the container logically holds.
    ///
    /// Zero times for absence, once for a scalar wrapper, `n` times for a
    /// collection.
    fn fold<S, F>(container: Self::Of<A>, init: S, function: F) -> S
    where
        F: FnMut(S, A) -> S;

    /// The absorbing element under `bind`.
    fn zero() -> Self::Of<A>;

    /// The container's natural append.
    ///
    /// Concatenation for sequences, union for sets, first present value for
    /// option-like containers. `zero` is its identity.
    fn plus(left: Self::Of<A>, right: Self::Of<A>) -> Self::Of<A>;
}

/// Sequential composition from element type `A` to element type `B`.
///
/// Implementations bound both element types in the `impl` header
/// (`impl<A: Ord, B: Ord> Bind<A, B> for BTreeSetW`). The methods carry no
/// where-clause on `Self`, so inside them the container types of a witness
/// with a type parameter (`ResultW<E>`, `HashSetW<S>`) stay concrete.
///
/// # Examples
///
/// ```rust
/// use lambars_trans::witness::{Bind, ResultW, VecW};
///
/// let doubled = VecW::bind(vec![1, 2], |value| vec![value, value * 10]);
/// assert_eq!(doubled, vec![1, 10, 2, 20]);
///
/// let parsed = <ResultW<String> as Bind<&str, i32>>::bind(Ok("7"), |text| {
///     text.parse::<i32>().map_err(|error| error.to_string())
/// });
/// assert_eq!(parsed, Ok(7));
/// ```
pub trait Bind<A, B>: Witness<A> + Witness<B> {
    /// Applies `function` to every element and joins the results.
    ///
    /// For an empty or absent container `function` is never called and the
    /// result is the zero of `Self::Of<B>` (or the container's own failure
    /// case, which is carried over unchanged).
    fn bind<F>(container: Of<Self, A>, function: F) -> Of<Self, B>
    where
        F: FnMut(A) -> Of<Self, B>;

    /// Maps every element, defined as `bind` followed by `pure`.
    #[inline]
    fn map<F>(container: Of<Self, A>, mut function: F) -> Of<Self, B>
    where
        F: FnMut(A) -> B,
    {
        <Self as Bind<A, B>>::bind(container, move |value| {
            <Self as Witness<B>>::pure(function(value))
        })
    }
}

/// Joins the results of `function` over an iterator of elements with
/// `W::plus`, starting from `W::zero()`.
///
/// Shared by the multi-element witnesses whose `bind` cannot collect
/// directly into the result container.
#[inline]
pub(crate) fn concat_map<W, A, B, I, F>(elements: I, mut function: F) -> W::Of<B>
where
    W: Witness<B>,
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> W::Of<B>,
{
    elements
        .into_iter()
        .fold(W::zero(), |joined, element| W::plus(joined, function(element)))
}

static_assertions::assert_eq_size!(VecW, ());
static_assertions::assert_eq_size!(VecDequeW, ());
static_assertions::assert_eq_size!(StackW, ());
static_assertions::assert_eq_size!(HashSetW, ());
static_assertions::assert_eq_size!(BTreeSetW, ());
static_assertions::assert_eq_size!(OptionW, ());
static_assertions::assert_eq_size!(ResultW<String>, ());
static_assertions::assert_eq_size!(EitherW<String>, ());

static_assertions::assert_impl_all!(VecW: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(HashSetW: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(ResultW<std::rc::Rc<String>>: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(EitherW<std::rc::Rc<String>>: Copy, Send, Sync, Default);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provided_map_matches_bind_then_pure() {
        let mapped = <VecW as Bind<i32, String>>::map(vec![1, 2, 3], |value| value.to_string());
        assert_eq!(mapped, vec!["1", "2", "3"]);
    }

    #[test]
    fn concat_map_joins_with_plus() {
        let joined: Vec<i32> = concat_map::<VecW, _, _, _, _>(1..=3, |value| vec![value; 2]);
        assert_eq!(joined, vec![1, 1, 2, 2, 3, 3]);
    }
}
