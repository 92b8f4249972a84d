//! Higher-Kinded Type emulation through zero-sized witnesses.
//!
//! Rust does not natively support Higher-Kinded Types: a trait cannot
//! abstract over `Option<_>` and `Vec<_>` as type constructors. This module
//! inverts the usual encoding. Instead of asking a container for its own
//! constructor, a zero-sized *witness* type names the constructor through a
//! Generic Associated Type:
//!
//! ```text
//! OptionW::Of<A>  == Option<A>
//! VecW::Of<A>     == Vec<A>
//! ResultW<E>::Of<A> == Result<A, E>
//! ```
//!
//! Because the witness carries no data, generic code can be instantiated
//! with any pair of witnesses and is fully monomorphised: there is no
//! runtime type inspection, no virtual call and no boxing.
//!
//! # Example
//!
//! ```rust
//! use lambars_trans::kind::{Kind, Nested, Of};
//! use lambars_trans::witness::{OptionW, VecW};
//!
//! fn empty<W: Kind>() -> Of<W, i32>
//! where
//!     Of<W, i32>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<i32> = empty::<OptionW>();
//! assert_eq!(none, None);
//!
//! let nested: Nested<VecW, OptionW, i32> = vec![Some(1), None];
//! assert_eq!(nested.len(), 2);
//! ```

/// A type constructor, named by a zero-sized witness.
///
/// # Laws
///
/// For any `W: Kind`, `W::Of<A>` must be the same constructor for every `A`:
/// only the element type varies. A witness never stores data, so every value
/// of `W` is interchangeable with every other.
pub trait Kind {
    /// The constructor applied to the element type `A`.
    ///
    /// For example, `<OptionW as Kind>::Of<i32>` is `Option<i32>`.
    type Of<A>;
}

/// Shorthand for `<W as Kind>::Of<A>`.
pub type Of<W, A> = <W as Kind>::Of<A>;

/// The subject of every transformer operation: `Outer<Inner<A>>`.
pub type Nested<O, I, A> = Of<O, Of<I, A>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::witness::{EitherW, HashSetW, OptionW, ResultW, VecW};
    use rstest::rstest;
    use std::collections::HashSet;

    // =========================================================================
    // Type-level tests (compile-time verification)
    // =========================================================================

    #[test]
    fn option_witness_names_option() {
        fn assert_of<W: Kind<Of<i32> = Option<i32>>>() {}
        assert_of::<OptionW>();
    }

    #[test]
    fn result_witness_preserves_error_type() {
        fn assert_of<E, B>()
        where
            ResultW<E>: Kind<Of<B> = Result<B, E>>,
        {
        }

        assert_of::<String, bool>();
        assert_of::<(), Vec<u8>>();
    }

    #[test]
    fn either_witness_preserves_left_type() {
        fn assert_of<W: Kind<Of<u8> = crate::control::Either<String, u8>>>() {}
        assert_of::<EitherW<String>>();
    }

    #[test]
    fn nested_alias_composes_outer_and_inner() {
        let nested: Nested<VecW, OptionW, i32> = vec![Some(1), None, Some(3)];
        let as_plain: Vec<Option<i32>> = nested;
        assert_eq!(as_plain.len(), 3);
    }

    #[rstest]
    #[case(vec![1, 2, 2, 3], 3)]
    #[case(vec![], 0)]
    #[case(vec![7, 7, 7], 1)]
    fn hash_set_witness_names_std_hash_set(#[case] values: Vec<i32>, #[case] expected: usize) {
        let set: Of<HashSetW, i32> = values.into_iter().collect::<HashSet<i32>>();
        assert_eq!(set.len(), expected);
    }
}
