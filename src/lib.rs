//! # lambars-trans
//!
//! Monad transformer composition over nested containers, driven by
//! zero-sized capability witnesses.
//!
//! ## Overview
//!
//! A value of type `Outer<Inner<A>>` (`Vec<Option<A>>`, `Option<Vec<A>>`,
//! `Either<E, HashSet<A>>`, ...) can be bound, mapped, filtered and folded
//! through both layers at once without writing the nested traversal by hand:
//!
//! - **Kinds**: [`kind::Kind`] maps a witness to its container type
//! - **Witnesses**: [`witness::Witness`] (`pure`, `fold`, `zero`, `plus`)
//!   and [`witness::Bind`] (`bind`) form the five-primitive contract, with
//!   eight provided witnesses
//! - **Numeric witnesses**: [`num::Num`] supplies addition for `sum`
//! - **Engine**: [`trans::Trans`] derives every transformer operation from
//!   the witnesses alone
//! - **Laws**: [`laws`] evaluates the witness and transformer laws on
//!   concrete inputs
//! - **Facade**: [`facade`] fixes the witness pair per module, for example
//!   `facade::vec_option::filter_t`
//!
//! ## Feature Flags
//!
//! - `facade` (default): generated `facade::<outer>_<inner>` modules
//! - `serde`: `Serialize`/`Deserialize` for [`control::Either`] and
//!   [`persistent::PersistentStack`]
//! - `fxhash`: `FxHashSetW`, a hash-set witness over `rustc-hash`
//! - `ahash`: `AHashSetW`, a hash-set witness over `ahash`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_trans::prelude::*;
//!
//! type VecOption = Trans<VecW, OptionW>;
//!
//! let nested = vec![Some(2), None, Some(3), Some(4)];
//! let evens = VecOption::filter(nested, |value| value % 2 == 0);
//!
//! assert_eq!(evens, vec![Some(2), None, None, Some(4)]);
//! assert_eq!(VecOption::sum::<Additive, _>(evens), 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the engine, the witness contract, every provided witness and
/// the numeric witnesses.
///
/// # Usage
///
/// ```rust
/// use lambars_trans::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::Either;
    pub use crate::kind::{Kind, Nested, Of};
    pub use crate::num::{Additive, Num, SaturatingAdd, WrappingAdd};
    pub use crate::persistent::PersistentStack;
    pub use crate::trans::Trans;
    pub use crate::witness::{
        BTreeSetW, Bind, EitherW, HashSetW, OptionW, ResultW, StackW, VecDequeW, VecW, Witness,
    };
}

pub mod control;
pub mod kind;
pub mod laws;
pub mod num;
pub mod persistent;
pub mod trans;
pub mod witness;

#[cfg(feature = "facade")]
pub mod facade;

#[doc(hidden)]
pub use paste;
