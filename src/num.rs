//! Numeric witnesses - addition and its identity for one scalar type.
//!
//! A numeric witness is the third type class the transformer engine can
//! depend on, used only by [`Trans::sum`]. Like container witnesses it is a
//! zero-sized type, so the choice of addition is made at compile time:
//!
//! - [`Additive`]: `+` with `Default` as zero, for every `Add + Default` type
//! - [`SaturatingAdd`]: integer addition clamped at the type's bounds
//! - [`WrappingAdd`]: integer addition modulo the type's width
//!
//! # Laws
//!
//! ```text
//! add(zero(), a) == a == add(a, zero())
//! add(add(a, b), c) == add(a, add(b, c))
//! ```
//!
//! Floating point addition satisfies associativity only approximately.
//!
//! # Examples
//!
//! ```rust
//! use lambars_trans::num::{Additive, Num, SaturatingAdd};
//!
//! assert_eq!(<Additive as Num<i32>>::add(2, 3), 5);
//! assert_eq!(<SaturatingAdd as Num<u8>>::add(200, 100), u8::MAX);
//! ```
//!
//! [`Trans::sum`]: crate::trans::Trans::sum

use std::ops::Add;

/// Addition with an identity element for the scalar type `A`.
pub trait Num<A> {
    /// The additive identity.
    fn zero() -> A;

    /// Adds two values.
    fn add(left: A, right: A) -> A;
}

/// Plain `+`, with `A::default()` as zero.
///
/// Integer overflow behaves as `+` does: it panics in debug builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Additive;

impl<A: Add<Output = A> + Default> Num<A> for Additive {
    #[inline]
    fn zero() -> A {
        A::default()
    }

    #[inline]
    fn add(left: A, right: A) -> A {
        left + right
    }
}

/// Integer addition that clamps at the numeric bounds instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SaturatingAdd;

/// Integer addition that wraps around at the numeric bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WrappingAdd;

macro_rules! impl_integer_num {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Num<$integer> for SaturatingAdd {
                #[inline]
                fn zero() -> $integer {
                    0
                }

                #[inline]
                fn add(left: $integer, right: $integer) -> $integer {
                    left.saturating_add(right)
                }
            }

            impl Num<$integer> for WrappingAdd {
                #[inline]
                fn zero() -> $integer {
                    0
                }

                #[inline]
                fn add(left: $integer, right: $integer) -> $integer {
                    left.wrapping_add(right)
                }
            }
        )*
    };
}

impl_integer_num!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
