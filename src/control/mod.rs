//! Control structures missing from the standard library.
//!
//! - [`Either`]: a right-biased value that is one of two types, the container
//!   behind [`EitherW`](crate::witness::EitherW)

mod either;

pub use either::Either;
