//! Witness for [`Either<L, A>`](crate::control::Either).

use std::fmt;
use std::marker::PhantomData;

use super::{Bind, Witness};
use crate::control::Either;
use crate::kind::Kind;

/// Capability witness for `Either<L, A>`, biased to the right.
///
/// `Left` is the error branch: `bind` never calls its function on it. The
/// zero is `Left(L::default())`.
pub struct EitherW<L>(PhantomData<fn() -> L>);

impl<L> Kind for EitherW<L> {
    type Of<A> = Either<L, A>;
}

impl<A, L: Default> Witness<A> for EitherW<L> {
    #[inline]
    fn pure(value: A) -> Self::Of<A> {
        Either::Right(value)
    }

    #[inline]
    fn fold<S, F>(container: Self::Of<A>, init: S, mut function: F) -> S
    where
        F: FnMut(S, A) -> S,
    {
        match container {
            Either::Right(value) => function(init, value),
            Either::Left(_) => init,
        }
    }

    #[inline]
    fn zero() -> Self::Of<A> {
        Either::Left(L::default())
    }

    #[inline]
    fn plus(left: Self::Of<A>, right: Self::Of<A>) -> Self::Of<A> {
        left.or(right)
    }
}

impl<A, B, L: Default> Bind<A, B> for EitherW<L> {
    #[inline]
    fn bind<F>(container: Either<L, A>, function: F) -> Either<L, B>
    where
        F: FnMut(A) -> Either<L, B>,
    {
        container.and_then(function)
    }
}

impl<L> Clone for EitherW<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for EitherW<L> {}

impl<L> Default for EitherW<L> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<L> fmt::Debug for EitherW<L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("EitherW")
    }
}
