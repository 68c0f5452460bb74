//! Monad type class - sequencing dependent computations.
//!
//! `flat_map` runs a computation that depends on the previous result and
//! flattens the nested context. For `Maybe` and `Either` an absent value
//! (`Nothing` / `Left`) short-circuits the rest of the chain.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! F::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(F::pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::Applicative;
#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A type class for types that support sequencing of dependent computations.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Maybe;
/// use fpkit::typeclass::Monad;
///
/// fn halve(n: i32) -> Maybe<i32> {
///     if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
/// }
///
/// assert_eq!(Monad::flat_map(Maybe::Just(12), halve), Maybe::Just(6));
/// assert_eq!(Monad::flat_map(Maybe::Just(5), halve), Maybe::Nothing);
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is absent, the absence propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

#[cfg(feature = "control")]
impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(feature = "control")]
impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        Self::flat_map(self, function)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[cfg(feature = "control")]
    #[rstest]
    fn maybe_then_propagates_nothing() {
        assert_eq!(Monad::then(Maybe::Just(1), Maybe::Just("next")), Maybe::Just("next"));
        assert_eq!(Monad::then(Maybe::<i32>::Nothing, Maybe::Just("next")), Maybe::Nothing);
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn either_and_then_short_circuits() {
        let left: Either<&str, i32> = Either::Left("stop");
        let result = Monad::and_then(left, |x| Either::<&str, i32>::Right(x * 2));
        assert_eq!(result, Either::Left("stop"));
    }

    #[rstest]
    fn option_then_returns_next() {
        assert_eq!(Monad::then(Some(1), Some("hello")), Some("hello"));
        assert_eq!(Monad::then(None::<i32>, Some("hello")), None);
    }
}
