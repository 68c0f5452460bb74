//! Applicative type class - lifting values and combining independent effects.
//!
//! # Laws
//!
//! ```text
//! F::pure(a).map2(F::pure(b), f) == F::pure(f(a, b))
//! fa.map2(F::pure(()), |a, _| a) == fa
//! ```

use super::Functor;
#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A functor that can lift plain values and combine two independent values.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Maybe;
/// use fpkit::typeclass::Applicative;
///
/// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(lifted, Maybe::Just(42));
///
/// let sum = Maybe::Just(1).map2(Maybe::Just(2), |x, y| x + y);
/// assert_eq!(sum, Maybe::Just(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts a value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side is absent (`Nothing`, `Left`, `None`), the result is
    /// absent and `function` is not invoked.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;
}

#[cfg(feature = "control")]
impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just(function(first, second)),
            _ => Maybe::Nothing,
        }
    }
}

/// The first `Left` encountered wins.
#[cfg(feature = "control")]
impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(first), Either::Right(second)) => Either::Right(function(first, second)),
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Some(function(self?, other?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[cfg(feature = "control")]
    #[rstest]
    fn either_map2_keeps_first_left() {
        let first: Either<&str, i32> = Either::Left("first");
        let second: Either<&str, i32> = Either::Left("second");
        assert_eq!(first.map2(second, |x, y| x + y), Either::Left("first"));

        let right: Either<&str, i32> = Either::Right(1);
        assert_eq!(right.map2(second, |x, y| x + y), Either::Left("second"));
    }

    #[rstest]
    fn option_map2_requires_both() {
        assert_eq!(Some(2).map2(Some(3), |x, y| x * y), Some(6));
        assert_eq!(Some(2).map2(None::<i32>, |x, y| x * y), None);
    }
}
