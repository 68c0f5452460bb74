//! Functor type class - mapping over container values.
//!
//! A functor is a container whose contents can be transformed without
//! changing its shape: a `Just` stays a `Just`, a `Left` stays a `Left`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```

use super::TypeConstructor;
#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A type class for types that can be mapped over.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Maybe;
/// use fpkit::typeclass::Functor;
///
/// let x: Maybe<i32> = Maybe::Just(5);
/// let y: Maybe<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Maybe::Just("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Maybe;
    /// use fpkit::typeclass::Functor;
    ///
    /// let x = Maybe::Just("hello".to_string());
    /// assert_eq!(x.fmap_ref(|s| s.len()), Maybe::Just(5));
    /// assert!(x.is_just());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
