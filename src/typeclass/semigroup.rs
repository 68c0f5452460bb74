//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```

#[cfg(feature = "control")]
use crate::control::Maybe;

/// A type class for types with an associative binary operation.
///
/// The operation need not be commutative: for `String` and `Vec` the left
/// operand always comes first.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Semigroup;
    ///
    /// let a = String::from("Hello, ");
    /// let b = String::from("World!");
    /// assert_eq!(a.combine_ref(&b), "Hello, World!");
    /// assert_eq!(a, "Hello, ");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").combine_n(3), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces all elements in an iterator, or `None` if it is empty.
    ///
    /// For a total version see [`Monoid::combine_all`](super::Monoid::combine_all).
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(Self::combine)
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

// =============================================================================
// Maybe / Option Implementations
// =============================================================================

/// Two present values combine their payloads; an absent side is skipped.
#[cfg(feature = "control")]
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(first), Self::Just(second)) => Self::Just(first.combine(second)),
            (Self::Just(value), Self::Nothing) | (Self::Nothing, Self::Just(value)) => {
                Self::Just(value)
            }
            (Self::Nothing, Self::Nothing) => Self::Nothing,
        }
    }
}

impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(first), Some(second)) => Some(first.combine(second)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}
