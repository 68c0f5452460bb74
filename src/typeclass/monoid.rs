//! Monoid type class - semigroups with an identity element.
//!
//! A type `T` is a monoid if it has an associative `combine` (from
//! [`Semigroup`]) and an identity element `empty`.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a                                 // left identity
//! a.combine(T::empty()) == a                                 // right identity
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))       // associativity
//! ```
//!
//! # Absent operands
//!
//! [`Monoid::combine_nullable`] accepts operands that may be missing
//! altogether (`Option<Self>`). An absent operand is not the same thing as
//! the identity element, so the rule is spelled out as three cases:
//!
//! | first | second | result |
//! |---|---|---|
//! | `None` | `None` | `Self::empty()` |
//! | `None` | `Some(b)` | `b`, returned as is |
//! | `Some(a)` | `None` | `a`, returned as is |
//! | `Some(a)` | `Some(b)` | `a.combine(b)` |
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert_eq!(String::combine_nullable(None, Some(String::from("x"))), "x");
//! assert_eq!(String::combine_nullable(None, None), "");
//! ```

use super::semigroup::Semigroup;
#[cfg(feature = "control")]
use crate::control::Maybe;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::Monoid;
///
/// let parts = vec![vec![1], vec![2, 3], vec![]];
/// assert_eq!(Vec::combine_all(parts), vec![1, 2, 3]);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines two possibly absent operands.
    ///
    /// Both absent yields `Self::empty()`. Exactly one absent yields the
    /// other operand unchanged, without calling `combine`. Only when both
    /// are present is `combine` applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Monoid;
    ///
    /// let tail = Some(vec![3, 4]);
    /// assert_eq!(Vec::combine_nullable(Some(vec![1, 2]), tail.clone()), vec![1, 2, 3, 4]);
    /// assert_eq!(Vec::combine_nullable(None, tail), vec![3, 4]);
    /// assert_eq!(Vec::<i32>::combine_nullable(None, None), Vec::<i32>::new());
    /// ```
    fn combine_nullable(first: Option<Self>, second: Option<Self>) -> Self
    where
        Self: Sized,
    {
        match (first, second) {
            (None, None) => Self::empty(),
            (None, Some(second)) => second,
            (Some(first), None) => first,
            (Some(first), Some(second)) => first.combine(second),
        }
    }

    /// Combines all elements in order, starting from the identity element.
    ///
    /// An empty iterator yields `Self::empty()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Monoid;
    ///
    /// let words = ["a", "b", "c"].map(String::from);
    /// assert_eq!(String::combine_all(words), "abc");
    /// assert_eq!(String::combine_all(Vec::<String>::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Folds possibly absent elements with [`Monoid::combine_nullable`].
    ///
    /// Absent elements are skipped; the result is never absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Monoid;
    ///
    /// let parts = vec![Some(String::from("a")), None, Some(String::from("b"))];
    /// assert_eq!(String::combine_all_nullable(parts), "ab");
    /// ```
    fn combine_all_nullable<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Option<Self>>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                Self::combine_nullable(Some(accumulator), element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Maybe / Option Implementations
// =============================================================================

/// `Nothing` is the identity element.
#[cfg(feature = "control")]
impl<T: Semigroup> Monoid for Maybe<T> {
    fn empty() -> Self {
        Self::Nothing
    }
}

/// `None` is the identity element.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Tracked {
        text: String,
        combined: usize,
    }

    impl Semigroup for Tracked {
        fn combine(self, other: Self) -> Self {
            Self {
                text: self.text + &other.text,
                combined: self.combined + other.combined + 1,
            }
        }
    }

    impl Monoid for Tracked {
        fn empty() -> Self {
            Self {
                text: String::new(),
                combined: 0,
            }
        }
    }

    fn tracked(text: &str) -> Tracked {
        Tracked {
            text: text.to_string(),
            combined: 0,
        }
    }

    #[rstest]
    fn combine_nullable_returns_present_operand_without_combining() {
        assert_eq!(Tracked::combine_nullable(None, Some(tracked("x"))), tracked("x"));
        assert_eq!(Tracked::combine_nullable(Some(tracked("x")), None), tracked("x"));
    }

    #[rstest]
    fn combine_nullable_both_absent_is_empty() {
        assert_eq!(Tracked::combine_nullable(None, None), Tracked::empty());
    }

    #[rstest]
    fn combine_nullable_both_present_combines_once() {
        let result = Tracked::combine_nullable(Some(tracked("a")), Some(tracked("b")));
        assert_eq!(result.text, "ab");
        assert_eq!(result.combined, 1);
    }

    #[rstest]
    #[case(vec![], "")]
    #[case(vec![Some("a")], "a")]
    #[case(vec![None, None], "")]
    #[case(vec![Some("a"), None, Some("b"), Some("c")], "abc")]
    fn string_combine_all_nullable(#[case] parts: Vec<Option<&str>>, #[case] expected: &str) {
        let parts = parts.into_iter().map(|part| part.map(String::from));
        assert_eq!(String::combine_all_nullable(parts), expected);
    }

    #[rstest]
    fn string_is_empty_value() {
        assert!(String::empty().is_empty_value());
        assert!(!String::from("hello").is_empty_value());
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn maybe_combine_all_skips_nothing() {
        let values = vec![
            Maybe::Just(String::from("a")),
            Maybe::Nothing,
            Maybe::Just(String::from("b")),
        ];
        assert_eq!(Maybe::combine_all(values), Maybe::Just(String::from("ab")));
        assert_eq!(Maybe::<String>::combine_all(Vec::new()), Maybe::Nothing);
    }
}
