//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. By convention `Left` carries
//! the failure or alternative outcome and `Right` the success, so the
//! monadic operations (`map`, `flat_map`) are right-biased.
//!
//! Alongside the type, the module offers aggregate functions over iterators
//! of `Either`: [`lefts`], [`rights`], [`partition_eithers`], and the
//! inside-out exchanges [`traverse`] and [`sequence`].
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|_| format!("not a number: {input}")).into()
//! }
//!
//! let total = parse("40").flat_map(|x| parse("2").map(|y| x + y));
//! assert_eq!(total, Either::Right(42));
//!
//! let message = parse("forty").fold(|error| error, |value| value.to_string());
//! assert_eq!(message, "not a number: forty");
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::Maybe;
use crate::compose::identity;

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
/// By convention:
/// - `Left` is often used to represent failure, error, or the alternative
/// - `Right` is often used to represent success or the primary value
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure or the alternative.
    Left(L),
    /// The right variant, conventionally representing success or the primary value.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Iterates over the right value by reference.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&R> {
        self.right_ref().into_iter()
    }

    /// Returns the left value, or `default` if this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let left: Either<&str, i32> = Either::Left("fallback");
    /// assert_eq!(left.from_left("default"), "fallback");
    ///
    /// let right: Either<&str, i32> = Either::Right(1);
    /// assert_eq!(right.from_left("default"), "default");
    /// ```
    #[inline]
    #[allow(clippy::wrong_self_convention)]
    pub fn from_left(self, default: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => default,
        }
    }

    /// Returns the right value, or `default` if this is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(7);
    /// assert_eq!(right.from_right(0), 7);
    ///
    /// let left: Either<&str, i32> = Either::Left("error");
    /// assert_eq!(left.from_right(0), 0);
    /// ```
    #[inline]
    #[allow(clippy::wrong_self_convention)]
    pub fn from_right(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value, leaving a `Left` untouched.
    ///
    /// `function` is not invoked for a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Same as [`Either::map`], named for symmetry with [`Either::map_left`].
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.map(function)
    }

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Applies an `Either`-returning function to the right value and flattens.
    ///
    /// A `Left` short-circuits: `function` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let positive = |x: i32| if x > 0 { Either::Right(x) } else { Either::Left("not positive") };
    ///
    /// assert_eq!(Either::Right(3).flat_map(positive), Either::Right(3));
    /// assert_eq!(Either::Right(-3).flat_map(positive), Either::Left("not positive"));
    /// assert_eq!(Either::Left("earlier").flat_map(positive), Either::Left("earlier"));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for [`Either::flat_map`].
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.flat_map(function)
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.fold(|x: i32| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, when_left: F, when_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => when_left(value),
            Self::Right(value) => when_right(value),
        }
    }

    // =========================================================================
    // Swap and Unwrap
    // =========================================================================

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a pair of `Option`s.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }

    /// Keeps the right value as a `Maybe`, discarding a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::{Either, Maybe};
    ///
    /// assert_eq!(Either::<&str, i32>::Right(1).into_maybe(), Maybe::Just(1));
    /// assert_eq!(Either::<&str, i32>::Left("e").into_maybe(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn into_maybe(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Just(value),
        }
    }

    /// Distributes this `Either` over the iterable produced by `function`.
    ///
    /// See [`traverse`].
    #[inline]
    pub fn traverse<I, F>(self, function: F) -> Traverse<L, I::IntoIter>
    where
        I: IntoIterator,
        F: FnOnce(R) -> I,
    {
        traverse(self, function)
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a Right.
    #[inline]
    pub fn left_or_default(self) -> L {
        self.from_left(L::default())
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a Left.
    #[inline]
    pub fn right_or_default(self) -> R {
        self.from_right(R::default())
    }
}

// =============================================================================
// Aggregate Operations
// =============================================================================

/// Lazily yields the payloads of every `Left`, in order.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::{Either, lefts};
///
/// let values = vec![Either::Left("a"), Either::Right(1), Either::Left("b")];
/// assert_eq!(lefts(values).collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
pub fn lefts<L, R, I>(eithers: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    eithers.into_iter().filter_map(Either::left)
}

/// Lazily yields the payloads of every `Right`, in order.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::{Either, rights};
///
/// let values = vec![Either::Left("a"), Either::Right(1), Either::Right(2)];
/// assert_eq!(rights(values).collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn rights<L, R, I>(eithers: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    eithers.into_iter().filter_map(Either::right)
}

/// Splits eithers into their left and right payloads in a single pass.
///
/// Both vectors keep encounter order. The input is consumed eagerly.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::{Either, partition_eithers};
///
/// let values = vec![Either::Right(1), Either::Left("a"), Either::Right(2)];
/// assert_eq!(partition_eithers(values), (vec!["a"], vec![1, 2]));
/// ```
pub fn partition_eithers<L, R, I>(eithers: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut left_values = Vec::new();
    let mut right_values = Vec::new();

    for either in eithers {
        match either {
            Either::Left(value) => left_values.push(value),
            Either::Right(value) => right_values.push(value),
        }
    }

    (left_values, right_values)
}

/// Distributes an `Either` over the iterable produced from its right value.
///
/// - `Left(l)` yields exactly one `Left(l)`; `function` is not invoked.
/// - `Right(r)` yields `Right(x)` for every `x` in `function(r)`, lazily
///   and in order. An empty iterable yields nothing.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::{Either, traverse};
///
/// let digits = |n: u32| n.to_string().chars().collect::<Vec<_>>();
///
/// let right: Vec<Either<&str, char>> = traverse(Either::Right(42), digits).collect();
/// assert_eq!(right, vec![Either::Right('4'), Either::Right('2')]);
///
/// let left: Vec<Either<&str, char>> = traverse(Either::Left("e"), digits).collect();
/// assert_eq!(left, vec![Either::Left("e")]);
/// ```
pub fn traverse<L, R, I, F>(either: Either<L, R>, function: F) -> Traverse<L, I::IntoIter>
where
    I: IntoIterator,
    F: FnOnce(R) -> I,
{
    let state = match either {
        Either::Left(value) => TraverseState::Left(Some(value)),
        Either::Right(value) => TraverseState::Right(function(value).into_iter()),
    };
    Traverse { state }
}

/// Flips an `Either` holding an iterable into an iterator of `Either`.
///
/// Equivalent to [`traverse`] with the identity function.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::{Either, sequence};
///
/// let right: Either<&str, Vec<i32>> = Either::Right(vec![1, 2]);
/// assert_eq!(sequence(right).collect::<Vec<_>>(), vec![Either::Right(1), Either::Right(2)]);
///
/// let left: Either<&str, Vec<i32>> = Either::Left("e");
/// assert_eq!(sequence(left).collect::<Vec<_>>(), vec![Either::Left("e")]);
/// ```
pub fn sequence<L, I>(either: Either<L, I>) -> Traverse<L, I::IntoIter>
where
    I: IntoIterator,
{
    traverse(either, identity)
}

/// Iterator returned by [`traverse`] and [`sequence`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Traverse<L, J> {
    state: TraverseState<L, J>,
}

#[derive(Debug, Clone)]
enum TraverseState<L, J> {
    Left(Option<L>),
    Right(J),
}

impl<L, J: Iterator> Iterator for Traverse<L, J> {
    type Item = Either<L, J::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            TraverseState::Left(value) => value.take().map(Either::Left),
            TraverseState::Right(values) => values.next().map(Either::Right),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            TraverseState::Left(value) => {
                let remaining = usize::from(value.is_some());
                (remaining, Some(remaining))
            }
            TraverseState::Right(values) => values.size_hint(),
        }
    }
}

impl<L, J: FusedIterator> FusedIterator for Traverse<L, J> {}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    /// Yields the right value, if any.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.right().into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = std::option::IntoIter<&'a R>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

static_assertions::assert_impl_all!(Either<i32, u8>: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn flat_map_short_circuits_on_left() {
        let calls = Cell::new(0);
        let result: Either<&str, i32> = Either::Left("stop").flat_map(|x: i32| {
            calls.set(calls.get() + 1);
            Either::Right(x + 1)
        });
        assert_eq!(result, Either::Left("stop"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn traverse_left_does_not_invoke_function() {
        let calls = Cell::new(0);
        let collected: Vec<Either<&str, i32>> = traverse(Either::Left("e"), |x: i32| {
            calls.set(calls.get() + 1);
            vec![x]
        })
        .collect();
        assert_eq!(collected, vec![Either::Left("e")]);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn traverse_right_with_empty_iterable_yields_nothing() {
        let collected: Vec<Either<&str, i32>> =
            traverse(Either::Right(3), |_| Vec::<i32>::new()).collect();
        assert!(collected.is_empty());
    }

    #[rstest]
    fn traverse_is_lazy_over_infinite_iterables() {
        let first: Vec<Either<&str, u64>> =
            traverse(Either::Right(10_u64), |start| start..).take(3).collect();
        assert_eq!(
            first,
            vec![Either::Right(10), Either::Right(11), Either::Right(12)]
        );
    }

    #[rstest]
    fn traverse_size_hint_is_exact() {
        let left = sequence(Either::<&str, Vec<i32>>::Left("e"));
        assert_eq!(left.size_hint(), (1, Some(1)));

        let right = sequence(Either::<&str, Vec<i32>>::Right(vec![1, 2, 3]));
        assert_eq!(right.size_hint(), (3, Some(3)));
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }
}
