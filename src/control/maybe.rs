//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, which is either `Just(T)` or
//! `Nothing`. It is the structural replacement for a nullable value: absence
//! is always represented by the `Nothing` variant, never by a panic or a
//! sentinel.
//!
//! Values usually enter at a boundary (a parse, a lookup, a search), flow
//! through `map` / `flat_map` chains, and are finally eliminated with `fold`.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Maybe;
//!
//! let port = Maybe::try_parse_int(" 8080 ")
//!     .filter(|port| *port > 1024)
//!     .map(|port| port + 1);
//! assert_eq!(port, Maybe::Just(8081));
//!
//! let description = port.fold(|port| format!("port {port}"), || "no port".to_string());
//! assert_eq!(description, "port 8081");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Maybe;
///
/// let present: Maybe<i32> = Maybe::Just(21);
/// let absent: Maybe<i32> = Maybe::Nothing;
///
/// assert_eq!(present.map(|x| x * 2), Maybe::Just(42));
/// assert_eq!(absent.map(|x| x * 2), Maybe::Nothing);
/// ```
///
/// Ordering agrees with `Option`: `Nothing < Just(_)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    Nothing,
    /// A present value.
    Just(T),
}

/// Error returned by [`Maybe::into_result`] when the value is `Nothing`.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::{Maybe, NothingError};
///
/// let absent: Maybe<i32> = Maybe::Nothing;
/// assert_eq!(absent.into_result(), Err(NothingError));
/// assert_eq!(format!("{}", NothingError), "expected a value but found Nothing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NothingError;

impl fmt::Display for NothingError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("expected a value but found Nothing")
    }
}

impl std::error::Error for NothingError {}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(42), Maybe::Just(42));
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Just(value)
    }

    /// Converts an `Option` into a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(1)), Maybe::Just(1));
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        value.map_or(Self::Nothing, Self::Just)
    }

    /// Converts anything that may or may not hold a value.
    ///
    /// A bare `T` becomes `Just`; an `Option<T>` keeps its presence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_maybe_null("name"), Maybe::Just("name"));
    /// assert_eq!(Maybe::from_maybe_null(Some("name")), Maybe::Just("name"));
    /// assert_eq!(Maybe::<&str>::from_maybe_null(None), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_maybe_null<V>(value: V) -> Self
    where
        V: Into<Option<T>>,
    {
        Self::from_nullable(value.into())
    }

    /// Returns the first element satisfying `predicate`, or `Nothing`.
    ///
    /// Elements are tested in order and the search stops at the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::try_find(vec![1, 4, 6], |x| x % 2 == 0), Maybe::Just(4));
    /// assert_eq!(Maybe::try_find(vec![1, 3], |x| x % 2 == 0), Maybe::Nothing);
    /// ```
    pub fn try_find<I, P>(values: I, mut predicate: P) -> Self
    where
        I: IntoIterator<Item = T>,
        P: FnMut(&T) -> bool,
    {
        values
            .into_iter()
            .find(|value| predicate(value))
            .into()
    }

    /// Adapts a fallible parser into a `Maybe`.
    ///
    /// A failed parse is ordinary data and becomes `Nothing`; the parser's
    /// error value is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::try_parse("2.5", str::parse::<f64>), Maybe::Just(2.5));
    /// assert_eq!(Maybe::try_parse("abc", str::parse::<f64>), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn try_parse<V, E, F>(value: V, parser: F) -> Self
    where
        F: FnOnce(V) -> Result<T, E>,
    {
        parser(value).ok().into()
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Functor / Monad Operations
    // =========================================================================

    /// Applies `function` to the contained value.
    ///
    /// `function` is not invoked when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just("four").map(str::len), Maybe::Just(4));
    /// assert_eq!(Maybe::<&str>::Nothing.map(str::len), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a `Maybe`-returning function and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing };
    ///
    /// assert_eq!(Maybe::Just(8).flat_map(half).flat_map(half), Maybe::Just(2));
    /// assert_eq!(Maybe::Just(6).flat_map(half).flat_map(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Alias for [`Maybe::flat_map`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.flat_map(function)
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Eliminates the `Maybe` by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.fold(|x| x.to_string(), || "none".to_string());
    /// assert_eq!(describe(Maybe::Just(3)), "3");
    /// assert_eq!(describe(Maybe::Nothing), "none");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, when_just: F, when_nothing: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => when_just(value),
            Self::Nothing => when_nothing(),
        }
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value or computes one from `thunk`.
    ///
    /// `thunk` is only called when the value is absent.
    #[inline]
    pub fn unwrap_or_else<F>(self, thunk: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => thunk(),
        }
    }

    /// Returns `self` if present, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).or(Maybe::Just(2)), Maybe::Just(1));
    /// assert_eq!(Maybe::Nothing.or(Maybe::Just(2)), Maybe::Just(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => alternative,
        }
    }

    /// Returns `self` if present, otherwise the `Maybe` produced by `thunk`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, thunk: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => thunk(),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Nothing`.
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("called `Maybe::unwrap()` on a `Nothing` value"),
        }
    }

    /// Returns the contained value, panicking with `message` if absent.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the value is `Nothing`.
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("{message}"),
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Iterates over the contained value by reference.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Collects the value into a `Vec` of zero or one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(7).to_list(), vec![7]);
    /// assert!(Maybe::<i32>::Nothing.to_list().is_empty());
    /// ```
    #[inline]
    pub fn to_list(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts into a `Result`, using `error` for `Nothing`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` when the value is `Nothing`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        self.into_option().ok_or(error)
    }

    /// Converts into a `Result`, computing the error lazily.
    ///
    /// # Errors
    ///
    /// Returns `Err(error())` when the value is `Nothing`.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.into_option().ok_or_else(error)
    }

    /// Converts into a `Result` with [`NothingError`], so `?` can be used.
    ///
    /// # Errors
    ///
    /// Returns `NothingError` if the value is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::{Maybe, NothingError};
    ///
    /// fn double_first(values: &[i32]) -> Result<i32, NothingError> {
    ///     let first = Maybe::from_nullable(values.first().copied()).into_result()?;
    ///     Ok(first * 2)
    /// }
    ///
    /// assert_eq!(double_first(&[4, 5]), Ok(8));
    /// assert_eq!(double_first(&[]), Err(NothingError));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, NothingError> {
        self.ok_or(NothingError)
    }
}

// =============================================================================
// Parsing and Lookup Adapters
// =============================================================================

impl Maybe<i32> {
    /// Parses a decimal `i32`, ignoring surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::try_parse_int("-12"), Maybe::Just(-12));
    /// assert_eq!(Maybe::try_parse_int("twelve"), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn try_parse_int(text: &str) -> Self {
        Self::try_parse(text.trim(), str::parse::<i32>)
    }
}

#[cfg(feature = "chrono")]
impl Maybe<chrono::NaiveDateTime> {
    /// Parses a timestamp in one of the accepted layouts.
    ///
    /// Accepted: RFC 3339 (converted to UTC), `YYYY-MM-DD HH:MM:SS`,
    /// `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD` (midnight).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Maybe;
    ///
    /// assert!(Maybe::try_parse_date_time("2024-02-29 12:30:00").is_just());
    /// assert!(Maybe::try_parse_date_time("2023-02-29").is_nothing());
    /// ```
    pub fn try_parse_date_time(text: &str) -> Self {
        use chrono::{DateTime, NaiveDate, NaiveDateTime};

        const LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

        let text = text.trim();
        Maybe::try_parse(text, DateTime::parse_from_rfc3339)
            .map(|date_time| date_time.naive_utc())
            .or_else(|| {
                Self::from_nullable(
                    LAYOUTS
                        .iter()
                        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok()),
                )
            })
            .or_else(|| {
                Maybe::try_parse(text, |text| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
                    .flat_map(|date| Self::from_nullable(date.and_hms_opt(0, 0, 0)))
            })
    }
}

/// A key-value container that can be queried without panicking.
///
/// This is the lookup shape consumed by [`Maybe::try_key`].
pub trait KeyLookup<K, V> {
    /// Returns the value bound to `key`, if any.
    fn lookup(&self, key: &K) -> Option<&V>;
}

impl<K: Eq + Hash, V, S: BuildHasher> KeyLookup<K, V> for HashMap<K, V, S> {
    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K: Ord, V> KeyLookup<K, V> for BTreeMap<K, V> {
    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<'a, V> Maybe<&'a V> {
    /// Looks `key` up in `map`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use fpkit::control::Maybe;
    ///
    /// let ports = HashMap::from([("http", 80), ("https", 443)]);
    /// assert_eq!(Maybe::try_key(&"https", &ports), Maybe::Just(&443));
    /// assert_eq!(Maybe::try_key(&"ftp", &ports), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn try_key<K, M>(key: &K, map: &'a M) -> Self
    where
        M: KeyLookup<K, V>,
    {
        map.lookup(key).into()
    }
}

// =============================================================================
// Choose
// =============================================================================

/// Maps each element through `chooser`, keeping only the `Just` results.
///
/// The result is lazy and keeps the original order.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::{Maybe, choose};
///
/// let numbers: Vec<i32> = choose(["1", "x", "3"], Maybe::try_parse_int).collect();
/// assert_eq!(numbers, vec![1, 3]);
/// ```
pub fn choose<I, U, F>(values: I, chooser: F) -> impl Iterator<Item = U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Maybe<U>,
{
    values.into_iter().flat_map(chooser)
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn map_skips_function_on_nothing() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::Nothing.map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(result, Maybe::Nothing);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn unwrap_or_else_is_lazy_when_present() {
        let calls = Cell::new(0);
        let value = Maybe::Just(5).unwrap_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 5);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case("42", Maybe::Just(42))]
    #[case("  7\n", Maybe::Just(7))]
    #[case("", Maybe::Nothing)]
    #[case("4.2", Maybe::Nothing)]
    #[case("99999999999", Maybe::Nothing)]
    fn try_parse_int_cases(#[case] input: &str, #[case] expected: Maybe<i32>) {
        assert_eq!(Maybe::try_parse_int(input), expected);
    }

    #[rstest]
    fn try_find_stops_at_first_match() {
        let inspected = Cell::new(0);
        let found = Maybe::try_find(1.., |x| {
            inspected.set(inspected.get() + 1);
            *x > 2
        });
        assert_eq!(found, Maybe::Just(3));
        assert_eq!(inspected.get(), 3);
    }

    #[rstest]
    fn try_key_reads_btree_map() {
        let map = BTreeMap::from([(1, "one"), (2, "two")]);
        assert_eq!(Maybe::try_key(&2, &map), Maybe::Just(&"two"));
        assert_eq!(Maybe::try_key(&3, &map), Maybe::Nothing);
    }

    #[rstest]
    fn debug_and_display_formatting() {
        assert_eq!(format!("{:?}", Maybe::Just("a")), "Just(\"a\")");
        assert_eq!(format!("{}", Maybe::Just("a")), "Just(a)");
        assert_eq!(format!("{}", Maybe::<i32>::Nothing), "Nothing");
    }

    #[cfg(feature = "chrono")]
    #[rstest]
    #[case("2024-02-29T12:30:00Z", Some((2024, 2, 29, 12, 30, 0)))]
    #[case("2024-02-29T12:30:00+02:00", Some((2024, 2, 29, 10, 30, 0)))]
    #[case("2024-02-29 12:30:00", Some((2024, 2, 29, 12, 30, 0)))]
    #[case("2024-02-29T12:30:00", Some((2024, 2, 29, 12, 30, 0)))]
    #[case("2024-02-29", Some((2024, 2, 29, 0, 0, 0)))]
    #[case("2023-02-29", None)]
    #[case("yesterday", None)]
    fn try_parse_date_time_cases(
        #[case] input: &str,
        #[case] expected: Option<(i32, u32, u32, u32, u32, u32)>,
    ) {
        use chrono::NaiveDate;

        let expected = expected.and_then(|(year, month, day, hour, minute, second)| {
            NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
        });
        assert_eq!(Maybe::try_parse_date_time(input).into_option(), expected);
    }
}
