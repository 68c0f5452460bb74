//! Lazy helpers over ordinary iterators.
//!
//! - [`partition`]: Split one source into two lazy groups, pulling each element once
//! - [`choose`]: Map to [`Maybe`](crate::control::Maybe) and keep the `Just` payloads
//! - [`scan`]: Running fold that returns every intermediate state
//! - [`is_null_or_empty`]: Check an optional sequence without consuming more than one element
//!
//! The same operations are available in method position through
//! [`SequenceExt`].
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Maybe;
//! use fpkit::sequence::SequenceExt;
//!
//! let parsed: Vec<i32> = ["1", "x", "3"]
//!     .into_iter()
//!     .choose(Maybe::try_parse_int)
//!     .collect();
//! assert_eq!(parsed, vec![1, 3]);
//!
//! let (even, odd) = (1..=4).partition_by(|x| x % 2 == 0);
//! assert_eq!(even.collect::<Vec<_>>(), vec![2, 4]);
//! assert_eq!(odd.collect::<Vec<_>>(), vec![1, 3]);
//! ```

mod partition;
mod scan;

pub use crate::control::choose;
pub use partition::{PartitionGroup, partition};
pub use scan::scan;

use crate::control::Maybe;

/// Returns `true` if `source` is absent or yields no elements.
///
/// At most one element is pulled, so infinite sources are fine.
///
/// # Examples
///
/// ```rust
/// use fpkit::sequence::is_null_or_empty;
///
/// assert!(is_null_or_empty(None::<Vec<i32>>));
/// assert!(is_null_or_empty(Some(Vec::<i32>::new())));
/// assert!(!is_null_or_empty(Some(0..)));
/// ```
pub fn is_null_or_empty<I: IntoIterator>(source: Option<I>) -> bool {
    source.is_none_or(|source| source.into_iter().next().is_none())
}

/// Method-position access to the sequence helpers.
///
/// The names differ from [`Iterator::partition`] and [`Iterator::scan`],
/// which are eager and stateful-closure based respectively.
pub trait SequenceExt: Iterator + Sized {
    /// See [`partition`].
    fn partition_by<P>(self, predicate: P) -> (PartitionGroup<Self, P>, PartitionGroup<Self, P>)
    where
        P: FnMut(&Self::Item) -> bool,
    {
        partition(self, predicate)
    }

    /// See [`scan`].
    fn scan_states<S, F>(self, seed: S, folder: F) -> Vec<S>
    where
        S: Clone,
        F: FnMut(S, Self::Item) -> S,
    {
        scan(self, seed, folder)
    }

    /// See [`choose`].
    fn choose<U, F>(self, chooser: F) -> impl Iterator<Item = U>
    where
        F: FnMut(Self::Item) -> Maybe<U>,
    {
        choose(self, chooser)
    }
}

impl<I: Iterator> SequenceExt for I {}
