//! Lazy, single-pass partitioning of an iterator.
//!
//! [`partition`] returns two iterators over one shared source. Each group
//! pulls from the source on demand; an element that belongs to the other
//! group is parked in that group's buffer until it is asked for. Every
//! source element is pulled and tested exactly once. Once a group is dropped
//! its buffer is released and elements that would have gone there are
//! discarded.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// State shared by the two groups of a partition.
struct PartitionState<I: Iterator, P> {
    source: I,
    predicate: P,
    matching: VecDeque<I::Item>,
    non_matching: VecDeque<I::Item>,
    matching_open: bool,
    non_matching_open: bool,
}

impl<I: Iterator, P> PartitionState<I, P> {
    fn buffer(&mut self, matching: bool) -> &mut VecDeque<I::Item> {
        if matching {
            &mut self.matching
        } else {
            &mut self.non_matching
        }
    }

    const fn is_open(&self, matching: bool) -> bool {
        if matching {
            self.matching_open
        } else {
            self.non_matching_open
        }
    }

    fn close(&mut self, matching: bool) {
        if matching {
            self.matching_open = false;
        } else {
            self.non_matching_open = false;
        }
        let buffer = self.buffer(matching);
        buffer.clear();
        buffer.shrink_to_fit();
    }
}

impl<I, P> PartitionState<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    fn next_for(&mut self, matching: bool) -> Option<I::Item> {
        if let Some(element) = self.buffer(matching).pop_front() {
            return Some(element);
        }

        loop {
            let element = self.source.next()?;
            if (self.predicate)(&element) == matching {
                return Some(element);
            }
            if self.is_open(!matching) {
                self.buffer(!matching).push_back(element);
            }
        }
    }
}

/// One of the two groups returned by [`partition`].
///
/// Pulling from a group whose elements are all on the other side keeps
/// buffering the other side while that side is alive; on an infinite source
/// with no further match this does not terminate.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PartitionGroup<I: Iterator, P> {
    state: Rc<RefCell<PartitionState<I, P>>>,
    matching: bool,
}

impl<I, P> PartitionGroup<I, P>
where
    I: Iterator,
{
    /// Returns `true` for the group of elements that satisfied the predicate.
    #[must_use]
    pub const fn is_matching(&self) -> bool {
        self.matching
    }
}

impl<I, P> Iterator for PartitionGroup<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.borrow_mut().next_for(self.matching)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let state = self.state.borrow();
        let buffered = if self.matching {
            state.matching.len()
        } else {
            state.non_matching.len()
        };
        let (_, upper) = state.source.size_hint();
        (buffered, upper.and_then(|upper| upper.checked_add(buffered)))
    }
}

impl<I: Iterator, P> Drop for PartitionGroup<I, P> {
    fn drop(&mut self) {
        self.state.borrow_mut().close(self.matching);
    }
}

impl<I: Iterator, P> fmt::Debug for PartitionGroup<I, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        formatter
            .debug_struct("PartitionGroup")
            .field("matching", &self.matching)
            .field("buffered_matching", &state.matching.len())
            .field("buffered_non_matching", &state.non_matching.len())
            .finish_non_exhaustive()
    }
}

/// Splits `source` into the elements that satisfy `predicate` and those
/// that do not.
///
/// Both groups are lazy and keep the original relative order. The source is
/// traversed once in total, however the two groups are interleaved.
///
/// # Examples
///
/// ```rust
/// use fpkit::sequence::partition;
///
/// let (even, odd) = partition(1..=6, |x| x % 2 == 0);
/// assert_eq!(even.collect::<Vec<_>>(), vec![2, 4, 6]);
/// assert_eq!(odd.collect::<Vec<_>>(), vec![1, 3, 5]);
/// ```
///
/// Groups work on infinite sources as long as each requested element exists:
///
/// ```rust
/// use fpkit::sequence::partition;
///
/// let (small, large) = partition(0.., |x| x % 10 < 5);
/// assert_eq!(large.take(3).collect::<Vec<_>>(), vec![5, 6, 7]);
/// assert_eq!(small.take(6).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 10]);
/// ```
pub fn partition<T, P>(
    source: T,
    predicate: P,
) -> (PartitionGroup<T::IntoIter, P>, PartitionGroup<T::IntoIter, P>)
where
    T: IntoIterator,
    P: FnMut(&T::Item) -> bool,
{
    let state = Rc::new(RefCell::new(PartitionState {
        source: source.into_iter(),
        predicate,
        matching: VecDeque::new(),
        non_matching: VecDeque::new(),
        matching_open: true,
        non_matching_open: true,
    }));

    (
        PartitionGroup {
            state: Rc::clone(&state),
            matching: true,
        },
        PartitionGroup {
            state,
            matching: false,
        },
    )
}

static_assertions::assert_not_impl_any!(
    PartitionGroup<std::vec::IntoIter<i32>, fn(&i32) -> bool>: Send, Sync
);
