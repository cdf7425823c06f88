use super::cursor::PositionedCursor;
use super::ordering::{SortOrder, Timestamped};
use crate::engine::errors::MergeError;
use std::collections::BinaryHeap;
use std::fmt;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Lazily merges N individually sorted sources into one globally sorted sequence.
///
/// The active set is a binary heap of [`PositionedCursor`]s, so each step costs
/// O(log k) for k live sources. Every source must already be sorted by
/// `key_fn` in the merge's [`SortOrder`]; this is trusted, not checked.
///
/// Equal keys are yielded in registration order of their sources, and items
/// from one source keep their relative order, so the merge is stable.
pub struct KWayMergeIter<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    heap: BinaryHeap<PositionedCursor<I, K>>,
    key_fn: F,
    order: SortOrder,
    registered: usize,
}

/// Merge keyed on [`Timestamped::timestamp`].
pub type TimestampMerge<I> = KWayMergeIter<I, fn(&<I as Iterator>::Item) -> u64, u64>;

impl<I, F, K> KWayMergeIter<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    /// Builds an ascending merge. Empty sources are dropped immediately.
    pub fn new<S, J>(sources: S, key_fn: F) -> Self
    where
        S: IntoIterator<Item = J>,
        J: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        Self::with_order(sources, key_fn, SortOrder::Ascending)
    }

    pub fn with_order<S, J>(sources: S, mut key_fn: F, order: SortOrder) -> Self
    where
        S: IntoIterator<Item = J>,
        J: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        let mut heap = BinaryHeap::new();
        let mut registered = 0;

        for (index, source) in sources.into_iter().enumerate() {
            registered += 1;
            match PositionedCursor::open(source.into_iter(), index, &mut key_fn, order) {
                Some(cursor) => heap.push(cursor),
                None => trace!(
                    target: "socnet_feed::merge",
                    source_index = index,
                    "Dropping empty source"
                ),
            }
        }

        debug!(
            target: "socnet_feed::merge",
            total_sources = registered,
            initialized_entries = heap.len(),
            ascending = order.is_ascending(),
            "KWayMergeIter initialized"
        );

        Self {
            heap,
            key_fn,
            order,
            registered,
        }
    }

    /// True while any source still holds an unconsumed item.
    pub fn has_next(&self) -> bool {
        !self.heap.is_empty()
    }

    /// Yields the front item and advances its source.
    ///
    /// Fails with [`MergeError::EmptySequence`] once every source is exhausted.
    pub fn next_item(&mut self) -> Result<I::Item, MergeError> {
        let front = self.heap.pop().ok_or(MergeError::EmptySequence)?;
        let index = front.index();
        let (item, cursor) = front.advance(&mut self.key_fn);

        match cursor {
            Some(cursor) => {
                trace!(
                    target: "socnet_feed::merge",
                    source_index = index,
                    "Re-inserting advanced cursor"
                );
                self.heap.push(cursor);
            }
            None => {
                trace!(
                    target: "socnet_feed::merge",
                    source_index = index,
                    remaining = self.heap.len(),
                    "Source exhausted, cursor removed"
                );
            }
        }

        Ok(item)
    }

    /// Removal of yielded items is not supported; sources are read-only.
    pub fn remove(&mut self) -> Result<(), MergeError> {
        Err(MergeError::UnsupportedOperation(
            "remove on a merged sequence".to_string(),
        ))
    }

    /// The item the next step would yield.
    pub fn peek(&self) -> Option<&I::Item> {
        self.heap.peek().map(|cursor| cursor.current())
    }

    /// Number of sources still holding an item.
    pub fn active_sources(&self) -> usize {
        self.heap.len()
    }

    /// Number of sources supplied at construction, empty ones included.
    pub fn registered_sources(&self) -> usize {
        self.registered
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }
}

impl<I> KWayMergeIter<I, fn(&I::Item) -> u64, u64>
where
    I: Iterator,
    I::Item: Timestamped,
{
    pub fn by_timestamp<S, J>(sources: S, order: SortOrder) -> Self
    where
        S: IntoIterator<Item = J>,
        J: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        fn timestamp_of<T: Timestamped>(item: &T) -> u64 {
            item.timestamp()
        }
        Self::with_order(sources, timestamp_of::<I::Item> as fn(&I::Item) -> u64, order)
    }
}

impl<I, F, K> Iterator for KWayMergeIter<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_item().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heap
            .iter()
            .map(|cursor| cursor.size_hint())
            .fold((0, Some(0)), |(lo, hi), (l, h)| {
                let hi = match (hi, h) {
                    (Some(a), Some(b)) => a.checked_add(b),
                    _ => None,
                };
                (lo.saturating_add(l), hi)
            })
    }
}

impl<I, F, K> FusedIterator for KWayMergeIter<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
}

impl<I, F, K> fmt::Debug for KWayMergeIter<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KWayMergeIter")
            .field("registered", &self.registered)
            .field("active", &self.heap.len())
            .field("order", &self.order)
            .finish()
    }
}
