use super::ordering::SortOrder;
use std::cmp::Ordering;
use std::mem;

/// A source paired with its current, not-yet-consumed item.
///
/// A cursor only exists while its source still has a current item: `open`
/// returns `None` for an empty source and `advance` consumes the cursor once
/// the source runs dry.
pub struct PositionedCursor<I: Iterator, K> {
    source: I,
    current: I::Item,
    key: K,
    index: usize,
    order: SortOrder,
}

impl<I: Iterator, K: Ord> PositionedCursor<I, K> {
    /// Pulls the first item of `source`. `index` is the registration order,
    /// used to break ties between equal keys.
    pub fn open<F>(mut source: I, index: usize, key_fn: &mut F, order: SortOrder) -> Option<Self>
    where
        F: FnMut(&I::Item) -> K,
    {
        let current = source.next()?;
        let key = key_fn(&current);
        Some(Self {
            source,
            current,
            key,
            index,
            order,
        })
    }

    pub fn current(&self) -> &I::Item {
        &self.current
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Takes the current item and moves the source forward by one.
    ///
    /// Returns the taken item and the repositioned cursor, or `None` in place
    /// of the cursor when the source is exhausted.
    pub fn advance<F>(mut self, key_fn: &mut F) -> (I::Item, Option<Self>)
    where
        F: FnMut(&I::Item) -> K,
    {
        match self.source.next() {
            Some(next) => {
                self.key = key_fn(&next);
                let taken = mem::replace(&mut self.current, next);
                (taken, Some(self))
            }
            None => (self.current, None),
        }
    }

    /// Lower and upper bound of items still held by this cursor, including
    /// the current one.
    pub fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (
            lower.saturating_add(1),
            upper.and_then(|u| u.checked_add(1)),
        )
    }

    /// Comparison in yield order: `Less` means `self` is yielded before `other`.
    fn yield_order(&self, other: &Self) -> Ordering {
        self.order
            .apply(self.key.cmp(&other.key))
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl<I: Iterator, K: Ord> PartialEq for PositionedCursor<I, K> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.key == other.key
    }
}

impl<I: Iterator, K: Ord> Eq for PositionedCursor<I, K> {}

impl<I: Iterator, K: Ord> Ord for PositionedCursor<I, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; the cursor to yield first must compare greatest.
        self.yield_order(other).reverse()
    }
}

impl<I: Iterator, K: Ord> PartialOrd for PositionedCursor<I, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
