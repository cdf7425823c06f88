use super::kway_iter::KWayMergeIter;
use super::ordering::SortOrder;

/// Merges already sorted sources and collects at most `limit` items.
///
/// Only the selected items are pulled from the sources, so `limit` also
/// bounds merges over unbounded sources.
pub fn merge_sorted<S, J, F, K>(sources: S, key_fn: F, order: SortOrder, limit: usize) -> Vec<J::Item>
where
    S: IntoIterator<Item = J>,
    J: IntoIterator,
    F: FnMut(&J::Item) -> K,
    K: Ord,
{
    let mut merger = KWayMergeIter::with_order(sources, key_fn, order);
    let mut merged = Vec::with_capacity(limit.min(1000));

    while merged.len() < limit {
        let Ok(item) = merger.next_item() else {
            break;
        };
        merged.push(item);
    }

    merged
}

/// Skips `offset` items then takes up to `limit` of the rest.
///
/// With `limit` unset the iterator is drained, so callers must pass a limit
/// for unbounded iterators.
pub fn paginate<T>(
    iter: impl Iterator<Item = T>,
    offset: Option<usize>,
    limit: Option<usize>,
) -> Vec<T> {
    let skipped = iter.skip(offset.unwrap_or(0));
    match limit {
        Some(lim) => skipped.take(lim).collect(),
        None => skipped.collect(),
    }
}
