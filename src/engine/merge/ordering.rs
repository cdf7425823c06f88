use serde::Deserialize;
use std::cmp::Ordering;

/// Direction in which every source is sorted and in which the merge yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_newest_first(newest_first: bool) -> Self {
        if newest_first {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    /// Orients a natural key comparison so that `Less` always means "yield first".
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortOrder::Ascending
    }
}

/// Items carrying an epoch-millisecond timestamp usable as a merge key.
pub trait Timestamped {
    fn timestamp(&self) -> u64;
}

impl Timestamped for u64 {
    fn timestamp(&self) -> u64 {
        *self
    }
}

impl<T: Timestamped> Timestamped for &T {
    fn timestamp(&self) -> u64 {
        (**self).timestamp()
    }
}
