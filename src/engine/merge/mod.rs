pub mod cursor;
pub mod helpers;
pub mod kway_iter;
pub mod ordering;

pub use cursor::PositionedCursor;
pub use helpers::{merge_sorted, paginate};
pub use kway_iter::{KWayMergeIter, TimestampMerge};
pub use ordering::{SortOrder, Timestamped};
