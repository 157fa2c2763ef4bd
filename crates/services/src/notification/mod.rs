pub mod aggregator;
pub mod bucket;
pub mod relative_time;

pub use aggregator::{NotificationAggregator, UnreadCounts};
pub use bucket::{GroupedView, Section, TimeBucket};
pub use relative_time::format_relative_time;
