pub mod notification;
pub mod store;

pub use notification::{GroupedView, NotificationAggregator, TimeBucket, UnreadCounts};
pub use store::{ExpiringStore, MemoryStore, OtpStore, RateLimiter};
