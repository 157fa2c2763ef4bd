pub mod memory;
pub mod otp;
pub mod rate_limit;

use chrono::{DateTime, Utc};

pub use memory::MemoryStore;
pub use otp::{OtpError, OtpStore};
pub use rate_limit::{RateLimitError, RateLimitStatus, RateLimiter};

/// Key/value store whose entries stop existing at a deadline.
///
/// Callers own the store and pass `now` explicitly. An expired entry is never
/// returned, whether or not it has been swept yet.
pub trait ExpiringStore<K, V>: Send + Sync {
    fn get(&self, key: &K, now: DateTime<Utc>) -> Option<V>;

    fn set(&self, key: K, value: V, expires_at: DateTime<Utc>);

    fn delete(&self, key: &K) -> Option<V>;

    /// Drops expired entries and returns how many were removed.
    fn sweep_expired(&self, now: DateTime<Utc>) -> usize;

    /// Atomic read-modify-write. `f` sees the live value (`None` if absent or
    /// expired) and returns the new value with its deadline. `f` must not call
    /// back into the store.
    fn update<F>(&self, key: K, now: DateTime<Utc>, f: F) -> V
    where
        F: FnOnce(Option<V>) -> (V, DateTime<Utc>);

    /// Atomic edit of a live entry. `f` mutates the value in place and
    /// returns its result plus whether the entry stays; `false` removes it
    /// under the same lock. Returns `None` without calling `f` when the key is
    /// absent or expired. `f` must not call back into the store.
    fn modify<F, R>(&self, key: K, now: DateTime<Utc>, f: F) -> Option<R>
    where
        F: FnOnce(&mut V) -> (R, bool);
}
