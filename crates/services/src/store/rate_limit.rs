use chrono::{DateTime, TimeDelta, Utc};
use linsta_config::RateLimitSettings;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use super::{ExpiringStore, MemoryStore};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateLimitError {
    #[error("Too many requests, retry in {retry_after_secs}s")]
    Exceeded { retry_after_secs: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCounter {
    count: u32,
    window_start: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitStatus {
    pub limit: u32,
    pub remaining: u32,
    pub reset_at: DateTime<Utc>,
}

/// Fixed-window request counter keyed by client (usually the remote IP).
pub struct RateLimiter<S = MemoryStore<String, WindowCounter>> {
    store: S,
    settings: RateLimitSettings,
}

impl RateLimiter {
    pub fn new(settings: RateLimitSettings) -> Self {
        Self::with_store(MemoryStore::new(), settings)
    }
}

impl<S> RateLimiter<S>
where
    S: ExpiringStore<String, WindowCounter>,
{
    pub fn with_store(store: S, settings: RateLimitSettings) -> Self {
        Self { store, settings }
    }

    fn window(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(
            u32::try_from(self.settings.window_secs).unwrap_or(u32::MAX),
        ))
    }

    /// Records one request for `key` and reports whether it is allowed.
    pub fn check(&self, key: &str, now: DateTime<Utc>) -> Result<RateLimitStatus, RateLimitError> {
        let window = self.window();
        let counter = self.store.update(key.to_string(), now, |current| {
            let mut counter = current.unwrap_or(WindowCounter {
                count: 0,
                window_start: now,
            });
            counter.count = counter.count.saturating_add(1);
            (counter, counter.window_start + window)
        });

        let limit = self.settings.max_requests;
        let reset_at = counter.window_start + window;

        if counter.count > limit {
            let retry_after_secs = u64::try_from((reset_at - now).num_seconds()).unwrap_or(0).max(1);
            warn!(key, count = counter.count, limit, retry_after_secs, "Rate limit exceeded");
            return Err(RateLimitError::Exceeded { retry_after_secs });
        }

        Ok(RateLimitStatus {
            limit,
            remaining: limit - counter.count,
            reset_at,
        })
    }

    pub fn reset(&self, key: &str) {
        self.store.delete(&key.to_string());
    }

    pub fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        self.store.sweep_expired(now)
    }
}
