use chrono::{DateTime, TimeDelta, Utc};
use linsta_config::OtpSettings;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{ExpiringStore, MemoryStore};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OtpError {
    #[error("No active code for this address")]
    NotFound,
    #[error("Code does not match, {remaining} attempts left")]
    Mismatch { remaining: u32 },
    #[error("Too many attempts, request a new code")]
    TooManyAttempts,
}

#[derive(Debug, Clone)]
pub struct OtpEntry {
    code: String,
    attempts: u32,
}

/// One-time passcodes keyed by normalized email address.
pub struct OtpStore<S = MemoryStore<String, OtpEntry>> {
    store: S,
    settings: OtpSettings,
}

impl OtpStore {
    pub fn new(settings: OtpSettings) -> Self {
        Self::with_store(MemoryStore::new(), settings)
    }
}

impl<S> OtpStore<S>
where
    S: ExpiringStore<String, OtpEntry>,
{
    pub fn with_store(store: S, settings: OtpSettings) -> Self {
        Self { store, settings }
    }

    /// Issues a fresh code, replacing any previous one for the address.
    pub fn issue(&self, email: &str, now: DateTime<Utc>) -> String {
        let code = generate_code(self.settings.code_length);
        let expires_at = now + ttl(self.settings.ttl_secs);

        self.store.set(
            normalize_email(email),
            OtpEntry {
                code: code.clone(),
                attempts: 0,
            },
            expires_at,
        );
        info!(%expires_at, "Issued one-time code");
        code
    }

    /// Checks a submitted code. A match consumes it.
    ///
    /// Compare, count and removal happen in one store operation, so a code
    /// is accepted at most once and parallel mismatches are all counted.
    pub fn verify(&self, email: &str, code: &str, now: DateTime<Utc>) -> Result<(), OtpError> {
        let submitted = code.trim();
        let max_attempts = self.settings.max_attempts;

        let outcome = self.store.modify(normalize_email(email), now, |entry| {
            if entry.code == submitted {
                return (Ok(()), false);
            }
            entry.attempts += 1;
            if entry.attempts >= max_attempts {
                return (Err(OtpError::TooManyAttempts), false);
            }
            let remaining = max_attempts - entry.attempts;
            (Err(OtpError::Mismatch { remaining }), true)
        });

        match outcome {
            Some(Ok(())) => {
                debug!("One-time code verified");
                Ok(())
            }
            Some(Err(OtpError::TooManyAttempts)) => {
                warn!(max_attempts, "One-time code locked after repeated mismatches");
                Err(OtpError::TooManyAttempts)
            }
            Some(Err(err)) => Err(err),
            None => Err(OtpError::NotFound),
        }
    }

    pub fn revoke(&self, email: &str) -> bool {
        self.store.delete(&normalize_email(email)).is_some()
    }

    pub fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        self.store.sweep_expired(now)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn ttl(secs: u64) -> TimeDelta {
    TimeDelta::seconds(i64::from(u32::try_from(secs).unwrap_or(u32::MAX)))
}

fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length.max(1))
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}
