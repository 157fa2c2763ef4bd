use std::hash::Hash;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use super::ExpiringStore;

#[derive(Debug, Clone)]
struct Slot<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

impl<V> Slot<V> {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// In-process [`ExpiringStore`] for single-node deployments.
pub struct MemoryStore<K, V> {
    entries: DashMap<K, Slot<V>>,
}

impl<K, V> MemoryStore<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Entries held, expired ones included until the next sweep.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Default for MemoryStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ExpiringStore<K, V> for MemoryStore<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K, now: DateTime<Utc>) -> Option<V> {
        self.entries
            .get(key)
            .filter(|slot| slot.is_live(now))
            .map(|slot| slot.value.clone())
    }

    fn set(&self, key: K, value: V, expires_at: DateTime<Utc>) {
        self.entries.insert(key, Slot { value, expires_at });
    }

    fn delete(&self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|(_, slot)| slot.value)
    }

    fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, slot| {
            let live = slot.is_live(now);
            if !live {
                removed += 1;
            }
            live
        });
        if removed > 0 {
            debug!(removed, remaining = self.entries.len(), "Swept expired entries");
        }
        removed
    }

    fn update<F>(&self, key: K, now: DateTime<Utc>, f: F) -> V
    where
        F: FnOnce(Option<V>) -> (V, DateTime<Utc>),
    {
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                let current = occupied
                    .get()
                    .is_live(now)
                    .then(|| occupied.get().value.clone());
                let (value, expires_at) = f(current);
                occupied.insert(Slot {
                    value: value.clone(),
                    expires_at,
                });
                value
            }
            Entry::Vacant(vacant) => {
                let (value, expires_at) = f(None);
                vacant.insert(Slot {
                    value: value.clone(),
                    expires_at,
                });
                value
            }
        }
    }

    fn modify<F, R>(&self, key: K, now: DateTime<Utc>, f: F) -> Option<R>
    where
        F: FnOnce(&mut V) -> (R, bool),
    {
        let Entry::Occupied(mut occupied) = self.entries.entry(key) else {
            return None;
        };

        if !occupied.get().is_live(now) {
            occupied.remove();
            return None;
        }

        let (result, keep) = f(&mut occupied.get_mut().value);
        if !keep {
            occupied.remove();
        }
        Some(result)
    }
}
