//! Time-based cache with a fixed revalidation window.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Default revalidation window for tournament pages.
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(60);

/// Per-key entry: value + when it was fetched.
#[derive(Clone, Debug)]
struct CacheEntry<V> {
    value: V,
    fetched_at: Instant,
}

/// Values are served until `window` has passed since they were stored; after
/// that they count as missing and must be fetched again. Callers pass `now`.
#[derive(Clone, Debug)]
pub struct RevalidationCache<K, V> {
    window: Duration,
    entries: HashMap<K, CacheEntry<V>>,
}

impl<K: Eq + Hash, V: Clone> RevalidationCache<K, V> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: HashMap::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Fresh value for `key`, if any.
    pub fn get(&self, key: &K, now: Instant) -> Option<V> {
        self.entries
            .get(key)
            .filter(|e| now.saturating_duration_since(e.fetched_at) < self.window)
            .map(|e| e.value.clone())
    }

    pub fn insert(&mut self, key: K, value: V, now: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: now,
            },
        );
    }

    /// Drop stale entries; returns how many were removed.
    pub fn purge_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let window = self.window;
        self.entries
            .retain(|_, e| now.saturating_duration_since(e.fetched_at) < window);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
