//! Cache Store Module
//!
//! Request-keyed response cache with time-based expiry and refresh on hit.

use std::collections::HashMap;
use std::time::Instant;

use crate::cache::{CacheEntry, CacheKey, CacheStats, CACHE_TTL};
use crate::models::CalcResponse;

// == Response Cache ==
/// Holds computed responses keyed by request.
///
/// Expired entries are never removed; they keep their slot until the next
/// miss for the same key overwrites them. Callers share the store behind a
/// lock and must hold it across lookup+refresh and miss+insert.
#[derive(Debug, Default)]
pub struct ResponseCache {
    /// Response storage
    entries: HashMap<CacheKey, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Lookup ==
    /// Returns the entry for `key` if present and not expired at `now`.
    ///
    /// An expired entry counts as a miss but stays in place.
    pub fn lookup(&mut self, key: &CacheKey, now: Instant) -> Option<&CacheEntry> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                self.stats.record_hit();
                Some(entry)
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Refresh ==
    /// Extends the expiry of `key` to `now + CACHE_TTL`.
    ///
    /// The stored response is left untouched. Returns false if the key has
    /// no entry.
    pub fn refresh(&mut self, key: &CacheKey, now: Instant) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.extend(now, CACHE_TTL);
                true
            }
            None => false,
        }
    }

    // == Insert ==
    /// Stores `response` under `key`, expiring at `now + CACHE_TTL`.
    ///
    /// Overwrites whatever occupied the slot. The response is stored in its
    /// at-rest form with `cached = false`.
    pub fn insert(&mut self, key: CacheKey, mut response: CalcResponse, now: Instant) {
        response.cached = false;
        self.entries.insert(key, CacheEntry::new(response, now, CACHE_TTL));
        self.stats.record_insert();
    }

    // == Peek ==
    /// Returns the entry occupying `key`, expired or not, without touching stats.
    pub fn peek(&self, key: &CacheKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Stats ==
    /// Returns cache statistics with slot counts evaluated at `now`.
    pub fn stats(&self, now: Instant) -> CacheStats {
        let expired = self
            .entries
            .values()
            .filter(|entry| entry.is_expired(now))
            .count();

        let mut stats = self.stats.clone();
        stats.set_entry_counts(self.entries.len(), expired);
        stats
    }

    // == Length ==
    /// Returns the number of occupied slots, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
