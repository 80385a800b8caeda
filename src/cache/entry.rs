//! Cache Entry Module
//!
//! Defines a cached response together with its expiry instant.

use std::time::{Duration, Instant};

use crate::models::CalcResponse;

// == Cache Entry ==
/// A stored response and the instant after which it is stale.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Response in its at-rest form (`cached = false`)
    pub response: CalcResponse,
    /// Expiration instant
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl` after `now`.
    pub fn new(response: CalcResponse, now: Instant, ttl: Duration) -> Self {
        Self {
            response,
            expires_at: now + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once `now` reaches `expires_at`; it is live only
    /// while `expires_at > now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Pushes the expiry out to `now + ttl`.
    pub fn extend(&mut self, now: Instant, ttl: Duration) {
        self.expires_at = now + ttl;
    }
}
