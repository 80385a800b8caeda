//! Cache Module
//!
//! Provides the request-keyed response cache with time-based expiry.

mod entry;
mod key;
mod stats;
mod store;


use std::time::Duration;

// Re-export public types
pub use entry::CacheEntry;
pub use key::{derive_key, CacheKey};
pub use stats::CacheStats;
pub use store::ResponseCache;

// == Public Constants ==
/// Lifetime of a cached response, renewed on every hit
pub const CACHE_TTL: Duration = Duration::from_secs(60);
