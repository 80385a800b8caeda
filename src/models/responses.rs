//! Response DTOs for the calculator API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Serialize, Serializer};

use crate::cache::CacheStats;

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Response body for an arithmetic request (GET /:operation).
///
/// The same record is stored in the cache. The copy at rest always carries
/// `cached = false`; hits hand out a clone with the flag set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcResponse {
    /// Operation name, e.g. "add"
    pub action: String,
    #[serde(serialize_with = "serialize_number")]
    pub x: f64,
    #[serde(serialize_with = "serialize_number")]
    pub y: f64,
    #[serde(serialize_with = "serialize_number")]
    pub answer: f64,
    /// Whether this response was served from the cache
    pub cached: bool,
    /// Argument error description, omitted when empty
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl CalcResponse {
    /// Creates a freshly computed, uncached response.
    pub fn computed(action: impl Into<String>, x: f64, y: f64, answer: f64) -> Self {
        Self {
            action: action.into(),
            x,
            y,
            answer,
            cached: false,
            error: String::new(),
        }
    }

    /// Creates an error-bearing response with all numeric fields zeroed.
    pub fn failed(action: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            x: 0.0,
            y: 0.0,
            answer: 0.0,
            cached: false,
            error: error.into(),
        }
    }

    /// Returns a copy flagged as served from the cache.
    pub fn as_cached(&self) -> Self {
        Self {
            cached: true,
            ..self.clone()
        }
    }

    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }
}

/// Writes integral values as JSON integers (`2`, not `2.0`).
///
/// Non-finite values fall through to serde_json, which emits `null`.
fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses, expired entries included
    pub misses: u64,
    /// Number of responses written into the cache
    pub inserts: u64,
    /// Number of occupied key slots, expired or not
    pub total_entries: usize,
    /// Number of occupied slots whose entry has expired
    pub expired_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<&CacheStats> for StatsResponse {
    fn from(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            inserts: stats.inserts,
            total_entries: stats.total_entries,
            expired_entries: stats.expired_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for routing failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
