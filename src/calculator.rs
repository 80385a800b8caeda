//! Request Handler
//!
//! Orchestrates argument parsing, cache lookup, computation on miss and cache
//! population for a single arithmetic request.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{derive_key, CacheStats, ResponseCache};
use crate::error::ArgumentError;
use crate::models::CalcResponse;
use crate::operations::{MathFn, OperationRegistry};

/// Parses both operands, failing on the first problem.
///
/// Empty text is treated the same as an absent operand.
pub fn parse_operands(x_text: &str, y_text: &str) -> Result<(f64, f64), ArgumentError> {
    if x_text.is_empty() || y_text.is_empty() {
        return Err(ArgumentError::Missing);
    }
    Ok((parse_operand(x_text)?, parse_operand(y_text)?))
}

/// Parses one operand.
///
/// Literals too large for f64 are rejected rather than rounded to infinity.
/// The `inf`, `infinity` and `nan` spellings are accepted as written.
fn parse_operand(text: &str) -> Result<f64, ArgumentError> {
    let value: f64 = text.parse().map_err(|source| ArgumentError::Parse {
        input: text.to_string(),
        source,
    })?;

    if !value.is_finite() && !is_non_finite_literal(text) {
        return Err(ArgumentError::OutOfRange {
            input: text.to_string(),
        });
    }
    Ok(value)
}

fn is_non_finite_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|name| unsigned.eq_ignore_ascii_case(name))
}

// == Calculator ==
/// Cached arithmetic service shared by every request task.
#[derive(Clone)]
pub struct Calculator {
    /// Operation lookup table, fixed after startup
    registry: Arc<OperationRegistry>,
    /// Thread-safe response cache
    cache: Arc<RwLock<ResponseCache>>,
}

impl Calculator {
    /// Creates a calculator with an empty cache.
    pub fn new(registry: OperationRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            cache: Arc::new(RwLock::new(ResponseCache::new())),
        }
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    /// Looks up the function registered for `op`.
    pub fn operation(&self, op: &str) -> Option<MathFn> {
        self.registry.get(op)
    }

    /// Shared handle to the underlying cache.
    pub fn cache(&self) -> Arc<RwLock<ResponseCache>> {
        self.cache.clone()
    }

    /// Returns cache statistics evaluated at `now`.
    pub async fn stats(&self, now: Instant) -> CacheStats {
        self.cache.read().await.stats(now)
    }

    // == Handle ==
    /// Serves one request for `op` at time `now`.
    ///
    /// Malformed operands yield an error-bearing response without touching
    /// the cache. Otherwise a live cache entry is returned with `cached = true`
    /// and its expiry renewed; on a miss the result is computed, stored and
    /// returned with `cached = false`.
    ///
    /// `op` must be a registered operation; the router rejects anything else
    /// before it gets here. An unregistered name is answered as a failure.
    pub async fn handle(
        &self,
        op: &str,
        x_text: &str,
        y_text: &str,
        now: Instant,
    ) -> CalcResponse {
        let (x, y) = match parse_operands(x_text, y_text) {
            Ok(operands) => operands,
            Err(err) => {
                debug!(action = op, error = %err, "rejected arithmetic request");
                return CalcResponse::failed(op, err.to_string());
            }
        };

        let Some(function) = self.operation(op) else {
            return CalcResponse::failed(op, format!("Unknown operation: {op}"));
        };

        let key = derive_key(op, x_text, y_text);

        // Held across lookup+refresh and miss+insert
        let mut cache = self.cache.write().await;

        if let Some(entry) = cache.lookup(&key, now) {
            let response = entry.response.as_cached();
            cache.refresh(&key, now);
            debug!(%key, "cache hit");
            return response;
        }

        let response = CalcResponse::computed(op, x, y, function(x, y));
        cache.insert(key.clone(), response.clone(), now);
        debug!(%key, answer = response.answer, "cache miss, computed");

        response
    }
}
