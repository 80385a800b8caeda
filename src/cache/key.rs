//! Request Key Derivation
//!
//! Builds cache keys from the operation name and the raw operand text.

use std::fmt;

// == Cache Key ==
/// Key under which a computed response is cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// == Derive Key ==
/// Derives the cache key as `x_text + op + y_text`.
///
/// Plain concatenation with no separator. Two requests whose pieces join to
/// the same string share a key; this is a known limitation kept for
/// compatibility with existing clients.
pub fn derive_key(op: &str, x_text: &str, y_text: &str) -> CacheKey {
    let mut key = String::with_capacity(x_text.len() + op.len() + y_text.len());
    key.push_str(x_text);
    key.push_str(op);
    key.push_str(y_text);
    CacheKey(key)
}
