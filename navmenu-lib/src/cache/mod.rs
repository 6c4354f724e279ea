//! Render cache
//!
//! Provides a `RenderCache` trait and an in-memory implementation for
//! storing rendered menu markup with TTL support.

mod memory;

pub use memory::*;

use std::time::Duration;

use chrono::DateTime;
use chrono::Utc;

/// A cached rendering with metadata about when it was cached and when it
/// expires.
#[derive(Debug, Clone)]
pub struct CachedValue {
    /// The rendered markup.
    pub data: String,
    /// When this value was cached.
    pub created_at: DateTime<Utc>,
    /// When this value expires and should no longer be returned.
    pub expires_at: DateTime<Utc>,
}

impl CachedValue {
    /// Creates a new cached value with a TTL from now.
    ///
    /// TTLs past the last representable instant are clamped to it, so a
    /// very long TTL keeps the value instead of expiring it.
    pub fn with_ttl(data: String, ttl: Duration) -> Self {
        let now = Utc::now();
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            data,
            created_at: now,
            expires_at,
        }
    }

    /// Returns `true` if this cached value has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Trait for render caches.
///
/// Implementations store and retrieve rendered markup by string keys.
/// The cache is the only part of the engine that may be shared between
/// threads; a `get` miss followed by a `put` may race with another
/// renderer, in which case the last write wins. Renders are pure functions
/// of the tree and the route, so either value is correct.
///
/// Implementations must never return expired values from `get()`.
pub trait RenderCache: Send + Sync {
    /// Retrieves a cached rendering by key.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores a rendering for `ttl`.
    fn put(&self, key: &str, value: String, ttl: Duration);

    /// Removes a rendering.
    fn remove(&self, key: &str);

    /// Clears all renderings.
    fn clear(&self);

    /// Removes all expired entries, returning how many were dropped.
    fn gc(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ttl_expires_after_creation() {
        let value = CachedValue::with_ttl("x".to_string(), Duration::from_secs(60));
        assert_eq!(value.expires_at - value.created_at, chrono::Duration::seconds(60));
        assert!(!value.is_expired());
    }

    #[test]
    fn huge_ttl_is_clamped_instead_of_expiring() {
        let value = CachedValue::with_ttl("x".to_string(), Duration::from_secs(u64::MAX));
        assert_eq!(value.expires_at, DateTime::<Utc>::MAX_UTC);
        assert!(!value.is_expired());
    }

    #[test]
    fn ttl_overflowing_the_calendar_is_clamped() {
        // Fits in a chrono duration but lands past the last representable year.
        let value = CachedValue::with_ttl("x".to_string(), Duration::from_secs(9_000_000_000_000));
        assert_eq!(value.expires_at, DateTime::<Utc>::MAX_UTC);
        assert!(!value.is_expired());
    }
}
