//! Process-local render cache.

use std::time::Duration;

use dashmap::DashMap;

use super::CachedValue;
use super::RenderCache;

/// Rendered markup keyed by cache key, shared by every menu of an
/// [`Environment`](crate::context::Environment) unless another cache is
/// injected. Entries live until their TTL runs out, they are forgotten, or
/// the process exits.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use navmenu_lib::cache::{InMemoryCache, RenderCache};
///
/// let cache = InMemoryCache::new();
/// cache.put("menu-mainul", "<li>Home</li>".to_string(), Duration::from_secs(60));
/// assert_eq!(cache.get("menu-mainul").as_deref(), Some("<li>Home</li>"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCache {
    store: DashMap<String, CachedValue>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }

    /// Stored renderings, counting expired ones not yet collected.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl RenderCache for InMemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        if let Some(entry) = self.store.get(key).filter(|entry| !entry.is_expired()) {
            return Some(entry.data.clone());
        }
        // A render stored since the lookup must survive.
        self.store.remove_if(key, |_, value| value.is_expired());
        None
    }

    fn put(&self, key: &str, value: String, ttl: Duration) {
        self.store.insert(key.to_string(), CachedValue::with_ttl(value, ttl));
    }

    fn remove(&self, key: &str) {
        self.store.remove(key);
    }

    fn clear(&self) {
        self.store.clear();
    }

    fn gc(&self) -> usize {
        let mut dropped = 0;
        self.store.retain(|key, value| {
            let live = !value.is_expired();
            if !live {
                log::trace!("render cache: drop expired '{key}'");
                dropped += 1;
            }
            live
        });
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_values_are_never_returned() {
        let cache = InMemoryCache::new();
        cache.put("gone", "x".to_string(), Duration::ZERO);
        assert_eq!(cache.get("gone"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn put_overwrites_previous_value() {
        let cache = InMemoryCache::new();
        cache.put("key", "first".to_string(), Duration::from_secs(60));
        cache.put("key", "second".to_string(), Duration::from_secs(60));
        assert_eq!(cache.get("key").as_deref(), Some("second"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn lookup_of_a_live_render_keeps_it() {
        let cache = InMemoryCache::new();
        cache.put("menu-mainul", "<li>Home</li>".to_string(), Duration::from_secs(60));
        assert!(cache.get("menu-mainul").is_some());
        assert!(cache.get("menu-mainol").is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn gc_drops_only_expired_entries() {
        let cache = InMemoryCache::new();
        cache.put("live", "a".to_string(), Duration::from_secs(60));
        cache.put("dead", "b".to_string(), Duration::ZERO);
        assert_eq!(cache.gc(), 1);
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
