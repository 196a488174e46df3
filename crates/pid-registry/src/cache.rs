//! Cache storage for fetched responses.
//!
//! The coordinator only needs `get`/`set` with a relative TTL; the store
//! behind that contract is pluggable. The bundled [`MemoryCache`] keeps
//! typed entries in process memory with lazy expiry: an entry past its
//! deadline is treated as absent, no background sweep runs.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

/// Key→value storage with per-entry expiration.
///
/// One store holds one response type; each operation class owns its own
/// store, so the stored type is statically known at every call site.
/// Implementations must tolerate concurrent calls.
pub trait CacheStore<T>: Send + Sync {
    /// Look up a fresh entry. Expired entries read as absent.
    fn get(&self, key: &str) -> Option<T>;

    /// Insert or replace an entry, expiring `ttl` after this call.
    fn set(&self, key: &str, value: T, ttl: Duration);
}

struct Entry<T> {
    value: T,
    expires_at: Instant,
}

/// In-memory [`CacheStore`] with per-entry TTL.
pub struct MemoryCache<T> {
    entries: RwLock<HashMap<String, Entry<T>>>,
}

impl<T> MemoryCache<T> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for MemoryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync> CacheStore<T> for MemoryCache<T> {
    fn get(&self, key: &str) -> Option<T> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;

        if entry.expires_at <= Instant::now() {
            return None;
        }

        Some(entry.value.clone())
    }

    fn set(&self, key: &str, value: T, ttl: Duration) {
        let now = Instant::now();
        let mut entries = self.entries.write();

        // Writes also purge expired entries; reads never see them either way.
        entries.retain(|_, entry| entry.expires_at > now);

        entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: now + ttl,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_what_set_stored() {
        let cache = MemoryCache::new();
        cache.set("a", 1u32, Duration::from_secs(60));

        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn set_replaces_existing_entries() {
        let cache = MemoryCache::new();
        cache.set("a", 1u32, Duration::from_secs(60));
        cache.set("a", 2u32, Duration::from_secs(60));

        assert_eq!(cache.get("a"), Some(2));
    }

    #[test]
    fn expired_entries_read_as_absent() {
        let cache = MemoryCache::new();
        cache.set("a", 1u32, Duration::from_millis(10));

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn set_drops_expired_entries() {
        let cache = MemoryCache::new();
        cache.set("stale", 1u32, Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(20));

        cache.set("fresh", 2u32, Duration::from_secs(60));

        let entries = cache.entries.read();
        assert!(!entries.contains_key("stale"));
        assert!(entries.contains_key("fresh"));
    }

    #[test]
    fn distinct_keys_do_not_collide() {
        let cache = MemoryCache::new();
        cache.set("EntityDataBasic?key=1", "one", Duration::from_secs(60));
        cache.set("EntityDataBasic?key=2", "two", Duration::from_secs(60));

        assert_eq!(cache.get("EntityDataBasic?key=1"), Some("one"));
        assert_eq!(cache.get("EntityDataBasic?key=2"), Some("two"));
    }

    #[test]
    fn concurrent_readers_and_writers() {
        use std::sync::Arc;

        let cache = Arc::new(MemoryCache::new());
        let mut handles = Vec::new();

        for i in 0..8u32 {
            let cache = Arc::clone(&cache);
            handles.push(std::thread::spawn(move || {
                let key = format!("key-{}", i % 4);
                cache.set(&key, i, Duration::from_secs(60));
                cache.get(&key);
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
