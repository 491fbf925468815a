use super::Clock;
use chrono::{DateTime, Duration, Utc};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// True while `now - captured_at` is strictly below `ttl`.
pub fn is_fresh(captured_at: DateTime<Utc>, now: DateTime<Utc>, ttl: Duration) -> bool {
    now - captured_at < ttl
}

struct CacheEntry<V> {
    value: V,
    inserted_at: DateTime<Utc>,
}

/// In-memory map from key to (value, insertion time).
///
/// With `ttl == None` entries live until evicted explicitly, which is what a
/// per-session cache needs. Expired entries are evicted on read.
pub struct ExpiringCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    ttl: Option<Duration>,
    clock: Arc<dyn Clock>,
}

impl<K, V> ExpiringCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Option<Duration>, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            clock,
        }
    }

    pub fn session(clock: Arc<dyn Clock>) -> Self {
        Self::new(None, clock)
    }

    pub fn get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        let expired = match (self.entries.get(key), self.ttl) {
            (None, _) => return None,
            (Some(entry), Some(ttl)) => !is_fresh(entry.inserted_at, now, ttl),
            (Some(_), None) => false,
        };
        if expired {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    pub fn put(&mut self, key: K, value: V) {
        let inserted_at = self.clock.now();
        self.entries.insert(key, CacheEntry { value, inserted_at });
    }

    pub fn evict<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key).map(|entry| entry.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
