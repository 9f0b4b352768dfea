use std::collections::VecDeque;
use std::hash::Hash;
use std::sync::Mutex;

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use super::coarse_clock::coarse_now_secs;

struct Entry<V> {
    value: V,
    expires_at: u64,
}

/// Bounded-size, time-expiring key-value store.
///
/// Safe for concurrent use: readers see either a fully written entry or
/// none. Size is bounded by entry count rather than exact byte size — a
/// caller sizing the cache from a byte budget divides by an estimated
/// average entry size before constructing it. Oldest-inserted entries are
/// evicted first when the cache is full; entries are never evicted for
/// being merely expired except opportunistically on read.
pub struct TtlCache<K, V> {
    entries: DashMap<K, Entry<V>, FxBuildHasher>,
    insertion_order: Mutex<VecDeque<K>>,
    max_entries: usize,
    ttl_secs: u64,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(max_entries: usize, ttl_secs: u64) -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            insertion_order: Mutex::new(VecDeque::new()),
            max_entries: max_entries.max(1),
            ttl_secs,
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let now = coarse_now_secs();
        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > now {
                return Some(entry.value.clone());
            }
            drop(entry);
            self.entries.remove(key);
        }
        None
    }

    pub fn set(&self, key: K, value: V) {
        let expires_at = coarse_now_secs().saturating_add(self.ttl_secs);
        let is_new = !self.entries.contains_key(&key);
        self.entries.insert(key.clone(), Entry { value, expires_at });

        if is_new {
            let mut order = self.insertion_order.lock().unwrap_or_else(|e| e.into_inner());
            order.push_back(key);
            while order.len() > self.max_entries {
                if let Some(oldest) = order.pop_front() {
                    self.entries.remove(&oldest);
                }
            }
        }
    }

    pub fn clear(&self) {
        self.entries.clear();
        self.insertion_order
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
