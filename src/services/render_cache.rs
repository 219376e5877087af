use axum::body::Bytes;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Entries kept before the oldest is evicted
pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Default)]
struct Entries {
    by_key: HashMap<String, Bytes>,
    /// Insertion order, oldest first
    order: VecDeque<String>,
}

/// Cache of encoded PNG textures, keyed by render fingerprint
pub struct RenderCache {
    entries: Arc<RwLock<Entries>>,
    capacity: usize,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Entries::default())),
            capacity: capacity.max(1),
        }
    }

    /// Store a rendered texture, evicting the oldest entry when full
    pub async fn store(&self, key: &str, png: Bytes) {
        let mut entries = self.entries.write().await;
        if entries.by_key.insert(key.to_string(), png).is_some() {
            return;
        }
        entries.order.push_back(key.to_string());
        while entries.order.len() > self.capacity {
            if let Some(oldest) = entries.order.pop_front() {
                entries.by_key.remove(&oldest);
                tracing::trace!(key = %oldest, "Evicted cached texture");
            }
        }
    }

    /// Retrieve a cached texture
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let entries = self.entries.read().await;
        entries.by_key.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.by_key.len()
    }
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_and_get() {
        let cache = RenderCache::new();
        assert!(cache.get("a").await.is_none());

        cache.store("a", Bytes::from_static(b"png-a")).await;
        assert_eq!(cache.get("a").await, Some(Bytes::from_static(b"png-a")));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_evicts_oldest() {
        let cache = RenderCache::with_capacity(2);
        cache.store("a", Bytes::from_static(b"1")).await;
        cache.store("b", Bytes::from_static(b"2")).await;
        cache.store("a", Bytes::from_static(b"1b")).await;
        cache.store("c", Bytes::from_static(b"3")).await;

        assert!(cache.get("a").await.is_none());
        assert!(cache.get("b").await.is_some());
        assert!(cache.get("c").await.is_some());
        assert_eq!(cache.len().await, 2);
    }
}
