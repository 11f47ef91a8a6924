//! Rendered-content cache.
//!
//! Entries are keyed by a content hash and only hit when the tier they were
//! rendered for matches the current one. Eviction is least-recently-used.

use ahash::RandomState;
use cortex_render_terminal::QualityTier;
use indexmap::IndexMap;
use std::hash::{BuildHasher, Hash, Hasher};
use std::time::Instant;

/// Default number of cached renderings.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

// Fixed seeds keep hashes stable across runs.
const HASH_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Hashes `content` together with a discriminator describing how it is rendered.
pub fn content_hash(content: &str, discriminator: &str) -> u64 {
    let state = RandomState::with_seeds(HASH_SEEDS[0], HASH_SEEDS[1], HASH_SEEDS[2], HASH_SEEDS[3]);
    let mut hasher = state.build_hasher();
    discriminator.hash(&mut hasher);
    content.hash(&mut hasher);
    hasher.finish()
}

/// A cached rendering.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Rendered output.
    pub text: String,
    /// Tier the output was produced for.
    pub tier: QualityTier,
    /// When the entry was stored.
    pub timestamp: Instant,
}

/// Hit and eviction counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that found nothing or a stale tier.
    pub misses: u64,
    /// Entries dropped to make room.
    pub evictions: u64,
}

impl CacheStats {
    /// Fraction of lookups that hit, or `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Bounded LRU cache of rendered content.
///
/// A capacity of zero disables caching.
#[derive(Debug, Clone)]
pub struct RenderCache {
    capacity: usize,
    entries: IndexMap<u64, CacheEntry>,
    stats: CacheStats,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl RenderCache {
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: IndexMap::with_capacity(capacity.min(DEFAULT_CACHE_CAPACITY)),
            stats: CacheStats::default(),
        }
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hit and eviction counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Looks up `hash` rendered for `tier`, marking it most recently used.
    pub fn get(&mut self, hash: u64, tier: QualityTier) -> Option<&str> {
        let index = match self.entries.get_index_of(&hash) {
            Some(index) if self.entries[index].tier == tier => index,
            Some(_) => {
                tracing::trace!(hash, %tier, "Cache entry rendered for another tier");
                self.stats.misses += 1;
                return None;
            }
            None => {
                self.stats.misses += 1;
                return None;
            }
        };
        self.stats.hits += 1;
        let last = self.entries.len() - 1;
        self.entries.move_index(index, last);
        self.entries.get_index(last).map(|(_, entry)| entry.text.as_str())
    }

    /// Stores `text` for `hash`, replacing any previous entry.
    pub fn put(&mut self, hash: u64, tier: QualityTier, text: String) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.shift_remove(&hash).is_none() && self.entries.len() >= self.capacity {
            if let Some((evicted, _)) = self.entries.shift_remove_index(0) {
                tracing::trace!(hash = evicted, "Evicted least recently used rendering");
                self.stats.evictions += 1;
            }
        }
        self.entries.insert(
            hash,
            CacheEntry {
                text,
                tier,
                timestamp: Instant::now(),
            },
        );
    }

    /// Returns the entry for `hash` without touching recency or counters.
    pub fn peek(&self, hash: u64) -> Option<&CacheEntry> {
        self.entries.get(&hash)
    }

    /// Drops every entry. Counters are kept.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(entries = self.entries.len(), "Cleared render cache");
        }
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hit_requires_matching_tier() {
        let mut cache = RenderCache::new(4);
        cache.put(1, QualityTier::Rich, "rich".to_string());
        assert_eq!(cache.get(1, QualityTier::Minimal), None);
        assert_eq!(cache.get(1, QualityTier::Rich), Some("rich"));
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                evictions: 0
            }
        );
    }

    #[test]
    fn test_put_overwrites() {
        let mut cache = RenderCache::new(4);
        cache.put(7, QualityTier::Rich, "old".to_string());
        cache.put(7, QualityTier::Minimal, "new".to_string());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(7, QualityTier::Minimal), Some("new"));
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut cache = RenderCache::new(2);
        cache.put(1, QualityTier::Rich, "a".to_string());
        cache.put(2, QualityTier::Rich, "b".to_string());
        assert!(cache.get(1, QualityTier::Rich).is_some());
        cache.put(3, QualityTier::Rich, "c".to_string());

        assert!(cache.peek(2).is_none());
        assert!(cache.peek(1).is_some());
        assert!(cache.peek(3).is_some());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_zero_capacity_disables_caching() {
        let mut cache = RenderCache::new(0);
        cache.put(1, QualityTier::Rich, "a".to_string());
        assert!(cache.is_empty());
        assert_eq!(cache.get(1, QualityTier::Rich), None);
    }

    #[test]
    fn test_clear_keeps_stats() {
        let mut cache = RenderCache::new(2);
        cache.put(1, QualityTier::Rich, "a".to_string());
        let _ = cache.get(1, QualityTier::Rich);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().hits, 1);
        assert!((cache.stats().hit_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_content_hash_is_stable_and_discriminated() {
        assert_eq!(content_hash("# hi", "md"), content_hash("# hi", "md"));
        assert_ne!(content_hash("# hi", "md"), content_hash("# hi", "code:rust"));
        assert_ne!(content_hash("a", "md"), content_hash("b", "md"));
    }
}
