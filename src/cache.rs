use std::num::NonZeroUsize;
use std::sync::Arc;

use foundations::telemetry::log;
use ipnet::IpNet;
use lru::LruCache;
use parking_lot::Mutex;

use crate::cidr::cidr_labels;
use crate::config::AddressingConfig;
use crate::label::Label;

// Sized for churn of maximally specific prefixes, the common case when every
// remote address gets its own /32 or /128.
pub const DFLT_CACHE_CAPACITY: usize = 16384;

struct CacheInner {
    entries: LruCache<IpNet, Arc<[Label]>>,
    config: AddressingConfig,
    // Bumped on clear() and set_config(). An in-flight miss computed under
    // an older generation is returned to its caller but never inserted.
    generation: u64,
}

/// Memoizing front for [`cidr_labels`]. Bounded LRU, keyed by the exact
/// input prefix (host bits and declared length both count), safe to share
/// across threads.
pub struct LabelCache {
    inner: Mutex<CacheInner>,
}

impl LabelCache {
    pub fn new(capacity: usize, config: AddressingConfig) -> LabelCache {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        LabelCache {
            inner: Mutex::new(CacheInner {
                entries: LruCache::new(capacity),
                config,
                generation: 0,
            }),
        }
    }

    pub fn with_default_capacity(config: AddressingConfig) -> LabelCache {
        LabelCache::new(DFLT_CACHE_CAPACITY, config)
    }

    //TODO: Coalesce concurrent misses for the same prefix
    pub fn get(&self, prefix: IpNet) -> Arc<[Label]> {
        let (config, generation) = {
            let mut inner = self.inner.lock();
            if let Some(labels) = inner.entries.get(&prefix) {
                return Arc::clone(labels);
            }
            (inner.config, inner.generation)
        };

        // Decompose outside the lock. The generation check keeps a
        // computation that straddled clear()/set_config() out of the cache.
        let labels: Arc<[Label]> = cidr_labels(prefix, &config).into();

        let mut inner = self.inner.lock();
        if inner.generation == generation {
            inner.entries.put(prefix, Arc::clone(&labels));
        }
        labels
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.generation += 1;
        log::debug!("cleared CIDR label cache"; "generation" => inner.generation);
    }

    /// Swaps the addressing config and clears in one critical section, so no
    /// lookup can pair the new config with chains computed under the old one.
    pub fn set_config(&self, config: AddressingConfig) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.config = config;
        inner.generation += 1;
        log::debug!("replaced addressing config, CIDR label cache cleared";
            "generation" => inner.generation);
    }

    pub fn config(&self) -> AddressingConfig {
        self.inner.lock().config
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
