//! Compute-once cache of generated batches.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::debug;

/// Counters describing cache usage since creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered by an existing entry.
    pub hits: u64,
    /// Lookups that ran the computation.
    pub misses: u64,
    /// Entries currently held.
    pub entries: usize,
}

type Cell<V> = Arc<OnceLock<Arc<V>>>;

/// Keyed cache guaranteeing at most one computation per key.
///
/// Each key owns a [`OnceLock`] cell. The map lock is only held to look up
/// or insert the cell, so computations for different keys run in parallel
/// while callers asking for the same key wait for the single computation in
/// flight. Values are shared immutably as [`Arc`].
///
/// The cache is unbounded; [`BatchCache::invalidate()`] and
/// [`BatchCache::clear()`] are the only eviction mechanisms.
///
/// # Example
///
/// ```
/// use rnd_provider::BatchCache;
///
/// let cache: BatchCache<u32, Vec<f64>> = BatchCache::new();
/// let a = cache.get_or_compute(&1, || vec![1.0, 2.0]);
/// let b = cache.get_or_compute(&1, || unreachable!());
/// assert!(std::sync::Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug)]
pub struct BatchCache<K, V> {
    cells: Mutex<HashMap<K, Cell<V>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K, V> Default for BatchCache<K, V> {
    fn default() -> Self {
        Self {
            cells: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

impl<K, V> BatchCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, running `compute` only if no value
    /// exists or is being computed for it.
    ///
    /// `compute` runs on the calling thread while the key's cell is held.
    /// It must not ask this cache for the same key, directly or through a
    /// job it may pick up while waiting, or it blocks forever.
    pub fn get_or_compute<F>(&self, key: &K, compute: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        let cell = {
            let mut cells = self.lock();
            Arc::clone(cells.entry(key.clone()).or_default())
        };

        let mut computed = false;
        let value = cell.get_or_init(|| {
            computed = true;
            Arc::new(compute())
        });
        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!("batch cache miss");
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("batch cache hit");
        }
        Arc::clone(value)
    }

    /// Drops the entry for `key`. Returns whether an entry was present.
    ///
    /// Callers already holding the value keep their [`Arc`]; the next
    /// lookup recomputes.
    pub fn invalidate(&self, key: &K) -> bool {
        let removed = self.lock().remove(key).is_some();
        debug!(removed, "batch cache invalidate");
        removed
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns whether a completed value is held for `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.lock()
            .get(key)
            .is_some_and(|cell| cell.get().is_some())
    }

    /// Number of keys held, including computations in flight.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    // A panic inside `compute` never happens while the map lock is held, so
    // the map is consistent even if poisoned.
    fn lock(&self) -> MutexGuard<'_, HashMap<K, Cell<V>>> {
        self.cells.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn computes_once_per_key() {
        let cache = BatchCache::new();
        let calls = AtomicUsize::new(0);
        for _ in 0..3 {
            let v = cache.get_or_compute(&"a", || {
                calls.fetch_add(1, Ordering::SeqCst);
                7
            });
            assert_eq!(*v, 7);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 2,
                misses: 1,
                entries: 1
            }
        );
    }

    #[test]
    fn keys_are_independent() {
        let cache = BatchCache::new();
        assert_eq!(*cache.get_or_compute(&1, || "one"), "one");
        assert_eq!(*cache.get_or_compute(&2, || "two"), "two");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn invalidate_forces_recompute() {
        let cache = BatchCache::new();
        let first = cache.get_or_compute(&1, || 1);
        assert!(cache.invalidate(&1));
        assert!(!cache.invalidate(&1));
        assert!(!cache.contains(&1));
        let second = cache.get_or_compute(&1, || 2);
        assert_eq!(*first, 1);
        assert_eq!(*second, 2);
    }

    #[test]
    fn clear_empties() {
        let cache = BatchCache::new();
        cache.get_or_compute(&1, || ());
        cache.get_or_compute(&2, || ());
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn panicking_compute_leaves_cache_usable() {
        let cache: BatchCache<u8, u8> = BatchCache::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            cache.get_or_compute(&1, || panic!("boom"));
        }));
        assert!(result.is_err());
        assert_eq!(*cache.get_or_compute(&1, || 5), 5);
    }
}
