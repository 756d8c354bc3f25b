//! Tiered word cache.
//!
//! Resolving a spelling can mean a dictionary lookup plus a pass over the
//! spelling rule table, so resolved [`Word`]s are kept in one of two pools:
//!
//! - a **permanent** pool for dictionary words, bounded by capacity with
//!   least-recently-used eviction;
//! - an **expiring** pool for heuristic words (and numbers, when enabled),
//!   whose entries are dropped after going unread for the time-to-live.
//!
//! Both pools sit behind their own mutex and are only locked for the
//! lookup or insert itself; resolution runs unlocked. Two threads missing
//! the same spelling may both resolve it and the later insert wins, which
//! is harmless because the value depends only on the spelling.
//!
//! Every invalidation bumps the pool's generation. A resolution that
//! started before an invalidation is not inserted afterwards, so a pool
//! never holds words computed under a configuration it has since dropped.

mod expiring;
mod lru;

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use layered_syllables::{normalize, PhoneticDictionary, SyllableResolver, SyllableSource};
use tracing::debug;

use crate::Word;
use expiring::ExpiringPool;
use lru::LruPool;

/// Default capacity of the permanent pool.
pub const DEFAULT_PERMANENT_CAPACITY: usize = 20_000;

/// Default time-to-live of the expiring pool.
pub const DEFAULT_TIME_TO_LIVE: Duration = Duration::from_secs(600);

/// Point-in-time cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub permanent_entries: usize,
    pub expiring_entries: usize,
}

/// Resolves spellings into shared [`Word`] records, caching the results.
pub struct WordCache {
    resolver: SyllableResolver,
    permanent: Mutex<LruPool>,
    expiring: Mutex<ExpiringPool>,
    cache_numbers: AtomicBool,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl std::fmt::Debug for WordCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordCache")
            .field("stats", &self.stats())
            .field("cache_numbers", &self.caches_numbers())
            .finish()
    }
}

impl Default for WordCache {
    fn default() -> Self {
        Self::new(SyllableResolver::heuristic_only())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl WordCache {
    /// A cache with default capacity and time-to-live, not caching numbers.
    pub fn new(resolver: SyllableResolver) -> Self {
        Self::with_limits(resolver, DEFAULT_PERMANENT_CAPACITY, DEFAULT_TIME_TO_LIVE, false)
    }

    pub fn with_limits(
        resolver: SyllableResolver,
        permanent_capacity: usize,
        time_to_live: Duration,
        cache_numbers: bool,
    ) -> Self {
        Self {
            resolver,
            permanent: Mutex::new(LruPool::new(permanent_capacity)),
            expiring: Mutex::new(ExpiringPool::new(time_to_live, Instant::now())),
            cache_numbers: AtomicBool::new(cache_numbers),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// A cache over an in-memory dictionary.
    pub fn with_dictionary(dictionary: PhoneticDictionary) -> Self {
        Self::new(SyllableResolver::new(dictionary))
    }

    pub fn resolver(&self) -> &SyllableResolver {
        &self.resolver
    }

    /// Resolve a spelling to its [`Word`], consulting the pools first.
    pub fn get(&self, spelling: &str) -> Word {
        let key = normalize(spelling);
        let now = Instant::now();

        let permanent_generation = {
            let mut pool = lock(&self.permanent);
            if let Some(word) = pool.get(&key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return word;
            }
            pool.generation()
        };
        let expiring_generation = {
            let mut pool = lock(&self.expiring);
            if let Some(word) = pool.get(&key, now) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return word;
            }
            pool.generation()
        };
        self.misses.fetch_add(1, Ordering::Relaxed);

        let resolution = self.resolver.resolve(&key);
        let word = Word::new(key, resolution);
        if word.spelling().is_empty() {
            return word;
        }

        match word.source() {
            SyllableSource::Dictionary => {
                let mut pool = lock(&self.permanent);
                if pool.generation() == permanent_generation {
                    pool.insert(word.clone());
                }
            }
            SyllableSource::Numeric if !self.caches_numbers() => {}
            SyllableSource::Numeric | SyllableSource::Heuristic => {
                let mut pool = lock(&self.expiring);
                if pool.generation() == expiring_generation {
                    pool.insert(word.clone(), Instant::now());
                }
            }
        }

        word
    }

    pub fn caches_numbers(&self) -> bool {
        self.cache_numbers.load(Ordering::Relaxed)
    }

    pub fn permanent_capacity(&self) -> usize {
        lock(&self.permanent).capacity()
    }

    pub fn time_to_live(&self) -> Duration {
        lock(&self.expiring).ttl()
    }

    /// Change the permanent pool's capacity, emptying it.
    pub fn set_permanent_capacity(&self, capacity: usize) {
        debug!(capacity, "resetting permanent word cache");
        lock(&self.permanent).reset(capacity);
    }

    /// Change the expiring pool's time-to-live, emptying it.
    pub fn set_time_to_live(&self, time_to_live: Duration) {
        debug!(ttl_secs = time_to_live.as_secs(), "resetting expiring word cache");
        lock(&self.expiring).reset(time_to_live, Instant::now());
    }

    /// Turn numeric caching on or off. Numbers only live in the expiring
    /// pool, so that pool is emptied when the setting changes.
    pub fn set_cache_numbers(&self, cache_numbers: bool) {
        if self.cache_numbers.swap(cache_numbers, Ordering::Relaxed) != cache_numbers {
            let mut pool = lock(&self.expiring);
            let ttl = pool.ttl();
            pool.reset(ttl, Instant::now());
        }
    }

    /// Swap the phonetic dictionary. Both pools are emptied because any
    /// cached word may now resolve differently.
    pub fn replace_dictionary(&self, dictionary: PhoneticDictionary) {
        self.resolver.replace_dictionary(dictionary);
        self.clear();
    }

    /// Reload the dictionary from `path`, falling back to heuristic counts
    /// if it cannot be read. Both pools are emptied.
    pub fn reload_dictionary(&self, path: &Path) {
        self.resolver.reload(path);
        self.clear();
    }

    /// Empty both pools, keeping their limits.
    pub fn clear(&self) {
        debug!("clearing word cache");
        {
            let mut pool = lock(&self.permanent);
            let capacity = pool.capacity();
            pool.reset(capacity);
        }
        let mut pool = lock(&self.expiring);
        let ttl = pool.ttl();
        pool.reset(ttl, Instant::now());
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            permanent_entries: lock(&self.permanent).len(),
            expiring_entries: lock(&self.expiring).len(),
        }
    }
}
