//! Time-expiring pool for heuristic and numeric words.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::Word;

struct Entry {
    word: Word,
    last_access: Instant,
}

/// Entries expire once they go unread for longer than the time-to-live.
/// Expired entries are dropped on access and by a sweep that runs at most
/// once per time-to-live, on insert. A zero time-to-live disables the pool.
pub(crate) struct ExpiringPool {
    ttl: Duration,
    entries: HashMap<Arc<str>, Entry>,
    last_sweep: Instant,
    generation: u64,
}

impl ExpiringPool {
    pub(crate) fn new(ttl: Duration, now: Instant) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
            last_sweep: now,
            generation: 0,
        }
    }

    pub(crate) fn ttl(&self) -> Duration {
        self.ttl
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    fn is_expired(&self, last_access: Instant, now: Instant) -> bool {
        now.saturating_duration_since(last_access) > self.ttl
    }

    pub(crate) fn get(&mut self, key: &str, now: Instant) -> Option<Word> {
        let last_access = self.entries.get(key)?.last_access;
        if self.is_expired(last_access, now) {
            self.entries.remove(key);
            return None;
        }
        let entry = self.entries.get_mut(key)?;
        entry.last_access = now;
        Some(entry.word.clone())
    }

    pub(crate) fn insert(&mut self, word: Word, now: Instant) {
        if self.ttl.is_zero() {
            return;
        }
        self.sweep_if_due(now);
        self.entries.insert(
            Arc::clone(word.shared_spelling()),
            Entry {
                word,
                last_access: now,
            },
        );
    }

    fn sweep_if_due(&mut self, now: Instant) {
        if now.saturating_duration_since(self.last_sweep) < self.ttl {
            return;
        }
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.last_access) <= ttl);
        self.last_sweep = now;
    }

    /// Drop every entry and adopt a new time-to-live.
    pub(crate) fn reset(&mut self, ttl: Duration, now: Instant) {
        self.ttl = ttl;
        self.entries.clear();
        self.last_sweep = now;
        self.generation += 1;
    }
}
