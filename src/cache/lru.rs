//! Bounded least-recently-used pool for dictionary words.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::debug;

use crate::Word;

struct Entry {
    word: Word,
    last_used: u64,
}

/// Capacity-bounded pool. Recency is a monotonically increasing tick, and
/// `order` maps each tick back to its key so the oldest entry is found in
/// logarithmic time.
pub(crate) struct LruPool {
    capacity: usize,
    tick: u64,
    entries: HashMap<Arc<str>, Entry>,
    order: BTreeMap<u64, Arc<str>>,
    generation: u64,
}

impl LruPool {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            tick: 0,
            entries: HashMap::new(),
            order: BTreeMap::new(),
            generation: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Bumped whenever the pool is invalidated.
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    pub(crate) fn get(&mut self, key: &str) -> Option<Word> {
        let tick = self.next_tick();
        let entry = self.entries.get_mut(key)?;
        self.order.remove(&entry.last_used);
        entry.last_used = tick;
        self.order.insert(tick, Arc::clone(entry.word.shared_spelling()));
        Some(entry.word.clone())
    }

    pub(crate) fn insert(&mut self, word: Word) {
        if self.capacity == 0 {
            return;
        }
        let key = Arc::clone(word.shared_spelling());
        let tick = self.next_tick();

        if let Some(previous) = self.entries.remove(&key) {
            self.order.remove(&previous.last_used);
        } else {
            while self.entries.len() >= self.capacity {
                match self.order.pop_first() {
                    Some((_, oldest)) => {
                        debug!(word = %oldest, "evicting least recently used word");
                        self.entries.remove(&oldest);
                    }
                    None => break,
                }
            }
        }

        self.order.insert(tick, Arc::clone(&key));
        self.entries.insert(
            key,
            Entry {
                word,
                last_used: tick,
            },
        );
    }

    /// Drop every entry and adopt a new capacity.
    pub(crate) fn reset(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.entries.clear();
        self.order.clear();
        self.generation += 1;
    }
}
