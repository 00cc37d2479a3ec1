use std::collections::{BTreeSet, HashMap};

use super::Entry;

/// Fixed-capacity accumulator retaining the K largest-size entries seen
/// in a stream.
///
/// Two structures share ownership of the tracked set: a size-sorted
/// index for O(log K) eviction decisions and a path-keyed map for
/// deduplication. A repeated path replaces the previous report (last
/// write wins) without disturbing the capacity bound.
#[derive(Debug)]
pub struct TopAccumulator {
    capacity: usize,
    by_size: BTreeSet<(u64, Vec<String>)>,
    by_path: HashMap<Vec<String>, u64>,
}

impl TopAccumulator {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            by_size: BTreeSet::new(),
            by_path: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// Track one reported entry, evicting the current minimum when the
    /// capacity is exceeded.
    pub fn insert(&mut self, path: Vec<String>, size: u64) {
        if self.capacity == 0 {
            return;
        }

        if let Some(old) = self.by_path.get(&path).copied() {
            // The old index pair must go first, otherwise the same path
            // would be counted twice in the size index.
            self.by_size.remove(&(old, path.clone()));
            self.by_size.insert((size, path.clone()));
            self.by_path.insert(path, size);
            return;
        }

        if self.by_path.len() >= self.capacity {
            // Full: only a value above the tracked minimum displaces it.
            let min = self.by_size.first().map(|(size, _)| *size);
            if matches!(min, Some(min) if size <= min) {
                return;
            }
            if let Some((_, evicted)) = self.by_size.pop_first() {
                self.by_path.remove(&evicted);
            }
        }

        self.by_size.insert((size, path.clone()));
        self.by_path.insert(path, size);
    }

    /// Consume the accumulator and return the tracked entries, size
    /// descending. Ties come out in descending path order, matching the
    /// size index.
    pub fn snapshot(self) -> Vec<Entry> {
        self.by_size
            .into_iter()
            .rev()
            .map(|(size, path)| Entry::new(path, size))
            .collect()
    }
}
