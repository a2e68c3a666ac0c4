//! Insertion-ordered key → accumulated value container.
//!
//! Every group-by in this crate folds records into a `Tally`: an entry is
//! created the first time a key is seen and then mutated in place. Lookups go
//! through a `HashMap` of positions, while the entries themselves stay in a
//! `Vec` in first-seen order. That order matters: ranking is a stable sort,
//! so among exactly tied totals the key encountered first comes out on top.

use crate::ordering::{self, Direction};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// One (key, accumulated value) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateEntry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> AggregateEntry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// Key → value accumulator that remembers first-seen order
#[derive(Debug, Clone)]
pub struct Tally<K, V> {
    entries: Vec<AggregateEntry<K, V>>,
    positions: HashMap<K, usize>,
}

impl<K, V> Tally<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Find-or-create: the value for `key`, inserting `init()` on first sight
    pub fn entry_or_insert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        let idx = match self.positions.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.positions.insert(key.clone(), idx);
                self.entries.push(AggregateEntry::new(key, init()));
                idx
            }
        };
        &mut self.entries[idx].value
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.positions.get(key).map(|&idx| &self.entries[idx].value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &AggregateEntry<K, V>> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|entry| &entry.key)
    }

    /// Entries in first-seen order, consuming the tally
    pub fn into_entries(self) -> Vec<AggregateEntry<K, V>> {
        self.entries
    }

    /// Entries stably ordered by `key_fn`; ties keep first-seen order
    pub fn ranked<R, F>(self, direction: Direction, key_fn: F) -> Vec<AggregateEntry<K, V>>
    where
        R: PartialOrd,
        F: Fn(&AggregateEntry<K, V>) -> R,
    {
        ordering::sort_by_key(self.entries, direction, key_fn)
    }
}

impl<K, V> Default for Tally<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Tally<K, V>
where
    K: Eq + Hash + Clone,
    V: Copy + PartialOrd,
{
    /// Entries ranked by their value, largest first
    pub fn ranked_by_value(self) -> Vec<AggregateEntry<K, V>> {
        self.ranked(Direction::Descending, |entry| entry.value)
    }

    /// The entry with the largest value, first-seen among ties.
    ///
    /// `None` for an empty tally rather than an out-of-bounds read. A NaN
    /// total only wins when nothing else compares.
    pub fn highest(&self) -> Option<&AggregateEntry<K, V>> {
        // Same winner as the head of a stable descending sort
        let mut best: Option<&AggregateEntry<K, V>> = None;
        for entry in &self.entries {
            match best {
                Some(current) if Direction::Descending.left_wins(&current.value, &entry.value) => {}
                _ => best = Some(entry),
            }
        }
        best
    }
}

// =============================================================================
// Frequency tables
// =============================================================================

/// Word → occurrence count. A word that is absent counts as zero.
pub type FrequencyTable = Tally<String, u32>;

impl Tally<String, u32> {
    /// Count one more occurrence of `word`
    pub fn record(&mut self, word: &str) {
        if let Some(&idx) = self.positions.get(word) {
            self.entries[idx].value += 1;
            return;
        }
        *self.entry_or_insert_with(word.to_string(), || 0) += 1;
    }

    /// Occurrences of `word` (0 when never recorded)
    pub fn count(&self, word: &str) -> u32 {
        self.positions
            .get(word)
            .map(|&idx| self.entries[idx].value)
            .unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.value)).sum()
    }
}
