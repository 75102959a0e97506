//! Rank — insertion-ordered frequency counting and top-N truncation.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Counts occurrences of keys while remembering first-seen order.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyCounter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 += 1;
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, 1));
    }

    /// At most `n` entries by count descending.
    ///
    /// The sort is stable, so equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> RankedCounts<K> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        RankedCounts(ranked)
    }
}

/// A count-sorted list of `(key, count)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCounts<K>(Vec<(K, usize)>);

impl<K> RankedCounts<K> {
    pub fn entries(&self) -> &[(K, usize)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K> Default for RankedCounts<K> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

/// `[("10.0.0.1", 2), ("10.0.0.2", 1)]` for strings, `[(404, 3)]` for codes.
impl<K: fmt::Debug> fmt::Display for RankedCounts<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (key, count)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({:?}, {})", key, count)?;
        }
        f.write_str("]")
    }
}
