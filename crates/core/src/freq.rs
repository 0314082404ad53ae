//! Symbol frequency counting.
//!
//! The frequency table is the first stage of the pipeline: it tallies each
//! distinct character of the input exactly once, and the tally total always
//! equals the input length in characters. It is built once per input and
//! never mutated afterward.

use std::collections::HashMap;

/// Occurrence counts for each distinct character of an input.
///
/// Iteration order is unspecified; consumers that need determinism (the
/// tree builder) sort on their side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<char, u64>,
}

impl FrequencyTable {
    /// Count the characters of `text`. Empty input gives an empty table.
    pub fn from_text(text: &str) -> Self {
        let mut counts = HashMap::new();
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for `symbol`, 0 if absent.
    pub fn count(&self, symbol: char) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if the input was empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the input length in characters.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over (symbol, count) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }
}
