//! Tabu list: the memory of already-tried moves.
//!
//! Paths are stored as space-joined node positions (see [`encode`]). The
//! list only grows during one search call.

use std::collections::HashSet;

/// How a move is matched against stored entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TabuMatching {
    /// The rebuilt branch is forbidden when its encoding occurs anywhere
    /// inside a stored entry.
    ///
    /// Matches on raw text, so `"1"` is found inside `"10 11"`.
    #[default]
    Substring,

    /// The whole neighbor solution is forbidden only when its encoding
    /// equals a stored entry.
    Exact,
}

/// Encodes a path as space-joined positions: `[4, 15, 8]` becomes `"4 15 8"`.
pub fn encode(path: &[usize]) -> String {
    path.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Growing set of encoded paths.
#[derive(Debug, Clone, Default)]
pub struct TabuList {
    matching: TabuMatching,
    entries: Vec<String>,
    index: HashSet<String>,
}

impl TabuList {
    /// Creates an empty list.
    pub fn new(matching: TabuMatching) -> Self {
        Self {
            matching,
            entries: Vec::new(),
            index: HashSet::new(),
        }
    }

    /// The matching mode.
    pub fn matching(&self) -> TabuMatching {
        self.matching
    }

    /// Whether `key` is forbidden under this list's matching mode.
    pub fn is_forbidden(&self, key: &str) -> bool {
        match self.matching {
            TabuMatching::Substring => self.entries.iter().any(|entry| entry.contains(key)),
            TabuMatching::Exact => self.index.contains(key),
        }
    }

    /// Stores an encoded path.
    pub fn insert(&mut self, key: String) {
        if self.index.insert(key.clone()) {
            self.entries.push(key);
        }
    }

    /// Number of distinct stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
