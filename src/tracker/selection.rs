//! Insertion-ordered word sets.

use std::collections::HashSet;

/// How many selected words the snapshot surfaces.
pub const RECENT_LIMIT: usize = 10;

/// Splits an editor selection into words.
///
/// The selection is trimmed and split on any run of whitespace; empty pieces
/// never appear.
pub fn tokenize(selection: &str) -> impl Iterator<Item = &str> {
    selection.split_whitespace().filter(|w| !w.is_empty())
}

/// A set of words that remembers the order words were first seen in.
///
/// Re-inserting a known word is a no-op and does not move it.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `word`, returning `true` if it was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.seen.contains(word) {
            return false;
        }
        self.seen.insert(word.to_string());
        self.order.push(word.to_string());
        true
    }

    /// Adds every word of `selection`; returns how many were new.
    pub fn extend_from_selection(&mut self, selection: &str) -> usize {
        tokenize(selection).filter(|w| self.insert(w)).count()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All words in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// The `limit` most recently added words, oldest first.
    pub fn recent(&self, limit: usize) -> Vec<String> {
        let start = self.order.len().saturating_sub(limit);
        self.order[start..].to_vec()
    }

    /// All words in first-seen order, owned.
    pub fn to_vec(&self) -> Vec<String> {
        self.order.clone()
    }
}
