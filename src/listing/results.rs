//! Listing result types

use std::collections::HashSet;
use std::collections::hash_set;

/// Unordered, duplicate-free set of immediate child names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingResult {
    entries: HashSet<String>,
}

impl ListingResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the name was already present
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.entries.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.entries.iter()
    }

    /// Names in lexicographic order, for display
    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.into_iter().collect();
        names.sort();
        names
    }
}

impl From<ListingResult> for HashSet<String> {
    fn from(result: ListingResult) -> Self {
        result.entries
    }
}

impl<S: Into<String>> FromIterator<S> for ListingResult {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for ListingResult {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ListingResult {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
