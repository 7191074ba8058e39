//! The set of words findable on one board

use super::lexicon::prefix_closure;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// All words reachable on a board, plus their prefix closure
///
/// Iteration is in lexicographic order so output built from it is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionSet {
    words: BTreeSet<String>,
    prefixes: FxHashSet<String>,
}

impl SolutionSet {
    #[must_use]
    pub fn new(words: BTreeSet<String>) -> Self {
        let prefixes = prefix_closure(words.iter());
        Self { words, prefixes }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// True if `partial` begins some solution word (a full solution counts)
    #[inline]
    #[must_use]
    pub fn is_prefix(&self, partial: &str) -> bool {
        self.prefixes.contains(partial) || self.contains(partial)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words ordered longest first, ties broken alphabetically
    #[must_use]
    pub fn by_length_desc(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_by(|a, b| longest_first(a, b));
        words
    }

    /// Length of the longest word, or 0 if there are none
    #[must_use]
    pub fn longest(&self) -> usize {
        self.words
            .iter()
            .map(|w| w.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Display ordering used for word lists: longer words first, then alphabetical
#[must_use]
pub fn longest_first(a: &str, b: &str) -> Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(b))
}

impl FromIterator<String> for SolutionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
