//! Dictionary with a precomputed prefix closure
//!
//! The prefix set lets the solver abandon a path as soon as the letters traced
//! so far cannot begin any dictionary word.

use super::GameError;
use rustc_hash::FxHashSet;

/// An immutable word set plus every proper prefix of every word
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: FxHashSet<String>,
    prefixes: FxHashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from any collection of words
    ///
    /// Entries are trimmed and uppercased; blank entries and duplicates are dropped.
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if no words remain after normalization.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Lexicon;
    ///
    /// let lexicon = Lexicon::load(["cat", "Cart"]).unwrap();
    /// assert!(lexicon.is_word("CART"));
    /// assert!(lexicon.is_prefix("CA"));
    /// assert!(!lexicon.is_prefix("CT"));
    /// ```
    pub fn load<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        let prefixes = prefix_closure(words.iter());

        tracing::debug!(
            words = words.len(),
            prefixes = prefixes.len(),
            "lexicon loaded"
        );

        Ok(Self { words, prefixes })
    }

    /// Exact membership in the word set
    #[inline]
    #[must_use]
    pub fn is_word(&self, s: &str) -> bool {
        self.words.contains(s)
    }

    /// True if `s` starts at least one word (a complete word counts)
    #[inline]
    #[must_use]
    pub fn is_prefix(&self, s: &str) -> bool {
        self.prefixes.contains(s) || self.is_word(s)
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct proper prefixes
    #[must_use]
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    /// Iterate over all words in arbitrary order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Collect every non-empty proper prefix of every word
///
/// Prefixes are cut on `char` boundaries so non-ASCII words never split a code point.
pub(crate) fn prefix_closure<'a, I>(words: I) -> FxHashSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut prefixes = FxHashSet::default();
    for word in words {
        for (end, _) in word.char_indices().skip(1) {
            prefixes.insert(word[..end].to_string());
        }
    }
    prefixes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_normalizes_case_and_whitespace() {
        let lexicon = Lexicon::load(["  cat ", "DOG", "Bird"]).unwrap();
        assert!(lexicon.is_word("CAT"));
        assert!(lexicon.is_word("DOG"));
        assert!(lexicon.is_word("BIRD"));
        assert!(!lexicon.is_word("cat"));
        assert_eq!(lexicon.len(), 3);
    }

    #[test]
    fn load_deduplicates() {
        let lexicon = Lexicon::load(["cat", "CAT", "Cat"]).unwrap();
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn load_rejects_empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(Lexicon::load(empty).unwrap_err(), GameError::EmptyDictionary);
        assert_eq!(
            Lexicon::load(["", "   "]).unwrap_err(),
            GameError::EmptyDictionary
        );
    }

    #[test]
    fn prefixes_are_proper_and_non_empty() {
        let lexicon = Lexicon::load(["CART"]).unwrap();
        assert_eq!(lexicon.prefix_count(), 3);
        assert!(lexicon.prefixes.contains("C"));
        assert!(lexicon.prefixes.contains("CA"));
        assert!(lexicon.prefixes.contains("CAR"));
        assert!(!lexicon.prefixes.contains("CART"));
        assert!(!lexicon.prefixes.contains(""));
    }

    #[test]
    fn complete_word_is_a_prefix() {
        let lexicon = Lexicon::load(["CAT", "CATS"]).unwrap();
        assert!(lexicon.is_prefix("CAT"));
        assert!(lexicon.is_prefix("CATS"));
        assert!(!lexicon.is_prefix("CATSX"));
    }

    #[test]
    fn shared_prefixes_counted_once() {
        let lexicon = Lexicon::load(["CAT", "CAR", "CAB"]).unwrap();
        // C, CA
        assert_eq!(lexicon.prefix_count(), 2);
    }

    #[test]
    fn unrelated_strings_are_not_prefixes() {
        let lexicon = Lexicon::load(["CAT"]).unwrap();
        assert!(!lexicon.is_prefix("AT"));
        assert!(!lexicon.is_prefix("T"));
        assert!(!lexicon.is_prefix(""));
    }

    #[test]
    fn prefix_closure_handles_multibyte_chars() {
        let words = vec!["ÅSA".to_string()];
        let prefixes = prefix_closure(words.iter());
        assert!(prefixes.contains("Å"));
        assert!(prefixes.contains("ÅS"));
        assert_eq!(prefixes.len(), 2);
    }
}
