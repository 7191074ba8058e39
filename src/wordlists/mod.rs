//! Word lists and dice
//!
//! Provides the embedded dictionary and die set compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{DICE, DICE_COUNT, DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GRID_SIZE;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dice_cover_a_standard_board() {
        assert_eq!(DICE_COUNT, GRID_SIZE * GRID_SIZE);
    }

    #[test]
    fn dictionary_words_are_uppercase_and_long_enough() {
        for &word in DICTIONARY {
            assert!(word.len() >= 3, "Word '{word}' is shorter than 3 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn dice_faces_are_letters() {
        for &die in DICE {
            assert!(!die.is_empty());
            assert!(die.chars().all(|c| c.is_ascii_uppercase()), "Die '{die}'");
        }
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
    }
}
