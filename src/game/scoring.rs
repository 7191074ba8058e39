//! Points awarded per word

/// Points for a word of `length` letters
///
/// | letters | points |
/// |---------|--------|
/// | 3       | 100    |
/// | 4       | 400    |
/// | 5       | 800    |
/// | 6       | 1400   |
/// | 7       | 1800   |
/// | 8       | 2200   |
/// | 9+      | 2200 + 400 per letter beyond 8 |
///
/// Lengths below 3 score nothing.
///
/// # Examples
/// ```
/// use boggle_solver::game::score_for;
///
/// assert_eq!(score_for(3), 100);
/// assert_eq!(score_for(9), 2600);
/// ```
#[must_use]
pub const fn score_for(length: usize) -> u32 {
    match length {
        0..=2 => 0,
        3 => 100,
        4 => 400,
        5 => 800,
        6 => 1400,
        7 => 1800,
        8 => 2200,
        _ => 2200 + (length as u32 - 8) * 400,
    }
}

/// Points for a word, counted in letters rather than bytes
#[must_use]
pub fn score_word(word: &str) -> u32 {
    score_for(word.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepped_table() {
        assert_eq!(score_for(3), 100);
        assert_eq!(score_for(4), 400);
        assert_eq!(score_for(5), 800);
        assert_eq!(score_for(6), 1400);
        assert_eq!(score_for(7), 1800);
        assert_eq!(score_for(8), 2200);
        assert_eq!(score_for(9), 2600);
        assert_eq!(score_for(16), 5400);
    }

    #[test]
    fn short_words_score_nothing() {
        assert_eq!(score_for(0), 0);
        assert_eq!(score_for(1), 0);
        assert_eq!(score_for(2), 0);
    }

    #[test]
    fn long_words_match_plus_400_from_six() {
        // The alternate table (1400 at 6, +400 per extra letter) agrees everywhere.
        for length in 6..=16u32 {
            assert_eq!(score_for(length as usize), 1400 + (length - 6) * 400);
        }
    }

    #[test]
    fn score_word_counts_letters() {
        assert_eq!(score_word("CAT"), 100);
        assert_eq!(score_word("TRAIN"), 800);
        assert_eq!(score_word(""), 0);
    }
}
