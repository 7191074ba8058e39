//! Board solving command
//!
//! Solves a board given as text and lists every word with its score.

use crate::core::{Board, Lexicon, Path};
use crate::game::score_word;
use crate::solver::Solver;
use anyhow::{Context, Result};
use std::time::{Duration, Instant};

/// Configuration for solving a board
pub struct SolveConfig {
    pub board: String,
    pub show_paths: bool,
    pub parallel: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(board: String) -> Self {
        Self {
            board,
            show_paths: false,
            parallel: false,
        }
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub board: Board,
    pub words: Vec<WordEntry>,
    pub total_points: u32,
    pub duration: Duration,
}

/// A single word found on the board
pub struct WordEntry {
    pub word: String,
    pub points: u32,
    pub path: Option<Path>,
}

/// Solve a board described in text
///
/// Words come back longest first, then alphabetically.
///
/// # Errors
///
/// Returns an error if the board text cannot be parsed.
pub fn solve_board(config: &SolveConfig, lexicon: &Lexicon) -> Result<SolveResult> {
    let board = Board::from_rows(&config.board)
        .with_context(|| format!("parsing board '{}'", config.board))?;

    let solver = Solver::new(lexicon);
    let start = Instant::now();
    let solutions = if config.parallel {
        solver.solve_parallel(&board)
    } else {
        solver.solve(&board)
    };
    let duration = start.elapsed();

    let words: Vec<WordEntry> = solutions
        .by_length_desc()
        .into_iter()
        .map(|word| WordEntry {
            word: word.to_string(),
            points: score_word(word),
            path: config
                .show_paths
                .then(|| Solver::find_path(&board, word))
                .flatten(),
        })
        .collect();
    let total_points = words.iter().map(|w| w.points).sum();

    Ok(SolveResult {
        board,
        words,
        total_points,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::load(["CAT", "CATS", "DOG", "DOGS", "GOD"]).unwrap()
    }

    #[test]
    fn solve_lists_words_longest_first() {
        let config = SolveConfig::new("CATS/DOGE/BIRD/FISH".to_string());
        let result = solve_board(&config, &lexicon()).unwrap();

        let words: Vec<&str> = result.words.iter().map(|w| w.word.as_str()).collect();
        // DOGS ends on the S of CATS, diagonally up from G.
        assert_eq!(words, vec!["CATS", "DOGS", "CAT", "DOG", "GOD"]);
        assert_eq!(result.total_points, 400 + 400 + 100 + 100 + 100);
    }

    #[test]
    fn solve_with_paths() {
        let mut config = SolveConfig::new("CATS/DOGE/BIRD/FISH".to_string());
        config.show_paths = true;
        let result = solve_board(&config, &lexicon()).unwrap();

        for entry in &result.words {
            let path = entry.path.as_ref().unwrap();
            assert_eq!(path.spell(&result.board).unwrap(), entry.word);
        }
    }

    #[test]
    fn solve_parallel_same_words() {
        let sequential = solve_board(&SolveConfig::new("CATSDOGEBIRDFISH".into()), &lexicon())
            .unwrap();
        let mut config = SolveConfig::new("CATSDOGEBIRDFISH".into());
        config.parallel = true;
        let parallel = solve_board(&config, &lexicon()).unwrap();

        let a: Vec<_> = sequential.words.iter().map(|w| &w.word).collect();
        let b: Vec<_> = parallel.words.iter().map(|w| &w.word).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn solve_rejects_bad_board() {
        let config = SolveConfig::new("ABC/DE".to_string());
        assert!(solve_board(&config, &lexicon()).is_err());
    }
}
