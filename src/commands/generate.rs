//! Random board generation command

use crate::core::{Board, GameError, Lexicon};
use crate::game::{GameConfig, score_word};
use crate::solver::Solver;
use rand::Rng;

/// A rolled board with a summary of what can be found on it
pub struct GeneratedBoard {
    pub board: Board,
    pub word_count: usize,
    pub max_score: u32,
    pub longest_word: Option<String>,
}

/// Roll and solve `count` boards
///
/// # Errors
///
/// Returns an error if the configured dice cannot produce a board.
pub fn generate_boards<R: Rng>(
    lexicon: &Lexicon,
    config: &GameConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<GeneratedBoard>, GameError> {
    let solver = Solver::new(lexicon);

    (0..count)
        .map(|_| -> Result<GeneratedBoard, GameError> {
            let board = Board::generate(&config.dice, config.grid_size, &mut *rng)?;
            let solutions = solver.solve(&board);
            let longest_word = solutions.by_length_desc().first().map(|w| (*w).to_string());

            Ok(GeneratedBoard {
                word_count: solutions.len(),
                max_score: solutions.iter().map(score_word).sum(),
                longest_word,
                board,
            })
        })
        .collect()
}
