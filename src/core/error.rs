//! Error types for the word grid domain

use thiserror::Error;

/// Errors raised while building lexicons, boards and paths
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The dictionary source produced no usable words
    #[error("dictionary is empty, cannot start a round")]
    EmptyDictionary,

    /// Dice count does not match the number of cells on the board
    #[error("dice set has {actual} dice, a {expected}-cell board needs exactly {expected}")]
    MalformedDiceSet { expected: usize, actual: usize },

    /// A die has no letters on it
    #[error("die {index} has no faces")]
    EmptyFace { index: usize },

    /// Coordinates fall outside the board
    #[error("cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// Board text could not be parsed
    #[error("invalid board: {0}")]
    InvalidBoard(String),
}

/// Rejected path extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("no path has been started")]
    NotStarted,

    #[error("cell is not adjacent to the end of the path")]
    NotAdjacent,

    #[error("cell is already part of the path")]
    AlreadyVisited,

    #[error("cell is outside the board")]
    OutOfBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_dice_message_names_counts() {
        let err = GameError::MalformedDiceSet {
            expected: 16,
            actual: 15,
        };
        assert_eq!(
            err.to_string(),
            "dice set has 15 dice, a 16-cell board needs exactly 16"
        );
    }

    #[test]
    fn out_of_bounds_message() {
        let err = GameError::OutOfBounds {
            row: 4,
            col: 0,
            size: 4,
        };
        assert_eq!(err.to_string(), "cell (4, 0) is outside a 4x4 board");
    }
}
