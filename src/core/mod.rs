//! Core domain types for the word grid
//!
//! This module contains the board, dictionary, path and solution types.
//! Everything here is deterministic; randomness is injected by the caller.

mod board;
mod error;
mod lexicon;
mod path;
mod solution;

pub use board::{Board, GRID_SIZE, Position};
pub use error::{GameError, PathError};
pub use lexicon::Lexicon;
pub use path::Path;
pub use solution::{SolutionSet, longest_first};
