//! Board solving
//!
//! Enumerates every dictionary word that can be traced on a board.

mod engine;

pub use engine::{MIN_WORD_LENGTH, Solver, solve};
