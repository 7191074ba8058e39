//! Boggle Solver
//!
//! A 4x4 word grid game: roll a board from letter dice, find every dictionary
//! word that can be traced through touching cells, and score the player's finds.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use boggle_solver::core::{Board, Lexicon};
//! use boggle_solver::solver::Solver;
//! use boggle_solver::game::score_word;
//!
//! let lexicon = Lexicon::load(["cat", "cats", "act"]).unwrap();
//! let board = Board::from_rows("CATS/XXXX/XXXX/XXXX").unwrap();
//!
//! for word in Solver::new(&lexicon).solve(&board).iter() {
//!     println!("{word}: {} points", score_word(word));
//! }
//! ```

// Core domain types
pub mod core;

// Word search over a board
pub mod solver;

// Rounds, scoring and input tracking
pub mod game;

// Word lists and dice
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
