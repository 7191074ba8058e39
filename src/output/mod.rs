//! Terminal output formatting
//!
//! Colored rendering of boards, word lists and command results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_generated_boards, print_solve_result};
