//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use generate::{GeneratedBoard, generate_boards};
pub use play::run_play;
pub use solve::{SolveConfig, SolveResult, WordEntry, solve_board};
