//! Benchmark command
//!
//! Solves many random boards and reports timing and word-count statistics.

use crate::core::{Board, GameError, Lexicon};
use crate::game::{GameConfig, score_word};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub best_board: Option<(Board, u32)>,
    /// Boards bucketed by solution count, in buckets of 10 words
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Solve `count` random boards
///
/// With `parallel` set, each board is solved with one task per starting cell.
///
/// # Errors
///
/// Returns an error if the configured dice cannot produce a board.
pub fn run_benchmark<R: Rng>(
    lexicon: &Lexicon,
    config: &GameConfig,
    count: usize,
    parallel: bool,
    rng: &mut R,
) -> Result<BenchmarkResult, GameError> {
    let solver = Solver::new(lexicon);

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut best_board: Option<(Board, u32)> = None;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for idx in 0..count {
        let board = Board::generate(&config.dice, config.grid_size, rng)?;
        let solutions = if parallel {
            solver.solve_parallel(&board)
        } else {
            solver.solve(&board)
        };

        let words = solutions.len();
        let points: u32 = solutions.iter().map(score_word).sum();

        total_words += words;
        min_words = min_words.min(words);
        max_words = max_words.max(words);
        *distribution.entry(words / 10 * 10).or_insert(0) += 1;

        if best_board.as_ref().is_none_or(|(_, best)| points > *best) {
            best_board = Some((board, points));
        }

        if idx % 10 == 0 {
            let avg = total_words as f64 / (idx + 1) as f64;
            pb.set_message(format!("Avg: {avg:.1} words"));
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    if count == 0 {
        min_words = 0;
    }

    tracing::debug!(boards = count, ?duration, "benchmark finished");

    Ok(BenchmarkResult {
        total_boards: count,
        total_words,
        average_words: if count > 0 {
            total_words as f64 / count as f64
        } else {
            0.0
        },
        min_words,
        max_words,
        best_board,
        distribution,
        duration,
        boards_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lexicon() -> Lexicon {
        Lexicon::load(DICTIONARY).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = run_benchmark(&lexicon(), &GameConfig::default(), 10, false, &mut rng).unwrap();

        assert_eq!(result.total_boards, 10);
        assert!(result.min_words <= result.max_words);
        assert!(result.best_board.is_some());
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let mut rng = StdRng::seed_from_u64(2);
        let result = run_benchmark(&lexicon(), &GameConfig::default(), 12, false, &mut rng).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_boards);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = run_benchmark(&lexicon(), &GameConfig::default(), 8, true, &mut rng).unwrap();

        assert!(result.average_words >= result.min_words as f64);
        assert!(result.average_words <= result.max_words as f64);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let a = run_benchmark(
            &lexicon(),
            &GameConfig::default(),
            5,
            false,
            &mut StdRng::seed_from_u64(9),
        )
        .unwrap();
        let b = run_benchmark(
            &lexicon(),
            &GameConfig::default(),
            5,
            true,
            &mut StdRng::seed_from_u64(9),
        )
        .unwrap();

        assert_eq!(a.total_words, b.total_words);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_zero_boards() {
        let mut rng = StdRng::seed_from_u64(4);
        let result = run_benchmark(&lexicon(), &GameConfig::default(), 0, false, &mut rng).unwrap();

        assert_eq!(result.total_boards, 0);
        assert_eq!(result.total_words, 0);
        assert_eq!(result.min_words, 0);
        assert!(result.best_board.is_none());
    }

    #[test]
    fn benchmark_bad_dice() {
        let config = GameConfig::default().with_dice(vec!["A".into()]);
        let mut rng = StdRng::seed_from_u64(4);
        assert!(run_benchmark(&lexicon(), &config, 1, false, &mut rng).is_err());
    }
}
