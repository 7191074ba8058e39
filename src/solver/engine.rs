//! Exhaustive board solver
//!
//! Depth-first search from every cell. The accumulated string is checked
//! against the lexicon's prefix set after every step, so a branch dies as soon
//! as no dictionary word can start with the letters traced so far.

use crate::core::{Board, Lexicon, Path, SolutionSet};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::time::Instant;

/// Shortest word that counts as a solution
pub const MIN_WORD_LENGTH: usize = 3;

/// Board solver bound to a lexicon
///
/// Holds no per-board state, so one solver can serve every round.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Find every word of at least `MIN_WORD_LENGTH` letters on the board
    ///
    /// The result depends only on the board and the lexicon.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Board, Lexicon};
    /// use boggle_solver::solver::Solver;
    ///
    /// let lexicon = Lexicon::load(["cat", "coat", "at"]).unwrap();
    /// let board = Board::from_rows("CAT/OXX/XXX").unwrap();
    /// let solutions = Solver::new(&lexicon).solve(&board);
    ///
    /// assert!(solutions.contains("CAT"));
    /// assert!(solutions.contains("COAT"));
    /// assert!(!solutions.contains("AT")); // too short
    /// ```
    #[must_use]
    pub fn solve(&self, board: &Board) -> SolutionSet {
        let start = Instant::now();
        let mut search = Search::new(board, self.lexicon);
        for index in 0..board.cell_count() {
            search.visit(index);
        }
        let solutions = SolutionSet::new(search.found);

        tracing::debug!(
            words = solutions.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "board solved"
        );
        solutions
    }

    /// Same result as [`Solver::solve`], one rayon task per starting cell
    ///
    /// Each task owns its visited buffer; the per-cell word sets are merged
    /// after all tasks finish.
    #[must_use]
    pub fn solve_parallel(&self, board: &Board) -> SolutionSet {
        let start = Instant::now();
        let found = (0..board.cell_count())
            .into_par_iter()
            .map(|index| {
                let mut search = Search::new(board, self.lexicon);
                search.visit(index);
                search.found
            })
            .reduce(BTreeSet::new, |mut acc, words| {
                acc.extend(words);
                acc
            });
        let solutions = SolutionSet::new(found);

        tracing::debug!(
            words = solutions.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "board solved in parallel"
        );
        solutions
    }

    /// Locate one path that spells `word`, if any exists
    ///
    /// Matching is by letter; the lexicon is not consulted.
    #[must_use]
    pub fn find_path(board: &Board, word: &str) -> Option<Path> {
        let target: Vec<char> = word.to_uppercase().chars().collect();
        if target.is_empty() {
            return None;
        }

        let mut visited = vec![false; board.cell_count()];
        let mut route = Vec::with_capacity(target.len());
        let found = (0..board.cell_count())
            .any(|index| trace(board, &target, index, &mut visited, &mut route));
        if !found {
            return None;
        }

        let positions: Vec<_> = route.iter().map(|&i| board.position_of(i)).collect();
        Path::from_positions(board, &positions).ok()
    }
}

/// Convenience wrapper for a one-off solve
#[must_use]
pub fn solve(board: &Board, lexicon: &Lexicon) -> SolutionSet {
    Solver::new(lexicon).solve(board)
}

/// Mutable state for one depth-first search
///
/// `visited` and `word` always describe exactly the current path: every
/// mark and push in `visit` is undone before it returns.
struct Search<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
    visited: Vec<bool>,
    word: String,
    found: BTreeSet<String>,
}

impl<'a> Search<'a> {
    fn new(board: &'a Board, lexicon: &'a Lexicon) -> Self {
        Self {
            board,
            lexicon,
            visited: vec![false; board.cell_count()],
            word: String::with_capacity(board.cell_count()),
            found: BTreeSet::new(),
        }
    }

    fn visit(&mut self, index: usize) {
        let board = self.board;
        let restore = self.word.len();
        self.word.push(board.cell(index));

        if self.lexicon.is_prefix(&self.word) {
            if self.word.chars().count() >= MIN_WORD_LENGTH && self.lexicon.is_word(&self.word) {
                self.found.insert(self.word.clone());
            }

            self.visited[index] = true;
            for &next in board.adjacent(index) {
                if !self.visited[next] {
                    self.visit(next);
                }
            }
            self.visited[index] = false;
        }

        self.word.truncate(restore);
    }
}

fn trace(
    board: &Board,
    target: &[char],
    index: usize,
    visited: &mut [bool],
    route: &mut Vec<usize>,
) -> bool {
    let depth = route.len();
    if board.cell(index) != target[depth] {
        return false;
    }

    route.push(index);
    if route.len() == target.len() {
        return true;
    }

    visited[index] = true;
    for &next in board.adjacent(index) {
        if !visited[next] && trace(board, target, next, visited, route) {
            visited[index] = false;
            return true;
        }
    }
    visited[index] = false;
    route.pop();
    false
}
