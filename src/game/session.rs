//! Round state and the word-commit state machine
//!
//! A session moves `NotStarted -> InRound -> Ended`. The caller owns the
//! clock: `tick` is a plain state transition meant to be called once a second.

use super::config::{GAME_DURATION, Mode};
use super::scoring::score_word;
use crate::core::{Board, Path, SolutionSet};
use std::collections::BTreeSet;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    NotStarted,
    InRound,
    Ended,
}

/// Result of submitting a traced word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A solution not found before; carries the points awarded
    NewlyFound(u32),
    /// A solution the player already has
    AlreadyFound,
    /// Not on this board's solution list
    NotAWord,
}

/// Result of one clock tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continuing,
    TimedOut,
}

/// Live classification of a path still being traced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    /// Spells a solution that has not been found yet
    Valid,
    /// Could still grow into a solution
    Potential,
    /// No solution starts with these letters
    Dead,
}

/// Mutable state for the current round
#[derive(Debug, Clone)]
pub struct Session {
    board: Option<Board>,
    solutions: SolutionSet,
    found: BTreeSet<String>,
    found_order: Vec<String>,
    score: u32,
    duration: u32,
    time_remaining: Option<u32>,
    mode: Mode,
    state: RoundState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GAME_DURATION)
    }
}

impl Session {
    /// Create an idle session whose timed rounds last `duration` seconds
    #[must_use]
    pub fn new(duration: u32) -> Self {
        Self {
            board: None,
            solutions: SolutionSet::default(),
            found: BTreeSet::new(),
            found_order: Vec::new(),
            score: 0,
            duration,
            time_remaining: None,
            mode: Mode::Timed,
            state: RoundState::NotStarted,
        }
    }

    /// Begin a round on a freshly solved board
    ///
    /// Score and found words are cleared; the clock is set for timed rounds
    /// and left unbounded for endless ones.
    pub fn start_round(&mut self, board: Board, solutions: SolutionSet, mode: Mode) {
        tracing::info!(
            mode = mode.name(),
            solutions = solutions.len(),
            "round started"
        );

        self.board = Some(board);
        self.solutions = solutions;
        self.mode = mode;
        self.found.clear();
        self.found_order.clear();
        self.score = 0;
        self.time_remaining = match mode {
            Mode::Timed => Some(self.duration),
            Mode::Endless => None,
        };
        self.state = RoundState::InRound;
    }

    /// Commit a word traced by the player
    ///
    /// Input is uppercased before lookup. Outside a running round every
    /// submission is `NotAWord` and nothing changes.
    pub fn submit_word(&mut self, word: &str) -> Outcome {
        if self.state != RoundState::InRound {
            return Outcome::NotAWord;
        }

        let word = word.trim().to_uppercase();
        if word.is_empty() || !self.solutions.contains(&word) {
            return Outcome::NotAWord;
        }
        if self.found.contains(&word) {
            return Outcome::AlreadyFound;
        }

        let points = self.accept(word);
        Outcome::NewlyFound(points)
    }

    /// Commit a traced path by spelling it on the current board
    pub fn submit_path(&mut self, path: &Path) -> Outcome {
        match self.spell(path) {
            Some(word) => self.submit_word(&word),
            None => Outcome::NotAWord,
        }
    }

    /// Classify a partial word for live highlighting
    #[must_use]
    pub fn classify(&self, partial: &str) -> PathStatus {
        let partial = partial.to_uppercase();
        if partial.is_empty() {
            return PathStatus::Potential;
        }
        if self.solutions.contains(&partial) && !self.found.contains(&partial) {
            PathStatus::Valid
        } else if self.solutions.is_prefix(&partial) {
            PathStatus::Potential
        } else {
            PathStatus::Dead
        }
    }

    #[must_use]
    pub fn classify_path(&self, path: &Path) -> PathStatus {
        self.spell(path)
            .map_or(PathStatus::Dead, |word| self.classify(&word))
    }

    /// Award every remaining solution, longest first
    ///
    /// Only available during an endless round; otherwise returns an empty
    /// list and leaves the session untouched.
    pub fn reveal_all(&mut self) -> Vec<(String, u32)> {
        if self.mode != Mode::Endless || self.state != RoundState::InRound {
            tracing::debug!(mode = self.mode.name(), "reveal refused");
            return Vec::new();
        }

        let remaining: Vec<String> = self
            .solutions
            .by_length_desc()
            .into_iter()
            .filter(|w| !self.found.contains(*w))
            .map(str::to_string)
            .collect();

        let revealed: Vec<(String, u32)> = remaining
            .into_iter()
            .map(|word| {
                let points = self.accept(word.clone());
                (word, points)
            })
            .collect();

        tracing::info!(revealed = revealed.len(), score = self.score, "solutions revealed");
        revealed
    }

    /// Advance the clock by one second
    pub fn tick(&mut self) -> Tick {
        match (self.mode, self.state) {
            (Mode::Timed, RoundState::Ended) => Tick::TimedOut,
            (Mode::Timed, RoundState::InRound) => {
                let left = self.time_remaining.unwrap_or(0).saturating_sub(1);
                self.time_remaining = Some(left);
                if left == 0 {
                    self.state = RoundState::Ended;
                    tracing::info!(score = self.score, found = self.found.len(), "time up");
                    Tick::TimedOut
                } else {
                    Tick::Continuing
                }
            }
            _ => Tick::Continuing,
        }
    }

    /// Stop the round early
    pub fn end_round(&mut self) {
        if self.state == RoundState::InRound {
            self.state = RoundState::Ended;
            tracing::info!(score = self.score, found = self.found.len(), "round ended");
        }
    }

    /// True if a new board may replace the current one right now
    #[must_use]
    pub fn can_start_new_board(&self) -> bool {
        match self.mode {
            Mode::Endless => true,
            Mode::Timed => self.state != RoundState::InRound,
        }
    }

    /// Every solution has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.solutions.is_empty() && self.found.len() == self.solutions.len()
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Seconds left, or `None` when the round has no clock
    #[must_use]
    pub const fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }

    #[must_use]
    pub const fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    #[must_use]
    pub const fn solutions(&self) -> &SolutionSet {
        &self.solutions
    }

    #[must_use]
    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.solutions.len() - self.found.len()
    }

    /// Found words in the order they were found
    #[must_use]
    pub fn found_in_order(&self) -> &[String] {
        &self.found_order
    }

    fn accept(&mut self, word: String) -> u32 {
        let points = score_word(&word);
        self.score += points;
        self.found.insert(word.clone());
        self.found_order.push(word);
        points
    }

    fn spell(&self, path: &Path) -> Option<String> {
        if path.is_empty() {
            return None;
        }
        self.board.as_ref().and_then(|b| path.spell(b).ok())
    }
}
