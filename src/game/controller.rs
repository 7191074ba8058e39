//! Top-level game controller
//!
//! Owns the lexicon, dice, random source and session so nothing in the
//! game lives in globals.

use super::config::{GameConfig, Mode};
use super::session::Session;
use crate::core::{Board, GameError, Lexicon};
use crate::solver::Solver;
use rand::Rng;

/// A running game: one lexicon, one session, many boards
pub struct Game<R: Rng> {
    lexicon: Lexicon,
    config: GameConfig,
    rng: R,
    session: Session,
}

impl<R: Rng> Game<R> {
    #[must_use]
    pub fn new(lexicon: Lexicon, config: GameConfig, rng: R) -> Self {
        let session = Session::new(config.duration);
        Self {
            lexicon,
            config,
            rng,
            session,
        }
    }

    /// Roll a board, solve it and start the first round
    ///
    /// # Errors
    /// Propagates dice errors from [`Board::generate`].
    pub fn start(&mut self, mode: Mode) -> Result<(), GameError> {
        self.deal(mode)
    }

    /// Replace the board with a fresh one
    ///
    /// Returns `Ok(false)` without touching the session when a timed round is
    /// still running.
    ///
    /// # Errors
    /// Propagates dice errors from [`Board::generate`].
    pub fn new_board(&mut self) -> Result<bool, GameError> {
        if !self.session.can_start_new_board() {
            tracing::debug!("new board refused during a timed round");
            return Ok(false);
        }
        let mode = self.session.mode();
        self.deal(mode)?;
        Ok(true)
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    fn deal(&mut self, mode: Mode) -> Result<(), GameError> {
        let board = Board::generate(&self.config.dice, self.config.grid_size, &mut self.rng)?;
        let solutions = Solver::new(&self.lexicon).solve(&board);
        tracing::debug!(board = %board.to_string().replace('\n', "/"), "board dealt");
        self.session.start_round(board, solutions, mode);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Outcome, RoundState};
    use crate::wordlists::DICTIONARY;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game() -> Game<StdRng> {
        let lexicon = Lexicon::load(DICTIONARY).unwrap();
        Game::new(lexicon, GameConfig::default(), StdRng::seed_from_u64(1))
    }

    #[test]
    fn start_deals_a_solved_board() {
        let mut game = game();
        game.start(Mode::Timed).unwrap();

        let session = game.session();
        assert_eq!(session.state(), RoundState::InRound);
        assert_eq!(session.board().unwrap().size(), 4);
        assert_eq!(session.time_remaining(), Some(90));
    }

    #[test]
    fn timed_round_refuses_new_board() {
        let mut game = game();
        game.start(Mode::Timed).unwrap();
        let before = game.session().board().cloned();

        assert_eq!(game.new_board(), Ok(false));
        assert_eq!(game.session().board().cloned(), before);

        game.session_mut().end_round();
        assert_eq!(game.new_board(), Ok(true));
        assert_eq!(game.session().state(), RoundState::InRound);
    }

    #[test]
    fn endless_round_allows_new_board_and_resets_score() {
        let mut game = game();
        game.start(Mode::Endless).unwrap();

        let first = game.session().solutions().iter().next().map(str::to_string);
        if let Some(word) = first {
            assert!(matches!(
                game.session_mut().submit_word(&word),
                Outcome::NewlyFound(_)
            ));
        }

        assert_eq!(game.new_board(), Ok(true));
        assert_eq!(game.session().score(), 0);
        assert_eq!(game.session().found_count(), 0);
    }

    #[test]
    fn bad_dice_surface_as_errors() {
        let lexicon = Lexicon::load(["CAT"]).unwrap();
        let config = GameConfig::default().with_dice(vec!["AB".into(); 3]);
        let mut game = Game::new(lexicon, config, StdRng::seed_from_u64(1));

        assert_eq!(
            game.start(Mode::Timed),
            Err(GameError::MalformedDiceSet {
                expected: 16,
                actual: 3
            })
        );
        assert_eq!(game.session().state(), RoundState::NotStarted);
    }

    #[test]
    fn seeded_games_deal_identical_boards() {
        let mut a = game();
        let mut b = game();
        a.start(Mode::Endless).unwrap();
        b.start(Mode::Endless).unwrap();
        assert_eq!(a.session().board(), b.session().board());
        assert_eq!(a.session().solutions(), b.session().solutions());
    }
}
