//! Path tracking for pointer-driven input
//!
//! Front ends translate pointer or key movement into `begin`/`extend` calls.
//! The tracker owns the in-progress path and reports how it should be drawn.

use super::session::{Outcome, PathStatus, Session};
use crate::core::{Path, PathError, Position};

/// The path currently being traced by the player
#[derive(Debug, Clone, Default)]
pub struct PathTracker {
    path: Path,
}

impl PathTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new path at `pos`, discarding any previous one
    ///
    /// # Errors
    /// `OutOfBounds` if there is no board or `pos` is off it.
    pub fn begin(&mut self, session: &Session, pos: Position) -> Result<PathStatus, PathError> {
        self.path.clear();
        self.extend(session, pos)
    }

    /// Add one cell to the end of the path
    ///
    /// Moving back onto the second-to-last cell undoes the last step instead,
    /// so dragging backwards shortens the path.
    ///
    /// # Errors
    /// `OutOfBounds`, `AlreadyVisited` or `NotAdjacent`; the path is unchanged.
    pub fn extend(&mut self, session: &Session, pos: Position) -> Result<PathStatus, PathError> {
        let board = session.board().ok_or(PathError::OutOfBounds)?;

        if self.path.previous() == Some(pos) {
            self.path.pop();
        } else {
            self.path.push(board, pos)?;
        }
        Ok(session.classify_path(&self.path))
    }

    /// Drop the last cell
    ///
    /// # Errors
    /// `NotStarted` if the path is already empty.
    pub fn backtrack(&mut self, session: &Session) -> Result<PathStatus, PathError> {
        self.path.pop().ok_or(PathError::NotStarted)?;
        Ok(session.classify_path(&self.path))
    }

    /// Submit the traced path and start over
    pub fn commit(&mut self, session: &mut Session) -> Outcome {
        let outcome = session.submit_path(&self.path);
        self.path.clear();
        outcome
    }

    pub fn clear(&mut self) {
        self.path.clear();
    }

    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Letters spelled so far, empty if nothing is traced
    #[must_use]
    pub fn spelled(&self, session: &Session) -> String {
        session
            .board()
            .and_then(|board| self.path.spell(board).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Lexicon};
    use crate::game::Mode;
    use crate::solver::solve;

    fn session() -> Session {
        let lexicon = Lexicon::load(["CAT", "CATS", "DOG"]).unwrap();
        let board = Board::from_rows("CATS/DOGE/BIRD/FISH").unwrap();
        let solutions = solve(&board, &lexicon);
        let mut session = Session::default();
        session.start_round(board, solutions, Mode::Timed);
        session
    }

    #[test]
    fn live_classification_while_tracing() {
        let session = session();
        let mut tracker = PathTracker::new();

        assert_eq!(
            tracker.begin(&session, Position::new(0, 0)),
            Ok(PathStatus::Potential)
        );
        assert_eq!(
            tracker.extend(&session, Position::new(0, 1)),
            Ok(PathStatus::Potential)
        );
        assert_eq!(
            tracker.extend(&session, Position::new(0, 2)),
            Ok(PathStatus::Valid)
        );
        assert_eq!(tracker.spelled(&session), "CAT");
        assert_eq!(
            tracker.extend(&session, Position::new(1, 2)),
            Ok(PathStatus::Dead)
        );
    }

    #[test]
    fn non_adjacent_extension_is_ignored() {
        let session = session();
        let mut tracker = PathTracker::new();
        tracker.begin(&session, Position::new(0, 0)).unwrap();

        assert_eq!(
            tracker.extend(&session, Position::new(3, 3)),
            Err(PathError::NotAdjacent)
        );
        assert_eq!(tracker.path().len(), 1);
    }

    #[test]
    fn revisit_is_rejected() {
        let session = session();
        let mut tracker = PathTracker::new();
        tracker.begin(&session, Position::new(0, 0)).unwrap();
        tracker.extend(&session, Position::new(0, 1)).unwrap();
        tracker.extend(&session, Position::new(1, 1)).unwrap();

        assert_eq!(
            tracker.extend(&session, Position::new(0, 0)),
            Err(PathError::AlreadyVisited)
        );
    }

    #[test]
    fn stepping_back_shortens_path() {
        let session = session();
        let mut tracker = PathTracker::new();
        tracker.begin(&session, Position::new(0, 0)).unwrap();
        tracker.extend(&session, Position::new(0, 1)).unwrap();
        tracker.extend(&session, Position::new(0, 2)).unwrap();

        tracker.extend(&session, Position::new(0, 1)).unwrap();
        assert_eq!(tracker.spelled(&session), "CA");

        tracker.backtrack(&session).unwrap();
        assert_eq!(tracker.spelled(&session), "C");
        tracker.backtrack(&session).unwrap();
        assert_eq!(tracker.backtrack(&session), Err(PathError::NotStarted));
    }

    #[test]
    fn commit_submits_and_clears() {
        let mut session = session();
        let mut tracker = PathTracker::new();
        for pos in [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)] {
            tracker.extend(&session, pos).unwrap();
        }

        assert_eq!(tracker.commit(&mut session), Outcome::NewlyFound(100));
        assert!(tracker.path().is_empty());
        assert_eq!(tracker.commit(&mut session), Outcome::NotAWord);
    }

    #[test]
    fn no_board_means_out_of_bounds() {
        let session = Session::default();
        let mut tracker = PathTracker::new();
        assert_eq!(
            tracker.begin(&session, Position::new(0, 0)),
            Err(PathError::OutOfBounds)
        );
    }
}
