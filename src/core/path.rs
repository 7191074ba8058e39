//! Traced paths across the board

use super::{Board, GameError, PathError, Position};

/// An ordered run of distinct, 8-adjacent cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Position>,
}

impl Path {
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Validate a full sequence of positions against a board
    ///
    /// # Errors
    /// Returns the first `PathError` encountered while extending cell by cell.
    pub fn from_positions(board: &Board, positions: &[Position]) -> Result<Self, PathError> {
        let mut path = Self::new();
        for &pos in positions {
            path.push(board, pos)?;
        }
        Ok(path)
    }

    /// Append a cell
    ///
    /// The first cell may be anywhere on the board; later cells must touch the
    /// current end and must not already be on the path. A rejected cell
    /// leaves the path unchanged.
    ///
    /// # Errors
    /// `OutOfBounds`, `AlreadyVisited` or `NotAdjacent`.
    pub fn push(&mut self, board: &Board, pos: Position) -> Result<(), PathError> {
        if !board.contains(pos) {
            return Err(PathError::OutOfBounds);
        }
        if self.cells.contains(&pos) {
            return Err(PathError::AlreadyVisited);
        }
        if let Some(&last) = self.cells.last()
            && !last.is_adjacent(pos)
        {
            return Err(PathError::NotAdjacent);
        }
        self.cells.push(pos);
        Ok(())
    }

    /// Remove and return the last cell
    pub fn pop(&mut self) -> Option<Position> {
        self.cells.pop()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    /// The second-to-last cell, where the pointer goes when backing up
    #[must_use]
    pub fn previous(&self) -> Option<Position> {
        self.cells.len().checked_sub(2).map(|i| self.cells[i])
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.cells
    }

    /// The word spelled by reading the board along this path
    ///
    /// # Errors
    /// Returns `GameError::OutOfBounds` if the path was built for a larger board.
    pub fn spell(&self, board: &Board) -> Result<String, GameError> {
        self.cells
            .iter()
            .map(|pos| board.letter_at(pos.row, pos.col))
            .collect()
    }
}
