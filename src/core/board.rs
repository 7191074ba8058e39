//! Square letter grid with 8-neighbour adjacency
//!
//! A board is immutable once built. Cells are stored row-major and the
//! neighbour lists are computed up front so the solver never re-derives them.

use super::GameError;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::fmt;

/// Side length of the standard board
pub const GRID_SIZE: usize = 4;

/// A cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if `other` is one of the 8 cells around `self`
    #[inline]
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr | dc) != 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An N×N grid of letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<char>,
    adjacency: Vec<Vec<usize>>,
}

impl Board {
    /// Build a board from row-major letters
    ///
    /// # Errors
    /// Returns `GameError::InvalidBoard` if the letter count is not `size * size`
    /// or the size is zero.
    pub fn from_cells(size: usize, cells: Vec<char>) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidBoard("board size must be positive".into()));
        }
        if cells.len() != size * size {
            return Err(GameError::InvalidBoard(format!(
                "expected {} letters for a {size}x{size} board, got {}",
                size * size,
                cells.len()
            )));
        }

        let cells = cells.into_iter().map(uppercase_letter).collect();
        let adjacency = (0..size * size)
            .map(|index| adjacent_indices(size, index))
            .collect();

        Ok(Self {
            size,
            cells,
            adjacency,
        })
    }

    /// Parse a board from text
    ///
    /// Rows may be separated by `/`, whitespace or newlines. A single run of
    /// letters whose length is a perfect square is split into equal rows.
    ///
    /// # Errors
    /// Returns `GameError::InvalidBoard` for ragged rows, non-square grids or
    /// non-alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    ///
    /// let board = Board::from_rows("CATS/DOGE/BIRD/FISH").unwrap();
    /// assert_eq!(board.size(), 4);
    /// assert_eq!(board.letter_at(0, 1).unwrap(), 'A');
    ///
    /// let flat = Board::from_rows("catsdogebirdfish").unwrap();
    /// assert_eq!(board, flat);
    /// ```
    pub fn from_rows(text: &str) -> Result<Self, GameError> {
        let mut rows: Vec<Vec<char>> = text
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .map(|row| row.chars().collect())
            .collect();

        if rows.is_empty() {
            return Err(GameError::InvalidBoard("no letters given".into()));
        }

        if rows.len() == 1 {
            let letters = rows.remove(0);
            let side = letters.len().isqrt();
            if side * side != letters.len() {
                return Err(GameError::InvalidBoard(format!(
                    "{} letters do not form a square grid",
                    letters.len()
                )));
            }
            rows = letters.chunks(side).map(<[char]>::to_vec).collect();
        }

        let size = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != size) {
            return Err(GameError::InvalidBoard(format!(
                "row of {} letters in a {size}-row board",
                bad.len()
            )));
        }

        let cells: Vec<char> = rows.into_iter().flatten().collect();
        if let Some(bad) = cells.iter().find(|c| !c.is_alphabetic()) {
            return Err(GameError::InvalidBoard(format!("'{bad}' is not a letter")));
        }

        Self::from_cells(size, cells)
    }

    /// Roll a random board from a set of dice
    ///
    /// The dice are shuffled uniformly (Fisher–Yates), die `i * size + j` lands
    /// on cell `(i, j)`, and one face of each die is picked uniformly.
    ///
    /// # Errors
    /// - `GameError::MalformedDiceSet` if `dice.len() != size * size`
    /// - `GameError::EmptyFace` if any die has no letters
    pub fn generate<S, R>(dice: &[S], size: usize, rng: &mut R) -> Result<Self, GameError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let expected = size * size;
        if dice.len() != expected {
            return Err(GameError::MalformedDiceSet {
                expected,
                actual: dice.len(),
            });
        }

        let mut faces: Vec<Vec<char>> = Vec::with_capacity(expected);
        for (index, die) in dice.iter().enumerate() {
            let letters: Vec<char> = die.as_ref().chars().collect();
            if letters.is_empty() {
                return Err(GameError::EmptyFace { index });
            }
            faces.push(letters);
        }

        faces.shuffle(rng);

        let cells = faces
            .iter()
            .filter_map(|letters| letters.choose(rng).copied())
            .collect();

        Self::from_cells(size, cells)
    }

    /// Side length of the grid
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Letter at `(row, col)`
    ///
    /// # Errors
    /// Returns `GameError::OutOfBounds` for coordinates off the board.
    pub fn letter_at(&self, row: usize, col: usize) -> Result<char, GameError> {
        self.index_of(Position::new(row, col)).map(|i| self.cells[i])
    }

    /// The up-to-8 cells surrounding `(row, col)`, clipped to the board
    ///
    /// # Errors
    /// Returns `GameError::OutOfBounds` for coordinates off the board.
    pub fn neighbors(&self, row: usize, col: usize) -> Result<Vec<Position>, GameError> {
        let index = self.index_of(Position::new(row, col))?;
        Ok(self.adjacency[index]
            .iter()
            .map(|&n| self.position_of(n))
            .collect())
    }

    /// True if `pos` lies on the board
    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Row-major cell index for a position
    ///
    /// # Errors
    /// Returns `GameError::OutOfBounds` for positions off the board.
    pub fn index_of(&self, pos: Position) -> Result<usize, GameError> {
        if self.contains(pos) {
            Ok(pos.row * self.size + pos.col)
        } else {
            Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            })
        }
    }

    #[inline]
    #[must_use]
    pub const fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.size, index % self.size)
    }

    /// Iterate over rows of letters, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size)
    }

    #[inline]
    pub(crate) fn cell(&self, index: usize) -> char {
        self.cells[index]
    }

    #[inline]
    pub(crate) fn adjacent(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Uppercase one cell the way `str::to_uppercase` would
///
/// Letters whose uppercase form is more than one char (such as `ß`) are kept
/// as they are, since a cell holds exactly one char.
fn uppercase_letter(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn adjacent_indices(size: usize, index: usize) -> Vec<usize> {
    let row = index / size;
    let col = index % size;
    let mut out = Vec::with_capacity(8);
    for r in row.saturating_sub(1)..=(row + 1).min(size - 1) {
        for c in col.saturating_sub(1)..=(col + 1).min(size - 1) {
            if r != row || c != col {
                out.push(r * size + c);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const DICE: [&str; 16] = [
        "AEIOUY", "AHMNRS", "BCDFGK", "EILPST", "EKLNXZ", "EFGHIJ", "ADENOV", "WFLRTV", "CIMPQU",
        "GHJOTW", "BKNOPZ", "CDLMSY", "ABDEGT", "IJKSUV", "OPRTUX", "XYZVWB",
    ];

    #[test]
    fn from_rows_with_slashes() {
        let board = Board::from_rows("ABCD/EFGH/IJKL/MNOP").unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.letter_at(0, 0).unwrap(), 'A');
        assert_eq!(board.letter_at(1, 2).unwrap(), 'G');
        assert_eq!(board.letter_at(3, 3).unwrap(), 'P');
    }

    #[test]
    fn from_rows_uppercases() {
        let board = Board::from_rows("abc def ghi").unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.letter_at(2, 1).unwrap(), 'H');
    }

    #[test]
    fn from_rows_rejects_ragged_and_non_letters() {
        assert!(matches!(
            Board::from_rows("ABCD/EFG/IJKL/MNOP"),
            Err(GameError::InvalidBoard(_))
        ));
        assert!(matches!(
            Board::from_rows("ABC"),
            Err(GameError::InvalidBoard(_))
        ));
        assert!(matches!(
            Board::from_rows("AB/C1"),
            Err(GameError::InvalidBoard(_))
        ));
        assert!(matches!(Board::from_rows(""), Err(GameError::InvalidBoard(_))));
    }

    #[test]
    fn letter_at_out_of_bounds() {
        let board = Board::from_rows("ABCD/EFGH/IJKL/MNOP").unwrap();
        assert_eq!(
            board.letter_at(4, 0),
            Err(GameError::OutOfBounds {
                row: 4,
                col: 0,
                size: 4
            })
        );
        assert!(board.letter_at(0, 4).is_err());
    }

    #[test]
    fn corner_has_three_neighbors() {
        let board = Board::from_rows("ABCD/EFGH/IJKL/MNOP").unwrap();
        let mut n = board.neighbors(0, 0).unwrap();
        n.sort();
        assert_eq!(
            n,
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn edge_and_center_neighbor_counts() {
        let board = Board::from_rows("ABCD/EFGH/IJKL/MNOP").unwrap();
        assert_eq!(board.neighbors(0, 1).unwrap().len(), 5);
        assert_eq!(board.neighbors(1, 1).unwrap().len(), 8);
        assert_eq!(board.neighbors(3, 3).unwrap().len(), 3);
        assert!(board.neighbors(2, 5).is_err());
    }

    #[test]
    fn neighbors_exclude_self_and_are_adjacent() {
        let board = Board::from_rows("ABCD/EFGH/IJKL/MNOP").unwrap();
        for row in 0..4 {
            for col in 0..4 {
                let here = Position::new(row, col);
                for n in board.neighbors(row, col).unwrap() {
                    assert_ne!(n, here);
                    assert!(here.is_adjacent(n));
                }
            }
        }
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        let board = Board::from_rows("Z").unwrap();
        assert!(board.neighbors(0, 0).unwrap().is_empty());
    }

    #[test]
    fn position_adjacency() {
        let p = Position::new(1, 1);
        assert!(p.is_adjacent(Position::new(0, 0)));
        assert!(p.is_adjacent(Position::new(2, 2)));
        assert!(p.is_adjacent(Position::new(1, 2)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Position::new(3, 1)));
    }

    #[test]
    fn generate_rejects_wrong_dice_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = Board::generate(&DICE[..15], GRID_SIZE, &mut rng);
        assert_eq!(
            result,
            Err(GameError::MalformedDiceSet {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn generate_rejects_empty_face() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut dice = DICE.to_vec();
        dice[3] = "";
        let result = Board::generate(&dice, GRID_SIZE, &mut rng);
        assert_eq!(result, Err(GameError::EmptyFace { index: 3 }));
    }

    #[test]
    fn generate_is_reproducible_with_seed() {
        let a = Board::generate(&DICE, GRID_SIZE, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Board::generate(&DICE, GRID_SIZE, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generate_uses_each_die_once() {
        // Dice with disjoint letters make the die behind every cell identifiable.
        let dice: Vec<String> = (0..16u8)
            .map(|i| char::from(b'A' + i).to_string())
            .collect();
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::generate(&dice, GRID_SIZE, &mut rng).unwrap();

        let mut letters: Vec<char> = board.rows().flatten().copied().collect();
        letters.sort_unstable();
        let expected: Vec<char> = ('A'..='P').collect();
        assert_eq!(letters, expected);
    }

    #[test]
    fn generate_picks_faces_from_their_die() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = Board::generate(&DICE, GRID_SIZE, &mut rng).unwrap();
        for letter in board.rows().flatten() {
            assert!(DICE.iter().any(|die| die.contains(*letter)));
        }
    }

    #[test]
    fn non_ascii_letters_are_uppercased() {
        let board = Board::from_rows("åsa/xxx/xxx").unwrap();
        assert_eq!(board.letter_at(0, 0).unwrap(), 'Å');
        assert_eq!(board.letter_at(1, 1).unwrap(), 'X');
    }

    #[test]
    fn multi_char_uppercase_is_left_alone() {
        let board = Board::from_rows("ßa/bc").unwrap();
        assert_eq!(board.letter_at(0, 0).unwrap(), 'ß');
        assert_eq!(board.letter_at(0, 1).unwrap(), 'A');
    }

    #[test]
    fn display_renders_rows() {
        let board = Board::from_rows("AB/CD").unwrap();
        assert_eq!(board.to_string(), "A B\nC D");
    }
}
