//! Board model for the 8-queens problem.
//!
//! A [`Board`] places exactly one queen per column: index = column,
//! value = row. Rows are not required to be distinct, so two queens may
//! share a row. The fitness of a board is the number of non-attacking
//! queen pairs, out of `C(8, 2) = 28`.

use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::ops::Index;

/// Number of columns (and rows) on the board.
pub const BOARD_SIZE: usize = 8;

/// Fitness of a board with no attacking pairs: `C(BOARD_SIZE, 2)`.
pub const MAX_FITNESS: u32 = (BOARD_SIZE * (BOARD_SIZE - 1) / 2) as u32;

/// A candidate queen placement, one queen per column.
///
/// Boards are small `Copy` values; operators always produce new boards
/// instead of aliasing their inputs.
///
/// # Examples
///
/// ```
/// use queens_ga::board::{Board, MAX_FITNESS};
///
/// let board = Board::from_rows([0, 4, 7, 5, 2, 6, 1, 3]).unwrap();
/// assert_eq!(board.fitness(), MAX_FITNESS);
/// assert!(board.is_solution());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: [usize; BOARD_SIZE],
}

impl Board {
    /// Builds a board from row indices, rejecting rows outside the grid.
    pub fn from_rows(rows: [usize; BOARD_SIZE]) -> Result<Self> {
        if let Some((column, &row)) = rows.iter().enumerate().find(|&(_, &r)| r >= BOARD_SIZE) {
            return Err(Error::RowOutOfRange { column, row });
        }
        Ok(Self { rows })
    }

    /// Builds a board from rows already known to be in range.
    pub(crate) fn from_rows_unchecked(rows: [usize; BOARD_SIZE]) -> Self {
        debug_assert!(rows.iter().all(|&r| r < BOARD_SIZE));
        Self { rows }
    }

    /// Generates a uniformly random permutation of `0..BOARD_SIZE`.
    ///
    /// Every row is used exactly once, so random boards never have row
    /// conflicts; only diagonal attacks remain.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut rows: [usize; BOARD_SIZE] = std::array::from_fn(|i| i);
        rows.shuffle(rng);
        Self { rows }
    }

    /// Row indices, one per column.
    pub fn rows(&self) -> &[usize; BOARD_SIZE] {
        &self.rows
    }

    /// Returns a copy of this board with `column` moved to `row`.
    pub(crate) fn with_row(mut self, column: usize, row: usize) -> Self {
        debug_assert!(row < BOARD_SIZE);
        self.rows[column] = row;
        self
    }

    /// Number of queen pairs that attack each other.
    ///
    /// Two queens attack when they share a row or a diagonal. Taking the
    /// absolute row difference covers both diagonal directions.
    pub fn attacking_pairs(&self) -> u32 {
        let mut attacks = 0;
        for i in 0..BOARD_SIZE {
            for j in (i + 1)..BOARD_SIZE {
                let (a, b) = (self.rows[i], self.rows[j]);
                if a == b || a.abs_diff(b) == j - i {
                    attacks += 1;
                }
            }
        }
        attacks
    }

    /// Fitness: `MAX_FITNESS - attacking_pairs`, in `[0, MAX_FITNESS]`.
    pub fn fitness(&self) -> u32 {
        MAX_FITNESS - self.attacking_pairs()
    }

    /// Whether no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.attacking_pairs() == 0
    }
}

impl Index<usize> for Board {
    type Output = usize;

    fn index(&self, column: usize) -> &usize {
        &self.rows[column]
    }
}

/// Renders the board as a grid: `Q` marks a queen, `.` an empty square.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let line: Vec<&str> = self
                .rows
                .iter()
                .map(|&r| if r == row { "Q" } else { "." })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn board(rows: [usize; BOARD_SIZE]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_max_fitness_constant() {
        assert_eq!(MAX_FITNESS, 28);
    }

    #[test]
    fn test_known_solution() {
        let b = board([0, 4, 7, 5, 2, 6, 1, 3]);
        assert_eq!(b.attacking_pairs(), 0);
        assert_eq!(b.fitness(), 28);
        assert!(b.is_solution());
    }

    #[test]
    fn test_same_row_is_worst_case() {
        let b = board([0; BOARD_SIZE]);
        assert_eq!(b.attacking_pairs(), 28);
        assert_eq!(b.fitness(), 0);
        assert!(!b.is_solution());
    }

    #[test]
    fn test_main_diagonal() {
        // Every pair shares the main diagonal.
        let b = board([0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(b.fitness(), 0);
    }

    #[test]
    fn test_anti_diagonal() {
        let b = board([7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(b.fitness(), 0);
    }

    #[test]
    fn test_swapped_tail_has_two_conflicts() {
        // Swapping the last two rows of a solution creates two diagonal
        // attacks: columns 2/6 and columns 3/7.
        let b = board([0, 4, 7, 5, 2, 6, 3, 1]);
        assert_eq!(b.attacking_pairs(), 2);
        assert_eq!(b.fitness(), 26);
    }

    #[test]
    fn test_from_rows_rejects_out_of_range() {
        let err = Board::from_rows([0, 1, 2, 8, 4, 5, 6, 7]).unwrap_err();
        assert_eq!(err, Error::RowOutOfRange { column: 3, row: 8 });
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let b = Board::random(&mut rng);
            let set: HashSet<usize> = b.rows().iter().copied().collect();
            assert_eq!(set.len(), BOARD_SIZE, "not a permutation: {b:?}");
            assert!(b.rows().iter().all(|&r| r < BOARD_SIZE));
        }
    }

    #[test]
    fn test_random_varies() {
        let mut rng = create_rng(1);
        let boards: HashSet<Board> = (0..50).map(|_| Board::random(&mut rng)).collect();
        assert!(boards.len() > 1);
    }

    #[test]
    fn test_index() {
        let b = board([3, 1, 4, 1, 5, 0, 2, 6]);
        assert_eq!(b[0], 3);
        assert_eq!(b[7], 6);
    }

    #[test]
    fn test_display_grid() {
        let b = board([0, 4, 7, 5, 2, 6, 1, 3]);
        let rendered = b.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), BOARD_SIZE);
        assert_eq!(lines[0], "Q . . . . . . .");
        assert_eq!(lines[7], ". . Q . . . . .");
        assert_eq!(rendered.matches('Q').count(), BOARD_SIZE);
    }

    proptest! {
        #[test]
        fn prop_fitness_in_range(rows in prop::array::uniform8(0usize..BOARD_SIZE)) {
            let b = board(rows);
            prop_assert!(b.fitness() <= MAX_FITNESS);
        }

        #[test]
        fn prop_fitness_is_pure(rows in prop::array::uniform8(0usize..BOARD_SIZE)) {
            let b = board(rows);
            prop_assert_eq!(b.fitness(), b.fitness());
            prop_assert_eq!(b.fitness(), board(rows).fitness());
        }

        #[test]
        fn prop_mirror_preserves_fitness(rows in prop::array::uniform8(0usize..BOARD_SIZE)) {
            let mut mirrored = rows;
            mirrored.reverse();
            prop_assert_eq!(board(rows).fitness(), board(mirrored).fitness());
        }
    }
}
