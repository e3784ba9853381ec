//! Puzzle instances: the fleet and the per-line run constraints.

use thiserror::Error;

/// A single ship: a straight run of `length` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ship {
    length: usize,
}

impl Ship {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Errors rejecting a malformed problem instance before any solving.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("expected {expected} row constraint lists, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("expected {expected} column constraint lists, found {found}")]
    ColCount { expected: usize, found: usize },
    #[error("ship {index} has length {length}, outside the supported range 1..={max}")]
    ShipLength {
        index: usize,
        length: usize,
        max: usize,
    },
}

/// A validated battleship solitaire instance.
///
/// Construction checks the shapes the solver relies on: one constraint
/// list per row and per column, and ship lengths strictly below the
/// grid size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    grid_size: usize,
    ships: Vec<Ship>,
    rows: Vec<Vec<usize>>,
    cols: Vec<Vec<usize>>,
}

impl Puzzle {
    pub fn new(
        grid_size: usize,
        ships: Vec<Ship>,
        rows: Vec<Vec<usize>>,
        cols: Vec<Vec<usize>>,
    ) -> Result<Self, PuzzleError> {
        if grid_size == 0 {
            return Err(PuzzleError::EmptyGrid);
        }
        if rows.len() != grid_size {
            return Err(PuzzleError::RowCount {
                expected: grid_size,
                found: rows.len(),
            });
        }
        if cols.len() != grid_size {
            return Err(PuzzleError::ColCount {
                expected: grid_size,
                found: cols.len(),
            });
        }
        for (index, ship) in ships.iter().enumerate() {
            if ship.length() == 0 || ship.length() >= grid_size {
                return Err(PuzzleError::ShipLength {
                    index,
                    length: ship.length(),
                    max: grid_size - 1,
                });
            }
        }
        Ok(Self {
            grid_size,
            ships,
            rows,
            cols,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    pub fn cols(&self) -> &[Vec<usize>] {
        &self.cols
    }

    /// Run list of row `x`.
    pub fn row_runs(&self, x: usize) -> &[usize] {
        &self.rows[x]
    }

    /// Run list of column `y`.
    pub fn col_runs(&self, y: usize) -> &[usize] {
        &self.cols[y]
    }
}

/// The classic 5×5 instance: six ships, one cell forced by the third
/// column's fully determined layout.
pub fn classic() -> Puzzle {
    Puzzle::new(
        5,
        vec![
            Ship::new(1),
            Ship::new(1),
            Ship::new(1),
            Ship::new(2),
            Ship::new(2),
            Ship::new(3),
        ],
        vec![vec![2, 1], vec![], vec![1, 1], vec![], vec![1]],
        vec![vec![1], vec![], vec![2, 2], vec![], vec![2, 1]],
    )
    .expect("classic instance is well formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_instance_shape() {
        let puzzle = classic();
        assert_eq!(puzzle.grid_size(), 5);
        assert_eq!(puzzle.ships().len(), 6);
        let lengths: Vec<usize> = puzzle.ships().iter().map(Ship::length).collect();
        assert_eq!(lengths, [1, 1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_zero_grid_is_rejected() {
        assert_eq!(
            Puzzle::new(0, vec![], vec![], vec![]),
            Err(PuzzleError::EmptyGrid)
        );
    }

    #[test]
    fn test_constraint_list_counts_must_match_grid() {
        assert_eq!(
            Puzzle::new(2, vec![], vec![vec![]], vec![vec![], vec![]]),
            Err(PuzzleError::RowCount {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Puzzle::new(2, vec![], vec![vec![], vec![]], vec![]),
            Err(PuzzleError::ColCount {
                expected: 2,
                found: 0
            })
        );
    }

    #[test]
    fn test_ship_lengths_must_fit_the_grid() {
        let rows = vec![vec![], vec![], vec![]];
        let cols = rows.clone();
        assert_eq!(
            Puzzle::new(3, vec![Ship::new(0)], rows.clone(), cols.clone()),
            Err(PuzzleError::ShipLength {
                index: 0,
                length: 0,
                max: 2
            })
        );
        assert_eq!(
            Puzzle::new(3, vec![Ship::new(1), Ship::new(3)], rows, cols),
            Err(PuzzleError::ShipLength {
                index: 1,
                length: 3,
                max: 2
            })
        );
    }
}
