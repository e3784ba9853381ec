//! Backtracking placement search.
//!
//! The runner owns the board, the fleet, and the mandatory mask for the
//! duration of one solve. The search scans the board cell by cell,
//! seating unseated ships at the cursor and undoing every seating that
//! leads nowhere. Row and column checks are re-run globally at each
//! entry; simple over incremental, and cheap at the board sizes this
//! puzzle is played at.

use log::debug;
use thiserror::Error;

use crate::constraint::{line_satisfied, MandatoryMask};
use crate::geometry::{Orientation, Position};
use crate::grid::Grid;
use crate::puzzle::Puzzle;

/// Terminal outcomes of a solve.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The constraints cannot fit the board; proven before any search.
    #[error("constraints cannot be satisfied on this board")]
    InvalidConstraints,
    /// The instance is consistent but admits no legal placement.
    #[error("no ship arrangement satisfies the constraints")]
    NoSolution,
    /// `result` was called before a successful solve.
    #[error("no solution has been computed yet")]
    NotReady,
}

/// Owns one solve: [`run`](Runner::run) validates and searches,
/// [`result`](Runner::result) hands out the finished board.
pub struct Runner {
    puzzle: Puzzle,
    grid: Grid,
    positions: Vec<Position>,
    mandatory: MandatoryMask,
    solution_found: bool,
}

impl Runner {
    /// Creates a runner for `puzzle` with an open board and every ship
    /// unseated.
    pub fn new(puzzle: Puzzle) -> Self {
        let size = puzzle.grid_size();
        Self {
            grid: Grid::new(size),
            positions: vec![Position::unset(); puzzle.ships().len()],
            mandatory: MandatoryMask::empty(size),
            solution_found: false,
            puzzle,
        }
    }

    /// Validates the constraints, then searches for a placement from
    /// the board origin.
    ///
    /// Fails with [`SolveError::InvalidConstraints`] when the
    /// constraints cannot fit the board (the search is never entered),
    /// and with [`SolveError::NoSolution`] when the search space is
    /// exhausted.
    pub fn run(&mut self) -> Result<(), SolveError> {
        let size = self.puzzle.grid_size();
        self.mandatory = MandatoryMask::compute(size, self.puzzle.rows(), self.puzzle.cols())
            .ok_or(SolveError::InvalidConstraints)?;
        self.solution_found = self.place_ships(0, 0);
        if self.solution_found {
            debug!(
                "seated {} ships on a {size}x{size} board",
                self.puzzle.ships().len()
            );
            Ok(())
        } else {
            debug!("search space exhausted without a solution");
            Err(SolveError::NoSolution)
        }
    }

    /// The solved board. Fails with [`SolveError::NotReady`] unless a
    /// prior [`run`](Runner::run) succeeded.
    pub fn result(&self) -> Result<&Grid, SolveError> {
        if self.solution_found {
            Ok(&self.grid)
        } else {
            Err(SolveError::NotReady)
        }
    }

    /// Consumes the runner, returning the solved board.
    pub fn into_grid(self) -> Result<Grid, SolveError> {
        if self.solution_found {
            Ok(self.grid)
        } else {
            Err(SolveError::NotReady)
        }
    }

    fn row_satisfied(&self, x: usize) -> bool {
        line_satisfied(self.grid.row(x), self.puzzle.row_runs(x))
    }

    fn col_satisfied(&self, y: usize) -> bool {
        line_satisfied(self.grid.col(y), self.puzzle.col_runs(y))
    }

    /// True when every ship is seated and every row and column passes
    /// its run check.
    fn all_ships_placed(&self) -> bool {
        if !self.positions.iter().all(Position::is_active) {
            return false;
        }
        let size = self.puzzle.grid_size();
        (0..size).all(|x| self.row_satisfied(x)) && (0..size).all(|y| self.col_satisfied(y))
    }

    /// The recursive search over the cell cursor. `y` varies fastest; a
    /// row's check must hold before the cursor wraps past it.
    fn place_ships(&mut self, x: i32, y: i32) -> bool {
        if self.all_ships_placed() {
            return true;
        }

        let size = self.puzzle.grid_size() as i32;
        if self.grid.is_outside(x, y) {
            if x < size && y >= size {
                return self.row_satisfied(x as usize) && self.place_ships(x + 1, 0);
            }
            // cursor ran past the last row
            return false;
        }

        if self.grid.get(x, y) == 0 {
            // equal-length ships are interchangeable here, so each
            // remaining length is attempted once
            let mut tried = vec![false; size as usize];
            for ship_index in 0..self.positions.len() {
                let length = self.puzzle.ships()[ship_index].length();
                if self.positions[ship_index].is_active() || tried[length] {
                    continue;
                }
                tried[length] = true;
                for orientation in Orientation::ALL {
                    if self.seat_ship(x, y, ship_index, orientation) {
                        if self.place_ships(x, y + 1) {
                            return true;
                        }
                        self.positions[ship_index] = Position::unset();
                        self.unseat_from(x, y);
                    }
                }
            }
        }

        if self.mandatory.marked(x, y) {
            return false;
        }
        if x == size - 1 && !self.col_satisfied(y as usize) {
            return false;
        }

        self.place_ships(x, y + 1)
    }

    /// Seats ship `ship_index` at `(x, y)` growing along `orientation`.
    /// Nothing is written unless the whole run fits.
    fn seat_ship(&mut self, x: i32, y: i32, ship_index: usize, orientation: Orientation) -> bool {
        let length = self.puzzle.ships()[ship_index].length();
        if !self.run_fits(x, y, length, orientation) {
            return false;
        }
        let (dx, dy) = orientation.delta();
        let marker = ship_index as u8 + 1;
        let (mut cx, mut cy) = (x, y);
        for _ in 0..length {
            self.grid.set(cx, cy, marker);
            cx += dx;
            cy += dy;
        }
        self.positions[ship_index] = Position::new(x, y);
        true
    }

    /// Every cell of the run must be on the board, free, clear of all
    /// eight neighbours, and off the diagonals of mandatory cells.
    fn run_fits(&self, x: i32, y: i32, length: usize, orientation: Orientation) -> bool {
        let (dx, dy) = orientation.delta();
        let (mut cx, mut cy) = (x, y);
        for _ in 0..length {
            if self.grid.is_outside(cx, cy)
                || !self.grid.has_no_neighbours(cx, cy)
                || self.grid.get(cx, cy) != 0
                || !self.mandatory.diagonals_free(cx, cy)
            {
                return false;
            }
            cx += dx;
            cy += dy;
        }
        true
    }

    /// Clears a seated run by flooding outward from `(x, y)` through
    /// 4-connected occupied cells. Ships never touch, so the flood
    /// stays within one ship.
    fn unseat_from(&mut self, x: i32, y: i32) {
        let mut pending = vec![(x, y)];
        while let Some((cx, cy)) = pending.pop() {
            if self.grid.is_outside(cx, cy) || self.grid.get(cx, cy) == 0 {
                continue;
            }
            self.grid.clear(cx, cy);
            pending.push((cx + 1, cy));
            pending.push((cx - 1, cy));
            pending.push((cx, cy + 1));
            pending.push((cx, cy - 1));
        }
    }
}
