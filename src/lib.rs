//! Battleship Solitaire Solver Library
//!
//! Given a square board, a fleet of straight ships, and per-row /
//! per-column run constraints, finds one arrangement where no two ships
//! touch (not even diagonally) and every line matches its constraint.
//! Cells the constraints provably force are marked before a
//! backtracking search seats the fleet.

pub mod constraint;
pub mod geometry;
pub mod grid;
mod logging;
pub mod persistence;
pub mod puzzle;
mod solver;

pub use logging::init_logging;
pub use solver::{Runner, SolveError};

use grid::Grid;
use puzzle::Puzzle;

/// Solves `puzzle`, returning the finished board.
///
/// Convenience over [`Runner`] for callers that only need the grid.
pub fn solve(puzzle: Puzzle) -> Result<Grid, SolveError> {
    let mut runner = Runner::new(puzzle);
    runner.run()?;
    runner.into_grid()
}
