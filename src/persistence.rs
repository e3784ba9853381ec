//! Puzzle files and solution output.
//!
//! A puzzle file is JSON carrying the same four fields as
//! [`Puzzle::new`]; ships are given as their lengths:
//!
//! ```json
//! {
//!   "grid_size": 5,
//!   "ships": [1, 1, 1, 2, 2, 3],
//!   "rows": [[2, 1], [], [1, 1], [], [1]],
//!   "cols": [[1], [], [2, 2], [], [2, 1]]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::grid::Grid;
use crate::puzzle::{Puzzle, PuzzleError, Ship};

const SOLUTION_TXT: &str = "solution.txt";

/// Failures while reading a puzzle file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read puzzle file: {0}")]
    Io(#[from] std::io::Error),
    #[error("puzzle file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

#[derive(Deserialize)]
struct PuzzleFile {
    grid_size: usize,
    ships: Vec<usize>,
    rows: Vec<Vec<usize>>,
    cols: Vec<Vec<usize>>,
}

/// Decodes a puzzle from its JSON form.
pub fn puzzle_from_json(json: &str) -> Result<Puzzle, LoadError> {
    let file: PuzzleFile = serde_json::from_str(json)?;
    let ships = file.ships.into_iter().map(Ship::new).collect();
    Ok(Puzzle::new(file.grid_size, ships, file.rows, file.cols)?)
}

/// Loads a puzzle from a JSON file on disk.
pub fn load_puzzle(path: &Path) -> Result<Puzzle, LoadError> {
    puzzle_from_json(&fs::read_to_string(path)?)
}

/// Writes the solved board to `solution.txt` in its text rendering.
pub fn save_solution(grid: &Grid) -> std::io::Result<()> {
    fs::write(SOLUTION_TXT, grid.to_string())
}
