//! Battleship Solitaire Solver
//!
//! Reads a puzzle description (board size, fleet, per-line run
//! constraints) from a JSON file, finds a placement where no two ships
//! touch and every row and column matches its constraint, and prints
//! the board.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use armada::{init_logging, persistence, puzzle, solve};

/// Solves battleship solitaire puzzles.
#[derive(Parser)]
#[command(name = "armada")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle file and save the board to solution.txt.
    Solve {
        /// Path to the puzzle JSON file.
        file: PathBuf,
    },
    /// Solve the built-in classic 5x5 instance and print the board.
    Demo,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve { file }) => run_solve(&file),
        Some(Command::Demo) | None => run_demo(),
    }
}

/// Loads, solves, prints, and saves one puzzle file.
fn run_solve(file: &Path) {
    let puzzle = match persistence::load_puzzle(file) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", file.display());
            return;
        }
    };

    match solve(puzzle) {
        Ok(grid) => {
            print!("{grid}");
            if let Err(e) = persistence::save_solution(&grid) {
                eprintln!("Failed to save solution: {e}");
            } else {
                println!("Wrote solution.txt");
            }
        }
        Err(e) => eprintln!("{e}"),
    }
}

/// Solves the built-in instance and prints the board.
fn run_demo() {
    match solve(puzzle::classic()) {
        Ok(grid) => print!("{grid}"),
        Err(e) => eprintln!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_instance_solves() {
        let grid = solve(puzzle::classic()).unwrap();
        assert_eq!(grid.size(), 5);
    }
}
