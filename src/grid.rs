//! Board representation and neighbourhood queries.
//!
//! The board is a flat row-major array (`y` varies fastest, matching the
//! solver's cursor order). Each cell holds a 1-based ship marker, or 0
//! for open water.

use std::fmt::{self, Write as _};

/// An N×N placement board of ship markers.
///
/// Owned exclusively by one solve; all mutation goes through the
/// solver's seat/unseat operations, which are exact inverses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates an empty board of `size` × `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, x: i32, y: i32) -> usize {
        x as usize * self.size + y as usize
    }

    /// True when `(x, y)` lies outside the board.
    pub fn is_outside(&self, x: i32, y: i32) -> bool {
        x < 0 || y < 0 || x >= self.size as i32 || y >= self.size as i32
    }

    /// Marker at `(x, y)`; 0 means open water. The cell must be in bounds.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.cells[self.idx(x, y)]
    }

    pub(crate) fn set(&mut self, x: i32, y: i32, marker: u8) {
        let cell = self.idx(x, y);
        self.cells[cell] = marker;
    }

    pub(crate) fn clear(&mut self, x: i32, y: i32) {
        self.set(x, y, 0);
    }

    /// True when `(x, y)` is outside the board or holds no ship segment.
    pub fn free_or_outside(&self, x: i32, y: i32) -> bool {
        self.is_outside(x, y) || self.get(x, y) == 0
    }

    /// True when none of the eight neighbours of `(x, y)` holds a ship
    /// segment. Distinct ships may never touch, not even diagonally.
    pub fn has_no_neighbours(&self, x: i32, y: i32) -> bool {
        self.free_or_outside(x - 1, y)
            && self.free_or_outside(x + 1, y)
            && self.free_or_outside(x, y - 1)
            && self.free_or_outside(x, y + 1)
            && self.free_or_outside(x + 1, y - 1)
            && self.free_or_outside(x + 1, y + 1)
            && self.free_or_outside(x - 1, y - 1)
            && self.free_or_outside(x - 1, y + 1)
    }

    /// Occupancy of row `x`, scanned along `y`.
    pub fn row(&self, x: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.size).map(move |y| self.cells[x * self.size + y] > 0)
    }

    /// Occupancy of column `y`, scanned along `x`.
    pub fn col(&self, y: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.size).map(move |x| self.cells[x * self.size + y] > 0)
    }

    /// The board as nested rows of 1-based ship markers.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect()
    }
}

/// Renders the board one row per line: `.` for open water, `1`-`9` for
/// ship markers, then `A`, `B`, ... for markers of 10 and above.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for &marker in row {
                let display_char = if marker == 0 {
                    '.'
                } else if marker < 10 {
                    char::from(b'0' + marker)
                } else {
                    char::from(b'A' + marker - 10)
                };
                f.write_char(display_char)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_open_water() {
        let grid = Grid::new(4);
        for x in 0..4 {
            for y in 0..4 {
                assert_eq!(grid.get(x, y), 0);
            }
        }
    }

    #[test]
    fn test_is_outside_bounds() {
        let grid = Grid::new(3);
        assert!(grid.is_outside(-1, 0));
        assert!(grid.is_outside(0, -1));
        assert!(grid.is_outside(3, 0));
        assert!(grid.is_outside(0, 3));
        assert!(!grid.is_outside(0, 0));
        assert!(!grid.is_outside(2, 2));
    }

    #[test]
    fn test_free_or_outside() {
        let mut grid = Grid::new(3);
        grid.set(1, 1, 2);
        assert!(grid.free_or_outside(-1, -1));
        assert!(grid.free_or_outside(0, 0));
        assert!(!grid.free_or_outside(1, 1));
    }

    #[test]
    fn test_diagonal_occupancy_counts_as_neighbour() {
        let mut grid = Grid::new(4);
        assert!(grid.has_no_neighbours(1, 1));
        grid.set(2, 2, 1);
        assert!(!grid.has_no_neighbours(1, 1));
        // two cells apart is fine
        assert!(grid.has_no_neighbours(0, 0));
    }

    #[test]
    fn test_line_iterators_follow_axes() {
        let mut grid = Grid::new(3);
        grid.set(0, 1, 1);
        grid.set(2, 1, 2);
        let row: Vec<bool> = grid.row(0).collect();
        assert_eq!(row, [false, true, false]);
        let col: Vec<bool> = grid.col(1).collect();
        assert_eq!(col, [true, false, true]);
    }

    #[test]
    fn test_render_markers_and_water() {
        let mut grid = Grid::new(3);
        grid.set(0, 0, 1);
        grid.set(1, 2, 2);
        grid.set(2, 1, 11);
        insta::assert_snapshot!(grid.to_string().trim_end(), @r"
        1..
        ..2
        .B.
        ");
    }
}
