//! Per-line run constraints and the mandatory-cell precomputation.
//!
//! Every row and column declares an ordered list of run lengths
//! describing the stretches of open water along that line. A line whose
//! runs and their single-cell separators span the whole board has only
//! one possible layout; the cells that layout forces to hold ship
//! segments are collected into a [`MandatoryMask`] before any search.

/// Checks a line's occupancy against its declared run lengths.
///
/// Walks the line accumulating the current run of open water; a ship
/// cell closing a nonzero run must match the next declared length
/// exactly. Scanning stops once every declared run is consumed. The
/// line passes when all runs were consumed, or when exactly one
/// remains and it is either the literal 0 or equal to the still-open
/// trailing run. The trailing rule keeps partially filled lines
/// acceptable mid-search while still rejecting any run whose length is
/// already wrong.
pub fn line_satisfied<I>(line: I, runs: &[usize]) -> bool
where
    I: IntoIterator<Item = bool>,
{
    let mut next = 0;
    let mut gap = 0;
    for occupied in line {
        if next >= runs.len() {
            break;
        }
        if occupied {
            if gap == 0 {
                continue;
            }
            if gap != runs[next] {
                return false;
            }
            next += 1;
            gap = 0;
        } else {
            gap += 1;
        }
    }

    next >= runs.len() || (next + 1 == runs.len() && (runs[next] == 0 || gap == runs[next]))
}

/// Minimum board span a line's declared runs need: their sum plus one
/// separator cell between each pair of nonzero runs.
pub fn required_span(runs: &[usize]) -> usize {
    let total: usize = runs.iter().sum();
    let nonzero = runs.iter().filter(|&&len| len > 0).count();
    total + nonzero.saturating_sub(1)
}

/// Cells that must hold a ship segment in every valid arrangement.
///
/// Derived from the constraints alone; the board is never consulted,
/// and each call builds a fresh mask, so recomputation over the same
/// input yields the same result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MandatoryMask {
    size: usize,
    cells: Vec<bool>,
}

impl MandatoryMask {
    /// A mask with no marked cells.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Derives the mask for a board of `size` cells per line. `rows`
    /// and `cols` must each hold one run list per line.
    ///
    /// Returns `None` when the constraints are inconsistent: a line
    /// whose span exceeds the board, or a fully determined line whose
    /// forced cells would diagonally touch ones already forced.
    pub fn compute(size: usize, rows: &[Vec<usize>], cols: &[Vec<usize>]) -> Option<Self> {
        let mut mask = Self::empty(size);
        for i in 0..size {
            let col_span = required_span(&cols[i]);
            let row_span = required_span(&rows[i]);
            if col_span > size || row_span > size {
                return None;
            }
            if col_span == size && !mask.mark_column(i, &cols[i]) {
                return None;
            }
            if row_span == size && !mask.mark_row(i, &rows[i]) {
                return None;
            }
        }
        Some(mask)
    }

    /// Marks the forced cells of fully determined column `y`: the run
    /// layout has no slack, so a ship segment sits after every run of
    /// open water.
    fn mark_column(&mut self, y: usize, runs: &[usize]) -> bool {
        let Some(&first) = runs.first() else {
            return true;
        };
        let mut x = first;
        while x < self.size {
            if !self.diagonals_free(x as i32, y as i32) {
                return false;
            }
            self.cells[x * self.size + y] = true;
            x += first + 1;
        }
        true
    }

    fn mark_row(&mut self, x: usize, runs: &[usize]) -> bool {
        let Some(&first) = runs.first() else {
            return true;
        };
        let mut y = first;
        while y < self.size {
            if !self.diagonals_free(x as i32, y as i32) {
                return false;
            }
            self.cells[x * self.size + y] = true;
            y += first + 1;
        }
        true
    }

    /// True when `(x, y)` is marked. Cells off the board never are.
    pub fn marked(&self, x: i32, y: i32) -> bool {
        !self.is_outside(x, y) && self.cells[x as usize * self.size + y as usize]
    }

    /// True when none of the four diagonal neighbours of `(x, y)` is
    /// marked. A ship segment may not diagonally touch a cell reserved
    /// for another ship.
    pub fn diagonals_free(&self, x: i32, y: i32) -> bool {
        !self.marked(x - 1, y - 1)
            && !self.marked(x - 1, y + 1)
            && !self.marked(x + 1, y - 1)
            && !self.marked(x + 1, y + 1)
    }

    fn is_outside(&self, x: i32, y: i32) -> bool {
        x < 0 || y < 0 || x >= self.size as i32 || y >= self.size as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_rows() -> Vec<Vec<usize>> {
        vec![vec![2, 1], vec![], vec![1, 1], vec![], vec![1]]
    }

    fn classic_cols() -> Vec<Vec<usize>> {
        vec![vec![1], vec![], vec![2, 2], vec![], vec![2, 1]]
    }

    #[test]
    fn test_empty_runs_accept_any_line() {
        assert!(line_satisfied([false, true, true, false], &[]));
        assert!(line_satisfied([false; 4], &[]));
    }

    #[test]
    fn test_exact_run_sequence_passes() {
        // two open cells, a ship, one open cell, a ship
        assert!(line_satisfied([false, false, true, false, true], &[2, 1]));
    }

    #[test]
    fn test_closed_run_must_match_exactly() {
        assert!(!line_satisfied([false, true, false, false, true], &[2, 1]));
    }

    #[test]
    fn test_trailing_open_run_may_stay_unclosed() {
        assert!(line_satisfied([false, false, true, false, false], &[2, 2]));
        assert!(!line_satisfied([false, false, true, false], &[2, 2]));
    }

    #[test]
    fn test_literal_zero_tail_is_accepted() {
        assert!(line_satisfied([false, false, true], &[2, 0]));
    }

    #[test]
    fn test_scanning_stops_after_last_run() {
        assert!(line_satisfied([false, true, true, false, true], &[1]));
    }

    #[test]
    fn test_leading_ship_cells_close_no_run() {
        assert!(!line_satisfied([true, true, false, true], &[2]));
    }

    #[test]
    fn test_fully_open_line_matches_single_run() {
        assert!(line_satisfied([false; 5], &[5]));
        assert!(!line_satisfied([false; 5], &[4]));
    }

    #[test]
    fn test_required_span_counts_separators() {
        assert_eq!(required_span(&[2, 1]), 4);
        assert_eq!(required_span(&[5]), 5);
        assert_eq!(required_span(&[]), 0);
        assert_eq!(required_span(&[0, 0]), 0);
    }

    #[test]
    fn test_classic_constraints_force_one_cell() {
        let mask = MandatoryMask::compute(5, &classic_rows(), &classic_cols()).unwrap();
        for x in 0..5 {
            for y in 0..5 {
                assert_eq!(mask.marked(x, y), (x, y) == (2, 2), "cell ({x},{y})");
            }
        }
    }

    #[test]
    fn test_mask_recomputation_is_identical() {
        let rows = classic_rows();
        let cols = classic_cols();
        let first = MandatoryMask::compute(5, &rows, &cols).unwrap();
        let second = MandatoryMask::compute(5, &rows, &cols).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_overlong_line_is_inconsistent() {
        let rows = vec![vec![3, 3], vec![], vec![], vec![], vec![]];
        let cols = vec![vec![], vec![], vec![], vec![], vec![]];
        assert_eq!(MandatoryMask::compute(5, &rows, &cols), None);
    }

    #[test]
    fn test_diagonally_touching_forced_cells_are_inconsistent() {
        // column 0 forces a segment at (1, 0); row 0 would force one at
        // (0, 1), diagonal to it
        let rows = vec![vec![1, 1], vec![], vec![]];
        let cols = vec![vec![1, 1], vec![], vec![]];
        assert_eq!(MandatoryMask::compute(3, &rows, &cols), None);
    }

    #[test]
    fn test_unconstrained_lines_force_nothing() {
        let rows = vec![vec![1], vec![], vec![]];
        let cols = vec![vec![], vec![2], vec![]];
        let mask = MandatoryMask::compute(3, &rows, &cols).unwrap();
        for x in 0..3 {
            for y in 0..3 {
                assert!(!mask.marked(x, y));
            }
        }
    }
}
