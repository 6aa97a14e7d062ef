//! Coordinate keys for sparse storage

/// Immutable (row, column) coordinate
///
/// Ordering is row-major, so sorting a list of pairs yields the order in
/// which entries appear when the matrix is read row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPair {
    row: usize,
    col: usize,
}

impl IndexPair {
    /// Create a new index pair
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Get the row index
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Get the column index
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Distance from the main diagonal, `|row - col|`
    pub const fn band_offset(&self) -> usize {
        self.row.abs_diff(self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_offset_is_symmetric() {
        assert_eq!(IndexPair::new(1, 4).band_offset(), 3);
        assert_eq!(IndexPair::new(4, 1).band_offset(), 3);
        assert_eq!(IndexPair::new(2, 2).band_offset(), 0);
    }

    #[test]
    fn test_row_major_ordering() {
        assert!(IndexPair::new(0, 5) < IndexPair::new(1, 0));
        assert!(IndexPair::new(1, 0) < IndexPair::new(1, 1));
    }
}
