//! Matrix representation kinds and result-type narrowing
//!
//! Every arithmetic result is stored in the most specific representation
//! whose invariants the result is guaranteed to satisfy. The rules only look
//! at operand kinds and result dimensions, never at values.

/// Storage representations a matrix can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixKind {
    /// Coordinate map of non-zero entries, any shape
    Sparse,
    /// Coordinate map of non-zero entries, rows == cols
    Square,
    /// One value per diagonal offset, symmetric
    Band,
}

impl MatrixKind {
    /// Kind of `left + right`
    ///
    /// | left   | right | sum    |
    /// |--------|-------|--------|
    /// | Band   | Band  | Band   |
    /// | Band   | other | Square |
    /// | Square | any   | Square |
    /// | Sparse | any   | Sparse |
    pub const fn sum_kind(left: MatrixKind, right: MatrixKind) -> MatrixKind {
        match (left, right) {
            (MatrixKind::Band, MatrixKind::Band) => MatrixKind::Band,
            (MatrixKind::Band, _) | (MatrixKind::Square, _) => MatrixKind::Square,
            (MatrixKind::Sparse, _) => MatrixKind::Sparse,
        }
    }

    /// Kind of `left * right` whose result has `dimensions`
    ///
    /// The product of two band matrices is generally not banded, so it is
    /// stored as a square matrix. Square and band left operands keep a square
    /// result only when the product is square.
    pub const fn product_kind(
        left: MatrixKind,
        right: MatrixKind,
        dimensions: (usize, usize),
    ) -> MatrixKind {
        match (left, right) {
            (MatrixKind::Band, MatrixKind::Band) => MatrixKind::Square,
            (MatrixKind::Band, _) | (MatrixKind::Square, _) if dimensions.0 == dimensions.1 => {
                MatrixKind::Square
            }
            _ => MatrixKind::Sparse,
        }
    }
}

impl core::fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixKind::Sparse => write!(f, "sparse"),
            MatrixKind::Square => write!(f, "square"),
            MatrixKind::Band => write!(f, "band"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MatrixKind::*;

    #[test]
    fn test_sum_kind() {
        assert_eq!(MatrixKind::sum_kind(Band, Band), Band);
        assert_eq!(MatrixKind::sum_kind(Band, Sparse), Square);
        assert_eq!(MatrixKind::sum_kind(Band, Square), Square);
        assert_eq!(MatrixKind::sum_kind(Square, Band), Square);
        assert_eq!(MatrixKind::sum_kind(Square, Sparse), Square);
        assert_eq!(MatrixKind::sum_kind(Sparse, Square), Sparse);
        assert_eq!(MatrixKind::sum_kind(Sparse, Band), Sparse);
    }

    #[test]
    fn test_product_kind() {
        assert_eq!(MatrixKind::product_kind(Band, Band, (6, 6)), Square);
        assert_eq!(MatrixKind::product_kind(Band, Sparse, (6, 3)), Sparse);
        assert_eq!(MatrixKind::product_kind(Band, Sparse, (6, 6)), Square);
        assert_eq!(MatrixKind::product_kind(Square, Square, (5, 5)), Square);
        assert_eq!(MatrixKind::product_kind(Square, Sparse, (5, 2)), Sparse);
        assert_eq!(MatrixKind::product_kind(Sparse, Square, (5, 5)), Sparse);
    }
}
