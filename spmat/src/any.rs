//! Closed set of matrix representations with runtime result selection
//!
//! [`AnyMatrix`] lets callers hold any representation behind one type and
//! combine two of them without knowing either statically. Result kinds
//! follow [`MatrixKind::sum_kind`] and [`MatrixKind::product_kind`].

use spmat_core::{IndexPair, Matrix, MatrixElement, MatrixKind, Result};

use crate::{BandMatrix, SparseMatrix, SquareMatrix};

/// A matrix in any of the supported representations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyMatrix<T = i64> {
    Sparse(SparseMatrix<T>),
    Square(SquareMatrix<T>),
    Band(BandMatrix<T>),
}

impl<T: MatrixElement> AnyMatrix<T> {
    fn as_dyn(&self) -> &dyn Matrix<Element = T> {
        match self {
            AnyMatrix::Sparse(m) => m,
            AnyMatrix::Square(m) => m,
            AnyMatrix::Band(m) => m,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn Matrix<Element = T> {
        match self {
            AnyMatrix::Sparse(m) => m,
            AnyMatrix::Square(m) => m,
            AnyMatrix::Band(m) => m,
        }
    }

    /// `self + other` in the most specific representation available
    ///
    /// ```
    /// use spmat::{AnyMatrix, BandMatrix, Matrix, MatrixKind};
    ///
    /// let mut band = BandMatrix::<i64>::new(3).unwrap();
    /// band.set(0, 0, 2).unwrap();
    /// let band = AnyMatrix::from(band);
    ///
    /// let sum = band.add(&band).unwrap();
    /// assert_eq!(sum.kind(), MatrixKind::Band);
    /// assert_eq!(sum.get(2, 2), Ok(4));
    /// ```
    pub fn add(&self, other: &AnyMatrix<T>) -> Result<AnyMatrix<T>> {
        let kind = MatrixKind::sum_kind(self.kind(), other.kind());
        #[cfg(feature = "tracing")]
        tracing::debug!(left = %self.kind(), right = %other.kind(), result = %kind, "add");

        let result: AnyMatrix<T> = match (self, other) {
            (AnyMatrix::Band(a), AnyMatrix::Band(b)) => a.add_band(b)?.into(),
            (AnyMatrix::Band(a), _) => a.add(other.as_dyn())?.into(),
            (AnyMatrix::Square(a), _) => a.add(other.as_dyn())?.into(),
            (AnyMatrix::Sparse(a), _) => a.add(other.as_dyn())?.into(),
        };
        debug_assert_eq!(result.kind(), kind);
        Ok(result)
    }

    /// `self * other` in the most specific representation available
    pub fn multiply(&self, other: &AnyMatrix<T>) -> Result<AnyMatrix<T>> {
        let dimensions = (self.rows(), other.cols());
        let kind = MatrixKind::product_kind(self.kind(), other.kind(), dimensions);
        #[cfg(feature = "tracing")]
        tracing::debug!(left = %self.kind(), right = %other.kind(), result = %kind, "multiply");

        let result: AnyMatrix<T> = match (self, other) {
            (AnyMatrix::Band(a), AnyMatrix::Band(b)) => a.multiply_band(b)?.into(),
            (AnyMatrix::Band(a), _) => a.multiply(other.as_dyn())?,
            (AnyMatrix::Square(a), _) => a.multiply(other.as_dyn())?,
            (AnyMatrix::Sparse(a), _) => a.multiply(other.as_dyn())?.into(),
        };
        debug_assert_eq!(result.kind(), kind);
        Ok(result)
    }

    /// Copy into the generic sparse representation
    pub fn into_sparse(self) -> Result<SparseMatrix<T>> {
        match self {
            AnyMatrix::Sparse(m) => Ok(m),
            AnyMatrix::Square(m) => Ok(m.into_sparse()),
            AnyMatrix::Band(m) => Ok(m.to_square()?.into_sparse()),
        }
    }
}

impl<T: MatrixElement> Matrix for AnyMatrix<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        self.as_dyn().dimensions()
    }

    fn kind(&self) -> MatrixKind {
        self.as_dyn().kind()
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        self.as_dyn().get(row, col)
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.as_dyn_mut().set(row, col, value)
    }

    fn nnz(&self) -> usize {
        self.as_dyn().nnz()
    }

    fn for_each_nonzero(&self, f: &mut dyn FnMut(IndexPair, T)) {
        self.as_dyn().for_each_nonzero(f)
    }
}

impl<T> From<SparseMatrix<T>> for AnyMatrix<T> {
    fn from(matrix: SparseMatrix<T>) -> Self {
        AnyMatrix::Sparse(matrix)
    }
}

impl<T> From<SquareMatrix<T>> for AnyMatrix<T> {
    fn from(matrix: SquareMatrix<T>) -> Self {
        AnyMatrix::Square(matrix)
    }
}

impl<T> From<BandMatrix<T>> for AnyMatrix<T> {
    fn from(matrix: BandMatrix<T>) -> Self {
        AnyMatrix::Band(matrix)
    }
}
