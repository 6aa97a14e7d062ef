//! Square sparse matrix
//!
//! A [`SquareMatrix`] wraps a [`SparseMatrix`] whose row and column counts
//! are equal, and narrows arithmetic results to square matrices whenever
//! the result shape allows it.

use spmat_core::{
    validate_square, IndexPair, Matrix, MatrixElement, MatrixError, MatrixKind, Result, ShapeError,
};

use crate::{arithmetic, AnyMatrix, SparseMatrix};

/// Sparse matrix with `rows == cols == size`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T = i64> {
    inner: SparseMatrix<T>,
    size: usize,
}

impl<T: MatrixElement> SquareMatrix<T> {
    /// Create an empty `size x size` matrix
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            inner: SparseMatrix::new(size, size)?,
            size,
        })
    }

    /// Create a matrix from a square two-dimensional array
    ///
    /// Fails with `InvalidShape` unless every row holds exactly as many
    /// entries as there are rows.
    ///
    /// ```
    /// use spmat::{Matrix, SquareMatrix};
    ///
    /// let m = SquareMatrix::from_rows(&[[1i64, 2], [3, 4]]).unwrap();
    /// assert_eq!(m.get(1, 0), Ok(3));
    /// assert!(SquareMatrix::from_rows(&[[1i64, 2], [3, 4], [5, 6]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(array: &[R]) -> Result<Self> {
        let size = validate_square(array)?;
        let mut matrix = Self::new(size)?;
        matrix.inner.fill_from(array);
        Ok(matrix)
    }

    /// Create the `size x size` identity matrix
    pub fn identity(size: usize) -> Result<Self> {
        let mut matrix = Self::new(size)?;
        for i in 0..size {
            matrix.inner.insert_unchecked(IndexPair::new(i, i), T::ONE);
        }
        Ok(matrix)
    }

    /// Overwrite every entry from a square array of the same size
    ///
    /// Zeros in the array clear the corresponding entries.
    pub fn populate<R: AsRef<[T]>>(&mut self, array: &[R]) -> Result<()> {
        let got = validate_square(array)?;
        if got != self.size {
            return Err(ShapeError::SizeMismatch {
                expected: self.size,
                got,
            }
            .into());
        }
        self.inner.fill_from(array);
        Ok(())
    }

    /// Get the side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sum of the main diagonal
    pub fn trace(&self) -> Result<T> {
        (0..self.size).try_fold(T::ZERO, |sum, i| {
            let value = self.inner.get(i, i)?;
            sum.checked_add(value).ok_or(MatrixError::ArithmeticOverflow)
        })
    }

    /// Borrow the underlying generic sparse matrix
    pub fn as_sparse(&self) -> &SparseMatrix<T> {
        &self.inner
    }

    /// Give up the square guarantee and return the generic sparse matrix
    pub fn into_sparse(self) -> SparseMatrix<T> {
        self.inner
    }

    /// `self + other`, stored as a square matrix
    pub fn add(&self, other: &dyn Matrix<Element = T>) -> Result<SquareMatrix<T>> {
        self.validate_addition(other)?;
        let mut result = SquareMatrix::new(self.size)?;
        arithmetic::add_into(self, other, &mut result)?;
        Ok(result)
    }

    /// `self * other`
    ///
    /// The product is square exactly when `other` has `size` columns; any
    /// other product degrades to a generic sparse matrix.
    pub fn multiply(&self, other: &dyn Matrix<Element = T>) -> Result<AnyMatrix<T>> {
        self.validate_multiplication(other)?;
        if other.cols() == self.size {
            let mut result = SquareMatrix::new(self.size)?;
            arithmetic::multiply_into(self, other, &mut result)?;
            Ok(result.into())
        } else {
            Ok(self.inner.multiply(other)?.into())
        }
    }
}

impl<T: MatrixElement> Matrix for SquareMatrix<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn kind(&self) -> MatrixKind {
        MatrixKind::Square
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        self.inner.get(row, col)
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.inner.set(row, col, value)
    }

    fn nnz(&self) -> usize {
        self.inner.nnz()
    }

    fn for_each_nonzero(&self, f: &mut dyn FnMut(IndexPair, T)) {
        self.inner.for_each_nonzero(f)
    }
}

impl<T: MatrixElement> TryFrom<SparseMatrix<T>> for SquareMatrix<T> {
    type Error = MatrixError;

    fn try_from(matrix: SparseMatrix<T>) -> Result<Self> {
        let (rows, cols) = matrix.dimensions();
        if rows != cols {
            return Err(ShapeError::NotSquare { rows, cols }.into());
        }
        Ok(Self {
            inner: matrix,
            size: rows,
        })
    }
}

impl<T: MatrixElement> From<SquareMatrix<T>> for SparseMatrix<T> {
    fn from(matrix: SquareMatrix<T>) -> Self {
        matrix.into_sparse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::MatrixOperations;

    fn sample() -> SquareMatrix<i64> {
        SquareMatrix::from_rows(&[
            [1, 2, 3, 4, 5],
            [4, 5, 6, 7, 8],
            [7, 8, 9, 10, 11],
            [10, 11, 12, 13, 14],
            [13, 14, 15, 16, 17],
        ])
        .unwrap()
    }

    #[test]
    fn test_constructors() {
        let empty = SquareMatrix::<i64>::new(5).unwrap();
        assert_eq!(empty.size(), 5);
        assert_eq!(empty.dimensions(), (5, 5));
        assert_eq!(empty.nnz(), 0);

        let matrix = sample();
        assert_eq!(matrix.size(), 5);
        assert_eq!(matrix.get(1, 1), Ok(5));
        assert_eq!(matrix.get(4, 0), Ok(13));

        assert!(SquareMatrix::<i64>::new(0).is_err());
    }

    #[test]
    fn test_non_square_arrays_are_rejected() {
        let wide = SquareMatrix::from_rows(&[[1i64, 2, 3, 4, 5], [4, 5, 6, 7, 8]]);
        assert!(matches!(
            wide,
            Err(MatrixError::InvalidShape(ShapeError::NotSquare { .. }))
        ));

        let tall = SquareMatrix::from_rows(&[[1i64, 2], [3, 4], [5, 6]]);
        assert_eq!(
            tall.unwrap_err(),
            MatrixError::InvalidShape(ShapeError::NotSquare { rows: 3, cols: 2 })
        );
    }

    #[test]
    fn test_populate() {
        let mut matrix = SquareMatrix::<i64>::new(5).unwrap();
        matrix.set(0, 0, 99).unwrap();
        matrix.populate(&sample().to_array()).unwrap();
        assert_eq!(matrix.get(2, 2), Ok(9));
        assert_eq!(matrix.get(0, 0), Ok(1));

        matrix.populate(&[[0i64; 5]; 5]).unwrap();
        assert_eq!(matrix.nnz(), 0);

        assert_eq!(
            matrix.populate(&[[1i64, 2], [3, 4]]),
            Err(MatrixError::InvalidShape(ShapeError::SizeMismatch {
                expected: 5,
                got: 2
            }))
        );
    }

    #[test]
    fn test_identity() {
        let identity = SquareMatrix::<i64>::identity(4).unwrap();
        assert_eq!(identity.nnz(), 4);
        assert_eq!(identity.trace(), Ok(4));
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(identity.get(i, j), Ok(i64::from(i == j)));
            }
        }
    }

    #[test]
    fn test_identity_is_neutral() {
        let matrix = sample();
        let product = SquareMatrix::<i64>::identity(5).unwrap().multiply(&matrix).unwrap();
        assert_eq!(product.kind(), MatrixKind::Square);
        assert!(product.same_entries(&matrix));
    }

    #[test]
    fn test_addition_keeps_square() {
        let matrix = sample();
        let mut other = SparseMatrix::<i64>::new(5, 5).unwrap();
        other.set(3, 4, -14).unwrap();

        let sum = matrix.add(&other).unwrap();
        assert_eq!(sum.size(), 5);
        assert_eq!(sum.get(3, 4), Ok(0));
        assert_eq!(sum.get(0, 0), Ok(1));
        assert_eq!(sum.nnz(), matrix.nnz() - 1);

        let mismatched = SparseMatrix::<i64>::new(5, 4).unwrap();
        assert!(matrix.add(&mismatched).is_err());
    }

    #[test]
    fn test_product_with_itself() {
        let a = sample();
        let product = a.multiply(&a).unwrap();
        assert_eq!(product.kind(), MatrixKind::Square);

        let rows = a.to_array();
        for i in 0..5 {
            let expected: i64 = (0..5).map(|k| rows[i][k] * rows[k][i]).sum();
            assert_eq!(product.get(i, i), Ok(expected));
        }
        // row 0 . col 0 = 1 + 8 + 21 + 40 + 65
        assert_eq!(product.get(0, 0), Ok(135));
    }

    #[test]
    fn test_non_square_product_degrades() {
        let a = sample();
        let b = SparseMatrix::from_rows(&[[1i64, 0], [0, 1], [0, 0], [0, 0], [0, 0]]).unwrap();
        let product = a.multiply(&b).unwrap();
        assert_eq!(product.kind(), MatrixKind::Sparse);
        assert_eq!(product.dimensions(), (5, 2));
        assert_eq!(product.row(0), Ok(vec![1, 2]));
    }

    #[test]
    fn test_conversions() {
        let sparse = SparseMatrix::<i64>::new(3, 3).unwrap();
        let square = SquareMatrix::try_from(sparse).unwrap();
        assert_eq!(square.size(), 3);

        let wide = SparseMatrix::<i64>::new(2, 3).unwrap();
        assert!(SquareMatrix::try_from(wide).is_err());
    }
}
