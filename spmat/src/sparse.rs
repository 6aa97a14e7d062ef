//! Generic sparse matrix backed by a coordinate map
//!
//! Only non-zero values are stored. This is the baseline representation:
//! every arithmetic combination that cannot guarantee a more specific
//! result falls back to it.

use hashbrown::HashMap;
use spmat_core::validation::validate_dimensions;
use spmat_core::{validate_rectangular, IndexPair, Matrix, MatrixElement, MatrixKind, Result};

use crate::arithmetic;

/// Sparse matrix of any shape
///
/// Equality is structural: same dimensions and same stored entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    rows: usize,
    cols: usize,
    entries: HashMap<IndexPair, T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty `rows x cols` matrix
    ///
    /// Fails with `InvalidShape` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            entries: HashMap::new(),
        })
    }

    /// Create a matrix from a rectangular two-dimensional array
    pub fn from_rows<R: AsRef<[T]>>(array: &[R]) -> Result<Self> {
        let (rows, cols) = validate_rectangular(array)?;
        let mut matrix = Self::new(rows, cols)?;
        matrix.fill_from(array);
        Ok(matrix)
    }

    /// Store every non-zero value of an array whose shape was already validated
    pub(crate) fn fill_from<R: AsRef<[T]>>(&mut self, array: &[R]) {
        for (row, values) in array.iter().enumerate() {
            for (col, &value) in values.as_ref().iter().enumerate() {
                self.insert_unchecked(IndexPair::new(row, col), value);
            }
        }
    }

    /// Store `value` at an in-bounds position, dropping zeros
    pub(crate) fn insert_unchecked(&mut self, pair: IndexPair, value: T) {
        if value.is_zero() {
            self.entries.remove(&pair);
        } else {
            self.entries.insert(pair, value);
        }
    }

    /// `self + other`, always stored as a sparse matrix
    pub fn add(&self, other: &dyn Matrix<Element = T>) -> Result<SparseMatrix<T>> {
        self.validate_addition(other)?;
        let mut result = SparseMatrix::new(self.rows, self.cols)?;
        arithmetic::add_into(self, other, &mut result)?;
        Ok(result)
    }

    /// `self * other`, always stored as a sparse matrix
    pub fn multiply(&self, other: &dyn Matrix<Element = T>) -> Result<SparseMatrix<T>> {
        self.validate_multiplication(other)?;
        let mut result = SparseMatrix::new(self.rows, other.cols())?;
        arithmetic::multiply_into(self, other, &mut result)?;
        Ok(result)
    }
}

impl<T: MatrixElement> Matrix for SparseMatrix<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn kind(&self) -> MatrixKind {
        MatrixKind::Sparse
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        self.validate_indices(row, col)?;
        Ok(self
            .entries
            .get(&IndexPair::new(row, col))
            .copied()
            .unwrap_or(T::ZERO))
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.validate_indices(row, col)?;
        self.insert_unchecked(IndexPair::new(row, col), value);
        Ok(())
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }

    fn for_each_nonzero(&self, f: &mut dyn FnMut(IndexPair, T)) {
        for (pair, value) in &self.entries {
            f(*pair, *value);
        }
    }
}
