//! Core matrix abstraction traits
//!
//! This module defines the capability contract every matrix representation
//! satisfies. Arithmetic takes its right-hand operand as
//! `&dyn Matrix<Element = T>`, so any representation can be combined with
//! any other.

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use super::element::MatrixElement;
use crate::validation::{validate_addition_dims, validate_indices, validate_multiplication_dims};
use crate::{IndexPair, MatrixKind, Result};

/// Capability contract shared by all matrix representations
///
/// Implementations never store zero. `get` returns zero for any coordinate
/// without a stored value, and `set` with zero removes a stored value.
pub trait Matrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Storage representation of this matrix
    fn kind(&self) -> MatrixKind;

    /// Get the value at the specified position
    ///
    /// Fails with `OutOfBounds` if the position lies outside the matrix.
    fn get(&self, row: usize, col: usize) -> Result<Self::Element>;

    /// Set the value at the specified position
    ///
    /// Setting zero removes the entry. Fails without mutating anything if
    /// the position is out of bounds or the representation cannot hold the
    /// value there.
    fn set(&mut self, row: usize, col: usize, value: Self::Element) -> Result<()>;

    /// Get number of non-zero entries
    fn nnz(&self) -> usize;

    /// Visit every non-zero entry once, in no particular order
    fn for_each_nonzero(&self, f: &mut dyn FnMut(IndexPair, Self::Element));

    /// Get the number of rows
    fn rows(&self) -> usize {
        self.dimensions().0
    }

    /// Get the number of columns
    fn cols(&self) -> usize {
        self.dimensions().1
    }

    /// Validate that `(row, col)` lies inside this matrix
    fn validate_indices(&self, row: usize, col: usize) -> Result<()> {
        validate_indices(self.dimensions(), row, col)
    }

    /// Validate that `self + other` is defined
    fn validate_addition(&self, other: &dyn Matrix<Element = Self::Element>) -> Result<()> {
        validate_addition_dims(self.dimensions(), other.dimensions())
    }

    /// Validate that `self * other` is defined
    fn validate_multiplication(&self, other: &dyn Matrix<Element = Self::Element>) -> Result<()> {
        validate_multiplication_dims(self.dimensions(), other.dimensions())
    }

    /// Entry-wise comparison with a matrix of any representation
    fn same_entries(&self, other: &dyn Matrix<Element = Self::Element>) -> bool {
        if self.dimensions() != other.dimensions() || self.nnz() != other.nnz() {
            return false;
        }

        let mut equal = true;
        self.for_each_nonzero(&mut |pair, value| {
            if equal && other.get(pair.row(), pair.col()) != Ok(value) {
                equal = false;
            }
        });
        equal
    }
}

/// Extension trait for dense export and row/column access (requires alloc feature)
///
/// Implemented for every [`Matrix`], including trait objects.
#[cfg(feature = "alloc")]
pub trait MatrixOperations: Matrix {
    /// Dense copy of the matrix; entries without a value are zero
    fn to_array(&self) -> Vec<Vec<Self::Element>> {
        let (rows, cols) = self.dimensions();
        let mut array = vec![vec![Self::Element::ZERO; cols]; rows];
        self.for_each_nonzero(&mut |pair, value| {
            array[pair.row()][pair.col()] = value;
        });
        array
    }

    /// Dense copy of one row
    fn row(&self, row_index: usize) -> Result<Vec<Self::Element>> {
        self.validate_indices(row_index, 0)?;
        (0..self.cols()).map(|col| self.get(row_index, col)).collect()
    }

    /// Dense copy of one column
    fn col(&self, col_index: usize) -> Result<Vec<Self::Element>> {
        self.validate_indices(0, col_index)?;
        (0..self.rows()).map(|row| self.get(row, col_index)).collect()
    }

    /// All non-zero entries in row-major order
    fn nonzero_entries(&self) -> Vec<(IndexPair, Self::Element)> {
        let mut entries = Vec::with_capacity(self.nnz());
        self.for_each_nonzero(&mut |pair, value| entries.push((pair, value)));
        entries.sort_unstable_by_key(|(pair, _)| *pair);
        entries
    }
}

#[cfg(feature = "alloc")]
impl<M: Matrix + ?Sized> MatrixOperations for M {}
