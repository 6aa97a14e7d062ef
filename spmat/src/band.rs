//! Symmetric band matrix
//!
//! A [`BandMatrix`] stores one value per diagonal offset: `bands[0]` is the
//! main diagonal and `bands[k]` is shared by every `(i, i + k)` and
//! `(i + k, i)`. Symmetry therefore holds by construction. The band vector
//! always covers offsets `0..band_count()` without holes; writes that would
//! break that are rejected by [`plan_band_update`].

use spmat_core::validation::validate_dimensions;
use spmat_core::{
    plan_band_update, BandUpdate, IndexPair, Matrix, MatrixElement, MatrixKind, Result, ShapeError,
};

use crate::{arithmetic, AnyMatrix, SquareMatrix};

/// Symmetric `size x size` matrix stored as a vector of diagonal bands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandMatrix<T = i64> {
    size: usize,
    bands: Vec<T>,
}

impl<T: MatrixElement> BandMatrix<T> {
    /// Create a matrix holding only a (zero) main diagonal band
    pub fn new(size: usize) -> Result<Self> {
        Self::with_bands(size, 0)
    }

    /// Create a matrix with `bands_above_diagonal` zero bands preallocated
    /// next to the main diagonal
    ///
    /// Preallocated bands may be written in any order. Fails with
    /// `InvalidShape` if the bands do not fit the matrix.
    pub fn with_bands(size: usize, bands_above_diagonal: usize) -> Result<Self> {
        validate_dimensions(size, size)?;
        if bands_above_diagonal >= size {
            return Err(ShapeError::TooManyBands {
                bands: bands_above_diagonal + 1,
                size,
            }
            .into());
        }
        Ok(Self {
            size,
            bands: vec![T::ZERO; bands_above_diagonal + 1],
        })
    }

    /// Get the side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored bands, main diagonal included
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// Stored band values, main diagonal first
    pub fn bands(&self) -> &[T] {
        &self.bands
    }

    /// Value of the band at `offset`, zero past the stored bands
    pub fn band(&self, offset: usize) -> T {
        self.bands.get(offset).copied().unwrap_or(T::ZERO)
    }

    /// Copy into a square sparse matrix
    pub fn to_square(&self) -> Result<SquareMatrix<T>> {
        let mut square = SquareMatrix::new(self.size)?;
        let mut result = Ok(());
        self.for_each_nonzero(&mut |pair, value| {
            if result.is_ok() {
                result = square.set(pair.row(), pair.col(), value);
            }
        });
        result.map(|()| square)
    }

    /// `self + other` for two band matrices, itself a band matrix
    ///
    /// Only offsets up to the wider band envelope are visited. Fails with
    /// `InvalidBandOperation` when a band of the sum cancels to zero while
    /// a band further out does not.
    pub fn add_band(&self, other: &BandMatrix<T>) -> Result<BandMatrix<T>> {
        self.validate_addition(other)?;
        Ok(BandMatrix {
            size: self.size,
            bands: arithmetic::add_bands(&self.bands, &other.bands)?,
        })
    }

    /// `self + other` for any other representation, stored as a square matrix
    pub fn add(&self, other: &dyn Matrix<Element = T>) -> Result<SquareMatrix<T>> {
        self.validate_addition(other)?;
        let mut result = SquareMatrix::new(self.size)?;
        arithmetic::add_into(self, other, &mut result)?;
        Ok(result)
    }

    /// `self * other` for two band matrices
    ///
    /// The product is generally not banded, so it is stored as a square
    /// matrix. Each output entry only sums over the window where both bands
    /// overlap.
    pub fn multiply_band(&self, other: &BandMatrix<T>) -> Result<SquareMatrix<T>> {
        self.validate_multiplication(other)?;
        let mut result = SquareMatrix::new(self.size)?;
        arithmetic::multiply_bands_into(self.size, &self.bands, &other.bands, &mut result)?;
        Ok(result)
    }

    /// `self * other` for any other representation
    ///
    /// Square when `other` has `size` columns, generic sparse otherwise.
    pub fn multiply(&self, other: &dyn Matrix<Element = T>) -> Result<AnyMatrix<T>> {
        self.validate_multiplication(other)?;
        if other.cols() == self.size {
            let mut result = SquareMatrix::new(self.size)?;
            arithmetic::multiply_into(self, other, &mut result)?;
            Ok(result.into())
        } else {
            let mut result = crate::SparseMatrix::new(self.size, other.cols())?;
            arithmetic::multiply_into(self, other, &mut result)?;
            Ok(result.into())
        }
    }

    /// Number of positions covered by the band at `offset`
    fn band_len(&self, offset: usize) -> usize {
        if offset == 0 {
            self.size
        } else {
            2 * (self.size - offset)
        }
    }
}

impl<T: MatrixElement> Matrix for BandMatrix<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn kind(&self) -> MatrixKind {
        MatrixKind::Band
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        self.validate_indices(row, col)?;
        Ok(self.band(IndexPair::new(row, col).band_offset()))
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.validate_indices(row, col)?;
        let offset = IndexPair::new(row, col).band_offset();
        match plan_band_update(self.bands.len(), offset, value.is_zero())? {
            BandUpdate::Overwrite => self.bands[offset] = value,
            BandUpdate::Grow => {
                self.bands.push(value);
                #[cfg(feature = "tracing")]
                tracing::trace!(band = offset, band_count = self.bands.len(), "band added");
            }
            BandUpdate::Shrink => {
                self.bands.pop();
                #[cfg(feature = "tracing")]
                tracing::trace!(band = offset, band_count = self.bands.len(), "band removed");
            }
            BandUpdate::Unchanged => {}
        }
        Ok(())
    }

    fn nnz(&self) -> usize {
        self.bands
            .iter()
            .enumerate()
            .filter(|(_, value)| !value.is_zero())
            .map(|(offset, _)| self.band_len(offset))
            .sum()
    }

    fn for_each_nonzero(&self, f: &mut dyn FnMut(IndexPair, T)) {
        for (offset, &value) in self.bands.iter().enumerate() {
            if value.is_zero() {
                continue;
            }
            for i in 0..self.size - offset {
                f(IndexPair::new(i, i + offset), value);
                if offset > 0 {
                    f(IndexPair::new(i + offset, i), value);
                }
            }
        }
    }
}
