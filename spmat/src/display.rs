//! Text grid rendering
//!
//! Every representation renders the same way: one bracketed line per row.
//! The first value of a row is written as is; every later value is
//! right-aligned to the widest rendered value in the matrix.
//!
//! ```text
//! [10  5  0]
//! [5 10 -5]
//! [0 -5 10]
//! ```

use core::fmt::{self, Write as _};

use spmat_core::{Matrix, MatrixElement, MatrixOperations};

use crate::{AnyMatrix, BandMatrix, SparseMatrix, SquareMatrix};

/// Widest rendered value, counting zero unless every entry is stored
fn cell_width<T: MatrixElement>(matrix: &dyn Matrix<Element = T>) -> usize {
    let mut width = if matrix.nnz() < matrix.rows().saturating_mul(matrix.cols()) {
        WriteCounting::count(|wc| write!(wc, "{}", T::ZERO))
    } else {
        0
    };
    matrix.for_each_nonzero(&mut |_, value| {
        width = width.max(WriteCounting::count(|wc| write!(wc, "{value}")));
    });
    width
}

fn write_grid<T: MatrixElement>(
    matrix: &dyn Matrix<Element = T>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let width = cell_width(matrix);
    for row in matrix.to_array() {
        write!(f, "[")?;
        for (j, value) in row.iter().enumerate() {
            if j == 0 {
                write!(f, "{value}")?;
            } else {
                write!(f, " {value:>width$}")?;
            }
        }
        writeln!(f, "]")?;
    }
    Ok(())
}

/// Counts rendered characters without allocating
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.len();
        Ok(())
    }
}

impl<T: MatrixElement> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(self, f)
    }
}

impl<T: MatrixElement> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(self, f)
    }
}

impl<T: MatrixElement> fmt::Display for BandMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(self, f)
    }
}

impl<T: MatrixElement> fmt::Display for AnyMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_grid() {
        let mut matrix = BandMatrix::<i64>::new(3).unwrap();
        matrix.set(0, 0, 10).unwrap();
        matrix.set(0, 1, 5).unwrap();
        assert_eq!(matrix.to_string(), "[10  5  0]\n[5 10  5]\n[0  5 10]\n");
    }

    #[test]
    fn test_sign_counts_towards_width() {
        let matrix = SparseMatrix::from_rows(&[[1i64, -12], [3, 4]]).unwrap();
        assert_eq!(matrix.to_string(), "[1 -12]\n[3   4]\n");
    }

    #[test]
    fn test_width_of_huge_matrix() {
        let mut matrix = SparseMatrix::<i64>::new(usize::MAX, 2).unwrap();
        matrix.set(usize::MAX - 1, 1, -7).unwrap();
        assert_eq!(cell_width(&matrix), 2);
    }

    #[test]
    fn test_dense_grid_without_zeros() {
        let matrix = SquareMatrix::from_rows(&[[7i64, 8], [9, 1]]).unwrap();
        assert_eq!(matrix.to_string(), "[7 8]\n[9 1]\n");
        assert_eq!(AnyMatrix::from(matrix).to_string(), "[7 8]\n[9 1]\n");
    }
}
