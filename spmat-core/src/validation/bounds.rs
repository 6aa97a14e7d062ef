//! Index bounds and operand dimension validation
//!
//! Pure functions over dimensions; nothing here touches matrix storage.

use crate::{MatrixError, Operation};

/// Validate that `(row, col)` lies inside a matrix of `dimensions`
pub const fn validate_indices(
    dimensions: (usize, usize),
    row: usize,
    col: usize,
) -> Result<(), MatrixError> {
    let (rows, cols) = dimensions;
    if row >= rows || col >= cols {
        return Err(MatrixError::OutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(())
}

/// Validate that two operands can be added entry by entry
pub fn validate_addition_dims(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), MatrixError> {
    if left != right {
        return Err(MatrixError::DimensionMismatch {
            operation: Operation::Addition,
            left,
            right,
        });
    }
    Ok(())
}

/// Validate that `left * right` is defined
pub const fn validate_multiplication_dims(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), MatrixError> {
    if left.1 != right.0 {
        return Err(MatrixError::DimensionMismatch {
            operation: Operation::Multiplication,
            left,
            right,
        });
    }
    Ok(())
}

/// Validate that neither dimension is zero
pub const fn validate_dimensions(rows: usize, cols: usize) -> Result<(), MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidShape(crate::ShapeError::EmptyDimension));
    }
    Ok(())
}
