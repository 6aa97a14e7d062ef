//! Two-dimensional array shape validation
//!
//! Arrays are accepted as any slice of rows that can be viewed as slices,
//! so both `&[Vec<T>]` and `&[[T; N]]` inputs validate without copying.

use crate::ShapeError;

/// Validate that `rows` is a non-empty rectangular array
///
/// Returns the `(rows, cols)` dimensions on success.
pub fn validate_rectangular<T, R: AsRef<[T]>>(rows: &[R]) -> Result<(usize, usize), ShapeError> {
    let first = rows.first().ok_or(ShapeError::EmptyDimension)?;
    let expected = first.as_ref().len();
    if expected == 0 {
        return Err(ShapeError::EmptyDimension);
    }

    for (row, values) in rows.iter().enumerate() {
        let len = values.as_ref().len();
        if len != expected {
            return Err(ShapeError::Ragged { row, len, expected });
        }
    }

    Ok((rows.len(), expected))
}

/// Validate that `rows` is a non-empty square array
///
/// Every row must hold exactly as many entries as there are rows.
/// Returns the side length on success.
pub fn validate_square<T, R: AsRef<[T]>>(rows: &[R]) -> Result<usize, ShapeError> {
    let size = rows.len();
    if size == 0 {
        return Err(ShapeError::EmptyDimension);
    }

    for values in rows {
        let cols = values.as_ref().len();
        if cols != size {
            return Err(ShapeError::NotSquare { rows: size, cols });
        }
    }

    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rectangular() {
        let grid = [[1, 2, 3], [4, 5, 6]];
        assert_eq!(validate_rectangular::<i32, _>(&grid), Ok((2, 3)));

        let ragged: [&[i32]; 2] = [&[1, 2, 3], &[4, 5]];
        assert_eq!(
            validate_rectangular::<i32, _>(&ragged),
            Err(ShapeError::Ragged {
                row: 1,
                len: 2,
                expected: 3
            })
        );

        let empty: [[i32; 0]; 0] = [];
        assert_eq!(validate_rectangular::<i32, _>(&empty), Err(ShapeError::EmptyDimension));
    }

    #[test]
    fn test_validate_square() {
        let square = [[1, 2], [3, 4]];
        assert_eq!(validate_square::<i32, _>(&square), Ok(2));

        let tall = [[1, 2], [3, 4], [5, 6]];
        assert_eq!(
            validate_square::<i32, _>(&tall),
            Err(ShapeError::NotSquare { rows: 3, cols: 2 })
        );

        let wide = [[1, 2, 3, 4, 5], [4, 5, 6, 7, 8]];
        assert_eq!(
            validate_square::<i32, _>(&wide),
            Err(ShapeError::NotSquare { rows: 2, cols: 5 })
        );
    }
}
