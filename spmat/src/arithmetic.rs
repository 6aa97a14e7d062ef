//! Arithmetic kernels shared by every representation
//!
//! The generic kernels only ever touch stored non-zero entries, so they work
//! for any pair of operands reachable through `&dyn Matrix`. The band kernels
//! work directly on band vectors and stay inside the band envelope.
//!
//! Kernels assume their operands were validated by the caller; they write
//! every non-zero result entry into `result` and skip zeros.

use hashbrown::HashMap;
use spmat_core::{BandViolation, IndexPair, Matrix, MatrixElement, MatrixError, Result};

type Operand<'a, T> = &'a dyn Matrix<Element = T>;

fn checked_add<T: MatrixElement>(a: T, b: T) -> Result<T> {
    a.checked_add(b).ok_or(MatrixError::ArithmeticOverflow)
}

fn checked_mul<T: MatrixElement>(a: T, b: T) -> Result<T> {
    a.checked_mul(b).ok_or(MatrixError::ArithmeticOverflow)
}

fn collect_nonzero<T: MatrixElement>(matrix: Operand<'_, T>) -> Vec<(IndexPair, T)> {
    let mut entries = Vec::with_capacity(matrix.nnz());
    matrix.for_each_nonzero(&mut |pair, value| entries.push((pair, value)));
    entries
}

fn write_nonzero<T: MatrixElement>(
    sums: HashMap<IndexPair, T>,
    result: &mut dyn Matrix<Element = T>,
) -> Result<()> {
    for (pair, value) in sums {
        if !value.is_zero() {
            result.set(pair.row(), pair.col(), value)?;
        }
    }
    Ok(())
}

/// Entry-wise sum of two equally shaped matrices
pub(crate) fn add_into<T: MatrixElement>(
    left: Operand<'_, T>,
    right: Operand<'_, T>,
    result: &mut dyn Matrix<Element = T>,
) -> Result<()> {
    let mut sums: HashMap<IndexPair, T> = collect_nonzero(left).into_iter().collect();
    for (pair, value) in collect_nonzero(right) {
        let sum = match sums.get(&pair) {
            Some(&existing) => checked_add(existing, value)?,
            None => value,
        };
        sums.insert(pair, sum);
    }
    write_nonzero(sums, result)
}

/// Matrix product restricted to non-zero contributions
///
/// Each stored `left[i][k]` is only paired with the stored entries of row `k`
/// of `right`.
pub(crate) fn multiply_into<T: MatrixElement>(
    left: Operand<'_, T>,
    right: Operand<'_, T>,
    result: &mut dyn Matrix<Element = T>,
) -> Result<()> {
    let mut right_rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for (pair, value) in collect_nonzero(right) {
        right_rows
            .entry(pair.row())
            .or_default()
            .push((pair.col(), value));
    }

    let mut sums: HashMap<IndexPair, T> = HashMap::new();
    for (pair, left_value) in collect_nonzero(left) {
        let Some(row) = right_rows.get(&pair.col()) else {
            continue;
        };
        for &(col, right_value) in row {
            let term = checked_mul(left_value, right_value)?;
            let key = IndexPair::new(pair.row(), col);
            let sum = match sums.get(&key) {
                Some(&existing) => checked_add(existing, term)?,
                None => term,
            };
            sums.insert(key, sum);
        }
    }
    write_nonzero(sums, result)
}

/// Band vector of the sum of two band matrices
///
/// Only offsets up to the wider of the two envelopes are visited. Trailing
/// zero bands are trimmed. A zero band below a non-zero one cannot be stored,
/// so such a sum fails with `InvalidBandOperation`.
pub(crate) fn add_bands<T: MatrixElement>(left: &[T], right: &[T]) -> Result<Vec<T>> {
    let envelope = left.len().max(right.len());
    let mut bands = Vec::with_capacity(envelope);
    for offset in 0..envelope {
        let a = left.get(offset).copied().unwrap_or(T::ZERO);
        let b = right.get(offset).copied().unwrap_or(T::ZERO);
        bands.push(checked_add(a, b)?);
    }

    while bands.last().is_some_and(|value| value.is_zero()) {
        bands.pop();
    }
    if let Some(band) = bands.iter().position(|value| value.is_zero()) {
        return Err(MatrixError::InvalidBandOperation {
            band,
            band_count: bands.len(),
            violation: BandViolation::InteriorZero,
        });
    }
    Ok(bands)
}

/// Product of two `size x size` band matrices given by their band vectors
///
/// For output `(i, j)` the summation index `k` is limited to the offsets
/// where both `left[i][k]` and `right[k][j]` can be non-zero:
/// `max(0, i - (na - 1), j - (nb - 1)) <= k < min(size, i + na, j + nb)`.
/// Columns further than `na + nb - 2` from the diagonal have an empty
/// window and are skipped entirely.
pub(crate) fn multiply_bands_into<T: MatrixElement>(
    size: usize,
    left: &[T],
    right: &[T],
    result: &mut dyn Matrix<Element = T>,
) -> Result<()> {
    let (na, nb) = (left.len(), right.len());
    if na == 0 || nb == 0 {
        return Ok(());
    }
    let reach = na + nb - 2;

    for i in 0..size {
        let first_col = i.saturating_sub(reach);
        let last_col = (i + reach).min(size - 1);
        for j in first_col..=last_col {
            let min_k = i.saturating_sub(na - 1).max(j.saturating_sub(nb - 1));
            let max_k = size.min(i + na).min(j + nb);

            let mut sum = T::ZERO;
            for k in min_k..max_k {
                let term = checked_mul(left[i.abs_diff(k)], right[k.abs_diff(j)])?;
                sum = checked_add(sum, term)?;
            }
            if !sum.is_zero() {
                result.set(i, j, sum)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparseMatrix;
    use spmat_core::MatrixOperations;

    #[test]
    fn test_add_bands_envelope_and_trim() {
        assert_eq!(add_bands(&[1, 2], &[3, 4, 5]), Ok(vec![4, 6, 5]));
        assert_eq!(add_bands(&[1, 2, 3], &[1, -2, -3]), Ok(vec![2]));
        assert_eq!(
            add_bands(&[1, 2, 3], &[1, -2, 3]),
            Err(MatrixError::InvalidBandOperation {
                band: 1,
                band_count: 3,
                violation: BandViolation::InteriorZero
            })
        );
        assert_eq!(
            add_bands(&[1, 2, 3], &[-1, 7]),
            Err(MatrixError::InvalidBandOperation {
                band: 0,
                band_count: 3,
                violation: BandViolation::InteriorZero
            })
        );
        assert_eq!(add_bands::<i32>(&[1], &[-1]), Ok(vec![]));
    }

    #[test]
    fn test_band_window_matches_full_product() {
        let size = 6;
        let left = [1i64, 2, 3];
        let right = [4i64, -1];
        let dense = |bands: &[i64]| {
            let rows: Vec<Vec<i64>> = (0..size)
                .map(|i| {
                    (0..size)
                        .map(|j: usize| bands.get(i.abs_diff(j)).copied().unwrap_or(0))
                        .collect()
                })
                .collect();
            SparseMatrix::from_rows(&rows).unwrap()
        };

        let mut windowed = SparseMatrix::<i64>::new(size, size).unwrap();
        multiply_bands_into(size, &left, &right, &mut windowed).unwrap();

        let mut full = SparseMatrix::<i64>::new(size, size).unwrap();
        multiply_into(&dense(&left), &dense(&right), &mut full).unwrap();

        assert_eq!(windowed.to_array(), full.to_array());
    }

    #[test]
    fn test_multiply_skips_cancelled_entries() {
        let left = SparseMatrix::from_rows(&[vec![1i32, 1]]).unwrap();
        let right = SparseMatrix::from_rows(&[vec![2i32], vec![-2]]).unwrap();
        let mut result = SparseMatrix::<i32>::new(1, 1).unwrap();
        multiply_into(&left, &right, &mut result).unwrap();
        assert_eq!(result.nnz(), 0);
    }
}
