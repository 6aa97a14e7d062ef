//! Mutation policy for symmetric band storage
//!
//! A band matrix stores one value per diagonal offset in a vector that
//! always starts at offset 0 and never skips an offset. A write to offset
//! `band` may therefore only touch the existing bands, append one band just
//! past the outermost one, or drop the outermost band. Everything else is
//! rejected before storage is touched.

use crate::{BandViolation, MatrixError};

/// Storage change required to apply a single band write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandUpdate {
    /// Replace the value of an existing band
    Overwrite,
    /// Append one band past the outermost band
    Grow,
    /// Remove the outermost band
    Shrink,
    /// Zero written beyond the stored bands; nothing to do
    Unchanged,
}

/// Decide how a write of a (zero or non-zero) value to offset `band` applies
/// to storage currently holding `band_count` bands
pub const fn plan_band_update(
    band_count: usize,
    band: usize,
    is_zero: bool,
) -> Result<BandUpdate, MatrixError> {
    if is_zero {
        if band >= band_count {
            Ok(BandUpdate::Unchanged)
        } else if band + 1 == band_count {
            Ok(BandUpdate::Shrink)
        } else {
            Err(MatrixError::InvalidBandOperation {
                band,
                band_count,
                violation: BandViolation::InteriorZero,
            })
        }
    } else if band < band_count {
        Ok(BandUpdate::Overwrite)
    } else if band == band_count {
        Ok(BandUpdate::Grow)
    } else {
        Err(MatrixError::InvalidBandOperation {
            band,
            band_count,
            violation: BandViolation::Gap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_zero_writes() {
        assert_eq!(plan_band_update(3, 1, false), Ok(BandUpdate::Overwrite));
        assert_eq!(plan_band_update(3, 3, false), Ok(BandUpdate::Grow));
        assert_eq!(plan_band_update(0, 0, false), Ok(BandUpdate::Grow));
        assert_eq!(
            plan_band_update(1, 2, false),
            Err(MatrixError::InvalidBandOperation {
                band: 2,
                band_count: 1,
                violation: BandViolation::Gap
            })
        );
    }

    #[test]
    fn test_zero_writes() {
        assert_eq!(plan_band_update(3, 2, true), Ok(BandUpdate::Shrink));
        assert_eq!(plan_band_update(1, 0, true), Ok(BandUpdate::Shrink));
        assert_eq!(plan_band_update(3, 4, true), Ok(BandUpdate::Unchanged));
        assert_eq!(
            plan_band_update(3, 1, true),
            Err(MatrixError::InvalidBandOperation {
                band: 1,
                band_count: 3,
                violation: BandViolation::InteriorZero
            })
        );
    }
}
