//! Error types for matrix operations

use thiserror::Error;

/// Arithmetic operation a pair of operands was validated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Multiplication,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Addition => write!(f, "add"),
            Operation::Multiplication => write!(f, "multiply"),
        }
    }
}

/// Reasons an input cannot describe a matrix of the requested shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// A dimension was zero
    EmptyDimension,
    /// Row `row` has `len` entries while the first row has `expected`
    Ragged { row: usize, len: usize, expected: usize },
    /// The array has `rows` rows of `cols` entries each
    NotSquare { rows: usize, cols: usize },
    /// The array describes a `got` sized matrix where `expected` was required
    SizeMismatch { expected: usize, got: usize },
    /// More bands were requested than a `size` matrix can hold
    TooManyBands { bands: usize, size: usize },
}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShapeError::EmptyDimension => write!(f, "rows and columns must be positive"),
            ShapeError::Ragged { row, len, expected } => {
                write!(f, "row {row} has {len} entries, expected {expected}")
            }
            ShapeError::NotSquare { rows, cols } => {
                write!(f, "a {rows}x{cols} array is not square")
            }
            ShapeError::SizeMismatch { expected, got } => {
                write!(f, "expected size {expected}, got {got}")
            }
            ShapeError::TooManyBands { bands, size } => {
                write!(f, "{bands} bands do not fit a {size}x{size} matrix")
            }
        }
    }
}

/// Ways a band matrix mutation could break its storage layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandViolation {
    /// A non-zero value more than one band beyond the outermost band
    Gap,
    /// A zero written to a band that is not the outermost one
    InteriorZero,
}

impl core::fmt::Display for BandViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BandViolation::Gap => write!(f, "would create a gap"),
            BandViolation::InteriorZero => write!(f, "would zero an interior band"),
        }
    }
}

/// Errors that can occur during matrix operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Row or column outside the matrix
    #[error("index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Operand shapes are incompatible
    #[error(
        "cannot {operation} a {}x{} matrix with a {}x{} matrix",
        .left.0, .left.1, .right.0, .right.1
    )]
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Input cannot be turned into a matrix of the requested shape
    #[error("invalid shape: {0}")]
    InvalidShape(ShapeError),

    /// Band matrix mutation rejected to keep the bands contiguous
    #[error("invalid update of band {band} (band count {band_count}): {violation}")]
    InvalidBandOperation {
        band: usize,
        band_count: usize,
        violation: BandViolation,
    },

    /// An entry of the result does not fit the element type
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
}

/// Coarse grouping of [`MatrixError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Index,
    Shape,
    Structure,
    Arithmetic,
}

impl MatrixError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::OutOfBounds { .. } => ErrorCategory::Index,
            MatrixError::DimensionMismatch { .. } | MatrixError::InvalidShape(_) => {
                ErrorCategory::Shape
            }
            MatrixError::InvalidBandOperation { .. } => ErrorCategory::Structure,
            MatrixError::ArithmeticOverflow => ErrorCategory::Arithmetic,
        }
    }
}

impl From<ShapeError> for MatrixError {
    fn from(err: ShapeError) -> Self {
        MatrixError::InvalidShape(err)
    }
}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
