//! spmat - sparse, square and symmetric band integer matrices
//!
//! This library provides three matrix representations that interoperate
//! through one capability contract ([`Matrix`]):
//!
//! - [`SparseMatrix`]: coordinate map of non-zero entries, any shape
//! - [`SquareMatrix`]: sparse matrix with `rows == cols`
//! - [`BandMatrix`]: symmetric matrix stored as one value per diagonal band
//!
//! ## Architecture
//!
//! - **spmat-core**: the contract, element types, errors and pure
//!   validation rules (no storage)
//! - **spmat**: concrete storage, arithmetic kernels and [`AnyMatrix`]
//!
//! ## Quick Start
//!
//! ```rust
//! use spmat::{AnyMatrix, BandMatrix, Matrix, MatrixKind, SquareMatrix};
//!
//! fn example() -> spmat::Result<()> {
//!     let mut band = BandMatrix::<i64>::new(4)?;
//!     band.set(0, 0, 2)?;
//!     band.set(0, 1, -1)?;
//!     assert_eq!(band.get(3, 2)?, -1);
//!
//!     let band = AnyMatrix::from(band);
//!     let identity = AnyMatrix::from(SquareMatrix::identity(4)?);
//!
//!     // band * band is not banded in general
//!     assert_eq!(band.multiply(&band)?.kind(), MatrixKind::Square);
//!     assert!(identity.multiply(&band)?.same_entries(&band));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export core abstractions
pub use spmat_core::{
    // Core traits
    Matrix, MatrixElement, MatrixOperations,
    // Keys and kinds
    IndexPair, MatrixKind,
    // Error handling
    BandViolation, ErrorCategory, MatrixError, Operation, Result, ShapeError,
};

mod arithmetic;
pub mod any;
pub mod band;
mod display;
pub mod sparse;
pub mod square;

pub use any::AnyMatrix;
pub use band::BandMatrix;
pub use sparse::SparseMatrix;
pub use square::SquareMatrix;
