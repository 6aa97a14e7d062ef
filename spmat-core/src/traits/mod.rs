//! Abstract interfaces for matrix representations
//!
//! This module defines all trait abstractions used across the workspace.
//! Traits are pure interfaces - concrete storage lives in `spmat`.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::Matrix;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
