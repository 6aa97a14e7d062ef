#![no_std]

//! spmat core - matrix contract, element types and validation rules
//!
//! This crate provides the representation-independent pieces shared by
//! every matrix in `spmat`: the capability contract, coordinate keys,
//! result-type narrowing and the pure validation functions that guard
//! every mutation.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod index;
pub mod kind;
pub mod traits;
pub mod validation;

pub use error::*;
pub use index::IndexPair;
pub use kind::MatrixKind;
pub use traits::*;
pub use validation::{
    plan_band_update, validate_addition_dims, validate_indices, validate_multiplication_dims,
    validate_rectangular, validate_square, BandUpdate,
};
