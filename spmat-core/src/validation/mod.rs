//! Validation utilities for matrix operations
//!
//! This module contains pure validation functions with no storage
//! dependencies. Concrete matrices call into them before mutating anything.

pub mod band;
pub mod bounds;
pub mod shape;

pub use band::{plan_band_update, BandUpdate};
pub use bounds::{
    validate_addition_dims, validate_dimensions, validate_indices, validate_multiplication_dims,
};
pub use shape::{validate_rectangular, validate_square};
