//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements. Only signed integers qualify.

use core::fmt::{Debug, Display};
use core::hash::Hash;

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - Eq + Hash: Usable in structural comparisons
/// - Display: Renderable in the text grid
pub trait MatrixElement: Copy + Eq + Hash + Debug + Display + Sized {
    /// Additive identity, never stored in sparse storage
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// Addition returning `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Multiplication returning `None` on overflow
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Whether this value is the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_matrix_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

impl_matrix_element!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(MatrixElement::checked_add(2i32, 3), Some(5));
        assert_eq!(MatrixElement::checked_mul(i8::MAX, 2), None);
        assert!(MatrixElement::is_zero(0i64));
        assert!(!MatrixElement::is_zero(-1i64));
    }
}
