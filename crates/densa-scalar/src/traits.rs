//! Capability traits for matrix elements.
//!
//! Which operations a matrix supports is decided by which of these traits
//! its element type implements. Integer matrices can be transposed, added,
//! multiplied and expanded by cofactors; everything that pivots, divides or
//! takes square roots requires [`Real`].

use std::fmt::Debug;
use std::ops::Neg;

use num_traits::{Float, FromPrimitive, Num, NumAssign};

/// A numeric element usable in any matrix container operation.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Every element has an additive inverse (`neg`)
///
/// Unsigned integers are excluded because they have no additive inverse.
pub trait Scalar: Copy + Debug + PartialEq + Num + NumAssign + Neg<Output = Self> {
    /// Returns `(-1)^k`.
    ///
    /// Used for the alternating signs of cofactor expansion.
    #[must_use]
    fn alternating_sign(k: usize) -> Self {
        if k % 2 == 0 {
            Self::one()
        } else {
            -Self::one()
        }
    }

    /// Returns `self * self`.
    #[must_use]
    fn squared(self) -> Self {
        self * self
    }
}

impl<T> Scalar for T where T: Copy + Debug + PartialEq + Num + NumAssign + Neg<Output = T> {}

/// A floating-point element.
///
/// Required by every strategy that selects pivots by magnitude, divides, or
/// takes square roots.
pub trait Real: Scalar + Float + FromPrimitive {
    /// Converts an `f64` literal into this type.
    ///
    /// Tolerances and thresholds are specified as `f64`. A failed conversion
    /// yields NaN.
    #[must_use]
    fn constant(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::nan)
    }

    /// Returns `2`.
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T> Real for T where T: Scalar + Float + FromPrimitive {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum<T: Scalar>(values: &[T]) -> T {
        values.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    #[test]
    fn test_alternating_sign() {
        assert_eq!(i64::alternating_sign(0), 1);
        assert_eq!(i64::alternating_sign(1), -1);
        assert_eq!(i64::alternating_sign(6), 1);
        assert_eq!(f64::alternating_sign(3), -1.0);
    }

    #[test]
    fn test_integers_are_scalars() {
        assert_eq!(sum(&[1i32, 2, 3]), 6);
        assert_eq!(sum(&[4i64, -5]), -1);
        assert_eq!(7i64.squared(), 49);
    }

    #[test]
    fn test_real_constants() {
        assert_eq!(f64::constant(1e-9), 1e-9);
        assert_eq!(f32::constant(0.5), 0.5f32);
        assert_eq!(f64::two(), 2.0);
    }

    #[test]
    fn test_real_is_scalar() {
        fn needs_scalar<T: Scalar>(x: T) -> T {
            x.squared()
        }
        fn needs_real<T: Real>(x: T) -> T {
            needs_scalar(x).sqrt()
        }
        assert_eq!(needs_real(3.0f64), 3.0);
    }
}
