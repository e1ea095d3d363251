use num_traits::{Float, FloatConst, FromPrimitive, Signed, ToPrimitive};
use std::fmt::{Debug, Display};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// Default tolerance for floating-point comparisons
pub const FLOAT_TOLERANCE: f64 = 1e-10;

/// A trait comprising all operations required of the scalar an expression
/// is evaluated over.
///
/// This aggregates `num_traits::Float` (providing sin, cos, exp, etc.),
/// `FloatConst` (PI, E), and standard arithmetic/debug traits.
/// `f32` and `f64` both qualify.
pub trait MathScalar:
    Float
    + FloatConst
    + FromPrimitive
    + ToPrimitive
    + Signed
    + Debug
    + Display
    + Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + RemAssign
    + 'static
{
}

// Blanket implementation for any type that satisfies the bounds
impl<T> MathScalar for T where
    T: Float
        + FloatConst
        + FromPrimitive
        + ToPrimitive
        + Signed
        + Debug
        + Display
        + Copy
        + Clone
        + PartialEq
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Rem<Output = T>
        + Neg<Output = T>
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + RemAssign
        + 'static
{
}

/// Check two values for equality within `FLOAT_TOLERANCE` (or a few ulps for
/// narrower types), scaled by magnitude.
///
/// NaN equals NaN and infinities compare by sign, so results that follow
/// IEEE semantics (e.g. a division by zero) can be checked like any other.
#[inline]
pub fn approx_eq<T: MathScalar>(a: T, b: T) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    // f32 cannot resolve FLOAT_TOLERANCE, fall back to a few ulps there
    let four = T::from(4.0).unwrap_or_else(T::one);
    let tol = T::from(FLOAT_TOLERANCE)
        .unwrap_or_else(T::epsilon)
        .max(T::epsilon() * four);
    let scale = T::one().max(a.abs()).max(b.abs());
    (a - b).abs() <= tol * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-12));
        assert!(approx_eq(0.0_f64, -1e-11));
        assert!(!approx_eq(1.0, 1.1));
        assert!(approx_eq(1e12, 1e12 + 1.0));
    }

    #[test]
    fn test_approx_eq_non_finite() {
        assert!(approx_eq(f64::NAN, f64::NAN));
        assert!(!approx_eq(f64::NAN, 0.0));
        assert!(approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!approx_eq(f64::INFINITY, 1e300));
    }

    #[test]
    fn test_f32_is_scalar() {
        fn takes<T: MathScalar>(x: T) -> T {
            x
        }
        assert_eq!(takes(1.5_f32), 1.5_f32);
        assert!(approx_eq(0.1_f32 + 0.2_f32, 0.3_f32));
    }
}
