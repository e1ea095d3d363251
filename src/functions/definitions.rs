//! Marker types for the supported functions
//!
//! sin, cos, exp, ln, sqrt and abs, each applied through `Float`.

use super::UnaryFn;
use crate::traits::MathScalar;
use num_traits::Float;

macro_rules! unary_functions {
    ($($(#[$meta:meta])* $marker:ident => $name:literal, $float_fn:ident);* $(;)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl UnaryFn for $marker {
                const NAME: &'static str = $name;

                #[inline]
                fn apply<T: MathScalar>(x: T) -> T {
                    // Float::abs, not Signed::abs
                    Float::$float_fn(x)
                }
            }
        )*
    };
}

unary_functions! {
    /// Sine
    Sin => "sin", sin;
    /// Cosine
    Cos => "cos", cos;
    /// Exponential
    Exp => "exp", exp;
    /// Natural logarithm
    Ln => "ln", ln;
    /// Square root
    Sqrt => "sqrt", sqrt;
    /// Absolute value
    Abs => "abs", abs;
}
