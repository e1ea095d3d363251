//! Unary math functions
//!
//! Each function is a zero-sized marker type implementing [`UnaryFn`]; an
//! [`Apply<F, E>`](crate::expr::Apply) node stores only its argument. The free
//! constructors below read like the math they build: `cos(x) / x + 2.0`.

use crate::expr::{Apply, Expression};
use crate::traits::MathScalar;

mod definitions;

pub use definitions::{Abs, Cos, Exp, Ln, Sin, Sqrt};

/// A scalar function of one argument, as a zero-sized marker type.
pub trait UnaryFn: Copy + 'static {
    /// Name used when rendering, e.g. `cos`
    const NAME: &'static str;

    fn apply<T: MathScalar>(x: T) -> T;
}

// ===== Free constructors =====

macro_rules! function_constructors {
    ($($(#[$meta:meta])* $fn_name:ident => $marker:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $fn_name<E: Expression>(arg: E) -> Apply<$marker, E> {
                Apply::new(arg)
            }
        )*
    };
}

function_constructors! {
    /// `sin(arg)`
    sin => Sin,
    /// `cos(arg)`
    cos => Cos,
    /// `exp(arg)`
    exp => Exp,
    /// Natural logarithm, `ln(arg)`. NaN for negative input, -inf at zero.
    ln => Ln,
    /// `sqrt(arg)`. NaN for negative input.
    sqrt => Sqrt,
    /// `|arg|`
    abs => Abs,
}
