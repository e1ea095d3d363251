//! Expression Templates
//!
//! Arithmetic expressions over a single variable, built with ordinary Rust
//! operators and encoded entirely in the type system. `cos(x) / x + 2.0` is
//! one `Copy` value whose type spells out the tree; evaluating it at a point
//! runs straight-line scalar code with no allocation and no dynamic dispatch.
//!
//! # Features
//! - Node kinds: constant, variable, negation, binary `+ - * /`, unary functions
//! - Functions: sin, cos, exp, ln, sqrt, abs
//! - Scalars on either side of an operator (`2.0 * x`, `x / 3.0`)
//! - Generic over the scalar: `f64` and `f32`
//! - Zero state overhead: only constants occupy memory
//! - `Display` with minimal parentheses
//!
//! # Usage Example
//! ```
//! use expr_templates::{Expression, cos, var};
//!
//! let x = var::<f64>();
//! let expr = cos(x) / x + 2.0;
//!
//! assert_eq!(expr.eval(3.0), 3.0_f64.cos() / 3.0 + 2.0);
//! assert_eq!(expr.to_string(), "cos(x) / x + 2");
//! assert_eq!(std::mem::size_of_val(&expr), std::mem::size_of::<f64>());
//! ```

mod display;
mod error;
pub mod expr;
pub mod functions;
pub mod ops;
mod report;
pub mod traits;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use display::VARIABLE_NAME;
pub use error::{ReportError, Result};
pub use expr::{
    Apply, Binary, Constant, Expression, IntoExpression, Negate, Variable, constant, var,
};
pub use functions::{Abs, Cos, Exp, Ln, Sin, Sqrt, UnaryFn, abs, cos, exp, ln, sin, sqrt};
pub use ops::{BinaryOp, Divide, Minus, Plus, Times};
pub use report::{DEFAULT_POINTS, Report};
pub use traits::{FLOAT_TOLERANCE, MathScalar, approx_eq};

/// Evaluate `expr` at each of `points`
///
/// # Example
/// ```
/// use expr_templates::{evaluate_at, var};
///
/// let x = var::<f64>();
/// assert_eq!(evaluate_at(&(x * 2.0), &[1.0, 2.0]), vec![2.0, 4.0]);
/// ```
pub fn evaluate_at<E: Expression>(expr: &E, points: &[E::Scalar]) -> Vec<E::Scalar> {
    points.iter().map(|&x| expr.eval(x)).collect()
}
