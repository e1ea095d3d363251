// Display formatting for expression nodes
use crate::expr::{Apply, Binary, Constant, Expression, NEG_PRECEDENCE, Negate, Variable};
use crate::functions::UnaryFn;
use crate::ops::BinaryOp;
use crate::traits::MathScalar;
use std::fmt;

/// Name the input variable renders as
pub const VARIABLE_NAME: &str = "x";

/// Write `e`, wrapped in parentheses when `wrap` is set.
fn write_operand<E: Expression>(f: &mut fmt::Formatter<'_>, e: &E, wrap: bool) -> fmt::Result {
    if wrap {
        write!(f, "({})", e)
    } else {
        write!(f, "{}", e)
    }
}

impl<T: MathScalar> fmt::Display for Constant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.value();
        if n.is_nan() {
            write!(f, "NaN")
        } else if n.is_infinite() {
            if n > T::zero() {
                write!(f, "Infinity")
            } else {
                write!(f, "-Infinity")
            }
        } else {
            // Float Display already drops a zero fractional part: 2.0 -> "2"
            write!(f, "{}", n)
        }
    }
}

impl<T> fmt::Display for Variable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(VARIABLE_NAME)
    }
}

impl<E: Expression> fmt::Display for Negate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner();
        // -(-x) and -(-2) keep their parentheses so they never print as "--"
        write!(f, "-")?;
        write_operand(f, inner, inner.precedence() <= NEG_PRECEDENCE)
    }
}

impl<L, O, R> fmt::Display for Binary<L, O, R>
where
    L: Expression,
    R: Expression<Scalar = L::Scalar>,
    O: BinaryOp,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lhs, rhs) = (self.lhs(), self.rhs());
        let lp = lhs.precedence();
        let rp = rhs.precedence();

        write_operand(f, lhs, lp < O::PRECEDENCE)?;
        write!(f, " {} ", O::SYMBOL)?;
        // a - (b - c) and a / (b * c) need their grouping kept on the right,
        // and a negative right operand is wrapped so "x - -2" reads "x - (-2)"
        let wrap_rhs = rp < O::PRECEDENCE
            || (rp == O::PRECEDENCE && !O::ASSOCIATIVE)
            || rp == NEG_PRECEDENCE;
        write_operand(f, rhs, wrap_rhs)
    }
}

impl<F: UnaryFn, E: Expression> fmt::Display for Apply<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", F::NAME, self.arg())
    }
}
