//! Operator overloading for expression nodes
//!
//! `+ - * /` between two nodes, or a node and a bare `f32`/`f64` on either
//! side, build a [`Binary`] node; unary `-` builds a [`Negate`]. The result
//! type records the whole tree, e.g. `x + 2.0` is
//! `Binary<Variable<f64>, Plus, Constant<f64>>`.

use crate::expr::{Apply, Binary, Constant, Expression, IntoExpression, Negate, Variable};
use crate::traits::MathScalar;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A binary arithmetic operator, as a zero-sized marker type.
pub trait BinaryOp: Copy + 'static {
    /// Infix symbol used when rendering
    const SYMBOL: &'static str;
    /// Binding strength; higher binds tighter
    const PRECEDENCE: u8;
    /// Whether `a op (b op c) == (a op b) op c`, i.e. whether the right
    /// operand can drop its parentheses at equal precedence
    const ASSOCIATIVE: bool;

    fn apply<T: MathScalar>(lhs: T, rhs: T) -> T;
}

macro_rules! binary_ops {
    ($($(#[$meta:meta])* $marker:ident => $symbol:literal, $prec:literal, $assoc:literal, |$l:ident, $r:ident| $body:expr;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl BinaryOp for $marker {
                const SYMBOL: &'static str = $symbol;
                const PRECEDENCE: u8 = $prec;
                const ASSOCIATIVE: bool = $assoc;

                #[inline]
                fn apply<T: MathScalar>($l: T, $r: T) -> T {
                    $body
                }
            }
        )*
    };
}

binary_ops! {
    /// Addition
    Plus => "+", 1, true, |l, r| l + r;
    /// Subtraction
    Minus => "-", 1, false, |l, r| l - r;
    /// Multiplication
    Times => "*", 2, true, |l, r| l * r;
    /// Division (IEEE: `x / 0` is ±inf or NaN)
    Divide => "/", 2, false, |l, r| l / r;
}

// ===== Macro for generating operator implementations =====
// One invocation per node type: node op anything-convertible, unary minus,
// and scalar op node for both float widths.

macro_rules! impl_expression_ops {
    ([$($g:ident),*] $node:ty) => {
        impl_expression_ops!(@binary [$($g),*] $node, Add, add, Plus);
        impl_expression_ops!(@binary [$($g),*] $node, Sub, sub, Minus);
        impl_expression_ops!(@binary [$($g),*] $node, Mul, mul, Times);
        impl_expression_ops!(@binary [$($g),*] $node, Div, div, Divide);

        impl<$($g),*> Neg for $node
        where
            $node: Expression,
        {
            type Output = Negate<$node>;

            #[inline]
            fn neg(self) -> Negate<$node> {
                Negate::new(self)
            }
        }

        impl<$($g),*> IntoExpression for $node
        where
            $node: Expression,
        {
            type Scalar = <$node as Expression>::Scalar;
            type Expr = $node;

            #[inline]
            fn into_expression(self) -> $node {
                self
            }
        }
    };

    (@binary [$($g:ident),*] $node:ty, $trait:ident, $method:ident, $op:ident) => {
        impl<$($g,)* Rhs> $trait<Rhs> for $node
        where
            $node: Expression,
            Rhs: IntoExpression<Scalar = <$node as Expression>::Scalar>,
        {
            type Output = Binary<$node, $op, Rhs::Expr>;

            #[inline]
            fn $method(self, rhs: Rhs) -> Self::Output {
                Binary::new(self, rhs.into_expression())
            }
        }

        impl_expression_ops!(@scalar_lhs f64, [$($g),*] $node, $trait, $method, $op);
        impl_expression_ops!(@scalar_lhs f32, [$($g),*] $node, $trait, $method, $op);
    };

    (@scalar_lhs $scalar:ty, [$($g:ident),*] $node:ty, $trait:ident, $method:ident, $op:ident) => {
        impl<$($g),*> $trait<$node> for $scalar
        where
            $node: Expression<Scalar = $scalar>,
        {
            type Output = Binary<Constant<$scalar>, $op, $node>;

            #[inline]
            fn $method(self, rhs: $node) -> Self::Output {
                Binary::new(Constant::new(self), rhs)
            }
        }
    };
}

impl_expression_ops!([T] Constant<T>);
impl_expression_ops!([T] Variable<T>);
impl_expression_ops!([E] Negate<E>);
impl_expression_ops!([L, O, R] Binary<L, O, R>);
impl_expression_ops!([F, E] Apply<F, E>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{constant, var};

    const _: () = assert!(Times::PRECEDENCE > Plus::PRECEDENCE);
    const _: () = assert!(Plus::ASSOCIATIVE && Times::ASSOCIATIVE);
    const _: () = assert!(!Minus::ASSOCIATIVE && !Divide::ASSOCIATIVE);

    #[test]
    fn test_markers() {
        assert_eq!(Plus::apply(2.0, 3.0), 5.0);
        assert_eq!(Minus::apply(2.0, 3.0), -1.0);
        assert_eq!(Times::apply(2.0, 3.0), 6.0);
        assert_eq!(Divide::apply(3.0, 2.0), 1.5);
        assert_eq!(Minus::SYMBOL, "-");
    }

    #[test]
    fn test_non_associative_ops_group_right() {
        let x = var::<f64>();
        // 8 / (4 / 2) and 8 - (4 - 2) must not regroup to the left
        assert_eq!((x / (x / 2.0)).eval(8.0), 2.0);
        assert_eq!((x - (x - 2.0)).eval(8.0), 2.0);
        assert_eq!(((x / x) / 2.0).eval(8.0), 0.5);
    }

    /// Operator markers only need to be `Copy`
    #[derive(Clone, Copy)]
    struct Max;

    impl BinaryOp for Max {
        const SYMBOL: &'static str = "max";
        const PRECEDENCE: u8 = 2;
        const ASSOCIATIVE: bool = true;

        fn apply<T: MathScalar>(lhs: T, rhs: T) -> T {
            lhs.max(rhs)
        }
    }

    #[test]
    fn test_custom_marker_without_default() {
        let x = var::<f64>();
        let e: Binary<Variable<f64>, Max, Constant<f64>> = Binary::new(x, constant(2.0));
        assert_eq!(e.eval(3.0), 3.0);
        assert_eq!(e.eval(1.5), 2.0);
        assert_eq!(e.to_string(), "x max 2");
    }

    #[test]
    fn test_node_op_node() {
        let x = var::<f64>();
        assert_eq!((x + x).eval(2.0), 4.0);
        assert_eq!((x - x).eval(2.0), 0.0);
        assert_eq!((x * x).eval(3.0), 9.0);
        assert_eq!((x / x).eval(3.0), 1.0);
        assert_eq!((x * x + x).eval(3.0), 12.0);
        assert_eq!((constant(1.0) + x).eval(3.0), 4.0);
    }

    #[test]
    fn test_node_op_scalar() {
        let x = var::<f64>();
        assert_eq!((x + 2.0).eval(3.0), 5.0);
        assert_eq!((x - 2.0).eval(3.0), 1.0);
        assert_eq!((x * 2.0).eval(3.0), 6.0);
        assert_eq!((x / 2.0).eval(3.0), 1.5);
    }

    #[test]
    fn test_scalar_op_node() {
        let x = var::<f64>();
        assert_eq!((2.0 + x).eval(3.0), 5.0);
        assert_eq!((2.0 - x).eval(3.0), -1.0);
        assert_eq!((2.0 * x).eval(3.0), 6.0);
        assert_eq!((3.0 / x).eval(2.0), 1.5);
        // Left scalar on a compound node
        assert_eq!((1.0 - (x * x)).eval(3.0), -8.0);
    }

    #[test]
    fn test_operand_order_is_preserved() {
        let x = var::<f64>();
        // Non-commutative ops must not swap sides when the scalar is on the left
        assert_eq!((10.0 - x).eval(4.0), 6.0);
        assert_eq!((x - 10.0).eval(4.0), -6.0);
        assert_eq!((8.0 / x).eval(4.0), 2.0);
        assert_eq!((x / 8.0).eval(4.0), 0.5);
    }

    #[test]
    fn test_neg() {
        let x = var::<f64>();
        assert_eq!((-x).eval(2.0), -2.0);
        assert_eq!((-(x + 1.0)).eval(2.0), -3.0);
        assert_eq!((-x * x).eval(3.0), -9.0);
        assert_eq!((-constant(4.0)).eval(0.0), -4.0);
    }

    #[test]
    fn test_f32_expressions() {
        let x = var::<f32>();
        let e = 2.0_f32 * x + 1.0_f32;
        assert_eq!(e.eval(3.0), 7.0_f32);
    }

    #[test]
    fn test_division_by_zero_follows_ieee() {
        let x = var::<f64>();
        assert_eq!((1.0 / x).eval(0.0), f64::INFINITY);
        assert_eq!((-1.0 / x).eval(0.0), f64::NEG_INFINITY);
        assert!((x / x).eval(0.0).is_nan());
    }
}
