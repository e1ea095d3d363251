//! Expression nodes
//!
//! An expression is a tree of nodes encoded in its *type*: `cos(x) / x + 2.0`
//! has type `Binary<Binary<Apply<Cos, Variable<f64>>, Divide, Variable<f64>>, Plus, Constant<f64>>`.
//! Evaluating it is a chain of statically dispatched calls that the optimizer
//! can inline into straight-line arithmetic; nothing is allocated.
//!
//! Node kinds:
//! - [`Constant`]: a fixed scalar
//! - [`Variable`]: the input `x`
//! - [`Negate`]: `-e`
//! - [`Binary`]: `l op r` for one of the [`BinaryOp`](crate::ops::BinaryOp) markers
//! - [`Apply`]: `f(e)` for one of the [`UnaryFn`](crate::functions::UnaryFn) markers

use crate::functions::{Abs, Cos, Exp, Ln, Sin, Sqrt, UnaryFn};
use crate::ops::BinaryOp;
use crate::traits::MathScalar;
use std::fmt;
use std::marker::PhantomData;

/// Precedence of leaves and function calls; never parenthesised.
pub const ATOM_PRECEDENCE: u8 = u8::MAX;
/// Precedence of unary minus, binds tighter than any binary operator.
pub const NEG_PRECEDENCE: u8 = 3;

/// A callable expression over a single scalar input.
pub trait Expression: Copy + fmt::Display {
    /// The scalar type the expression is evaluated over
    type Scalar: MathScalar;

    /// Evaluate the expression at `x`.
    ///
    /// Follows IEEE semantics throughout: dividing by zero yields an infinity
    /// or NaN rather than an error.
    fn eval(&self, x: Self::Scalar) -> Self::Scalar;

    /// Binding strength when rendered as text
    fn precedence(&self) -> u8 {
        ATOM_PRECEDENCE
    }

    /// Number of nodes in the tree
    fn node_count(&self) -> usize;

    /// Length of the longest root-to-leaf path (a leaf has depth 1)
    fn depth(&self) -> usize;

    /// Turn the expression into a plain closure.
    fn into_fn(self) -> impl Fn(Self::Scalar) -> Self::Scalar {
        move |x| self.eval(x)
    }

    fn sin(self) -> Apply<Sin, Self> {
        Apply::new(self)
    }

    fn cos(self) -> Apply<Cos, Self> {
        Apply::new(self)
    }

    fn exp(self) -> Apply<Exp, Self> {
        Apply::new(self)
    }

    /// Natural logarithm
    fn ln(self) -> Apply<Ln, Self> {
        Apply::new(self)
    }

    fn sqrt(self) -> Apply<Sqrt, Self> {
        Apply::new(self)
    }

    fn abs(self) -> Apply<Abs, Self> {
        Apply::new(self)
    }
}

/// Conversion into an [`Expression`].
///
/// Implemented by every node (identity) and by `f32`/`f64` (wrapped in a
/// [`Constant`]), so operators accept either on the right-hand side.
pub trait IntoExpression {
    type Scalar: MathScalar;
    type Expr: Expression<Scalar = Self::Scalar>;

    fn into_expression(self) -> Self::Expr;
}

macro_rules! impl_scalar_into_expression {
    ($($scalar:ty),*) => {
        $(
            impl IntoExpression for $scalar {
                type Scalar = $scalar;
                type Expr = Constant<$scalar>;

                #[inline]
                fn into_expression(self) -> Constant<$scalar> {
                    Constant::new(self)
                }
            }
        )*
    };
}

impl_scalar_into_expression!(f32, f64);

// ===== Constant =====

/// A fixed value, independent of the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant<T> {
    value: T,
}

impl<T: MathScalar> Constant<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: MathScalar> Expression for Constant<T> {
    type Scalar = T;

    #[inline]
    fn eval(&self, _x: T) -> T {
        self.value
    }

    fn precedence(&self) -> u8 {
        // -2 reads like a negation, so it needs the same parentheses
        if self.value.is_sign_negative() && !self.value.is_nan() {
            NEG_PRECEDENCE
        } else {
            ATOM_PRECEDENCE
        }
    }

    fn node_count(&self) -> usize {
        1
    }

    fn depth(&self) -> usize {
        1
    }
}

/// Convenience function to create a [`Constant`]
pub fn constant<T: MathScalar>(value: T) -> Constant<T> {
    Constant::new(value)
}

// ===== Variable =====

/// The input of the expression. Zero-sized.
pub struct Variable<T> {
    _scalar: PhantomData<T>,
}

impl<T> Variable<T> {
    pub const fn new() -> Self {
        Self {
            _scalar: PhantomData,
        }
    }
}

// Manual impls: derives would demand `T: Clone` etc. for a marker-only field
impl<T> Clone for Variable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Variable<T> {}

impl<T> Default for Variable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for Variable<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> fmt::Debug for Variable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Variable")
    }
}

impl<T: MathScalar> Expression for Variable<T> {
    type Scalar = T;

    #[inline]
    fn eval(&self, x: T) -> T {
        x
    }

    fn node_count(&self) -> usize {
        1
    }

    fn depth(&self) -> usize {
        1
    }
}

/// Convenience function to create the input [`Variable`]
///
/// # Example
/// ```
/// use expr_templates::{Expression, cos, var};
///
/// let x = var::<f64>();
/// let f = cos(x) / x + 2.0;
/// assert_eq!(f.eval(3.0), 3.0_f64.cos() / 3.0 + 2.0);
/// ```
pub const fn var<T>() -> Variable<T> {
    Variable::new()
}

// ===== Negate =====

/// Unary minus of the inner expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Negate<E> {
    inner: E,
}

impl<E: Expression> Negate<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Expression> Expression for Negate<E> {
    type Scalar = E::Scalar;

    #[inline]
    fn eval(&self, x: E::Scalar) -> E::Scalar {
        -self.inner.eval(x)
    }

    fn precedence(&self) -> u8 {
        NEG_PRECEDENCE
    }

    fn node_count(&self) -> usize {
        1 + self.inner.node_count()
    }

    fn depth(&self) -> usize {
        1 + self.inner.depth()
    }
}

// ===== Binary =====

/// `lhs op rhs`. The operator is a type parameter and takes no space.
pub struct Binary<L, O, R> {
    lhs: L,
    rhs: R,
    _op: PhantomData<O>,
}

impl<L, O, R> Binary<L, O, R>
where
    L: Expression,
    R: Expression<Scalar = L::Scalar>,
    O: BinaryOp,
{
    pub fn new(lhs: L, rhs: R) -> Self {
        Self {
            lhs,
            rhs,
            _op: PhantomData,
        }
    }

    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}

impl<L: Clone, O, R: Clone> Clone for Binary<L, O, R> {
    fn clone(&self) -> Self {
        Self {
            lhs: self.lhs.clone(),
            rhs: self.rhs.clone(),
            _op: PhantomData,
        }
    }
}

impl<L: Copy, O, R: Copy> Copy for Binary<L, O, R> {}

impl<L: PartialEq, O, R: PartialEq> PartialEq for Binary<L, O, R> {
    fn eq(&self, other: &Self) -> bool {
        self.lhs == other.lhs && self.rhs == other.rhs
    }
}

impl<L: fmt::Debug, O: BinaryOp, R: fmt::Debug> fmt::Debug for Binary<L, O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binary")
            .field("op", &O::SYMBOL)
            .field("lhs", &self.lhs)
            .field("rhs", &self.rhs)
            .finish()
    }
}

impl<L, O, R> Expression for Binary<L, O, R>
where
    L: Expression,
    R: Expression<Scalar = L::Scalar>,
    O: BinaryOp,
{
    type Scalar = L::Scalar;

    #[inline]
    fn eval(&self, x: L::Scalar) -> L::Scalar {
        O::apply(self.lhs.eval(x), self.rhs.eval(x))
    }

    fn precedence(&self) -> u8 {
        O::PRECEDENCE
    }

    fn node_count(&self) -> usize {
        1 + self.lhs.node_count() + self.rhs.node_count()
    }

    fn depth(&self) -> usize {
        1 + self.lhs.depth().max(self.rhs.depth())
    }
}

// ===== Apply =====

/// A unary function applied to the inner expression.
pub struct Apply<F, E> {
    arg: E,
    _func: PhantomData<F>,
}

impl<F: UnaryFn, E: Expression> Apply<F, E> {
    pub fn new(arg: E) -> Self {
        Self {
            arg,
            _func: PhantomData,
        }
    }

    pub fn arg(&self) -> &E {
        &self.arg
    }
}

impl<F, E: Clone> Clone for Apply<F, E> {
    fn clone(&self) -> Self {
        Self {
            arg: self.arg.clone(),
            _func: PhantomData,
        }
    }
}

impl<F, E: Copy> Copy for Apply<F, E> {}

impl<F, E: PartialEq> PartialEq for Apply<F, E> {
    fn eq(&self, other: &Self) -> bool {
        self.arg == other.arg
    }
}

impl<F: UnaryFn, E: fmt::Debug> fmt::Debug for Apply<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Apply")
            .field("func", &F::NAME)
            .field("arg", &self.arg)
            .finish()
    }
}

impl<F: UnaryFn, E: Expression> Expression for Apply<F, E> {
    type Scalar = E::Scalar;

    #[inline]
    fn eval(&self, x: E::Scalar) -> E::Scalar {
        F::apply(self.arg.eval(x))
    }

    fn node_count(&self) -> usize {
        1 + self.arg.node_count()
    }

    fn depth(&self) -> usize {
        1 + self.arg.depth()
    }
}
