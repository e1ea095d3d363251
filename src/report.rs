//! Evaluating an expression at a set of sample points
//!
//! # Example
//! ```
//! use expr_templates::{Report, cos, var};
//!
//! let x = var::<f64>();
//! let mut out = Vec::new();
//! let values = Report::default().write_to(&(cos(x) / x + 2.0), &mut out).unwrap();
//! assert_eq!(values.len(), 2);
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
//! ```

use crate::error::{ReportError, Result};
use crate::expr::Expression;
use crate::traits::MathScalar;
use std::io::Write;
use tracing::{debug, instrument};

/// Points the program evaluates its expression at
pub const DEFAULT_POINTS: [f64; 2] = [3.0, 1.5];

/// Builder for evaluating an expression at fixed points and writing the results
#[derive(Debug, Clone, PartialEq)]
pub struct Report<T> {
    points: Vec<T>,
    precision: Option<usize>,
}

impl Default for Report<f64> {
    fn default() -> Self {
        Self::new(DEFAULT_POINTS)
    }
}

impl<T: MathScalar> Report<T> {
    /// Create a report over the given points, printed at full precision
    pub fn new(points: impl IntoIterator<Item = T>) -> Self {
        Self {
            points: points.into_iter().collect(),
            precision: None,
        }
    }

    /// Replace the sample points
    pub fn points(mut self, points: impl IntoIterator<Item = T>) -> Self {
        self.points = points.into_iter().collect();
        self
    }

    /// Fixed number of decimal places, or `None` for the shortest
    /// representation that round-trips
    pub fn precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    pub fn sample_points(&self) -> &[T] {
        &self.points
    }

    /// Evaluate `expr` at every point, in order
    pub fn evaluate<E>(&self, expr: &E) -> Vec<T>
    where
        E: Expression<Scalar = T>,
    {
        self.points
            .iter()
            .map(|&x| {
                let value = expr.eval(x);
                debug!(%x, %value, "evaluated");
                value
            })
            .collect()
    }

    /// Evaluate `expr` at every point and write one value per line to `out`
    ///
    /// Returns the values written.
    #[instrument(level = "debug", skip_all, fields(expr = %expr, points = self.points.len()))]
    pub fn write_to<E, W>(&self, expr: &E, out: &mut W) -> Result<Vec<T>>
    where
        E: Expression<Scalar = T>,
        W: Write,
    {
        let values = self.evaluate(expr);
        for (x, value) in self.points.iter().zip(&values) {
            let written = match self.precision {
                Some(p) => writeln!(out, "{:.*}", p, value),
                None => writeln!(out, "{}", value),
            };
            written.map_err(|e| ReportError::io(format!("writing value at x = {}", x), e))?;
        }
        out.flush()
            .map_err(|e| ReportError::io("flushing output", e))?;
        Ok(values)
    }
}
