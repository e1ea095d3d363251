//! Errors raised while reporting evaluated values
//!
//! Evaluating an expression never fails; only writing the results out can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
