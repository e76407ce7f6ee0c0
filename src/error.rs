//! Error types for siftql.

use crate::ast::Operator;
use thiserror::Error;

/// The main error type for siftql operations.
///
/// The compilers themselves are total and never return errors; these
/// variants all live at the parsing and validation boundary.
#[derive(Debug, Error)]
pub enum SiftError {
    /// The filter description is not shaped like a where-expression.
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    /// Unknown comparison operator name.
    #[error("Invalid operator: '{0}'")]
    InvalidOperator(String),

    /// A predicate or row value that is not a plain scalar.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// An operator paired with a value kind it cannot compare.
    #[error("Operator {op} cannot compare a {kind} value (column '{column}')")]
    KindMismatch {
        column: String,
        op: Operator,
        kind: &'static str,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for siftql operations.
pub type SiftResult<T> = Result<T, SiftError>;
