use std::fmt;

use thiserror::Error;

use crate::error::{ParseError, RuntimeError};

/// The two failure kinds a front-end distinguishes when reporting to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The right operand of `/`, `//` or `%` was zero.
    DivisionByZero,
    /// Anything else: lexing and parsing failures, unsupported constructs,
    /// math domain errors, overflow and nesting limits.
    InvalidExpression,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => f.write_str("division by zero"),
            Self::InvalidExpression => f.write_str("invalid expression"),
        }
    }
}

/// Any failure of parsing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The expression could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CalcError {
    /// Classifies the error into the kind shown to users.
    ///
    /// # Example
    /// ```
    /// use safecalc::{error::ErrorKind, evaluate_expression};
    ///
    /// let err = evaluate_expression("5 // 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    ///
    /// let err = evaluate_expression("a + 1").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidExpression);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            _ => ErrorKind::InvalidExpression,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::DivisionByZero`.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self.kind(), ErrorKind::DivisionByZero)
    }
}
