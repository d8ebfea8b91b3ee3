/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unexpected characters, unbalanced
/// parentheses, missing operands and literals that cannot be represented.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a syntax
/// tree: division by zero, math domain errors and overflow.
pub mod runtime_error;
/// The error returned by the public entry points.
///
/// Wraps parse and runtime errors and classifies them into the two failure
/// kinds callers present to users.
pub mod calc_error;

pub use calc_error::{CalcError, ErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
