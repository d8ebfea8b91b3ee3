use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// The right operand of `/`, `//` or `%` was zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// The operation is undefined for its operands, e.g. a negative base
    /// raised to a fractional power.
    #[error("Error at position {position}: Math domain error: {details}.")]
    Domain {
        /// Details about the invalid operation.
        details:  String,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// The result is too large to be represented.
    #[error("Error at position {position}: Numerical result out of range.")]
    Overflow {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// The syntax tree is deeper than the evaluator is allowed to recurse.
    #[error("Error at position {position}: Expression is deeper than {limit} levels.")]
    NestingTooDeep {
        /// The configured depth limit.
        limit:    usize,
        /// Byte offset in the source.
        position: usize,
    },
}
