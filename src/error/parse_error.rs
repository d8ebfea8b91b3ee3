use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The input contained nothing but whitespace.
    #[error("Expression is empty.")]
    EmptyExpression,
    /// Found a character or token that is not valid at this point.
    #[error("Error at position {position}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The offending source text.
        token:    String,
        /// Byte offset in the source.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Byte offset of the matching `(`.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at position {position}: Extra tokens after expression, starting at '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A literal is too large even for a double precision real.
    #[error("Error at position {position}: Literal is too large.")]
    LiteralTooLarge {
        /// Byte offset in the source.
        position: usize,
    },
    /// Parentheses, signs or powers are nested deeper than allowed.
    #[error("Error at position {position}: Expression is nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// Byte offset in the source.
        position: usize,
    },
    /// The expression would form a tree deeper than allowed, e.g. a very
    /// long chain of `+`.
    #[error("Error at position {position}: Expression is deeper than {limit} levels.")]
    TreeTooDeep {
        /// The configured depth limit.
        limit:    usize,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}
