use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, describe},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Tracks how deeply parentheses, signs and powers are nested, and bounds
/// the depth of every node the parser builds.
///
/// Nesting recurses in the parser, so the level counter bounds the parser's
/// stack use on hostile input such as ten thousand `(`. Operator chains do
/// not recurse while parsing but still produce one tree level per operator,
/// so every new node is checked against `max_depth` as well. No tree deeper
/// than `max_depth` is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nesting {
    level:     usize,
    limit:     usize,
    max_depth: usize,
}

impl Nesting {
    /// Starts at level zero with the given limits.
    #[must_use]
    pub const fn new(limit: usize, max_depth: usize) -> Self {
        Self { level: 0,
               limit,
               max_depth }
    }

    /// Returns the counter one level deeper.
    ///
    /// # Errors
    /// `ParseError::NestingTooDeep` once the limit is exceeded.
    pub const fn deeper(self, position: usize) -> ParseResult<Self> {
        if self.level >= self.limit {
            return Err(ParseError::NestingTooDeep { limit: self.limit,
                                                    position });
        }
        Ok(Self { level: self.level + 1,
                  ..self })
    }

    /// Accepts a node of the given tree depth.
    ///
    /// # Errors
    /// `ParseError::TreeTooDeep` if `depth` exceeds `max_depth`.
    pub const fn admit(self, depth: usize, position: usize) -> ParseResult<usize> {
        if depth > self.max_depth {
            return Err(ParseError::TreeTooDeep { limit: self.max_depth,
                                                 position });
        }
        Ok(depth)
    }
}

/// Parses a complete expression: the whole token stream must form exactly one
/// arithmetic expression.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `max_nesting`: Maximum depth of parentheses, signs and powers.
/// - `max_depth`: Maximum depth of the resulting tree.
///
/// # Returns
/// The root node of the syntax tree.
///
/// # Errors
/// - `EmptyExpression` if there are no tokens at all.
/// - `TreeTooDeep` if the tree would be deeper than `max_depth`, as in a sum
///   of a million terms.
/// - `UnexpectedTrailingTokens` if tokens remain after the expression, as in
///   `1 2` or `(1))`.
/// - Any error from the precedence levels below.
pub fn parse<'a, I>(tokens: &mut Peekable<I>,
                    max_nesting: usize,
                    max_depth: usize)
                    -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if tokens.peek().is_none() {
        return Err(ParseError::EmptyExpression);
    }

    let expr = parse_expression(tokens, Nesting::new(max_nesting, max_depth))?;

    if let Some((token, position)) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    describe(token),
                                                          position: *position, });
    }

    Ok(expr)
}

/// Parses an expression starting at the lowest precedence level.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, nesting)
}
