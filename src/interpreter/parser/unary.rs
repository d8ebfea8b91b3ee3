use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, describe},
        parser::{
            binary::parse_power,
            core::{Nesting, ParseResult, parse_expression},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix signs `+` and `-`. Signs are right-associative, so
/// `--x` is parsed as `-(-x)`. Without a sign the function delegates to
/// [`parse_power`], which makes `**` bind tighter than the sign.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | power
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        _ => return parse_power(tokens, nesting),
    };

    let Some((_, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let expr = parse_unary(tokens, nesting.deeper(*position)?)?;
    nesting.admit(expr.depth() + 1, *position)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       position: *position })
}

/// Parses a primary (atomic) expression: a numeric literal or a
/// parenthesised expression.
///
/// Grammar:
/// ```text
///     primary := INTEGER | REAL | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` when an operand is missing at the end, as in
///   `1 +`.
/// - `UnexpectedToken` for an operator or `)` where an operand belongs.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(n), position)) => Ok(Expr::Literal { value:    (*n).into(),
                                                                  position: *position, }),
        Some((Token::Real(r), position)) => Ok(Expr::Literal { value:    (*r).into(),
                                                               position: *position, }),
        Some((Token::LParen, position)) => parse_grouping(tokens, nesting.deeper(*position)?, *position),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    describe(tok),
                                                                   position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses the inside of a parenthesised expression, after the `(`.
///
/// Parentheses only group; they leave no node in the tree.
///
/// # Errors
/// `ExpectedClosingParen` pointing at the opening parenthesis when the
/// group is not closed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         nesting: Nesting,
                         open_position: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, nesting)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position: open_position }),
    }
}
