use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an arithmetic expression.
///
/// The token set is deliberately tiny: numbers, the seven binary operators,
/// the two signs (which share `+`/`-` with addition and subtraction) and
/// parentheses. Anything else in the input is a lexical error.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `.5`, `5.` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Errors raised by the token callbacks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The input contains a character no token starts with.
    #[default]
    UnexpectedCharacter,
    /// An integer literal does not fit in an `i64`. The tokenizer retries it
    /// as a real.
    IntegerOverflow,
}

/// Parses a floating-point literal from the current token slice.
///
/// Literals too large for an `f64` become infinity rather than an error.
fn parse_real(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice()
       .parse()
       .map_err(|_| LexError::UnexpectedCharacter)
}

/// Parses an integer literal from the current token slice.
///
/// The slice only ever holds ASCII digits, so the one way to fail is
/// overflow.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice()
       .parse()
       .map_err(|_| LexError::IntegerOverflow)
}

/// Reads an integer literal too large for an `i64` as a real, the same
/// promotion integer arithmetic gets on overflow.
///
/// # Errors
/// `ParseError::LiteralTooLarge` when even an `f64` cannot hold it.
fn promote_integer(digits: &str, position: usize) -> Result<Token, ParseError> {
    digits.parse::<f64>()
          .ok()
          .filter(|r| r.is_finite())
          .map(Token::Real)
          .ok_or(ParseError::LiteralTooLarge { position })
}

/// Splits `source` into tokens paired with their byte offset.
///
/// # Errors
/// - `ParseError::UnexpectedToken` for any character outside the token set,
///   e.g. letters, `=`, `^` or `,`.
/// - `ParseError::LiteralTooLarge` for integers beyond the range of `f64`.
///   Integers beyond `i64` but within `f64` become `Token::Real`.
///
/// # Example
/// ```
/// use safecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 ** -1").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(2), 0),
///                 (Token::DoubleStar, 2),
///                 (Token::Minus, 5),
///                 (Token::Integer(1), 6)]);
///
/// assert!(tokenize("import os").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexError::IntegerOverflow) => {
                tokens.push((promote_integer(lexer.slice(), position)?, position));
            },
            Err(LexError::UnexpectedCharacter) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         position });
            },
        }
    }

    Ok(tokens)
}

/// Returns the source text a token stands for, for error messages.
#[must_use]
pub fn describe(token: &Token) -> String {
    match token {
        Token::Real(r) => format!("{r:?}"),
        Token::Integer(n) => n.to_string(),
        Token::Plus => "+".to_string(),
        Token::Minus => "-".to_string(),
        Token::Star => "*".to_string(),
        Token::DoubleStar => "**".to_string(),
        Token::Slash => "/".to_string(),
        Token::DoubleSlash => "//".to_string(),
        Token::Percent => "%".to_string(),
        Token::LParen => "(".to_string(),
        Token::RParen => ")".to_string(),
    }
}
