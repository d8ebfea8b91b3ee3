//! # safecalc
//!
//! safecalc is a calculator built around a restricted arithmetic evaluator.
//! Expressions are tokenized, parsed into a closed syntax tree of literals,
//! signs and binary operations, and reduced to a number by a tree walk over a
//! fixed set of seven operators. No other construct can be expressed, so no
//! other construct can be executed.
//!
//! Three front-ends share the evaluator: a terminal menu, a desktop keypad
//! model and a web widget state machine.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    ast::{BinaryOperator, Expr},
    error::CalcError,
    interpreter::{
        evaluator::core::{Evaluator, Limits},
        lexer::tokenize,
        parser::core::parse,
        value::core::Number,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator and literal types
/// that represent an arithmetic expression as a tree. The tree is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of node variants.
/// - Attaches source offsets to nodes for error reporting.
pub mod ast;
/// Capability for copying results to the system clipboard.
///
/// Front-ends depend on the `Clipboard` trait only; the system
/// implementation is backed by `arboard`.
pub mod clipboard;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression, and the `CalcError` wrapper whose `kind()`
/// separates division by zero from every other failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source offsets and detailed messages for context.
pub mod error;
/// The terminal menu, desktop keypad and web widget front-ends.
///
/// Each front-end owns its own session state and funnels user input into
/// [`evaluate_expression`] or [`apply_operator`].
pub mod frontend;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, the parser, the evaluator and the
/// runtime number type.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric utilities.
///
/// Floor division and modulo for integers and reals, and integer to real
/// promotion.
pub mod util;

/// Parses an expression into a syntax tree without evaluating it.
///
/// # Errors
/// Returns `CalcError::Parse` for any lexical or grammatical error.
///
/// # Examples
/// ```
/// use safecalc::parse_expression;
///
/// let expr = parse_expression("1 + 2 * 3").unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
///
/// let expr = parse_expression("-2 ** 2").unwrap();
/// assert_eq!(expr.to_string(), "(-(2 ** 2))");
/// ```
pub fn parse_expression(source: &str) -> Result<Expr, CalcError> {
    parse_with(source, Limits::default())
}

/// Parses an expression with explicit recursion limits.
pub fn parse_with(source: &str, limits: Limits) -> Result<Expr, CalcError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    Ok(parse(&mut iter, limits.max_nesting, limits.max_depth)?)
}

/// Evaluates an arithmetic expression with the default limits.
///
/// Supports integer and decimal literals (with optional exponent), the
/// operators `+ - * / // % **`, unary signs and parentheses.
///
/// # Errors
/// The returned error's [`kind`](CalcError::kind) is
/// `ErrorKind::DivisionByZero` when the right operand of `/`, `//` or `%` is
/// zero, and `ErrorKind::InvalidExpression` for anything else.
///
/// # Examples
/// ```
/// use safecalc::{evaluate_expression, interpreter::value::core::Number};
///
/// assert_eq!(evaluate_expression("2+2").unwrap(), Number::Integer(4));
/// assert_eq!(evaluate_expression("-7//2").unwrap(), Number::Integer(-4));
/// assert_eq!(evaluate_expression("2**-1").unwrap(), Number::Real(0.5));
///
/// assert!(evaluate_expression("5 % 0").unwrap_err().is_division_by_zero());
/// assert!(evaluate_expression("import os").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<Number, CalcError> {
    evaluate_with(source, Limits::default())
}

/// Evaluates an arithmetic expression with explicit recursion limits.
pub fn evaluate_with(source: &str, limits: Limits) -> Result<Number, CalcError> {
    let expr = parse_with(source, limits)?;
    let value = Evaluator::new(limits).eval(&expr)?;
    debug!("evaluated {source:?} as {expr} = {value}");
    Ok(value)
}

/// Applies one operator to two operands, exactly as the evaluator would for
/// `left op right`.
///
/// Used by front-ends that collect operands and an operator separately.
///
/// # Examples
/// ```
/// use safecalc::{apply_operator, ast::BinaryOperator, interpreter::value::core::Number};
///
/// let v = apply_operator(BinaryOperator::Mod, Number::Integer(7), Number::Integer(-2));
/// assert_eq!(v.unwrap(), Number::Integer(-1));
///
/// let err = apply_operator(BinaryOperator::Div, Number::Real(1.5), Number::Integer(0));
/// assert!(err.unwrap_err().is_division_by_zero());
/// ```
pub fn apply_operator(op: BinaryOperator, left: Number, right: Number) -> Result<Number, CalcError> {
    Ok(Evaluator::eval_binary(op, left, right, 0)?)
}
