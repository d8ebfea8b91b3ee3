/// Core evaluation logic.
///
/// Contains the `Evaluator`, its `Limits` and the recursive tree walk that
/// dispatches on the node variant.
pub mod core;

/// Unary sign evaluation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the seven arithmetic operators, the zero-divisor check and the
/// power operator's domain rules.
pub mod binary;
