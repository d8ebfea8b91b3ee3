/// Parser entry points and nesting bookkeeping.
///
/// Contains the top-level `parse` function, which rejects empty input and
/// trailing tokens, and the `Nesting` counter shared by all levels.
pub mod core;
/// Binary operator parsing.
///
/// One function per precedence level: additive, multiplicative and power.
pub mod binary;
/// Unary signs and primary expressions.
///
/// Parses `+`/`-` prefixes, numeric literals and parenthesised groups.
pub mod unary;
