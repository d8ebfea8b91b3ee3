/// Numeric helpers.
///
/// This module provides the floor-based division and modulo routines used by
/// the evaluator for both integers and reals, together with the integer to
/// real promotion used when mixing the two.
pub mod num;
