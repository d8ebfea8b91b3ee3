/// Runtime numbers.
///
/// Defines the `Number` type produced by the evaluator. Integers stay exact
/// while they fit in 64 bits; everything else is a double precision real.
pub mod core;
