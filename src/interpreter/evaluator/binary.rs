/// Operator dispatch and the zero-divisor check.
pub mod core;
/// Exponentiation.
pub mod power;
/// Integer-or-real arithmetic for `+ - * / // %`.
pub mod scalar;
