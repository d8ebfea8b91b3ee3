use std::fmt;

use crate::{ast::LiteralValue, util::num::i64_to_f64};

/// Represents a number produced by evaluation.
///
/// Integer arithmetic stays in [`Number::Integer`] while results fit in an
/// `i64`; true division, real operands and overflowing integer results yield
/// [`Number::Real`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An exact 64-bit integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<LiteralValue> for Number {
    fn from(v: LiteralValue) -> Self {
        match v {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r.0),
        }
    }
}

impl Number {
    /// Converts the number to an `f64`.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::value::core::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_f64(), 10.0);
    /// assert_eq!(Number::Real(0.5).as_f64(), 0.5);
    /// ```
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for `0`, `0.0` and `-0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Negates the number. `-i64::MIN` is promoted to a real.
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Integer(n) => n.checked_neg()
                                 .map_or_else(|| Self::Real(-i64_to_f64(n)), Self::Integer),
            Self::Real(r) => Self::Real(-r),
        }
    }
}

/// Integers print as written; reals always show a fractional part or an
/// exponent (`4.0`, `0.5`, `1e20`), so the two stay distinguishable.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
