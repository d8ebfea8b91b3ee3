//! Floor-based integer and real division helpers.
//!
//! `/` and `%` on Rust integers truncate toward zero. The calculator rounds
//! toward negative infinity instead, so that `-7 // 2 == -4` and the result of
//! `%` always carries the sign of the divisor. The helpers keep the identity
//! `(a // b) * b + a % b == a` for both integers and reals.

/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` lose precision; this is the promotion used whenever
/// an integer operand meets a real one or an integer result overflows.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Floor division of two integers.
///
/// Returns `None` when `b` is zero or the quotient overflows
/// (`i64::MIN // -1`).
///
/// # Example
/// ```
/// use safecalc::util::num::floor_div_i64;
///
/// assert_eq!(floor_div_i64(7, 2), Some(3));
/// assert_eq!(floor_div_i64(-7, 2), Some(-4));
/// assert_eq!(floor_div_i64(7, -2), Some(-4));
/// assert_eq!(floor_div_i64(1, 0), None);
/// ```
#[must_use]
pub const fn floor_div_i64(a: i64, b: i64) -> Option<i64> {
    let Some(quotient) = a.checked_div(b) else {
        return None;
    };
    let remainder = a % b;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Floor modulo of two integers; the result has the sign of `b`.
///
/// Returns `None` only when `b` is zero. The remainder always fits, including
/// `i64::MIN % -1 == 0`.
///
/// # Example
/// ```
/// use safecalc::util::num::floor_mod_i64;
///
/// assert_eq!(floor_mod_i64(7, -2), Some(-1));
/// assert_eq!(floor_mod_i64(-7, 2), Some(1));
/// assert_eq!(floor_mod_i64(6, 3), Some(0));
/// assert_eq!(floor_mod_i64(i64::MIN, -1), Some(0));
/// ```
#[must_use]
pub const fn floor_mod_i64(a: i64, b: i64) -> Option<i64> {
    if b == 0 {
        return None;
    }
    let remainder = a.wrapping_rem(b);
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        Some(remainder + b)
    } else {
        Some(remainder)
    }
}

/// Floor modulo of two reals; the result has the sign of `b`.
///
/// A zero result takes the sign of `b` as well, so `-0.0` is returned for a
/// negative divisor.
#[must_use]
pub fn floor_mod_f64(a: f64, b: f64) -> f64 {
    let remainder = a % b;
    if remainder == 0.0 {
        0.0_f64.copysign(b)
    } else if (b < 0.0) != (remainder < 0.0) {
        remainder + b
    } else {
        remainder
    }
}

/// Floor division of two reals.
///
/// The quotient is derived from the remainder rather than from `(a / b)
/// .floor()`, which can be off by one when `a / b` rounds up to an integer.
///
/// # Example
/// ```
/// use safecalc::util::num::floor_div_f64;
///
/// assert_eq!(floor_div_f64(7.5, 2.0), 3.0);
/// assert_eq!(floor_div_f64(-7.0, 2.0), -4.0);
/// ```
#[must_use]
pub fn floor_div_f64(a: f64, b: f64) -> f64 {
    let remainder = a % b;
    let mut quotient = (a - remainder) / b;
    if remainder != 0.0 && ((b < 0.0) != (remainder < 0.0)) {
        quotient -= 1.0;
    }

    if quotient == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let floor = quotient.floor();
    if quotient - floor > 0.5 { floor + 1.0 } else { floor }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_floor_division_rounds_toward_negative_infinity() {
        assert_eq!(floor_div_i64(-1, 3), Some(-1));
        assert_eq!(floor_div_i64(-6, 3), Some(-2));
        assert_eq!(floor_div_i64(-7, -2), Some(3));
        assert_eq!(floor_div_i64(i64::MIN, -1), None);
        assert_eq!(floor_div_i64(i64::MIN, 1), Some(i64::MIN));
    }

    #[test]
    fn integer_modulo_follows_divisor_sign() {
        assert_eq!(floor_mod_i64(-7, -2), Some(-1));
        assert_eq!(floor_mod_i64(7, 2), Some(1));
        assert_eq!(floor_mod_i64(-6, 4), Some(2));
        assert_eq!(floor_mod_i64(5, 0), None);
        assert_eq!(floor_mod_i64(i64::MIN, -1), Some(0));
        assert_eq!(floor_mod_i64(i64::MIN, i64::MAX), Some(i64::MAX - 1));
    }

    #[test]
    fn real_modulo_follows_divisor_sign() {
        assert_eq!(floor_mod_f64(7.0, -2.0), -1.0);
        assert_eq!(floor_mod_f64(-7.5, 2.0), 0.5);
        assert!(floor_mod_f64(4.0, -2.0).is_sign_negative());
        assert!(floor_mod_f64(-4.0, 2.0).is_sign_positive());
    }

    #[test]
    fn real_floor_division_matches_integer_floor_division() {
        for a in -20_i64..=20 {
            for b in [-7_i64, -3, -1, 1, 2, 5] {
                let expected = floor_div_i64(a, b).map(i64_to_f64);
                assert_eq!(Some(floor_div_f64(i64_to_f64(a), i64_to_f64(b))),
                           expected,
                           "{a} // {b}");
            }
        }
    }

    #[test]
    fn real_floor_division_keeps_identity_for_fractions() {
        let (a, b) = (5.25, -1.5);
        let q = floor_div_f64(a, b);
        let r = floor_mod_f64(a, b);
        assert_eq!(q, -4.0);
        assert!((q * b + r - a).abs() < 1e-12);
    }
}
