use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Number,
    },
};

impl Evaluator {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer base with a non-negative integer exponent uses checked integer
    /// arithmetic and stays exact while the result fits. Every other
    /// combination, and integer overflow, is computed in floating point.
    ///
    /// Results are always real numbers: a negative base with a fractional
    /// exponent is a domain error rather than a complex number.
    ///
    /// # Errors
    /// - `Domain` for `0 ** negative` and `negative ** fractional`.
    /// - `Overflow` when finite operands produce an infinite result.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::{evaluator::core::Evaluator, value::core::Number};
    ///
    /// let result = Evaluator::eval_pow(Number::Integer(2), Number::Integer(10), 0);
    /// assert_eq!(result.unwrap(), Number::Integer(1024));
    ///
    /// let result = Evaluator::eval_pow(Number::Integer(2), Number::Integer(-1), 0);
    /// assert_eq!(result.unwrap(), Number::Real(0.5));
    ///
    /// assert!(Evaluator::eval_pow(Number::Integer(-8), Number::Real(0.5), 0).is_err());
    /// ```
    pub fn eval_pow(base: Number, exponent: Number, position: usize) -> EvalResult<Number> {
        if let (Number::Integer(b), Number::Integer(e)) = (base, exponent)
           && let Ok(e) = u32::try_from(e)
           && let Some(result) = b.checked_pow(e)
        {
            return Ok(Number::Integer(result));
        }

        Self::real_pow(base.as_f64(), exponent.as_f64(), position).map(Number::Real)
    }

    fn real_pow(base: f64, exponent: f64, position: usize) -> EvalResult<f64> {
        if base == 0.0 && exponent < 0.0 {
            return Err(RuntimeError::Domain { details:
                                                  "zero cannot be raised to a negative power".to_string(),
                                              position });
        }

        if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
            return Err(RuntimeError::Domain { details: format!("negative number {base:?} cannot be raised to the fractional power {exponent:?}"),
                                              position });
        }

        let result = base.powf(exponent);
        if result.is_infinite() && base.is_finite() && exponent.is_finite() {
            return Err(RuntimeError::Overflow { position });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_integer_powers_fall_back_to_reals() {
        let result = Evaluator::eval_pow(Number::Integer(10), Number::Integer(20), 0).unwrap();
        assert_eq!(result, Number::Real(1e20));
        assert_eq!(Evaluator::eval_pow(Number::Integer(1), Number::Integer(i64::MAX), 0),
                   Ok(Number::Real(1.0)));
    }

    #[test]
    fn overflowing_real_power_is_an_error() {
        let err = Evaluator::eval_pow(Number::Integer(10), Number::Integer(400), 3).unwrap_err();
        assert_eq!(err, RuntimeError::Overflow { position: 3 });
    }

    #[test]
    fn zero_to_a_negative_power_is_a_domain_error() {
        let err = Evaluator::eval_pow(Number::Integer(0), Number::Integer(-1), 0).unwrap_err();
        assert!(matches!(err, RuntimeError::Domain { .. }));
    }

    #[test]
    fn negative_base_with_integral_real_exponent_is_fine() {
        assert_eq!(Evaluator::eval_pow(Number::Real(-2.0), Number::Real(3.0), 0),
                   Ok(Number::Real(-8.0)));
        assert_eq!(Evaluator::eval_pow(Number::Integer(-2), Number::Integer(-2), 0),
                   Ok(Number::Real(0.25)));
    }

    #[test]
    fn exact_integer_results_are_kept() {
        assert_eq!(Evaluator::eval_pow(Number::Integer(-3), Number::Integer(3), 0),
                   Ok(Number::Integer(-27)));
        assert_eq!(Evaluator::eval_pow(Number::Integer(0), Number::Integer(0), 0),
                   Ok(Number::Integer(1)));
    }
}
