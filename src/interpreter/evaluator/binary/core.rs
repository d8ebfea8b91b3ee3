use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Number,
    },
    util::num::{floor_div_f64, floor_div_i64, floor_mod_f64, floor_mod_i64},
};

impl Evaluator {
    /// Evaluates a binary operation between two numbers.
    ///
    /// `/`, `//` and `%` first check the right operand and fail with
    /// `DivisionByZero` if it is zero. `+ - * // %` stay integer when both
    /// operands are integers and the result fits; `/` always produces a real;
    /// `**` is handled by [`Evaluator::eval_pow`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source offset of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use safecalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Number},
    /// };
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::FloorDiv,
    ///                                     Number::Integer(-7),
    ///                                     Number::Integer(2),
    ///                                     0);
    /// assert_eq!(result.unwrap(), Number::Integer(-4));
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Div,
    ///                                     Number::Integer(7),
    ///                                     Number::Integer(2),
    ///                                     0);
    /// assert_eq!(result.unwrap(), Number::Real(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Number,
                       right: Number,
                       position: usize)
                       -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

        if op.requires_nonzero_divisor() && right.is_zero() {
            return Err(RuntimeError::DivisionByZero { position });
        }

        match op {
            Add => Ok(Self::integer_or_real(left, right, i64::checked_add, |a, b| a + b)),
            Sub => Ok(Self::integer_or_real(left, right, i64::checked_sub, |a, b| a - b)),
            Mul => Ok(Self::integer_or_real(left, right, i64::checked_mul, |a, b| a * b)),
            Div => Ok(Number::Real(left.as_f64() / right.as_f64())),
            FloorDiv => Ok(Self::integer_or_real(left, right, floor_div_i64, floor_div_f64)),
            Mod => Ok(Self::integer_or_real(left, right, floor_mod_i64, floor_mod_f64)),
            Pow => Self::eval_pow(left, right, position),
        }
    }
}
