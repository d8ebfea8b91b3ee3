use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::Evaluator, value::core::Number},
};

impl Evaluator {
    /// Evaluates a unary sign on a number.
    ///
    /// - `Plus` returns the operand unchanged.
    /// - `Negate` flips the sign; `-i64::MIN` is promoted to a real.
    ///
    /// # Example
    /// ```
    /// use safecalc::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Number},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, Number::Integer(5));
    /// assert_eq!(v, Number::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Plus, Number::Real(1.5));
    /// assert_eq!(v, Number::Real(1.5));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: Number) -> Number {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => value.negate(),
        }
    }
}
