use crate::interpreter::{evaluator::core::Evaluator, value::core::Number};

impl Evaluator {
    /// Applies an operation that has an integer and a real form.
    ///
    /// With two integer operands `integer_op` is tried first; a `None` from it
    /// (overflow) falls back to `real_op` on the promoted operands. Any real
    /// operand promotes both sides.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `integer_op`: Checked integer form of the operation.
    /// - `real_op`: Floating-point form of the operation.
    ///
    /// # Example
    /// ```
    /// use safecalc::interpreter::{evaluator::core::Evaluator, value::core::Number};
    ///
    /// let add = |a: f64, b: f64| a + b;
    ///
    /// let exact = Evaluator::integer_or_real(Number::Integer(2),
    ///                                        Number::Integer(3),
    ///                                        i64::checked_add,
    ///                                        add);
    /// assert_eq!(exact, Number::Integer(5));
    ///
    /// let promoted = Evaluator::integer_or_real(Number::Integer(2),
    ///                                           Number::Real(0.5),
    ///                                           i64::checked_add,
    ///                                           add);
    /// assert_eq!(promoted, Number::Real(2.5));
    /// ```
    pub fn integer_or_real(left: Number,
                           right: Number,
                           integer_op: impl Fn(i64, i64) -> Option<i64>,
                           real_op: impl Fn(f64, f64) -> f64)
                           -> Number {
        if let (Number::Integer(a), Number::Integer(b)) = (left, right)
           && let Some(result) = integer_op(a, b)
        {
            return Number::Integer(result);
        }

        Number::Real(real_op(left.as_f64(), right.as_f64()))
    }
}
