use log::trace;

use crate::{ast::Expr, error::RuntimeError, interpreter::value::core::Number};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested parentheses, signs and powers while parsing.
pub const MAX_NESTING: usize = 200;
/// Default limit on the depth of the syntax tree while evaluating.
pub const MAX_DEPTH: usize = 1000;

/// Recursion limits for parsing and evaluation.
///
/// The parser and the evaluator are both recursive; the limits turn
/// pathological input into an ordinary error instead of a stack overflow.
/// `max_depth` is enforced while parsing, so long flat chains such as
/// `1+1+...+1`, whose trees grow one level per operator, are refused before
/// a deep tree exists. The evaluator checks it again for trees built by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum depth of parentheses, signs and powers accepted by the parser.
    pub max_nesting: usize,
    /// Maximum depth of the syntax tree accepted by the evaluator.
    pub max_depth:   usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_nesting: MAX_NESTING,
               max_depth:   MAX_DEPTH, }
    }
}

/// Reduces syntax trees to numbers.
///
/// The evaluator keeps nothing but its limits between calls, so one instance
/// can be shared freely and every call is independent of the ones before it.
///
/// ## Usage
/// ```
/// use safecalc::{
///     interpreter::{evaluator::core::Evaluator, value::core::Number},
///     parse_expression,
/// };
///
/// let expr = parse_expression("(1 + 2) * 3").unwrap();
/// let value = Evaluator::default().eval(&expr).unwrap();
///
/// assert_eq!(value, Number::Integer(9));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    limits: Limits,
}

impl Evaluator {
    /// Creates an evaluator with the given limits.
    #[must_use]
    pub const fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Evaluates an expression and returns the resulting number.
    ///
    /// Operands of a binary operation are evaluated left first, then right,
    /// and both are always evaluated.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero right operand of `/`, `//` or `%`.
    /// - `Domain` and `Overflow` from the power operator.
    /// - `NestingTooDeep` if the tree is deeper than `max_depth`.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Number> {
        self.eval_at(expr, 1)
    }

    fn eval_at(&self, expr: &Expr, depth: usize) -> EvalResult<Number> {
        if depth > self.limits.max_depth {
            return Err(RuntimeError::NestingTooDeep { limit:    self.limits.max_depth,
                                                      position: expr.position(), });
        }

        match expr {
            Expr::Literal { value, .. } => Ok(Number::from(*value)),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval_at(expr, depth + 1)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval_at(left, depth + 1)?;
                let right = self.eval_at(right, depth + 1)?;
                let result = Self::eval_binary(*op, left, right, *position)?;
                trace!("{left} {op} {right} = {result}");
                Ok(result)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::UnaryOperator;

    fn negations(depth: usize) -> Expr {
        (1..depth).fold(Expr::Literal { value:    1_i64.into(),
                                        position: 0, },
                        |expr, _| Expr::UnaryOp { op:       UnaryOperator::Negate,
                                                  expr:     Box::new(expr),
                                                  position: 0, })
    }

    #[test]
    fn hand_built_trees_are_bounded_too() {
        let limits = Limits { max_nesting: MAX_NESTING,
                              max_depth:   40, };
        let evaluator = Evaluator::new(limits);

        let expr = negations(40);
        assert_eq!(expr.depth(), 40);
        assert_eq!(evaluator.eval(&expr), Ok(Number::Integer(-1)));

        let err = evaluator.eval(&negations(41)).unwrap_err();
        assert_eq!(err, RuntimeError::NestingTooDeep { limit: 40, position: 0 });
    }
}
