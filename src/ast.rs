use std::fmt;

use ordered_float::OrderedFloat;

/// Represents a numeric literal as written in the source expression.
///
/// Integers are kept exact; anything with a decimal point or an exponent is a
/// real. Reals are wrapped in [`OrderedFloat`] so that whole syntax trees can
/// be compared and hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal, such as `42`.
    Integer(i64),
    /// A 64-bit floating-point literal, such as `2.5`, `.5` or `1e10`.
    Real(OrderedFloat<f64>),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(OrderedFloat(value))
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{:?}", r.0),
        }
    }
}

/// A node of the syntax tree of an arithmetic expression.
///
/// The set of variants is closed: an expression is a literal, a signed
/// operand, or a binary operation. Nothing else can be represented, so
/// nothing else can ever reach the evaluator.
///
/// Every node records `position`, the byte offset in the source of the token
/// that produced it, for error reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Byte offset in the source.
        position: usize,
    },
    /// A unary sign applied to an operand (`-x`, `+x`).
    UnaryOp {
        /// The sign to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset in the source.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use safecalc::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:    7_i64.into(),
    ///                            position: 3, };
    ///
    /// assert_eq!(expr.position(), 3);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Returns the number of nodes on the longest path from `self` to a leaf.
    ///
    /// A literal has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Literal { .. } => 1,
            Self::UnaryOp { expr, .. } => expr.depth() + 1,
            Self::BinaryOp { left, right, .. } => left.depth().max(right.depth()) + 1,
        }
    }
}

/// Renders the tree fully parenthesised, which makes precedence and
/// associativity visible: `2 + 3 * 4` renders as `(2 + (3 * 4))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo with the sign of the divisor (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
}

impl BinaryOperator {
    /// All operators, in the order the terminal menu lists them.
    pub const ALL: [Self; 7] = [Self::Add,
                                Self::Sub,
                                Self::Mul,
                                Self::Div,
                                Self::FloorDiv,
                                Self::Mod,
                                Self::Pow];

    /// Returns the source symbol of the operator.
    ///
    /// # Example
    /// ```
    /// use safecalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::FloorDiv.symbol(), "//");
    /// assert_eq!(BinaryOperator::Pow.symbol(), "**");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
        }
    }

    /// Returns `true` for the operators that reject a zero right operand.
    #[must_use]
    pub const fn requires_nonzero_divisor(self) -> bool {
        matches!(self, Self::Div | Self::FloorDiv | Self::Mod)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents a unary sign.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => f.write_str("+"),
            Self::Negate => f.write_str("-"),
        }
    }
}
