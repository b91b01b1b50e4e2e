use crate::operator::{Fixity, Operator};

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each node exclusively owns its children. Nodes are built bottom-up by the
/// parser and only read afterwards, by [`std::fmt::Display`] and the
/// evaluator.
///
/// The variants are public so callers can match on them. Prefer the checked
/// constructors when building trees by hand: they refuse operators that have no
/// binding power for the requested fixity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value: i64,
    },
    /// A prefix or postfix operation.
    Unary {
        /// The operator to apply.
        op:      Operator,
        /// Whether the operator was written before or after the operand.
        fixity:  Fixity,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// An infix operation.
    Binary {
        /// The operator.
        op:    Operator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Creates a literal node.
    #[must_use]
    pub const fn literal(value: i64) -> Self {
        Self::Literal { value }
    }

    /// Creates a prefix node, or `None` if `op` cannot be used as a prefix
    /// operator.
    ///
    /// # Example
    /// ```
    /// use pratt_calc::{ast::Expr, operator::Operator};
    ///
    /// assert!(Expr::prefix(Operator::Sub, Expr::literal(3)).is_some());
    /// assert!(Expr::prefix(Operator::Mul, Expr::literal(3)).is_none());
    /// ```
    #[must_use]
    pub fn prefix(op: Operator, operand: Self) -> Option<Self> {
        Self::unary(op, Fixity::Prefix, operand)
    }

    /// Creates a postfix node, or `None` if `op` cannot be used as a postfix
    /// operator.
    #[must_use]
    pub fn postfix(op: Operator, operand: Self) -> Option<Self> {
        Self::unary(op, Fixity::Postfix, operand)
    }

    /// Creates an infix node, or `None` if `op` cannot be used as an infix
    /// operator.
    #[must_use]
    pub fn binary(op: Operator, left: Self, right: Self) -> Option<Self> {
        op.supports(Fixity::Infix).then(|| Self::Binary { op,
                                                          left: Box::new(left),
                                                          right: Box::new(right) })
    }

    fn unary(op: Operator, fixity: Fixity, operand: Self) -> Option<Self> {
        op.supports(fixity).then(|| Self::Unary { op,
                                                  fixity,
                                                  operand: Box::new(operand) })
    }
}

/// Renders the expression in fully parenthesized prefix notation, e.g.
/// `(+ 1 (* 2 3))`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Unary { op, operand, .. } => write!(f, "({op} {operand})"),
            Self::Binary { op, left, right } => write!(f, "({op} {left} {right})"),
        }
    }
}
