use tracing::debug;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree to a single integer.
///
/// Evaluation only reads the tree, so evaluating the same tree twice gives the
/// same result.
///
/// # Errors
/// Returns the first [`EvalError`] raised by any node, operands first.
///
/// # Example
/// ```
/// use pratt_calc::{ast::Expr, interpreter::evaluator::core::evaluate, operator::Operator};
///
/// let expr = Expr::binary(Operator::Mul, Expr::literal(6), Expr::literal(7)).unwrap();
/// assert_eq!(evaluate(&expr), Ok(42));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    let value = eval(expr)?;
    debug!(value, "evaluated expression");
    Ok(value)
}

fn eval(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Literal { value } => Ok(*value),
        Expr::Unary { op, fixity, operand } => eval_unary(*op, *fixity, eval(operand)?),
        Expr::Binary { op, left, right } => eval_binary(*op, eval(left)?, eval(right)?),
    }
}
