use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, utils::factorial},
    operator::{Fixity, Operator},
};

/// Evaluates a unary operation on an already evaluated operand.
///
/// Supported operators:
/// - prefix `+`: identity.
/// - prefix `-`: negation; `-i64::MIN` overflows.
/// - postfix `!`: factorial.
///
/// Any other operator and fixity pairing is reported as
/// [`EvalError::Internal`], since the parser never builds one.
///
/// # Example
/// ```
/// use pratt_calc::{interpreter::evaluator::unary::eval_unary,
///                  operator::{Fixity, Operator}};
///
/// assert_eq!(eval_unary(Operator::Sub, Fixity::Prefix, 5), Ok(-5));
/// assert_eq!(eval_unary(Operator::Fact, Fixity::Postfix, 4), Ok(24));
/// ```
pub fn eval_unary(op: Operator, fixity: Fixity, value: i64) -> EvalResult<i64> {
    match (op, fixity) {
        (Operator::Add, Fixity::Prefix) => Ok(value),
        (Operator::Sub, Fixity::Prefix) => value.checked_neg().ok_or(EvalError::Overflow { op }),
        (Operator::Fact, Fixity::Postfix) => factorial(value),
        _ => Err(EvalError::Internal { details: format!("'{op}' cannot be evaluated in {fixity} position") }),
    }
}
