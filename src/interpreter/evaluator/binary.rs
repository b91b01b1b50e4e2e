use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, utils::checked_pow},
    operator::Operator,
};

/// Evaluates an infix operation on two already evaluated operands.
///
/// All arithmetic is checked. Division truncates towards zero.
///
/// # Errors
/// - `DivisionByZero` when dividing by `0`.
/// - `NegativeExponent` for `^` with a negative right operand.
/// - `Overflow` when the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use pratt_calc::{error::EvalError, interpreter::evaluator::binary::eval_binary,
///                  operator::Operator};
///
/// assert_eq!(eval_binary(Operator::Div, -7, 2), Ok(-3));
/// assert_eq!(eval_binary(Operator::Div, 1, 0), Err(EvalError::DivisionByZero));
/// ```
pub fn eval_binary(op: Operator, left: i64, right: i64) -> EvalResult<i64> {
    let overflow = EvalError::Overflow { op };

    match op {
        Operator::Add => left.checked_add(right).ok_or(overflow),
        Operator::Sub => left.checked_sub(right).ok_or(overflow),
        Operator::Mul => left.checked_mul(right).ok_or(overflow),
        Operator::Div => {
            if right == 0 {
                return Err(EvalError::DivisionByZero);
            }
            // With a non-zero divisor only i64::MIN / -1 overflows.
            left.checked_div(right).ok_or(overflow)
        },
        Operator::Exp => checked_pow(left, right),
        Operator::Fact => Err(EvalError::Internal { details: format!("'{op}' cannot be evaluated in infix position") }),
    }
}
