use crate::{
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    operator::Operator,
};

/// The largest `n` for which `n!` fits in an `i64`.
pub const MAX_FACTORIAL_ARG: i64 = max_factorial_arg();

const fn max_factorial_arg() -> i64 {
    let mut n: i64 = 1;
    let mut acc: i64 = 1;
    loop {
        match acc.checked_mul(n + 1) {
            Some(next) => {
                acc = next;
                n += 1;
            },
            None => return n,
        }
    }
}

/// Computes `n!`.
///
/// # Errors
/// - `NegativeFactorial` if `n < 0`.
/// - `FactorialOverflow` if `n` exceeds [`MAX_FACTORIAL_ARG`].
///
/// # Example
/// ```
/// use pratt_calc::interpreter::evaluator::utils::factorial;
///
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: i64) -> EvalResult<i64> {
    if n < 0 {
        return Err(EvalError::NegativeFactorial { value: n });
    }
    if n > MAX_FACTORIAL_ARG {
        return Err(EvalError::FactorialOverflow { value: n,
                                                  max:   MAX_FACTORIAL_ARG, });
    }

    Ok((2..=n).product())
}

/// Raises `base` to a non-negative integer power by repeated squaring.
///
/// The exponent is consumed one bit at a time: the running square `base^(2^i)`
/// is multiplied into the result for every set bit `i`. The square is only
/// advanced while higher bits remain, so no multiplication happens that the
/// result does not need. Any zero power, `0^0` included, is `1`.
///
/// # Errors
/// - `NegativeExponent` if `exponent < 0`.
/// - `Overflow` if the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::evaluator::utils::checked_pow;
///
/// assert_eq!(checked_pow(3, 4), Ok(81));
/// assert_eq!(checked_pow(-2, 63), Ok(i64::MIN));
/// assert!(checked_pow(2, 63).is_err());
/// ```
pub fn checked_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    let Ok(mut remaining) = u64::try_from(exponent) else {
        return Err(EvalError::NegativeExponent { exponent });
    };

    let mut result: i64 = 1;
    let mut square = base;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(square)
                           .ok_or(EvalError::Overflow { op: Operator::Exp })?;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = square.checked_mul(square)
                           .ok_or(EvalError::Overflow { op: Operator::Exp })?;
        }
    }

    Ok(result)
}
