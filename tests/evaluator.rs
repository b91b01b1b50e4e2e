use expect_test::expect;
use pratt_calc::{
    EvalError, Expr, evaluate,
    interpreter::evaluator::utils::{MAX_FACTORIAL_ARG, checked_pow, factorial},
    operator::{Fixity, Operator},
    parse, tokenize,
};

fn tree(src: &str) -> Expr {
    let tokens = tokenize(src.as_bytes()).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"));
    parse(&tokens).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
}

#[test]
fn evaluating_twice_gives_the_same_result() {
    let expr = tree("(2 + 3)! - 4 ^ 3 / -2");
    let first = evaluate(&expr);
    let second = evaluate(&expr);
    assert_eq!(first, Ok(152));
    assert_eq!(first, second);
}

#[test]
fn errors_are_repeatable_too() {
    let expr = tree("1 / (3 - 3)");
    assert_eq!(evaluate(&expr), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate(&expr), Err(EvalError::DivisionByZero));
}

#[test]
fn the_factorial_bound_is_the_largest_fitting_argument() {
    assert_eq!(MAX_FACTORIAL_ARG, 20);
    assert_eq!(factorial(MAX_FACTORIAL_ARG), Ok(2_432_902_008_176_640_000));
    assert_eq!(factorial(MAX_FACTORIAL_ARG + 1),
               Err(EvalError::FactorialOverflow { value: 21,
                                                  max:   20, }));
    assert_eq!(factorial(1), Ok(1));
    assert_eq!(factorial(-5), Err(EvalError::NegativeFactorial { value: -5 }));
}

#[test]
fn powers_by_repeated_squaring() {
    assert_eq!(checked_pow(2, 0), Ok(1));
    assert_eq!(checked_pow(2, 1), Ok(2));
    assert_eq!(checked_pow(3, 5), Ok(243));
    assert_eq!(checked_pow(-3, 3), Ok(-27));
    assert_eq!(checked_pow(-3, 4), Ok(81));
    assert_eq!(checked_pow(10, 18), Ok(1_000_000_000_000_000_000));
    assert_eq!(checked_pow(2, 62), Ok(1 << 62));
    assert_eq!(checked_pow(i64::MIN, 1), Ok(i64::MIN));
}

#[test]
fn trivial_bases_never_overflow() {
    assert_eq!(checked_pow(1, i64::MAX), Ok(1));
    assert_eq!(checked_pow(-1, i64::MAX), Ok(-1));
    assert_eq!(checked_pow(-1, i64::MAX - 1), Ok(1));
    assert_eq!(checked_pow(0, i64::MAX), Ok(0));
}

#[test]
fn power_errors() {
    assert_eq!(checked_pow(2, -3), Err(EvalError::NegativeExponent { exponent: -3 }));
    assert_eq!(checked_pow(10, 19), Err(EvalError::Overflow { op: Operator::Exp }));
    assert_eq!(checked_pow(i64::MIN, 2), Err(EvalError::Overflow { op: Operator::Exp }));
}

#[test]
fn inconsistent_hand_built_nodes_are_internal_errors() {
    let prefix_mul = Expr::Unary { op:      Operator::Mul,
                                   fixity:  Fixity::Prefix,
                                   operand: Box::new(Expr::literal(2)), };
    assert!(matches!(evaluate(&prefix_mul), Err(EvalError::Internal { .. })));

    let prefix_fact = Expr::Unary { op:      Operator::Fact,
                                    fixity:  Fixity::Prefix,
                                    operand: Box::new(Expr::literal(2)), };
    assert!(matches!(evaluate(&prefix_fact), Err(EvalError::Internal { .. })));

    let infix_fact = Expr::Binary { op:    Operator::Fact,
                                    left:  Box::new(Expr::literal(2)),
                                    right: Box::new(Expr::literal(3)), };
    assert!(matches!(evaluate(&infix_fact), Err(EvalError::Internal { .. })));
}

#[test]
fn checked_constructors_refuse_what_evaluation_cannot_handle() {
    assert_eq!(Expr::prefix(Operator::Mul, Expr::literal(2)), None);
    assert_eq!(Expr::postfix(Operator::Sub, Expr::literal(2)), None);
    assert_eq!(Expr::binary(Operator::Fact, Expr::literal(2), Expr::literal(3)), None);
}

#[test]
fn operands_are_evaluated_before_their_operator() {
    // The left operand fails first, even though the division would too.
    let expr = tree("(-1)! / 0");
    assert_eq!(evaluate(&expr), Err(EvalError::NegativeFactorial { value: -1 }));
}

#[test]
fn eval_error_messages() {
    expect!["Error: Division by zero."].assert_eq(&EvalError::DivisionByZero.to_string());
    expect!["Error: 21! does not fit in 64 bits; the largest supported argument is 20."]
        .assert_eq(&EvalError::FactorialOverflow { value: 21, max: 20 }.to_string());
    expect!["Error: Integer overflow while computing '^'."]
        .assert_eq(&EvalError::Overflow { op: Operator::Exp }.to_string());
}
