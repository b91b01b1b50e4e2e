use pratt_calc::{
    Error, EvalError, LexError, ParseError, Token, get_result, operator::Operator,
};

fn assert_value(src: &str, expected: i64) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "Expression {src:?} evaluated incorrectly"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: impl Into<Error>) {
    match get_result(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e, expected.into(), "Expression {src:?} failed differently"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3);
    assert_value("7 * 9", 63);
    assert_value("8 - 5", 3);
    assert_value("10 / 2", 5);
    assert_value("2 ^ 10", 1024);
    assert_value("5!", 120);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2+3*4", 14);
    assert_value("2*3+4", 10);
    assert_value("2+12/4-1", 4);
}

#[test]
fn infix_operators_are_left_associative() {
    assert_value("2-3-4", -5);
    assert_value("100/10/5", 2);
    assert_value("2^3^2", 64);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", 20);
    assert_value("2*(3+4)", 14);
    assert_value("((((7))))", 7);
    assert_value("2^(3^2)", 512);
}

#[test]
fn exponent_binds_tighter_than_prefix_minus() {
    assert_value("-3^2", -9);
    assert_value("(-3)^2", 9);
    // The prefix minus takes `1^2` as its operand.
    assert_failure("2^-1^2", EvalError::NegativeExponent { exponent: -1 });
}

#[test]
fn prefix_operators() {
    assert_value("-5", -5);
    assert_value("+5", 5);
    assert_value("--5", 5);
    assert_value("2 - -3", 5);
    assert_value("2 * -3", -6);
    assert_value("-2 * -3", 6);
}

#[test]
fn factorial_is_postfix_and_binds_tightest() {
    assert_value("0!", 1);
    assert_value("3!!", 720);
    assert_value("-3!", -6);
    assert_value("2^3!", 64);
    assert_value("4!/2", 12);
    assert_value("(1+2)!", 6);
    assert_value("20!", 2_432_902_008_176_640_000);
}

#[test]
fn division_truncates_towards_zero() {
    assert_value("7/2", 3);
    assert_value("-7/2", -3);
    assert_value("7/-2", -3);
}

#[test]
fn literals_and_whitespace() {
    assert_value("1_000 * 2", 2000);
    assert_value(" 1 +\n2\t", 3);
    assert_value("\r\n42\r\n", 42);
    assert_value("9223372036854775807", i64::MAX);
    assert_value("-9223372036854775807 - 1", i64::MIN);
}

#[test]
fn zero_powers() {
    assert_value("0^0", 1);
    assert_value("5^0", 1);
    assert_value("0^5", 0);
}

#[test]
fn unbalanced_parentheses() {
    assert_failure("(2+3", ParseError::UnbalancedParen { offset: 0 });
    assert_failure("2+3)", ParseError::UnbalancedParen { offset: 3 });
    assert_failure("((1)", ParseError::UnbalancedParen { offset: 0 });
    assert_failure("(1))", ParseError::UnbalancedParen { offset: 3 });
}

#[test]
fn misplaced_tokens() {
    assert_failure("", ParseError::UnexpectedEndOfInput);
    assert_failure("2+", ParseError::UnexpectedEndOfInput);
    assert_failure("()", ParseError::UnexpectedToken { token:  Token::RParen,
                                                        offset: 1, });
    assert_failure("*3", ParseError::InvalidPrefixOperator { op:     Operator::Mul,
                                                              offset: 0, });
    assert_failure("!5", ParseError::InvalidPrefixOperator { op:     Operator::Fact,
                                                              offset: 0, });
    assert_failure("2 3", ParseError::ExpectedOperator { token:  Token::Integer(3),
                                                          offset: 2, });
    assert_failure("5 (1)", ParseError::ExpectedOperator { token:  Token::LParen,
                                                            offset: 2, });
}

#[test]
fn lexing_errors_stop_the_pipeline() {
    assert_failure("2 + x", LexError::UnrecognizedByte { byte:   b'x',
                                                          offset: 4, });
    assert_failure("9223372036854775808",
                   LexError::LiteralTooLarge { literal: "9223372036854775808".to_string(),
                                               offset:  0, });
}

#[test]
fn evaluation_errors() {
    assert_failure("4/0", EvalError::DivisionByZero);
    assert_failure("1/(2-2)", EvalError::DivisionByZero);
    assert_failure("2^-1", EvalError::NegativeExponent { exponent: -1 });
    assert_failure("21!", EvalError::FactorialOverflow { value: 21,
                                                         max:   20, });
    assert_failure("(-1)!", EvalError::NegativeFactorial { value: -1 });
}

#[test]
fn overflow_is_an_error() {
    assert_failure("9223372036854775807 + 1", EvalError::Overflow { op: Operator::Add });
    assert_failure("-9223372036854775807 - 2", EvalError::Overflow { op: Operator::Sub });
    assert_failure("4611686018427387904 * 2", EvalError::Overflow { op: Operator::Mul });
    assert_failure("(-9223372036854775807 - 1) / -1", EvalError::Overflow { op: Operator::Div });
    assert_failure("-(-9223372036854775807 - 1)", EvalError::Overflow { op: Operator::Sub });
    assert_failure("2^63", EvalError::Overflow { op: Operator::Exp });
}

#[test]
fn error_messages_name_the_offset() {
    let message = get_result("(1 + 2").unwrap_err().to_string();
    assert_eq!(message, "Error at byte 0: Unbalanced parenthesis.");

    let message = get_result("1 % 2").unwrap_err().to_string();
    assert_eq!(message, "Error at byte 2: Unexpected character '%' (0x25).");
}
