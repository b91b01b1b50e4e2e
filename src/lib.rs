//! # pratt-calc
//!
//! pratt-calc is an integer expression evaluator written in Rust.
//! It tokenizes, parses, and evaluates arithmetic over signed 64-bit integers,
//! with `+ - * / ^` as infix operators, `+ -` as prefix operators, `!` as a
//! postfix factorial, and parentheses.
//!
//! Precedence, associativity and fixity are all decided by the binding powers
//! in [`operator::Operator`]; the parser has no per-operator rules.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents an expression as a
/// tree. The AST is built by the parser, rendered in prefix notation through
/// `Display`, and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines literal, unary and binary nodes with exclusively owned children.
/// - Provides constructors that reject operators in unsupported positions.
/// - Renders trees as `(+ 1 (* 2 3))`.
pub mod ast;
/// Provides unified error types for tokenizing, parsing, and evaluation.
///
/// This module defines every error the pipeline can return. Each phase has its
/// own enum with matchable variants and byte offsets where a position exists;
/// [`error::Error`] combines them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of computing a result.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides entry points for each phase.
pub mod interpreter;
/// The operator table.
///
/// Declares the closed set of operators with their symbols and the binding
/// power of each fixity they support.
pub mod operator;

pub use crate::{
    ast::Expr,
    error::{Error, EvalError, LexError, ParseError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::{Token, tokenize},
        parser::{
            core::{MAX_NESTING_DEPTH, parse, parse_with_max_depth},
            prefix_form::{parse_prefix_form, parse_prefix_form_with_max_depth},
        },
    },
};

/// Renders an expression in fully parenthesized prefix notation.
///
/// # Example
/// ```
/// use pratt_calc::{parse, render, tokenize};
///
/// let expr = parse(&tokenize(b"(1 + 2) * -3").unwrap()).unwrap();
/// assert_eq!(render(&expr), "(* (+ 1 2) (- 3))");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

/// Returns the value of an infix expression.
///
/// This function tokenizes, parses and evaluates `source`, stopping at the
/// first error.
///
/// # Errors
/// Returns an error if tokenizing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use pratt_calc::{Error, EvalError, get_result};
///
/// assert_eq!(get_result("2 + 3 * 4"), Ok(14));
///
/// // Division by zero is reported, not trapped.
/// assert_eq!(get_result("4 / 0"), Err(Error::Eval(EvalError::DivisionByZero)));
/// ```
pub fn get_result(source: &str) -> Result<i64, Error> {
    let tokens = tokenize(source.as_bytes())?;
    let expr = parse(&tokens)?;
    let value = evaluate(&expr)?;

    debug!(source, value, "computed result");
    Ok(value)
}
