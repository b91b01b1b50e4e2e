use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, Nesting, ParseResult, expect_end},
    },
    operator::{Fixity, Operator},
};

/// Parses the fully parenthesized prefix notation produced by rendering an
/// [`Expr`], such as `(+ 1 (* 2 3))`.
///
/// Grammar:
/// ```text
///     form := integer
///           | "(" operator form ")"
///           | "(" operator form form ")"
/// ```
/// A single operand builds a prefix node when the operator has a prefix
/// binding power and a postfix node otherwise. Two operands build an infix
/// node.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::{lexer::tokenize,
///                               parser::{core::parse, prefix_form::parse_prefix_form}};
///
/// let infix = parse(&tokenize(b"-2 + 3!").unwrap()).unwrap();
/// let rendered = infix.to_string();
/// assert_eq!(rendered, "(+ (- 2) (! 3))");
///
/// let prefix = parse_prefix_form(&tokenize(rendered.as_bytes()).unwrap()).unwrap();
/// assert_eq!(prefix, infix);
/// ```
pub fn parse_prefix_form(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    parse_prefix_form_with_max_depth(tokens, MAX_NESTING_DEPTH)
}

/// Parses prefix notation, failing with [`ParseError::NestingTooDeep`] once
/// nesting exceeds `max_depth`.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
pub fn parse_prefix_form_with_max_depth(tokens: &[(Token, usize)],
                                        max_depth: usize)
                                        -> ParseResult<Expr> {
    let mut tokens = tokens.iter().peekable();
    let expr = parse_form(&mut tokens, Nesting::new(max_depth))?;
    expect_end(&mut tokens)?;

    debug!(ast = %expr, "parsed prefix form");
    Ok(expr)
}

fn parse_form<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let &(token, offset) = tokens.next()
                                 .ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        Token::Integer(value) => Ok(Expr::literal(value)),
        Token::LParen => parse_application(tokens, offset, nesting.deeper(offset)?),
        Token::Operator(_) | Token::RParen => Err(ParseError::UnexpectedToken { token, offset }),
    }
}

/// Parses an operator and its operands, positioned after the `(`.
fn parse_application<'a, I>(tokens: &mut Peekable<I>,
                            open_offset: usize,
                            nesting: Nesting)
                            -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (op, op_offset) = match tokens.next() {
        Some(&(Token::Operator(op), offset)) => (op, offset),
        Some(&(token, offset)) => return Err(ParseError::UnexpectedToken { token, offset }),
        None => return Err(ParseError::UnbalancedParen { offset: open_offset }),
    };

    let first = parse_form(tokens, nesting)?;

    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return unary_form(op, first, op_offset);
    }
    if tokens.peek().is_none() {
        return Err(ParseError::UnbalancedParen { offset: open_offset });
    }

    let second = parse_form(tokens, nesting)?;

    match tokens.next() {
        Some((Token::RParen, _)) => {
            Expr::binary(op, first, second).ok_or(ParseError::InvalidFixity { op,
                                                                             fixity:
                                                                                 Fixity::Infix,
                                                                             offset: op_offset })
        },
        Some(&(token, offset)) => Err(ParseError::UnexpectedToken { token, offset }),
        None => Err(ParseError::UnbalancedParen { offset: open_offset }),
    }
}

/// Builds a one-operand node, preferring the prefix reading of the operator.
fn unary_form(op: Operator, operand: Expr, offset: usize) -> ParseResult<Expr> {
    if op.supports(Fixity::Prefix) {
        return Expr::prefix(op, operand).ok_or(ParseError::InvalidFixity { op,
                                                                          fixity: Fixity::Prefix,
                                                                          offset });
    }

    Expr::postfix(op, operand).ok_or(ParseError::InvalidFixity { op,
                                                                fixity: Fixity::Postfix,
                                                                offset })
}
