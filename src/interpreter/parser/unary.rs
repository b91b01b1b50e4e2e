use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Nesting, ParseResult, parse_expr},
    },
    operator::Operator,
};

/// Parses the left-hand seed of an expression.
///
/// Grammar:
/// ```text
///     seed := integer
///           | "(" expression ")"
///           | prefix_operator expression
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` if no token is left.
/// - `UnexpectedToken` for a `)` where an operand should start.
/// - Propagates errors from the group or prefix parsers.
///
/// Returns the seed together with its height.
pub(crate) fn parse_seed<'a, I>(tokens: &mut Peekable<I>,
                                nesting: Nesting)
                                -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let &(token, offset) = tokens.next()
                                 .ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        Token::Integer(value) => Ok((Expr::literal(value), 0)),
        Token::LParen => parse_grouping(tokens, offset, nesting),
        Token::Operator(op) => parse_prefix(tokens, op, offset, nesting),
        Token::RParen => Err(ParseError::UnexpectedToken { token, offset }),
    }
}

/// Parses the contents of a parenthesized group, positioned after the `(`.
///
/// The group restarts at binding power 0, so any operator may appear inside.
/// Parentheses add no node, so the group is as tall as its contents.
///
/// # Errors
/// - `UnbalancedParen` pointing at the `(` if the group is never closed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         open_offset: usize,
                         nesting: Nesting)
                         -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let inner = parse_expr(tokens, 0, nesting.deeper(open_offset)?.inside_paren())?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        _ => Err(ParseError::UnbalancedParen { offset: open_offset }),
    }
}

/// Parses the operand of a prefix operator, positioned after the operator.
///
/// # Errors
/// - `InvalidPrefixOperator` if the operator has no prefix binding power.
fn parse_prefix<'a, I>(tokens: &mut Peekable<I>,
                       op: Operator,
                       offset: usize,
                       nesting: Nesting)
                       -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let r_bp = op.prefix_binding_power()
                 .ok_or(ParseError::InvalidPrefixOperator { op, offset })?;
    let (operand, operand_height) = parse_expr(tokens, r_bp, nesting.deeper(offset)?)?;
    let height = nesting.node_height(operand_height, offset)?;

    Expr::prefix(op, operand).map(|expr| (expr, height))
                             .ok_or(ParseError::InvalidPrefixOperator { op, offset })
}
