use std::iter::Peekable;

use tracing::{debug, trace};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::unary::parse_seed},
    operator::Fixity,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deep expressions may nest.
///
/// Each parenthesis, prefix operator and infix right operand opens one level
/// of parser recursion. Independently, no parsed tree is taller than the
/// limit, so folded chains such as `1+1+1+...` or `3!!!...` are bounded too.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Tracks how deep the parser currently is.
///
/// Passed by value, so returning from a recursive call restores the caller's
/// depth without bookkeeping.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Nesting {
    depth:  usize,
    parens: usize,
    limit:  usize,
}

impl Nesting {
    pub(crate) const fn new(limit: usize) -> Self {
        Self { depth: 0,
               parens: 0,
               limit }
    }

    /// Returns the nesting one level deeper, or an error once the limit is
    /// reached.
    ///
    /// # Parameters
    /// - `offset`: Byte offset of the token opening the new level.
    pub(crate) const fn deeper(self, offset: usize) -> ParseResult<Self> {
        if self.depth >= self.limit {
            return Err(ParseError::NestingTooDeep { limit: self.limit,
                                                    offset });
        }
        Ok(Self { depth: self.depth + 1,
                  ..self })
    }

    /// Returns the nesting for the contents of a parenthesized group.
    pub(crate) const fn inside_paren(self) -> Self {
        Self { parens: self.parens + 1,
               ..self }
    }

    /// Returns the height of a node whose tallest child is `child_height`, or
    /// an error once the tree would grow taller than the limit.
    ///
    /// A literal has height 0.
    ///
    /// # Parameters
    /// - `offset`: Byte offset of the operator building the node.
    pub(crate) const fn node_height(self,
                                    child_height: usize,
                                    offset: usize)
                                    -> ParseResult<usize> {
        if child_height >= self.limit {
            return Err(ParseError::NestingTooDeep { limit: self.limit,
                                                    offset });
        }
        Ok(child_height + 1)
    }

    /// Whether a `)` at this point closes an open group.
    pub(crate) const fn in_parens(self) -> bool {
        self.parens > 0
    }
}

/// Parses a complete infix expression using the default nesting limit.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; no partial tree is returned.
///
/// # Example
/// ```
/// use pratt_calc::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize(b"1 + 2 * 3").unwrap();
/// let expr = parse(&tokens).unwrap();
/// assert_eq!(expr.to_string(), "(+ 1 (* 2 3))");
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    parse_with_max_depth(tokens, MAX_NESTING_DEPTH)
}

/// Parses a complete infix expression, failing with
/// [`ParseError::NestingTooDeep`] once nesting exceeds `max_depth`.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; no partial tree is returned.
pub fn parse_with_max_depth(tokens: &[(Token, usize)], max_depth: usize) -> ParseResult<Expr> {
    let mut tokens = tokens.iter().peekable();
    let (expr, _) = parse_expr(&mut tokens, 0, Nesting::new(max_depth))?;
    expect_end(&mut tokens)?;

    debug!(ast = %expr, "parsed expression");
    Ok(expr)
}

/// Parses an expression whose operators all bind at least as tightly as
/// `min_bp`.
///
/// A seed (literal, group or prefix operation) is parsed first. The loop then
/// keeps folding operators into the left-hand side for as long as their
/// binding power clears `min_bp`. The first operator that does not is left for
/// the caller's own loop, which is how precedence and associativity fall out of
/// the operator table without any per-operator logic here.
///
/// Returns the expression together with its height. Every fold adds a level
/// on top of the left-hand side, so long chains are bounded by the same limit
/// as explicit nesting.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `min_bp`: Minimum binding power an operator needs to be consumed.
/// - `nesting`: Current depth, checked before every recursive call.
pub(crate) fn parse_expr<'a, I>(tokens: &mut Peekable<I>,
                                min_bp: u8,
                                nesting: Nesting)
                                -> ParseResult<(Expr, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (mut lhs, mut height) = parse_seed(tokens, nesting)?;

    while let Some(&&(token, offset)) = tokens.peek() {
        let op = match token {
            Token::Operator(op) => op,
            Token::RParen if nesting.in_parens() => break,
            Token::RParen => return Err(ParseError::UnbalancedParen { offset }),
            Token::Integer(_) | Token::LParen => {
                return Err(ParseError::ExpectedOperator { token, offset });
            },
        };

        // An operator may be both postfix and infix; postfix wins when both
        // clear the threshold.
        if let Some(l_bp) = op.postfix_binding_power()
           && l_bp >= min_bp
        {
            trace!(%op, l_bp, min_bp, "postfix operator");
            tokens.next();
            height = nesting.node_height(height, offset)?;
            lhs = Expr::postfix(op, lhs).ok_or(ParseError::InvalidFixity { op,
                                                                          fixity: Fixity::Postfix,
                                                                          offset })?;
            continue;
        }

        if let Some((l_bp, r_bp)) = op.infix_binding_power()
           && l_bp >= min_bp
        {
            trace!(%op, l_bp, r_bp, min_bp, "infix operator");
            tokens.next();
            let (rhs, rhs_height) = parse_expr(tokens, r_bp, nesting.deeper(offset)?)?;
            height = nesting.node_height(height.max(rhs_height), offset)?;
            lhs = Expr::binary(op, lhs, rhs).ok_or(ParseError::InvalidFixity { op,
                                                                              fixity:
                                                                                  Fixity::Infix,
                                                                              offset })?;
            continue;
        }

        trace!(%op, min_bp, "operator binds too loosely, returning to caller");
        break;
    }

    Ok((lhs, height))
}

/// Fails if any token is left after a complete expression.
pub(in crate::interpreter::parser) fn expect_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some(&(token, offset)) => Err(ParseError::UnexpectedTrailingTokens { token, offset }),
        None => Ok(()),
    }
}
