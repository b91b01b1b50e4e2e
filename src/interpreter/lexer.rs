use logos::Logos;
use tracing::debug;

use crate::{error::LexError, operator::Operator};

/// Represents a lexical token in the source input.
///
/// The lexer works on raw bytes; every token except integer literals is
/// exactly one byte long. Spaces, tabs, carriage returns and newlines between
/// tokens are skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(source = [u8])]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// Integer literal tokens, such as `42` or `1_000`. Underscores are
    /// separators and carry no value.
    #[regex(r"[0-9][0-9_]*", parse_integer)]
    Integer(i64),
    /// Any operator from the operator table.
    #[token("+", parse_operator)]
    #[token("-", parse_operator)]
    #[token("*", parse_operator)]
    #[token("/", parse_operator)]
    #[token("^", parse_operator)]
    #[token("!", parse_operator)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "Int: {value}"),
            Self::Operator(op) => write!(f, "Op: {op}"),
            Self::LParen => write!(f, "LParen"),
            Self::RParen => write!(f, "RParen"),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The value of the literal, ignoring underscores.
/// - `None`: If the value does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice()
       .iter()
       .filter(|&&byte| byte != b'_')
       .try_fold(0_i64, |acc, &digit| acc.checked_mul(10)?.checked_add(i64::from(digit - b'0')))
}

/// Looks the matched symbol up in the operator table.
fn parse_operator(lex: &logos::Lexer<Token>) -> Option<Operator> {
    lex.slice().first().copied().and_then(Operator::from_symbol)
}

/// Converts raw bytes into tokens, each paired with its starting byte offset.
///
/// Tokenizing stops at the first byte that does not start a token.
///
/// # Errors
/// - [`LexError::UnrecognizedByte`] for a byte outside digits, whitespace,
///   operator symbols and parentheses.
/// - [`LexError::LiteralTooLarge`] for an integer literal above `i64::MAX`.
///
/// # Example
/// ```
/// use pratt_calc::{interpreter::lexer::{Token, tokenize}, operator::Operator};
///
/// let tokens = tokenize(b"12 + 3").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(12), 0), (Token::Operator(Operator::Add), 3), (Token::Integer(3), 5)]);
/// ```
pub fn tokenize(source: &[u8]) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, offset)),
            Err(()) => return Err(lex_error(lexer.slice(), offset)),
        }
    }

    debug!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

/// Classifies the slice the lexer failed on.
///
/// The literal regex only fails through its callback, so a slice starting with
/// a digit is always an overflowing literal.
fn lex_error(slice: &[u8], offset: usize) -> LexError {
    match slice {
        [first, ..] if first.is_ascii_digit() => {
            LexError::LiteralTooLarge { literal: String::from_utf8_lossy(slice).into_owned(),
                                        offset }
        },
        _ => LexError::UnrecognizedByte { byte: slice.first().copied().unwrap_or_default(),
                                          offset },
    }
}
