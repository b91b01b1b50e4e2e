/// Tokenizer errors.
///
/// Unknown bytes and integer literals too large for 64 bits.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a tree:
/// misplaced tokens, unbalanced parentheses, operators used in a position they
/// do not support, and excessive nesting.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while computing a result, such
/// as division by zero, negative exponents, and integer overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error produced by the tokenize, parse, evaluate pipeline.
pub enum Error {
    /// Tokenizing failed.
    Lex(LexError),
    /// Parsing failed.
    Parse(ParseError),
    /// Evaluation failed.
    Eval(EvalError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

// Display already forwards to the wrapped error, so the chain continues from
// the wrapped error's own source.
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => std::error::Error::source(e),
            Self::Parse(e) => std::error::Error::source(e),
            Self::Eval(e) => std::error::Error::source(e),
        }
    }
}
