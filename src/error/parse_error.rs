use crate::{
    interpreter::lexer::Token,
    operator::{Fixity, Operator},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// Offsets are byte offsets into the tokenized source.
pub enum ParseError {
    /// Found a token that cannot start an expression.
    UnexpectedToken {
        /// The token encountered.
        token:  Token,
        /// Byte offset of the token.
        offset: usize,
    },
    /// Reached the end of input where an expression was required.
    UnexpectedEndOfInput,
    /// An operator without a prefix binding power was used as a prefix.
    InvalidPrefixOperator {
        /// The operator encountered.
        op:     Operator,
        /// Byte offset of the operator.
        offset: usize,
    },
    /// An operand was followed by something other than an operator.
    ExpectedOperator {
        /// The token encountered.
        token:  Token,
        /// Byte offset of the token.
        offset: usize,
    },
    /// A `(` without its `)`, or a `)` without its `(`.
    UnbalancedParen {
        /// Byte offset of the unmatched parenthesis.
        offset: usize,
    },
    /// Expression nesting exceeded the configured depth.
    NestingTooDeep {
        /// The maximum depth allowed.
        limit:  usize,
        /// Byte offset of the token that crossed the limit.
        offset: usize,
    },
    /// An operator was used in a position it has no binding power for.
    InvalidFixity {
        /// The operator encountered.
        op:     Operator,
        /// The position it was used in.
        fixity: Fixity,
        /// Byte offset of the operator.
        offset: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  Token,
        /// Byte offset of the token.
        offset: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, offset } => {
                write!(f, "Error at byte {offset}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::InvalidPrefixOperator { op, offset } => {
                write!(f, "Error at byte {offset}: '{op}' is not a prefix operator.")
            },

            Self::ExpectedOperator { token, offset } => {
                write!(f, "Error at byte {offset}: Expected operator, found {token}.")
            },

            Self::UnbalancedParen { offset } => {
                write!(f, "Error at byte {offset}: Unbalanced parenthesis.")
            },

            Self::NestingTooDeep { limit, offset } => write!(f,
                                                             "Error at byte {offset}: Expression is nested deeper than {limit} levels."),

            Self::InvalidFixity { op, fixity, offset } => {
                write!(f, "Error at byte {offset}: '{op}' cannot be used in {fixity} position.")
            },

            Self::UnexpectedTrailingTokens { token, offset } => write!(f,
                                                                       "Error at byte {offset}: Extra tokens after expression, starting with {token}."),
        }
    }
}

impl std::error::Error for ParseError {}
