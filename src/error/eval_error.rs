use crate::operator::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Integer division by zero.
    DivisionByZero,
    /// An integer was raised to a negative power.
    NegativeExponent {
        /// The exponent found.
        exponent: i64,
    },
    /// Factorial of a negative integer.
    NegativeFactorial {
        /// The argument found.
        value: i64,
    },
    /// Factorial whose result does not fit in an `i64`.
    FactorialOverflow {
        /// The argument found.
        value: i64,
        /// The largest argument whose factorial fits.
        max:   i64,
    },
    /// An arithmetic operation overflowed.
    Overflow {
        /// The operator that overflowed.
        op: Operator,
    },
    /// The tree contains a node the parser can never produce.
    Internal {
        /// Details about the inconsistency.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::NegativeExponent { exponent } => write!(f,
                                                          "Error: Integers cannot be raised to the negative power {exponent}."),
            Self::NegativeFactorial { value } => {
                write!(f, "Error: Factorial not defined for negative integer {value}.")
            },
            Self::FactorialOverflow { value, max } => write!(f,
                                                             "Error: {value}! does not fit in 64 bits; the largest supported argument is {max}."),
            Self::Overflow { op } => write!(f,
                                            "Error: Integer overflow while computing '{op}'."),
            Self::Internal { details } => {
                write!(f, "Internal error: {details}. This is a bug.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
