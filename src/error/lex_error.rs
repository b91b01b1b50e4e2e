#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// A byte that does not start any token.
    UnrecognizedByte {
        /// The offending byte.
        byte:   u8,
        /// Byte offset of the offending byte.
        offset: usize,
    },
    /// An integer literal that does not fit in an `i64`.
    LiteralTooLarge {
        /// The literal as written, underscores included.
        literal: String,
        /// Byte offset where the literal starts.
        offset:  usize,
    },
}

impl LexError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnrecognizedByte { offset, .. } | Self::LiteralTooLarge { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedByte { byte, offset } => {
                if byte.is_ascii_graphic() {
                    write!(f,
                           "Error at byte {offset}: Unexpected character '{}' (0x{byte:02x}).",
                           char::from(*byte))
                } else {
                    write!(f, "Error at byte {offset}: Unexpected byte 0x{byte:02x}.")
                }
            },
            Self::LiteralTooLarge { literal, offset } => write!(f,
                                                                "Error at byte {offset}: Literal {literal} is too large."),
        }
    }
}

impl std::error::Error for LexError {}
