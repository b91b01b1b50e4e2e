/// The position an operator occupies relative to its operand(s).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Fixity {
    /// Before its operand, e.g. `-x`.
    Prefix,
    /// Between two operands, e.g. `x + y`.
    Infix,
    /// After its operand, e.g. `x!`.
    Postfix,
}

impl std::fmt::Display for Fixity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fixity = match self {
            Self::Prefix => "prefix",
            Self::Infix => "infix",
            Self::Postfix => "postfix",
        };
        write!(f, "{fixity}")
    }
}

/// Represents an operator.
///
/// Every operator carries a binding power for each fixity it is valid in.
/// A missing binding power is `None`; `0` is a valid power and is reserved for
/// the outermost parsing context.
///
/// Equal-strength infix pairs where the right power is one above the left
/// power (`(1, 2)`) are left-associative. A right power below the left power
/// would make the operator right-associative; the parser itself never looks at
/// associativity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`), or unary plus.
    Add,
    /// Subtraction (`-`), or negation.
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Exp,
    /// Factorial (`!`)
    Fact,
}

impl Operator {
    /// Every operator, in table order.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Exp, Self::Fact];

    /// Returns the single-byte source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> u8 {
        match self {
            Self::Add => b'+',
            Self::Sub => b'-',
            Self::Mul => b'*',
            Self::Div => b'/',
            Self::Exp => b'^',
            Self::Fact => b'!',
        }
    }

    /// Returns the human readable name of the operator.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::Exp => "Exp",
            Self::Fact => "Fact",
        }
    }

    /// Returns the `(left, right)` binding powers used when the operator sits
    /// between two operands.
    ///
    /// # Example
    /// ```
    /// use pratt_calc::operator::Operator;
    ///
    /// assert_eq!(Operator::Mul.infix_binding_power(), Some((3, 4)));
    /// assert_eq!(Operator::Fact.infix_binding_power(), None);
    /// ```
    #[must_use]
    pub const fn infix_binding_power(self) -> Option<(u8, u8)> {
        match self {
            Self::Add | Self::Sub => Some((1, 2)),
            Self::Mul | Self::Div => Some((3, 4)),
            Self::Exp => Some((7, 8)),
            Self::Fact => None,
        }
    }

    /// Returns the right binding power used when the operator precedes its
    /// operand.
    ///
    /// The power sits below `^`, so `-3^2` is `-(3^2)`.
    #[must_use]
    pub const fn prefix_binding_power(self) -> Option<u8> {
        match self {
            Self::Add | Self::Sub => Some(5),
            Self::Mul | Self::Div | Self::Exp | Self::Fact => None,
        }
    }

    /// Returns the left binding power used when the operator follows its
    /// operand.
    #[must_use]
    pub const fn postfix_binding_power(self) -> Option<u8> {
        match self {
            Self::Fact => Some(9),
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Exp => None,
        }
    }

    /// Returns whether the operator may appear in the given position.
    #[must_use]
    pub const fn supports(self, fixity: Fixity) -> bool {
        match fixity {
            Fixity::Prefix => self.prefix_binding_power().is_some(),
            Fixity::Infix => self.infix_binding_power().is_some(),
            Fixity::Postfix => self.postfix_binding_power().is_some(),
        }
    }

    /// Looks an operator up by its source symbol.
    ///
    /// # Example
    /// ```
    /// use pratt_calc::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol(b'^'), Some(Operator::Exp));
    /// assert_eq!(Operator::from_symbol(b'%'), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(self.symbol()))
    }
}
