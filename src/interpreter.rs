/// The evaluator module computes the integer value of a tree.
///
/// The evaluator walks the AST bottom-up and applies each operator with
/// checked 64-bit arithmetic.
///
/// # Responsibilities
/// - Evaluates literals, prefix, postfix and infix nodes.
/// - Implements exponentiation by repeated squaring and bounded factorials.
/// - Reports errors such as division by zero, negative exponents or overflow.
pub mod evaluator;
/// The lexer module tokenizes source bytes for further parsing.
///
/// The lexer reads raw bytes and produces integer literals, operators and
/// parentheses, each paired with its byte offset. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Skips whitespace between tokens.
/// - Reads integer literals with `_` separators.
/// - Reports the first byte that does not start a token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser resolves precedence, associativity and fixity purely from the
/// binding powers in the operator table.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] trees.
/// - Reports misplaced tokens and unbalanced parentheses with byte offsets.
/// - Bounds recursion with a configurable nesting limit.
pub mod parser;
