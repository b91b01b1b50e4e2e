/// Binding-power parsing of infix expressions.
///
/// Contains the entry points, the operator loop that folds postfix and infix
/// operators into the left-hand side, and the nesting limit.
pub mod core;

/// Seeds of an expression.
///
/// Parses literals, parenthesized groups and prefix operations, the things an
/// expression can start with.
pub mod unary;

/// Reading rendered trees back.
///
/// Parses the fully parenthesized prefix notation that [`crate::ast::Expr`]
/// renders to.
pub mod prefix_form;
