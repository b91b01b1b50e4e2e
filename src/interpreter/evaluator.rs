/// Core evaluation logic.
///
/// Contains the entry point and the recursive walk over the tree.
pub mod core;

/// Unary operator evaluation.
///
/// Handles the operations that take a single operand: unary plus, negation
/// and factorial.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the infix arithmetic operators.
pub mod binary;

/// Utility functions for the evaluator.
///
/// Exponentiation by squaring and factorials with their overflow bound.
pub mod utils;
