/// Shared parser types and helpers.
///
/// Defines the `ParseResult` alias every parsing function returns.
pub mod core;

/// Primary parsing.
///
/// Handles the smallest operands: number literals and parenthesized groups.
pub mod primary;

/// Infix parsing by precedence climbing.
///
/// Folds `+ - * /` with the usual precedence and left associativity, and
/// hands over to RPN folding when two operands appear side by side.
pub mod binary;

/// RPN folding.
///
/// Evaluates runs of postfix tokens with an explicit operand stack.
pub mod rpn;

/// Statement parsing.
///
/// Parses one expression and checks what follows it on the line.
pub mod statement;
