/// The lexer module tokenizes one line of source on demand.
///
/// The lexer reads the raw source text and hands out tokens one at a time as
/// the parser asks for them, each tagged with its byte offset.
///
/// # Responsibilities
/// - Converts the input characters into number, operator, parenthesis and
///   line terminator tokens.
/// - Supports one token of lookahead without buffering.
/// - Reifies unknown characters as tokens instead of failing.
pub mod lexer;
/// The operator module defines the arithmetic shared by both notations.
pub mod operator;
/// The parser module evaluates tokens while it parses them.
///
/// There is no syntax tree: every parsing function returns the value of what
/// it parsed. Infix input is handled by precedence climbing and switches to
/// RPN folding whenever two operands meet without an operator.
///
/// # Responsibilities
/// - Applies `* /` before `+ -`, left to right within a level.
/// - Detects and folds RPN runs, including runs chained into infix input.
/// - Reports the first error of a statement with its position.
pub mod parser;
