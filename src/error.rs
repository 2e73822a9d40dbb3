/// Parsing errors.
///
/// Defines every error that can end the evaluation of a statement: characters
/// the lexer does not recognise, unbalanced parentheses, missing operands and
/// RPN runs that leave operands behind. Each error carries the byte offset of
/// the offending token so callers can point at it.
pub mod parse_error;
/// Caret-pointer reports for parse errors.
///
/// Turns a [`ParseError`] and the line it came from into a plain-text report
/// that underlines the offending character. Coloring is left to the caller.
pub mod diagnostic;

pub use diagnostic::Diagnostic;
pub use parse_error::ParseError;
