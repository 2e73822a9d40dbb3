//! # mixcalc
//!
//! mixcalc is a line-oriented calculator that accepts infix notation
//! (`2 + 3 * 4`) and reverse Polish notation (`2 3 4 * +`) mixed within the
//! same line, switching notation wherever two operands meet without an
//! operator in between.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Context, TokenKind},
        parser::statement::parse_statement,
    },
};

/// Provides the error type for evaluation and its caret-pointer report.
///
/// This module defines every error that can end the evaluation of a line and
/// carries enough position information to underline the offending
/// character.
///
/// # Responsibilities
/// - Defines one error variant per failure mode (lexical and syntactic).
/// - Provides message, hint and offset for each error.
/// - Renders uncolored diagnostics that callers can decorate.
pub mod error;
/// Lexes, parses and evaluates source text.
///
/// This module ties together the lexer, the operator table, and the fused
/// parser/evaluator that turn a line of text into a number.
pub mod interpreter;

/// Evaluates one line of input.
///
/// The line may end with a single line terminator; any other input left after
/// the statement is an error. Every call uses a fresh context, so evaluating
/// the same line twice gives the same result.
///
/// # Errors
/// Returns the first [`ParseError`] met on the line.
///
/// # Examples
/// ```
/// use mixcalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("2 3 4 * +").unwrap(), 14.0);
/// assert!(evaluate("(2 + 3").is_err());
/// ```
pub fn evaluate(line: &str) -> Result<f64, ParseError> {
    let mut context = Context::new(line);
    let result = parse_statement(&mut context).and_then(|value| {
        let rest = context.peek_token();
        if rest.kind == TokenKind::EndOfInput {
            Ok(value)
        } else {
            Err(ParseError::UnexpectedTrailingToken { offset: rest.offset })
        }
    });
    debug!(line, ?result, "evaluated line");
    result
}

/// The outcome of evaluating one line of a multi-line source.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<'src> {
    /// One-based line number within the source.
    pub line_number: usize,
    /// The line, without its terminator.
    pub line:        &'src str,
    /// The value of the line, or the error that ended it.
    pub result:      Result<f64, ParseError>,
}

/// Evaluates every non-blank line of `source` independently.
///
/// Lines are split on `\n` and `\r\n`. Lines containing nothing but spaces
/// are skipped; their numbers still count towards `line_number`. Error
/// offsets are relative to the line they were found on.
///
/// # Examples
/// ```
/// use mixcalc::evaluate_lines;
///
/// let results: Vec<_> = evaluate_lines("1 + 1\n\n2 3 *\n)").collect();
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[1].line_number, 3);
/// assert_eq!(results[1].result, Ok(6.0));
/// assert!(results[2].result.is_err());
/// ```
pub fn evaluate_lines(source: &str) -> impl Iterator<Item = Evaluation<'_>> {
    source.lines()
          .enumerate()
          .filter(|(_, line)| !is_blank(line))
          .map(|(index, line)| Evaluation { line_number: index + 1,
                                            line,
                                            result: evaluate(line) })
}

/// Returns `true` for lines holding nothing but spaces.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b == b' ')
}
