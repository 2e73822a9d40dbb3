use std::fmt;

use crate::error::ParseError;

/// A parse error paired with the line it was raised on.
///
/// The `Display` implementation produces an uncolored report:
///
/// ```text
/// error: Missing parenthesis
///   | (2 + 3
///   |       ^ expected ')' here
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    source: &'a str,
    error:  &'a ParseError,
}

impl<'a> Diagnostic<'a> {
    /// Creates a report for `error`, which must have been produced by
    /// evaluating `source`.
    #[must_use]
    pub const fn new(source: &'a str, error: &'a ParseError) -> Self {
        Self { source, error }
    }

    /// The underlying error.
    #[must_use]
    pub const fn error(&self) -> &'a ParseError {
        self.error
    }

    /// The source line without its line terminator.
    #[must_use]
    pub fn source_line(&self) -> &'a str {
        self.source.trim_end_matches(['\n', '\r'])
    }

    /// Column of the caret, counted in characters so multi-byte input lines
    /// up with what the terminal shows.
    ///
    /// # Example
    /// ```
    /// use mixcalc::error::{Diagnostic, ParseError};
    ///
    /// let error = ParseError::UnexpectedCharacter { found: '$', offset: 5 };
    /// assert_eq!(Diagnostic::new("é + $", &error).caret_column(), 4);
    /// ```
    #[must_use]
    pub fn caret_column(&self) -> usize {
        let offset = self.error.offset().min(self.source.len());
        self.source
            .get(..offset)
            .map_or(offset, |prefix| prefix.chars().count())
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.error.message())?;
        writeln!(f, "  | {}", self.source_line())?;
        write!(f,
               "  | {:width$}^ {}",
               "",
               self.error.hint(),
               width = self.caret_column())
    }
}
