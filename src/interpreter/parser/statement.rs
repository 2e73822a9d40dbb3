use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Context, TokenKind},
        parser::{
            binary::parse_expression,
            core::{ParseResult, unexpected_character},
        },
    },
};

/// Parses and evaluates a single statement.
///
/// A statement is one expression at the lowest precedence, optionally
/// followed by a line terminator, which is consumed.
///
/// # Errors
/// - `UnmatchedParenthesis` if a `)` follows the complete expression.
/// - `UnexpectedTrailingToken` if anything else but a line terminator or the
///   end of input follows it, such as the `(4)` left behind by `2 3 + (4)`.
/// - Any error raised while parsing the expression.
pub fn parse_statement(context: &mut Context<'_>) -> ParseResult<f64> {
    let value = parse_expression(context, 0)?;

    let trailing = context.peek_token();
    match trailing.kind {
        TokenKind::EndOfInput => Ok(value),
        TokenKind::Newline => {
            context.next_token();
            Ok(value)
        },
        TokenKind::RParen => Err(ParseError::UnmatchedParenthesis { offset: trailing.offset }),
        TokenKind::Unexpected => Err(unexpected_character(context, trailing)),
        _ => Err(ParseError::UnexpectedTrailingToken { offset: trailing.offset }),
    }
}
