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

/// Deepest nesting of parenthesized groups accepted on one line.
pub const MAX_NESTING: usize = 256;

/// Parses a primary: a number literal or a parenthesized expression.
///
/// Grammar: `primary := number | "(" expression ")"`
///
/// Consumes exactly one token, plus the group's contents and closing `)`
/// when the token is `(`.
///
/// # Errors
/// - `MissingParenthesis` if a group is not closed, pointing at the token
///   found instead of `)`.
/// - `NestingTooDeep` if the group would be nested deeper than
///   [`MAX_NESTING`].
/// - `UnmatchedParenthesis` if the token is `)`.
/// - `UnexpectedCharacter` if the token could not be lexed.
/// - `ExpectedOperand` for any other token, including end of input.
pub fn parse_primary(context: &mut Context<'_>) -> ParseResult<f64> {
    let token = context.next_token();
    match token.kind {
        TokenKind::Number(value) => Ok(value),
        TokenKind::LParen => {
            if context.enter_group() > MAX_NESTING {
                return Err(ParseError::NestingTooDeep { offset: token.offset });
            }
            let value = parse_expression(context, 0)?;
            let closing = context.next_token();
            if closing.kind == TokenKind::RParen {
                context.leave_group();
                Ok(value)
            } else {
                Err(ParseError::MissingParenthesis { offset: closing.offset })
            }
        },
        TokenKind::RParen => Err(ParseError::UnmatchedParenthesis { offset: token.offset }),
        TokenKind::Unexpected => Err(unexpected_character(context, token)),
        _ => Err(ParseError::ExpectedOperand { offset: token.offset }),
    }
}
