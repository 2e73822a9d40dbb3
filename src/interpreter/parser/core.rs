use crate::error::ParseError;
use crate::interpreter::lexer::{Context, Token};

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds the error for a token the lexer could not classify.
pub(in crate::interpreter::parser) fn unexpected_character(context: &Context<'_>,
                                                           token: Token)
                                                           -> ParseError {
    ParseError::UnexpectedCharacter { found:  context.char_at(token.offset),
                                      offset: token.offset, }
}
