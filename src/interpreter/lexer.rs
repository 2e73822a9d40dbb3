use logos::Logos;

/// The kind of a lexical token.
///
/// Runs of the space character are skipped between tokens. Tabs are not
/// whitespace and lex as [`TokenKind::Unexpected`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r" +")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Line terminators: `\n`, `\r\n` or a lone `\r`.
    #[token("\n")]
    #[token("\r\n")]
    #[token("\r")]
    Newline,
    /// A NUL byte, or the end of the source string.
    #[token("\0")]
    EndOfInput,
    /// Any character that starts no other token.
    Unexpected,
}

/// A token together with the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What was scanned.
    pub kind:   TokenKind,
    /// Byte offset of the first character of the token.
    pub offset: usize,
}

impl Token {
    /// Returns the literal value of a number token, `None` for every other
    /// kind.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` for tokens that can begin an operand: a number or `(`.
    #[must_use]
    pub const fn starts_operand(&self) -> bool {
        matches!(self.kind, TokenKind::Number(_) | TokenKind::LParen)
    }
}

/// The scanning cursor over one line of source.
///
/// Tokens are produced on demand as the parser asks for them. The source is
/// borrowed for the lifetime of the context and the cursor only moves
/// forward, so token offsets never decrease.
#[derive(Clone)]
pub struct Context<'src> {
    lexer:   logos::Lexer<'src, TokenKind>,
    nesting: usize,
}

impl<'src> Context<'src> {
    /// Creates a context positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:   TokenKind::lexer(source),
               nesting: 0, }
    }

    /// Records entry into a parenthesized group and returns the new depth.
    pub fn enter_group(&mut self) -> usize {
        self.nesting += 1;
        self.nesting
    }

    /// Records leaving a parenthesized group.
    pub fn leave_group(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    /// Number of parenthesized groups currently open.
    #[must_use]
    pub const fn nesting(&self) -> usize {
        self.nesting
    }

    /// The source being scanned.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.lexer.source()
    }

    /// Byte offset of the cursor, never past the end of the source.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.lexer.span().end
    }

    /// Consumes and returns the next token.
    ///
    /// The lexer never fails: unknown characters come back as
    /// [`TokenKind::Unexpected`] and the end of the source as
    /// [`TokenKind::EndOfInput`], repeatedly if asked again.
    ///
    /// # Example
    /// ```
    /// use mixcalc::interpreter::lexer::{Context, TokenKind};
    ///
    /// let mut context = Context::new("  12 $");
    /// let number = context.next_token();
    /// assert_eq!(number.kind, TokenKind::Number(12.0));
    /// assert_eq!(number.offset, 2);
    /// assert_eq!(context.next_token().kind, TokenKind::Unexpected);
    /// assert_eq!(context.next_token().kind, TokenKind::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> Token {
        match self.lexer.next() {
            Some(Ok(kind)) => Token { kind,
                                      offset: self.lexer.span().start },
            Some(Err(())) => Token { kind:   TokenKind::Unexpected,
                                     offset: self.lexer.span().start, },
            None => Token { kind:   TokenKind::EndOfInput,
                            offset: self.source().len(), },
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&mut self) -> Token {
        let saved = self.lexer.clone();
        let token = self.next_token();
        self.lexer = saved;
        token
    }

    /// Returns the character at `offset`, used to describe unexpected input.
    #[must_use]
    pub fn char_at(&self, offset: usize) -> char {
        self.source()
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid float, which makes the lexer report
///   an error for it.
fn parse_number(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}
