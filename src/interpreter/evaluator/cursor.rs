use crate::interpreter::lexer::{Token, TokenKind};

/// Returned when reading from an empty sequence.
static END: Token = Token { kind:     TokenKind::End,
                            text:     String::new(),
                            position: 0, };

/// A read-only position marker over a token sequence.
///
/// The index always stays within `0..=tokens.len()`. Sequences produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize) end with
/// [`TokenKind::End`], which every grammar rule stops at, so the end is never
/// read past in practice.
///
/// # Example
/// ```
/// use calcr::interpreter::{evaluator::cursor::Cursor, lexer::{TokenKind, tokenize}};
///
/// let tokens = tokenize("1+2").unwrap();
/// let mut cursor = Cursor::new(&tokens);
///
/// assert_eq!(cursor.advance().kind, TokenKind::Number);
/// assert_eq!(cursor.advance().kind, TokenKind::Plus);
/// cursor.retreat();
/// assert_eq!(cursor.position(), 1);
/// assert_eq!(cursor.advance().kind, TokenKind::Plus);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    index:  usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Returns the token at the current index and moves past it.
    ///
    /// Once the sequence is exhausted the last token is returned again and
    /// the index stays at the length.
    pub fn advance(&mut self) -> &'a Token {
        let tokens: &'a [Token] = self.tokens;
        let token = tokens.get(self.index).or_else(|| tokens.last()).unwrap_or(&END);
        self.index = (self.index + 1).min(tokens.len());
        token
    }

    /// Undoes the last [`advance`](Self::advance).
    pub const fn retreat(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// The current token index into the sequence.
    ///
    /// This counts tokens, not characters. Errors report the character
    /// offset carried by the offending [`Token`] instead.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index
    }
}
