use logos::Logos;

use crate::error::LexError;

/// The closed set of token classes produced by [`tokenize`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// A run of decimal digits, such as `42`.
    Number,
    /// End of input. Always the last token of a sequence.
    End,
}

/// A classified lexical unit together with the source text it came from.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// The class of the token.
    pub kind:     TokenKind,
    /// The exact source substring; empty for [`TokenKind::End`].
    pub text:     String,
    /// Zero-based character offset of the token in the source.
    pub position: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, text: String, position: usize) -> Self {
        Self { kind,
               text,
               position }
    }

    /// Creates the end-of-input marker at `position`.
    #[must_use]
    pub const fn end(position: usize) -> Self {
        Self::new(TokenKind::End, String::new(), position)
    }

    /// Character offset just past the token's text.
    #[must_use]
    pub fn end_offset(&self) -> usize {
        self.position + self.text.chars().count()
    }
}

/// Raw lexemes recognised by the scanner.
///
/// Only the space character is skipped; tabs and other whitespace are
/// rejected like any other unknown symbol.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r" +")]
enum Lexeme {
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Digits,
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Star => Self::Multiply,
            Lexeme::Slash => Self::Divide,
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::LParen => Self::LeftParen,
            Lexeme::RParen => Self::RightParen,
            Lexeme::Digits => Self::Number,
        }
    }
}

/// Splits `source` into tokens, terminated by a single [`TokenKind::End`].
///
/// Operators and parentheses become single-character tokens, digit runs
/// become one [`TokenKind::Number`] each with their text kept verbatim, and
/// spaces are skipped.
///
/// # Errors
/// Returns [`LexError::UnknownSymbol`] for the first character that is none
/// of the above, including tabs and newlines.
///
/// # Example
/// ```
/// use calcr::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("12 + 3").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::End]);
/// assert_eq!(tokens[0].text, "12");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    // Spans are byte ranges; positions are reported in characters.
    let mut byte_offset = 0;
    let mut char_offset = 0;

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        char_offset += source[byte_offset..span.start].chars().count();
        byte_offset = span.start;

        match lexeme {
            Ok(lexeme) => {
                tokens.push(Token::new(lexeme.into(), lexer.slice().to_string(), char_offset));
            },
            Err(()) => {
                let symbol = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError::UnknownSymbol { symbol,
                                                     position: char_offset });
            },
        }
    }

    char_offset += source[byte_offset..].chars().count();
    tokens.push(Token::end(char_offset));

    Ok(tokens)
}
