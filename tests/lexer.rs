use calcr::{
    LexError,
    interpreter::lexer::{Token, TokenKind, tokenize},
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn kinds_and_texts(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
}

#[test]
fn every_symbol() {
    let tokens = tokenize("()*/+-7").unwrap();
    assert_eq!(kinds(&tokens),
               [TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Multiply,
                TokenKind::Divide,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Number,
                TokenKind::End]);
}

#[test]
fn empty_input_is_only_end() {
    assert_eq!(tokenize("").unwrap(), [Token::end(0)]);
    assert_eq!(tokenize("   ").unwrap(), [Token::end(3)]);
}

#[test]
fn digit_runs_are_verbatim() {
    let tokens = tokenize("007 123456789012345678901234567890").unwrap();
    assert_eq!(kinds_and_texts(&tokens),
               [(TokenKind::Number, "007"),
                (TokenKind::Number, "123456789012345678901234567890"),
                (TokenKind::End, "")]);
}

#[test]
fn positions_are_character_offsets() {
    let tokens = tokenize(" 12 +(3)").unwrap();
    let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(positions, [1, 4, 5, 6, 7, 8]);
}

#[test]
fn tokenizing_twice_is_identical() {
    let source = "(12 + 3) * 45 / 6 - 7";
    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}

#[test]
fn spaces_do_not_change_tokens() {
    let dense = tokenize("1+2").unwrap();
    let spaced = tokenize(" 1 + 2 ").unwrap();
    assert_eq!(kinds_and_texts(&dense), kinds_and_texts(&spaced));
}

#[test]
fn end_is_last_and_unique() {
    let tokens = tokenize("1 + (2 * 3)").unwrap();
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::End));
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::End).count(), 1);
}

#[test]
fn unknown_symbol() {
    assert_eq!(tokenize("3+@"),
               Err(LexError::UnknownSymbol { symbol:   '@',
                                             position: 2, }));
    assert_eq!(tokenize("1.5"),
               Err(LexError::UnknownSymbol { symbol:   '.',
                                             position: 1, }));
    assert_eq!(tokenize("x"),
               Err(LexError::UnknownSymbol { symbol:   'x',
                                             position: 0, }));
}

#[test]
fn other_whitespace_is_rejected() {
    assert_eq!(tokenize("1\t+2"),
               Err(LexError::UnknownSymbol { symbol:   '\t',
                                             position: 1, }));
    assert_eq!(tokenize("1+2\n"),
               Err(LexError::UnknownSymbol { symbol:   '\n',
                                             position: 3, }));
}

#[test]
fn non_ascii_digits_are_rejected() {
    // Arabic-Indic digit three.
    assert_eq!(tokenize("1+\u{663}"),
               Err(LexError::UnknownSymbol { symbol:   '\u{663}',
                                             position: 2, }));
}

#[test]
fn multibyte_characters_count_once() {
    assert_eq!(tokenize("1 é"),
               Err(LexError::UnknownSymbol { symbol:   'é',
                                             position: 2, }));
    assert_eq!(tokenize("1+ü"),
               Err(LexError::UnknownSymbol { symbol:   'ü',
                                             position: 2, }));
}
