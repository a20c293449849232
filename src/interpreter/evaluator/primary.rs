use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            binary::parse_additive,
            core::{EvalResult, Value},
            cursor::Cursor,
        },
        lexer::{Token, TokenKind},
    },
};

/// Evaluates a number literal or a parenthesized expression.
///
/// Grammar: `primary := NUMBER | "(" additive ")"`
///
/// # Errors
/// - `MalformedNumber` if a literal does not fit into [`Value`].
/// - `UnmatchedParen` if the token after a parenthesized expression is not
///   `)`; this includes reaching the end of input.
/// - `UnexpectedToken` for anything that cannot start an operand.
pub fn parse_primary(cursor: &mut Cursor) -> EvalResult<Value> {
    let token = cursor.advance();
    match token.kind {
        TokenKind::Number => parse_number(token),
        TokenKind::LeftParen => parse_grouping(cursor),
        _ => Err(EvalError::UnexpectedToken { token:    token.text.clone(),
                                              position: token.position, }),
    }
}

/// Converts the digit run of a number token.
///
/// The lexer guarantees digits only, so failure means the value is out of
/// range.
fn parse_number(token: &Token) -> EvalResult<Value> {
    token.text
         .parse()
         .map_err(|_| EvalError::MalformedNumber { text:     token.text.clone(),
                                                   position: token.position, })
}

/// Evaluates `additive ")"`, the opening parenthesis already consumed.
fn parse_grouping(cursor: &mut Cursor) -> EvalResult<Value> {
    let value = parse_additive(cursor)?;
    let closing = cursor.advance();
    match closing.kind {
        TokenKind::RightParen => Ok(value),
        _ => Err(EvalError::UnmatchedParen { token:    closing.text.clone(),
                                             position: closing.position, }),
    }
}
