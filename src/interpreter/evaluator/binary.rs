use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Value},
            cursor::Cursor,
            primary::parse_primary,
        },
        lexer::TokenKind,
    },
    util::num::{checked_add, checked_div, checked_mul, checked_sub},
};

/// Evaluates addition and subtraction.
///
/// Left-associative, so `10 - 2 - 3` is `5`. Stops in front of `)` or the
/// end marker, leaving it for the caller.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Errors
/// - `UnexpectedToken` for any other token after an operand.
/// - `Overflow` if a sum or difference does not fit.
pub fn parse_additive(cursor: &mut Cursor) -> EvalResult<Value> {
    let mut value = parse_multiplicative(cursor)?;
    loop {
        let token = cursor.advance();
        match token.kind {
            TokenKind::Plus => {
                let right = parse_multiplicative(cursor)?;
                value = checked_add(value, right, token.position)?;
            },
            TokenKind::Minus => {
                let right = parse_multiplicative(cursor)?;
                value = checked_sub(value, right, token.position)?;
            },
            TokenKind::RightParen | TokenKind::End => {
                cursor.retreat();
                return Ok(value);
            },
            _ => {
                return Err(EvalError::UnexpectedToken { token:    token.text.clone(),
                                                        position: token.position, });
            },
        }
    }
}

/// Evaluates multiplication and division.
///
/// Left-associative; division truncates toward zero. Stops in front of `)`,
/// `+`, `-` or the end marker.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Errors
/// - `DivisionByZero` if the right operand of `/` is `0`.
/// - `UnexpectedToken` for any other token after an operand.
/// - `Overflow` if a product or quotient does not fit.
pub fn parse_multiplicative(cursor: &mut Cursor) -> EvalResult<Value> {
    let mut value = parse_primary(cursor)?;
    loop {
        let token = cursor.advance();
        match token.kind {
            TokenKind::Multiply => {
                let right = parse_primary(cursor)?;
                value = checked_mul(value, right, token.position)?;
            },
            TokenKind::Divide => {
                let right = parse_primary(cursor)?;
                value = checked_div(value, right, token.position)?;
            },
            TokenKind::RightParen | TokenKind::Plus | TokenKind::Minus | TokenKind::End => {
                cursor.retreat();
                return Ok(value);
            },
            _ => {
                return Err(EvalError::UnexpectedToken { token:    token.text.clone(),
                                                        position: token.position, });
            },
        }
    }
}
