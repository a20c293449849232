use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{binary::parse_additive, cursor::Cursor},
        lexer::TokenKind,
    },
};

/// The integer type all arithmetic is carried out in.
pub type Value = i64;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the first failure encountered.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a whole expression.
///
/// An expression consisting only of the end marker evaluates to `0`.
/// Otherwise the peeked token is pushed back and the additive rule is
/// applied. The additive rule stops in front of `)` as well as the end
/// marker, so a surplus `)` after a complete expression is left unread.
///
/// Grammar: `expression := END | additive`
///
/// # Errors
/// Propagates any error from the grammar rules.
///
/// # Example
/// ```
/// use calcr::interpreter::{
///     evaluator::{core::evaluate_tokens, cursor::Cursor},
///     lexer::tokenize,
/// };
///
/// let tokens = tokenize("").unwrap();
/// assert_eq!(evaluate_tokens(&mut Cursor::new(&tokens)), Ok(0));
/// ```
pub fn evaluate_tokens(cursor: &mut Cursor) -> EvalResult<Value> {
    if cursor.advance().kind == TokenKind::End {
        return Ok(0);
    }
    cursor.retreat();

    parse_additive(cursor)
}
