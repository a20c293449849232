//! # calcr
//!
//! calcr evaluates integer arithmetic expressions written as text.
//! It supports `+`, `-`, `*` and `/` with the usual precedence,
//! parentheses, multi-digit literals and spaces between tokens.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::borrow::Cow;

use crate::interpreter::{
    evaluator::{
        core::{EvalResult, Value, evaluate_tokens},
        cursor::Cursor,
    },
    lexer::{Token, TokenKind},
};
pub use crate::{
    error::{EvalError, LexError},
    interpreter::lexer::tokenize,
};

/// Provides error types for tokenization and evaluation.
///
/// Every failure mode is an ordinary value carrying the offending symbol or
/// token and its character position, so that a host can render it for the
/// user. Nothing in this crate panics on bad input.
///
/// # Responsibilities
/// - Defines `LexError` for the tokenizer and `EvalError` for the evaluator.
/// - Implements `Display` and `std::error::Error` for both.
pub mod error;
/// Turns text into an integer.
///
/// This module ties together the lexer and the evaluator. The lexer produces
/// a token sequence; the evaluator walks it with a cursor and computes the
/// result on the fly.
///
/// # Responsibilities
/// - Tokenizes source text.
/// - Evaluates tokens by recursive descent with one token of pushback.
pub mod interpreter;
/// Checked arithmetic helpers shared by the evaluator.
pub mod util;

/// Evaluates a token sequence produced by [`tokenize`].
///
/// Accepts an owned `Vec<Token>` or a borrowed slice. A sequence that does
/// not end with [`TokenKind::End`] gets one appended just past its last
/// token, so errors at the end of input point after the input.
///
/// # Errors
/// Returns the first [`EvalError`] encountered, scanning left to right.
///
/// # Examples
/// ```
/// use calcr::{EvalError, evaluate, tokenize};
///
/// assert_eq!(evaluate(tokenize("2 + 3 * 4").unwrap()), Ok(14));
/// assert_eq!(evaluate(tokenize("(2 + 3) * 4").unwrap()), Ok(20));
/// assert!(matches!(evaluate(tokenize("5 / 0").unwrap()),
///                  Err(EvalError::DivisionByZero { position: 2 })));
/// ```
pub fn evaluate(tokens: impl AsRef<[Token]>) -> EvalResult<Value> {
    let tokens = terminated(tokens.as_ref());
    let mut cursor = Cursor::new(&tokens);
    evaluate_tokens(&mut cursor)
}

/// Borrows `tokens` when they already end with the end marker.
fn terminated(tokens: &[Token]) -> Cow<'_, [Token]> {
    match tokens.last() {
        Some(last) if last.kind == TokenKind::End => Cow::Borrowed(tokens),
        last => {
            let mut owned = tokens.to_vec();
            owned.push(Token::end(last.map_or(0, Token::end_offset)));
            Cow::Owned(owned)
        },
    }
}

/// Tokenizes and evaluates `source` in one step.
///
/// # Errors
/// Returns a [`LexError`] or an [`EvalError`], whichever occurs first.
///
/// # Examples
/// ```
/// use calcr::calculate;
///
/// assert_eq!(calculate("10 - 2 - 3").unwrap(), 5);
///
/// // `@` is not a recognised symbol.
/// let err = calculate("3+@").unwrap_err();
/// assert_eq!(err.to_string(), "Error at position 2: Unknown symbol '@'.");
/// ```
pub fn calculate(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    Ok(evaluate(tokens)?)
}
