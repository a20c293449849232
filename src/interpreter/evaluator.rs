/// Entry point of evaluation and the shared result type.
///
/// Handles the empty-expression convention and checks that the whole token
/// sequence was consumed.
pub mod core;

/// Positional view over a token sequence.
///
/// Supports one-step advance and one-step undo, the only lookahead the
/// grammar needs.
pub mod cursor;

/// Binary operator levels.
///
/// Implements the additive (`+`, `-`) and multiplicative (`*`, `/`) rules,
/// both left-associative.
pub mod binary;

/// Primary expressions.
///
/// Number literals and parenthesized sub-expressions.
pub mod primary;
