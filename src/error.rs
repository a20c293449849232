/// Tokenization errors.
///
/// Raised while turning source text into tokens, before any evaluation
/// happens. Carries the offending symbol and its character position.
pub mod lex_error;
/// Evaluation errors.
///
/// Raised while walking the token sequence: grammar violations, unbalanced
/// parentheses, division by zero, out-of-range literals and overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
