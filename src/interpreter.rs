/// The evaluator module computes the value of a token sequence.
///
/// Evaluation is a recursive descent over the tokens with immediate
/// arithmetic; no syntax tree is built. Precedence follows from the nesting of
/// the grammar rules: additive calls multiplicative calls primary.
///
/// # Responsibilities
/// - Drives a [`Cursor`](evaluator::cursor::Cursor) over the tokens.
/// - Performs checked integer arithmetic.
/// - Reports grammar errors, division by zero and overflow with positions.
pub mod evaluator;
/// The lexer module tokenizes source text for evaluation.
///
/// The lexer reads the raw text and produces a sequence of tokens, each an
/// operator, a parenthesis or a number, followed by an end marker.
///
/// # Responsibilities
/// - Converts the input into tokens with their text and character position.
/// - Skips spaces.
/// - Reports unknown symbols.
pub mod lexer;
