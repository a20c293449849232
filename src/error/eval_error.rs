#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a token sequence.
pub enum EvalError {
    /// A token appeared where the grammar allows none of its kind.
    UnexpectedToken {
        /// The source text of the token, empty for the end of input.
        token:    String,
        /// Zero-based character offset of the token.
        position: usize,
    },
    /// An opening `(` was not closed, or a `)` closed nothing.
    UnmatchedParen {
        /// The token found where the parenthesis should have matched.
        token:    String,
        /// Zero-based character offset of the token.
        position: usize,
    },
    /// The right operand of `/` evaluated to zero.
    DivisionByZero {
        /// Character offset of the `/` operator.
        position: usize,
    },
    /// A digit run does not fit into the integer type.
    MalformedNumber {
        /// The digits as written in the source.
        text:     String,
        /// Zero-based character offset of the literal.
        position: usize,
    },
    /// Arithmetic overflowed the integer type.
    Overflow {
        /// Character offset of the operator that overflowed.
        position: usize,
    },
}

/// Renders token text for messages; the end marker has no text of its own.
fn describe(token: &str) -> String {
    if token.is_empty() { "end of input".to_string() } else { format!("'{token}'") }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token {}.", describe(token))
            },
            Self::UnmatchedParen { token, position } => write!(f,
                                                               "Error at position {position}: Unmatched parenthesis, found {}.",
                                                               describe(token)),
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::MalformedNumber { text, position } => {
                write!(f, "Error at position {position}: Literal {text} is too large.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for EvalError {}
