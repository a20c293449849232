#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// Found a character that is neither an operator, a parenthesis, a digit
    /// nor a space.
    UnknownSymbol {
        /// The character encountered.
        symbol:   char,
        /// Zero-based character offset of the symbol in the source.
        position: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol { symbol, position } => {
                write!(f, "Error at position {position}: Unknown symbol {symbol:?}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
