#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while lexing or parsing a line.
///
/// A parse error means the line is structurally malformed. No partial tree is
/// ever produced alongside one, and the line is not evaluated.
pub enum ParseError {
    /// Found a character sequence or word that is not part of the grammar.
    UnexpectedToken {
        /// The offending text.
        token:  String,
        /// The 1-based column where the token starts.
        column: usize,
    },
    /// Found a `)` that closes nothing.
    UnexpectedClosingParen {
        /// The 1-based column of the parenthesis.
        column: usize,
    },
    /// Parentheses are nested deeper than the parser allows.
    TooDeeplyNested {
        /// The 1-based column of the first `(` past the limit.
        column: usize,
    },
    /// The line ended while a `(` was still open.
    ExpectedClosingParen {
        /// The 1-based column of the unmatched `(`.
        column: usize,
    },
}

impl ParseError {
    /// The 1-based column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedToken { column, .. }
            | Self::UnexpectedClosingParen { column }
            | Self::TooDeeplyNested { column }
            | Self::ExpectedClosingParen { column } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, column } => {
                write!(f, "Parse error at column {column}: Unexpected token: '{token}'.")
            },
            Self::UnexpectedClosingParen { column } => write!(f,
                                                              "Parse error at column {column}: Closing parenthesis ')' has no matching '('."),
            Self::TooDeeplyNested { column } => write!(f,
                                                       "Parse error at column {column}: Expressions are nested too deeply."),
            Self::ExpectedClosingParen { column } => write!(f,
                                                            "Parse error at column {column}: Expected closing parenthesis ')' for this '(' but none found."),
        }
    }
}

impl std::error::Error for ParseError {}
