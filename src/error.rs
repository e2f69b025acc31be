use thiserror::Error;

/// Errors raised while turning text into formulae.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The character is not a variable name
    #[error("'{0}' is not a valid identifier, expected a letter A-Z or a-z")]
    InvalidIdentifier(char),

    /// The character is not part of the formula syntax
    #[error("unexpected character '{ch}' at column {column}")]
    InvalidCharacter { ch: char, column: usize },

    /// A token was found where something else was expected
    #[error("unexpected {found} at column {column}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        column: usize,
    },

    /// The input stopped in the middle of a formula
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
