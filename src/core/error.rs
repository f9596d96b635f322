//! Error type shared by the dictionary and the constraint model

use std::fmt;

/// Recoverable input errors raised by the solving core
///
/// A call that fails with one of these leaves the dictionary and the
/// constraint model exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A word, guess or feedback string has the wrong number of characters
    LengthMismatch { expected: usize, actual: usize },
    /// A feedback character is not one of the recognized symbols
    InvalidFeedbackSymbol { symbol: char, position: usize },
    /// A word or guess contains a character outside `a..=z`
    InvalidLetter { letter: char, position: usize },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} characters, got {actual}")
            }
            Self::InvalidFeedbackSymbol { symbol, position } => {
                write!(
                    f,
                    "invalid feedback symbol '{symbol}' at position {}",
                    position + 1
                )
            }
            Self::InvalidLetter { letter, position } => {
                write!(f, "invalid letter '{letter}' at position {}", position + 1)
            }
        }
    }
}

impl std::error::Error for SolverError {}
