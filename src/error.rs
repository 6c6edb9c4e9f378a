//! Cipher error types.

use thiserror::Error;

/// Errors produced by the cipher library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The key contains no usable letter after normalization.
    #[error("Invalid key: key must contain at least one letter")]
    InvalidKey,

    /// A letter has no position in the key table.
    #[error("Letter '{0}' not found in key table")]
    LetterNotFound(char),

    /// The merged letter pair does not describe a 25-letter alphabet.
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// The filler letters cannot be used with the alphabet.
    #[error("Invalid filler policy: {0}")]
    InvalidFiller(String),

    /// A mode string could not be parsed as a direction.
    #[error("Invalid direction: '{0}' (expected 'e' or 'd')")]
    InvalidDirection(String),
}
