//! Cipher direction shared by every cipher in the crate.

use std::fmt;
use std::str::FromStr;

use crate::error::CipherError;

/// Whether a cipher is applied to encrypt or to decrypt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Signed step applied by shift-based rules: +1 to encrypt, -1 to decrypt.
    pub const fn offset(self) -> i64 {
        match self {
            Direction::Encrypt => 1,
            Direction::Decrypt => -1,
        }
    }

    /// Builds a direction from a `--decrypt` style flag.
    pub const fn from_decrypt_flag(decrypt: bool) -> Self {
        if decrypt {
            Direction::Decrypt
        } else {
            Direction::Encrypt
        }
    }
}

impl FromStr for Direction {
    type Err = CipherError;

    /// Accepts the short prompt modes (`e`, `d`) and the full words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "e" | "encrypt" => Ok(Direction::Encrypt),
            "d" | "decrypt" => Ok(Direction::Decrypt),
            other => Err(CipherError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}
