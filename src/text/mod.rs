//! Text processing shared by the ciphers.
//!
//! This module provides:
//! - Transliteration of accented input to plain Latin letters
//! - Playfair normalization (letters only, upper-case, merged pair)

pub mod normalize;

pub use normalize::{is_normalized, normalize, transliterate};
