//! # classic-ciphers - Caesar, Vigenère and Playfair
//!
//! Three classical substitution ciphers with a command-line driver.
//! They are historical and trivially breakable: use them for teaching and
//! puzzles, never to protect data.
//!
//! ## Overview
//!
//! - **Caesar**: every letter shifted by a fixed amount
//! - **Vigenère**: a Caesar shift per letter, driven by a repeating keyword
//! - **Playfair**: digram substitution through a 5x5 key square
//!
//! The Playfair pipeline is exposed step by step so each stage can be
//! inspected:
//!
//! ```rust
//! use classic_ciphers::{build_key_table, prepare_digrams, transform, Direction};
//!
//! let table = build_key_table("MONARCHY").unwrap();
//! let digrams = prepare_digrams("balloon");
//! assert_eq!(digrams.to_string(), "BA LX LO ON");
//!
//! let cipher = transform(&table, &digrams, Direction::Encrypt).unwrap();
//! let plain = transform(&table, &cipher, Direction::Decrypt).unwrap();
//! assert_eq!(plain, digrams);
//! ```
//!
//! ## Modules
//!
//! - [`playfair`]: key square, digram preparation and substitution
//! - [`caesar`]: Caesar shift
//! - [`vigenere`]: Vigenère cipher
//! - [`text`]: transliteration and normalization
//! - [`config`]: persisted settings (TOML)

pub mod caesar;
pub mod config;
pub mod direction;
pub mod error;
pub mod playfair;
pub mod text;
pub mod vigenere;

// Re-export commonly used types at the crate root
pub use caesar::caesar;
pub use config::{CipherConfig, ConfigError, PlayfairSettings};
pub use direction::Direction;
pub use error::CipherError;
pub use playfair::{
    build_key_table, playfair, playfair_with_config, prepare_digrams,
    prepare_digrams_with_config, strip_fillers, transform, Alphabet, Digram, DigramSequence,
    FillerPolicy, KeyTable, PlayfairConfig, Position,
};
pub use text::normalize;
pub use vigenere::vigenere;
