//! Playfair cipher.
//!
//! The pipeline is:
//! 1. Build a 5x5 key square from the keyword ([`table`])
//! 2. Normalize the text and split it into digrams ([`digram`])
//! 3. Substitute each digram using the square ([`transform`])
//!
//! The alphabet (which letter is merged) and the filler letters are
//! explicit values carried by [`PlayfairConfig`].

pub mod alphabet;
pub mod digram;
pub mod table;
pub mod transform;

pub use alphabet::{Alphabet, FillerPolicy, PlayfairConfig, ALPHABET_LEN};
pub use digram::{
    prepare_digrams, prepare_digrams_with_config, strip_fillers, Digram, DigramSequence,
};
pub use table::{build_key_table, KeyTable, Position, TABLE_SIZE};
pub use transform::{transform, transform_digram};

use crate::direction::Direction;
use crate::error::CipherError;

/// Encrypts or decrypts `text` with `key` using the standard variant.
///
/// The result is rendered as space-separated uppercase digrams. Fillers
/// added while preparing the text are kept.
///
/// ```
/// use classic_ciphers::{playfair, Direction};
///
/// let cipher = playfair("Hide the gold", "playfair example", Direction::Encrypt).unwrap();
/// assert_eq!(cipher, "BM OD ZB XD NA GE");
///
/// let plain = playfair(&cipher, "playfair example", Direction::Decrypt).unwrap();
/// assert_eq!(plain, "HI DE TH EG OL DX");
/// ```
pub fn playfair(text: &str, key: &str, direction: Direction) -> Result<String, CipherError> {
    playfair_with_config(text, key, direction, &PlayfairConfig::default())
}

/// Encrypts or decrypts `text` with `key` under a custom variant.
pub fn playfair_with_config(
    text: &str,
    key: &str,
    direction: Direction,
    config: &PlayfairConfig,
) -> Result<String, CipherError> {
    let table = KeyTable::new(key, config)?;
    let digrams = prepare_digrams_with_config(text, config);
    Ok(transform(&table, &digrams, direction)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playfair_golden_vector_z_padding() {
        let config = PlayfairConfig::new(Alphabet::standard(), FillerPolicy::new('X', 'Q', 'Z'))
            .unwrap();
        assert_eq!(
            prepare_digrams_with_config("INSTRUMENTS", &config).to_string(),
            "IN ST RU ME NT SZ"
        );
        let cipher = playfair_with_config("instruments", "MONARCHY", Direction::Encrypt, &config)
            .unwrap();
        assert_eq!(cipher.replace(' ', ""), "GATLMZCLRQTX");
    }

    #[test]
    fn test_playfair_invalid_key() {
        assert_eq!(
            playfair("text", "  ", Direction::Encrypt),
            Err(CipherError::InvalidKey)
        );
    }

    #[test]
    fn test_playfair_empty_text() {
        assert_eq!(playfair("", "KEY", Direction::Encrypt).unwrap(), "");
    }

    #[test]
    fn test_decrypt_restores_prepared_text() {
        let cipher = playfair("We are discovered, save yourself!", "monarchy", Direction::Encrypt)
            .unwrap();
        let plain = playfair(&cipher, "monarchy", Direction::Decrypt).unwrap();
        assert_eq!(plain, prepare_digrams("wearediscoveredsaveyourself").to_string());
    }
}
