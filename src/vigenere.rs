//! Vigenère cipher.
//!
//! A sequence of Caesar shifts driven by a repeating keyword. Spaces stay
//! where they were and do not consume key letters; other non-letters are
//! dropped.

use crate::direction::Direction;
use crate::error::CipherError;
use crate::text::transliterate;

/// Encrypts or decrypts `text` with the keyword `key`.
///
/// # Errors
/// [`CipherError::InvalidKey`] if the key has no letters.
///
/// ```
/// use classic_ciphers::{vigenere, Direction};
///
/// let cipher = vigenere("attack at dawn", "lemon", Direction::Encrypt).unwrap();
/// assert_eq!(cipher, "LXFOPV EF RNHR");
/// ```
pub fn vigenere(text: &str, key: &str, direction: Direction) -> Result<String, CipherError> {
    let shifts: Vec<i64> = transliterate(key)
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| (c.to_ascii_uppercase() as u8 - b'A') as i64 * direction.offset())
        .collect();

    if shifts.is_empty() {
        return Err(CipherError::InvalidKey);
    }

    let mut key_stream = shifts.iter().cycle();
    let mut out = String::with_capacity(text.len());

    for c in transliterate(text).chars() {
        if c.is_ascii_alphabetic() {
            // the cycle over a non-empty Vec never ends
            let shift = key_stream.next().copied().unwrap_or(0);
            let index = (c.to_ascii_uppercase() as u8 - b'A') as i64;
            out.push((b'A' + (index + shift).rem_euclid(26) as u8) as char);
        } else if c == ' ' {
            out.push(' ');
        }
    }

    Ok(out)
}
