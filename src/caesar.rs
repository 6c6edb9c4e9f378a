//! Caesar shift cipher.
//!
//! Every letter moves a fixed number of places along the alphabet. Output
//! is lowercase; spaces survive and any other character becomes `#`.

use crate::direction::Direction;
use crate::text::transliterate;

/// Size of the Latin alphabet.
const ALPHABET_SIZE: i64 = 26;

/// Replacement for characters that are neither letters nor spaces.
pub const SENTINEL: char = '#';

/// Shifts every letter of `text` by `shift` places.
///
/// Any shift is accepted; it is reduced modulo 26. Accented letters are
/// transliterated first.
///
/// ```
/// use classic_ciphers::{caesar, Direction};
///
/// assert_eq!(caesar("Attack at dawn!", 3, Direction::Encrypt), "dwwdfn dw gdzq#");
/// assert_eq!(caesar("dwwdfn dw gdzq", 3, Direction::Decrypt), "attack at dawn");
/// ```
pub fn caesar(text: &str, shift: i64, direction: Direction) -> String {
    let offset =
        (shift.rem_euclid(ALPHABET_SIZE) * direction.offset()).rem_euclid(ALPHABET_SIZE) as u8;

    transliterate(text)
        .chars()
        .map(|c| match c.to_ascii_lowercase() {
            letter @ 'a'..='z' => (b'a' + (letter as u8 - b'a' + offset) % 26) as char,
            ' ' => ' ',
            _ => SENTINEL,
        })
        .collect()
}
