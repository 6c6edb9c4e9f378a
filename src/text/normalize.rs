//! Alphabet normalization.
//!
//! Raw input goes through transliteration first ("é" becomes "e",
//! "ß" becomes "ss"), so accented text keeps its letters instead of losing
//! them. Only letters are transliterated: symbols and emoji never turn into
//! words. Playfair normalization then keeps only letters of its 25-letter
//! alphabet.

use deunicode::deunicode_char;

use crate::playfair::alphabet::Alphabet;

/// Transliterates the letters of `text` to ASCII, preserving case.
///
/// Every other character (spaces, digits, punctuation, symbols, emoji) is
/// passed through unchanged, so callers decide whether to drop or replace it.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match deunicode_char(c) {
            Some(ascii) if c.is_alphabetic() && !c.is_ascii() => out.push_str(ascii),
            _ => out.push(c),
        }
    }
    out
}

/// Normalizes text for Playfair processing.
///
/// Transliterates, upper-cases, drops every character that is not an ASCII
/// letter (whitespace, digits, punctuation) and folds the merged letter of
/// `alphabet` into its partner. Idempotent.
pub fn normalize(text: &str, alphabet: &Alphabet) -> String {
    transliterate(text)
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| alphabet.fold(c.to_ascii_uppercase()))
        .collect()
}

/// Returns true if `text` is already in normalized form for `alphabet`.
pub fn is_normalized(text: &str, alphabet: &Alphabet) -> bool {
    text.chars().all(|c| alphabet.contains(c))
}
