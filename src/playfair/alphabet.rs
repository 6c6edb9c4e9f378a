//! Playfair alphabet and filler policy.
//!
//! The key square has 25 cells, so one letter of the Latin alphabet is
//! folded into another (conventionally J into I). Filler letters break
//! repeated pairs and pad odd-length text. Both choices are plain values
//! here so that variants (Q merged into K, Z padding, ...) need no code
//! change.

use crate::error::CipherError;

/// Number of letters in a Playfair alphabet.
pub const ALPHABET_LEN: usize = 25;

/// The 25-letter alphabet of a Playfair key square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    merge_from: char,
    merge_into: char,
}

impl Alphabet {
    /// Creates an alphabet where `merge_from` is read as `merge_into`.
    ///
    /// Both letters must be distinct ASCII letters; lowercase input is
    /// accepted and upper-cased.
    pub fn new(merge_from: char, merge_into: char) -> Result<Self, CipherError> {
        let merge_from = merge_from.to_ascii_uppercase();
        let merge_into = merge_into.to_ascii_uppercase();

        if !merge_from.is_ascii_uppercase() || !merge_into.is_ascii_uppercase() {
            return Err(CipherError::InvalidAlphabet(format!(
                "merged pair must be letters, got '{}' -> '{}'",
                merge_from, merge_into
            )));
        }
        if merge_from == merge_into {
            return Err(CipherError::InvalidAlphabet(format!(
                "cannot merge '{}' into itself",
                merge_from
            )));
        }

        Ok(Self {
            merge_from,
            merge_into,
        })
    }

    /// The classic alphabet: J merged into I.
    pub const fn standard() -> Self {
        Self {
            merge_from: 'J',
            merge_into: 'I',
        }
    }

    /// The letter that is removed from the square.
    pub fn merge_from(&self) -> char {
        self.merge_from
    }

    /// The letter that stands in for [`merge_from`](Self::merge_from).
    pub fn merge_into(&self) -> char {
        self.merge_into
    }

    /// Maps an uppercase letter onto the alphabet (merged letter folded).
    pub fn fold(&self, letter: char) -> char {
        if letter == self.merge_from {
            self.merge_into
        } else {
            letter
        }
    }

    /// Returns true if `letter` is one of the 25 letters.
    pub fn contains(&self, letter: char) -> bool {
        letter.is_ascii_uppercase() && letter != self.merge_from
    }

    /// The 25 letters in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        ('A'..='Z').filter(move |&c| c != self.merge_from)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Filler letters used while preparing digrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillerPolicy {
    separator: char,
    alternate: char,
    padding: char,
}

impl FillerPolicy {
    /// Creates a filler policy.
    ///
    /// - `separator` is inserted between two equal letters
    /// - `alternate` replaces it when the repeated letter is the separator
    /// - `padding` completes an odd-length text
    pub fn new(separator: char, alternate: char, padding: char) -> Self {
        Self {
            separator: separator.to_ascii_uppercase(),
            alternate: alternate.to_ascii_uppercase(),
            padding: padding.to_ascii_uppercase(),
        }
    }

    /// `X` separator, `Q` alternate, `X` padding.
    pub const fn standard() -> Self {
        Self {
            separator: 'X',
            alternate: 'Q',
            padding: 'X',
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn alternate(&self) -> char {
        self.alternate
    }

    pub fn padding(&self) -> char {
        self.padding
    }

    /// Filler inserted after `letter` when the next letter repeats it.
    pub fn separator_for(&self, letter: char) -> char {
        if letter == self.separator {
            self.alternate
        } else {
            self.separator
        }
    }

    /// Filler appended after a trailing unpaired `letter`.
    pub fn padding_for(&self, letter: char) -> char {
        if letter != self.padding {
            self.padding
        } else {
            self.separator_for(letter)
        }
    }

    /// Checks that every filler belongs to `alphabet` and that the
    /// separator and its alternate differ.
    pub fn validate(&self, alphabet: &Alphabet) -> Result<(), CipherError> {
        for (name, letter) in [
            ("separator", self.separator),
            ("alternate", self.alternate),
            ("padding", self.padding),
        ] {
            if !alphabet.contains(letter) {
                return Err(CipherError::InvalidFiller(format!(
                    "{} '{}' is not in the alphabet",
                    name, letter
                )));
            }
        }
        if self.separator == self.alternate {
            return Err(CipherError::InvalidFiller(format!(
                "separator and alternate must differ, both are '{}'",
                self.separator
            )));
        }
        Ok(())
    }
}

impl Default for FillerPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// A Playfair variant: alphabet plus filler policy.
///
/// Only [`new`](Self::new) and [`Default`] build one, so every filler is
/// guaranteed to be a letter of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayfairConfig {
    alphabet: Alphabet,
    filler: FillerPolicy,
}

impl PlayfairConfig {
    /// Builds a validated configuration.
    pub fn new(alphabet: Alphabet, filler: FillerPolicy) -> Result<Self, CipherError> {
        filler.validate(&alphabet)?;
        Ok(Self { alphabet, filler })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn filler(&self) -> &FillerPolicy {
        &self.filler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_alphabet_has_25_letters() {
        let alphabet = Alphabet::standard();
        let letters: Vec<char> = alphabet.letters().collect();
        assert_eq!(letters.len(), ALPHABET_LEN);
        assert!(!letters.contains(&'J'));
        assert!(letters.contains(&'I'));
        assert_eq!(letters[9], 'K');
    }

    #[test]
    fn test_fold() {
        let alphabet = Alphabet::standard();
        assert_eq!(alphabet.fold('J'), 'I');
        assert_eq!(alphabet.fold('K'), 'K');
    }

    #[test]
    fn test_invalid_alphabets() {
        assert!(matches!(
            Alphabet::new('J', 'J'),
            Err(CipherError::InvalidAlphabet(_))
        ));
        assert!(matches!(
            Alphabet::new('1', 'I'),
            Err(CipherError::InvalidAlphabet(_))
        ));
        assert_eq!(Alphabet::new('q', 'k').unwrap().merge_from(), 'Q');
    }

    #[test]
    fn test_separator_fallback() {
        let filler = FillerPolicy::standard();
        assert_eq!(filler.separator_for('L'), 'X');
        assert_eq!(filler.separator_for('X'), 'Q');
    }

    #[test]
    fn test_padding_never_repeats_letter() {
        let filler = FillerPolicy::standard();
        assert_eq!(filler.padding_for('S'), 'X');
        assert_eq!(filler.padding_for('X'), 'Q');

        let z_padding = FillerPolicy::new('X', 'Q', 'Z');
        assert_eq!(z_padding.padding_for('S'), 'Z');
        assert_eq!(z_padding.padding_for('Z'), 'X');
    }

    #[test]
    fn test_filler_validation() {
        let alphabet = Alphabet::standard();
        assert!(FillerPolicy::standard().validate(&alphabet).is_ok());
        assert!(matches!(
            FillerPolicy::new('J', 'Q', 'X').validate(&alphabet),
            Err(CipherError::InvalidFiller(_))
        ));
        assert!(matches!(
            PlayfairConfig::new(alphabet, FillerPolicy::new('X', 'X', 'X')),
            Err(CipherError::InvalidFiller(_))
        ));
    }

    #[test]
    fn test_fillers_outside_merged_alphabet_rejected() {
        // X merged into K leaves the standard separator without a cell
        let alphabet = Alphabet::new('X', 'K').unwrap();
        assert_eq!(
            PlayfairConfig::new(alphabet, FillerPolicy::standard()),
            Err(CipherError::InvalidFiller(
                "separator 'X' is not in the alphabet".to_string()
            ))
        );

        let config = PlayfairConfig::new(alphabet, FillerPolicy::new('Z', 'Q', 'Z')).unwrap();
        assert_eq!(config.alphabet().merge_from(), 'X');
        assert_eq!(config.filler().separator(), 'Z');
        assert!(config.alphabet().contains(config.filler().padding_for('Z')));
    }
}
