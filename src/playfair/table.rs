//! The 5x5 Playfair key square.

use std::fmt;

use crate::error::CipherError;
use crate::playfair::alphabet::{PlayfairConfig, ALPHABET_LEN};
use crate::text::normalize;

/// Side length of the key square.
pub const TABLE_SIZE: usize = 5;

/// Coordinate of a letter in the key square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A Playfair key square.
///
/// Holds the 25 letters row-major plus a reverse index, so lookups are
/// constant time. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    cells: [char; ALPHABET_LEN],
    positions: [Option<Position>; 26],
}

impl KeyTable {
    /// Builds the key square for `key` under `config`.
    ///
    /// The normalized key letters come first, each kept at its first
    /// occurrence, followed by the remaining alphabet letters in order.
    ///
    /// # Errors
    /// [`CipherError::InvalidKey`] if the key has no letters.
    pub fn new(key: &str, config: &PlayfairConfig) -> Result<Self, CipherError> {
        let key = normalize(key, config.alphabet());
        if key.is_empty() {
            return Err(CipherError::InvalidKey);
        }

        let mut cells = ['\0'; ALPHABET_LEN];
        let mut positions = [None; 26];
        let mut filled = 0;

        for letter in key.chars().chain(config.alphabet().letters()) {
            let slot = letter_index(letter);
            if positions[slot].is_some() {
                continue;
            }
            positions[slot] = Some(Position::new(filled / TABLE_SIZE, filled % TABLE_SIZE));
            cells[filled] = letter;
            filled += 1;
        }

        debug_assert_eq!(filled, ALPHABET_LEN);
        Ok(Self { cells, positions })
    }

    /// Returns the position of `letter`.
    ///
    /// # Errors
    /// [`CipherError::LetterNotFound`] if the letter is not in the square.
    pub fn position(&self, letter: char) -> Result<Position, CipherError> {
        if !letter.is_ascii_uppercase() {
            return Err(CipherError::LetterNotFound(letter));
        }
        self.positions[letter_index(letter)].ok_or(CipherError::LetterNotFound(letter))
    }

    /// Returns the letter at `pos`.
    ///
    /// # Panics
    /// If `pos` lies outside the 5x5 square.
    pub fn letter_at(&self, pos: Position) -> char {
        assert!(pos.row < TABLE_SIZE && pos.col < TABLE_SIZE);
        self.cells[pos.row * TABLE_SIZE + pos.col]
    }

    /// Iterates over the rows of the square.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(TABLE_SIZE)
    }

    /// All 25 letters, row-major.
    pub fn letters(&self) -> &[char] {
        &self.cells
    }
}

impl fmt::Display for KeyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Builds the key square for `key` with the standard J/I alphabet.
pub fn build_key_table(key: &str) -> Result<KeyTable, CipherError> {
    KeyTable::new(key, &PlayfairConfig::default())
}

fn letter_index(letter: char) -> usize {
    (letter as u8 - b'A') as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playfair::alphabet::{Alphabet, FillerPolicy};

    fn row(table: &KeyTable, r: usize) -> String {
        table.rows().nth(r).unwrap().iter().collect()
    }

    #[test]
    fn test_playfair_golden_table() {
        let table = build_key_table("PLAYFAIR").unwrap();
        assert_eq!(row(&table, 0), "PLAYF");
        assert_eq!(row(&table, 1), "IRBCD");
        assert_eq!(row(&table, 2), "EGHKM");
        assert_eq!(row(&table, 3), "NOQST");
        assert_eq!(row(&table, 4), "UVWXZ");
    }

    #[test]
    fn test_monarchy_table() {
        let table = build_key_table("monarchy").unwrap();
        assert_eq!(
            table.to_string(),
            "M O N A R\nC H Y B D\nE F G I K\nL P Q S T\nU V W X Z"
        );
    }

    #[test]
    fn test_table_is_complete() {
        for key in ["PLAYFAIR", "Jumping Jack", "zzzz", "The quick brown fox", "é"] {
            let table = build_key_table(key).unwrap();
            let mut letters = table.letters().to_vec();
            letters.sort_unstable();
            let expected: Vec<char> = Alphabet::standard().letters().collect();
            assert_eq!(letters, expected, "key {:?}", key);
        }
    }

    #[test]
    fn test_table_is_deterministic() {
        assert_eq!(build_key_table("secret").unwrap(), build_key_table("SECRET").unwrap());
        assert_eq!(build_key_table("se cr et").unwrap(), build_key_table("secret").unwrap());
    }

    #[test]
    fn test_key_j_is_merged() {
        let table = build_key_table("JIG").unwrap();
        assert_eq!(row(&table, 0), "IGABC");
        assert_eq!(table.position('I').unwrap(), Position::new(0, 0));
    }

    #[test]
    fn test_invalid_keys() {
        assert_eq!(build_key_table(""), Err(CipherError::InvalidKey));
        assert_eq!(build_key_table("   "), Err(CipherError::InvalidKey));
        assert_eq!(build_key_table("1234 !?"), Err(CipherError::InvalidKey));
        assert_eq!(build_key_table("🦄"), Err(CipherError::InvalidKey));
        assert_eq!(build_key_table("♥ → ©"), Err(CipherError::InvalidKey));
    }

    #[test]
    fn test_position_roundtrip() {
        let table = build_key_table("PLAYFAIR").unwrap();
        for &letter in table.letters() {
            let pos = table.position(letter).unwrap();
            assert_eq!(table.letter_at(pos), letter);
        }
        assert_eq!(table.position('W').unwrap(), Position::new(4, 2));
    }

    #[test]
    fn test_letter_not_found() {
        let table = build_key_table("PLAYFAIR").unwrap();
        assert_eq!(table.position('J'), Err(CipherError::LetterNotFound('J')));
        assert_eq!(table.position('a'), Err(CipherError::LetterNotFound('a')));
        assert_eq!(table.position('#'), Err(CipherError::LetterNotFound('#')));
    }

    #[test]
    fn test_custom_alphabet_table() {
        let config = PlayfairConfig::new(Alphabet::new('Q', 'K').unwrap(), FillerPolicy::standard())
            .unwrap();
        let table = KeyTable::new("QUICK", &config).unwrap();
        assert_eq!(row(&table, 0), "KUICA");
        assert!(table.position('J').is_ok());
        assert_eq!(table.position('Q'), Err(CipherError::LetterNotFound('Q')));
    }
}
