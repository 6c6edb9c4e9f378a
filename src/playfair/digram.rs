//! Digram preparation.
//!
//! Playfair works on letter pairs. A pair may not hold the same letter
//! twice, and the text must split evenly, so fillers are inserted while
//! scanning the text once from left to right.

use std::fmt;

use crate::playfair::alphabet::{FillerPolicy, PlayfairConfig};
use crate::text::normalize;

/// A pair of letters processed as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digram {
    pub first: char,
    pub second: char,
}

impl Digram {
    pub const fn new(first: char, second: char) -> Self {
        Self { first, second }
    }

    /// Returns true if both letters are the same.
    pub fn is_doubled(&self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for Digram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// An ordered sequence of digrams.
///
/// Displays as space-separated groups (`"BA LX LO ON"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigramSequence(Vec<Digram>);

impl DigramSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of digrams.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Digram> {
        self.0.iter()
    }

    /// All letters in order, without separators.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().flat_map(|d| [d.first, d.second])
    }

    /// Renders the letters without group separators (`"BALXLOON"`).
    pub fn to_compact_string(&self) -> String {
        self.letters().collect()
    }
}

impl From<Vec<Digram>> for DigramSequence {
    fn from(digrams: Vec<Digram>) -> Self {
        Self(digrams)
    }
}

impl FromIterator<Digram> for DigramSequence {
    fn from_iter<I: IntoIterator<Item = Digram>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DigramSequence {
    type Item = &'a Digram;
    type IntoIter = std::slice::Iter<'a, Digram>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for DigramSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digram) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", digram)?;
        }
        Ok(())
    }
}

/// Splits `text` into digrams with the standard alphabet and fillers.
pub fn prepare_digrams(text: &str) -> DigramSequence {
    prepare_digrams_with_config(text, &PlayfairConfig::default())
}

/// Splits `text` into digrams.
///
/// The text is normalized first. When a letter would be paired with a copy
/// of itself, the separator is emitted as its partner and the repeated
/// letter starts the next pair. A trailing unpaired letter is padded.
///
/// ```
/// use classic_ciphers::prepare_digrams;
///
/// assert_eq!(prepare_digrams("balloon").to_string(), "BA LX LO ON");
/// ```
pub fn prepare_digrams_with_config(text: &str, config: &PlayfairConfig) -> DigramSequence {
    let letters = normalize(text, config.alphabet());
    let filler = config.filler();

    let mut digrams = Vec::with_capacity(letters.len() / 2 + 1);
    let mut pending: Option<char> = None;

    for letter in letters.chars() {
        match pending.take() {
            None => pending = Some(letter),
            Some(first) if first == letter => {
                digrams.push(Digram::new(first, filler.separator_for(first)));
                pending = Some(letter);
            }
            Some(first) => digrams.push(Digram::new(first, letter)),
        }
    }

    if let Some(last) = pending {
        digrams.push(Digram::new(last, filler.padding_for(last)));
    }

    DigramSequence(digrams)
}

/// Removes the fillers that digram preparation would have inserted.
///
/// A separator standing in second position between two equal letters is
/// dropped, and so is a final padding letter. A genuine letter in one of
/// those positions is dropped too, so the result is a best guess.
pub fn strip_fillers(digrams: &DigramSequence, config: &PlayfairConfig) -> String {
    let letters: Vec<char> = digrams.letters().collect();
    strip_letters(&letters, config.filler())
}

fn strip_letters(letters: &[char], filler: &FillerPolicy) -> String {
    let mut out = String::with_capacity(letters.len());
    let last = letters.len().saturating_sub(1);

    for (i, &letter) in letters.iter().enumerate() {
        if i % 2 == 1 {
            let before = letters[i - 1];
            let is_separator = i < last
                && letters[i + 1] == before
                && letter == filler.separator_for(before);
            let is_padding = i == last && letter == filler.padding_for(before);
            if is_separator || is_padding {
                continue;
            }
        }
        out.push(letter);
    }

    out
}
