//! Digram substitution rules.
//!
//! For a pair (a, b) in the key square:
//! - same row: each letter moves one column along the row
//! - same column: each letter moves one row along the column
//! - otherwise: each letter keeps its row and takes the other's column
//!
//! Row and column moves wrap around and go right/down to encrypt,
//! left/up to decrypt. The rectangle rule is its own inverse.

use crate::direction::Direction;
use crate::error::CipherError;
use crate::playfair::digram::{Digram, DigramSequence};
use crate::playfair::table::{KeyTable, Position, TABLE_SIZE};

/// Applies the Playfair substitution to every digram.
///
/// # Errors
/// [`CipherError::LetterNotFound`] if a digram holds a letter that is not
/// in the key square.
pub fn transform(
    table: &KeyTable,
    digrams: &DigramSequence,
    direction: Direction,
) -> Result<DigramSequence, CipherError> {
    digrams
        .iter()
        .map(|digram| transform_digram(table, *digram, direction))
        .collect()
}

/// Applies the Playfair substitution to a single digram.
pub fn transform_digram(
    table: &KeyTable,
    digram: Digram,
    direction: Direction,
) -> Result<Digram, CipherError> {
    let a = table.position(digram.first)?;
    let b = table.position(digram.second)?;

    let (new_a, new_b) = if a.row == b.row {
        (
            Position::new(a.row, step(a.col, direction)),
            Position::new(b.row, step(b.col, direction)),
        )
    } else if a.col == b.col {
        (
            Position::new(step(a.row, direction), a.col),
            Position::new(step(b.row, direction), b.col),
        )
    } else {
        (Position::new(a.row, b.col), Position::new(b.row, a.col))
    };

    Ok(Digram::new(table.letter_at(new_a), table.letter_at(new_b)))
}

/// Moves one cell along a row or column, wrapping around the square.
fn step(index: usize, direction: Direction) -> usize {
    (index as i64 + direction.offset()).rem_euclid(TABLE_SIZE as i64) as usize
}
