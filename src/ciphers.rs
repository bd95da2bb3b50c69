pub mod brute_force;

use tracing::debug;

use crate::alphabet::{index_of, letter_at, ALPHABET_LEN};
use crate::error::CipherError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Moves every letter of `text` `key` places along the alphabet, wrapping at the ends.
///
/// Fails on the first character outside the alphabet without producing any output.
pub fn shift(text: &str, key: i64, direction: Direction) -> Result<String, CipherError> {
    let indices = to_indices(text)?;
    Ok(shift_indices(&indices, offset(key, direction)))
}

pub fn encode(message: &str, key: i64) -> Result<String, CipherError> {
    let ciphertext = shift(message, key, Direction::Forward)?;
    debug!(key, len = ciphertext.len(), "encoded message");
    Ok(ciphertext)
}

pub fn decode(ciphertext: &str, key: i64) -> Result<String, CipherError> {
    shift(ciphertext, key, Direction::Backward)
}

// floored, so the result is always in [0, 26) whatever the sign of key
fn offset(key: i64, direction: Direction) -> usize {
    let n = ALPHABET_LEN as i64;
    (direction.sign() * key.rem_euclid(n)).rem_euclid(n) as usize
}

pub(crate) fn to_indices(text: &str) -> Result<Vec<usize>, CipherError> {
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            index_of(character).ok_or(CipherError::InvalidCharacter { character, position })
        })
        .collect()
}

pub(crate) fn shift_indices(indices: &[usize], offset: usize) -> String {
    indices.iter().map(|&i| letter_at(i + offset)).collect()
}
