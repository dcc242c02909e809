use std::fmt;

use log::{debug, trace};
use serde::Serialize;

use crate::bit_set::{self, BitSet};
use crate::validate::{InvalidCharacterError, check_invalid};

/// First repeated byte found by [`find_duplicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    pub byte: u8,
    /// Index of the first occurrence.
    pub first: usize,
    /// Index of the repeat, where the scan stopped.
    pub second: usize,
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{character}' at {first} and {second}",
            character = char::from(self.byte),
            first = self.first,
            second = self.second
        )
    }
}

/// Returns `true` if no byte in `!`..=`~` occurs twice in `input`.
///
/// Spaces are skipped, and so are bytes `0x80..=0xff`. Comparison is
/// case-sensitive.
///
/// # Errors
///
/// Returns [`InvalidCharacterError`] if `input` contains a control character;
/// see [`check_invalid`].
pub fn has_unique_chars(input: impl AsRef<[u8]>) -> Result<bool, InvalidCharacterError> {
    find_duplicate(input).map(|duplicate| duplicate.is_none())
}

/// Same scan as [`has_unique_chars`], reporting where it stopped.
///
/// # Errors
///
/// Returns [`InvalidCharacterError`] if `input` contains a control character.
pub fn find_duplicate(input: impl AsRef<[u8]>) -> Result<Option<Duplicate>, InvalidCharacterError> {
    let input = input.as_ref();
    check_invalid(input)?;

    let mut seen = BitSet::new();
    let mut first_seen = [0usize; bit_set::LEN];

    for (position, &byte) in input.iter().enumerate() {
        let Some(slot) = BitSet::slot(byte) else {
            continue;
        };
        if !seen.insert(slot) {
            let duplicate = Duplicate {
                byte,
                first: first_seen[usize::from(slot)],
                second: position,
            };
            debug!("duplicate {duplicate}");
            return Ok(Some(duplicate));
        }
        first_seen[usize::from(slot)] = position;
        trace!("{:?} after {:?}", seen, char::from(byte));
    }
    Ok(None)
}
