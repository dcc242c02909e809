use std::fmt;

/// Lowest trackable byte (`!`). Space sits just below it and is never stored.
pub(crate) const FIRST: u8 = b'!';
/// Highest trackable byte (`~`).
pub(crate) const LAST: u8 = b'~';
/// Number of trackable bytes, `!` through `~`.
pub(crate) const LEN: usize = (LAST - FIRST) as usize + 1;

/// Occurrence set over the printable ASCII bytes `!`..=`~`, indexed by `byte - FIRST`.
pub(crate) struct BitSet([u8; LEN.div_ceil(8)]);

impl BitSet {
    pub(crate) fn new() -> Self {
        Self([0; LEN.div_ceil(8)])
    }

    /// Index of `byte` in the set, or `None` when the byte is not trackable.
    pub(crate) fn slot(byte: u8) -> Option<u8> {
        (FIRST..=LAST).contains(&byte).then(|| byte - FIRST)
    }

    /// Records `slot`, as returned by [`BitSet::slot`]. Returns `false` if it was already present.
    pub(crate) fn insert(&mut self, slot: u8) -> bool {
        let byte_index = (slot / 8) as usize;
        let mask = 1 << (slot % 8);
        let already_present = (self.0[byte_index] & mask) != 0;
        self.0[byte_index] |= mask;
        !already_present
    }

    pub(crate) fn contains(&self, slot: u8) -> bool {
        let byte_index = (slot / 8) as usize;
        let mask = 1 << (slot % 8);
        (self.0[byte_index] & mask) != 0
    }
}

// Highest slot first, so `~` is the leftmost digit.
impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in (0..LEN as u8).rev() {
            f.write_str(if self.contains(slot) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
