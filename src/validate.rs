use log::debug;
use thiserror::Error;

/// Returned when the input holds an ASCII control character (`0..=31` or DEL).
///
/// The message is fixed; the offending byte and its index are kept for callers
/// that want more than the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid character in string")]
pub struct InvalidCharacterError {
    byte: u8,
    position: usize,
}

impl InvalidCharacterError {
    /// The rejected byte.
    #[must_use]
    pub fn byte(&self) -> u8 {
        self.byte
    }

    /// Index of the rejected byte in the input.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

pub(crate) fn is_control(byte: u8) -> bool {
    byte <= 31 || byte == 127
}

/// Fails on the first control character in `input`.
///
/// Bytes are read as unsigned, so `0x80..=0xff` pass.
///
/// # Errors
///
/// Returns [`InvalidCharacterError`] for the first byte `<= 31` or `== 127`.
pub fn check_invalid(input: impl AsRef<[u8]>) -> Result<(), InvalidCharacterError> {
    let input = input.as_ref();
    match input.iter().position(|&b| is_control(b)) {
        Some(position) => {
            let byte = input[position];
            debug!("rejecting control byte {byte:#04x} at index {position}");
            Err(InvalidCharacterError { byte, position })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_valid() {
        assert_eq!(check_invalid(""), Ok(()));
    }

    #[test]
    fn printable_and_high_bytes_are_valid() {
        assert!(check_invalid(" !azAZ09~").is_ok());
        assert!(check_invalid([0x80u8, 0xc3, 0xff]).is_ok());
        assert!(check_invalid("héllo").is_ok());
    }

    #[test]
    fn tab_is_rejected_with_position() {
        let err = check_invalid("ab\tc").unwrap_err();
        assert_eq!(err.byte(), b'\t');
        assert_eq!(err.position(), 2);
        assert_eq!(err.to_string(), "invalid character in string");
    }

    #[test]
    fn del_is_rejected() {
        let err = check_invalid([b'x', 0x7f]).unwrap_err();
        assert_eq!(err.byte(), 0x7f);
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn first_offender_wins() {
        let err = check_invalid("a\nb\0").unwrap_err();
        assert_eq!(err.byte(), b'\n');
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn control_range_boundaries() {
        assert!(is_control(0));
        assert!(is_control(31));
        assert!(!is_control(32));
        assert!(!is_control(126));
        assert!(is_control(127));
        assert!(!is_control(128));
    }
}
