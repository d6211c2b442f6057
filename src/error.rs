use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while converting or decoding.
///
/// All variants are terminal: they describe the input, so retrying the same
/// call yields the same error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Hex (or base64) text that does not describe a byte string.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A symbol outside the base58 alphabet.
    #[error("invalid base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Checked data shorter than the checksum itself.
    #[error("base58check data is {0} bytes, not even long enough for a checksum")]
    TooShort(usize),

    /// Trailing checksum does not match the double SHA-256 of the payload.
    #[error(
        "base58check checksum {} does not match expected {}",
        hex4(.actual),
        hex4(.expected)
    )]
    ChecksumMismatch { expected: [u8; 4], actual: [u8; 4] },
}

fn hex4(b: &[u8; 4]) -> String {
    crate::convert::bytes_to_hex(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = Error::InvalidCharacter {
            character: '0',
            position: 3,
        };
        assert_eq!(e.to_string(), "invalid base58 character '0' at position 3");

        let e = Error::ChecksumMismatch {
            expected: [0xde, 0xad, 0xbe, 0xef],
            actual: [0, 0, 0, 1],
        };
        assert_eq!(
            e.to_string(),
            "base58check checksum 00000001 does not match expected deadbeef"
        );
        assert_eq!(
            Error::TooShort(2).to_string(),
            "base58check data is 2 bytes, not even long enough for a checksum"
        );
    }
}
