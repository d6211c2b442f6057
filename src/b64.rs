//! Standard padded base64 for hex payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::convert::{bytes_to_hex, hex_to_bytes};
use crate::error::{Error, Result};

/// Padded standard base64 of the bytes described by `hex`.
pub fn hex_to_base64(hex: &str) -> Result<String> {
    Ok(STANDARD.encode(hex_to_bytes(hex)?))
}

/// Decode padded standard base64 to lowercase hex.
pub fn base64_to_hex(b64: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(b64)
        .map_err(|e| Error::MalformedInput(e.to_string()))?;
    Ok(bytes_to_hex(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_hex_payload() {
        assert_eq!(hex_to_base64("").unwrap(), "");
        assert_eq!(hex_to_base64("deadbeef").unwrap(), "3q2+7w==");
        assert_eq!(base64_to_hex("3q2+7w==").unwrap(), "deadbeef");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(base64_to_hex("%%%"), Err(Error::MalformedInput(_))));
        assert!(matches!(hex_to_base64("d"), Err(Error::MalformedInput(_))));
    }
}
