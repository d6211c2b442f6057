//! Conversions between byte strings, lowercase hex text and [`BigUnsigned`].

use bitcoin::hex::{DisplayHex, FromHex};

use crate::error::{Error, Result};
use crate::uint::BigUnsigned;

/// Render bytes as lowercase hex, two digits per byte, no prefix.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.to_lower_hex_string()
}

/// Parse hex text into bytes. Odd lengths and non-hex characters are
/// rejected; both letter cases are accepted.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    Vec::<u8>::from_hex(hex).map_err(|e| Error::MalformedInput(e.to_string()))
}

/// Big-endian interpretation; empty input is zero.
pub fn bytes_to_int(bytes: &[u8]) -> BigUnsigned {
    BigUnsigned::from_bytes_be(bytes)
}

/// Minimal big-endian hex, padded to an even number of digits. Zero renders
/// as the empty string.
pub fn int_to_hex(n: &BigUnsigned) -> String {
    bytes_to_hex(n.as_bytes_be())
}

/// Minimal big-endian bytes; empty for zero.
pub fn int_to_bytes(n: &BigUnsigned) -> Vec<u8> {
    n.to_bytes_be()
}

/// Big-endian value of the bytes described by `hex`.
pub fn hex_to_int(hex: &str) -> Result<BigUnsigned> {
    Ok(bytes_to_int(&hex_to_bytes(hex)?))
}
