//! Base58Check: base58 with a 4-byte double SHA-256 checksum suffix.
//!
//! The checksum catches transcription errors. It carries no key and is not an
//! authentication tag.

use log::debug;

use crate::base58;
use crate::convert::{bytes_to_hex, hex_to_bytes};
use crate::error::{Error, Result};
use crate::hashes::sha256d;

pub const CHECKSUM_LEN: usize = 4;

/// First four bytes of `SHA256(SHA256(payload))`.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = sha256d(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[..CHECKSUM_LEN]);
    out
}

/// Encode data in base58 with a 4-byte checksum.
pub fn encode_checked(payload: &[u8]) -> String {
    let mut framed = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    framed.extend_from_slice(payload);
    framed.extend_from_slice(&checksum(payload));
    base58::encode(&framed)
}

/// Decode a base58check string, verifying and stripping the checksum.
pub fn decode_checked(s: &str) -> Result<Vec<u8>> {
    let mut framed = base58::decode(s)?;
    if framed.len() < CHECKSUM_LEN {
        debug!("base58check input decodes to only {} bytes", framed.len());
        return Err(Error::TooShort(framed.len()));
    }
    let split = framed.len() - CHECKSUM_LEN;
    let expected = checksum(&framed[..split]);
    let mut actual = [0u8; CHECKSUM_LEN];
    actual.copy_from_slice(&framed[split..]);
    if expected != actual {
        debug!(
            "base58check checksum mismatch: got {}, expected {}",
            bytes_to_hex(&actual),
            bytes_to_hex(&expected)
        );
        return Err(Error::ChecksumMismatch { expected, actual });
    }
    framed.truncate(split);
    Ok(framed)
}

/// Base58check-encode the bytes described by `hex`.
pub fn encode_checked_hex(hex: &str) -> Result<String> {
    Ok(encode_checked(&hex_to_bytes(hex)?))
}

/// Verify `s` and return its payload as lowercase hex.
pub fn decode_checked_to_hex(s: &str) -> Result<String> {
    Ok(bytes_to_hex(&decode_checked(s)?))
}
