//! Thin adapter over the `bitcoin::hashes` primitives.
//!
//! Digests are returned as fixed-size arrays. The `_hex` variants take and
//! return lowercase hex and always hash the decoded bytes, never the hex text.

use bitcoin::hashes::{hash160, hmac, ripemd160, sha256, sha256d, sha512, Hash, HashEngine};

use crate::convert::{bytes_to_hex, hex_to_bytes};
use crate::error::Result;

/// Single SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    sha256::Hash::hash(data).to_byte_array()
}

/// SHA-256 applied twice.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256d::Hash::hash(data).to_byte_array()
}

/// RIPEMD-160 digest.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    ripemd160::Hash::hash(data).to_byte_array()
}

/// RIPEMD-160 of SHA-256.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    hash160::Hash::hash(data).to_byte_array()
}

/// HMAC-SHA512 of `message` under `key`.
pub fn hmac_sha512(key: &[u8], message: &[u8]) -> [u8; 64] {
    let mut engine = hmac::HmacEngine::<sha512::Hash>::new(key);
    engine.input(message);
    hmac::Hmac::<sha512::Hash>::from_engine(engine).to_byte_array()
}

/// SHA-256 of the bytes described by `hex`.
pub fn sha256_hex(hex: &str) -> Result<String> {
    Ok(bytes_to_hex(&sha256(&hex_to_bytes(hex)?)))
}

/// SHA-256 of UTF-8 text taken as-is.
pub fn sha256_text(text: &str) -> String {
    bytes_to_hex(&sha256(text.as_bytes()))
}

/// RIPEMD-160 of UTF-8 text taken as-is.
pub fn ripemd160_text(text: &str) -> String {
    bytes_to_hex(&ripemd160(text.as_bytes()))
}

/// RIPEMD-160 of the bytes described by `hex`.
pub fn ripemd160_hex(hex: &str) -> Result<String> {
    Ok(bytes_to_hex(&ripemd160(&hex_to_bytes(hex)?)))
}

/// HMAC-SHA512 as 128 lowercase hex digits.
pub fn hmac_sha512_hex(key: &[u8], message: &[u8]) -> String {
    bytes_to_hex(&hmac_sha512(key, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_vectors() {
        assert_eq!(
            bytes_to_hex(&sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_text("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        // "abc" as hex is hashed as raw bytes, not as the text "616263".
        assert_eq!(sha256_hex("616263").unwrap(), sha256_text("abc"));
    }

    #[test]
    fn sha256d_is_double() {
        assert_eq!(sha256d(b"hello"), sha256(&sha256(b"hello")));
    }

    #[test]
    fn ripemd160_vectors() {
        assert_eq!(
            ripemd160_hex("").unwrap(),
            "9c1185a5c5e9fc54612808977ee8f548b2258d31"
        );
        assert_eq!(
            bytes_to_hex(&ripemd160(b"abc")),
            "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"
        );
        assert_eq!(hash160(b"abc"), ripemd160(&sha256(b"abc")));
    }

    #[test]
    fn ripemd160_text_hashes_raw_text() {
        assert_eq!(ripemd160_text("abc"), "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");
        assert_eq!(ripemd160_hex("616263").unwrap(), ripemd160_text("abc"));
        // Hex digits given as text are not decoded.
        assert_ne!(ripemd160_text("616263"), ripemd160_text("abc"));
    }

    #[test]
    fn hmac_sha512_rfc4231_case2() {
        assert_eq!(
            hmac_sha512_hex(b"Jefe", b"what do ya want for nothing?"),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn hex_input_is_validated() {
        assert!(sha256_hex("0").is_err());
        assert!(ripemd160_hex("zz").is_err());
    }
}
