//! Base58 encoding and decoding with leading-zero preservation.
//!
//! A payload is read as a big-endian integer and rendered in base 58. Leading
//! `0x00` bytes carry no integer value, so each one is written as a leading
//! `'1'` (the zero digit) and restored on decode.

use std::num::NonZeroU8;

use log::{debug, trace};

use crate::convert::{bytes_to_hex, bytes_to_int, hex_to_bytes};
use crate::error::{Error, Result};
use crate::uint::BigUnsigned;

/// The Bitcoin base58 alphabet. Omits `0`, `O`, `I` and `l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const BASE: u8 = 58;
const BASE_DIVISOR: NonZeroU8 = match NonZeroU8::new(BASE) {
    Some(n) => n,
    None => unreachable!(),
};

/// Symbol to digit value for every ASCII byte; `None` outside the alphabet.
static DIGITS: [Option<u8>; 128] = digit_table();

const fn digit_table() -> [Option<u8>; 128] {
    let mut table = [None; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = Some(i as u8);
        i += 1;
    }
    table
}

/// Digit value of `c`, or `None` if it is not a base58 symbol.
pub fn digit_of(c: char) -> Option<u8> {
    if c.is_ascii() {
        DIGITS[c as usize]
    } else {
        None
    }
}

/// Render `n` in base 58 with no leading-zero accounting. Zero renders as
/// the empty string.
pub fn int_to_base58(n: &BigUnsigned) -> String {
    let mut n = n.clone();
    let mut out = Vec::new();
    while !n.is_zero() {
        let rem = n.div_rem_small(BASE_DIVISOR);
        out.push(ALPHABET[rem as usize]);
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

/// Read `s` as a base-58 numeral. Every `'1'` counts as a zero digit.
pub fn base58_to_int(s: &str) -> Result<BigUnsigned> {
    accumulate(s, 0)
}

fn accumulate(s: &str, offset: usize) -> Result<BigUnsigned> {
    let mut n = BigUnsigned::zero();
    for (i, c) in s.chars().enumerate() {
        let Some(d) = digit_of(c) else {
            debug!("rejecting base58 input: {:?} at position {}", c, offset + i);
            return Err(Error::InvalidCharacter {
                character: c,
                position: offset + i,
            });
        };
        n.mul_add_small(BASE, d);
    }
    Ok(n)
}

/// Encode bytes as a base58 string.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|b| **b == 0).count();
    trace!("base58 encode: {} bytes, {} leading zeros", data.len(), zeros);
    let body = int_to_base58(&bytes_to_int(&data[zeros..]));
    let mut result = String::with_capacity(zeros + body.len());
    for _ in 0..zeros {
        result.push(ALPHABET[0] as char);
    }
    result.push_str(&body);
    result
}

/// Decode a base58 string into bytes.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    let zeros = s.chars().take_while(|c| *c == ALPHABET[0] as char).count();
    trace!("base58 decode: {} chars, {} leading zeros", s.len(), zeros);
    // '1' is single-byte, so `zeros` is also a byte offset.
    let n = accumulate(&s[zeros..], zeros)?;
    let mut result = vec![0u8; zeros];
    result.extend_from_slice(n.as_bytes_be());
    Ok(result)
}

/// Encode the bytes described by `hex`.
pub fn encode_hex(hex: &str) -> Result<String> {
    Ok(encode(&hex_to_bytes(hex)?))
}

/// Decode to lowercase hex.
pub fn decode_to_hex(s: &str) -> Result<String> {
    Ok(bytes_to_hex(&decode(s)?))
}
