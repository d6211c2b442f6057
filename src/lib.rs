//! Base58 and Base58Check encoding for binary payloads.
//!
//! Payloads are converted through an arbitrary-precision integer, with
//! leading zero bytes carried as leading `'1'` symbols so that every byte
//! string round-trips exactly. [`check`] adds the 4-byte double SHA-256
//! checksum used by Bitcoin addresses and extended keys.
//!
//! ```
//! use moneytree_b58::{decode_checked, encode_checked};
//!
//! let payload = [0x00, 0x01, 0x02];
//! let s = encode_checked(&payload);
//! assert!(s.starts_with('1'));
//! assert_eq!(decode_checked(&s).unwrap(), payload);
//! ```

pub mod b64;
pub mod base58;
pub mod check;
pub mod convert;
pub mod error;
pub mod hashes;
pub mod uint;

pub use base58::{decode, encode, ALPHABET};
pub use check::{decode_checked, encode_checked, CHECKSUM_LEN};
pub use error::{Error, Result};
pub use uint::BigUnsigned;
