use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU8;

/// Arbitrary-precision non-negative integer.
///
/// Stored as big-endian base-256 digits with no leading zero digit, so zero is
/// the empty digit string and derived equality is numeric equality. Only the
/// operations base conversion needs are provided.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigUnsigned {
    digits: Vec<u8>,
}

impl BigUnsigned {
    /// The value zero, with no digits.
    pub fn zero() -> Self {
        BigUnsigned { digits: Vec::new() }
    }

    /// Interpret `bytes` as a big-endian number. Leading zero bytes carry no
    /// value and are dropped.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let zeros = bytes.iter().take_while(|b| **b == 0).count();
        BigUnsigned {
            digits: bytes[zeros..].to_vec(),
        }
    }

    /// Minimal big-endian rendering; empty for zero.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.digits.clone()
    }

    /// Borrowed form of [`to_bytes_be`](Self::to_bytes_be).
    pub fn as_bytes_be(&self) -> &[u8] {
        &self.digits
    }

    /// True for zero.
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Divide in place by a small divisor, returning the remainder.
    ///
    /// Long division from the most significant digit down.
    pub(crate) fn div_rem_small(&mut self, divisor: NonZeroU8) -> u8 {
        let divisor = divisor.get() as u32;
        let mut rem = 0u32;
        for d in self.digits.iter_mut() {
            let cur = (rem << 8) | *d as u32;
            *d = (cur / divisor) as u8;
            rem = cur % divisor;
        }
        self.normalize();
        rem as u8
    }

    /// Compute `self = self * mul + add` in place.
    pub fn mul_add_small(&mut self, mul: u8, add: u8) {
        let mut carry = add as u32;
        for d in self.digits.iter_mut().rev() {
            carry += (*d as u32) * mul as u32;
            *d = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            self.digits.insert(0, carry as u8);
            carry >>= 8;
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        let zeros = self.digits.iter().take_while(|b| **b == 0).count();
        if zeros > 0 {
            self.digits.drain(..zeros);
        }
    }
}

impl From<u64> for BigUnsigned {
    fn from(n: u64) -> Self {
        BigUnsigned::from_bytes_be(&n.to_be_bytes())
    }
}

impl Ord for BigUnsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for BigUnsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

const TEN: NonZeroU8 = match NonZeroU8::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

impl fmt::Display for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.pad("0");
        }
        let mut n = self.clone();
        let mut out = Vec::new();
        while !n.is_zero() {
            out.push(b'0' + n.div_rem_small(TEN));
        }
        out.reverse();
        // Only ASCII digits were pushed.
        f.pad(std::str::from_utf8(&out).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUnsigned({})", self)
    }
}

impl fmt::LowerHex for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&crate::convert::int_to_hex(self))
    }
}
