use core::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A fixed-size bit array, used as the signer-presence bitmap of a commit.
///
/// Bit `i` corresponds to signature slot `i`; the slot association with the
/// validator set is positional.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitArray {
    bits: usize,
    bytes: Vec<u8>,
}

impl BitArray {
    pub fn new(bits: usize) -> Self {
        Self {
            bits,
            bytes: vec![0; bits.div_ceil(8)],
        }
    }

    /// The number of bits, not the number of bits set.
    pub fn len(&self) -> usize {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Set bit `index` to `value`. Out-of-range indices are ignored and
    /// reported by returning `false`.
    pub fn set(&mut self, index: usize, value: bool) -> bool {
        if index >= self.bits {
            return false;
        }

        let mask = 1 << (index % 8);
        if value {
            self.bytes[index / 8] |= mask;
        } else {
            self.bytes[index / 8] &= !mask;
        }

        true
    }

    pub fn get(&self, index: usize) -> bool {
        if index >= self.bits {
            return false;
        }

        self.bytes[index / 8] & (1 << (index % 8)) != 0
    }

    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// The packed byte representation carried on the wire.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.bytes)
    }
}

impl fmt::Display for BitArray {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.bits {
            write!(f, "{}", if self.get(i) { 'x' } else { '_' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitArray {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitArray({self})")
    }
}
