//! Simple merkle root over a list of canonical byte encodings, with
//! domain-separated leaf and inner nodes (RFC 6962 construction).

use sha3::{Digest, Keccak256};

use crate::Hash;

const LEAF_PREFIX: u8 = 0x00;
const INNER_PREFIX: u8 = 0x01;

/// The merkle root of the given items, in order.
///
/// The root is order-sensitive: permuting the items produces a different
/// root, which is what ties a commit hash to its slot positions.
pub fn root_hash<T: AsRef<[u8]>>(items: &[T]) -> Hash {
    match items.len() {
        0 => empty_hash(),
        1 => leaf_hash(items[0].as_ref()),
        n => {
            let split = n.next_power_of_two() / 2;
            let left = root_hash(&items[..split]);
            let right = root_hash(&items[split..]);
            inner_hash(&left, &right)
        }
    }
}

fn empty_hash() -> Hash {
    Hash::new(Keccak256::digest([]).into())
}

fn leaf_hash(bytes: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update([LEAF_PREFIX]);
    hasher.update(bytes);
    Hash::new(hasher.finalize().into())
}

fn inner_hash(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update([INNER_PREFIX]);
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    Hash::new(hasher.finalize().into())
}
