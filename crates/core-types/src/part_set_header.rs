use bytes::Bytes;
use serde::{Deserialize, Serialize};

use lightlink_proto::types as raw;
use lightlink_proto::{Error as ProtoError, Protobuf};

use crate::{convert, Hash};

/// Identifies a block's data-partition layout: how many parts the block was
/// split into, and the merkle root over those parts.
///
/// Invariant: `total == 0` iff `hash` is `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartSetHeader {
    pub total: u32,
    pub hash: Option<Hash>,
}

impl PartSetHeader {
    pub fn new(total: u32, hash: Option<Hash>) -> Self {
        Self { total, hash }
    }

    pub fn is_zero(&self) -> bool {
        self.total == 0 && self.hash.is_none()
    }
}

impl Protobuf for PartSetHeader {
    type Proto = raw::PartSetHeader;

    fn from_proto(proto: Self::Proto) -> Result<Self, ProtoError> {
        // The wire width is a signed 32-bit integer; a negative count signals
        // corruption, not an empty part set.
        let total = u32::try_from(proto.total).map_err(|_| {
            ProtoError::malformed::<Self::Proto>(format!("negative part count {}", proto.total))
        })?;

        let hash = convert::optional_hash::<Self::Proto>(&proto.hash, "hash")?;

        if (total == 0) != hash.is_none() {
            return Err(ProtoError::malformed::<Self::Proto>(
                "part count and part hash must be empty together",
            ));
        }

        Ok(Self { total, hash })
    }

    fn to_proto(&self) -> Result<Self::Proto, ProtoError> {
        let total = i32::try_from(self.total).map_err(|_| {
            ProtoError::unsupported_value::<Self::Proto>(format!(
                "part count {} does not fit in an int32",
                self.total
            ))
        })?;

        Ok(raw::PartSetHeader {
            total,
            hash: self
                .hash
                .map(|h| Bytes::copy_from_slice(h.as_bytes()))
                .unwrap_or_default(),
        })
    }
}
