use bytes::Bytes;
use serde::{Deserialize, Serialize};

use lightlink_proto::types as raw;
use lightlink_proto::{Error as ProtoError, Protobuf};

use crate::{convert, Hash, PartSetHeader};

/// The unique identity of a block: its content hash plus its partition
/// layout.
///
/// "No block" is expressed as `Option<BlockId>` at the point of use, never
/// as a zero-valued `BlockId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockId {
    pub hash: Hash,
    pub parts: PartSetHeader,
}

impl BlockId {
    pub fn new(hash: Hash, parts: PartSetHeader) -> Self {
        Self { hash, parts }
    }
}

impl Protobuf for BlockId {
    type Proto = raw::BlockId;

    fn from_proto(proto: Self::Proto) -> Result<Self, ProtoError> {
        let hash = convert::hash::<Self::Proto>(&proto.hash, "hash")?;

        let parts = proto
            .part_set_header
            .ok_or_else(|| ProtoError::missing_field::<Self::Proto>("part_set_header"))?;

        Ok(Self {
            hash,
            parts: PartSetHeader::from_proto(parts)?,
        })
    }

    fn to_proto(&self) -> Result<Self::Proto, ProtoError> {
        Ok(raw::BlockId {
            hash: Bytes::copy_from_slice(self.hash.as_bytes()),
            part_set_header: Some(self.parts.to_proto()?),
        })
    }
}
