use bytes::Bytes;
use prost::Message;

use lightlink_proto::types as raw;
use lightlink_proto::{Error as ProtoError, Protobuf};

use crate::{convert, merkle, Address, BitArray, BlockId, Hash, Height, Signature, Timestamp};

/// One validator's contribution to a commit.
///
/// Slots are positional: slot `i` belongs to validator `i` of the set that
/// produced the commit. An absent slot carries no data at all, which the
/// enum makes structural rather than a convention on empty fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommitSig {
    /// The validator did not vote.
    Absent,

    /// The validator voted for the committed block.
    Commit {
        validator_address: Address,
        timestamp: Timestamp,
        signature: Signature,
    },

    /// The validator voted for nil.
    Nil {
        validator_address: Address,
        timestamp: Timestamp,
        signature: Signature,
    },
}

impl CommitSig {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn validator_address(&self) -> Option<&Address> {
        match self {
            Self::Absent => None,
            Self::Commit {
                validator_address, ..
            }
            | Self::Nil {
                validator_address, ..
            } => Some(validator_address),
        }
    }

    fn block_id_flag(&self) -> raw::BlockIdFlag {
        match self {
            Self::Absent => raw::BlockIdFlag::Absent,
            Self::Commit { .. } => raw::BlockIdFlag::Commit,
            Self::Nil { .. } => raw::BlockIdFlag::Nil,
        }
    }

    /// The canonical wire encoding of this slot, used as a merkle leaf when
    /// deriving the commit hash.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        self.to_wire().encode_to_vec()
    }

    fn to_wire(&self) -> raw::CommitSig {
        match self {
            Self::Absent => raw::CommitSig {
                block_id_flag: raw::BlockIdFlag::Absent.into(),
                validator_address: Bytes::new(),
                timestamp: None,
                signature: Bytes::new(),
            },
            Self::Commit {
                validator_address,
                timestamp,
                signature,
            }
            | Self::Nil {
                validator_address,
                timestamp,
                signature,
            } => raw::CommitSig {
                block_id_flag: self.block_id_flag().into(),
                validator_address: Bytes::copy_from_slice(validator_address.as_ref()),
                timestamp: Some((*timestamp).into()),
                signature: Bytes::copy_from_slice(&signature.to_bytes()),
            },
        }
    }
}

impl Protobuf for CommitSig {
    type Proto = raw::CommitSig;

    fn from_proto(proto: Self::Proto) -> Result<Self, ProtoError> {
        let flag = raw::BlockIdFlag::try_from(proto.block_id_flag).map_err(|_| {
            ProtoError::malformed::<Self::Proto>(format!(
                "unknown block id flag {}",
                proto.block_id_flag
            ))
        })?;

        match flag {
            raw::BlockIdFlag::Unknown => Err(ProtoError::malformed::<Self::Proto>(
                "block id flag must not be unknown",
            )),

            raw::BlockIdFlag::Absent => {
                // An absent slot carrying data is malformed input, not data
                // to be dropped. Rejecting it here makes this layer the one
                // component responsible for the check.
                if !proto.validator_address.is_empty()
                    || proto.timestamp.is_some()
                    || !proto.signature.is_empty()
                {
                    return Err(ProtoError::malformed::<Self::Proto>(
                        "absent commit signature must carry no address, timestamp or signature",
                    ));
                }

                Ok(Self::Absent)
            }

            raw::BlockIdFlag::Commit | raw::BlockIdFlag::Nil => {
                let validator_address =
                    convert::address::<Self::Proto>(&proto.validator_address, "validator_address")?;

                let timestamp = proto
                    .timestamp
                    .ok_or_else(|| ProtoError::missing_field::<Self::Proto>("timestamp"))?;
                let timestamp = Timestamp::from_proto(timestamp)?;

                let signature = Signature::try_from(proto.signature.as_ref()).map_err(|_| {
                    ProtoError::malformed::<Self::Proto>(format!(
                        "invalid signature length {}",
                        proto.signature.len()
                    ))
                })?;

                match flag {
                    raw::BlockIdFlag::Commit => Ok(Self::Commit {
                        validator_address,
                        timestamp,
                        signature,
                    }),
                    _ => Ok(Self::Nil {
                        validator_address,
                        timestamp,
                        signature,
                    }),
                }
            }
        }
    }

    fn to_proto(&self) -> Result<Self::Proto, ProtoError> {
        Ok(self.to_wire())
    }
}

/// The aggregate set of signatures attesting to a block at a given height
/// and round.
///
/// The commit hash and the signer bit array are derived from the fields
/// below and recomputed on demand; they are never stored, so they can never
/// go stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    pub height: Height,
    pub round: u32,
    pub block_id: BlockId,
    pub signatures: Vec<CommitSig>,
}

impl Commit {
    pub fn new(height: Height, round: u32, block_id: BlockId, signatures: Vec<CommitSig>) -> Self {
        Self {
            height,
            round,
            block_id,
            signatures,
        }
    }

    /// The canonical hash of this commit: the merkle root over the canonical
    /// encoding of every signature slot, in slot order.
    pub fn hash(&self) -> Hash {
        let leaves: Vec<Vec<u8>> = self
            .signatures
            .iter()
            .map(CommitSig::canonical_bytes)
            .collect();

        merkle::root_hash(&leaves)
    }

    /// The signer-presence bitmap: bit `i` is set iff slot `i` contributed a
    /// signature.
    pub fn bit_array(&self) -> BitArray {
        let mut bits = BitArray::new(self.signatures.len());
        for (i, sig) in self.signatures.iter().enumerate() {
            bits.set(i, !sig.is_absent());
        }
        bits
    }
}

impl Protobuf for Commit {
    type Proto = raw::Commit;

    fn from_proto(proto: Self::Proto) -> Result<Self, ProtoError> {
        let height = convert::positive_height::<Self::Proto>(proto.height)?;
        let round = convert::round::<Self::Proto>(proto.round)?;

        let block_id = proto
            .block_id
            .ok_or_else(|| ProtoError::missing_field::<Self::Proto>("block_id"))?;
        let block_id = BlockId::from_proto(block_id)?;

        // Slot order encodes the association with validator positions and is
        // preserved exactly. The wire `hash` and `bit_array` fields are
        // caches of derived values and are deliberately ignored: a verifier
        // recomputes both.
        let signatures = proto
            .signatures
            .into_iter()
            .map(CommitSig::from_proto)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            height,
            round,
            block_id,
            signatures,
        })
    }

    fn to_proto(&self) -> Result<Self::Proto, ProtoError> {
        let signatures = self
            .signatures
            .iter()
            .map(CommitSig::to_proto)
            .collect::<Result<Vec<_>, _>>()?;

        // The freshly recomputed hash and bitmap ride along as caches for
        // non-verifying consumers; they are not the source of truth.
        Ok(raw::Commit {
            height: convert::wire_height::<Self::Proto>(self.height)?,
            round: convert::wire_round::<Self::Proto>(self.round)?,
            block_id: Some(self.block_id.to_proto()?),
            signatures,
            hash: Bytes::copy_from_slice(self.hash().as_bytes()),
            bit_array: self.bit_array().to_bytes(),
        })
    }
}
