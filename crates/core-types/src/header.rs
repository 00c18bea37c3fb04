use bytes::Bytes;
use prost::Message;

use lightlink_proto::types as raw;
use lightlink_proto::{Error as ProtoError, Protobuf};

use crate::{convert, merkle, Address, BlockId, Commit, Hash, Height, Timestamp};

/// The consensus protocol versions a block was produced under, expanded from
/// the compact wire message.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Version {
    pub block: u64,
    pub app: u64,
}

impl Protobuf for Version {
    type Proto = raw::Consensus;

    fn from_proto(proto: Self::Proto) -> Result<Self, ProtoError> {
        Ok(Self {
            block: proto.block,
            app: proto.app,
        })
    }

    fn to_proto(&self) -> Result<Self::Proto, ProtoError> {
        Ok(raw::Consensus {
            block: self.block,
            app: self.app,
        })
    }
}

/// A block header as produced by the origin consensus engine.
///
/// The content hashes are opaque to this layer; hash fields which are empty
/// for a chain's first blocks are `None`. The `app_hash` is whatever length
/// the application chose, so it stays raw bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub version: Version,
    pub chain_id: String,
    pub height: Height,
    pub time: Timestamp,
    pub last_block_id: Option<BlockId>,
    pub last_commit_hash: Option<Hash>,
    pub data_hash: Option<Hash>,
    pub validators_hash: Option<Hash>,
    pub next_validators_hash: Option<Hash>,
    pub consensus_hash: Option<Hash>,
    pub app_hash: Bytes,
    pub last_results_hash: Option<Hash>,
    pub evidence_hash: Option<Hash>,
    pub proposer_address: Address,
}

impl Header {
    /// The header's own identity: the merkle root over the canonical
    /// encodings of its fields, in field order.
    pub fn hash(&self) -> Hash {
        let leaves: Vec<Vec<u8>> = vec![
            raw::Consensus {
                block: self.version.block,
                app: self.version.app,
            }
            .encode_to_vec(),
            self.chain_id.as_bytes().to_vec(),
            self.height.as_u64().to_be_bytes().to_vec(),
            prost_types::Timestamp::from(self.time).encode_to_vec(),
            self.last_block_id
                .as_ref()
                .map(canonical_block_id_bytes)
                .unwrap_or_default(),
            hash_bytes(&self.last_commit_hash).to_vec(),
            hash_bytes(&self.data_hash).to_vec(),
            hash_bytes(&self.validators_hash).to_vec(),
            hash_bytes(&self.next_validators_hash).to_vec(),
            hash_bytes(&self.consensus_hash).to_vec(),
            self.app_hash.to_vec(),
            hash_bytes(&self.last_results_hash).to_vec(),
            hash_bytes(&self.evidence_hash).to_vec(),
            self.proposer_address.as_ref().to_vec(),
        ];

        merkle::root_hash(&leaves)
    }
}

/// A deterministic, width-independent encoding of a block id, so that the
/// header hash does not depend on wire integer widths.
fn canonical_block_id_bytes(block_id: &BlockId) -> Vec<u8> {
    let mut buf = Vec::with_capacity(Hash::LENGTH * 2 + 4);
    buf.extend_from_slice(block_id.hash.as_bytes());
    buf.extend_from_slice(&block_id.parts.total.to_be_bytes());
    if let Some(hash) = &block_id.parts.hash {
        buf.extend_from_slice(hash.as_bytes());
    }
    buf
}

fn hash_bytes(hash: &Option<Hash>) -> Bytes {
    match hash {
        Some(hash) => Bytes::copy_from_slice(hash.as_bytes()),
        None => Bytes::new(),
    }
}

impl Protobuf for Header {
    type Proto = raw::Header;

    fn from_proto(proto: Self::Proto) -> Result<Self, ProtoError> {
        let version = proto
            .version
            .ok_or_else(|| ProtoError::missing_field::<Self::Proto>("version"))?;

        let time = proto
            .time
            .ok_or_else(|| ProtoError::missing_field::<Self::Proto>("time"))?;

        Ok(Self {
            version: Version::from_proto(version)?,
            chain_id: proto.chain_id,
            height: convert::positive_height::<Self::Proto>(proto.height)?,
            time: Timestamp::from_proto(time)?,
            last_block_id: proto.last_block_id.map(BlockId::from_proto).transpose()?,
            last_commit_hash: convert::optional_hash::<Self::Proto>(
                &proto.last_commit_hash,
                "last_commit_hash",
            )?,
            data_hash: convert::optional_hash::<Self::Proto>(&proto.data_hash, "data_hash")?,
            validators_hash: convert::optional_hash::<Self::Proto>(
                &proto.validators_hash,
                "validators_hash",
            )?,
            next_validators_hash: convert::optional_hash::<Self::Proto>(
                &proto.next_validators_hash,
                "next_validators_hash",
            )?,
            consensus_hash: convert::optional_hash::<Self::Proto>(
                &proto.consensus_hash,
                "consensus_hash",
            )?,
            app_hash: proto.app_hash,
            last_results_hash: convert::optional_hash::<Self::Proto>(
                &proto.last_results_hash,
                "last_results_hash",
            )?,
            evidence_hash: convert::optional_hash::<Self::Proto>(
                &proto.evidence_hash,
                "evidence_hash",
            )?,
            proposer_address: convert::address::<Self::Proto>(
                &proto.proposer_address,
                "proposer_address",
            )?,
        })
    }

    fn to_proto(&self) -> Result<Self::Proto, ProtoError> {
        Ok(raw::Header {
            version: Some(self.version.to_proto()?),
            chain_id: self.chain_id.clone(),
            height: convert::wire_height::<Self::Proto>(self.height)?,
            time: Some(self.time.to_proto()?),
            last_block_id: self
                .last_block_id
                .as_ref()
                .map(BlockId::to_proto)
                .transpose()?,
            last_commit_hash: hash_bytes(&self.last_commit_hash),
            data_hash: hash_bytes(&self.data_hash),
            validators_hash: hash_bytes(&self.validators_hash),
            next_validators_hash: hash_bytes(&self.next_validators_hash),
            consensus_hash: hash_bytes(&self.consensus_hash),
            app_hash: self.app_hash.clone(),
            last_results_hash: hash_bytes(&self.last_results_hash),
            evidence_hash: hash_bytes(&self.evidence_hash),
            proposer_address: Bytes::copy_from_slice(self.proposer_address.as_ref()),
        })
    }
}

/// A header together with the commit that attests to it: the unit of
/// transfer handed to a light-client verifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedHeader {
    pub header: Header,
    pub commit: Commit,
}

impl SignedHeader {
    /// Structural consistency between the header and its commit.
    ///
    /// This does not verify signatures or voting power; it only checks that
    /// the commit attests to this header and not another one.
    pub fn validate_basic(&self) -> Result<(), ProtoError> {
        if self.commit.height != self.header.height {
            return Err(ProtoError::malformed::<raw::SignedHeader>(format!(
                "commit height {} does not match header height {}",
                self.commit.height, self.header.height
            )));
        }

        if self.commit.block_id.hash != self.header.hash() {
            return Err(ProtoError::malformed::<raw::SignedHeader>(
                "commit block id does not match the header hash",
            ));
        }

        Ok(())
    }
}

impl Protobuf for SignedHeader {
    type Proto = raw::SignedHeader;

    fn from_proto(proto: Self::Proto) -> Result<Self, ProtoError> {
        let header = proto
            .header
            .ok_or_else(|| ProtoError::missing_field::<Self::Proto>("header"))?;

        let commit = proto
            .commit
            .ok_or_else(|| ProtoError::missing_field::<Self::Proto>("commit"))?;

        Ok(Self {
            header: Header::from_proto(header)?,
            commit: Commit::from_proto(commit)?,
        })
    }

    fn to_proto(&self) -> Result<Self::Proto, ProtoError> {
        Ok(raw::SignedHeader {
            header: Some(self.header.to_proto()?),
            commit: Some(self.commit.to_proto()?),
        })
    }
}
