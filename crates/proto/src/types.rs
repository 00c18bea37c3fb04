//! Wire (proto) definitions for the `lightlink.types` package.
//!
//! Vendored prost output, kept in-tree so that building the workspace does
//! not require `protoc`. Field numbers and widths are part of the wire
//! contract and must not change.

/// PartSetHeader identifies a block's data-partition layout.
///
/// `total` is deliberately a signed 32-bit integer on the wire; the native
/// side widens it and must reject negative values.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PartSetHeader {
    #[prost(int32, tag = "1")]
    pub total: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub hash: ::prost::bytes::Bytes,
}
impl ::prost::Name for PartSetHeader {
    const NAME: &'static str = "PartSetHeader";
    const PACKAGE: &'static str = "lightlink.types";
    fn full_name() -> ::prost::alloc::string::String {
        ::prost::alloc::format!("lightlink.types.{}", Self::NAME)
    }
}
/// BlockID
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockId {
    #[prost(bytes = "bytes", tag = "1")]
    pub hash: ::prost::bytes::Bytes,
    #[prost(message, optional, tag = "2")]
    pub part_set_header: ::core::option::Option<PartSetHeader>,
}
impl ::prost::Name for BlockId {
    const NAME: &'static str = "BlockID";
    const PACKAGE: &'static str = "lightlink.types";
    fn full_name() -> ::prost::alloc::string::String {
        ::prost::alloc::format!("lightlink.types.{}", Self::NAME)
    }
}
/// CommitSig is a single validator's vote contribution within a Commit.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommitSig {
    #[prost(enumeration = "BlockIdFlag", tag = "1")]
    pub block_id_flag: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub validator_address: ::prost::bytes::Bytes,
    #[prost(message, optional, tag = "3")]
    pub timestamp: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(bytes = "bytes", tag = "4")]
    pub signature: ::prost::bytes::Bytes,
}
impl ::prost::Name for CommitSig {
    const NAME: &'static str = "CommitSig";
    const PACKAGE: &'static str = "lightlink.types";
    fn full_name() -> ::prost::alloc::string::String {
        ::prost::alloc::format!("lightlink.types.{}", Self::NAME)
    }
}
/// Commit contains the evidence that a block was committed by a set of
/// validators.
///
/// `hash` and `bit_array` are denormalized caches of quantities derived from
/// the other fields. A verifier never trusts them; they are recomputed on
/// every decode.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Commit {
    #[prost(int64, tag = "1")]
    pub height: i64,
    #[prost(int32, tag = "2")]
    pub round: i32,
    #[prost(message, optional, tag = "3")]
    pub block_id: ::core::option::Option<BlockId>,
    #[prost(message, repeated, tag = "4")]
    pub signatures: ::prost::alloc::vec::Vec<CommitSig>,
    #[prost(bytes = "bytes", tag = "5")]
    pub hash: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "6")]
    pub bit_array: ::prost::bytes::Bytes,
}
impl ::prost::Name for Commit {
    const NAME: &'static str = "Commit";
    const PACKAGE: &'static str = "lightlink.types";
    fn full_name() -> ::prost::alloc::string::String {
        ::prost::alloc::format!("lightlink.types.{}", Self::NAME)
    }
}
/// PublicKey wraps the supported key schemes.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PublicKey {
    #[prost(oneof = "public_key::Sum", tags = "1")]
    pub sum: ::core::option::Option<public_key::Sum>,
}
/// Nested message and enum types in `PublicKey`.
pub mod public_key {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(bytes = "bytes", tag = "1")]
        Ed25519(::prost::bytes::Bytes),
    }
}
impl ::prost::Name for PublicKey {
    const NAME: &'static str = "PublicKey";
    const PACKAGE: &'static str = "lightlink.types";
    fn full_name() -> ::prost::alloc::string::String {
        ::prost::alloc::format!("lightlink.types.{}", Self::NAME)
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Validator {
    #[prost(bytes = "bytes", tag = "1")]
    pub address: ::prost::bytes::Bytes,
    #[prost(message, optional, tag = "2")]
    pub pub_key: ::core::option::Option<PublicKey>,
    #[prost(int64, tag = "3")]
    pub voting_power: i64,
    #[prost(int64, tag = "4")]
    pub proposer_priority: i64,
}
impl ::prost::Name for Validator {
    const NAME: &'static str = "Validator";
    const PACKAGE: &'static str = "lightlink.types";
    fn full_name() -> ::prost::alloc::string::String {
        ::prost::alloc::format!("lightlink.types.{}", Self::NAME)
    }
}
/// SimpleValidator is the canonical hashing form of a Validator.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SimpleValidator {
    #[prost(message, optional, tag = "1")]
    pub pub_key: ::core::option::Option<PublicKey>,
    #[prost(int64, tag = "2")]
    pub voting_power: i64,
}
impl ::prost::Name for SimpleValidator {
    const NAME: &'static str = "SimpleValidator";
    const PACKAGE: &'static str = "lightlink.types";
    fn full_name() -> ::prost::alloc::string::String {
        ::prost::alloc::format!("lightlink.types.{}", Self::NAME)
    }
}
/// ValidatorSet carries `total_voting_power` for the benefit of non-verifying
/// consumers only; a verifier recomputes it from the validators.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidatorSet {
    #[prost(message, repeated, tag = "1")]
    pub validators: ::prost::alloc::vec::Vec<Validator>,
    #[prost(message, optional, tag = "2")]
    pub proposer: ::core::option::Option<Validator>,
    #[prost(int64, tag = "3")]
    pub total_voting_power: i64,
}
impl ::prost::Name for ValidatorSet {
    const NAME: &'static str = "ValidatorSet";
    const PACKAGE: &'static str = "lightlink.types";
    fn full_name() -> ::prost::alloc::string::String {
        ::prost::alloc::format!("lightlink.types.{}", Self::NAME)
    }
}
/// Consensus captures the protocol versions under which a block was made.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Consensus {
    #[prost(uint64, tag = "1")]
    pub block: u64,
    #[prost(uint64, tag = "2")]
    pub app: u64,
}
impl ::prost::Name for Consensus {
    const NAME: &'static str = "Consensus";
    const PACKAGE: &'static str = "lightlink.types";
    fn full_name() -> ::prost::alloc::string::String {
        ::prost::alloc::format!("lightlink.types.{}", Self::NAME)
    }
}
/// Header defines the structure of a block header.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Header {
    /// basic block info
    #[prost(message, optional, tag = "1")]
    pub version: ::core::option::Option<Consensus>,
    #[prost(string, tag = "2")]
    pub chain_id: ::prost::alloc::string::String,
    #[prost(int64, tag = "3")]
    pub height: i64,
    #[prost(message, optional, tag = "4")]
    pub time: ::core::option::Option<::prost_types::Timestamp>,
    /// prev block info
    #[prost(message, optional, tag = "5")]
    pub last_block_id: ::core::option::Option<BlockId>,
    /// hashes of block data
    #[prost(bytes = "bytes", tag = "6")]
    pub last_commit_hash: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "7")]
    pub data_hash: ::prost::bytes::Bytes,
    /// hashes from the app output from the prev block
    #[prost(bytes = "bytes", tag = "8")]
    pub validators_hash: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "9")]
    pub next_validators_hash: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "10")]
    pub consensus_hash: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "11")]
    pub app_hash: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "12")]
    pub last_results_hash: ::prost::bytes::Bytes,
    /// consensus info
    #[prost(bytes = "bytes", tag = "13")]
    pub evidence_hash: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "14")]
    pub proposer_address: ::prost::bytes::Bytes,
}
impl ::prost::Name for Header {
    const NAME: &'static str = "Header";
    const PACKAGE: &'static str = "lightlink.types";
    fn full_name() -> ::prost::alloc::string::String {
        ::prost::alloc::format!("lightlink.types.{}", Self::NAME)
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignedHeader {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<Header>,
    #[prost(message, optional, tag = "2")]
    pub commit: ::core::option::Option<Commit>,
}
impl ::prost::Name for SignedHeader {
    const NAME: &'static str = "SignedHeader";
    const PACKAGE: &'static str = "lightlink.types";
    fn full_name() -> ::prost::alloc::string::String {
        ::prost::alloc::format!("lightlink.types.{}", Self::NAME)
    }
}
/// BlockIdFlag indicates which BlockID a commit signature is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BlockIdFlag {
    Unknown = 0,
    /// the validator did not vote
    Absent = 1,
    /// the validator voted for the committed block
    Commit = 2,
    /// the validator voted for nil
    Nil = 3,
}
impl BlockIdFlag {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unknown => "BLOCK_ID_FLAG_UNKNOWN",
            Self::Absent => "BLOCK_ID_FLAG_ABSENT",
            Self::Commit => "BLOCK_ID_FLAG_COMMIT",
            Self::Nil => "BLOCK_ID_FLAG_NIL",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "BLOCK_ID_FLAG_UNKNOWN" => Some(Self::Unknown),
            "BLOCK_ID_FLAG_ABSENT" => Some(Self::Absent),
            "BLOCK_ID_FLAG_COMMIT" => Some(Self::Commit),
            "BLOCK_ID_FLAG_NIL" => Some(Self::Nil),
            _ => None,
        }
    }
}
