//! Native consensus data model for the lightlink light-client, together with
//! the bidirectional conversion layer between the wire (proto) representation
//! and the native one.
//!
//! Security-relevant derived quantities (total voting power, commit hash,
//! signer bit array) are always recomputed on the native side. The wire form
//! may carry them as denormalized caches, but they are never trusted on
//! decode.

#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::panic))]

mod address;
mod bit_array;
mod block_id;
mod commit;
mod convert;
mod hash;
mod header;
mod height;
mod part_set_header;
mod signing;
mod timestamp;
mod validator_set;

/// Merkle root computation over canonical field encodings.
pub mod merkle;

pub use address::Address;
pub use bit_array::BitArray;
pub use block_id::BlockId;
pub use commit::{Commit, CommitSig};
pub use hash::Hash;
pub use header::{Header, SignedHeader, Version};
pub use height::Height;
pub use part_set_header::PartSetHeader;
pub use signing::{PrivateKey, PublicKey, Signature};
pub use timestamp::Timestamp;
pub use validator_set::{Validator, ValidatorSet, VotingPower, MAX_TOTAL_VOTING_POWER};

pub use lightlink_proto::{Error as ProtoError, Protobuf};
