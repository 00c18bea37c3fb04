//! Shared invariant checks used by the wire conversions.
//!
//! Every helper is generic over the containing message type `N` so that
//! errors name the message they were found in.

use prost::Name;

use lightlink_proto::Error as ProtoError;

use crate::validator_set::VotingPower;
use crate::{Address, Hash, Height};

pub(crate) fn address<N: Name>(bytes: &[u8], field: &'static str) -> Result<Address, ProtoError> {
    let raw: [u8; Address::LENGTH] = bytes.try_into().map_err(|_| {
        ProtoError::malformed::<N>(format!(
            "invalid length for `{field}`: expected {}, got {}",
            Address::LENGTH,
            bytes.len()
        ))
    })?;

    Ok(Address::new(raw))
}

pub(crate) fn hash<N: Name>(bytes: &[u8], field: &'static str) -> Result<Hash, ProtoError> {
    let raw: [u8; Hash::LENGTH] = bytes.try_into().map_err(|_| {
        ProtoError::malformed::<N>(format!(
            "invalid length for `{field}`: expected {}, got {}",
            Hash::LENGTH,
            bytes.len()
        ))
    })?;

    Ok(Hash::new(raw))
}

/// Hash fields which are empty for a chain's first blocks decode to `None`.
pub(crate) fn optional_hash<N: Name>(
    bytes: &[u8],
    field: &'static str,
) -> Result<Option<Hash>, ProtoError> {
    if bytes.is_empty() {
        Ok(None)
    } else {
        hash::<N>(bytes, field).map(Some)
    }
}

pub(crate) fn positive_height<N: Name>(height: i64) -> Result<Height, ProtoError> {
    u64::try_from(height)
        .ok()
        .filter(|h| *h > 0)
        .map(Height::new)
        .ok_or_else(|| ProtoError::malformed::<N>(format!("non-positive height {height}")))
}

pub(crate) fn wire_height<N: Name>(height: Height) -> Result<i64, ProtoError> {
    i64::try_from(height.as_u64()).map_err(|_| {
        ProtoError::unsupported_value::<N>(format!("height {height} does not fit in an int64"))
    })
}

pub(crate) fn round<N: Name>(round: i32) -> Result<u32, ProtoError> {
    u32::try_from(round)
        .map_err(|_| ProtoError::malformed::<N>(format!("negative round {round}")))
}

pub(crate) fn wire_round<N: Name>(round: u32) -> Result<i32, ProtoError> {
    i32::try_from(round).map_err(|_| {
        ProtoError::unsupported_value::<N>(format!("round {round} does not fit in an int32"))
    })
}

pub(crate) fn voting_power<N: Name>(power: i64) -> Result<VotingPower, ProtoError> {
    u64::try_from(power)
        .map_err(|_| ProtoError::malformed::<N>(format!("negative voting power {power}")))
}

pub(crate) fn wire_voting_power<N: Name>(power: VotingPower) -> Result<i64, ProtoError> {
    i64::try_from(power).map_err(|_| {
        ProtoError::unsupported_value::<N>(format!(
            "voting power {power} does not fit in an int64"
        ))
    })
}
