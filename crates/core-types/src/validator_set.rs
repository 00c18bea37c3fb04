use core::slice;

use serde::{Deserialize, Serialize};

use lightlink_proto::types as raw;
use lightlink_proto::{Error as ProtoError, Protobuf};

use crate::{convert, merkle, Address, Hash, PublicKey};

/// Voting power held by a validator.
pub type VotingPower = u64;

/// Ceiling on the sum of voting power across a set, so that threshold
/// arithmetic on the total can never overflow a signed 64-bit integer.
pub const MAX_TOTAL_VOTING_POWER: VotingPower = (i64::MAX / 8) as VotingPower;

/// A consensus participant: a public key and its voting power.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub address: Address,
    pub public_key: PublicKey,
    pub voting_power: VotingPower,
    pub proposer_priority: i64,
}

impl Validator {
    pub fn new(public_key: PublicKey, voting_power: VotingPower) -> Self {
        Self {
            address: Address::from_public_key(&public_key),
            public_key,
            voting_power,
            proposer_priority: 0,
        }
    }

    /// The canonical hashing form of this validator, used as a merkle leaf
    /// when deriving the validator-set hash.
    fn canonical_bytes(&self) -> Vec<u8> {
        use prost::Message;

        let simple = raw::SimpleValidator {
            pub_key: Some(raw::PublicKey {
                sum: Some(raw::public_key::Sum::Ed25519(
                    self.public_key.as_bytes().to_vec().into(),
                )),
            }),
            // powers above the wire ceiling cannot appear in a validated set
            voting_power: i64::try_from(self.voting_power).unwrap_or(i64::MAX),
        };

        simple.encode_to_vec()
    }
}

impl PartialOrd for Validator {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Validator {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.address.cmp(&other.address)
    }
}

impl Protobuf for Validator {
    type Proto = raw::Validator;

    fn from_proto(proto: Self::Proto) -> Result<Self, ProtoError> {
        let pub_key = proto
            .pub_key
            .ok_or_else(|| ProtoError::missing_field::<Self::Proto>("pub_key"))?;
        let public_key = PublicKey::from_proto(pub_key)?;

        // The address is derived from the public key, never taken on faith.
        // A wire address that disagrees with the key is malformed input.
        let address = Address::from_public_key(&public_key);
        if !proto.address.is_empty() && proto.address.as_ref() != address.as_ref() {
            return Err(ProtoError::malformed::<Self::Proto>(
                "validator address does not match its public key",
            ));
        }

        Ok(Self {
            address,
            public_key,
            voting_power: convert::voting_power::<Self::Proto>(proto.voting_power)?,
            proposer_priority: proto.proposer_priority,
        })
    }

    fn to_proto(&self) -> Result<Self::Proto, ProtoError> {
        Ok(raw::Validator {
            address: self.address.as_ref().to_vec().into(),
            pub_key: Some(self.public_key.to_proto()?),
            voting_power: convert::wire_voting_power::<Self::Proto>(self.voting_power)?,
            proposer_priority: self.proposer_priority,
        })
    }
}

/// A validator set: the ordered collection of consensus participants at a
/// given height, with one of them designated as the proposer.
///
/// The proposer is held by identity (its address) and resolved by lookup, so
/// copying or reordering the set cannot silently dangle the relation. The
/// total voting power is always the recomputed sum over the validators; it
/// is never stored and never taken from the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorSet {
    validators: Vec<Validator>,
    proposer: Option<Address>,
}

impl ValidatorSet {
    /// Create a new validator set, sorted into the canonical order:
    /// first by voting power (descending), then by address (ascending).
    pub fn new(
        validators: impl IntoIterator<Item = Validator>,
        proposer: Option<Address>,
    ) -> Self {
        let mut validators: Vec<_> = validators.into_iter().collect();
        Self::sort_validators(&mut validators);

        Self {
            validators,
            proposer,
        }
    }

    /// Get the number of validators in the set
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Iterate over the validators in the set
    pub fn iter(&self) -> slice::Iter<'_, Validator> {
        self.validators.iter()
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// The total voting power of the validator set, recomputed from the
    /// validators on every call.
    pub fn total_voting_power(&self) -> VotingPower {
        self.validators.iter().map(|v| v.voting_power).sum()
    }

    /// The designated proposer, resolved by address lookup.
    pub fn proposer(&self) -> Option<&Validator> {
        self.proposer
            .as_ref()
            .and_then(|addr| self.get_by_address(addr))
    }

    pub fn proposer_address(&self) -> Option<&Address> {
        self.proposer.as_ref()
    }

    /// Get a validator by its index
    pub fn get_by_index(&self, index: usize) -> Option<&Validator> {
        self.validators.get(index)
    }

    /// Get a validator by its address
    pub fn get_by_address(&self, address: &Address) -> Option<&Validator> {
        self.validators.iter().find(|v| &v.address == address)
    }

    pub fn get_by_public_key(&self, public_key: &PublicKey) -> Option<&Validator> {
        self.validators.iter().find(|v| &v.public_key == public_key)
    }

    pub fn get_keys(&self) -> Vec<PublicKey> {
        self.validators.iter().map(|v| v.public_key).collect()
    }

    /// The merkle root over the canonical encodings of the validators, in
    /// set order. Headers commit to validator sets through this hash.
    pub fn hash(&self) -> Hash {
        let leaves: Vec<Vec<u8>> = self
            .validators
            .iter()
            .map(Validator::canonical_bytes)
            .collect();

        merkle::root_hash(&leaves)
    }

    /// In place sort and deduplication of a list of validators
    fn sort_validators(vals: &mut Vec<Validator>) {
        use core::cmp::Reverse;

        // first by validator power descending, then by address ascending
        vals.sort_unstable_by(|v1, v2| {
            let a = (Reverse(v1.voting_power), &v1.address);
            let b = (Reverse(v2.voting_power), &v2.address);
            a.cmp(&b)
        });

        vals.dedup();
    }

    /// The recomputed sum of the validators' voting power, checked against
    /// overflow and the engine's ceiling.
    fn checked_total_voting_power(validators: &[Validator]) -> Result<VotingPower, ProtoError> {
        let total = validators
            .iter()
            .try_fold(0, |acc: VotingPower, v| acc.checked_add(v.voting_power))
            .filter(|total| *total <= MAX_TOTAL_VOTING_POWER)
            .ok_or_else(|| {
                ProtoError::unsupported_value::<raw::ValidatorSet>(format!(
                    "total voting power exceeds the ceiling of {MAX_TOTAL_VOTING_POWER}"
                ))
            })?;

        Ok(total)
    }
}

impl Protobuf for ValidatorSet {
    type Proto = raw::ValidatorSet;

    fn from_proto(proto: Self::Proto) -> Result<Self, ProtoError> {
        // Wire order is preserved as-is; this is a conversion, not a re-sort.
        let validators = proto
            .validators
            .into_iter()
            .map(Validator::from_proto)
            .collect::<Result<Vec<_>, _>>()?;

        // The wire `total_voting_power` field is untrusted and ignored; the
        // total is recomputed from the validators themselves.
        Self::checked_total_voting_power(&validators)?;

        let proposer = match proto.proposer {
            None => None,
            Some(p) => {
                let proposer = Validator::from_proto(p)?;
                if !validators.iter().any(|v| v.address == proposer.address) {
                    return Err(ProtoError::malformed::<Self::Proto>(
                        "proposer is not a member of the validator set",
                    ));
                }
                Some(proposer.address)
            }
        };

        Ok(Self {
            validators,
            proposer,
        })
    }

    fn to_proto(&self) -> Result<Self::Proto, ProtoError> {
        let validators = self
            .validators
            .iter()
            .map(Validator::to_proto)
            .collect::<Result<Vec<_>, _>>()?;

        // The proposer is written by identity, not index.
        let proposer = match &self.proposer {
            None => None,
            Some(addr) => {
                let validator = self.get_by_address(addr).ok_or_else(|| {
                    ProtoError::malformed::<Self::Proto>(
                        "designated proposer is not a member of the validator set",
                    )
                })?;
                Some(validator.to_proto()?)
            }
        };

        let total = Self::checked_total_voting_power(&self.validators)?;

        Ok(raw::ValidatorSet {
            validators,
            proposer,
            total_voting_power: convert::wire_voting_power::<Self::Proto>(total)?,
        })
    }
}

impl Serialize for ValidatorSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct ValidatorSet<'a> {
            validators: &'a [Validator],
            proposer: &'a Option<Address>,
        }

        let vs = ValidatorSet {
            validators: &self.validators,
            proposer: &self.proposer,
        };

        vs.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidatorSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct ValidatorSet {
            validators: Vec<Validator>,
            proposer: Option<Address>,
        }

        ValidatorSet::deserialize(deserializer).map(|vs| Self::new(vs.validators, vs.proposer))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    use crate::PrivateKey;

    #[test]
    fn new_validator_set_vp() {
        let mut rng = StdRng::seed_from_u64(0x42);

        let sk1 = PrivateKey::generate(&mut rng);
        let sk2 = PrivateKey::generate(&mut rng);
        let sk3 = PrivateKey::generate(&mut rng);

        let v1 = Validator::new(sk1.public_key(), 1);
        let v2 = Validator::new(sk2.public_key(), 2);
        let v3 = Validator::new(sk3.public_key(), 3);

        let vs = ValidatorSet::new(vec![v1, v2, v3], None);
        assert_eq!(vs.total_voting_power(), 6);
    }

    #[test]
    fn canonical_order() {
        let mut rng = StdRng::seed_from_u64(0x42);

        let v1 = Validator::new(PrivateKey::generate(&mut rng).public_key(), 5);
        let v2 = Validator::new(PrivateKey::generate(&mut rng).public_key(), 10);
        let v3 = Validator::new(PrivateKey::generate(&mut rng).public_key(), 10);

        let vs = ValidatorSet::new(vec![v1.clone(), v2.clone(), v3.clone()], None);

        // power descending, ties broken by ascending address
        let powers: Vec<_> = vs.iter().map(|v| v.voting_power).collect();
        assert_eq!(powers, vec![10, 10, 5]);

        let tied: Vec<_> = vs.validators()[..2].iter().map(|v| v.address).collect();
        assert!(tied[0] < tied[1]);

        assert_eq!(vs.get_by_address(&v1.address), Some(&v1));
    }

    #[test]
    fn proposer_resolved_by_identity() {
        let mut rng = StdRng::seed_from_u64(0x42);

        let v1 = Validator::new(PrivateKey::generate(&mut rng).public_key(), 1);
        let v2 = Validator::new(PrivateKey::generate(&mut rng).public_key(), 2);

        let vs = ValidatorSet::new(vec![v1.clone(), v2], Some(v1.address));
        assert_eq!(vs.proposer(), Some(&v1));
        assert_eq!(vs.proposer_address(), Some(&v1.address));
    }
}
