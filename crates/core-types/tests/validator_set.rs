use rand::rngs::StdRng;
use rand::SeedableRng;

use lightlink_core_types::{
    PrivateKey, ProtoError, Protobuf, Validator, ValidatorSet, MAX_TOTAL_VOTING_POWER,
};

fn make_validators(powers: &[u64]) -> Vec<Validator> {
    let mut rng = StdRng::seed_from_u64(0x42);

    powers
        .iter()
        .map(|power| Validator::new(PrivateKey::generate(&mut rng).public_key(), *power))
        .collect()
}

#[test]
fn round_trip_preserves_order_powers_and_proposer() {
    let validators = make_validators(&[10, 20, 30, 40]);
    let proposer = validators[2].address;
    let vs = ValidatorSet::new(validators, Some(proposer));

    let decoded = ValidatorSet::from_proto(vs.to_proto().unwrap()).unwrap();

    assert_eq!(decoded, vs);
    assert_eq!(
        decoded.validators().to_vec(),
        vs.validators().to_vec(),
        "validator order must survive the round trip"
    );
    assert_eq!(decoded.proposer(), vs.proposer());
    assert_eq!(decoded.total_voting_power(), 100);
}

#[test]
fn wire_total_voting_power_is_never_trusted() {
    let validators = make_validators(&[10, 5]);
    let vs = ValidatorSet::new(validators, None);

    let mut proto = vs.to_proto().unwrap();
    proto.total_voting_power = 9999;

    let decoded = ValidatorSet::from_proto(proto).unwrap();
    assert_eq!(decoded.total_voting_power(), 15);
}

#[test]
fn two_validators_with_proposer() {
    // validators [{A, 10}, {B, 5}], proposer = A
    let validators = make_validators(&[10, 5]);
    let a = validators[0].clone();
    let vs = ValidatorSet::new(validators, Some(a.address));

    assert_eq!(vs.total_voting_power(), 15);
    assert_eq!(vs.proposer().map(|v| v.address), Some(a.address));

    let decoded = ValidatorSet::from_proto(vs.to_proto().unwrap()).unwrap();
    assert_eq!(decoded.total_voting_power(), 15);
    assert_eq!(decoded.proposer().map(|v| v.address), Some(a.address));
}

#[test]
fn foreign_proposer_is_rejected() {
    let validators = make_validators(&[10, 5]);
    let outsider = make_validators(&[1, 1, 7]).pop().unwrap();
    let vs = ValidatorSet::new(validators, None);

    let mut proto = vs.to_proto().unwrap();
    proto.proposer = Some(outsider.to_proto().unwrap());

    let err = ValidatorSet::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::Malformed { .. }), "{err}");
}

#[test]
fn native_foreign_proposer_is_reported_not_defaulted() {
    let validators = make_validators(&[10, 5]);
    let outsider = make_validators(&[1, 1, 7]).pop().unwrap();
    let vs = ValidatorSet::new(validators, Some(outsider.address));

    let err = vs.to_proto().unwrap_err();
    assert!(matches!(err, ProtoError::Malformed { .. }), "{err}");
}

#[test]
fn empty_set_converts() {
    let vs = ValidatorSet::new(vec![], None);
    let decoded = ValidatorSet::from_proto(vs.to_proto().unwrap()).unwrap();

    assert!(decoded.is_empty());
    assert_eq!(decoded.total_voting_power(), 0);
}

#[test]
fn negative_wire_voting_power_is_rejected() {
    let validators = make_validators(&[10]);
    let vs = ValidatorSet::new(validators, None);

    let mut proto = vs.to_proto().unwrap();
    proto.validators[0].voting_power = -1;

    let err = ValidatorSet::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::Malformed { .. }), "{err}");
}

#[test]
fn total_above_ceiling_is_rejected() {
    let mut validators = make_validators(&[1, 1]);
    validators[0].voting_power = MAX_TOTAL_VOTING_POWER;
    validators[1].voting_power = 1;

    let vs = ValidatorSet::new(validators, None);
    let err = vs.to_proto().unwrap_err();
    assert!(matches!(err, ProtoError::UnsupportedValue { .. }), "{err}");
}

#[test]
fn wire_address_must_match_public_key() {
    let validators = make_validators(&[10, 5]);
    let vs = ValidatorSet::new(validators, None);

    let mut proto = vs.to_proto().unwrap();
    // swap the two addresses, keys stay put
    let a = proto.validators[0].address.clone();
    proto.validators[0].address = proto.validators[1].address.clone();
    proto.validators[1].address = a;

    let err = ValidatorSet::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::Malformed { .. }), "{err}");
}

#[test]
fn missing_public_key_is_rejected() {
    let validators = make_validators(&[10]);
    let vs = ValidatorSet::new(validators, None);

    let mut proto = vs.to_proto().unwrap();
    proto.validators[0].pub_key = None;

    let err = ValidatorSet::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::MissingField { .. }), "{err}");
}

#[test]
fn set_hash_depends_on_order_and_power() {
    let validators = make_validators(&[10, 5]);
    let vs = ValidatorSet::new(validators, None);

    // bypass canonical sorting by decoding a reordered wire set
    let mut proto = vs.to_proto().unwrap();
    proto.validators.reverse();
    let reordered = ValidatorSet::from_proto(proto).unwrap();
    assert_ne!(vs.hash(), reordered.hash());

    let mut proto = vs.to_proto().unwrap();
    proto.validators[0].voting_power += 1;
    let boosted = ValidatorSet::from_proto(proto).unwrap();
    assert_ne!(vs.hash(), boosted.hash());
}

#[test]
fn serde_round_trip_restores_canonical_order() {
    let validators = make_validators(&[10, 5, 20]);
    let vs = ValidatorSet::new(validators, None);

    let json = serde_json::to_string(&vs).unwrap();
    let decoded: ValidatorSet = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, vs);
}
