use bytes::Bytes;

use lightlink_core_types::{
    Address, BlockId, Commit, CommitSig, Hash, Height, PartSetHeader, ProtoError, Protobuf,
    Signature, Timestamp,
};
use lightlink_proto::types as raw;

fn block_id(seed: u8) -> BlockId {
    BlockId::new(
        Hash::new([seed; 32]),
        PartSetHeader::new(3, Some(Hash::new([seed.wrapping_add(1); 32]))),
    )
}

fn present_sig(seed: u8) -> CommitSig {
    CommitSig::Commit {
        validator_address: Address::new([seed; 20]),
        timestamp: Timestamp::from_unix_timestamp(1_700_000_000 + i64::from(seed)).unwrap(),
        signature: Signature::from_bytes([seed; 64]),
    }
}

fn nil_sig(seed: u8) -> CommitSig {
    CommitSig::Nil {
        validator_address: Address::new([seed; 20]),
        timestamp: Timestamp::from_unix_timestamp(1_700_000_000 + i64::from(seed)).unwrap(),
        signature: Signature::from_bytes([seed; 64]),
    }
}

fn make_commit(signatures: Vec<CommitSig>) -> Commit {
    Commit::new(Height::new(42), 1, block_id(7), signatures)
}

#[test]
fn round_trip_preserves_everything() {
    let commit = make_commit(vec![
        present_sig(1),
        CommitSig::Absent,
        nil_sig(3),
        present_sig(4),
    ]);

    let decoded = Commit::from_proto(commit.to_proto().unwrap()).unwrap();

    assert_eq!(decoded, commit);
    assert_eq!(decoded.height, Height::new(42));
    assert_eq!(decoded.round, 1);
    assert_eq!(decoded.block_id, block_id(7));
    assert_eq!(decoded.signatures, commit.signatures);
    assert_eq!(decoded.hash(), commit.hash());
    assert_eq!(decoded.bit_array(), commit.bit_array());
}

#[test]
fn forged_wire_caches_are_ignored() {
    let commit = make_commit(vec![present_sig(1), CommitSig::Absent, present_sig(3)]);

    let mut proto = commit.to_proto().unwrap();
    proto.hash = Bytes::from_static(&[0xAA; 32]);
    proto.bit_array = Bytes::from_static(&[0xFF]);

    let decoded = Commit::from_proto(proto).unwrap();

    assert_eq!(decoded.hash(), commit.hash());
    assert_eq!(decoded.bit_array(), commit.bit_array());
    assert_eq!(decoded.bit_array().count_ones(), 2);
}

#[test]
fn wire_caches_hold_the_recomputed_values() {
    let commit = make_commit(vec![present_sig(1), CommitSig::Absent]);

    let proto = commit.to_proto().unwrap();
    assert_eq!(proto.hash.as_ref(), commit.hash().as_bytes());
    assert_eq!(proto.bit_array, commit.bit_array().to_bytes());
}

#[test]
fn permuted_signatures_change_the_hash() {
    let a = make_commit(vec![present_sig(1), present_sig(2)]);
    let b = make_commit(vec![present_sig(2), present_sig(1)]);

    assert_ne!(a.hash(), b.hash());
}

#[test]
fn permuted_presence_changes_the_bitmap() {
    let a = make_commit(vec![CommitSig::Absent, present_sig(2)]);
    let b = make_commit(vec![present_sig(2), CommitSig::Absent]);

    assert_ne!(a.hash(), b.hash());
    assert_ne!(a.bit_array().to_bytes(), b.bit_array().to_bytes());
}

#[test]
fn bitmap_tracks_presence_by_slot() {
    let commit = make_commit(vec![
        present_sig(1),
        CommitSig::Absent,
        nil_sig(3),
        CommitSig::Absent,
    ]);

    let bits = commit.bit_array();
    assert_eq!(bits.len(), 4);
    assert!(bits.get(0));
    assert!(!bits.get(1));
    assert!(bits.get(2), "a nil vote still counts as a present signer");
    assert!(!bits.get(3));
}

#[test]
fn absent_slot_with_payload_is_rejected() {
    let commit = make_commit(vec![present_sig(1)]);

    let mut proto = commit.to_proto().unwrap();
    proto.signatures[0].block_id_flag = raw::BlockIdFlag::Absent.into();

    let err = Commit::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::Malformed { .. }), "{err}");
}

#[test]
fn unknown_flag_is_rejected() {
    let commit = make_commit(vec![CommitSig::Absent]);

    let mut proto = commit.to_proto().unwrap();
    proto.signatures[0].block_id_flag = 0;
    let err = Commit::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::Malformed { .. }), "{err}");

    let mut proto = commit.to_proto().unwrap();
    proto.signatures[0].block_id_flag = 7;
    let err = Commit::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::Malformed { .. }), "{err}");
}

#[test]
fn missing_timestamp_on_present_slot_is_rejected() {
    let commit = make_commit(vec![present_sig(1)]);

    let mut proto = commit.to_proto().unwrap();
    proto.signatures[0].timestamp = None;

    let err = Commit::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::MissingField { .. }), "{err}");
}

#[test]
fn bad_signature_length_is_rejected() {
    let commit = make_commit(vec![present_sig(1)]);

    let mut proto = commit.to_proto().unwrap();
    proto.signatures[0].signature = Bytes::from_static(&[1, 2, 3]);

    let err = Commit::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::Malformed { .. }), "{err}");
}

#[test]
fn non_positive_height_is_rejected() {
    let commit = make_commit(vec![present_sig(1)]);

    for height in [0, -1] {
        let mut proto = commit.to_proto().unwrap();
        proto.height = height;

        let err = Commit::from_proto(proto).unwrap_err();
        assert!(matches!(err, ProtoError::Malformed { .. }), "{err}");
    }
}

#[test]
fn negative_round_is_rejected() {
    let commit = make_commit(vec![present_sig(1)]);

    let mut proto = commit.to_proto().unwrap();
    proto.round = -1;

    let err = Commit::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::Malformed { .. }), "{err}");
}

#[test]
fn missing_block_id_is_rejected() {
    let commit = make_commit(vec![present_sig(1)]);

    let mut proto = commit.to_proto().unwrap();
    proto.block_id = None;

    let err = Commit::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::MissingField { .. }), "{err}");
}

#[test]
fn part_set_header_round_trips_across_widths() {
    let psh = PartSetHeader::new(3, Some(Hash::new([9; 32])));

    let proto = psh.to_proto().unwrap();
    assert_eq!(proto.total, 3);

    let decoded = PartSetHeader::from_proto(proto).unwrap();
    assert_eq!(decoded, psh);

    let zero = PartSetHeader::new(0, None);
    assert!(zero.is_zero());
    assert_eq!(
        PartSetHeader::from_proto(zero.to_proto().unwrap()).unwrap(),
        zero
    );
}

#[test]
fn negative_part_count_is_rejected() {
    let proto = raw::PartSetHeader {
        total: -1,
        hash: Bytes::from_static(&[9; 32]),
    };

    let err = PartSetHeader::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::Malformed { .. }), "{err}");
}

#[test]
fn part_count_above_wire_width_is_rejected() {
    let psh = PartSetHeader::new(u32::MAX, Some(Hash::new([9; 32])));

    let err = psh.to_proto().unwrap_err();
    assert!(matches!(err, ProtoError::UnsupportedValue { .. }), "{err}");
}

#[test]
fn part_count_and_hash_must_be_empty_together() {
    let proto = raw::PartSetHeader {
        total: 3,
        hash: Bytes::new(),
    };
    let err = PartSetHeader::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::Malformed { .. }), "{err}");

    let proto = raw::PartSetHeader {
        total: 0,
        hash: Bytes::from_static(&[9; 32]),
    };
    let err = PartSetHeader::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::Malformed { .. }), "{err}");
}

#[test]
fn block_id_requires_its_part_set_header() {
    let id = block_id(7);

    let mut proto = id.to_proto().unwrap();
    proto.part_set_header = None;

    let err = BlockId::from_proto(proto).unwrap_err();
    assert!(matches!(err, ProtoError::MissingField { .. }), "{err}");
}

#[test]
fn commit_decodes_from_raw_bytes() {
    let commit = make_commit(vec![present_sig(1), nil_sig(2)]);

    let bytes = commit.to_bytes().unwrap();
    let decoded = Commit::from_bytes(&bytes).unwrap();

    assert_eq!(decoded, commit);
}
