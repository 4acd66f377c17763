use octets::{OctetReader, OctetWriter};
use proptest::prelude::*;
use wire::{
    decode_header, encode_header, peek_header, DecodeError, FrameHeader, Limits, MessageKind,
    ProtocolVersion, HEADER_SIZE,
};

fn kind_strategy() -> impl Strategy<Value = MessageKind> {
    prop::sample::select(MessageKind::ALL.to_vec())
}

fn version_strategy() -> impl Strategy<Value = ProtocolVersion> {
    any::<[u8; 3]>().prop_map(ProtocolVersion::from_bytes)
}

proptest! {
    #[test]
    fn prop_header_roundtrip(
        version in version_strategy(),
        kind in kind_strategy(),
        transaction_id in any::<u64>(),
    ) {
        let header = FrameHeader { version, kind, transaction_id };
        let mut writer = OctetWriter::new();
        encode_header(&header, &mut writer);
        let bytes = writer.finish();
        prop_assert_eq!(bytes.len(), HEADER_SIZE);

        let mut reader = OctetReader::new(&bytes);
        prop_assert_eq!(decode_header(&mut reader, version).unwrap(), header);
    }

    #[test]
    fn prop_foreign_version_always_rejected(
        sender in version_strategy(),
        receiver in version_strategy(),
        kind in kind_strategy(),
    ) {
        prop_assume!(sender != receiver);
        let mut writer = OctetWriter::new();
        encode_header(&FrameHeader { version: sender, kind, transaction_id: 7 }, &mut writer);
        let bytes = writer.finish();

        let err = peek_header(&bytes, receiver, &Limits::default()).unwrap_err();
        prop_assert_eq!(err, DecodeError::VersionMismatch { expected: receiver, found: sender });
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..32)) {
        let _ = peek_header(&data, ProtocolVersion::CURRENT, &Limits::for_testing());
    }
}
