#![cfg(feature = "serde")]

use codec::{
    CarrierIdentity, CellInfoResponse, GlobalCellIdentity, Message, PduKind, PduTransmission,
    RlsCodec, TransactionId,
};

#[test]
fn message_json_is_tagged_by_kind() {
    let message = Message::from(PduTransmission {
        transaction_id: TransactionId::new(4),
        pdu_kind: PduKind::RRC,
        pdu_id: 17,
        aux_value: 1,
        pdu: vec![0xDE, 0xAD],
    });
    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json["kind"], "pdu_transmission");
    assert_eq!(json["transaction_id"], 4);
    assert_eq!(json["pdu_id"], 17);
}

#[test]
fn json_then_wire_roundtrip() {
    let message = Message::from(CellInfoResponse {
        transaction_id: TransactionId::new(u64::from(u32::MAX) + 1),
        cell_id: GlobalCellIdentity::new(CarrierIdentity::new(1, 1, true), 1),
        tracking_area_code: 7,
        signal_strength_dbm: -42,
        node_name: "π-cell".to_owned(),
        link_address: "10.0.0.1".to_owned(),
    });
    let json = serde_json::to_string(&message).unwrap();
    let parsed: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, message);

    let codec = RlsCodec::default();
    assert_eq!(codec.decode(&codec.encode(&parsed)).unwrap(), message);
}

#[test]
fn unknown_pdu_kind_survives_json() {
    let kind = PduKind::from_raw(0x42);
    let json = serde_json::to_string(&kind).unwrap();
    assert_eq!(json, "66");
    assert_eq!(serde_json::from_str::<PduKind>(&json).unwrap(), kind);
}
