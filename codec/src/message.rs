//! RLS message variants.

use wire::MessageKind;

use crate::types::{Coordinate, GlobalCellIdentity, PduKind, TransactionId};

/// UE asks nearby cells to identify themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellInfoRequest {
    pub transaction_id: TransactionId,
    pub position: Coordinate,
}

/// gNB describes itself in answer to a [`CellInfoRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellInfoResponse {
    pub transaction_id: TransactionId,
    pub cell_id: GlobalCellIdentity,
    pub tracking_area_code: i32,
    pub signal_strength_dbm: i32,
    pub node_name: String,
    /// Address the UE should use for the data link.
    pub link_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PduDelivery {
    pub transaction_id: TransactionId,
    pub pdu_kind: PduKind,
    pub pdu: Vec<u8>,
    pub payload: Vec<u8>,
}

/// Periodic UE liveness and position report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeartBeat {
    pub transaction_id: TransactionId,
    pub position: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeartBeatAck {
    pub transaction_id: TransactionId,
    /// Simulated signal strength the gNB computed for the sender.
    pub signal_strength_dbm: i32,
}

/// PDU sent under the reliability layer; answered by [`PduTransmissionAck`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PduTransmission {
    pub transaction_id: TransactionId,
    pub pdu_kind: PduKind,
    pub pdu_id: u32,
    /// Kind-specific value (e.g. the RRC channel or PDU session id).
    pub aux_value: u32,
    pub pdu: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PduTransmissionAck {
    pub transaction_id: TransactionId,
    /// Acknowledged ids in the order they were received. Not sorted or
    /// de-duplicated.
    pub pdu_ids: Vec<u32>,
}

/// Any RLS message.
///
/// Each variant owns all of its data; nothing borrows from the decoded buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Message {
    CellInfoRequest(CellInfoRequest),
    CellInfoResponse(CellInfoResponse),
    PduDelivery(PduDelivery),
    HeartBeat(HeartBeat),
    HeartBeatAck(HeartBeatAck),
    PduTransmission(PduTransmission),
    PduTransmissionAck(PduTransmissionAck),
}

impl Message {
    /// Returns the wire kind of this message.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::CellInfoRequest(_) => MessageKind::CellInfoRequest,
            Self::CellInfoResponse(_) => MessageKind::CellInfoResponse,
            Self::PduDelivery(_) => MessageKind::PduDelivery,
            Self::HeartBeat(_) => MessageKind::HeartBeat,
            Self::HeartBeatAck(_) => MessageKind::HeartBeatAck,
            Self::PduTransmission(_) => MessageKind::PduTransmission,
            Self::PduTransmissionAck(_) => MessageKind::PduTransmissionAck,
        }
    }

    /// Returns the transaction id carried in the header.
    #[must_use]
    pub const fn transaction_id(&self) -> TransactionId {
        match self {
            Self::CellInfoRequest(m) => m.transaction_id,
            Self::CellInfoResponse(m) => m.transaction_id,
            Self::PduDelivery(m) => m.transaction_id,
            Self::HeartBeat(m) => m.transaction_id,
            Self::HeartBeatAck(m) => m.transaction_id,
            Self::PduTransmission(m) => m.transaction_id,
            Self::PduTransmissionAck(m) => m.transaction_id,
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Message {
                fn from(message: $variant) -> Self {
                    Self::$variant(message)
                }
            }
        )*
    };
}

impl_from_variant!(
    CellInfoRequest,
    CellInfoResponse,
    PduDelivery,
    HeartBeat,
    HeartBeatAck,
    PduTransmission,
    PduTransmissionAck,
);
