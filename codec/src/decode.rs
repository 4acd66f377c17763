//! Message decoding.

use octets::OctetReader;
use tracing::{debug, trace};
use wire::{
    check_packet_len, decode_header, DecodeError, LengthKind, Limits, MessageKind, ProtocolVersion,
};

use crate::message::{
    CellInfoRequest, CellInfoResponse, HeartBeat, HeartBeatAck, Message, PduDelivery,
    PduTransmission, PduTransmissionAck,
};
use crate::types::{Coordinate, GlobalCellIdentity, PduKind, TransactionId};
use crate::CodecResult;

const PDU_ID_SIZE: usize = 4;

/// Decodes one complete frame.
///
/// The buffer is only borrowed for the duration of the call; the returned
/// message owns copies of every field. Bytes after a complete body are
/// ignored.
pub fn decode_message(
    bytes: &[u8],
    version: ProtocolVersion,
    limits: &Limits,
) -> CodecResult<Message> {
    let result = decode_frame(bytes, version, limits);
    match &result {
        Ok(message) => trace!(
            kind = %message.kind(),
            transaction_id = message.transaction_id().raw(),
            len = bytes.len(),
            "decoded rls frame"
        ),
        Err(err) => debug!(error = %err, len = bytes.len(), "rejected rls frame"),
    }
    result
}

fn decode_frame(bytes: &[u8], version: ProtocolVersion, limits: &Limits) -> CodecResult<Message> {
    let mut reader = OctetReader::new(bytes);
    let header = decode_header(&mut reader, version)?;
    check_packet_len(bytes, limits)?;
    let transaction_id = TransactionId::new(header.transaction_id);
    let max_blob = limits.max_blob_len;
    let r = &mut reader;

    let message = match header.kind {
        MessageKind::CellInfoRequest => Message::CellInfoRequest(CellInfoRequest {
            transaction_id,
            position: Coordinate::decode(r)?,
        }),
        MessageKind::CellInfoResponse => Message::CellInfoResponse(CellInfoResponse {
            transaction_id,
            cell_id: GlobalCellIdentity::decode(r)?,
            tracking_area_code: r.read_i32()?,
            signal_strength_dbm: r.read_i32()?,
            node_name: r.read_str(max_blob)?,
            link_address: r.read_str(max_blob)?,
        }),
        MessageKind::PduDelivery => Message::PduDelivery(PduDelivery {
            transaction_id,
            pdu_kind: PduKind::from_raw(r.read_u8()?),
            pdu: r.read_blob(max_blob)?,
            payload: r.read_blob(max_blob)?,
        }),
        MessageKind::HeartBeat => Message::HeartBeat(HeartBeat {
            transaction_id,
            position: Coordinate::decode(r)?,
        }),
        MessageKind::HeartBeatAck => Message::HeartBeatAck(HeartBeatAck {
            transaction_id,
            signal_strength_dbm: r.read_i32()?,
        }),
        MessageKind::PduTransmission => Message::PduTransmission(PduTransmission {
            transaction_id,
            pdu_kind: PduKind::from_raw(r.read_u8()?),
            pdu_id: r.read_u32()?,
            aux_value: r.read_u32()?,
            pdu: r.read_blob(max_blob)?,
        }),
        MessageKind::PduTransmissionAck => Message::PduTransmissionAck(PduTransmissionAck {
            transaction_id,
            pdu_ids: read_pdu_ids(r, limits)?,
        }),
    };
    Ok(message)
}

/// Reads a count-prefixed id list without trusting the count for allocation.
fn read_pdu_ids(reader: &mut OctetReader<'_>, limits: &Limits) -> CodecResult<Vec<u32>> {
    let count = usize::try_from(reader.read_u32()?).unwrap_or(usize::MAX);
    if count > limits.max_pdu_ids {
        return Err(DecodeError::InvalidLength {
            kind: LengthKind::PduIds,
            length: count,
            limit: limits.max_pdu_ids,
        });
    }
    reader.ensure_items(count, PDU_ID_SIZE)?;

    let mut pdu_ids = Vec::with_capacity(count);
    for _ in 0..count {
        pdu_ids.push(reader.read_u32()?);
    }
    Ok(pdu_ids)
}
