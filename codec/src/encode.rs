//! Message encoding.

use std::mem;

use octets::{OctetWriter, LENGTH_PREFIX_SIZE};
use wire::{encode_header, FrameHeader, ProtocolVersion, HEADER_SIZE};

use crate::message::Message;
use crate::types::{Coordinate, GlobalCellIdentity};

/// Encodes a message into a new buffer.
///
/// Encoding never fails for a message whose blobs, texts and id list each fit
/// a 32-bit length.
#[must_use]
pub fn encode_message(message: &Message, version: ProtocolVersion) -> Vec<u8> {
    let mut writer = OctetWriter::with_capacity(encoded_len(message));
    write_message(message, version, &mut writer);
    writer.finish()
}

/// Encodes a message directly onto the end of `out`.
pub fn encode_message_into(message: &Message, version: ProtocolVersion, out: &mut Vec<u8>) {
    let mut writer = OctetWriter::from_vec(mem::take(out));
    writer.reserve(encoded_len(message));
    write_message(message, version, &mut writer);
    *out = writer.finish();
}

/// Returns the exact number of bytes [`encode_message`] will produce.
#[must_use]
pub fn encoded_len(message: &Message) -> usize {
    const LEN: usize = LENGTH_PREFIX_SIZE;
    let body = match message {
        Message::CellInfoRequest(_) | Message::HeartBeat(_) => Coordinate::SIZE,
        Message::CellInfoResponse(m) => {
            GlobalCellIdentity::SIZE + 4 + 4 + LEN + m.node_name.len() + LEN + m.link_address.len()
        }
        Message::PduDelivery(m) => 1 + LEN + m.pdu.len() + LEN + m.payload.len(),
        Message::HeartBeatAck(_) => 4,
        Message::PduTransmission(m) => 1 + 4 + 4 + LEN + m.pdu.len(),
        Message::PduTransmissionAck(m) => LEN + 4 * m.pdu_ids.len(),
    };
    HEADER_SIZE + body
}

fn write_message(message: &Message, version: ProtocolVersion, out: &mut OctetWriter) {
    let header = FrameHeader {
        version,
        kind: message.kind(),
        transaction_id: message.transaction_id().raw(),
    };
    encode_header(&header, out);

    match message {
        Message::CellInfoRequest(m) => m.position.encode(out),
        Message::CellInfoResponse(m) => {
            m.cell_id.encode(out);
            out.write_i32(m.tracking_area_code);
            out.write_i32(m.signal_strength_dbm);
            out.write_str(&m.node_name);
            out.write_str(&m.link_address);
        }
        Message::PduDelivery(m) => {
            out.write_u8(m.pdu_kind.raw());
            out.write_blob(&m.pdu);
            out.write_blob(&m.payload);
        }
        Message::HeartBeat(m) => m.position.encode(out),
        Message::HeartBeatAck(m) => out.write_i32(m.signal_strength_dbm),
        Message::PduTransmission(m) => {
            out.write_u8(m.pdu_kind.raw());
            out.write_u32(m.pdu_id);
            out.write_u32(m.aux_value);
            out.write_blob(&m.pdu);
        }
        Message::PduTransmissionAck(m) => {
            out.write_count(m.pdu_ids.len());
            for &pdu_id in &m.pdu_ids {
                out.write_u32(pdu_id);
            }
        }
    }
}
