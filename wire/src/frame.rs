//! Frame header encoding and validation.

use octets::{OctetReader, OctetWriter};

use crate::error::{DecodeError, LengthKind, WireResult};
use crate::header::{FrameHeader, MessageKind, ProtocolVersion, COMPAT_MARKER};
use crate::limits::Limits;

/// Writes the compatibility marker and the header fields.
pub fn encode_header(header: &FrameHeader, out: &mut OctetWriter) {
    out.write_u8(COMPAT_MARKER);
    out.write_bytes(&header.version.to_bytes());
    out.write_u8(header.kind.raw());
    out.write_u64(header.transaction_id);
}

/// Rejects buffers larger than the configured packet limit.
pub fn check_packet_len(buf: &[u8], limits: &Limits) -> WireResult<()> {
    if buf.len() > limits.max_packet_bytes {
        return Err(DecodeError::InvalidLength {
            kind: LengthKind::Packet,
            length: buf.len(),
            limit: limits.max_packet_bytes,
        });
    }
    Ok(())
}

/// Reads and validates a frame header, leaving the reader at the body.
///
/// Checks run in wire order: marker, then version (exact match against
/// `expected`), then kind. The kind is rejected as soon as its byte is read,
/// before the transaction id.
pub fn decode_header(
    reader: &mut OctetReader<'_>,
    expected: ProtocolVersion,
) -> WireResult<FrameHeader> {
    let marker = reader.read_u8()?;
    if marker != COMPAT_MARKER {
        return Err(DecodeError::IncompatibleFraming { found: marker });
    }

    let version = ProtocolVersion::from_bytes(reader.read_array()?);
    if version != expected {
        return Err(DecodeError::VersionMismatch {
            expected,
            found: version,
        });
    }

    let kind = MessageKind::parse(reader.read_u8()?)?;
    let transaction_id = reader.read_u64()?;

    Ok(FrameHeader {
        version,
        kind,
        transaction_id,
    })
}

/// Validates a buffer's header and size without decoding the body.
///
/// Header errors take precedence over the packet size limit.
pub fn peek_header(
    buf: &[u8],
    expected: ProtocolVersion,
    limits: &Limits,
) -> WireResult<FrameHeader> {
    let header = decode_header(&mut OctetReader::new(buf), expected)?;
    check_packet_len(buf, limits)?;
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::HEADER_SIZE;

    fn encoded(header: &FrameHeader) -> Vec<u8> {
        let mut writer = OctetWriter::new();
        encode_header(header, &mut writer);
        writer.finish()
    }

    #[test]
    fn header_layout() {
        let header = FrameHeader {
            version: ProtocolVersion::new(3, 2, 6),
            kind: MessageKind::HeartBeatAck,
            transaction_id: 0x0102_0304_0506_0708,
        };
        let bytes = encoded(&header);
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(
            bytes,
            vec![0x03, 3, 2, 6, 5, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
        );
    }

    #[test]
    fn header_roundtrip() {
        for kind in MessageKind::ALL {
            let header = FrameHeader::new(kind, u64::MAX - u64::from(kind.raw()));
            let bytes = encoded(&header);
            let mut reader = OctetReader::new(&bytes);
            assert_eq!(
                decode_header(&mut reader, ProtocolVersion::CURRENT).unwrap(),
                header
            );
            assert!(reader.is_empty());
        }
    }

    #[test]
    fn wrong_marker_rejected_first() {
        let mut reader = OctetReader::new(&[0x01]);
        assert_eq!(
            decode_header(&mut reader, ProtocolVersion::CURRENT),
            Err(DecodeError::IncompatibleFraming { found: 0x01 })
        );
    }

    #[test]
    fn empty_buffer_is_truncated() {
        let mut reader = OctetReader::new(&[]);
        assert!(matches!(
            decode_header(&mut reader, ProtocolVersion::CURRENT),
            Err(DecodeError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn version_must_match_exactly() {
        let header = FrameHeader::new(MessageKind::HeartBeat, 1);
        let bytes = encoded(&header);
        for expected in [
            ProtocolVersion::new(3, 2, 7),
            ProtocolVersion::new(3, 3, 6),
            ProtocolVersion::new(4, 2, 6),
        ] {
            let mut reader = OctetReader::new(&bytes);
            assert_eq!(
                decode_header(&mut reader, expected),
                Err(DecodeError::VersionMismatch {
                    expected,
                    found: ProtocolVersion::CURRENT,
                })
            );
        }
    }

    #[test]
    fn unknown_kind_rejected_before_transaction_id() {
        let version = ProtocolVersion::CURRENT.to_bytes();
        let bytes = [COMPAT_MARKER, version[0], version[1], version[2], 0xFF];
        let mut reader = OctetReader::new(&bytes);
        assert_eq!(
            decode_header(&mut reader, ProtocolVersion::CURRENT),
            Err(DecodeError::UnknownMessageKind { kind: 0xFF })
        );
    }

    #[test]
    fn peek_rejects_oversized_packet() {
        let mut bytes = encoded(&FrameHeader::new(MessageKind::PduDelivery, 1));
        bytes.resize(4097, 0);
        assert_eq!(
            peek_header(&bytes, ProtocolVersion::CURRENT, &Limits::for_testing()),
            Err(DecodeError::InvalidLength {
                kind: LengthKind::Packet,
                length: 4097,
                limit: 4096,
            })
        );
    }

    #[test]
    fn peek_reports_header_errors_before_size() {
        let mut bytes = vec![0x01];
        bytes.resize(4097, 0);
        assert_eq!(
            peek_header(&bytes, ProtocolVersion::CURRENT, &Limits::for_testing()),
            Err(DecodeError::IncompatibleFraming { found: 0x01 })
        );

        let mut bytes = encoded(&FrameHeader::new(MessageKind::HeartBeat, 1));
        bytes[1] = 9;
        bytes.resize(4097, 0);
        assert!(matches!(
            peek_header(&bytes, ProtocolVersion::CURRENT, &Limits::for_testing()),
            Err(DecodeError::VersionMismatch { .. })
        ));
    }

    #[test]
    fn peek_ignores_body() {
        let mut bytes = encoded(&FrameHeader::new(MessageKind::PduDelivery, 9));
        bytes.extend_from_slice(&[0xFF; 6]);
        let header = peek_header(&bytes, ProtocolVersion::CURRENT, &Limits::default()).unwrap();
        assert_eq!(header.kind, MessageKind::PduDelivery);
        assert_eq!(header.transaction_id, 9);
    }
}
