//! Frame header types and constants.

use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;

/// Leading byte of every RLS frame.
///
/// Retained for compatibility with older RLS deployments; it must be emitted
/// by every encoder and checked by every decoder.
pub const COMPAT_MARKER: u8 = 0x03;

/// Header size in bytes (13 total).
pub const HEADER_SIZE: usize = 1 + 3 + 1 + 8;

/// Protocol version of the build that produced a frame.
///
/// Decoders accept only frames whose version equals their own exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtocolVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl ProtocolVersion {
    /// Version spoken by this release.
    pub const CURRENT: Self = Self::new(3, 2, 6);

    /// Creates a version triple.
    #[must_use]
    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns the three header bytes in wire order.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.major, self.minor, self.patch]
    }

    /// Builds a version from the three header bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Error returned when a `MAJOR.MINOR.PATCH` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVersionError {
    input: String,
}

impl fmt::Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid protocol version {:?}, expected MAJOR.MINOR.PATCH with each part in 0..=255",
            self.input
        )
    }
}

impl std::error::Error for ParseVersionError {}

impl FromStr for ProtocolVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError {
            input: s.to_owned(),
        };
        let mut parts = s.trim().split('.');
        let mut next = || -> Result<u8, ParseVersionError> {
            parts.next().ok_or_else(&err)?.parse().map_err(|_| err())
        };
        let version = Self::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(version)
    }
}

/// Message kind tags.
///
/// Tag `0` is reserved and never produced or accepted. The values are fixed
/// by deployed peers and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MessageKind {
    CellInfoRequest = 1,
    CellInfoResponse = 2,
    PduDelivery = 3,
    HeartBeat = 4,
    HeartBeatAck = 5,
    PduTransmission = 6,
    PduTransmissionAck = 7,
}

impl MessageKind {
    /// Every kind, in tag order.
    pub const ALL: [Self; 7] = [
        Self::CellInfoRequest,
        Self::CellInfoResponse,
        Self::PduDelivery,
        Self::HeartBeat,
        Self::HeartBeatAck,
        Self::PduTransmission,
        Self::PduTransmissionAck,
    ];

    /// Parses a message kind from a raw byte.
    pub const fn parse(tag: u8) -> Result<Self, DecodeError> {
        match tag {
            1 => Ok(Self::CellInfoRequest),
            2 => Ok(Self::CellInfoResponse),
            3 => Ok(Self::PduDelivery),
            4 => Ok(Self::HeartBeat),
            5 => Ok(Self::HeartBeatAck),
            6 => Ok(Self::PduTransmission),
            7 => Ok(Self::PduTransmissionAck),
            _ => Err(DecodeError::UnknownMessageKind { kind: tag }),
        }
    }

    /// Returns the raw tag byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Returns the protocol name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CellInfoRequest => "CELL_INFO_REQUEST",
            Self::CellInfoResponse => "CELL_INFO_RESPONSE",
            Self::PduDelivery => "PDU_DELIVERY",
            Self::HeartBeat => "HEARTBEAT",
            Self::HeartBeatAck => "HEARTBEAT_ACK",
            Self::PduTransmission => "PDU_TRANSMISSION",
            Self::PduTransmissionAck => "PDU_TRANSMISSION_ACK",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for MessageKind {
    type Error = DecodeError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::parse(tag)
    }
}

impl From<MessageKind> for u8 {
    fn from(kind: MessageKind) -> Self {
        kind.raw()
    }
}

/// Frame header.
///
/// This struct represents the header fields *after* the compatibility marker.
/// The marker is validated separately during decoding and is not stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameHeader {
    /// Version of the sender.
    pub version: ProtocolVersion,
    /// Kind of the body that follows.
    pub kind: MessageKind,
    /// Caller-assigned correlator, carried verbatim.
    pub transaction_id: u64,
}

impl FrameHeader {
    /// Creates a header for the current protocol version.
    #[must_use]
    pub const fn new(kind: MessageKind, transaction_id: u64) -> Self {
        Self {
            version: ProtocolVersion::CURRENT,
            kind,
            transaction_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_is_legacy_three() {
        assert_eq!(COMPAT_MARKER, 3);
    }

    #[test]
    fn header_size_is_correct() {
        // marker(1) + version(3) + kind(1) + transaction_id(8)
        assert_eq!(HEADER_SIZE, 13);
    }

    #[test]
    fn version_bytes_roundtrip() {
        let version = ProtocolVersion::new(3, 2, 6);
        assert_eq!(version.to_bytes(), [3, 2, 6]);
        assert_eq!(ProtocolVersion::from_bytes([3, 2, 6]), version);
    }

    #[test]
    fn version_default_is_current() {
        assert_eq!(ProtocolVersion::default(), ProtocolVersion::CURRENT);
    }

    #[test]
    fn version_display_and_parse() {
        let version = ProtocolVersion::new(1, 20, 255);
        assert_eq!(version.to_string(), "1.20.255");
        assert_eq!("1.20.255".parse::<ProtocolVersion>().unwrap(), version);
    }

    #[test]
    fn version_parse_rejects_malformed() {
        for input in ["", "1.2", "1.2.3.4", "1.2.256", "a.b.c", "1..3"] {
            assert!(
                input.parse::<ProtocolVersion>().is_err(),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn kind_tags_are_stable() {
        let tags: Vec<u8> = MessageKind::ALL.iter().map(|k| k.raw()).collect();
        assert_eq!(tags, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn kind_parse_roundtrip() {
        for kind in MessageKind::ALL {
            assert_eq!(MessageKind::parse(kind.raw()), Ok(kind));
            assert_eq!(MessageKind::try_from(u8::from(kind)), Ok(kind));
        }
    }

    #[test]
    fn kind_parse_rejects_reserved_and_unknown() {
        assert_eq!(
            MessageKind::parse(0),
            Err(DecodeError::UnknownMessageKind { kind: 0 })
        );
        assert_eq!(
            MessageKind::parse(0xFF),
            Err(DecodeError::UnknownMessageKind { kind: 0xFF })
        );
    }

    #[test]
    fn kind_display_uses_protocol_name() {
        assert_eq!(
            MessageKind::PduTransmissionAck.to_string(),
            "PDU_TRANSMISSION_ACK"
        );
    }

    #[test]
    fn header_new_uses_current_version() {
        let header = FrameHeader::new(MessageKind::HeartBeat, 42);
        assert_eq!(header.version, ProtocolVersion::CURRENT);
        assert_eq!(header.kind, MessageKind::HeartBeat);
        assert_eq!(header.transaction_id, 42);
    }

    #[test]
    fn header_const_constructible() {
        const HEADER: FrameHeader = FrameHeader::new(MessageKind::HeartBeatAck, 0);
        assert_eq!(HEADER.transaction_id, 0);
    }
}
