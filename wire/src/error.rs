//! Error types for frame decoding.

use std::fmt;

use octets::OctetError;

use crate::header::ProtocolVersion;

/// Result type for wire operations.
pub type WireResult<T> = Result<T, DecodeError>;

/// Reasons a received buffer could not be decoded into a message.
///
/// Decoding is all-or-nothing: any of these means no message was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Leading compatibility marker is not the expected value.
    IncompatibleFraming { found: u8 },

    /// Sender's protocol version differs from ours.
    VersionMismatch {
        expected: ProtocolVersion,
        found: ProtocolVersion,
    },

    /// Kind tag is not one of the known message kinds.
    UnknownMessageKind { kind: u8 },

    /// Fewer bytes remain than a field requires.
    TruncatedInput { needed: usize, available: usize },

    /// A declared length is above the configured bound.
    InvalidLength {
        kind: LengthKind,
        length: usize,
        limit: usize,
    },

    /// A text field is not valid UTF-8.
    InvalidEncoding { valid_up_to: usize },
}

/// Which bounded length was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthKind {
    /// Whole received buffer.
    Packet,
    /// A length-prefixed blob or text field.
    Blob,
    /// Element count of an acknowledgment list.
    PduIds,
}

impl From<OctetError> for DecodeError {
    fn from(err: OctetError) -> Self {
        match err {
            OctetError::Truncated { needed, available } => {
                Self::TruncatedInput { needed, available }
            }
            OctetError::LengthExceeded { length, limit } => Self::InvalidLength {
                kind: LengthKind::Blob,
                length,
                limit,
            },
            OctetError::InvalidUtf8 { valid_up_to } => Self::InvalidEncoding { valid_up_to },
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompatibleFraming { found } => {
                write!(f, "incompatible framing: marker 0x{found:02X}")
            }
            Self::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "protocol version mismatch: expected {expected}, found {found}"
                )
            }
            Self::UnknownMessageKind { kind } => {
                write!(f, "unknown message kind: {kind}")
            }
            Self::TruncatedInput { needed, available } => {
                write!(f, "truncated input: need {needed} bytes, have {available}")
            }
            Self::InvalidLength {
                kind,
                length,
                limit,
            } => {
                write!(f, "invalid {kind} length: {length} > {limit}")
            }
            Self::InvalidEncoding { valid_up_to } => {
                write!(f, "text field is not utf-8 after {valid_up_to} bytes")
            }
        }
    }
}

impl fmt::Display for LengthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Packet => "packet",
            Self::Blob => "blob",
            Self::PduIds => "pdu id count",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for DecodeError {}
