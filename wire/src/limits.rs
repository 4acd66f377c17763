//! Configurable limits for bounded decoding.

use crate::header::HEADER_SIZE;

/// Fixed body bytes around a single full-length blob in the worst case: a
/// cell info response carries a 13-byte cell identity, two `i32` fields and
/// two text length prefixes.
const MAX_BLOB_BODY_OVERHEAD: usize = 13 + 4 + 4 + 4 + 4;

/// Count prefix of the acknowledgement list.
const PDU_IDS_PREFIX: usize = 4;
const PDU_ID_SIZE: usize = 4;

/// Limits enforced while decoding a received frame.
///
/// These bound how much work and memory a single hostile datagram can cause.
/// Encoding ignores them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Maximum size of a received frame in bytes.
    pub max_packet_bytes: usize,

    /// Maximum declared length of a single blob or text field.
    pub max_blob_len: usize,

    /// Maximum number of ids in one `PDU_TRANSMISSION_ACK`.
    pub max_pdu_ids: usize,
}

impl Default for Limits {
    fn default() -> Self {
        // Largest UDP datagram the transport will hand us
        Self::for_packet_bytes(64 * 1024)
    }
}

impl Limits {
    /// Creates limits whose field bounds are reachable inside one packet of
    /// `max_packet_bytes`.
    ///
    /// A blob at exactly `max_blob_len`, or an acknowledgement listing exactly
    /// `max_pdu_ids` ids, still fits after the header and prefixes.
    #[must_use]
    pub const fn for_packet_bytes(max_packet_bytes: usize) -> Self {
        Self {
            max_packet_bytes,
            max_blob_len: max_packet_bytes.saturating_sub(HEADER_SIZE + MAX_BLOB_BODY_OVERHEAD),
            max_pdu_ids: max_packet_bytes.saturating_sub(HEADER_SIZE + PDU_IDS_PREFIX)
                / PDU_ID_SIZE,
        }
    }

    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_packet_bytes: 4096,
            max_blob_len: 1024,
            max_pdu_ids: 64,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    ///
    /// Declared lengths are still checked against the bytes actually present.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_packet_bytes: usize::MAX,
            max_blob_len: usize::MAX,
            max_pdu_ids: usize::MAX,
        }
    }
}
