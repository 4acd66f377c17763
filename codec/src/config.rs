//! Codec configuration.

use wire::{Limits, ProtocolVersion};

use crate::decode::decode_message;
use crate::encode::{encode_message, encode_message_into};
use crate::message::Message;
use crate::CodecResult;

/// An RLS codec bound to one protocol version and one set of decode limits.
///
/// The codec holds no mutable state; a single value can be shared across
/// threads and used for any number of concurrent calls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RlsCodec {
    version: ProtocolVersion,
    limits: Limits,
}

impl RlsCodec {
    /// Creates a codec for `version` with default limits.
    #[must_use]
    pub fn new(version: ProtocolVersion) -> Self {
        Self::with_limits(version, Limits::default())
    }

    /// Creates a codec for `version` with explicit limits.
    #[must_use]
    pub const fn with_limits(version: ProtocolVersion, limits: Limits) -> Self {
        Self { version, limits }
    }

    #[must_use]
    pub const fn version(&self) -> ProtocolVersion {
        self.version
    }

    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Encodes `message` stamped with this codec's version.
    #[must_use]
    pub fn encode(&self, message: &Message) -> Vec<u8> {
        encode_message(message, self.version)
    }

    /// Encodes `message` and appends it to `out`.
    pub fn encode_into(&self, message: &Message, out: &mut Vec<u8>) {
        encode_message_into(message, self.version, out);
    }

    /// Decodes one frame sent by a peer of the same version.
    pub fn decode(&self, bytes: &[u8]) -> CodecResult<Message> {
        decode_message(bytes, self.version, &self.limits)
    }
}
