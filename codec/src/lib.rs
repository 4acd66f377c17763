//! Message encoding/decoding for the RLS link-simulation protocol.
//!
//! RLS carries cell discovery, heartbeats and higher-layer PDUs between a
//! simulated gNB and a simulated UE. This crate ties together `octets` and
//! `wire` to turn [`Message`] values into datagrams and back.
//!
//! # Features
//!
//! - One sum type with a variant per message kind
//! - Exact-version gating with the version injected through [`RlsCodec`]
//! - Typed decode failures ([`DecodeError`]) instead of a single "no message"
//! - Length and count fields bounded by [`Limits`] before any allocation
//!
//! # Design Principles
//!
//! - **All-or-nothing decoding** - A frame either yields a whole message or an error.
//! - **No shared state** - Encode and decode are pure functions of their inputs.
//! - **Owned results** - Decoded messages never borrow from the input buffer.
//!
//! # Example
//!
//! ```
//! use codec::{Coordinate, HeartBeat, Message, RlsCodec, TransactionId};
//!
//! let codec = RlsCodec::default();
//! let message = Message::from(HeartBeat {
//!     transaction_id: TransactionId::new(12345),
//!     position: Coordinate::new(100, 200, 0),
//! });
//!
//! let bytes = codec.encode(&message);
//! assert_eq!(codec.decode(&bytes).unwrap(), message);
//! ```

mod config;
mod decode;
mod encode;
mod message;
mod types;

pub use config::RlsCodec;
pub use decode::decode_message;
pub use encode::{encode_message, encode_message_into, encoded_len};
pub use message::{
    CellInfoRequest, CellInfoResponse, HeartBeat, HeartBeatAck, Message, PduDelivery,
    PduTransmission, PduTransmissionAck,
};
pub use types::{CarrierIdentity, Coordinate, GlobalCellIdentity, PduKind, TransactionId};
pub use wire::{DecodeError, LengthKind, Limits, MessageKind, ProtocolVersion};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, DecodeError>;
