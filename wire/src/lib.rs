//! Frame header, version gating and decode limits for the RLS codec.
//!
//! This crate handles the fixed part of every RLS frame: the legacy
//! compatibility marker, the sender's protocol version, the message kind and
//! the transaction id. It does not know about message bodies.
//!
//! # Design Principles
//!
//! - **Stable wire format** - Kind tags and header layout never change.
//! - **Exact versioning** - Frames from any other protocol version are rejected.
//! - **Bounded decoding** - All length fields are validated against limits before allocation.
//!
//! # Frame Layout
//!
//! ```text
//! [Marker(1)=0x03] [Major(1)] [Minor(1)] [Patch(1)] [Kind(1)] [TransactionId(8)] [Body(N)]
//! ```

mod error;
mod frame;
mod header;
mod limits;

pub use error::{DecodeError, LengthKind, WireResult};
pub use frame::{check_packet_len, decode_header, encode_header, peek_header};
pub use header::{
    FrameHeader, MessageKind, ParseVersionError, ProtocolVersion, COMPAT_MARKER, HEADER_SIZE,
};
pub use limits::Limits;
