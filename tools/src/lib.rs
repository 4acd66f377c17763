//! Inspection and debugging tools for RLS datagrams.
//!
//! This crate backs the `rls-tools` binary:
//!
//! - Inspect header fields and body size of captured datagrams
//! - Decode datagrams into JSON or a readable listing
//! - Encode JSON message descriptions into datagrams
//!
//! # Design Principles
//!
//! - **Same codec as production** - Everything goes through [`codec::RlsCodec`].
//! - **Human-readable output** - Make it easy to see what a peer actually sent.

use std::cmp::Reverse;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use codec::{Coordinate, DecodeError, Limits, Message, ProtocolVersion, RlsCodec};
use glob::{glob_with, MatchOptions, Pattern};
use octets::OctetReader;
use serde::Serialize;
use wire::{check_packet_len, decode_header, FrameHeader};

/// Header-level view of one datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    pub header: FrameHeader,
    pub total_len: usize,
    pub body_len: usize,
    /// Set when the header is valid but the body does not decode.
    pub body_error: Option<DecodeError>,
}

/// Reads the header of `bytes` and checks whether the body decodes.
pub fn inspect_datagram(bytes: &[u8], codec: &RlsCodec) -> Result<InspectReport, DecodeError> {
    let mut reader = OctetReader::new(bytes);
    let header = decode_header(&mut reader, codec.version())?;
    check_packet_len(bytes, codec.limits())?;
    let body_error = codec.decode(bytes).err();
    Ok(InspectReport {
        header,
        total_len: bytes.len(),
        body_len: reader.remaining(),
        body_error,
    })
}

/// Fully decoded datagram, as printed by `rls-tools decode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeOutput {
    pub version: ProtocolVersion,
    pub total_len: usize,
    pub message: Message,
}

pub fn decode_datagram(bytes: &[u8], codec: &RlsCodec) -> Result<DecodeOutput> {
    let message = codec.decode(bytes).context("decode datagram")?;
    Ok(DecodeOutput {
        version: codec.version(),
        total_len: bytes.len(),
        message,
    })
}

/// Parses a JSON [`Message`] and encodes it with `codec`.
pub fn encode_json(json: &str, codec: &RlsCodec) -> Result<Vec<u8>> {
    let message: Message = serde_json::from_str(json).context("parse message json")?;
    Ok(codec.encode(&message))
}

/// Builds a codec from CLI-style overrides on top of the defaults.
///
/// Field bounds not given explicitly are derived from the packet limit.
#[must_use]
pub fn codec_from_overrides(
    version: Option<ProtocolVersion>,
    max_packet_bytes: Option<usize>,
    max_blob_len: Option<usize>,
    max_pdu_ids: Option<usize>,
) -> RlsCodec {
    let base = max_packet_bytes.map_or_else(Limits::default, Limits::for_packet_bytes);
    let limits = Limits {
        max_blob_len: max_blob_len.unwrap_or(base.max_blob_len),
        max_pdu_ids: max_pdu_ids.unwrap_or(base.max_pdu_ids),
        ..base
    };
    RlsCodec::with_limits(version.unwrap_or(ProtocolVersion::CURRENT), limits)
}

/// A datagram file found under an inspected directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatagramFile {
    pub path: PathBuf,
    pub size: u64,
}

/// Lists regular files in `dir` whose names match `pattern` (default `*`).
///
/// Results are ordered by path, or largest first when `largest_first` is set.
pub fn list_datagrams(
    dir: &Path,
    pattern: Option<&str>,
    largest_first: bool,
) -> Result<Vec<DatagramFile>> {
    let pattern = pattern.unwrap_or("*");
    Pattern::new(pattern).context("invalid glob pattern")?;
    let full = format!("{}/{pattern}", Pattern::escape(&dir.to_string_lossy()));
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut files = Vec::new();
    for path in glob_with(&full, options).context("invalid glob pattern")? {
        let path = path.context("walk datagram directory")?;
        let meta = fs::metadata(&path).with_context(|| format!("stat {}", path.display()))?;
        if meta.is_file() {
            files.push(DatagramFile {
                path,
                size: meta.len(),
            });
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    if largest_first {
        files.sort_by_key(|file| Reverse(file.size));
    }
    Ok(files)
}

pub fn format_inspect(report: &InspectReport) -> String {
    let header = &report.header;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "version: {} kind: {} ({}) transaction_id: {}",
        header.version,
        header.kind,
        header.kind.raw(),
        header.transaction_id
    );
    let _ = write!(
        out,
        "total: {} bytes body: {} bytes",
        report.total_len, report.body_len
    );
    if let Some(err) = &report.body_error {
        let _ = write!(out, "\nbody error: {err}");
    }
    out
}

pub fn format_decode_pretty(output: &DecodeOutput) -> String {
    let message = &output.message;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} v{} txn {} ({} bytes)",
        message.kind(),
        output.version,
        message.transaction_id().raw(),
        output.total_len
    );
    match message {
        Message::CellInfoRequest(m) => write_position(&mut out, &m.position),
        Message::HeartBeat(m) => write_position(&mut out, &m.position),
        Message::CellInfoResponse(m) => {
            let carrier = m.cell_id.carrier;
            let mnc = if carrier.is_long_mnc {
                format!("{:03}", carrier.mnc)
            } else {
                format!("{:02}", carrier.mnc)
            };
            let _ = writeln!(
                out,
                "  cell: {:03}-{mnc} nci 0x{:x}",
                carrier.mcc, m.cell_id.cell_id
            );
            let _ = writeln!(out, "  tac: {}", m.tracking_area_code);
            let _ = writeln!(out, "  signal: {} dBm", m.signal_strength_dbm);
            let _ = writeln!(out, "  node: {:?}", m.node_name);
            let _ = write!(out, "  link address: {:?}", m.link_address);
        }
        Message::PduDelivery(m) => {
            let _ = writeln!(out, "  pdu kind: {:?}", m.pdu_kind);
            let _ = writeln!(out, "  pdu: {}", hex(&m.pdu));
            let _ = write!(out, "  payload: {}", hex(&m.payload));
        }
        Message::HeartBeatAck(m) => {
            let _ = write!(out, "  signal: {} dBm", m.signal_strength_dbm);
        }
        Message::PduTransmission(m) => {
            let _ = writeln!(out, "  pdu kind: {:?}", m.pdu_kind);
            let _ = writeln!(out, "  pdu id: {} aux: {}", m.pdu_id, m.aux_value);
            let _ = write!(out, "  pdu: {}", hex(&m.pdu));
        }
        Message::PduTransmissionAck(m) => {
            let _ = write!(out, "  acked ({}): {:?}", m.pdu_ids.len(), m.pdu_ids);
        }
    }
    out
}

fn write_position(out: &mut String, position: &Coordinate) {
    let _ = write!(
        out,
        "  position: ({}, {}, {})",
        position.x, position.y, position.z
    );
}

fn hex(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "(empty)".to_owned();
    }
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}
