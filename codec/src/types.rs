//! Value types carried inside RLS messages.
//!
//! Each composite type knows its own fixed layout; none of them can fail to
//! decode except by running out of input.

use std::fmt;

use octets::{OctetReader, OctetResult, OctetWriter};

/// Caller-assigned correlator for a message exchange.
///
/// Carried verbatim in every frame header; the codec never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TransactionId(u64);

impl TransactionId {
    /// Creates a new transaction id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for TransactionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<TransactionId> for u64 {
    fn from(id: TransactionId) -> Self {
        id.0
    }
}

/// Simulated position in 3-D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coordinate {
    /// Encoded size in bytes.
    pub const SIZE: usize = 12;

    /// Creates a coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Writes x, y, z as signed 32-bit integers.
    pub fn encode(&self, out: &mut OctetWriter) {
        out.write_i32(self.x);
        out.write_i32(self.y);
        out.write_i32(self.z);
    }

    /// Reads x, y, z.
    pub fn decode(reader: &mut OctetReader<'_>) -> OctetResult<Self> {
        Ok(Self {
            x: reader.read_i32()?,
            y: reader.read_i32()?,
            z: reader.read_i32()?,
        })
    }
}

/// Operator identity (PLMN).
///
/// Digit ranges are not validated; `is_long_mnc` only tells consumers whether
/// to render the network code with three digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarrierIdentity {
    /// Mobile country code.
    pub mcc: u16,
    /// Mobile network code.
    pub mnc: u16,
    /// Whether `mnc` has three digits.
    pub is_long_mnc: bool,
}

impl CarrierIdentity {
    /// Encoded size in bytes.
    pub const SIZE: usize = 5;

    #[must_use]
    pub const fn new(mcc: u16, mnc: u16, is_long_mnc: bool) -> Self {
        Self {
            mcc,
            mnc,
            is_long_mnc,
        }
    }

    pub fn encode(&self, out: &mut OctetWriter) {
        out.write_u16(self.mcc);
        out.write_u16(self.mnc);
        out.write_bool(self.is_long_mnc);
    }

    /// Reads the identity. Any nonzero flag byte means a long MNC.
    pub fn decode(reader: &mut OctetReader<'_>) -> OctetResult<Self> {
        Ok(Self {
            mcc: reader.read_u16()?,
            mnc: reader.read_u16()?,
            is_long_mnc: reader.read_bool()?,
        })
    }
}

/// Globally unique cell identity: operator plus NR cell identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalCellIdentity {
    pub carrier: CarrierIdentity,
    /// NR cell identity (NCI).
    pub cell_id: u64,
}

impl GlobalCellIdentity {
    /// Encoded size in bytes.
    pub const SIZE: usize = CarrierIdentity::SIZE + 8;

    #[must_use]
    pub const fn new(carrier: CarrierIdentity, cell_id: u64) -> Self {
        Self { carrier, cell_id }
    }

    pub fn encode(&self, out: &mut OctetWriter) {
        self.carrier.encode(out);
        out.write_u64(self.cell_id);
    }

    pub fn decode(reader: &mut OctetReader<'_>) -> OctetResult<Self> {
        Ok(Self {
            carrier: CarrierIdentity::decode(reader)?,
            cell_id: reader.read_u64()?,
        })
    }
}

/// Kind of the higher-layer PDU carried by a delivery or transmission.
///
/// Any byte is a valid kind; bytes without a named constant are carried
/// through unchanged.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PduKind(u8);

impl PduKind {
    pub const RESERVED: Self = Self(0);
    /// RRC signalling.
    pub const RRC: Self = Self(1);
    /// User-plane data.
    pub const DATA: Self = Self(2);

    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns the name of a known kind.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("RESERVED"),
            1 => Some("RRC"),
            2 => Some("DATA"),
            _ => None,
        }
    }
}

impl fmt::Debug for PduKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "UNKNOWN(0x{:02x})", self.0),
        }
    }
}

impl From<u8> for PduKind {
    fn from(raw: u8) -> Self {
        Self::from_raw(raw)
    }
}

impl From<PduKind> for u8 {
    fn from(kind: PduKind) -> Self {
        kind.raw()
    }
}
