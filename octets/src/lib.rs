//! Bounded big-endian octet primitives for the RLS codec.
//!
//! This crate provides [`OctetWriter`] and [`OctetReader`] for fixed-width
//! big-endian integers and length-prefixed blobs.
//! It is designed for bounded, panic-free decoding of untrusted input.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked, and declared lengths
//!   are checked against a caller limit before anything is allocated.
//! - **No domain knowledge** - This crate knows nothing about RLS messages.
//! - **Explicit errors** - All read failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use octets::{OctetReader, OctetWriter};
//!
//! let mut writer = OctetWriter::new();
//! writer.write_u16(310);
//! writer.write_str("gnb-1");
//!
//! let bytes = writer.finish();
//!
//! let mut reader = OctetReader::new(&bytes);
//! assert_eq!(reader.read_u16().unwrap(), 310);
//! assert_eq!(reader.read_str(64).unwrap(), "gnb-1");
//! ```

mod error;
mod reader;
mod writer;

pub use error::{OctetError, OctetResult};
pub use reader::{OctetReader, LENGTH_PREFIX_SIZE};
pub use writer::OctetWriter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let writer = OctetWriter::new();
        let bytes = writer.finish();
        assert!(bytes.is_empty());

        let reader = OctetReader::new(&bytes);
        assert!(reader.is_empty());
    }

    #[test]
    fn mixed_roundtrip() {
        let mut writer = OctetWriter::new();
        writer.write_u8(3);
        writer.write_u16(0xBEEF);
        writer.write_bool(true);
        writer.write_i32(-120);
        writer.write_u64(u64::MAX);
        writer.write_blob(&[1, 2, 3]);
        writer.write_str("");
        let bytes = writer.finish();

        let mut reader = OctetReader::new(&bytes);
        assert_eq!(reader.read_u8().unwrap(), 3);
        assert_eq!(reader.read_u16().unwrap(), 0xBEEF);
        assert!(reader.read_bool().unwrap());
        assert_eq!(reader.read_i32().unwrap(), -120);
        assert_eq!(reader.read_u64().unwrap(), u64::MAX);
        assert_eq!(reader.read_blob(16).unwrap(), vec![1, 2, 3]);
        assert_eq!(reader.read_str(16).unwrap(), "");
        assert!(reader.is_empty());
    }

    #[test]
    fn doctest_example() {
        let mut writer = OctetWriter::new();
        writer.write_u16(310);
        writer.write_str("gnb-1");

        let bytes = writer.finish();

        let mut reader = OctetReader::new(&bytes);
        assert_eq!(reader.read_u16().unwrap(), 310);
        assert_eq!(reader.read_str(64).unwrap(), "gnb-1");
    }
}
