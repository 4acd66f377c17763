//! Octet reader with bounded operations.

use crate::error::{OctetError, OctetResult};

/// Size of the length prefix in front of every blob.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// A cursor over a borrowed byte slice for decoding big-endian fields.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input and never allocates more than
/// the bytes actually present in the slice.
#[derive(Debug, Clone)]
pub struct OctetReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> OctetReader<'a> {
    /// Creates a new `OctetReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> OctetResult<u8> {
        let [value] = self.read_array::<1>()?;
        Ok(value)
    }

    /// Reads a single byte as a boolean.
    ///
    /// Any nonzero byte is `true`. Writers only ever emit `0` or `1`.
    pub fn read_bool(&mut self) -> OctetResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16(&mut self) -> OctetResult<u16> {
        self.read_array().map(u16::from_be_bytes)
    }

    /// Reads a big-endian `u32`.
    pub fn read_u32(&mut self) -> OctetResult<u32> {
        self.read_array().map(u32::from_be_bytes)
    }

    /// Reads a big-endian two's complement `i32`.
    pub fn read_i32(&mut self) -> OctetResult<i32> {
        self.read_array().map(i32::from_be_bytes)
    }

    /// Reads a big-endian `u64`.
    pub fn read_u64(&mut self) -> OctetResult<u64> {
        self.read_array().map(u64::from_be_bytes)
    }

    /// Reads exactly `N` bytes.
    pub fn read_array<const N: usize>(&mut self) -> OctetResult<[u8; N]> {
        let bytes = self.read_slice(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads exactly `len` bytes without copying.
    pub fn read_slice(&mut self, len: usize) -> OctetResult<&'a [u8]> {
        self.ensure_bytes(len)?;
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Reads a length-prefixed blob.
    ///
    /// The 4-byte length is checked against `max_len` first and against the
    /// remaining input second; nothing is allocated until both checks pass.
    ///
    /// # Errors
    ///
    /// Returns [`OctetError::LengthExceeded`] if the declared length is above
    /// `max_len`, and [`OctetError::Truncated`] if fewer bytes remain than
    /// the prefix or the declared length requires.
    pub fn read_blob(&mut self, max_len: usize) -> OctetResult<Vec<u8>> {
        self.read_blob_slice(max_len).map(<[u8]>::to_vec)
    }

    /// Reads a length-prefixed UTF-8 string.
    ///
    /// The length counts bytes, not characters.
    pub fn read_str(&mut self, max_len: usize) -> OctetResult<String> {
        let bytes = self.read_blob_slice(max_len)?;
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_owned()),
            Err(err) => Err(OctetError::InvalidUtf8 {
                valid_up_to: err.valid_up_to(),
            }),
        }
    }

    /// Checks that `count` items of `item_size` bytes each are present.
    ///
    /// Used before allocating a collection whose element count came off the
    /// wire.
    pub fn ensure_items(&self, count: usize, item_size: usize) -> OctetResult<()> {
        let needed = count.saturating_mul(item_size);
        self.ensure_bytes(needed)
    }

    fn read_blob_slice(&mut self, max_len: usize) -> OctetResult<&'a [u8]> {
        let declared = self.read_u32()?;
        let len = usize::try_from(declared).unwrap_or(usize::MAX);
        if len > max_len {
            return Err(OctetError::LengthExceeded {
                length: len,
                limit: max_len,
            });
        }
        self.read_slice(len)
    }

    fn ensure_bytes(&self, bytes: usize) -> OctetResult<()> {
        let available = self.remaining();
        if bytes > available {
            return Err(OctetError::Truncated {
                needed: bytes,
                available,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = OctetReader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = OctetReader::new(&[]);
        let result = reader.read_u8();
        assert_eq!(
            result,
            Err(OctetError::Truncated {
                needed: 1,
                available: 0
            })
        );
    }

    #[test]
    fn read_big_endian_u32() {
        let mut reader = OctetReader::new(&[0x12, 0x34, 0x56, 0x78]);
        assert_eq!(reader.read_u32().unwrap(), 0x1234_5678);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_negative_i32() {
        let mut reader = OctetReader::new(&[0xFF, 0xFF, 0xFF, 0x9C]);
        assert_eq!(reader.read_i32().unwrap(), -100);
    }

    #[test]
    fn read_u64_partial_fails_without_consuming() {
        let mut reader = OctetReader::new(&[1, 2, 3, 4, 5]);
        let err = reader.read_u64().unwrap_err();
        assert_eq!(
            err,
            OctetError::Truncated {
                needed: 8,
                available: 5
            }
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn bool_is_lenient() {
        let mut reader = OctetReader::new(&[0x00, 0x01, 0x7F, 0xFF]);
        assert!(!reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
    }

    #[test]
    fn read_blob() {
        let mut reader = OctetReader::new(&[0, 0, 0, 3, 0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(reader.read_blob(16).unwrap(), vec![0xAA, 0xBB, 0xCC]);
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn read_empty_blob() {
        let mut reader = OctetReader::new(&[0, 0, 0, 0]);
        assert!(reader.read_blob(0).unwrap().is_empty());
        assert!(reader.is_empty());
    }

    #[test]
    fn blob_length_over_limit() {
        let mut reader = OctetReader::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
        let err = reader.read_blob(1024).unwrap_err();
        assert_eq!(
            err,
            OctetError::LengthExceeded {
                length: 0xFFFF_FFFF,
                limit: 1024
            }
        );
    }

    #[test]
    fn blob_length_over_remaining() {
        let mut reader = OctetReader::new(&[0, 0, 0, 10, 1, 2]);
        let err = reader.read_blob(1024).unwrap_err();
        assert_eq!(
            err,
            OctetError::Truncated {
                needed: 10,
                available: 2
            }
        );
    }

    #[test]
    fn read_str_multibyte() {
        let text = "π-cell";
        let mut bytes = vec![0, 0, 0, 7];
        bytes.extend_from_slice(text.as_bytes());
        let mut reader = OctetReader::new(&bytes);
        assert_eq!(reader.read_str(64).unwrap(), text);
    }

    #[test]
    fn read_str_invalid_utf8() {
        let mut reader = OctetReader::new(&[0, 0, 0, 3, b'a', 0xC3, 0x28]);
        let err = reader.read_str(64).unwrap_err();
        assert_eq!(err, OctetError::InvalidUtf8 { valid_up_to: 1 });
    }

    #[test]
    fn ensure_items_saturates() {
        let reader = OctetReader::new(&[0; 8]);
        assert!(reader.ensure_items(2, 4).is_ok());
        assert!(matches!(
            reader.ensure_items(usize::MAX, 4),
            Err(OctetError::Truncated { .. })
        ));
    }
}
