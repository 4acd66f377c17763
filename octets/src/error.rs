//! Error types for octet operations.

use std::fmt;

/// Result type for octet operations.
pub type OctetResult<T> = Result<T, OctetError>;

/// Errors that can occur while reading octets from an untrusted buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OctetError {
    /// Attempted to read past the end of the buffer.
    Truncated {
        /// Number of bytes requested.
        needed: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A length prefix declared more bytes than the caller allows.
    LengthExceeded {
        /// The declared length.
        length: usize,
        /// Maximum accepted length.
        limit: usize,
    },

    /// A text field did not contain valid UTF-8.
    InvalidUtf8 {
        /// Byte offset within the field where the invalid sequence starts.
        valid_up_to: usize,
    },
}

impl fmt::Display for OctetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { needed, available } => {
                write!(
                    f,
                    "attempted to read {needed} bytes but only {available} bytes available"
                )
            }
            Self::LengthExceeded { length, limit } => {
                write!(f, "declared length {length} exceeds limit {limit}")
            }
            Self::InvalidUtf8 { valid_up_to } => {
                write!(f, "invalid utf-8 after {valid_up_to} bytes")
            }
        }
    }
}

impl std::error::Error for OctetError {}
