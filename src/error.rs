//! Decode error taxonomy.
//!
//! Every validation step produces its own variant directly; callers
//! classify by matching, never by inspecting message text.

use thiserror::Error;

/// The input string is not a valid hexadecimal byte encoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The string cannot split into 2-character byte groups.
    #[error("hex string has odd length ({len} characters)")]
    OddLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// A character outside `0-9a-fA-F`.
    #[error("invalid hex digit {found:?} at position {index}")]
    InvalidDigit {
        /// The offending character.
        found: char,
        /// Offset of the character in the input string.
        index: usize,
    },
}

/// The decoded byte sequence is too small for the SID layout it claims.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LengthError {
    /// Fewer bytes than the fixed 8-byte SID header.
    #[error("SID data too short: expected at least 8 bytes, got {got} bytes")]
    TooShort {
        /// Number of bytes actually decoded.
        got: usize,
    },
    /// The header is present but the sub-authority region is truncated.
    #[error(
        "SID data incomplete: expected {expected} bytes for {count} sub-authorities, got {got} bytes"
    )]
    Incomplete {
        /// Sub-authority count claimed by the header.
        count: u8,
        /// Byte length implied by that count.
        expected: usize,
        /// Number of bytes actually decoded.
        got: usize,
    },
}

/// Any failure produced by [`SidComponents::from_hex`].
///
/// [`SidComponents::from_hex`]: crate::SidComponents::from_hex
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is not valid hex.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The decoded bytes do not hold a complete SID.
    #[error(transparent)]
    Length(#[from] LengthError),
}
