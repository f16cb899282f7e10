//! # Binary SID decoding for Rust
//!
//! Decode a Windows **Security Identifier** (SID) from its raw binary
//! encoding, given as a hexadecimal string, into the canonical
//! `S-R-I-S1-S2-...-Sn` text form. The crate provides:
//! - [`SidComponents`]: the decomposed fields of a SID (revision,
//!   identifier authority, sub-authorities) with binary and hex
//!   constructors and a canonical [`Display`](core::fmt::Display) impl.
//! - [`SidIdentifierAuthority`]: the 6-byte authority component.
//! - [`DecodeError`] with its [`FormatError`] and [`LengthError`]
//!   sub-kinds: each validation step produces its own variant, so callers
//!   classify failures by matching instead of inspecting message text.
//!
//! ## Layout
//! The binary encoding is fixed: byte 0 is the revision, byte 1 the
//! sub-authority count, bytes 2..=7 the big-endian identifier authority,
//! followed by one little-endian `u32` per sub-authority. A buffer must
//! hold at least `8 + 4 * count` bytes; trailing bytes past that region
//! are ignored.
//!
//! Decoding is pure and holds no state between calls: the same input
//! always yields the same output or the same error classification, and
//! concurrent callers need no coordination.
//!
//! ## Examples
//! ```rust
//! use sid2str::SidComponents;
//!
//! // BUILTIN\Administrators => S-1-5-32-544
//! let sid = SidComponents::from_hex("01020000000000052000000020020000")?;
//! assert_eq!(sid.revision, 1);
//! assert_eq!(sid.identifier_authority.as_u64(), 5);
//! assert_eq!(sid.sub_authorities, [32, 544]);
//! assert_eq!(sid.to_string(), "S-1-5-32-544");
//! # Ok::<(), sid2str::DecodeError>(())
//! ```
//!
//! ```rust
//! use sid2str::{DecodeError, LengthError, SidComponents};
//!
//! // A 7-byte buffer cannot even hold the SID header.
//! let err = SidComponents::from_hex("01020000000000").unwrap_err();
//! assert_eq!(err, DecodeError::Length(LengthError::TooShort { got: 7 }));
//! ```

#![warn(missing_docs)]

mod error;
mod sid_components;
mod sid_identifier_authority;

pub use error::{DecodeError, FormatError, LengthError};
pub use sid_components::{SID_HEADER_LEN, SUB_AUTHORITY_LEN, SidComponents};
pub use sid_identifier_authority::SidIdentifierAuthority;

#[cfg(test)]
pub(crate) use sid_identifier_authority::test::arb_identifier_authority;
