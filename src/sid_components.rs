//! Decomposed SID fields and the binary/hex decoding paths.

use core::fmt::{self, Display};

use crate::SidIdentifierAuthority;
use crate::error::{DecodeError, FormatError, LengthError};

/// Size in bytes of the fixed SID header: revision, sub-authority count
/// and the 6-byte identifier authority.
pub const SID_HEADER_LEN: usize = 8;

/// Size in bytes of one encoded sub-authority.
pub const SUB_AUTHORITY_LEN: usize = size_of::<u32>();

/// The decomposed fields of a Windows Security Identifier.
///
/// Values are read-only once decoded; the canonical text form is produced
/// by the [`Display`] implementation.
///
/// The revision and sub-authority count are taken as-is from the encoding
/// without semantic validation: any revision byte is accepted and counts
/// cover the full `0..=255` range, so a header with a zero count decodes
/// to the bare `S-R-I` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SidComponents {
    /// The SID revision value, generally 1.
    pub revision: u8,
    /// The SID identifier authority value.
    pub identifier_authority: SidIdentifierAuthority,
    /// The SID sub-authority values, most general first.
    pub sub_authorities: Vec<u32>,
}

impl SidComponents {
    /// Decodes the fixed-layout binary SID encoding.
    ///
    /// Bytes past the region implied by the embedded sub-authority count
    /// are ignored.
    ///
    /// # Errors
    /// [`LengthError`] if the buffer is shorter than the SID header, or
    /// shorter than the length its own sub-authority count implies.
    ///
    /// # Examples
    /// ```rust
    /// # use sid2str::SidComponents;
    /// // SID: S-1-5-32-544 (Administrators)
    /// let bytes: [u8; 16] = [
    ///     1,    // Revision
    ///     2,    // SubAuthorityCount
    ///     0, 0, 0, 0, 0, 5, // IdentifierAuthority = NT AUTHORITY
    ///     32, 0, 0, 0,      // SubAuthority[0] = 32
    ///     32, 2, 0, 0       // SubAuthority[1] = 544 (0x220 little endian)
    /// ];
    /// let sid = SidComponents::from_bytes(&bytes)?;
    /// assert_eq!(sid.to_string(), "S-1-5-32-544");
    /// # Ok::<(), sid2str::LengthError>(())
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LengthError> {
        if bytes.len() < SID_HEADER_LEN {
            return Err(LengthError::TooShort { got: bytes.len() });
        }
        #[expect(
            clippy::indexing_slicing,
            reason = "offsets 0..8 are in bounds, checked by the header guard above"
        )]
        let (revision, count, authority_bytes) = (bytes[0], bytes[1], &bytes[2..SID_HEADER_LEN]);

        let expected = SID_HEADER_LEN + usize::from(count) * SUB_AUTHORITY_LEN;
        if bytes.len() < expected {
            return Err(LengthError::Incomplete {
                count,
                expected,
                got: bytes.len(),
            });
        }

        let mut authority = [0u8; 6];
        authority.copy_from_slice(authority_bytes);

        #[expect(
            clippy::indexing_slicing,
            reason = "expected is in bounds, checked by the length guard above"
        )]
        let sub_authority_bytes = &bytes[SID_HEADER_LEN..expected];
        let sub_authorities = sub_authority_bytes
            .chunks_exact(SUB_AUTHORITY_LEN)
            .map(|chunk| {
                let mut le_bytes = [0u8; SUB_AUTHORITY_LEN];
                le_bytes.copy_from_slice(chunk);
                u32::from_le_bytes(le_bytes)
            })
            .collect();

        Ok(Self {
            revision,
            identifier_authority: SidIdentifierAuthority::from(authority),
            sub_authorities,
        })
    }

    /// Decodes a SID from the hexadecimal form of its binary encoding.
    ///
    /// The string must contain only hex digits, two per byte, with no
    /// whitespace, separators or `0x` prefix. The odd-length check happens
    /// before any byte is interpreted.
    ///
    /// # Errors
    /// [`FormatError`] if the string is not valid hex, [`LengthError`] if
    /// the decoded bytes do not hold a complete SID; both surface through
    /// [`DecodeError`].
    ///
    /// # Examples
    /// ```rust
    /// # use sid2str::SidComponents;
    /// let sid = SidComponents::from_hex("0100000000000000")?;
    /// assert_eq!(sid.to_string(), "S-1-0");
    /// # Ok::<(), sid2str::DecodeError>(())
    /// ```
    pub fn from_hex(hex_str: &str) -> Result<Self, DecodeError> {
        let bytes = hex::decode(hex_str).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                FormatError::InvalidDigit { found: c, index }
            }
            // `InvalidStringLength` is only produced by the fixed-size
            // `decode_to_slice` path.
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                FormatError::OddLength { len: hex_str.len() }
            }
        })?;
        Ok(Self::from_bytes(&bytes)?)
    }
}

impl Display for SidComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}-{}", self.revision, self.identifier_authority)?;
        for &sub_authority in &self.sub_authorities {
            write!(f, "-{sub_authority}")?;
        }
        Ok(())
    }
}
