use core::fmt::{self, Display};

/// Identifier authority component of a SID (6-byte value, big-endian).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SidIdentifierAuthority {
    /// The raw authority bytes, most significant first.
    pub value: [u8; 6],
}

impl SidIdentifierAuthority {
    /// Widens the 6 big-endian bytes into the 48-bit authority value.
    ///
    /// # Examples
    /// ```rust
    /// # use sid2str::SidIdentifierAuthority;
    /// let nt_authority = SidIdentifierAuthority::from([0, 0, 0, 0, 0, 5]);
    /// assert_eq!(nt_authority.as_u64(), 5);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> u64 {
        let mut be_bytes = [0u8; 8];
        be_bytes[2..].copy_from_slice(self.value.as_slice());
        u64::from_be_bytes(be_bytes)
    }
}

impl From<[u8; 6]> for SidIdentifierAuthority {
    #[inline]
    fn from(value: [u8; 6]) -> Self {
        Self { value }
    }
}

impl From<SidIdentifierAuthority> for [u8; 6] {
    #[inline]
    fn from(value: SidIdentifierAuthority) -> Self {
        value.value
    }
}

impl Display for SidIdentifierAuthority {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_u64(), f)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        pub fn arb_identifier_authority()
            (value in proptest::array::uniform6(any::<u8>()))
            -> SidIdentifierAuthority {
            SidIdentifierAuthority::from(value)
        }
    }

    proptest! {
        #[test]
        fn as_u64_fits_48_bits(authority in arb_identifier_authority()) {
            prop_assert!(authority.as_u64() <= 0x0000_FFFF_FFFF_FFFF);
        }

        #[test]
        fn display_is_decimal(authority in arb_identifier_authority()) {
            prop_assert_eq!(authority.to_string(), authority.as_u64().to_string());
        }

        #[test]
        fn byte_conversion_round_trip(authority in arb_identifier_authority()) {
            let bytes: [u8; 6] = authority.into();
            prop_assert_eq!(SidIdentifierAuthority::from(bytes), authority);
        }
    }

    #[test]
    fn max_authority_is_decimal() {
        let authority = SidIdentifierAuthority::from([0xFF; 6]);
        assert_eq!(authority.to_string(), "281474976710655");
    }
}
