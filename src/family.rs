use crate::{Error, Result};

/// An address family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    /// IPv4, 4-byte addresses.
    V4,
    /// IPv6, 16-byte addresses.
    V6,
}

impl Family {
    /// Returns the length in bytes of an address of this family.
    pub const fn len(self) -> usize {
        match self {
            Family::V4 => 4,
            Family::V6 => 16,
        }
    }

    /// Returns the width in bits of an address of this family.
    pub const fn bits(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Returns the family whose addresses are `len` bytes long.
    ///
    /// # Errors
    /// Returns `Error::InvalidAddress` unless `len` is 4 or 16.
    pub fn from_len(len: usize) -> Result<Family> {
        match len {
            4 => Ok(Family::V4),
            16 => Ok(Family::V6),
            _ => {
                log::trace!("rejecting address buffer of {} bytes", len);
                Err(Error::InvalidAddress)
            }
        }
    }
}

/// Selects a family by IP version number.
impl TryFrom<u8> for Family {
    type Error = Error;

    fn try_from(version: u8) -> Result<Family> {
        match version {
            4 => Ok(Family::V4),
            6 => Ok(Family::V6),
            _ => {
                log::trace!("rejecting address family selector {}", version);
                Err(Error::UnsupportedFamily)
            }
        }
    }
}
