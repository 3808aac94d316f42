use core::fmt;
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use core::ops::Deref;

use crate::{Error, Family, Result};

/// An address in network byte order, exactly 4 or 16 bytes long.
///
/// Every operation in this crate returns a fresh `Octets`. It derefs to
/// `[u8]`, so it can be passed back in wherever a byte buffer is expected.
///
/// # Examples
///
/// ```
/// use core::net::Ipv4Addr;
/// use ipaddr_ops::{Family, Octets};
///
/// let octets = Octets::from(Ipv4Addr::new(10, 1, 2, 3));
/// assert_eq!(octets.family(), Family::V4);
/// assert_eq!(octets.as_slice(), &[10, 1, 2, 3]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Octets {
    /// An IPv4 address.
    V4([u8; 4]),
    /// An IPv6 address.
    V6([u8; 16]),
}

impl Octets {
    /// Copies `bytes` into a new `Octets`.
    ///
    /// # Errors
    /// Returns `Error::InvalidAddress` unless `bytes` is 4 or 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Octets> {
        let family = Family::from_len(bytes.len())?;
        Ok(Words::load(bytes).store(family))
    }

    /// Returns the all-zero address of `family`.
    pub const fn zero(family: Family) -> Octets {
        match family {
            Family::V4 => Octets::V4([0; 4]),
            Family::V6 => Octets::V6([0; 16]),
        }
    }

    /// Returns the family implied by the length of this address.
    pub const fn family(&self) -> Family {
        match self {
            Octets::V4(_) => Family::V4,
            Octets::V6(_) => Family::V6,
        }
    }

    /// Returns the bytes in network order.
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Octets::V4(bytes) => &bytes[..],
            Octets::V6(bytes) => &bytes[..],
        }
    }
}

impl fmt::Debug for Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Octets::V4(bytes) => f.debug_tuple("V4").field(bytes).finish(),
            Octets::V6(bytes) => f.debug_tuple("V6").field(bytes).finish(),
        }
    }
}

impl Deref for Octets {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Octets {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl PartialEq<[u8]> for Octets {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl TryFrom<&[u8]> for Octets {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Octets> {
        Octets::from_slice(bytes)
    }
}

impl From<Ipv4Addr> for Octets {
    fn from(addr: Ipv4Addr) -> Octets {
        Octets::V4(addr.octets())
    }
}

impl From<Ipv6Addr> for Octets {
    fn from(addr: Ipv6Addr) -> Octets {
        Octets::V6(addr.octets())
    }
}

impl From<IpAddr> for Octets {
    fn from(addr: IpAddr) -> Octets {
        match addr {
            IpAddr::V4(addr) => addr.into(),
            IpAddr::V6(addr) => addr.into(),
        }
    }
}

impl From<Octets> for IpAddr {
    fn from(octets: Octets) -> IpAddr {
        match octets {
            Octets::V4(bytes) => IpAddr::V4(Ipv4Addr::from(bytes)),
            Octets::V6(bytes) => IpAddr::V6(Ipv6Addr::from(bytes)),
        }
    }
}

/// The working value: four host-order words, most significant first.
///
/// A 4-byte address loads into word 0 and leaves the other words zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Words(pub(crate) [u32; 4]);

impl Words {
    pub(crate) const ZERO: Words = Words([0; 4]);

    /// Decodes each 4-byte group of `bytes` as a big-endian word.
    ///
    /// Callers validate the length; any trailing partial group and any
    /// bytes past the fourth word are ignored.
    pub(crate) fn load(bytes: &[u8]) -> Words {
        let mut words = Words::ZERO;
        for (word, chunk) in words.0.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }

    /// Encodes the first `family.len() / 4` words back to network order.
    pub(crate) fn store(self, family: Family) -> Octets {
        let mut octets = Octets::zero(family);
        let out = match &mut octets {
            Octets::V4(bytes) => &mut bytes[..],
            Octets::V6(bytes) => &mut bytes[..],
        };
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        octets
    }

    /// Applies `op` word by word against `other`.
    pub(crate) fn zip_with(self, other: Words, op: impl Fn(u32, u32) -> u32) -> Words {
        let mut words = self;
        for (word, rhs) in words.0.iter_mut().zip(other.0) {
            *word = op(*word, rhs);
        }
        words
    }
}
