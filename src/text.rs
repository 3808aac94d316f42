//! Conversion between address buffers and their presentation form.

use alloc::string::{String, ToString};
use core::fmt;
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::{Error, Family, Octets, Result};

/// The longest text accepted by [`parse`].
const MAX_TEXT_LEN: usize = 49;

/// Formats `addr` in dotted-decimal (4 bytes) or compressed colon-hex
/// (16 bytes) notation.
///
/// # Errors
/// Returns `Error::InvalidAddress` unless `addr` is 4 or 16 bytes.
///
/// # Examples
///
/// ```
/// assert_eq!(ipaddr_ops::format(&[192, 168, 1, 1]).unwrap(), "192.168.1.1");
///
/// let mut loopback = [0u8; 16];
/// loopback[15] = 1;
/// assert_eq!(ipaddr_ops::format(&loopback).unwrap(), "::1");
/// ```
pub fn format(addr: &[u8]) -> Result<String> {
    Ok(Octets::from_slice(addr)?.to_string())
}

/// Parses `text` as an address of `family`.
///
/// # Errors
/// Returns `Error::InvalidAddress` if `text` is longer than 49 bytes or is
/// not a valid address of `family`.
pub fn parse(family: Family, text: &str) -> Result<Octets> {
    let text = bounded(text)?;
    let parsed = match family {
        Family::V4 => text.parse::<Ipv4Addr>().map(Octets::from),
        Family::V6 => text.parse::<Ipv6Addr>().map(Octets::from),
    };
    parsed.map_err(|_| {
        log::trace!("rejecting {:?} as an {:?} address", text, family);
        Error::InvalidAddress
    })
}

/// Parses `text` as an IPv4 address, falling back to IPv6.
///
/// # Errors
/// Returns `Error::InvalidAddress` if `text` parses as neither.
pub fn parse_any(text: &str) -> Result<Octets> {
    parse(Family::V4, text).or_else(|_| parse(Family::V6, text))
}

fn bounded(text: &str) -> Result<&str> {
    if text.len() > MAX_TEXT_LEN {
        log::trace!("rejecting address text of {} bytes", text.len());
        return Err(Error::InvalidAddress);
    }
    Ok(text)
}

/// IPv4-compatible addresses (96 zero bits, then anything but `::` and
/// `::1`) print with a dotted-decimal tail.
impl fmt::Display for Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Octets::V6([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, a, b, c, d])
                if u32::from_be_bytes([a, b, c, d]) > 1 =>
            {
                write!(f, "::{}", Ipv4Addr::new(a, b, c, d))
            }
            octets => fmt::Display::fmt(&IpAddr::from(octets), f),
        }
    }
}
