use crate::{and, not, shift_left, Error, Family, Octets, Result};

/// Returns the netmask of `family` with `prefix_len` leading ones.
///
/// # Errors
/// If `prefix_len` is longer than the address this will return an
/// `Error::InvalidAddress`.
///
/// # Examples
///
/// ```
/// use ipaddr_ops::{prefix_mask, Family};
///
/// assert_eq!(prefix_mask(Family::V4, 20).unwrap().as_slice(), &[255, 255, 240, 0]);
/// ```
pub fn prefix_mask(family: Family, prefix_len: u8) -> Result<Octets> {
    if prefix_len > family.bits() {
        log::trace!("rejecting prefix length {} for {:?}", prefix_len, family);
        return Err(Error::InvalidAddress);
    }
    let ones = not(&Octets::zero(family))?;
    shift_left(i64::from(family.bits() - prefix_len), &ones)
}

/// Converts a netmask into a prefix length.
///
/// # Errors
/// If the mask is not 4 or 16 bytes, or its ones are not contiguous from
/// the most significant bit, this will return an `Error::InvalidAddress`.
pub fn mask_to_prefix(mask: &[u8]) -> Result<u8> {
    match Octets::from_slice(mask)? {
        Octets::V4(mask) => ipv4_mask_to_prefix(u32::from_be_bytes(mask)),
        Octets::V6(mask) => ipv6_mask_to_prefix(u128::from_be_bytes(mask)),
    }
}

/// Clears every bit of `addr` after the first `prefix_len`.
///
/// # Errors
/// Returns `Error::InvalidAddress` if `addr` is not 4 or 16 bytes or
/// `prefix_len` is longer than the address.
pub fn apply_prefix(addr: &[u8], prefix_len: u8) -> Result<Octets> {
    let family = Family::from_len(addr.len())?;
    and(addr, &prefix_mask(family, prefix_len)?)
}

/// Returns whether every bit of `addr` after the first `prefix_len` is zero.
///
/// # Errors
/// Same as [`apply_prefix`].
pub fn is_network_address(addr: &[u8], prefix_len: u8) -> Result<bool> {
    Ok(apply_prefix(addr, prefix_len)? == *addr)
}

/// Returns whether every bit of `addr` after the first `prefix_len` is one.
///
/// # Errors
/// Same as [`apply_prefix`].
pub fn is_broadcast_address(addr: &[u8], prefix_len: u8) -> Result<bool> {
    is_network_address(&not(addr)?, prefix_len)
}

fn ipv4_mask_to_prefix(mask: u32) -> Result<u8> {
    let prefix = mask.leading_ones();
    if mask.checked_shl(prefix).unwrap_or(0) == 0 {
        Ok(prefix as u8)
    } else {
        log::trace!("rejecting non-contiguous mask {:#010x}", mask);
        Err(Error::InvalidAddress)
    }
}

fn ipv6_mask_to_prefix(mask: u128) -> Result<u8> {
    let prefix = mask.leading_ones();
    if mask.checked_shl(prefix).unwrap_or(0) == 0 {
        Ok(prefix as u8)
    } else {
        log::trace!("rejecting non-contiguous mask {:#034x}", mask);
        Err(Error::InvalidAddress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v4_masks() {
        assert_eq!(prefix_mask(Family::V4, 0), Ok(Octets::V4([0; 4])));
        assert_eq!(prefix_mask(Family::V4, 24), Ok(Octets::V4([255, 255, 255, 0])));
        assert_eq!(prefix_mask(Family::V4, 25), Ok(Octets::V4([255, 255, 255, 128])));
        assert_eq!(prefix_mask(Family::V4, 32), Ok(Octets::V4([255; 4])));
        assert_eq!(prefix_mask(Family::V4, 33), Err(Error::InvalidAddress));
    }

    #[test]
    fn v6_masks() {
        let mut expected = [0u8; 16];
        expected[..8].copy_from_slice(&[0xff; 8]);
        assert_eq!(prefix_mask(Family::V6, 64), Ok(Octets::V6(expected)));
        expected[8] = 0xe0;
        assert_eq!(prefix_mask(Family::V6, 67), Ok(Octets::V6(expected)));
        assert_eq!(prefix_mask(Family::V6, 128), Ok(Octets::V6([0xff; 16])));
        assert_eq!(prefix_mask(Family::V6, 0), Ok(Octets::V6([0; 16])));
        assert_eq!(prefix_mask(Family::V6, 129), Err(Error::InvalidAddress));
    }

    #[test]
    fn v4_mask_to_prefix() {
        assert_eq!(mask_to_prefix(&[255, 255, 255, 0]), Ok(24));
        assert_eq!(mask_to_prefix(&[255, 255, 255, 255]), Ok(32));
        assert_eq!(mask_to_prefix(&[0, 0, 0, 0]), Ok(0));
        assert_eq!(mask_to_prefix(&[255, 0, 255, 0]), Err(Error::InvalidAddress));
    }

    #[test]
    fn v6_mask_to_prefix() {
        let mut mask = [0u8; 16];
        mask[..6].copy_from_slice(&[0xff; 6]);
        assert_eq!(mask_to_prefix(&mask), Ok(48));
        assert_eq!(mask_to_prefix(&[0xff; 16]), Ok(128));
        mask[15] = 1;
        assert_eq!(mask_to_prefix(&mask), Err(Error::InvalidAddress));
        assert_eq!(mask_to_prefix(&[0xff; 8]), Err(Error::InvalidAddress));
    }

    #[test]
    fn prefixes() {
        assert_eq!(
            apply_prefix(&[192, 0, 2, 77], 24),
            Ok(Octets::V4([192, 0, 2, 0]))
        );
        let addr = [
            0x20, 0x01, 0x0d, 0xb8, 0xab, 0xcd, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
        ];
        let mut expected = [0u8; 16];
        expected[..5].copy_from_slice(&[0x20, 0x01, 0x0d, 0xb8, 0xa0]);
        assert_eq!(apply_prefix(&addr, 36), Ok(Octets::V6(expected)));
        assert_eq!(apply_prefix(&[1, 2, 3], 8), Err(Error::InvalidAddress));
    }

    #[test]
    fn network_and_broadcast() {
        assert_eq!(is_network_address(&[192, 0, 2, 0], 24), Ok(true));
        assert_eq!(is_network_address(&[192, 0, 2, 1], 24), Ok(false));
        assert_eq!(is_broadcast_address(&[192, 0, 2, 255], 24), Ok(true));
        assert_eq!(is_broadcast_address(&[192, 0, 2, 254], 24), Ok(false));
        assert_eq!(is_network_address(&[0; 16], 0), Ok(true));
        assert_eq!(is_broadcast_address(&[0xff; 16], 64), Ok(true));
        assert_eq!(is_network_address(&[0; 4], 40), Err(Error::InvalidAddress));
    }
}
