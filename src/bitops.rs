//! Bitwise `and`, `or` and complement over address buffers.
//!
//! Both operands are loaded into the four-word working value and combined
//! word by word over all four words, whatever their real width. The result
//! is as long as the first operand.

use crate::buffer::Words;
use crate::{Error, Family, Octets, Result};

/// The width of the integer operand of [`and_int_with`] and [`or_int_with`].
///
/// Against a 16-byte address the integer only ever reaches the low 64 bits
/// (`W64`) or the low 32 bits (`W32`) of the value. The upper words are
/// combined with zero, which clears them under `and`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntWidth {
    /// The operand must fit in an `i32`.
    W32,
    /// The operand is a full `i64`.
    #[default]
    W64,
}

/// Returns `a & b`, as long as `a`.
///
/// A 4-byte operand lines up with the first four bytes of a 16-byte one.
///
/// # Errors
/// Returns `Error::InvalidAddress` unless both operands are 4 or 16 bytes.
///
/// # Examples
///
/// ```
/// let net = ipaddr_ops::and(&[192, 168, 1, 77], &[255, 255, 255, 0]).unwrap();
/// assert_eq!(net.as_slice(), &[192, 168, 1, 0]);
/// ```
pub fn and(a: &[u8], b: &[u8]) -> Result<Octets> {
    combine(a, b, |x, y| x & y)
}

/// Returns `a | b`, as long as `a`.
///
/// # Errors
/// Returns `Error::InvalidAddress` unless both operands are 4 or 16 bytes.
pub fn or(a: &[u8], b: &[u8]) -> Result<Octets> {
    combine(a, b, |x, y| x | y)
}

/// Returns `addr & value` with a 64-bit integer operand.
///
/// # Errors
/// See [`and_int_with`].
pub fn and_int(addr: &[u8], value: i64) -> Result<Octets> {
    and_int_with(addr, value, IntWidth::default())
}

/// Returns `addr | value` with a 64-bit integer operand.
///
/// # Errors
/// See [`or_int_with`].
pub fn or_int(addr: &[u8], value: i64) -> Result<Octets> {
    or_int_with(addr, value, IntWidth::default())
}

/// Returns `addr & value`, treating `value` as an integer of `width` bits.
///
/// For a 4-byte address the low 32 bits of `value` are combined with the
/// address. For a 16-byte address the first two words are cleared, the
/// third word is anded with bits 32 to 63 of `value` (zero under
/// `IntWidth::W32`) and the last word with its low 32 bits. Negative values
/// contribute their two's complement bits.
///
/// # Errors
/// Returns `Error::InvalidAddress` if `addr` is not 4 or 16 bytes, if
/// `addr` is 4 bytes and `value` exceeds `u32::MAX`, or if `value` does
/// not fit in `width`.
///
/// # Examples
///
/// ```
/// let masked = ipaddr_ops::and_int(&[255, 255, 255, 255], 0x00ff_ffff).unwrap();
/// assert_eq!(masked.as_slice(), &[0, 255, 255, 255]);
/// ```
pub fn and_int_with(addr: &[u8], value: i64, width: IntWidth) -> Result<Octets> {
    combine_int(addr, value, width, |x, y| x & y)
}

/// Returns `addr | value`, treating `value` as an integer of `width` bits.
///
/// Word placement follows [`and_int_with`]; or-ing the upper words with
/// zero leaves them unchanged.
///
/// # Errors
/// Same as [`and_int_with`].
pub fn or_int_with(addr: &[u8], value: i64, width: IntWidth) -> Result<Octets> {
    combine_int(addr, value, width, |x, y| x | y)
}

/// Returns the bitwise complement of `addr`.
///
/// # Errors
/// Returns `Error::InvalidAddress` unless `addr` is 4 or 16 bytes.
pub fn not(addr: &[u8]) -> Result<Octets> {
    let family = Family::from_len(addr.len())?;
    let mut words = Words::load(addr);
    for word in words.0.iter_mut() {
        *word = !*word;
    }
    Ok(words.store(family))
}

fn combine(a: &[u8], b: &[u8], op: impl Fn(u32, u32) -> u32) -> Result<Octets> {
    let (Ok(family), Ok(_)) = (Family::from_len(a.len()), Family::from_len(b.len())) else {
        log::trace!("rejecting operands of {} and {} bytes", a.len(), b.len());
        return Err(Error::InvalidAddress);
    };
    Ok(Words::load(a).zip_with(Words::load(b), op).store(family))
}

fn combine_int(
    addr: &[u8],
    value: i64,
    width: IntWidth,
    op: impl Fn(u32, u32) -> u32,
) -> Result<Octets> {
    let family = Family::from_len(addr.len())?;
    if width == IntWidth::W32 && i32::try_from(value).is_err() {
        log::trace!("rejecting integer operand {} wider than 32 bits", value);
        return Err(Error::InvalidAddress);
    }

    let operand = match family {
        Family::V4 => {
            if value > i64::from(u32::MAX) {
                log::trace!("rejecting integer operand {} for a 4-byte address", value);
                return Err(Error::InvalidAddress);
            }
            Words([value as u32, 0, 0, 0])
        }
        Family::V6 => {
            let high = match width {
                IntWidth::W32 => 0,
                IntWidth::W64 => (value >> 32) as u32,
            };
            Words([0, 0, high, value as u32])
        }
    };

    Ok(Words::load(addr).zip_with(operand, op).store(family))
}
