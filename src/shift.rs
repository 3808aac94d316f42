//! Logical shifts of the full 128-bit working value.
//!
//! A shift first moves whole words, then shifts bits within words while
//! carrying across word boundaries. Vacated bits are always zero. A 4-byte
//! address lives in word 0, so its bits are shifted out of the low end of
//! the output when shifting right and out of the top when shifting left.

use crate::buffer::Words;
use crate::{Error, Family, Octets, Result};

const WORD_BITS: u32 = u32::BITS;
const VALUE_BITS: u32 = 128;

/// Shifts `addr` right by `count` bits, filling with zeros.
///
/// # Errors
/// Returns `Error::InvalidAddress` if `count` is negative or `addr` is not
/// 4 or 16 bytes.
///
/// # Examples
///
/// ```
/// let shifted = ipaddr_ops::shift_right(8, &[1, 2, 3, 4]).unwrap();
/// assert_eq!(shifted.as_slice(), &[0, 1, 2, 3]);
/// ```
pub fn shift_right(count: i64, addr: &[u8]) -> Result<Octets> {
    let (family, words, count) = prepare(count, addr)?;
    Ok(shr(words, count).store(family))
}

/// Shifts `addr` left by `count` bits, filling with zeros.
///
/// # Errors
/// Returns `Error::InvalidAddress` if `count` is negative or `addr` is not
/// 4 or 16 bytes.
pub fn shift_left(count: i64, addr: &[u8]) -> Result<Octets> {
    let (family, words, count) = prepare(count, addr)?;
    Ok(shl(words, count).store(family))
}

/// Validates the operands and loads the working value. Shifts that clear
/// the whole value load nothing and shift by zero.
fn prepare(count: i64, addr: &[u8]) -> Result<(Family, Words, u32)> {
    if count < 0 {
        log::trace!("rejecting negative shift count {}", count);
        return Err(Error::InvalidAddress);
    }
    let family = Family::from_len(addr.len())?;
    match u32::try_from(count) {
        Ok(count) if count < VALUE_BITS => Ok((family, Words::load(addr), count)),
        _ => Ok((family, Words::ZERO, 0)),
    }
}

/// `count` must be below 128.
fn shr(words: Words, count: u32) -> Words {
    let mut w = words.0;
    let skip = (count / WORD_BITS) as usize;
    let bits = count % WORD_BITS;

    w.rotate_right(skip);
    w[..skip].fill(0);

    // A 32-bit shift overflows, so a whole-word shift stops here.
    if bits == 0 {
        return Words(w);
    }
    for i in (1..w.len()).rev() {
        w[i] = (w[i - 1] << (WORD_BITS - bits)) | (w[i] >> bits);
    }
    w[0] >>= bits;
    Words(w)
}

/// `count` must be below 128.
fn shl(words: Words, count: u32) -> Words {
    let mut w = words.0;
    let skip = (count / WORD_BITS) as usize;
    let bits = count % WORD_BITS;

    w.rotate_left(skip);
    let len = w.len();
    w[len - skip..].fill(0);

    if bits == 0 {
        return Words(w);
    }
    for i in 0..len - 1 {
        w[i] = (w[i + 1] >> (WORD_BITS - bits)) | (w[i] << bits);
    }
    w[len - 1] <<= bits;
    Words(w)
}
