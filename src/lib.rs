#![no_std]

//! Fixed-width arithmetic on IPv4 and IPv6 addresses.
//!
//! Addresses cross the API as network-order byte buffers of exactly 4
//! (IPv4) or 16 (IPv6) bytes. Internally every operation works on the
//! 128-bit value as four 32-bit words, so an IPv4 address occupies the
//! most significant word and the remaining three words are zero.
//!
//! ```
//! use ipaddr_ops::{and_int, format, parse, shift_right, Family};
//!
//! let addr = parse(Family::V4, "192.168.1.1").unwrap();
//! assert_eq!(addr.as_slice(), &[192, 168, 1, 1]);
//!
//! let net = and_int(&addr, 0xffff_ff00).unwrap();
//! assert_eq!(format(&net).unwrap(), "192.168.1.0");
//!
//! let shifted = shift_right(8, &[1, 2, 3, 4]).unwrap();
//! assert_eq!(shifted.as_slice(), &[0, 1, 2, 3]);
//! ```

extern crate alloc;

pub use self::bitops::{and, and_int, and_int_with, not, or, or_int, or_int_with, IntWidth};
pub use self::buffer::Octets;
pub use self::error::{Error, Result};
pub use self::family::Family;
pub use self::mask::{
    apply_prefix, is_broadcast_address, is_network_address, mask_to_prefix, prefix_mask,
};
pub use self::shift::{shift_left, shift_right};
pub use self::text::{format, parse, parse_any};

mod bitops;
mod buffer;
mod error;
mod family;
mod mask;
mod shift;
mod text;
