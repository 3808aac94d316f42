//! Error type shared by every operation.

use thiserror::Error;

/// Errors returned by the address operations.
///
/// Failures are detected before any arithmetic happens and never carry a
/// partial result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Wrong buffer length, out of range integer operand, negative shift
    /// count, bad prefix length or text that does not parse.
    #[error("invalid address")]
    InvalidAddress,

    /// The address family selector is neither IPv4 nor IPv6.
    #[error("unsupported address family")]
    UnsupportedFamily,
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
