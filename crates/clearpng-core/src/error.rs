//! Error types for clearpng-core.
//!
//! Channel and pixel arithmetic is total: overflow saturates instead of
//! failing. Errors only arise at the edges where raw data enters the type
//! system:
//!
//! - Checked channel construction from a wide integer
//!   ([`Error::ChannelOutOfRange`])
//! - Parsing a pixel from its hex text form ([`ParseColorError`])
//!
//! # Usage
//!
//! ```rust
//! use clearpng_core::{Error, Red};
//!
//! let red = Red::try_from(300);
//! assert!(matches!(red, Err(Error::ChannelOutOfRange { value: 300, .. })));
//! ```

use crate::channel::ChannelKind;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by clearpng-core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A raw value does not fit the 8-bit channel range.
    #[error("{channel} channel value {value} is outside 0..=255")]
    ChannelOutOfRange {
        /// Channel that rejected the value.
        channel: ChannelKind,
        /// Offending value.
        value: i32,
    },

    /// A pixel could not be parsed from text.
    #[error(transparent)]
    Parse(#[from] ParseColorError),
}

/// Failure to parse an [`RgbPixel`](crate::RgbPixel) from a hex string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Input was empty (or only a `#`).
    #[error("empty color string")]
    Empty,

    /// Input had a digit count other than 3 or 6.
    #[error("expected 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),

    /// Input contained a character that is not a hex digit.
    #[error("invalid hex digit {0:?}")]
    InvalidHex(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::ChannelOutOfRange {
            channel: ChannelKind::Green,
            value: -4,
        };
        assert_eq!(err.to_string(), "green channel value -4 is outside 0..=255");
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: Error = ParseColorError::InvalidLength(4).into();
        assert_eq!(err.to_string(), "expected 3 or 6 hex digits, got 4");
    }
}
