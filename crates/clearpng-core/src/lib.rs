//! # clearpng-core
//!
//! Core pixel types for ClearPNG.
//!
//! This crate provides the per-pixel building blocks an image pipeline calls
//! into:
//!
//! - [`Red`], [`Green`], [`Blue`] - typed 8-bit channels with saturating arithmetic
//! - [`RgbPixel`] - one of each channel, no alpha
//! - [`rgb_multiply`], [`rgb_screen`], [`BlendMode`] - bit-exact blend modes
//! - [`clamp`](clamp::clamp) - the saturating clamp behind all channel math
//!
//! ## Design Philosophy
//!
//! Channels are distinct nominal types, so red and green values cannot be
//! mixed by accident:
//!
//! ```ignore
//! let r = Red::new(10);
//! let g = Green::new(10);
//! // let bad = r + g;  // Compile error!
//! // let eq = r == g;  // Compile error!
//! ```
//!
//! Arithmetic never fails or wraps; it saturates into `[0, 255]`.
//!
//! ```rust
//! use clearpng_core::prelude::*;
//!
//! let sky = RgbPixel::from_array([10, 102, 204]);
//! let tint = RgbPixel::from_array([255, 242, 179]);
//!
//! assert_eq!((sky * tint).to_array(), [10, 96, 143]);
//! assert_eq!(sky + RgbPixel::WHITE, RgbPixel::WHITE);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! clearpng-core (this crate)
//!    ^
//!    |
//!    +-- clearpng-color (sRGB / XYZ / CIELAB, distance metrics)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for channels, pixels and blend modes

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod blend;
pub mod channel;
pub mod clamp;
pub mod error;
pub mod pixel;

pub use blend::{blend, rgb_multiply, rgb_screen, BlendFn, BlendMode, ParseBlendModeError};
pub use channel::{same_channel, Blue, Channel, ChannelKind, Green, Red};
pub use error::{Error, ParseColorError, Result};
pub use pixel::RgbPixel;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use clearpng_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::blend::{rgb_multiply, rgb_screen, BlendMode};
    pub use crate::channel::{Blue, Channel, Green, Red};
    pub use crate::error::{Error, Result};
    pub use crate::pixel::RgbPixel;
}
