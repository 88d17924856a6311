//! Pixel blend modes.
//!
//! Integer implementations of the Photoshop-style blend modes used when
//! compositing 8-bit pixels. Every mode is bit-exact: all rounding is
//! truncating integer division by 255.
//!
//! # Blend Modes
//!
//! - [`BlendMode::Add`] - Linear dodge, saturating per channel
//! - [`BlendMode::Multiply`] - Darken by multiplication, see [`rgb_multiply`]
//! - [`BlendMode::Screen`] - Lighten (inverse multiply), see [`rgb_screen`]
//!
//! # Example
//!
//! ```rust
//! use clearpng_core::{rgb_multiply, rgb_screen, RgbPixel};
//!
//! let a = RgbPixel::from_array([10, 102, 204]);
//!
//! assert_eq!(rgb_multiply(a, RgbPixel::WHITE), a);
//! assert_eq!(rgb_screen(a, RgbPixel::BLACK), a);
//! ```
//!
//! # Hot Loops
//!
//! [`BlendMode::resolve`] turns a mode into a plain function pointer so the
//! mode is matched once, outside any per-pixel loop:
//!
//! ```rust
//! use clearpng_core::{BlendMode, RgbPixel};
//!
//! let op = BlendMode::Screen.resolve();
//! let layer = [RgbPixel::gray(64); 4];
//! let out: Vec<RgbPixel> = layer.iter().map(|&p| op(p, RgbPixel::gray(128))).collect();
//! assert_eq!(out[0].to_array(), [160, 160, 160]);
//! ```

use crate::channel::{Blue, Green, Red};
use crate::pixel::RgbPixel;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Signature shared by all pixel blend functions.
pub type BlendFn = fn(RgbPixel, RgbPixel) -> RgbPixel;

/// `floor(a * b / 255)` for two channel values.
#[inline]
fn mul_channel(a: u8, b: u8) -> u8 {
    // At most 255 * 255 / 255 = 255.
    (i32::from(a) * i32::from(b) / 255) as u8
}

/// `255 - floor((255 - a) * (255 - b) / 255)` for two channel values.
#[inline]
fn screen_channel(a: u8, b: u8) -> u8 {
    u8::MAX - mul_channel(u8::MAX - a, u8::MAX - b)
}

/// Multiply blend: `floor(lhs * rhs / 255)` per channel.
///
/// Multiplying by white is a no-op and multiplying by black yields black.
///
/// ```rust
/// use clearpng_core::{rgb_multiply, RgbPixel};
///
/// let a = RgbPixel::from_array([10, 102, 204]);
/// let b = RgbPixel::from_array([255, 242, 179]);
/// assert_eq!(rgb_multiply(a, b).to_array(), [10, 96, 143]);
/// ```
#[inline]
pub fn rgb_multiply(lhs: RgbPixel, rhs: RgbPixel) -> RgbPixel {
    RgbPixel::new(
        Red::new(mul_channel(lhs.red().get(), rhs.red().get())),
        Green::new(mul_channel(lhs.green().get(), rhs.green().get())),
        Blue::new(mul_channel(lhs.blue().get(), rhs.blue().get())),
    )
}

/// Screen blend: `255 - floor((255 - lhs) * (255 - rhs) / 255)` per channel.
///
/// Screening with black is a no-op and screening with white yields white.
/// It is exactly the inverse of [`rgb_multiply`] on inverted inputs:
/// `rgb_screen(a, b) == rgb_multiply(a.invert(), b.invert()).invert()`.
///
/// ```rust
/// use clearpng_core::{rgb_screen, RgbPixel};
///
/// let a = RgbPixel::from_array([10, 102, 204]);
/// let b = RgbPixel::from_array([191, 150, 61]);
/// assert_eq!(rgb_screen(a, b).to_array(), [194, 192, 217]);
/// ```
#[inline]
pub fn rgb_screen(lhs: RgbPixel, rhs: RgbPixel) -> RgbPixel {
    RgbPixel::new(
        Red::new(screen_channel(lhs.red().get(), rhs.red().get())),
        Green::new(screen_channel(lhs.green().get(), rhs.green().get())),
        Blue::new(screen_channel(lhs.blue().get(), rhs.blue().get())),
    )
}

#[inline]
fn rgb_add(lhs: RgbPixel, rhs: RgbPixel) -> RgbPixel {
    lhs + rhs
}

/// Blend mode for combining two pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BlendMode {
    /// Add (linear dodge).
    Add,
    /// Multiply (darken).
    #[default]
    Multiply,
    /// Screen (lighten).
    Screen,
}

impl BlendMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 3] = [Self::Add, Self::Multiply, Self::Screen];

    /// Lowercase name used by [`Display`](fmt::Display) and [`FromStr`].
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
        }
    }

    /// Returns the blend function for this mode.
    pub fn resolve(self) -> BlendFn {
        debug!(mode = self.name(), "resolved blend mode");
        match self {
            Self::Add => rgb_add,
            Self::Multiply => rgb_multiply,
            Self::Screen => rgb_screen,
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown blend mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown blend mode {0:?} (expected add, multiply or screen)")]
pub struct ParseBlendModeError(
    /// Name that was not recognized.
    pub String,
);

impl FromStr for BlendMode {
    type Err = ParseBlendModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseBlendModeError(wanted.to_string()))
    }
}

/// Blends two pixels with the given mode.
///
/// For a single call this is equivalent to `mode.resolve()(a, b)`; prefer
/// [`BlendMode::resolve`] when blending many pixels with one mode.
#[inline]
pub fn blend(a: RgbPixel, b: RgbPixel, mode: BlendMode) -> RgbPixel {
    match mode {
        BlendMode::Add => rgb_add(a, b),
        BlendMode::Multiply => rgb_multiply(a, b),
        BlendMode::Screen => rgb_screen(a, b),
    }
}
