//! RGB pixel composed of one [`Red`], one [`Green`] and one [`Blue`].
//!
//! # Types
//!
//! - [`RgbPixel`] - three typed channels, no alpha
//!
//! # Design
//!
//! A pixel is a plain `Copy` value of three bytes. Its channels can be read
//! but not replaced one by one: a pixel only changes through the arithmetic
//! and blend operators.
//!
//! | Operator | Meaning |
//! |----------|---------|
//! | `a + b`, `a += b` | additive light mixing, saturated per channel |
//! | `a - b`, `a -= b` | per-channel saturating difference |
//! | `a * b`, `a *= b` | multiply blend, see [`rgb_multiply`] |
//!
//! Screen blending has no operator; use [`rgb_screen`](crate::rgb_screen).
//!
//! ```rust
//! use clearpng_core::{Blue, Green, Red, RgbPixel};
//!
//! let a = RgbPixel::new(Red::new(200), Green::new(10), Blue::new(0));
//! let b = RgbPixel::new(Red::new(100), Green::new(10), Blue::new(5));
//! assert_eq!((a + b).to_array(), [255, 20, 5]);
//! ```
//!
//! # Text Form
//!
//! Pixels parse from and format to lowercase `#rrggbb` hex:
//!
//! ```rust
//! use clearpng_core::RgbPixel;
//!
//! let p: RgbPixel = "#0A66CC".parse().unwrap();
//! assert_eq!(p.to_array(), [10, 102, 204]);
//! assert_eq!(p.to_string(), "#0a66cc");
//! ```

use crate::blend::rgb_multiply;
use crate::channel::{Blue, Green, Red};
use crate::error::ParseColorError;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use std::str::FromStr;
use tracing::trace;

/// An 8-bit RGB pixel.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbPixel {
    red: Red,
    green: Green,
    blue: Blue,
}

impl RgbPixel {
    /// All channels zero.
    pub const BLACK: Self = Self::new(Red::MIN, Green::MIN, Blue::MIN);

    /// All channels at full intensity.
    pub const WHITE: Self = Self::new(Red::MAX, Green::MAX, Blue::MAX);

    /// Creates a pixel from its three channels.
    #[inline]
    pub const fn new(red: Red, green: Green, blue: Blue) -> Self {
        Self { red, green, blue }
    }

    /// Creates a pixel with the same raw value in every channel.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(Red::new(v), Green::new(v), Blue::new(v))
    }

    /// Creates a pixel from raw `[r, g, b]` values.
    #[inline]
    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(Red::new(rgb[0]), Green::new(rgb[1]), Blue::new(rgb[2]))
    }

    /// Returns the raw `[r, g, b]` values.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.red.get(), self.green.get(), self.blue.get()]
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> Red {
        self.red
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> Green {
        self.green
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> Blue {
        self.blue
    }

    /// Photometric negative: `255 - c` for every channel.
    ///
    /// ```rust
    /// use clearpng_core::RgbPixel;
    ///
    /// assert_eq!(RgbPixel::BLACK.invert(), RgbPixel::WHITE);
    /// assert_eq!(RgbPixel::from_array([10, 102, 204]).invert().to_array(), [245, 153, 51]);
    /// ```
    #[inline]
    pub const fn invert(self) -> Self {
        Self::new(
            Red::new(u8::MAX - self.red.get()),
            Green::new(u8::MAX - self.green.get()),
            Blue::new(u8::MAX - self.blue.get()),
        )
    }
}

impl From<[u8; 3]> for RgbPixel {
    #[inline]
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_array(rgb)
    }
}

impl From<RgbPixel> for [u8; 3] {
    #[inline]
    fn from(p: RgbPixel) -> Self {
        p.to_array()
    }
}

impl Add for RgbPixel {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.red + rhs.red, self.green + rhs.green, self.blue + rhs.blue)
    }
}

impl AddAssign for RgbPixel {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.red += rhs.red;
        self.green += rhs.green;
        self.blue += rhs.blue;
    }
}

impl Sub for RgbPixel {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.red - rhs.red, self.green - rhs.green, self.blue - rhs.blue)
    }
}

impl SubAssign for RgbPixel {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.red -= rhs.red;
        self.green -= rhs.green;
        self.blue -= rhs.blue;
    }
}

impl Mul for RgbPixel {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        rgb_multiply(self, rhs)
    }
}

impl MulAssign for RgbPixel {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = rgb_multiply(*self, rhs);
    }
}

impl fmt::Display for RgbPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_array();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for RgbPixel {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        parse_hex(digits).inspect_err(|err| trace!(input = s, %err, "rejected color"))
    }
}

fn parse_hex(digits: &str) -> Result<RgbPixel, ParseColorError> {
    if digits.is_empty() {
        return Err(ParseColorError::Empty);
    }

    let mut nibbles = [0u8; 6];
    let mut count = 0;
    for c in digits.chars() {
        let nibble = c.to_digit(16).ok_or(ParseColorError::InvalidHex(c))?;
        if count < nibbles.len() {
            // to_digit(16) is at most 15
            nibbles[count] = nibble as u8;
        }
        count += 1;
    }

    match count {
        // #rgb expands each digit: 0xa -> 0xaa
        3 => Ok(RgbPixel::from_array([
            nibbles[0] * 17,
            nibbles[1] * 17,
            nibbles[2] * 17,
        ])),
        6 => Ok(RgbPixel::from_array([
            (nibbles[0] << 4) | nibbles[1],
            (nibbles[2] << 4) | nibbles[3],
            (nibbles[4] << 4) | nibbles[5],
        ])),
        n => Err(ParseColorError::InvalidLength(n)),
    }
}
