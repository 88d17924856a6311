//! CIE XYZ tristimulus values.
//!
//! [`Xyz`] values use the 0..100 scale (Y = 100 for reference white), which
//! is the scale the CIELAB reference white is expressed in.
//!
//! # Convention
//!
//! The sRGB to XYZ matrix is applied to **column vectors** of linear RGB:
//!
//! ```text
//! | X |         | 0.4124 0.3576 0.1805 |   | R |
//! | Y | = 100 * | 0.2126 0.7152 0.0722 | * | G |
//! | Z |         | 0.0193 0.1192 0.9505 |   | B |
//! ```

use crate::transfer::linearize_rgb;
use clearpng_core::RgbPixel;
use glam::{DMat3, DVec3};

/// sRGB (D65) to CIE XYZ matrix, on the 0..1 scale.
///
/// `glam` matrices are column-major, so each column below is one RGB
/// primary's XYZ contribution.
pub const SRGB_TO_XYZ: DMat3 = DMat3::from_cols(
    DVec3::new(0.4124, 0.2126, 0.0193),
    DVec3::new(0.3576, 0.7152, 0.1192),
    DVec3::new(0.1805, 0.0722, 0.9505),
);

/// A CIE XYZ color on the 0..100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus value.
    pub x: f64,
    /// Y tristimulus value (relative luminance * 100).
    pub y: f64,
    /// Z tristimulus value.
    pub z: f64,
}

impl Xyz {
    /// Creates an XYZ value.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Converts an 8-bit sRGB pixel: inverse gamma, then [`SRGB_TO_XYZ`].
    ///
    /// ```rust
    /// use clearpng_color::Xyz;
    /// use clearpng_core::RgbPixel;
    ///
    /// let white = Xyz::from_pixel(RgbPixel::WHITE);
    /// assert!((white.y - 100.0).abs() < 1e-9);
    /// ```
    pub fn from_pixel(p: RgbPixel) -> Self {
        let linear = DVec3::from_array(linearize_rgb(p.to_array()));
        Self::from_vec(SRGB_TO_XYZ * linear * 100.0)
    }

    /// Components as a vector.
    #[inline]
    pub fn to_vec(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    #[inline]
    fn from_vec(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<RgbPixel> for Xyz {
    #[inline]
    fn from(p: RgbPixel) -> Self {
        Self::from_pixel(p)
    }
}
