//! CIE L*a*b* conversion.
//!
//! Converts [`Xyz`] to CIELAB relative to a D65 reference white:
//!
//! ```text
//! f(t) = t^(1/3)             if t > 0.008856
//!      = 7.787 * t + 16/116  otherwise
//!
//! L* = 116 * f(Y/Yn) - 16
//! a* = 500 * (f(X/Xn) - f(Y/Yn))
//! b* = 200 * (f(Y/Yn) - f(Z/Zn))
//! ```
//!
//! Euclidean distance in L*a*b* is the CIE76 color difference (delta E).

use crate::error::ColorError;
use crate::xyz::Xyz;
use clearpng_core::RgbPixel;
use std::str::FromStr;

/// D65 reference white used for CIELAB, on the 0..100 scale.
pub const REFERENCE_WHITE: Xyz = Xyz::new(94.811, 100.0, 107.304);

/// Cut-over between the cube root and the linear segment of `f(t)`.
const EPSILON: f64 = 0.008856;

/// A CIE L*a*b* color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness, 0 (black) to about 100 (white).
    pub l: f64,
    /// Green (-) to red (+) axis.
    pub a: f64,
    /// Blue (-) to yellow (+) axis.
    pub b: f64,
}

#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

impl Lab {
    /// Creates a Lab value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Converts from XYZ relative to [`REFERENCE_WHITE`].
    pub fn from_xyz(xyz: Xyz) -> Self {
        let fx = f(xyz.x / REFERENCE_WHITE.x);
        let fy = f(xyz.y / REFERENCE_WHITE.y);
        let fz = f(xyz.z / REFERENCE_WHITE.z);

        Self::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }

    /// Converts an 8-bit sRGB pixel through XYZ.
    ///
    /// ```rust
    /// use clearpng_color::Lab;
    /// use clearpng_core::RgbPixel;
    ///
    /// let black = Lab::from_pixel(RgbPixel::BLACK);
    /// assert!(black.l.abs() < 1e-9);
    /// assert_eq!((black.a, black.b), (0.0, 0.0));
    /// ```
    #[inline]
    pub fn from_pixel(p: RgbPixel) -> Self {
        Self::from_xyz(Xyz::from_pixel(p))
    }

    /// CIE76 color difference: Euclidean distance in L*a*b*.
    #[inline]
    pub fn delta_e(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Chroma, the distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }
}

impl From<Xyz> for Lab {
    #[inline]
    fn from(xyz: Xyz) -> Self {
        Self::from_xyz(xyz)
    }
}

impl From<RgbPixel> for Lab {
    #[inline]
    fn from(p: RgbPixel) -> Self {
        Self::from_pixel(p)
    }
}

/// Parses a hex sRGB color (`#rrggbb` or `#rgb`) and converts it.
impl FromStr for Lab {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pixel: RgbPixel = s.parse()?;
        Ok(Self::from_pixel(pixel))
    }
}
