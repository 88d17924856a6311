//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// sRGB EOTF: decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V > 0.04045:
///     L = ((V + 0.055) / 1.055)^2.4
/// else:
///     L = V / 12.92
/// ```
///
/// # Example
///
/// ```rust
/// use clearpng_color::transfer::srgb_eotf;
///
/// let linear = srgb_eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn srgb_eotf(v: f64) -> f64 {
    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

/// Decodes an 8-bit sRGB value to linear light in [0, 1].
#[inline]
pub fn linearize_u8(v: u8) -> f64 {
    srgb_eotf(f64::from(v) / 255.0)
}

/// Decodes an 8-bit sRGB triplet to linear light.
#[inline]
pub fn linearize_rgb(rgb: [u8; 3]) -> [f64; 3] {
    [linearize_u8(rgb[0]), linearize_u8(rgb[1]), linearize_u8(rgb[2])]
}
