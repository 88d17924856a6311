//! Saturating clamp into an inclusive range.
//!
//! [`clamp`] is the only mechanism used for saturating channel arithmetic:
//! sums and differences are computed in a wider signed type and then
//! clamped back into [`ClampBounds::CHANNEL`].
//!
//! # Example
//!
//! ```rust
//! use clearpng_core::clamp::{clamp, ClampBounds};
//!
//! assert_eq!(clamp(320, ClampBounds::CHANNEL), 255);
//! assert_eq!(clamp(-12, ClampBounds::CHANNEL), 0);
//! assert_eq!(clamp(0.5, ClampBounds::new(0.0, 1.0)), 0.5);
//! ```

/// Inclusive `[lower, upper]` bounds for [`clamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClampBounds<T> {
    /// Smallest value the clamp returns.
    pub lower: T,
    /// Largest value the clamp returns.
    pub upper: T,
}

impl<T> ClampBounds<T> {
    /// Creates bounds. Callers must ensure `lower <= upper`.
    #[inline]
    pub const fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }
}

impl ClampBounds<i32> {
    /// Valid range of an 8-bit channel, in the signed intermediate type.
    pub const CHANNEL: Self = Self::new(0, 255);
}

/// Returns `max(lower, min(n, upper))`.
///
/// Works for any partially ordered numeric type. With `lower <= upper` the
/// result is always inside the bounds; NaN inputs are passed through for
/// floats since neither comparison holds.
#[inline]
pub fn clamp<T: PartialOrd + Copy>(n: T, bounds: ClampBounds<T>) -> T {
    debug_assert!(bounds.lower <= bounds.upper, "inverted clamp bounds");
    let capped = if n > bounds.upper { bounds.upper } else { n };
    if capped < bounds.lower {
        bounds.lower
    } else {
        capped
    }
}

/// Clamps a signed intermediate into the channel range and narrows to `u8`.
#[inline]
pub(crate) fn clamp_channel(n: i32) -> u8 {
    // In range after the clamp, so the narrowing cast cannot truncate.
    clamp(n, ClampBounds::CHANNEL) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_range() {
        assert_eq!(clamp(7, ClampBounds::new(0, 10)), 7);
        assert_eq!(clamp(0, ClampBounds::new(0, 10)), 0);
        assert_eq!(clamp(10, ClampBounds::new(0, 10)), 10);
    }

    #[test]
    fn test_saturates_both_ends() {
        assert_eq!(clamp(11, ClampBounds::new(0, 10)), 10);
        assert_eq!(clamp(-1, ClampBounds::new(0, 10)), 0);
        assert_eq!(clamp(-3.5, ClampBounds::new(-1.0, 1.0)), -1.0);
    }

    #[test]
    fn test_degenerate_bounds() {
        assert_eq!(clamp(99, ClampBounds::new(5, 5)), 5);
    }

    #[test]
    fn test_channel_sum_matches_saturating_add() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                let sum = clamp_channel(i32::from(a) + i32::from(b));
                assert_eq!(sum, a.saturating_add(b), "a={a}, b={b}");
                let diff = clamp_channel(i32::from(a) - i32::from(b));
                assert_eq!(diff, a.saturating_sub(b), "a={a}, b={b}");
            }
        }
    }
}
