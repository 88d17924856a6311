//! Color distance metrics between two pixels.
//!
//! # Algorithms
//!
//! | Marker | [`Algorithm`] | Formula |
//! |--------|---------------|---------|
//! | [`Euclidean`] | `euclidean` | `sqrt(dR² + dG² + dB²)` on raw 8-bit values |
//! | [`WeightedEuclidean`] | `weighted-euclidean` | `sqrt(wr·dR² + 4·dG² + wb·dB²)`, weights chosen by mean red |
//! | [`Cielab`] | `cielab` | CIE76 delta E between the two [`Lab`] values |
//!
//! # Compile-Time Selection
//!
//! Each algorithm is a zero-sized marker type. [`distance`] is generic over
//! the marker, so the metric is fixed at the call site and the per-pixel
//! path has no dispatch at all:
//!
//! ```rust
//! use clearpng_color::distance::{distance, Euclidean, WeightedEuclidean};
//! use clearpng_core::RgbPixel;
//!
//! let a = RgbPixel::from_array([0, 0, 0]);
//! let b = RgbPixel::from_array([3, 4, 0]);
//! assert_eq!(distance::<Euclidean>(a, b), 5.0);
//! // mean red is 1, so the weights are (2, 4, 3): sqrt(2*9 + 4*16)
//! assert!((distance::<WeightedEuclidean>(a, b) - 82f32.sqrt()).abs() < 1e-5);
//! ```
//!
//! # Runtime Selection
//!
//! When the metric comes from configuration, [`Algorithm::resolve`] matches
//! once and hands back a plain function pointer to use inside the loop:
//!
//! ```rust
//! use clearpng_color::Algorithm;
//! use clearpng_core::RgbPixel;
//!
//! let metric = "cielab".parse::<Algorithm>().unwrap().resolve();
//! let d = metric(RgbPixel::BLACK, RgbPixel::WHITE);
//! assert!((d - 100.0).abs() < 0.01);
//! ```

use crate::error::{ColorError, ColorResult};
use crate::lab::Lab;
use clearpng_core::RgbPixel;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Signature shared by all distance functions.
pub type DistanceFn = fn(RgbPixel, RgbPixel) -> f32;

/// A color distance metric selected at compile time.
pub trait DistanceAlgorithm: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Runtime tag of this algorithm.
    const ALGORITHM: Algorithm;

    /// Non-negative dissimilarity between two pixels.
    fn distance(a: RgbPixel, b: RgbPixel) -> f32;
}

/// Plain RGB Euclidean distance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Euclidean;

/// RGB Euclidean distance weighted by mean red.
///
/// With `mean = (R1 + R2) / 2`, the squared deltas are weighted `(2, 4, 3)`
/// when `mean < 128` and `(3, 4, 2)` otherwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WeightedEuclidean;

/// CIE76 delta E: Euclidean distance in CIELAB.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cielab;

/// Signed channel deltas `a - b`.
#[inline]
fn deltas(a: RgbPixel, b: RgbPixel) -> [i32; 3] {
    let [ar, ag, ab] = a.to_array();
    let [br, bg, bb] = b.to_array();
    [
        i32::from(ar) - i32::from(br),
        i32::from(ag) - i32::from(bg),
        i32::from(ab) - i32::from(bb),
    ]
}

impl DistanceAlgorithm for Euclidean {
    const ALGORITHM: Algorithm = Algorithm::Euclidean;

    #[inline]
    fn distance(a: RgbPixel, b: RgbPixel) -> f32 {
        let [dr, dg, db] = deltas(a, b);
        let sum = dr * dr + dg * dg + db * db;
        f64::from(sum).sqrt() as f32
    }
}

impl DistanceAlgorithm for WeightedEuclidean {
    const ALGORITHM: Algorithm = Algorithm::WeightedEuclidean;

    #[inline]
    fn distance(a: RgbPixel, b: RgbPixel) -> f32 {
        let mean_red = (i32::from(a.red().get()) + i32::from(b.red().get())) / 2;
        let (wr, wg, wb) = if mean_red < 128 { (2, 4, 3) } else { (3, 4, 2) };

        let [dr, dg, db] = deltas(a, b);
        let sum = wr * dr * dr + wg * dg * dg + wb * db * db;
        f64::from(sum).sqrt() as f32
    }
}

impl DistanceAlgorithm for Cielab {
    const ALGORITHM: Algorithm = Algorithm::Cielab;

    #[inline]
    fn distance(a: RgbPixel, b: RgbPixel) -> f32 {
        Lab::from_pixel(a).delta_e(Lab::from_pixel(b)) as f32
    }
}

/// Distance between two pixels using the algorithm `A`.
#[inline]
pub fn distance<A: DistanceAlgorithm>(a: RgbPixel, b: RgbPixel) -> f32 {
    A::distance(a, b)
}

/// Runtime name of a distance algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// See [`Euclidean`].
    #[default]
    Euclidean,
    /// See [`WeightedEuclidean`].
    WeightedEuclidean,
    /// See [`Cielab`].
    #[cfg_attr(feature = "serde", serde(alias = "delta-e"))]
    Cielab,
}

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Self; 3] = [Self::Euclidean, Self::WeightedEuclidean, Self::Cielab];

    /// Canonical lowercase name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::WeightedEuclidean => "weighted-euclidean",
            Self::Cielab => "cielab",
        }
    }

    /// Returns the distance function for this algorithm.
    ///
    /// Call once, outside per-pixel loops.
    pub fn resolve(self) -> DistanceFn {
        debug!(algorithm = self.name(), "resolved distance algorithm");
        match self {
            Self::Euclidean => distance::<Euclidean>,
            Self::WeightedEuclidean => distance::<WeightedEuclidean>,
            Self::Cielab => distance::<Cielab>,
        }
    }

    /// Distance between two pixels. Matches on every call; see [`resolve`](Self::resolve).
    #[inline]
    pub fn distance(self, a: RgbPixel, b: RgbPixel) -> f32 {
        match self {
            Self::Euclidean => Euclidean::distance(a, b),
            Self::WeightedEuclidean => WeightedEuclidean::distance(a, b),
            Self::Cielab => Cielab::distance(a, b),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        match name.as_str() {
            "euclidean" => Ok(Self::Euclidean),
            "weighted-euclidean" => Ok(Self::WeightedEuclidean),
            "cielab" | "delta-e" => Ok(Self::Cielab),
            _ => Err(ColorError::UnknownAlgorithm(s.trim().to_string())),
        }
    }
}

/// Index of the palette entry closest to `target` under `A`.
///
/// The first entry wins ties. Returns `None` for an empty palette.
///
/// ```rust
/// use clearpng_color::distance::{nearest, Cielab};
/// use clearpng_core::RgbPixel;
///
/// let palette = [RgbPixel::BLACK, RgbPixel::WHITE, RgbPixel::from_array([255, 0, 0])];
/// assert_eq!(nearest::<Cielab>(RgbPixel::from_array([200, 30, 20]), &palette), Some(2));
/// ```
#[inline]
pub fn nearest<A: DistanceAlgorithm>(target: RgbPixel, palette: &[RgbPixel]) -> Option<usize> {
    nearest_by(A::distance, target, palette)
}

/// Like [`nearest`], with a metric obtained from [`Algorithm::resolve`].
pub fn nearest_by(metric: DistanceFn, target: RgbPixel, palette: &[RgbPixel]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &entry) in palette.iter().enumerate() {
        let d = metric(target, entry);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }

    trace!(%target, palette = palette.len(), best = ?best, "nearest color");
    best.map(|(i, _)| i)
}
