//! # clearpng-color
//!
//! Color science for ClearPNG pixels: sRGB decoding, CIE XYZ / CIELAB
//! conversion and color distance metrics.
//!
//! # Pipeline
//!
//! ```text
//! RgbPixel (8-bit sRGB)
//!     |  transfer::srgb_eotf      inverse gamma, per channel
//!     v
//! linear RGB [0, 1]
//!     |  xyz::SRGB_TO_XYZ         D65 matrix, scaled to 0..100
//!     v
//! Xyz
//!     |  Lab::from_xyz            cube root / linear piecewise, D65 white
//!     v
//! Lab  --->  delta E (CIE76)
//! ```
//!
//! # Distance Metrics
//!
//! | Algorithm | Space | Notes |
//! |-----------|-------|-------|
//! | [`Euclidean`] | sRGB bytes | cheapest |
//! | [`WeightedEuclidean`] | sRGB bytes | weights follow mean red |
//! | [`Cielab`] | CIELAB | perceptual, most expensive |
//!
//! ```rust
//! use clearpng_color::{distance, Cielab, Euclidean};
//! use clearpng_core::RgbPixel;
//!
//! let a = RgbPixel::from_array([10, 102, 204]);
//! let b = RgbPixel::from_array([12, 100, 200]);
//!
//! assert!(distance::<Euclidean>(a, b) < 5.0);
//! assert!(distance::<Cielab>(a, b) < 2.0);
//! ```
//!
//! # Dependencies
//!
//! - [`clearpng-core`] - Pixel types
//! - [`glam`] - Matrix math
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Xyz`], [`Lab`] and [`Algorithm`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod distance;
pub mod error;
pub mod lab;
pub mod transfer;
pub mod xyz;

pub use distance::{
    distance, nearest, nearest_by, Algorithm, Cielab, DistanceAlgorithm, DistanceFn, Euclidean,
    WeightedEuclidean,
};
pub use error::{ColorError, ColorResult};
pub use lab::Lab;
pub use xyz::Xyz;
