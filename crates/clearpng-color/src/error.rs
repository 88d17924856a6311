//! Error types for clearpng-color.
//!
//! Color math itself cannot fail. Errors come from text input: unknown
//! distance algorithm names and malformed hex colors.

use clearpng_core::ParseColorError;
use thiserror::Error;

/// Color operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Distance algorithm name not recognized.
    #[error("unknown distance algorithm {0:?} (expected euclidean, weighted-euclidean or cielab)")]
    UnknownAlgorithm(String),

    /// Hex color could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ParseColorError),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
