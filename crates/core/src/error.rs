//! Error types for prismatic

use crate::space::ColorSpace;
use thiserror::Error;

/// Main error type for prismatic operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("no conversion from RGB is defined for {0:?}")]
    UnsupportedFromRgb(ColorSpace),

    #[error("no conversion to RGB is defined for {0:?}")]
    UnsupportedToRgb(ColorSpace),

    #[error("{operation} requires {expected} input, got {actual:?}")]
    WrongColorSpace {
        operation: &'static str,
        expected: &'static str,
        actual: ColorSpace,
    },

    #[error("band count mismatch: expected {expected}, got {actual}")]
    BandCountMismatch { expected: usize, actual: usize },

    #[error("band dimensions differ: {ew}x{eh} vs {aw}x{ah}")]
    DimensionMismatch {
        ew: usize,
        eh: usize,
        aw: usize,
        ah: usize,
    },

    #[error("index out of bounds: ({x}, {y}) in band of size ({width}, {height})")]
    IndexOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// Result type alias for prismatic operations
pub type Result<T> = std::result::Result<T, Error>;
