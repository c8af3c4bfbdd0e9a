//! # prismatic-core
//!
//! Multi-band raster model and colour space conversions.
//!
//! This crate provides:
//! - [`Band`]: a single channel of floating-point samples
//! - [`Image`]: a multi-band raster tagged with a [`ColorSpace`]
//! - [`ColorSpace`]: named colour spaces with conversions to and from RGB
//! - [`transforms`]: the per-pixel conversion formulas behind the dispatch
//! - [`DepthGammaTable`]: a precomputed greyscale-to-heatmap lookup
//!
//! All operations are pure: conversions allocate fresh images and never
//! mutate their input. Pixels are independent, so whole-raster
//! operations run row-parallel when the `parallel` feature (default) is
//! enabled.

pub mod band;
pub mod error;
pub mod heatmap;
pub mod image;
pub mod maybe_rayon;
pub mod space;
pub mod transforms;

pub use band::Band;
pub use error::{Error, Result};
pub use heatmap::DepthGammaTable;
pub use image::Image;
pub use space::ColorSpace;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::band::Band;
    pub use crate::error::{Error, Result};
    pub use crate::heatmap::DepthGammaTable;
    pub use crate::image::Image;
    pub use crate::space::ColorSpace;
}
