//! Multi-band raster image

use crate::band::Band;
use crate::error::{Error, Result};
use crate::space::ColorSpace;

/// A multi-band raster: an ordered list of equally-sized [`Band`]s
/// tagged with the [`ColorSpace`] the samples live in.
///
/// Conversions never mutate their input; every conversion allocates a
/// fresh `Image` owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    bands: Vec<Band>,
    space: ColorSpace,
}

impl Image {
    /// Create a zero-filled image with the band count of `space`.
    pub fn new(space: ColorSpace, width: usize, height: usize) -> Self {
        let bands = (0..space.band_count())
            .map(|_| Band::new(width, height))
            .collect();
        Self { bands, space }
    }

    /// Assemble an image from existing bands.
    ///
    /// The band count must match `space.band_count()` and all bands must
    /// share the same dimensions. [`ColorSpace::Custom`] carries no band
    /// count of its own and accepts any non-empty band list.
    pub fn from_bands(space: ColorSpace, bands: Vec<Band>) -> Result<Self> {
        if space == ColorSpace::Custom {
            if bands.is_empty() {
                return Err(Error::BandCountMismatch {
                    expected: 1,
                    actual: 0,
                });
            }
        } else if bands.len() != space.band_count() {
            return Err(Error::BandCountMismatch {
                expected: space.band_count(),
                actual: bands.len(),
            });
        }
        let (w, h) = (bands[0].width(), bands[0].height());
        for band in &bands[1..] {
            if band.width() != w || band.height() != h {
                return Err(Error::DimensionMismatch {
                    ew: w,
                    eh: h,
                    aw: band.width(),
                    ah: band.height(),
                });
            }
        }
        Ok(Self { bands, space })
    }

    /// Assemble an image from bands already known to be consistent.
    pub(crate) fn from_bands_unchecked(space: ColorSpace, bands: Vec<Band>) -> Self {
        Self { bands, space }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.bands[0].width()
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.bands[0].height()
    }

    /// Number of bands.
    pub fn num_bands(&self) -> usize {
        self.bands.len()
    }

    /// The colour space the samples live in.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Borrow band `i`. Panics if `i` is out of range.
    pub fn band(&self, i: usize) -> &Band {
        &self.bands[i]
    }

    /// Mutably borrow band `i`. Panics if `i` is out of range.
    pub fn band_mut(&mut self, i: usize) -> &mut Band {
        &mut self.bands[i]
    }

    /// All bands in order.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Consume the image and return its bands.
    pub fn into_bands(self) -> Vec<Band> {
        self.bands
    }

    /// Return the same pixel data re-tagged with another colour space.
    ///
    /// This is a relabelling, not a conversion; the band count of the
    /// new space must match.
    pub fn with_space(self, space: ColorSpace) -> Result<Self> {
        Image::from_bands(space, self.bands)
    }

    /// Gather the pixel at (x, y) across all bands.
    pub fn pixel(&self, x: usize, y: usize) -> Result<Vec<f64>> {
        self.bands.iter().map(|b| b.get(x, y)).collect()
    }

    /// Write a pixel at (x, y) across all bands.
    pub fn set_pixel(&mut self, x: usize, y: usize, values: &[f64]) -> Result<()> {
        if values.len() != self.bands.len() {
            return Err(Error::BandCountMismatch {
                expected: self.bands.len(),
                actual: values.len(),
            });
        }
        for (band, &v) in self.bands.iter_mut().zip(values) {
            band.set(x, y, v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_allocates_band_count_of_space() {
        let img = Image::new(ColorSpace::Rgba, 8, 4);
        assert_eq!(img.num_bands(), 4);
        assert_eq!(img.width(), 8);
        assert_eq!(img.height(), 4);
    }

    #[test]
    fn from_bands_rejects_wrong_count() {
        let bands = vec![Band::new(2, 2), Band::new(2, 2)];
        assert!(matches!(
            Image::from_bands(ColorSpace::Rgb, bands),
            Err(Error::BandCountMismatch { .. })
        ));
    }

    #[test]
    fn from_bands_rejects_mismatched_dims() {
        let bands = vec![Band::new(2, 2), Band::new(2, 2), Band::new(3, 2)];
        assert!(matches!(
            Image::from_bands(ColorSpace::Rgb, bands),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn pixel_round_trip() {
        let mut img = Image::new(ColorSpace::Rgb, 4, 4);
        img.set_pixel(1, 2, &[0.2, 0.4, 0.6]).unwrap();
        assert_eq!(img.pixel(1, 2).unwrap(), vec![0.2, 0.4, 0.6]);
    }
}
