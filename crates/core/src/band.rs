//! Single-channel raster band

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2, ArrayViewMut2};

/// One channel of a raster image.
///
/// A `Band` stores floating-point samples in a 2D grid, indexed as
/// `(x, y)` with `x` the column and `y` the row. All prismatic
/// conversions treat samples as nominally lying in `[0, 1]`, but the
/// band itself imposes no range.
///
/// # Example
///
/// ```
/// use prismatic_core::Band;
///
/// let mut band = Band::new(64, 48);
/// band.set(10, 20, 0.5)?;
/// assert_eq!(band.get(10, 20)?, 0.5);
/// # Ok::<(), prismatic_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    /// Samples stored in row-major order (row, col)
    data: Array2<f64>,
}

impl Band {
    /// Create a new band filled with zeros.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: Array2::zeros((height, width)),
        }
    }

    /// Create a new band filled with a specific value.
    pub fn filled(width: usize, height: usize, value: f64) -> Self {
        Self {
            data: Array2::from_elem((height, width), value),
        }
    }

    /// Create a band by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        Self {
            data: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        }
    }

    /// Create a band from row-major data.
    pub fn from_vec(data: Vec<f64>, width: usize, height: usize) -> Result<Self> {
        if data.len() != width * height {
            return Err(Error::InvalidDimensions { width, height });
        }
        let array = Array2::from_shape_vec((height, width), data)
            .map_err(|_| Error::InvalidDimensions { width, height })?;
        Ok(Self { data: array })
    }

    /// Create a band from an ndarray (rows, cols).
    pub fn from_array(data: Array2<f64>) -> Self {
        Self { data }
    }

    /// Width in pixels (number of columns).
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// Height in pixels (number of rows).
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the band holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the sample at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<f64> {
        self.data
            .get((y, x))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
    }

    /// Set the sample at (x, y).
    pub fn set(&mut self, x: usize, y: usize, value: f64) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        match self.data.get_mut((y, x)) {
            Some(sample) => {
                *sample = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            }),
        }
    }

    /// Set every sample to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Get a view of the underlying data (rows, cols).
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Get a mutable view of the underlying data.
    pub fn view_mut(&mut self) -> ArrayViewMut2<'_, f64> {
        self.data.view_mut()
    }

    /// Get a reference to the underlying array.
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// Consume the band and return the underlying array.
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Minimum and maximum sample values, ignoring NaNs.
    pub fn min_max(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in self.data.iter() {
            if v.is_finite() {
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
            }
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation() {
        let band = Band::new(200, 100);
        assert_eq!(band.width(), 200);
        assert_eq!(band.height(), 100);
        assert_eq!(band.len(), 20000);
    }

    #[test]
    fn access() {
        let mut band = Band::new(10, 10);
        band.set(5, 7, 42.0).unwrap();
        assert_eq!(band.get(5, 7).unwrap(), 42.0);
        assert_eq!(band.get(7, 5).unwrap(), 0.0);
    }

    #[test]
    fn out_of_bounds() {
        let band = Band::new(4, 4);
        assert!(matches!(
            band.get(4, 0),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn from_fn_gradient() {
        let band = Band::from_fn(4, 2, |x, _| x as f64 / 4.0);
        assert_eq!(band.get(0, 0).unwrap(), 0.0);
        assert_eq!(band.get(3, 1).unwrap(), 0.75);
    }

    #[test]
    fn min_max_ignores_nan() {
        let band = Band::from_vec(vec![0.25, f64::NAN, 0.75, 0.5], 2, 2).unwrap();
        assert_eq!(band.min_max(), (0.25, 0.75));
    }
}
