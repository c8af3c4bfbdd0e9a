//! Greyscale-to-heatmap lookup
//!
//! A precomputed gamma table maps integer depth/grey levels to a
//! jet-like ramp (white, red, yellow, green, cyan, blue, black). The
//! table packs a 6-sector index and an 8-bit offset into one integer
//! per input level, so the per-pixel work is a single lookup plus a
//! sector switch. The table is an explicit value owned by the caller;
//! build it once and pass it by reference.

use crate::band::Band;
use crate::image::Image;
use crate::maybe_rayon::*;
use crate::space::ColorSpace;

/// Number of entries in the standard table.
pub const STANDARD_TABLE_LEN: usize = 2048;

/// Number of entries in the high-resolution table.
pub const HIGH_RESOLUTION_TABLE_LEN: usize = 10000;

/// Precomputed gamma lookup table for greyscale-to-heatmap mapping.
#[derive(Debug, Clone)]
pub struct DepthGammaTable {
    entries: Vec<u32>,
}

impl DepthGammaTable {
    /// Build a table with `len` entries: entry `i` holds
    /// `floor((i/2048)^3 * 6 * 6 * 256)` packed as (sector << 8) | offset.
    pub fn new(len: usize) -> Self {
        let entries = (0..len)
            .map(|i| {
                let v = (i as f64 / 2048.0).powi(3) * 6.0;
                (v * 6.0 * 256.0) as u32
            })
            .collect();
        Self { entries }
    }

    /// The standard 2048-entry table.
    pub fn standard() -> Self {
        Self::new(STANDARD_TABLE_LEN)
    }

    /// The 10000-entry table, for sources with finer depth resolution.
    pub fn high_resolution() -> Self {
        Self::new(HIGH_RESOLUTION_TABLE_LEN)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map a single grey level to RGB, channels in `[0, 1]`.
    ///
    /// The level is clamped to the table; sectors past the ramp are
    /// black.
    pub fn color_of(&self, level: usize) -> [f64; 3] {
        let packed = self.entries[level.min(self.entries.len() - 1)];
        let offset = (packed & 0xff) as f64;
        let (r, g, b) = match packed >> 8 {
            0 => (255.0, 255.0 - offset, 255.0 - offset), // white -> red
            1 => (255.0, offset, 0.0),                    // red -> yellow
            2 => (255.0 - offset, 255.0, 0.0),            // yellow -> green
            3 => (0.0, 255.0, offset),                    // green -> cyan
            4 => (0.0, 255.0 - offset, 255.0),            // cyan -> blue
            5 => (255.0 - offset, 0.0, 255.0 - offset),   // blue -> black
            _ => (0.0, 0.0, 0.0),
        };
        [r / 255.0, g / 255.0, b / 255.0]
    }

    /// Pseudo-colour a greyscale band whose pixels hold integer grey
    /// levels (table indices). Produces a fresh RGB image.
    pub fn grey_to_color(&self, input: &Band) -> Image {
        let width = input.width();
        let height = input.height();
        let view = input.view();

        let rows: Vec<[Vec<f64>; 3]> = (0..height)
            .into_par_iter()
            .map(|y| {
                let mut r = vec![0.0; width];
                let mut g = vec![0.0; width];
                let mut b = vec![0.0; width];
                for x in 0..width {
                    let level = view[[y, x]].max(0.0) as usize;
                    let rgb = self.color_of(level);
                    r[x] = rgb[0];
                    g[x] = rgb[1];
                    b[x] = rgb[2];
                }
                [r, g, b]
            })
            .collect();

        let bands = (0..3)
            .map(|c| Band::from_fn(width, height, |x, y| rows[y][c][x]))
            .collect();
        Image::from_bands_unchecked(ColorSpace::Rgb, bands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lengths() {
        assert_eq!(DepthGammaTable::standard().len(), 2048);
        assert_eq!(DepthGammaTable::high_resolution().len(), 10000);
    }

    #[test]
    fn level_zero_is_white() {
        let table = DepthGammaTable::standard();
        assert_eq!(table.color_of(0), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn saturated_level_is_black() {
        // the high-resolution table reaches sectors past the ramp
        let table = DepthGammaTable::high_resolution();
        assert_eq!(table.color_of(9999), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn out_of_range_level_clamps() {
        let table = DepthGammaTable::standard();
        assert_eq!(table.color_of(1_000_000), table.color_of(2047));
    }

    #[test]
    fn ramp_is_ordered_white_to_blue() {
        let table = DepthGammaTable::standard();
        // sector boundaries appear in packed order as levels increase
        let mut last_sector = 0;
        for i in 0..table.len() {
            let sector = table.entries[i] >> 8;
            assert!(sector >= last_sector, "sector decreased at level {i}");
            last_sector = sector;
        }
    }

    #[test]
    fn grey_to_color_maps_per_pixel() {
        let table = DepthGammaTable::standard();
        let band = Band::from_vec(vec![0.0, 2047.0], 2, 1).unwrap();
        let img = table.grey_to_color(&band);
        assert_eq!(img.space(), ColorSpace::Rgb);
        assert_eq!(img.pixel(0, 0).unwrap(), vec![1.0, 1.0, 1.0]);
        assert_eq!(img.pixel(1, 0).unwrap(), table.color_of(2047).to_vec());
    }
}
