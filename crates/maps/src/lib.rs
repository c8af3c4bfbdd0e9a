//! # prismatic-maps
//!
//! Colour maps: functions from a scalar in `[0, 1]` to an RGB triple,
//! used to pseudo-colour scalar data.
//!
//! Two kinds of map exist. Interpolated maps evaluate closed-form
//! piecewise formulas (the classic Octave maps: [`ColorMap::JET`],
//! [`ColorMap::HOT`], ...). Discrete maps bucket the input into a fixed
//! palette (the custom [`ColorMap::RGBYMC`]/[`ColorMap::PRISM`] maps
//! and every ColorBrewer scheme from 3 to 12 colours).
//!
//! Maps are selected by associated const or by name:
//!
//! ```
//! use prismatic_maps::ColorMap;
//!
//! let jet = ColorMap::JET;
//! let rgb = jet.apply(0.5);
//!
//! let spectral = ColorMap::by_name("Spectral9").unwrap();
//! assert_eq!(spectral.palette().unwrap().len(), 9);
//! ```

mod brewer;
mod octave;

use lazy_static::lazy_static;
use prismatic_core::maybe_rayon::*;
use prismatic_core::{Band, ColorSpace, Image};

/// Semantic classification of a colour map, following the ColorBrewer
/// taxonomy. The type describes the data a map suits; it does not
/// affect evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapType {
    /// Ordered data progressing from low to high.
    Sequential,
    /// Nominal or categorical data with no implied magnitude.
    Qualitative,
    /// Data diverging from a critical midpoint, with emphasis on both
    /// extremes.
    Diverging,
}

/// Whether a map interpolates a formula or buckets into a fixed
/// palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapMode {
    /// Continuous closed-form formula per channel.
    Interpolated,
    /// Lookup into a fixed, ordered palette; no interpolation between
    /// entries.
    Discrete,
}

#[derive(Clone, Copy)]
enum Eval {
    Formula(fn(f64) -> [f64; 3]),
    Palette(&'static [[f64; 3]]),
}

/// An immutable named mapping from `[0, 1]` to RGB.
///
/// `ColorMap` is a small strategy value: a name, its semantic
/// [`MapType`], its [`MapMode`], and either a formula or an embedded
/// palette. All maps are `Copy` and can be freely passed around.
#[derive(Clone, Copy)]
pub struct ColorMap {
    name: &'static str,
    typ: MapType,
    mode: MapMode,
    eval: Eval,
}

impl std::fmt::Debug for ColorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorMap")
            .field("name", &self.name)
            .field("typ", &self.typ)
            .field("mode", &self.mode)
            .finish()
    }
}

impl PartialEq for ColorMap {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ColorMap {}

macro_rules! formula_map {
    ($name:literal, $typ:ident, $f:path) => {
        ColorMap {
            name: $name,
            typ: MapType::$typ,
            mode: MapMode::Interpolated,
            eval: Eval::Formula($f),
        }
    };
}

macro_rules! palette_map {
    ($name:literal, $typ:ident, $palette:expr) => {
        ColorMap {
            name: $name,
            typ: MapType::$typ,
            mode: MapMode::Discrete,
            eval: Eval::Palette($palette),
        }
    };
}

impl ColorMap {
    /// Octave Autumn map: red through orange to yellow.
    pub const AUTUMN: ColorMap = formula_map!("Autumn", Sequential, octave::autumn);
    /// Octave Bone map: black to white with gray-blue shades.
    pub const BONE: ColorMap = formula_map!("Bone", Sequential, octave::bone);
    /// Octave Cool map: cyan to magenta.
    pub const COOL: ColorMap = formula_map!("Cool", Sequential, octave::cool);
    /// Octave Copper map: black to a light copper tone.
    pub const COPPER: ColorMap = formula_map!("Copper", Sequential, octave::copper);
    /// Octave Hot map: black through red and yellow to white.
    pub const HOT: ColorMap = formula_map!("Hot", Sequential, octave::hot);
    /// Octave HSV map: the full hue circle, returning to red.
    pub const HSV: ColorMap = formula_map!("HSV", Qualitative, octave::hsv);
    /// Octave Jet map: dark blue through cyan, green and yellow to dark
    /// red.
    pub const JET: ColorMap = formula_map!("Jet", Qualitative, octave::jet);
    /// Octave Spring map: magenta to yellow.
    pub const SPRING: ColorMap = formula_map!("Spring", Sequential, octave::spring);
    /// Octave Summer map: green to yellow.
    pub const SUMMER: ColorMap = formula_map!("Summer", Sequential, octave::summer);
    /// Octave Rainbow map: red through green and blue to violet.
    pub const RAINBOW: ColorMap = formula_map!("Rainbow", Qualitative, octave::rainbow);
    /// Octave Winter map: blue to green.
    pub const WINTER: ColorMap = formula_map!("Winter", Sequential, octave::winter);
    /// Sepia map, based on the Octave Pink map.
    pub const SEPIA: ColorMap = formula_map!("Sepia", Sequential, octave::sepia);
    /// Red, green, blue, yellow, magenta, cyan.
    pub const RGBYMC: ColorMap = palette_map!("RGBYMC", Qualitative, &octave::RGBYMC);
    /// Discrete rainbow: red, orange, yellow, green, blue, violet.
    pub const PRISM: ColorMap = palette_map!("Prism", Qualitative, &octave::PRISM);

    const OCTAVE: &'static [ColorMap] = &[
        Self::AUTUMN,
        Self::BONE,
        Self::COOL,
        Self::COPPER,
        Self::HOT,
        Self::HSV,
        Self::JET,
        Self::SPRING,
        Self::SUMMER,
        Self::RAINBOW,
        Self::WINTER,
        Self::SEPIA,
        Self::RGBYMC,
        Self::PRISM,
    ];

    /// Every registered colour map: the Octave maps, the custom
    /// discrete maps, and all ColorBrewer schemes.
    pub fn all() -> &'static [ColorMap] {
        REGISTRY.as_slice()
    }

    /// Look a map up by name, e.g. `"Jet"` or `"RdBu9"`.
    pub fn by_name(name: &str) -> Option<ColorMap> {
        Self::all().iter().copied().find(|m| m.name == name)
    }

    /// The map's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Semantic classification.
    pub fn map_type(&self) -> MapType {
        self.typ
    }

    /// Interpolated or discrete.
    pub fn mode(&self) -> MapMode {
        self.mode
    }

    /// The embedded palette of a discrete map, or `None` for
    /// interpolated maps.
    pub fn palette(&self) -> Option<&'static [[f64; 3]]> {
        match self.eval {
            Eval::Palette(p) => Some(p),
            Eval::Formula(_) => None,
        }
    }

    /// Map a scalar in `[0, 1]` to an RGB triple.
    ///
    /// Behaviour outside `[0, 1]` is map-specific: formulas
    /// extrapolate along their active segment, palette lookups clamp.
    pub fn apply(&self, x: f64) -> [f64; 3] {
        match self.eval {
            Eval::Formula(f) => f(x),
            Eval::Palette(p) => {
                let i = ((x * p.len() as f64) as usize).min(p.len() - 1);
                p[i]
            }
        }
    }

    /// Pseudo-colour a single-channel raster, producing an RGB image of
    /// the same dimensions. Pixels are mapped independently.
    pub fn apply_image(&self, input: &Band) -> Image {
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
                    let rgb = self.apply(view[[y, x]]);
                    r[x] = rgb[0];
                    g[x] = rgb[1];
                    b[x] = rgb[2];
                }
                [r, g, b]
            })
            .collect();

        let bands: Vec<Band> = (0..3)
            .map(|c| Band::from_fn(width, height, |x, y| rows[y][c][x]))
            .collect();
        Image::from_bands(ColorSpace::Rgb, bands).expect("mapped bands share input dimensions")
    }

    /// Generate `n` representative colours spanning the map.
    ///
    /// The first and last samples are always `apply(0)` and `apply(1)`.
    /// If those endpoint colours are nearly identical (a cyclic map,
    /// e.g. HSV), interior samples are spaced `i/n` so the sequence
    /// does not wrap back onto the first colour; otherwise interior
    /// samples use `i/(n-1)` for even coverage.
    ///
    /// The near-identical check looks for any single channel differing
    /// by less than 1e-5, an inherited looseness kept for
    /// compatibility.
    pub fn generate_colors(&self, n: usize) -> Vec<[f64; 3]> {
        if n == 0 {
            return Vec::new();
        }

        let mut out = vec![[0.0; 3]; n];
        out[0] = self.apply(0.0);
        out[n - 1] = self.apply(1.0);

        let cyclic = out[0]
            .iter()
            .zip(out[n - 1].iter())
            .any(|(a, b)| (a - b).abs() < 1e-5);

        if cyclic {
            for (i, slot) in out.iter_mut().enumerate().take(n - 1).skip(1) {
                *slot = self.apply(i as f64 / n as f64);
            }
        } else {
            for (i, slot) in out.iter_mut().enumerate().take(n - 1).skip(1) {
                *slot = self.apply(i as f64 / (n - 1) as f64);
            }
        }
        out
    }

    /// Render a preview of the map: a `width` x `height` image whose
    /// columns sweep the map input from 0 on the left towards 1 on the
    /// right.
    pub fn visualise(&self, width: usize, height: usize) -> Image {
        let ramp = Band::from_fn(width, height, |x, _| x as f64 / width as f64);
        self.apply_image(&ramp)
    }

    /// [`visualise`](Self::visualise) at the conventional 256x100
    /// preview size.
    pub fn visualise_default(&self) -> Image {
        self.visualise(256, 100)
    }
}

lazy_static! {
    static ref REGISTRY: Vec<ColorMap> = {
        let mut maps = ColorMap::OCTAVE.to_vec();
        maps.extend(brewer::BREWER.iter().map(|entry| ColorMap {
            name: entry.name,
            typ: entry.typ,
            mode: MapMode::Discrete,
            eval: Eval::Palette(entry.palette),
        }));
        maps
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn registry_holds_every_map() {
        assert_eq!(ColorMap::all().len(), 278);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(ColorMap::by_name("Jet"), Some(ColorMap::JET));
        let rdbu = ColorMap::by_name("RdBu9").unwrap();
        assert_eq!(rdbu.map_type(), MapType::Diverging);
        assert_eq!(rdbu.mode(), MapMode::Discrete);
        assert_eq!(rdbu.palette().unwrap().len(), 9);
        assert_eq!(ColorMap::by_name("NoSuchMap"), None);
    }

    #[test]
    fn jet_at_midpoint() {
        let [r, g, b] = ColorMap::JET.apply(0.5);
        assert_abs_diff_eq!(r, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(g, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn discrete_lookup_buckets_without_interpolation() {
        let prism = ColorMap::PRISM;
        // anywhere inside a bucket returns the entry verbatim
        assert_eq!(prism.apply(0.0), prism.apply(0.16));
        assert_eq!(prism.apply(0.0), [1.0, 0.0, 0.0]);
        assert_eq!(prism.apply(0.999), [2.0 / 3.0, 0.0, 1.0]);
    }

    #[test]
    fn discrete_coverage() {
        for map in ColorMap::all() {
            let Some(palette) = map.palette() else {
                continue;
            };
            let k = palette.len();
            assert_eq!(map.apply(0.0), palette[0], "{}", map.name());
            assert_eq!(map.apply(1.0 - 1e-9), palette[k - 1], "{}", map.name());
            // every entry is reachable from some x
            for (i, entry) in palette.iter().enumerate() {
                let x = (i as f64 + 0.5) / k as f64;
                assert_eq!(map.apply(x), *entry, "{} index {i}", map.name());
            }
        }
    }

    #[test]
    fn brewer_palette_sizes_and_ranges() {
        for map in ColorMap::all() {
            if let Some(palette) = map.palette() {
                assert!((3..=12).contains(&palette.len()), "{}", map.name());
                for entry in palette {
                    for &v in entry {
                        assert!((0.0..=1.0).contains(&v), "{}", map.name());
                    }
                }
            }
        }
    }

    #[test]
    fn generate_colors_forces_endpoints() {
        for map in ColorMap::all() {
            for n in [2, 5, 16] {
                let colors = map.generate_colors(n);
                assert_eq!(colors.len(), n);
                assert_eq!(colors[0], map.apply(0.0), "{}", map.name());
                assert_eq!(colors[n - 1], map.apply(1.0), "{}", map.name());
            }
        }
    }

    #[test]
    fn generate_colors_cyclic_spacing() {
        // HSV wraps: endpoints identical, interior samples at i/n
        let colors = ColorMap::HSV.generate_colors(6);
        assert_eq!(colors[0], colors[5]);
        assert_eq!(colors[1], ColorMap::HSV.apply(1.0 / 6.0));
    }

    #[test]
    fn generate_colors_empty_and_single() {
        assert!(ColorMap::JET.generate_colors(0).is_empty());
        let one = ColorMap::JET.generate_colors(1);
        assert_eq!(one, vec![ColorMap::JET.apply(1.0)]);
    }

    #[test]
    fn apply_image_maps_every_pixel() {
        let band = Band::from_vec(vec![0.0, 0.5, 1.0, 0.25], 2, 2).unwrap();
        let img = ColorMap::JET.apply_image(&band);
        assert_eq!(img.space(), ColorSpace::Rgb);
        assert_eq!(img.num_bands(), 3);
        assert_eq!(img.pixel(0, 0).unwrap(), ColorMap::JET.apply(0.0).to_vec());
        assert_eq!(img.pixel(1, 0).unwrap(), ColorMap::JET.apply(0.5).to_vec());
        assert_eq!(img.pixel(1, 1).unwrap(), ColorMap::JET.apply(0.25).to_vec());
    }

    #[test]
    fn visualise_shape_and_gradient() {
        let img = ColorMap::HOT.visualise(64, 8);
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 8);
        // leftmost column is apply(0), and columns are constant down rows
        assert_eq!(img.pixel(0, 0).unwrap(), ColorMap::HOT.apply(0.0).to_vec());
        assert_eq!(img.pixel(0, 7).unwrap(), img.pixel(0, 0).unwrap());
        let default = ColorMap::HOT.visualise_default();
        assert_eq!((default.width(), default.height()), (256, 100));
    }

    #[test]
    fn range_property_over_dense_sample() {
        for map in ColorMap::all() {
            for i in 0..=256 {
                let x = i as f64 / 256.0;
                for (c, v) in map.apply(x).into_iter().enumerate() {
                    assert!(
                        (-1e-6..=1.0 + 1e-6).contains(&v),
                        "{} channel {c} out of range at {x}: {v}",
                        map.name()
                    );
                }
            }
        }
    }

    #[test]
    fn hsv_map_matches_shared_decoder() {
        use prismatic_core::transforms::hsv_to_rgb_pixel;
        for i in 0..=10 {
            let x = i as f64 / 10.0;
            assert_eq!(ColorMap::HSV.apply(x), hsv_to_rgb_pixel([x, 1.0, 1.0]));
        }
    }
}
