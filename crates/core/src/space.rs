//! Colour space variants and conversion dispatch

use crate::band::Band;
use crate::error::{Error, Result};
use crate::image::Image;
use crate::transforms;

/// The colour spaces an [`Image`] can be tagged with.
///
/// Every variant is a stateless strategy: it knows its band count and
/// how to convert to and from the canonical RGB representation, where a
/// formula exists. Directions with no formula fail with
/// [`Error::UnsupportedToRgb`]/[`Error::UnsupportedFromRgb`] rather than
/// approximating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Canonical RGB
    Rgb,
    /// RGB with an alpha band
    Rgba,
    /// Hue/saturation/value
    Hsv,
    /// Hue/saturation/intensity (Sonka, Hlavac & Boyle decomposition)
    Hsi,
    /// Hue/saturation/lightness
    Hsl,
    /// Hue/saturation/NTSC luminance
    Hsy,
    /// Hue/saturation only
    Hs,
    /// Hue/saturation taken from the HSV decomposition
    Hs2,
    /// Two-component hue (breakpoints at 1/4, 1/2, 3/4)
    H1H2,
    /// Two-component hue (breakpoints at 1/6, 1/3, 2/3)
    H1H2v2,
    /// Two-component hue plus saturation and value
    H2sv,
    /// Variant-2 two-component hue plus saturation and value
    H2sv2,
    /// Two-component hue plus saturation
    H2s,
    /// Variant-2 two-component hue plus saturation
    H2s2,
    /// Single-band luminance from averaging R, G, B
    LuminanceAvg,
    /// Single-band luminance with NTSC perceptual weights
    LuminanceNtsc,
    /// Single-band hue
    Hue,
    /// Single-band saturation
    Saturation,
    /// RGB scaled to unit Euclidean length per pixel
    RgbIntensityNormalised,
    /// CIE XYZ (D65, sRGB companding)
    CieXyz,
    /// CIE L*a*b*
    CieLab,
    /// CIE L*u*v*
    CieLuv,
    /// YUV with BT.601 weights
    Yuv,
    /// YUV with all channels rescaled to [0, 1]
    YuvNorm,
    /// Opponent colour space (red-green, blue-yellow, intensity)
    Opponent,
    /// Opponent space with intensity-normalised chromatic axes
    ModifiedOpponent,
    /// An unknown colour space; no conversions are defined
    Custom,
}

impl ColorSpace {
    /// Every supported colour space.
    pub const ALL: &'static [ColorSpace] = &[
        Self::Rgb,
        Self::Rgba,
        Self::Hsv,
        Self::Hsi,
        Self::Hsl,
        Self::Hsy,
        Self::Hs,
        Self::Hs2,
        Self::H1H2,
        Self::H1H2v2,
        Self::H2sv,
        Self::H2sv2,
        Self::H2s,
        Self::H2s2,
        Self::LuminanceAvg,
        Self::LuminanceNtsc,
        Self::Hue,
        Self::Saturation,
        Self::RgbIntensityNormalised,
        Self::CieXyz,
        Self::CieLab,
        Self::CieLuv,
        Self::Yuv,
        Self::YuvNorm,
        Self::Opponent,
        Self::ModifiedOpponent,
        Self::Custom,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Hsv => "HSV",
            Self::Hsi => "HSI",
            Self::Hsl => "HSL",
            Self::Hsy => "HSY",
            Self::Hs => "HS",
            Self::Hs2 => "HS_2",
            Self::H1H2 => "H1H2",
            Self::H1H2v2 => "H1H2_2",
            Self::H2sv => "H2SV",
            Self::H2sv2 => "H2SV_2",
            Self::H2s => "H2S",
            Self::H2s2 => "H2S_2",
            Self::LuminanceAvg => "LUMINANCE_AVG",
            Self::LuminanceNtsc => "LUMINANCE_NTSC",
            Self::Hue => "HUE",
            Self::Saturation => "SATURATION",
            Self::RgbIntensityNormalised => "RGB_INTENSITY_NORMALISED",
            Self::CieXyz => "CIE_XYZ",
            Self::CieLab => "CIE_Lab",
            Self::CieLuv => "CIE_Luv",
            Self::Yuv => "YUV",
            Self::YuvNorm => "YUV_Norm",
            Self::Opponent => "OPPONENT",
            Self::ModifiedOpponent => "MODIFIED_OPPONENT",
            Self::Custom => "CUSTOM",
        }
    }

    /// Look a colour space up by its name.
    pub fn by_name(name: &str) -> Option<ColorSpace> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// The number of bands this colour space requires.
    pub fn band_count(&self) -> usize {
        match self {
            Self::Rgb
            | Self::Hsv
            | Self::Hsi
            | Self::Hsl
            | Self::Hsy
            | Self::H2s
            | Self::H2s2
            | Self::RgbIntensityNormalised
            | Self::CieXyz
            | Self::CieLab
            | Self::CieLuv
            | Self::Yuv
            | Self::YuvNorm
            | Self::Opponent
            | Self::ModifiedOpponent => 3,
            Self::Rgba | Self::H2sv | Self::H2sv2 => 4,
            Self::Hs | Self::Hs2 | Self::H1H2 | Self::H1H2v2 => 2,
            Self::LuminanceAvg
            | Self::LuminanceNtsc
            | Self::Hue
            | Self::Saturation
            | Self::Custom => 1,
        }
    }

    /// Convert an RGB (or RGBA) image to this colour space.
    pub fn convert_from_rgb(&self, input: &Image) -> Result<Image> {
        match self {
            Self::Rgb => {
                transforms::require_rgb(input, "convert_from_rgb")?;
                let bands = input.bands()[..3].to_vec();
                Image::from_bands(Self::Rgb, bands)
            }
            Self::Rgba => {
                transforms::require_rgb(input, "convert_from_rgb")?;
                let mut bands = input.bands()[..3].to_vec();
                bands.push(Band::new(input.width(), input.height()));
                Image::from_bands(Self::Rgba, bands)
            }
            Self::Hsv => transforms::rgb_to_hsv(input),
            Self::Hsi => transforms::rgb_to_hsi(input),
            Self::Hsl => transforms::rgb_to_hsl(input),
            Self::Hsy => transforms::rgb_to_hsy(input),
            Self::Hs => transforms::rgb_to_hs(input),
            Self::Hs2 => transforms::rgb_to_hs2(input),
            Self::H1H2 => Ok(transforms::h_to_h1h2(&transforms::calculate_hue(input)?)),
            Self::H1H2v2 => Ok(transforms::h_to_h1h2_v2(&transforms::calculate_hue(input)?)),
            Self::H2sv => transforms::rgb_to_h2sv(input),
            Self::H2sv2 => transforms::rgb_to_h2sv2(input),
            Self::H2s => transforms::rgb_to_h2s(input),
            Self::H2s2 => transforms::rgb_to_h2s2(input),
            Self::LuminanceAvg => {
                let band = transforms::calculate_intensity(input)?;
                Image::from_bands(Self::LuminanceAvg, vec![band])
            }
            Self::LuminanceNtsc => {
                let band = transforms::calculate_intensity_ntsc(input)?;
                Image::from_bands(Self::LuminanceNtsc, vec![band])
            }
            Self::Hue => {
                let band = transforms::calculate_hue(input)?;
                Image::from_bands(Self::Hue, vec![band])
            }
            Self::Saturation => {
                let band = transforms::calculate_saturation(input)?;
                Image::from_bands(Self::Saturation, vec![band])
            }
            Self::RgbIntensityNormalised => transforms::rgb_to_rgb_normalised(input),
            Self::CieXyz => transforms::rgb_to_ciexyz(input),
            Self::CieLab => transforms::rgb_to_cielab(input),
            Self::CieLuv => transforms::rgb_to_cieluv(input),
            Self::Yuv => transforms::rgb_to_yuv(input),
            Self::YuvNorm => transforms::rgb_to_yuv_normalised(input),
            Self::Opponent => transforms::rgb_to_opponent(input),
            Self::ModifiedOpponent => transforms::rgb_to_modified_opponent(input),
            Self::Custom => Err(Error::UnsupportedFromRgb(*self)),
        }
    }

    /// Convert an image in this colour space to RGB.
    pub fn convert_to_rgb(&self, input: &Image) -> Result<Image> {
        match self {
            Self::Rgb => Ok(input.clone()),
            Self::Rgba => {
                let bands = input.bands()[..3].to_vec();
                Image::from_bands(Self::Rgb, bands)
            }
            Self::Hsv => transforms::hsv_to_rgb(input),
            Self::H2sv => transforms::hsv_to_rgb(&transforms::h2sv_to_hsv_simple(input)?),
            Self::H2sv2 => transforms::hsv_to_rgb(&transforms::h2sv2_to_hsv_simple(input)?),
            Self::LuminanceAvg | Self::LuminanceNtsc | Self::Hue | Self::Saturation => {
                let band = input.band(0);
                Image::from_bands(Self::Rgb, vec![band.clone(), band.clone(), band.clone()])
            }
            Self::RgbIntensityNormalised => {
                let bands = input.bands().to_vec();
                Image::from_bands(Self::Rgb, bands)
            }
            Self::CieXyz => transforms::ciexyz_to_rgb(input),
            Self::CieLab => transforms::cielab_to_rgb(input),
            Self::CieLuv => transforms::cieluv_to_rgb(input),
            Self::Yuv => transforms::yuv_to_rgb(input),
            Self::YuvNorm => transforms::yuv_normalised_to_rgb(input),
            Self::Hsi
            | Self::Hsl
            | Self::Hsy
            | Self::Hs
            | Self::Hs2
            | Self::H1H2
            | Self::H1H2v2
            | Self::H2s
            | Self::H2s2
            | Self::Opponent
            | Self::ModifiedOpponent
            | Self::Custom => Err(Error::UnsupportedToRgb(*self)),
        }
    }

    /// Convert any image to this colour space, routing through RGB.
    pub fn convert(&self, input: &Image) -> Result<Image> {
        self.convert_from_rgb(&input.space().convert_to_rgb(input)?)
    }

    /// Whether both conversion directions have a formula.
    pub fn is_invertible(&self) -> bool {
        !matches!(
            self,
            Self::Hsi
                | Self::Hsl
                | Self::Hsy
                | Self::Hs
                | Self::Hs2
                | Self::H1H2
                | Self::H1H2v2
                | Self::H2s
                | Self::H2s2
                | Self::Opponent
                | Self::ModifiedOpponent
                | Self::Custom
        )
    }

    /// Derive a scalar intensity from a pixel in this space, or 0 where
    /// intensity is not meaningful.
    pub fn compute_intensity(&self, pixel: &[f64]) -> f64 {
        let channel = |i: usize| pixel.get(i).copied().unwrap_or(0.0);
        match self {
            Self::Rgb | Self::Rgba => (channel(0) + channel(1) + channel(2)) / 3.0,
            Self::Hsv | Self::Hsi | Self::Hsl | Self::Hsy => channel(2),
            Self::H2sv | Self::H2sv2 => channel(3),
            Self::LuminanceAvg | Self::LuminanceNtsc => channel(0),
            Self::CieXyz => channel(1),
            Self::CieLab | Self::CieLuv => channel(0),
            Self::Yuv | Self::YuvNorm => channel(0),
            Self::Opponent => channel(2),
            Self::Hs
            | Self::Hs2
            | Self::H1H2
            | Self::H1H2v2
            | Self::H2s
            | Self::H2s2
            | Self::Hue
            | Self::Saturation
            | Self::RgbIntensityNormalised
            | Self::ModifiedOpponent
            | Self::Custom => 0.0,
        }
    }

    /// Pad a colour to the band count of this space.
    ///
    /// A single channel is broadcast to every band; a colour with some
    /// but not enough channels is padded with 1.0 (full intensity or
    /// opacity). Colours with enough or more channels pass through
    /// unchanged; extra trailing channels are tolerated, not truncated.
    pub fn sanitise(&self, pixel: &[f64]) -> Vec<f64> {
        let n = self.band_count();
        if pixel.len() == 1 {
            vec![pixel[0]; n]
        } else if pixel.len() < n {
            let mut out = pixel.to_vec();
            out.resize(n, 1.0);
            out
        } else {
            pixel.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_pixel(r: f64, g: f64, b: f64) -> Image {
        Image::from_bands(
            ColorSpace::Rgb,
            vec![
                Band::filled(1, 1, r),
                Band::filled(1, 1, g),
                Band::filled(1, 1, b),
            ],
        )
        .unwrap()
    }

    #[test]
    fn band_counts_are_consistent_with_conversion_output() {
        let img = rgb_pixel(0.3, 0.5, 0.7);
        for &space in ColorSpace::ALL {
            if let Ok(out) = space.convert_from_rgb(&img) {
                assert_eq!(
                    out.num_bands(),
                    space.band_count(),
                    "band count mismatch for {space:?}"
                );
                assert_eq!(out.space(), space);
            }
        }
    }

    #[test]
    fn unsupported_directions_are_rejected() {
        let img = rgb_pixel(0.3, 0.5, 0.7);
        for space in [
            ColorSpace::Hsi,
            ColorSpace::Hsl,
            ColorSpace::Hs,
            ColorSpace::H1H2,
            ColorSpace::H2s,
            ColorSpace::Opponent,
            ColorSpace::ModifiedOpponent,
        ] {
            let converted = space.convert_from_rgb(&img).unwrap();
            assert!(
                matches!(
                    space.convert_to_rgb(&converted),
                    Err(Error::UnsupportedToRgb(s)) if s == space
                ),
                "{space:?} should have no inverse"
            );
        }
        assert!(matches!(
            ColorSpace::Custom.convert_from_rgb(&img),
            Err(Error::UnsupportedFromRgb(ColorSpace::Custom))
        ));
    }

    #[test]
    fn rgba_round_trip_drops_alpha() {
        let img = rgb_pixel(0.3, 0.5, 0.7);
        let rgba = ColorSpace::Rgba.convert_from_rgb(&img).unwrap();
        assert_eq!(rgba.num_bands(), 4);
        // the appended alpha band is zero-filled
        assert_eq!(rgba.band(3).get(0, 0).unwrap(), 0.0);
        let back = ColorSpace::Rgba.convert_to_rgb(&rgba).unwrap();
        assert_eq!(back.num_bands(), 3);
        assert_eq!(back.pixel(0, 0).unwrap(), vec![0.3, 0.5, 0.7]);
    }

    #[test]
    fn convert_routes_between_spaces() {
        let img = rgb_pixel(0.9, 0.2, 0.1);
        let hsv = ColorSpace::Hsv.convert_from_rgb(&img).unwrap();
        let yuv = ColorSpace::Yuv.convert(&hsv).unwrap();
        assert_eq!(yuv.space(), ColorSpace::Yuv);
        // routing HSV -> RGB -> YUV must match the direct path
        let direct = ColorSpace::Yuv.convert_from_rgb(&img).unwrap();
        for b in 0..3 {
            let got = yuv.band(b).get(0, 0).unwrap();
            let want = direct.band(b).get(0, 0).unwrap();
            assert!((got - want).abs() < 1e-9);
        }
    }

    #[test]
    fn luminance_to_rgb_replicates() {
        let img = rgb_pixel(0.3, 0.6, 0.9);
        let lum = ColorSpace::LuminanceAvg.convert_from_rgb(&img).unwrap();
        let rgb = ColorSpace::LuminanceAvg.convert_to_rgb(&lum).unwrap();
        let px = rgb.pixel(0, 0).unwrap();
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }

    #[test]
    fn sanitise_broadcasts_single_channel() {
        assert_eq!(
            ColorSpace::Rgba.sanitise(&[0.2]),
            vec![0.2, 0.2, 0.2, 0.2]
        );
    }

    #[test]
    fn sanitise_pads_with_full_intensity() {
        assert_eq!(
            ColorSpace::Rgba.sanitise(&[0.2, 0.4, 0.6]),
            vec![0.2, 0.4, 0.6, 1.0]
        );
    }

    #[test]
    fn sanitise_keeps_extra_channels() {
        assert_eq!(
            ColorSpace::Rgb.sanitise(&[0.1, 0.2, 0.3, 0.4]),
            vec![0.1, 0.2, 0.3, 0.4]
        );
    }

    #[test]
    fn intensity_per_space() {
        let i = ColorSpace::Rgb.compute_intensity(&[0.3, 0.6, 0.9]);
        assert!((i - 0.6).abs() < 1e-12);
        assert_eq!(ColorSpace::Hsv.compute_intensity(&[0.1, 0.2, 0.7]), 0.7);
        assert_eq!(ColorSpace::Hue.compute_intensity(&[0.5]), 0.0);
        assert_eq!(ColorSpace::CieLab.compute_intensity(&[55.0, 3.0, -2.0]), 55.0);
    }

    #[test]
    fn name_lookup_round_trips() {
        for &space in ColorSpace::ALL {
            assert_eq!(ColorSpace::by_name(space.name()), Some(space));
        }
    }
}
