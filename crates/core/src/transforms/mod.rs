//! Colour transformations
//!
//! Per-pixel conversion formulas between RGB and the other supported
//! colour spaces, together with whole-raster drivers. Pixels are
//! independent, so the raster drivers run row-parallel when the
//! `parallel` feature is enabled.

mod cie;
mod hsx;
mod hue2;
mod opponent;
mod yuv;

pub use cie::{
    cielab_to_ciexyz, cielab_to_rgb, cieluv_to_ciexyz, cieluv_to_rgb, ciexyz_to_cielab,
    ciexyz_to_cieluv, ciexyz_to_rgb, rgb_to_cielab, rgb_to_cieluv, rgb_to_ciexyz,
};
pub use hsx::{
    calculate_hue, calculate_intensity, calculate_intensity_ntsc, calculate_intensity_weighted,
    calculate_saturation, hsl_to_rgb_pixel, hsv_to_rgb, hsv_to_rgb_pixel, rgb_to_hs, rgb_to_hs2,
    rgb_to_hsi, rgb_to_hsl, rgb_to_hsl_pixel, rgb_to_hsv, rgb_to_hsv_pixel, rgb_to_hsy,
};
pub use hue2::{
    h2sv2_to_hsv_simple, h2sv_to_hsv_simple, h_to_h1h2, h_to_h1h2_v2, hsv_to_h2sv, hsv_to_h2sv2,
    rgb_to_h2s, rgb_to_h2s2, rgb_to_h2sv, rgb_to_h2sv2,
};
pub use opponent::{rgb_to_modified_opponent, rgb_to_opponent};
pub use yuv::{rgb_to_yuv, rgb_to_yuv_normalised, yuv_normalised_to_rgb, yuv_to_rgb};

use crate::band::Band;
use crate::error::{Error, Result};
use crate::image::Image;
use crate::maybe_rayon::*;
use crate::space::ColorSpace;

/// Check that `input` is RGB or RGBA.
pub(crate) fn require_rgb(input: &Image, operation: &'static str) -> Result<()> {
    match input.space() {
        ColorSpace::Rgb | ColorSpace::Rgba => Ok(()),
        actual => Err(Error::WrongColorSpace {
            operation,
            expected: "RGB or RGBA",
            actual,
        }),
    }
}

/// Check that `input` is exactly `expected`.
pub(crate) fn require_space(
    input: &Image,
    expected: ColorSpace,
    operation: &'static str,
) -> Result<()> {
    if input.space() == expected {
        Ok(())
    } else {
        Err(Error::WrongColorSpace {
            operation,
            expected: expected.name(),
            actual: input.space(),
        })
    }
}

/// Apply `f` to every pixel of `input`, producing a fresh image in
/// `space`. Only the first `take` input bands are read; `f` receives
/// them as a slice and writes `space.band_count()` output channels.
pub(crate) fn map_pixels<F>(input: &Image, take: usize, space: ColorSpace, f: F) -> Image
where
    F: Fn(&[f64], &mut [f64]) + Sync,
{
    let width = input.width();
    let height = input.height();
    let nout = space.band_count();
    let views: Vec<_> = input.bands().iter().take(take).map(|b| b.view()).collect();

    let rows: Vec<Vec<Vec<f64>>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut px = vec![0.0; views.len()];
            let mut row: Vec<Vec<f64>> = vec![vec![0.0; width]; nout];
            for x in 0..width {
                for (b, view) in views.iter().enumerate() {
                    px[b] = view[[y, x]];
                }
                let mut out = vec![0.0; nout];
                f(&px, &mut out);
                for (b, &v) in out.iter().enumerate() {
                    row[b][x] = v;
                }
            }
            row
        })
        .collect();

    let bands = (0..nout)
        .map(|b| Band::from_fn(width, height, |x, y| rows[y][b][x]))
        .collect();
    Image::from_bands_unchecked(space, bands)
}

/// Apply a scalar-producing `f` to every pixel of `input`, reading the
/// first `take` bands.
pub(crate) fn map_pixels_to_band<F>(input: &Image, take: usize, f: F) -> Band
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    let width = input.width();
    let height = input.height();
    let views: Vec<_> = input.bands().iter().take(take).map(|b| b.view()).collect();

    let rows: Vec<Vec<f64>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut px = vec![0.0; views.len()];
            let mut row = vec![0.0; width];
            for x in 0..width {
                for (b, view) in views.iter().enumerate() {
                    px[b] = view[[y, x]];
                }
                row[x] = f(&px);
            }
            row
        })
        .collect();

    Band::from_fn(width, height, |x, y| rows[y][x])
}

/// Intensity-normalise an RGB image: every pixel is scaled to unit
/// Euclidean length. Pure black and pure white both map to the neutral
/// grey `1/sqrt(3)` so that the output is defined everywhere.
pub fn rgb_to_rgb_normalised(input: &Image) -> Result<Image> {
    require_rgb(input, "rgb_to_rgb_normalised")?;

    let grey = 1.0 / 3f64.sqrt();
    Ok(map_pixels(
        input,
        3,
        ColorSpace::RgbIntensityNormalised,
        move |px, out| {
            let (r, g, b) = (px[0], px[1], px[2]);
            let achromatic = r == g && g == b;
            if achromatic && (r == 0.0 || r == 1.0) {
                out[0] = grey;
                out[1] = grey;
                out[2] = grey;
            } else {
                let length = (r * r + g * g + b * b).sqrt();
                out[0] = r / length;
                out[1] = g / length;
                out[2] = b / length;
            }
        },
    ))
}

/// Project the hue and saturation bands of an HS-family image from
/// radial to Cartesian coordinates, removing the wraparound at hue 1.
///
/// The first band becomes `s*cos(2*pi*h)` and the second `s*sin(2*pi*h)`;
/// any further bands are copied through. The result is tagged
/// [`ColorSpace::Custom`].
pub fn project_hs(input: &Image) -> Result<Image> {
    use ColorSpace::*;
    match input.space() {
        Hs | Hsi | Hsv | Hsy => {}
        actual => {
            return Err(Error::WrongColorSpace {
                operation: "project_hs",
                expected: "an HS* colour space",
                actual,
            })
        }
    }

    let tau = 2.0 * std::f64::consts::PI;
    let mut bands = Vec::with_capacity(input.num_bands());
    bands.push(map_pixels_to_band(input, 2, move |px| {
        px[1] * (tau * px[0]).cos()
    }));
    bands.push(map_pixels_to_band(input, 2, move |px| {
        px[1] * (tau * px[0]).sin()
    }));
    for band in &input.bands()[2..] {
        bands.push(band.clone());
    }
    Ok(Image::from_bands_unchecked(ColorSpace::Custom, bands))
}

/// Convert a Kelvin colour temperature to its RGB black-body
/// equivalent, channels in `[0, 1]`. Tanner Helland's approximation,
/// reasonable between 1000 K and 40000 K.
pub fn kelvin_to_rgb(temperature: f64) -> [f64; 3] {
    let t = temperature / 100.0;

    let r = if t <= 66.0 {
        255.0
    } else {
        (329.698727446 * (t - 60.0).powf(-0.1332047592)).clamp(0.0, 255.0)
    };

    let g = if t <= 66.0 {
        (99.4708025861 * t.ln() - 161.1195681661).clamp(0.0, 255.0)
    } else {
        (288.1221695283 * (t - 60.0).powf(-0.0755148492)).clamp(0.0, 255.0)
    };

    let b = if t >= 66.0 {
        255.0
    } else if t <= 19.0 {
        0.0
    } else {
        (138.5177312231 * (t - 10.0).ln() - 305.0447927307).clamp(0.0, 255.0)
    };

    [r / 255.0, g / 255.0, b / 255.0]
}

/// Correct the colour temperature of an RGB image.
///
/// Alpha-blends every pixel with the black-body colour of
/// `temperature` at `1 - strength`, then restores the original pixel's
/// luminance through an HSL round trip.
pub fn color_temperature_correction(
    input: &Image,
    temperature: f64,
    strength: f64,
) -> Result<Image> {
    require_space(input, ColorSpace::Rgb, "color_temperature_correction")?;

    let body = kelvin_to_rgb(temperature);
    Ok(map_pixels(input, 3, ColorSpace::Rgb, move |px, out| {
        let blended = [
            px[0] * strength + body[0] * (1.0 - strength),
            px[1] * strength + body[1] * (1.0 - strength),
            px[2] * strength + body[2] * (1.0 - strength),
        ];
        let mut hsl = rgb_to_hsl_pixel(blended);
        let max = px[0].max(px[1]).max(px[2]);
        let min = px[0].min(px[1]).min(px[2]);
        hsl[2] = (max + min) / 2.0;
        out.copy_from_slice(&hsl_to_rgb_pixel(hsl));
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

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
    fn normalised_rgb_has_unit_length() {
        let out = rgb_to_rgb_normalised(&rgb_pixel(0.5, 0.25, 0.75)).unwrap();
        let px = out.pixel(0, 0).unwrap();
        let length = (px[0] * px[0] + px[1] * px[1] + px[2] * px[2]).sqrt();
        assert_abs_diff_eq!(length, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normalised_rgb_black_and_white_go_grey() {
        let grey = 1.0 / 3f64.sqrt();
        for v in [0.0, 1.0] {
            let out = rgb_to_rgb_normalised(&rgb_pixel(v, v, v)).unwrap();
            let px = out.pixel(0, 0).unwrap();
            assert_abs_diff_eq!(px[0], grey, epsilon = 1e-12);
            assert_abs_diff_eq!(px[1], grey, epsilon = 1e-12);
            assert_abs_diff_eq!(px[2], grey, epsilon = 1e-12);
        }
    }

    #[test]
    fn project_hs_requires_hs_family() {
        let img = rgb_pixel(1.0, 0.0, 0.0);
        assert!(project_hs(&img).is_err());
    }

    #[test]
    fn project_hs_projects_first_two_bands() {
        let hsv = rgb_to_hsv(&rgb_pixel(1.0, 0.0, 0.0)).unwrap();
        let projected = project_hs(&hsv).unwrap();
        assert_eq!(projected.space(), ColorSpace::Custom);
        // hue 0, saturation 1 -> (cos 0, sin 0) = (1, 0)
        let px = projected.pixel(0, 0).unwrap();
        assert_abs_diff_eq!(px[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(px[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn kelvin_candlelight_is_warm() {
        let [r, g, b] = kelvin_to_rgb(1900.0);
        assert!(r > g && g > b);
        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn kelvin_daylight_is_near_white() {
        let [r, g, b] = kelvin_to_rgb(6600.0);
        assert!(r > 0.97 && g > 0.97 && b > 0.97);
        assert!(b <= 1.0);
    }

    #[test]
    fn temperature_correction_preserves_luminance() {
        let input = rgb_pixel(0.4, 0.5, 0.6);
        let out = color_temperature_correction(&input, 2000.0, 0.5).unwrap();
        let px = out.pixel(0, 0).unwrap();
        let lum_out = (px[0].max(px[1]).max(px[2]) + px[0].min(px[1]).min(px[2])) / 2.0;
        assert_abs_diff_eq!(lum_out, 0.5, epsilon = 1e-9);
    }
}
