//! YUV transforms (BT.601 weights)

use super::{map_pixels, require_rgb, require_space};
use crate::error::Result;
use crate::image::Image;
use crate::space::ColorSpace;

const WR: f64 = 0.299;
const WB: f64 = 0.114;
const WG: f64 = 0.587;
const UMAX: f64 = 0.436;
const VMAX: f64 = 0.615;

fn rgb_to_yuv_inner(input: &Image, norm: bool) -> Result<Image> {
    require_rgb(input, "rgb_to_yuv")?;

    let space = if norm {
        ColorSpace::YuvNorm
    } else {
        ColorSpace::Yuv
    };
    let delta_u = if norm { -UMAX } else { 0.0 };
    let delta_v = if norm { -VMAX } else { 0.0 };
    let u_norm = if norm { 2.0 * UMAX } else { 1.0 };
    let v_norm = if norm { 2.0 * VMAX } else { 1.0 };

    Ok(map_pixels(input, 3, space, move |px, out| {
        let (r, g, b) = (px[0], px[1], px[2]);

        let y = WR * r + WG * g + WB * b;
        let u = UMAX * ((b - y) / (1.0 - WB));
        let v = VMAX * ((r - y) / (1.0 - WR));

        out[0] = y;
        out[1] = (u - delta_u) / u_norm;
        out[2] = (v - delta_v) / v_norm;
    }))
}

fn yuv_to_rgb_inner(input: &Image, norm: bool) -> Result<Image> {
    let expected = if norm {
        ColorSpace::YuvNorm
    } else {
        ColorSpace::Yuv
    };
    require_space(input, expected, "yuv_to_rgb")?;

    let delta_u = if norm { -UMAX } else { 0.0 };
    let delta_v = if norm { -VMAX } else { 0.0 };
    let u_norm = if norm { 2.0 * UMAX } else { 1.0 };
    let v_norm = if norm { 2.0 * VMAX } else { 1.0 };

    Ok(map_pixels(input, 3, ColorSpace::Rgb, move |px, out| {
        let y = px[0];
        let u = px[1] * u_norm + delta_u;
        let v = px[2] * v_norm + delta_v;

        out[0] = y + v * ((1.0 - WR) / VMAX);
        out[1] = y - u * ((WB * (1.0 - WB)) / (UMAX * WG)) - v * ((WR * (1.0 - WR)) / (VMAX * WG));
        out[2] = y + u * ((1.0 - WB) / UMAX);
    }))
}

/// Convert an RGB or RGBA image to YUV. Y is in `[0, 1]`; U takes
/// `[-0.436, 0.436]` and V `[-0.615, 0.615]`.
pub fn rgb_to_yuv(input: &Image) -> Result<Image> {
    rgb_to_yuv_inner(input, false)
}

/// Convert an RGB or RGBA image to normalised YUV, all channels in
/// `[0, 1]`.
pub fn rgb_to_yuv_normalised(input: &Image) -> Result<Image> {
    rgb_to_yuv_inner(input, true)
}

/// Convert a YUV image to RGB.
pub fn yuv_to_rgb(input: &Image) -> Result<Image> {
    yuv_to_rgb_inner(input, false)
}

/// Convert a normalised YUV image to RGB.
pub fn yuv_normalised_to_rgb(input: &Image) -> Result<Image> {
    yuv_to_rgb_inner(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::Band;
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
    fn grey_has_zero_chroma() {
        let yuv = rgb_to_yuv(&rgb_pixel(0.5, 0.5, 0.5)).unwrap();
        let px = yuv.pixel(0, 0).unwrap();
        assert_abs_diff_eq!(px[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(px[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(px[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn chroma_extrema() {
        // pure blue maximises U, pure red maximises V
        let yuv = rgb_to_yuv(&rgb_pixel(0.0, 0.0, 1.0)).unwrap();
        assert_abs_diff_eq!(yuv.band(1).get(0, 0).unwrap(), UMAX, epsilon = 1e-12);
        let yuv = rgb_to_yuv(&rgb_pixel(1.0, 0.0, 0.0)).unwrap();
        assert_abs_diff_eq!(yuv.band(2).get(0, 0).unwrap(), VMAX, epsilon = 1e-12);
    }

    #[test]
    fn round_trip() {
        for rgb in [[0.1, 0.7, 0.3], [1.0, 0.0, 0.0], [0.25, 0.25, 0.9]] {
            let img = rgb_pixel(rgb[0], rgb[1], rgb[2]);
            let back = yuv_to_rgb(&rgb_to_yuv(&img).unwrap()).unwrap();
            let px = back.pixel(0, 0).unwrap();
            for c in 0..3 {
                assert_abs_diff_eq!(px[c], rgb[c], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn normalised_round_trip_and_range() {
        for rgb in [[0.1, 0.7, 0.3], [0.0, 0.0, 1.0], [1.0, 1.0, 0.0]] {
            let img = rgb_pixel(rgb[0], rgb[1], rgb[2]);
            let yuv = rgb_to_yuv_normalised(&img).unwrap();
            let px = yuv.pixel(0, 0).unwrap();
            for c in 0..3 {
                assert!((-1e-12..=1.0 + 1e-12).contains(&px[c]));
            }
            let back = yuv_normalised_to_rgb(&yuv).unwrap();
            let px = back.pixel(0, 0).unwrap();
            for c in 0..3 {
                assert_abs_diff_eq!(px[c], rgb[c], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn plain_and_normalised_spaces_are_distinct() {
        let img = rgb_pixel(0.3, 0.3, 0.3);
        let yuv = rgb_to_yuv(&img).unwrap();
        assert!(yuv_normalised_to_rgb(&yuv).is_err());
    }
}
