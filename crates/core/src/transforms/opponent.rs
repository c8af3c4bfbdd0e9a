//! Opponent colour spaces
//!
//! Three channels separating intensity from two chromatic opponent
//! axes: O1 red-green, O2 blue-yellow, O3 intensity. The modified
//! variant divides the chromatic axes by intensity, trading absolute
//! chroma for illumination invariance.

use super::{map_pixels, require_rgb};
use crate::error::Result;
use crate::image::Image;
use crate::space::ColorSpace;

/// Convert an RGB or RGBA image to opponent colour space:
/// `O1 = (R-G)/sqrt(2)`, `O2 = (R+G-2B)/sqrt(6)`, `O3 = (R+G+B)/sqrt(3)`.
pub fn rgb_to_opponent(input: &Image) -> Result<Image> {
    require_rgb(input, "rgb_to_opponent")?;

    let s2 = 2f64.sqrt();
    let s3 = 3f64.sqrt();
    let s6 = 6f64.sqrt();
    Ok(map_pixels(input, 3, ColorSpace::Opponent, move |px, out| {
        let (r, g, b) = (px[0], px[1], px[2]);
        out[0] = (r - g) / s2;
        out[1] = (r + g - 2.0 * b) / s6;
        out[2] = (r + g + b) / s3;
    }))
}

/// Convert an RGB or RGBA image to the modified opponent space: the
/// two chromatic axes of [`rgb_to_opponent`] divided by the intensity
/// axis. Zero-intensity pixels produce zero chroma.
pub fn rgb_to_modified_opponent(input: &Image) -> Result<Image> {
    require_rgb(input, "rgb_to_modified_opponent")?;

    let s2 = 2f64.sqrt();
    let s3 = 3f64.sqrt();
    let s6 = 6f64.sqrt();
    Ok(map_pixels(
        input,
        3,
        ColorSpace::ModifiedOpponent,
        move |px, out| {
            let (r, g, b) = (px[0], px[1], px[2]);
            let o3 = (r + g + b) / s3;
            if o3 == 0.0 {
                out[0] = 0.0;
                out[1] = 0.0;
            } else {
                out[0] = (r - g) / s2 / o3;
                out[1] = (r + g - 2.0 * b) / s6 / o3;
            }
            out[2] = o3;
        },
    ))
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
    fn grey_has_no_chroma() {
        let opp = rgb_to_opponent(&rgb_pixel(0.6, 0.6, 0.6)).unwrap();
        let px = opp.pixel(0, 0).unwrap();
        assert_abs_diff_eq!(px[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(px[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(px[2], 1.8 / 3f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn red_green_axis_sign() {
        let red = rgb_to_opponent(&rgb_pixel(1.0, 0.0, 0.0)).unwrap();
        let green = rgb_to_opponent(&rgb_pixel(0.0, 1.0, 0.0)).unwrap();
        assert!(red.band(0).get(0, 0).unwrap() > 0.0);
        assert!(green.band(0).get(0, 0).unwrap() < 0.0);
    }

    #[test]
    fn modified_opponent_is_illumination_invariant() {
        let dim = rgb_to_modified_opponent(&rgb_pixel(0.2, 0.1, 0.05)).unwrap();
        let bright = rgb_to_modified_opponent(&rgb_pixel(0.8, 0.4, 0.2)).unwrap();
        for c in 0..2 {
            assert_abs_diff_eq!(
                dim.band(c).get(0, 0).unwrap(),
                bright.band(c).get(0, 0).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn modified_opponent_black_is_zero() {
        let opp = rgb_to_modified_opponent(&rgb_pixel(0.0, 0.0, 0.0)).unwrap();
        assert_eq!(opp.pixel(0, 0).unwrap(), vec![0.0, 0.0, 0.0]);
    }
}
