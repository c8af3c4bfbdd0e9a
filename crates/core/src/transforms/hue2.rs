//! Two-component hue spaces
//!
//! Hue is circular: 1.0 wraps to 0.0, which breaks naive linear
//! interpolation and comparison. These transforms re-project hue onto
//! two monotone piecewise-linear components so downstream processing
//! can stay linear, at the cost of an extra channel. Two breakpoint
//! layouts exist: one at (1/4, 1/2, 3/4) and a second variant at
//! (1/6, 1/3, 2/3).

use super::{map_pixels, require_rgb, require_space};
use crate::band::Band;
use crate::error::Result;
use crate::image::Image;
use crate::maybe_rayon::*;
use crate::space::ColorSpace;
use crate::transforms::hsx::rgb_to_hsv;

fn split_hue(band: &Band, space: ColorSpace, split: impl Fn(f64) -> (f64, f64) + Sync) -> Image {
    let width = band.width();
    let height = band.height();
    let view = band.view();

    let rows: Vec<(Vec<f64>, Vec<f64>)> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut h1 = vec![0.0; width];
            let mut h2 = vec![0.0; width];
            for x in 0..width {
                let (a, b) = split(view[[y, x]]);
                h1[x] = a;
                h2[x] = b;
            }
            (h1, h2)
        })
        .collect();

    let bands = vec![
        Band::from_fn(width, height, |x, y| rows[y].0[x]),
        Band::from_fn(width, height, |x, y| rows[y].1[x]),
    ];
    Image::from_bands_unchecked(space, bands)
}

/// Project a hue band onto two monotone components with breakpoints at
/// 1/4, 1/2 and 3/4.
pub fn h_to_h1h2(hue: &Band) -> Image {
    split_hue(hue, ColorSpace::H1H2, |h| {
        if h > 0.5 {
            let h2 = (h - 0.5) / 0.5;
            let h1 = if h > 0.75 {
                (h - 0.75) / 0.5
            } else {
                1.0 - (h - 0.25) / 0.5
            };
            (h1, h2)
        } else {
            let h2 = 1.0 - h / 0.5;
            let h1 = if h > 0.25 {
                1.0 - (h - 0.25) / 0.5
            } else {
                0.5 + h / 0.5
            };
            (h1, h2)
        }
    })
}

/// Project a hue band onto two monotone components with breakpoints at
/// 1/6, 1/3 and 2/3.
pub fn h_to_h1h2_v2(hue: &Band) -> Image {
    const THIRD: f64 = 1.0 / 3.0;
    const SIXTH: f64 = 1.0 / 6.0;
    const TWO_THIRDS: f64 = 2.0 / 3.0;

    split_hue(hue, ColorSpace::H1H2v2, |h| {
        if h > THIRD {
            let h2 = (h - THIRD) / TWO_THIRDS;
            let h1 = if h > TWO_THIRDS {
                (h - TWO_THIRDS) / 0.5
            } else {
                1.0 - (h - SIXTH) / 0.5
            };
            (h1, h2)
        } else {
            let h2 = 1.0 - h / THIRD;
            let h1 = if h > SIXTH {
                1.0 - (h - SIXTH) / 0.5
            } else {
                TWO_THIRDS + h / 0.5
            };
            (h1, h2)
        }
    })
}

/// Convert an HSV image to H2SV: the hue band split in two, then the
/// saturation and value bands unchanged.
pub fn hsv_to_h2sv(input: &Image) -> Result<Image> {
    require_space(input, ColorSpace::Hsv, "hsv_to_h2sv")?;
    let mut bands = h_to_h1h2(input.band(0)).into_bands();
    bands.push(input.band(1).clone());
    bands.push(input.band(2).clone());
    Image::from_bands(ColorSpace::H2sv, bands)
}

/// Convert an HSV image to the variant-2 H2SV space.
pub fn hsv_to_h2sv2(input: &Image) -> Result<Image> {
    require_space(input, ColorSpace::Hsv, "hsv_to_h2sv2")?;
    let mut bands = h_to_h1h2_v2(input.band(0)).into_bands();
    bands.push(input.band(1).clone());
    bands.push(input.band(2).clone());
    Image::from_bands(ColorSpace::H2sv2, bands)
}

/// Convert an RGB or RGBA image to H2SV.
pub fn rgb_to_h2sv(input: &Image) -> Result<Image> {
    require_rgb(input, "rgb_to_h2sv")?;
    hsv_to_h2sv(&rgb_to_hsv(input)?)
}

/// Convert an RGB or RGBA image to variant-2 H2SV.
pub fn rgb_to_h2sv2(input: &Image) -> Result<Image> {
    require_rgb(input, "rgb_to_h2sv2")?;
    hsv_to_h2sv2(&rgb_to_hsv(input)?)
}

/// Convert an RGB or RGBA image to H2S (H2SV with the value band
/// removed).
pub fn rgb_to_h2s(input: &Image) -> Result<Image> {
    let mut bands = rgb_to_h2sv(input)?.into_bands();
    bands.truncate(3);
    Image::from_bands(ColorSpace::H2s, bands)
}

/// Convert an RGB or RGBA image to variant-2 H2S.
pub fn rgb_to_h2s2(input: &Image) -> Result<Image> {
    let mut bands = rgb_to_h2sv2(input)?.into_bands();
    bands.truncate(3);
    Image::from_bands(ColorSpace::H2s2, bands)
}

/// Recover HSV from H2SV using the simple inverse: hue is rebuilt from
/// the two components, saturation and value pass through.
pub fn h2sv_to_hsv_simple(input: &Image) -> Result<Image> {
    require_space(input, ColorSpace::H2sv, "h2sv_to_hsv_simple")?;
    Ok(map_pixels(input, 4, ColorSpace::Hsv, |px, out| {
        let (h1, h2) = (px[0], px[1]);
        let h = if h1 > 0.5 {
            if h2 > 0.5 {
                0.5 * h1 - 0.25
            } else {
                0.25 + 0.5 * (1.0 - h1)
            }
        } else if h2 <= 0.5 {
            0.25 + 0.5 * (1.0 - h1)
        } else {
            0.75 + 0.5 * h1
        };
        out[0] = h;
        out[1] = px[2];
        out[2] = px[3];
    }))
}

/// Recover HSV from variant-2 H2SV using the simple inverse.
pub fn h2sv2_to_hsv_simple(input: &Image) -> Result<Image> {
    require_space(input, ColorSpace::H2sv2, "h2sv2_to_hsv_simple")?;
    Ok(map_pixels(input, 4, ColorSpace::Hsv, |px, out| {
        let (h1, h2) = (px[0], px[1]);
        let h = if h1 > 2.0 / 3.0 {
            if h2 > 0.5 {
                0.5 * h1 - 1.0 / 3.0
            } else {
                1.0 / 6.0 + 0.5 * (1.0 - h1)
            }
        } else if h2 <= 0.5 {
            1.0 / 3.0 + 0.5 * (1.0 - h1)
        } else {
            2.0 / 3.0 + 0.5 * h1
        };
        out[0] = h;
        out[1] = px[2];
        out[2] = px[3];
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn hue_band(h: f64) -> Band {
        Band::filled(1, 1, h)
    }

    #[test]
    fn components_stay_in_unit_range() {
        for i in 0..=100 {
            let h = i as f64 / 100.0;
            for img in [h_to_h1h2(&hue_band(h)), h_to_h1h2_v2(&hue_band(h))] {
                let px = img.pixel(0, 0).unwrap();
                assert!((0.0..=1.0).contains(&px[0]), "h1 out of range at {h}");
                assert!((0.0..=1.0).contains(&px[1]), "h2 out of range at {h}");
            }
        }
    }

    #[test]
    fn wraparound_is_removed() {
        // hues just either side of the wrap must land close together
        let lo = h_to_h1h2(&hue_band(0.001)).pixel(0, 0).unwrap();
        let hi = h_to_h1h2(&hue_band(0.999)).pixel(0, 0).unwrap();
        assert_abs_diff_eq!(lo[0], hi[0], epsilon = 0.01);
        assert_abs_diff_eq!(lo[1], hi[1], epsilon = 0.01);
    }

    #[test]
    fn h2sv_round_trip_through_simple_inverse() {
        let rgb = Image::from_bands(
            ColorSpace::Rgb,
            vec![
                Band::filled(1, 1, 0.8),
                Band::filled(1, 1, 0.3),
                Band::filled(1, 1, 0.1),
            ],
        )
        .unwrap();
        let hsv = rgb_to_hsv(&rgb).unwrap();
        let back = h2sv_to_hsv_simple(&rgb_to_h2sv(&rgb).unwrap()).unwrap();
        for b in 0..3 {
            assert_abs_diff_eq!(
                back.band(b).get(0, 0).unwrap(),
                hsv.band(b).get(0, 0).unwrap(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn h2sv2_round_trip_through_simple_inverse() {
        // the simple variant-2 inverse is exact outside the (1/3, 2/3]
        // hue band; a blue pixel keeps the hue in the exact region
        let rgb = Image::from_bands(
            ColorSpace::Rgb,
            vec![
                Band::filled(1, 1, 0.2),
                Band::filled(1, 1, 0.1),
                Band::filled(1, 1, 0.9),
            ],
        )
        .unwrap();
        let hsv = rgb_to_hsv(&rgb).unwrap();
        let back = h2sv2_to_hsv_simple(&rgb_to_h2sv2(&rgb).unwrap()).unwrap();
        for b in 0..3 {
            assert_abs_diff_eq!(
                back.band(b).get(0, 0).unwrap(),
                hsv.band(b).get(0, 0).unwrap(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn h2s_has_three_bands() {
        let rgb = Image::from_bands(
            ColorSpace::Rgb,
            vec![
                Band::filled(2, 2, 0.5),
                Band::filled(2, 2, 0.1),
                Band::filled(2, 2, 0.9),
            ],
        )
        .unwrap();
        let h2s = rgb_to_h2s(&rgb).unwrap();
        assert_eq!(h2s.space(), ColorSpace::H2s);
        assert_eq!(h2s.num_bands(), 3);
    }
}
