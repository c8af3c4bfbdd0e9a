//! HSV, HSL, HSI and related hue/saturation/intensity transforms

use super::{map_pixels, map_pixels_to_band, require_rgb, require_space};
use crate::band::Band;
use crate::error::Result;
use crate::image::Image;
use crate::space::ColorSpace;

/// Calculate intensity by averaging the R, G, B planes.
pub fn calculate_intensity(input: &Image) -> Result<Band> {
    require_rgb(input, "calculate_intensity")?;
    Ok(map_pixels_to_band(input, 3, |px| {
        (px[0] + px[1] + px[2]) / 3.0
    }))
}

/// Calculate intensity with explicit weights for R, G and B.
///
/// Pixels whose weighted sum is NaN are written as 0.
pub fn calculate_intensity_weighted(input: &Image, wr: f64, wg: f64, wb: f64) -> Result<Band> {
    require_rgb(input, "calculate_intensity_weighted")?;
    Ok(map_pixels_to_band(input, 3, move |px| {
        let v = wr * px[0] + wg * px[1] + wb * px[2];
        if v.is_nan() {
            0.0
        } else {
            v
        }
    }))
}

/// Calculate intensity using the NTSC perceptual weightings
/// 0.299/0.587/0.114.
pub fn calculate_intensity_ntsc(input: &Image) -> Result<Band> {
    require_rgb(input, "calculate_intensity_ntsc")?;
    Ok(map_pixels_to_band(input, 3, |px| {
        0.299 * px[0] + 0.587 * px[1] + 0.114 * px[2]
    }))
}

/// Calculate hue in `[0, 1]` from an RGB or RGBA image.
///
/// Uses the arccos formulation from Sonka, Hlavac & Boyle, folding into
/// the lower half of the hue circle when blue dominates green. An HSV
/// input short-circuits to its hue band.
pub fn calculate_hue(input: &Image) -> Result<Band> {
    if input.space() == ColorSpace::Hsv {
        return Ok(input.band(0).clone());
    }
    require_rgb(input, "calculate_hue")?;

    let tau = 2.0 * std::f64::consts::PI;
    Ok(map_pixels_to_band(input, 3, move |px| {
        let (r, g, b) = (px[0], px[1], px[2]);
        let i = (r + g + b) / 3.0;

        let num = 0.5 * ((r - g) + (r - b));
        let den = ((r - g) * (r - g) + (r - b) * (g - b)).sqrt();

        let mut hue = if den == 0.0 { 0.0 } else { (num / den).acos() };
        if (b / i) > (g / i) {
            hue = tau - hue;
        }
        hue / tau
    }))
}

/// Calculate saturation from an RGB or RGBA image.
///
/// `1 - 3*min(R,G,B)/(R+G+B)`; black pixels (NaN quotient) are written
/// as 0.
pub fn calculate_saturation(input: &Image) -> Result<Band> {
    require_rgb(input, "calculate_saturation")?;
    Ok(map_pixels_to_band(input, 3, |px| {
        let (r, g, b) = (px[0], px[1], px[2]);
        let s = 1.0 - (3.0 / (r + g + b)) * r.min(g).min(b);
        if s.is_nan() {
            0.0
        } else {
            s
        }
    }))
}

/// Convert a single RGB pixel to HSV. All channels in `[0, 1]`.
///
/// The dominant channel is found by checking blue first, then green,
/// falling through to red, so exact ties resolve to the later branch.
pub fn rgb_to_hsv_pixel(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;

    let (v, h_raw, s) = if b > g && b > r {
        // blue dominant
        let v = b;
        if v == 0.0 {
            return [0.0, 0.0, v];
        }
        let min = if r > g { g } else { r };
        let delta = v - min;
        if delta != 0.0 {
            (v, 4.0 + (r - g) / delta, delta / v)
        } else {
            (v, 4.0 + (r - g), 0.0)
        }
    } else if g > r {
        // green dominant
        let v = g;
        if v == 0.0 {
            return [0.0, 0.0, v];
        }
        let min = if r > b { b } else { r };
        let delta = v - min;
        if delta != 0.0 {
            (v, 2.0 + (b - r) / delta, delta / v)
        } else {
            (v, 2.0 + (b - r), 0.0)
        }
    } else {
        // red dominant
        let v = r;
        if v == 0.0 {
            return [0.0, 0.0, v];
        }
        let min = if g > b { b } else { g };
        let delta = v - min;
        if delta != 0.0 {
            (v, (g - b) / delta, delta / v)
        } else {
            (v, g - b, 0.0)
        }
    };

    let mut h = h_raw * 60.0;
    if h < 0.0 {
        h += 360.0;
    }
    [h / 360.0, s, v]
}

/// Convert a single HSV pixel to RGB. All channels in `[0, 1]`.
///
/// Sector indices -1 and 6 can arise from floating-point edge cases at
/// the hue wrap and are folded onto their neighbouring sectors. Any
/// other out-of-range sector should be structurally unreachable; it is
/// reported as a diagnostic and the pixel left black.
pub fn hsv_to_rgb_pixel(hsv: [f64; 3]) -> [f64; 3] {
    let [h, s, v] = hsv;

    if v == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    if s == 0.0 {
        return [v, v, v];
    }

    let hf = h * 360.0 / 60.0;
    let i = hf.floor() as i64;
    let f = hf - i as f64;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match i {
        0 | 6 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        5 | -1 => [v, p, q],
        _ => {
            tracing::warn!(sector = hf, "unrecognised hue sector in HSV to RGB conversion");
            [0.0, 0.0, 0.0]
        }
    }
}

/// Transform an RGB or RGBA image to HSV.
pub fn rgb_to_hsv(input: &Image) -> Result<Image> {
    require_rgb(input, "rgb_to_hsv")?;
    Ok(map_pixels(input, 3, ColorSpace::Hsv, |px, out| {
        out.copy_from_slice(&rgb_to_hsv_pixel([px[0], px[1], px[2]]));
    }))
}

/// Transform an HSV image to RGB.
pub fn hsv_to_rgb(input: &Image) -> Result<Image> {
    require_space(input, ColorSpace::Hsv, "hsv_to_rgb")?;
    Ok(map_pixels(input, 3, ColorSpace::Rgb, |px, out| {
        out.copy_from_slice(&hsv_to_rgb_pixel([px[0], px[1], px[2]]));
    }))
}

/// Convert a single RGB pixel to HSL, all channels in `[0, 1]`.
pub fn rgb_to_hsl_pixel(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, l]; // achromatic
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    [h / 6.0, s, l]
}

/// Convert a single HSL pixel to RGB, all channels in `[0, 1]`.
pub fn hsl_to_rgb_pixel(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;

    if s == 0.0 {
        return [l, l, l]; // achromatic
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Transform an RGB or RGBA image to HSL.
pub fn rgb_to_hsl(input: &Image) -> Result<Image> {
    require_rgb(input, "rgb_to_hsl")?;
    Ok(map_pixels(input, 3, ColorSpace::Hsl, |px, out| {
        out.copy_from_slice(&rgb_to_hsl_pixel([px[0], px[1], px[2]]));
    }))
}

/// Transform an RGB or RGBA image to HSI (hue, saturation, average
/// intensity).
pub fn rgb_to_hsi(input: &Image) -> Result<Image> {
    require_rgb(input, "rgb_to_hsi")?;
    let bands = vec![
        calculate_hue(input)?,
        calculate_saturation(input)?,
        calculate_intensity(input)?,
    ];
    Image::from_bands(ColorSpace::Hsi, bands)
}

/// Transform an RGB or RGBA image to HSY (hue, saturation, NTSC
/// luminance).
pub fn rgb_to_hsy(input: &Image) -> Result<Image> {
    require_rgb(input, "rgb_to_hsy")?;
    let bands = vec![
        calculate_hue(input)?,
        calculate_saturation(input)?,
        calculate_intensity_ntsc(input)?,
    ];
    Image::from_bands(ColorSpace::Hsy, bands)
}

/// Transform an RGB or RGBA image to HS (hue and saturation only).
pub fn rgb_to_hs(input: &Image) -> Result<Image> {
    require_rgb(input, "rgb_to_hs")?;
    let bands = vec![calculate_hue(input)?, calculate_saturation(input)?];
    Image::from_bands(ColorSpace::Hs, bands)
}

/// Transform an RGB or RGBA image to the HS variant taken from the HSV
/// decomposition (hue and saturation bands of HSV).
pub fn rgb_to_hs2(input: &Image) -> Result<Image> {
    let hsv = rgb_to_hsv(input)?;
    let mut bands = hsv.into_bands();
    bands.truncate(2);
    Image::from_bands(ColorSpace::Hs2, bands)
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
    fn pure_red_hsv() {
        let [h, s, v] = rgb_to_hsv_pixel([1.0, 0.0, 0.0]);
        assert_eq!(h, 0.0);
        assert_eq!(s, 1.0);
        assert_eq!(v, 1.0);
    }

    #[test]
    fn pure_red_round_trips_exactly() {
        let rgb = hsv_to_rgb_pixel(rgb_to_hsv_pixel([1.0, 0.0, 0.0]));
        assert_eq!(rgb, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn achromatic_tie_break() {
        // all channels equal: the red branch wins, hue and saturation 0
        let [h, s, v] = rgb_to_hsv_pixel([0.5, 0.5, 0.5]);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_eq!(v, 0.5);
    }

    #[test]
    fn black_pixel_is_all_zero() {
        assert_eq!(rgb_to_hsv_pixel([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(hsv_to_rgb_pixel([0.3, 1.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn hsv_round_trip_dense() {
        for r in 0..=4 {
            for g in 0..=4 {
                for b in 0..=4 {
                    let rgb = [r as f64 / 4.0, g as f64 / 4.0, b as f64 / 4.0];
                    let back = hsv_to_rgb_pixel(rgb_to_hsv_pixel(rgb));
                    for c in 0..3 {
                        assert_abs_diff_eq!(back[c], rgb[c], epsilon = 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn hue_of_primaries() {
        let hue = calculate_hue(&rgb_pixel(1.0, 0.0, 0.0)).unwrap();
        assert_abs_diff_eq!(hue.get(0, 0).unwrap(), 0.0, epsilon = 1e-12);
        // green sits a third of the way around the circle
        let hue = calculate_hue(&rgb_pixel(0.0, 1.0, 0.0)).unwrap();
        assert_abs_diff_eq!(hue.get(0, 0).unwrap(), 1.0 / 3.0, epsilon = 1e-9);
        // blue is folded into the upper half
        let hue = calculate_hue(&rgb_pixel(0.0, 0.0, 1.0)).unwrap();
        assert_abs_diff_eq!(hue.get(0, 0).unwrap(), 2.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn saturation_extremes() {
        let sat = calculate_saturation(&rgb_pixel(1.0, 0.0, 0.0)).unwrap();
        assert_abs_diff_eq!(sat.get(0, 0).unwrap(), 1.0, epsilon = 1e-12);
        let sat = calculate_saturation(&rgb_pixel(0.5, 0.5, 0.5)).unwrap();
        assert_abs_diff_eq!(sat.get(0, 0).unwrap(), 0.0, epsilon = 1e-12);
        // black would divide by zero; must come out 0, not NaN
        let sat = calculate_saturation(&rgb_pixel(0.0, 0.0, 0.0)).unwrap();
        assert_eq!(sat.get(0, 0).unwrap(), 0.0);
    }

    #[test]
    fn intensity_is_plain_average() {
        let i = calculate_intensity(&rgb_pixel(0.2, 0.4, 0.9)).unwrap();
        assert_abs_diff_eq!(i.get(0, 0).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn ntsc_weights_sum_to_one() {
        let i = calculate_intensity_ntsc(&rgb_pixel(1.0, 1.0, 1.0)).unwrap();
        assert_abs_diff_eq!(i.get(0, 0).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn intensity_rejects_non_rgb() {
        let hsv = rgb_to_hsv(&rgb_pixel(0.1, 0.2, 0.3)).unwrap();
        assert!(calculate_intensity(&hsv).is_err());
        assert!(calculate_saturation(&hsv).is_err());
    }

    #[test]
    fn hue_short_circuits_on_hsv() {
        let hsv = rgb_to_hsv(&rgb_pixel(0.0, 1.0, 0.0)).unwrap();
        let hue = calculate_hue(&hsv).unwrap();
        assert_eq!(hue.get(0, 0).unwrap(), hsv.band(0).get(0, 0).unwrap());
    }

    #[test]
    fn hsl_pixel_round_trip() {
        for rgb in [[1.0, 0.0, 0.0], [0.25, 0.5, 0.75], [0.9, 0.9, 0.1]] {
            let back = hsl_to_rgb_pixel(rgb_to_hsl_pixel(rgb));
            for c in 0..3 {
                assert_abs_diff_eq!(back[c], rgb[c], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn hsl_lightness_of_white() {
        let [h, s, l] = rgb_to_hsl_pixel([1.0, 1.0, 1.0]);
        assert_eq!((h, s, l), (0.0, 0.0, 1.0));
    }

    #[test]
    fn hsi_bands_match_helpers() {
        let img = rgb_pixel(0.3, 0.6, 0.1);
        let hsi = rgb_to_hsi(&img).unwrap();
        assert_eq!(hsi.space(), ColorSpace::Hsi);
        assert_eq!(
            hsi.band(2).get(0, 0).unwrap(),
            calculate_intensity(&img).unwrap().get(0, 0).unwrap()
        );
    }

    #[test]
    fn hs2_drops_value() {
        let img = rgb_pixel(0.3, 0.6, 0.1);
        let hs2 = rgb_to_hs2(&img).unwrap();
        assert_eq!(hs2.num_bands(), 2);
        let hsv = rgb_to_hsv(&img).unwrap();
        assert_eq!(hs2.band(0), hsv.band(0));
        assert_eq!(hs2.band(1), hsv.band(1));
    }
}
