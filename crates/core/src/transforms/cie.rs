//! CIE XYZ, L*a*b* and L*u*v* transforms
//!
//! All three spaces are reached through XYZ with inverse sRGB
//! companding and a D65 whitepoint, following the equations collected
//! at brucelindbloom.com.

use super::{map_pixels, require_rgb, require_space};
use crate::error::Result;
use crate::image::Image;
use crate::space::ColorSpace;

// CIE standard constants
const EPSILON: f64 = 0.008856;
const KAPPA: f64 = 903.3;

// D65 reference white
const XR: f64 = 0.950456;
const YR: f64 = 1.0;
const ZR: f64 = 1.088754;

fn inverse_compand(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn compand(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

pub(crate) fn rgb_to_xyz_pixel(rgb: [f64; 3]) -> [f64; 3] {
    let r = inverse_compand(rgb[0]);
    let g = inverse_compand(rgb[1]);
    let b = inverse_compand(rgb[2]);
    [
        r * 0.4124564 + g * 0.3575761 + b * 0.1804375,
        r * 0.2126729 + g * 0.7151522 + b * 0.0721750,
        r * 0.0193339 + g * 0.1191920 + b * 0.9503041,
    ]
}

pub(crate) fn xyz_to_rgb_pixel(xyz: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = xyz;
    let r = x * 3.2404542 + y * -1.5371385 + z * -0.4985314;
    let g = x * -0.9692660 + y * 1.8760108 + z * 0.0415560;
    let b = x * 0.0556434 + y * -0.2040259 + z * 1.0572252;
    [compand(r), compand(g), compand(b)]
}

/// Transform an RGB or RGBA image to CIE XYZ.
pub fn rgb_to_ciexyz(input: &Image) -> Result<Image> {
    require_rgb(input, "rgb_to_ciexyz")?;
    Ok(map_pixels(input, 3, ColorSpace::CieXyz, |px, out| {
        out.copy_from_slice(&rgb_to_xyz_pixel([px[0], px[1], px[2]]));
    }))
}

/// Transform a CIE XYZ image to RGB.
pub fn ciexyz_to_rgb(input: &Image) -> Result<Image> {
    require_space(input, ColorSpace::CieXyz, "ciexyz_to_rgb")?;
    Ok(map_pixels(input, 3, ColorSpace::Rgb, |px, out| {
        out.copy_from_slice(&xyz_to_rgb_pixel([px[0], px[1], px[2]]));
    }))
}

/// Transform a CIE XYZ image to CIE L*a*b*.
pub fn ciexyz_to_cielab(input: &Image) -> Result<Image> {
    require_space(input, ColorSpace::CieXyz, "ciexyz_to_cielab")?;
    Ok(map_pixels(input, 3, ColorSpace::CieLab, |px, out| {
        let xr = px[0] / XR;
        let yr = px[1] / YR;
        let zr = px[2] / ZR;

        let f = |t: f64| {
            if t > EPSILON {
                t.powf(1.0 / 3.0)
            } else {
                (KAPPA * t + 16.0) / 116.0
            }
        };
        let (fx, fy, fz) = (f(xr), f(yr), f(zr));

        out[0] = 116.0 * fy - 16.0;
        out[1] = 500.0 * (fx - fy);
        out[2] = 200.0 * (fy - fz);
    }))
}

/// Transform a CIE L*a*b* image back to CIE XYZ.
pub fn cielab_to_ciexyz(input: &Image) -> Result<Image> {
    require_space(input, ColorSpace::CieLab, "cielab_to_ciexyz")?;
    Ok(map_pixels(input, 3, ColorSpace::CieXyz, |px, out| {
        let (l, a, b) = (px[0], px[1], px[2]);

        let fy = (l + 16.0) / 116.0;
        let fx = a / 500.0 + fy;
        let fz = fy - b / 200.0;

        let fx3 = fx * fx * fx;
        let fz3 = fz * fz * fz;

        let xr = if fx3 > EPSILON {
            fx3
        } else {
            (116.0 * fx - 16.0) / KAPPA
        };
        let yr = if l > KAPPA * EPSILON {
            ((l + 16.0) / 116.0).powi(3)
        } else {
            l / KAPPA
        };
        let zr = if fz3 > EPSILON {
            fz3
        } else {
            (116.0 * fz - 16.0) / KAPPA
        };

        out[0] = XR * xr;
        out[1] = YR * yr;
        out[2] = ZR * zr;
    }))
}

/// Transform an RGB or RGBA image to CIE L*a*b* (via XYZ).
pub fn rgb_to_cielab(input: &Image) -> Result<Image> {
    ciexyz_to_cielab(&rgb_to_ciexyz(input)?)
}

/// Transform a CIE L*a*b* image to RGB (via XYZ).
pub fn cielab_to_rgb(input: &Image) -> Result<Image> {
    ciexyz_to_rgb(&cielab_to_ciexyz(input)?)
}

/// Transform a CIE XYZ image to CIE L*u*v* (CIE 1976).
pub fn ciexyz_to_cieluv(input: &Image) -> Result<Image> {
    require_space(input, ColorSpace::CieXyz, "ciexyz_to_cieluv")?;

    let urp = (4.0 * XR) / (XR + 15.0 * YR + 3.0 * ZR);
    let vrp = (9.0 * YR) / (XR + 15.0 * YR + 3.0 * ZR);

    Ok(map_pixels(input, 3, ColorSpace::CieLuv, move |px, out| {
        let (x, y, z) = (px[0], px[1], px[2]);
        let yr = y / YR;

        let l = if yr > EPSILON {
            116.0 * yr.cbrt() - 16.0
        } else {
            KAPPA * yr
        };

        let up = (4.0 * x) / (x + 15.0 * y + 3.0 * z);
        let vp = (9.0 * y) / (x + 15.0 * y + 3.0 * z);

        out[0] = l;
        out[1] = 13.0 * l * (up - urp);
        out[2] = 13.0 * l * (vp - vrp);
    }))
}

/// Transform a CIE L*u*v* image back to CIE XYZ.
pub fn cieluv_to_ciexyz(input: &Image) -> Result<Image> {
    require_space(input, ColorSpace::CieLuv, "cieluv_to_ciexyz")?;

    let u0 = (4.0 * XR) / (XR + 15.0 * YR + 3.0 * ZR);
    let v0 = (9.0 * YR) / (XR + 15.0 * YR + 3.0 * ZR);

    Ok(map_pixels(input, 3, ColorSpace::CieXyz, move |px, out| {
        let (l, u, v) = (px[0], px[1], px[2]);

        let y = if l > KAPPA * EPSILON {
            YR * ((l + 16.0) / 116.0).powi(3)
        } else {
            YR * l / KAPPA
        };

        let a = (1.0 / 3.0) * ((52.0 * l) / (u + 13.0 * l * u0) - 1.0);
        let b = -5.0 * y;
        let c = -1.0 / 3.0;
        let d = y * ((39.0 * l) / (v + 13.0 * l * v0) - 5.0);

        let x = (d - b) / (a - c);
        let z = x * a + b;

        out[0] = x;
        out[1] = y;
        out[2] = z;
    }))
}

/// Transform an RGB or RGBA image to CIE L*u*v* (via XYZ).
pub fn rgb_to_cieluv(input: &Image) -> Result<Image> {
    ciexyz_to_cieluv(&rgb_to_ciexyz(input)?)
}

/// Transform a CIE L*u*v* image to RGB (via XYZ).
pub fn cieluv_to_rgb(input: &Image) -> Result<Image> {
    ciexyz_to_rgb(&cieluv_to_ciexyz(input)?)
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
    fn white_maps_to_reference_luminance() {
        let xyz = rgb_to_ciexyz(&rgb_pixel(1.0, 1.0, 1.0)).unwrap();
        assert_abs_diff_eq!(xyz.band(1).get(0, 0).unwrap(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn xyz_round_trip() {
        for rgb in [
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [0.25, 0.5, 0.75],
            [0.9, 0.1, 0.3],
        ] {
            let img = rgb_pixel(rgb[0], rgb[1], rgb[2]);
            let back = ciexyz_to_rgb(&rgb_to_ciexyz(&img).unwrap()).unwrap();
            let px = back.pixel(0, 0).unwrap();
            for c in 0..3 {
                assert_abs_diff_eq!(px[c], rgb[c], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn lab_round_trip() {
        for rgb in [[0.2, 0.4, 0.6], [1.0, 0.0, 0.0], [0.01, 0.01, 0.01]] {
            let img = rgb_pixel(rgb[0], rgb[1], rgb[2]);
            let back = cielab_to_rgb(&rgb_to_cielab(&img).unwrap()).unwrap();
            let px = back.pixel(0, 0).unwrap();
            for c in 0..3 {
                assert_abs_diff_eq!(px[c], rgb[c], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn lab_of_white() {
        let lab = rgb_to_cielab(&rgb_pixel(1.0, 1.0, 1.0)).unwrap();
        let px = lab.pixel(0, 0).unwrap();
        assert_abs_diff_eq!(px[0], 100.0, epsilon = 0.1);
        assert_abs_diff_eq!(px[1], 0.0, epsilon = 0.5);
        assert_abs_diff_eq!(px[2], 0.0, epsilon = 0.5);
    }

    #[test]
    fn luv_round_trip() {
        for rgb in [[0.2, 0.4, 0.6], [0.8, 0.7, 0.1], [0.5, 0.5, 0.5]] {
            let img = rgb_pixel(rgb[0], rgb[1], rgb[2]);
            let back = cieluv_to_rgb(&rgb_to_cieluv(&img).unwrap()).unwrap();
            let px = back.pixel(0, 0).unwrap();
            for c in 0..3 {
                assert_abs_diff_eq!(px[c], rgb[c], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn conversions_reject_wrong_space() {
        let img = rgb_pixel(0.5, 0.5, 0.5);
        assert!(ciexyz_to_rgb(&img).is_err());
        assert!(ciexyz_to_cielab(&img).is_err());
        assert!(cielab_to_ciexyz(&img).is_err());
    }
}
