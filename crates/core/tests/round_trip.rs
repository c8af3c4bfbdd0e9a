//! Round-trip integration tests across the colour space registry.

use prismatic_core::{Band, ColorSpace, Image};

/// Build a small RGB test image covering a grid of colours.
///
/// The grid stays off pure black: the L*u*v* chromaticity quotient is
/// 0/0 there (inherited behaviour), and black is exercised by the
/// per-module unit tests instead.
fn test_image() -> Image {
    let mut samples = Vec::new();
    for r in 1..=5 {
        for g in 1..=5 {
            for b in 1..=5 {
                samples.push([r as f64 / 5.0, g as f64 / 5.0, b as f64 / 5.0]);
            }
        }
    }
    let width = samples.len();
    let bands = (0..3)
        .map(|c| Band::from_fn(width, 1, |x, _| samples[x][c]))
        .collect();
    Image::from_bands(ColorSpace::Rgb, bands).unwrap()
}

fn assert_images_close(a: &Image, b: &Image, epsilon: f64, context: &str) {
    assert_eq!(a.width(), b.width());
    assert_eq!(a.height(), b.height());
    for band in 0..a.num_bands().min(b.num_bands()) {
        for x in 0..a.width() {
            for y in 0..a.height() {
                let av = a.band(band).get(x, y).unwrap();
                let bv = b.band(band).get(x, y).unwrap();
                assert!(
                    (av - bv).abs() <= epsilon,
                    "{context}: band {band} at ({x}, {y}): {av} vs {bv}"
                );
            }
        }
    }
}

#[test]
fn invertible_spaces_round_trip() {
    let img = test_image();
    for space in [
        ColorSpace::Rgb,
        ColorSpace::Rgba,
        ColorSpace::Hsv,
        ColorSpace::CieXyz,
        ColorSpace::CieLab,
        ColorSpace::CieLuv,
        ColorSpace::Yuv,
        ColorSpace::YuvNorm,
    ] {
        let converted = space.convert_from_rgb(&img).unwrap();
        let back = space.convert_to_rgb(&converted).unwrap();
        assert_images_close(&img, &back, 1e-5, space.name());
    }
}

#[test]
fn normalised_rgb_round_trips_for_unit_pixels() {
    // to-RGB is the identity for this space, so only pixels already at
    // unit length can round-trip
    let raw: [[f64; 3]; 3] = [[0.2, 0.4, 0.6], [0.9, 0.1, 0.3], [0.5, 0.5, 0.5]];
    let bands = (0..3)
        .map(|c| {
            Band::from_fn(raw.len(), 1, |x, _| {
                let [r, g, b] = raw[x];
                let len = (r * r + g * g + b * b).sqrt();
                raw[x][c] / len
            })
        })
        .collect();
    let img = Image::from_bands(ColorSpace::Rgb, bands).unwrap();

    let space = ColorSpace::RgbIntensityNormalised;
    let back = space.convert_to_rgb(&space.convert_from_rgb(&img).unwrap()).unwrap();
    assert_images_close(&img, &back, 1e-5, space.name());
}

#[test]
fn h2sv_round_trips_through_simple_inverse() {
    let img = test_image();
    let space = ColorSpace::H2sv;
    let back = space.convert_to_rgb(&space.convert_from_rgb(&img).unwrap()).unwrap();
    assert_images_close(&img, &back, 1e-5, space.name());
}

#[test]
fn h2sv2_round_trips_outside_the_lossy_hue_band() {
    // the simple variant-2 hue inverse shifts hues in (1/3, 2/3]; reds
    // and blues sit in the exact regions
    let raw = [[1.0, 0.0, 0.0], [0.9, 0.4, 0.1], [0.2, 0.1, 0.9], [0.6, 0.0, 0.9]];
    let bands = (0..3)
        .map(|c| Band::from_fn(raw.len(), 1, |x, _| raw[x][c]))
        .collect();
    let img = Image::from_bands(ColorSpace::Rgb, bands).unwrap();

    let space = ColorSpace::H2sv2;
    let back = space.convert_to_rgb(&space.convert_from_rgb(&img).unwrap()).unwrap();
    assert_images_close(&img, &back, 1e-5, space.name());
}

#[test]
fn pure_red_through_hsv_is_exact() {
    let bands = vec![
        Band::filled(1, 1, 1.0),
        Band::filled(1, 1, 0.0),
        Band::filled(1, 1, 0.0),
    ];
    let img = Image::from_bands(ColorSpace::Rgb, bands).unwrap();

    let hsv = ColorSpace::Hsv.convert_from_rgb(&img).unwrap();
    assert_eq!(hsv.pixel(0, 0).unwrap(), vec![0.0, 1.0, 1.0]);

    let back = ColorSpace::Hsv.convert_to_rgb(&hsv).unwrap();
    assert_eq!(back.pixel(0, 0).unwrap(), vec![1.0, 0.0, 0.0]);
}

#[test]
fn every_space_reports_a_consistent_contract() {
    let img = test_image();
    for &space in ColorSpace::ALL {
        match space.convert_from_rgb(&img) {
            Ok(converted) => {
                assert_eq!(converted.num_bands(), space.band_count());
                if space.is_invertible() {
                    assert!(
                        space.convert_to_rgb(&converted).is_ok(),
                        "{} claims an inverse but rejects it",
                        space.name()
                    );
                }
            }
            Err(_) => assert_eq!(space, ColorSpace::Custom),
        }
    }
}
