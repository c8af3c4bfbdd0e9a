//! Octave-style interpolated colour maps and the custom discrete maps
//!
//! Each interpolated map is three closed-form piecewise functions of
//! `x` in `[0, 1]`, one per channel, with the breakpoints of the
//! original Octave maps. Inputs outside `[0, 1]` extrapolate along the
//! active segment.

use prismatic_core::transforms::hsv_to_rgb_pixel;

/// Red through orange to yellow.
pub(crate) fn autumn(x: f64) -> [f64; 3] {
    [1.0, x, 0.0]
}

/// Black to white through gray-blue shades.
pub(crate) fn bone(x: f64) -> [f64; 3] {
    let r = if x < 3.0 / 4.0 {
        7.0 / 8.0 * x
    } else {
        11.0 / 8.0 * x - 3.0 / 8.0
    };
    let g = if x < 3.0 / 8.0 {
        7.0 / 8.0 * x
    } else if x < 3.0 / 4.0 {
        29.0 / 24.0 * x - 1.0 / 8.0
    } else {
        7.0 / 8.0 * x + 1.0 / 8.0
    };
    let b = if x < 3.0 / 8.0 {
        29.0 / 24.0 * x
    } else {
        7.0 / 8.0 * x + 1.0 / 8.0
    };
    [r, g, b]
}

/// Cyan to magenta.
pub(crate) fn cool(x: f64) -> [f64; 3] {
    [x, 1.0 - x, 1.0]
}

/// Black to a light copper tone.
pub(crate) fn copper(x: f64) -> [f64; 3] {
    let r = if x < 4.0 / 5.0 { 5.0 / 4.0 * x } else { 1.0 };
    [r, 4.0 / 5.0 * x, 1.0 / 2.0 * x]
}

/// Black through dark red, red, orange, yellow, to white.
pub(crate) fn hot(x: f64) -> [f64; 3] {
    let r = if x < 2.0 / 5.0 { 5.0 / 2.0 * x } else { 1.0 };
    let g = if x < 2.0 / 5.0 {
        0.0
    } else if x < 4.0 / 5.0 {
        5.0 / 2.0 * x - 1.0
    } else {
        1.0
    };
    let b = if x < 4.0 / 5.0 { 0.0 } else { 5.0 * x - 4.0 };
    [r, g, b]
}

/// The full hue circle: `x` is treated as hue with full saturation and
/// value, via the shared HSV decoder.
pub(crate) fn hsv(x: f64) -> [f64; 3] {
    hsv_to_rgb_pixel([x, 1.0, 1.0])
}

/// Dark blue through blue, cyan, green, yellow, red, to dark red.
pub(crate) fn jet(x: f64) -> [f64; 3] {
    let r = if (3.0 / 8.0..5.0 / 8.0).contains(&x) {
        4.0 * x - 3.0 / 2.0
    } else if (5.0 / 8.0..7.0 / 8.0).contains(&x) {
        1.0
    } else if x >= 7.0 / 8.0 {
        -4.0 * x + 9.0 / 2.0
    } else {
        0.0
    };
    let g = if (1.0 / 8.0..3.0 / 8.0).contains(&x) {
        4.0 * x - 1.0 / 2.0
    } else if (3.0 / 8.0..5.0 / 8.0).contains(&x) {
        1.0
    } else if (5.0 / 8.0..7.0 / 8.0).contains(&x) {
        -4.0 * x + 7.0 / 2.0
    } else {
        0.0
    };
    let b = if x < 1.0 / 8.0 {
        4.0 * x + 1.0 / 2.0
    } else if (1.0 / 8.0..3.0 / 8.0).contains(&x) {
        1.0
    } else if (3.0 / 8.0..5.0 / 8.0).contains(&x) {
        -4.0 * x + 5.0 / 2.0
    } else {
        0.0
    };
    [r, g, b]
}

/// Magenta to yellow.
pub(crate) fn spring(x: f64) -> [f64; 3] {
    [1.0, x, 1.0 - x]
}

/// Green to yellow.
pub(crate) fn summer(x: f64) -> [f64; 3] {
    [x, 0.5 + x / 2.0, 0.4]
}

/// Red through orange, yellow, green, blue, to violet.
pub(crate) fn rainbow(x: f64) -> [f64; 3] {
    let r = if x < 2.0 / 5.0 {
        1.0
    } else if x < 3.0 / 5.0 {
        -5.0 * x + 3.0
    } else if x >= 4.0 / 5.0 {
        10.0 / 3.0 * x - 8.0 / 3.0
    } else {
        0.0
    };
    let g = if x < 2.0 / 5.0 {
        5.0 / 2.0 * x
    } else if x < 3.0 / 5.0 {
        1.0
    } else if x < 4.0 / 5.0 {
        -5.0 * x + 4.0
    } else {
        0.0
    };
    let b = if (3.0 / 5.0..4.0 / 5.0).contains(&x) {
        5.0 * x - 3.0
    } else if x >= 4.0 / 5.0 {
        1.0
    } else {
        0.0
    };
    [r, g, b]
}

/// Blue to green.
pub(crate) fn winter(x: f64) -> [f64; 3] {
    [0.0, x, 1.0 - x / 2.0]
}

/// Sepia tones, based on the Octave pink map.
pub(crate) fn sepia(x: f64) -> [f64; 3] {
    let r = if x < 3.0 / 8.0 {
        14.0 / 9.0 * x
    } else {
        2.0 / 3.0 * x + 1.0 / 3.0
    };
    let g = if x < 3.0 / 8.0 {
        2.0 / 3.0 * x
    } else if x < 3.0 / 4.0 {
        14.0 / 9.0 * x - 1.0 / 3.0
    } else {
        2.0 / 3.0 * x + 1.0 / 3.0
    };
    let b = if x < 3.0 / 4.0 {
        2.0 / 3.0 * x
    } else {
        2.0 * x - 1.0
    };
    [r, g, b]
}

/// Red, green, blue, yellow, magenta, cyan.
pub(crate) const RGBYMC: [[f64; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
];

/// Discrete rainbow: red, orange, yellow, green, blue, violet.
pub(crate) const PRISM: [[f64; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [1.0, 0.5, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [2.0 / 3.0, 0.0, 1.0],
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn jet_midpoint() {
        // green plateau, red ramping up, blue ramping down
        let [r, g, b] = jet(0.5);
        assert_abs_diff_eq!(r, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(g, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn jet_endpoints_are_dark_blue_and_dark_red() {
        assert_eq!(jet(0.0), [0.0, 0.0, 0.5]);
        assert_eq!(jet(1.0), [0.5, 0.0, 0.0]);
    }

    #[test]
    fn hot_runs_black_to_white() {
        assert_eq!(hot(0.0), [0.0, 0.0, 0.0]);
        assert_eq!(hot(1.0), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn bone_runs_black_to_white() {
        let [r, g, b] = bone(0.0);
        assert_eq!((r, g, b), (0.0, 0.0, 0.0));
        let [r, g, b] = bone(1.0);
        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn hsv_map_is_cyclic() {
        assert_eq!(hsv(0.0), hsv(1.0));
        assert_eq!(hsv(0.0), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn sepia_is_continuous_at_breakpoints() {
        for bp in [3.0 / 8.0, 3.0 / 4.0] {
            let before = sepia(bp - 1e-9);
            let at = sepia(bp);
            for c in 0..3 {
                assert_abs_diff_eq!(before[c], at[c], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn formulas_stay_in_unit_range() {
        let formulas: [(&str, fn(f64) -> [f64; 3]); 11] = [
            ("autumn", autumn),
            ("bone", bone),
            ("cool", cool),
            ("copper", copper),
            ("hot", hot),
            ("jet", jet),
            ("spring", spring),
            ("summer", summer),
            ("rainbow", rainbow),
            ("winter", winter),
            ("sepia", sepia),
        ];
        for (name, f) in formulas {
            for i in 0..=1000 {
                let x = i as f64 / 1000.0;
                for (c, v) in f(x).into_iter().enumerate() {
                    assert!(
                        (-1e-6..=1.0 + 1e-6).contains(&v),
                        "{name} channel {c} out of range at x={x}: {v}"
                    );
                }
            }
        }
    }
}
