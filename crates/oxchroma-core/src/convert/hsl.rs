//! HSL (hue, saturation, lightness)
//!
//! All three components live in [0,1]; hue is the fraction of a full turn.

use crate::tuple::{Tuple3, clamp01};

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
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

/// HSL to RGB
pub fn hsl_to_rgb(hsl: Tuple3) -> Tuple3 {
    let [h, s, l] = clamp01(hsl);

    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    clamp01([
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ])
}

/// RGB to HSL
///
/// Achromatic input (max == min) has no defined hue; it reports
/// hue 0 and saturation 0.
pub fn rgb_to_hsl(rgb: Tuple3) -> Tuple3 {
    let [r, g, b] = clamp01(rgb);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, l];
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

    clamp01([h / 6.0, s, l])
}
