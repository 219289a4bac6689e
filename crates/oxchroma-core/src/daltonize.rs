//! Dichromatic color-vision simulation
//!
//! Projects a color along its confusion line onto the boundary of the gamut
//! a dichromat can distinguish, then pulls out-of-gamut results back toward
//! the neutral axis.
//!
//! ## Algorithm
//!
//! 1. Undo the display gamma (`c^gamma`) and convert to CIE XYZ
//! 2. Take chromaticity `(u, v) = (X, Y) / (X + Y + Z)`
//! 3. Draw the line through `(u, v)` and the deficiency's copunctal point
//! 4. Intersect it with the deficiency's boundary segment
//! 5. Rebuild XYZ at the original luminance and convert to RGB
//! 6. Shift toward neutral gray by the smallest amount that brings every
//!    channel back into range, clamp, re-apply the gamma
//!
//! Luminance is preserved; black is returned unchanged.

use std::fmt;

use crate::color::Color;
use crate::convert::D65;
use crate::math::{Matrix3x3, gamma_decode, gamma_encode};
use crate::tuple::{Tuple3, Tuple4, clamp01, split_alpha, with_alpha};

/// Dichromacy to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorVisionDeficiency {
    /// No simulation (identity)
    #[default]
    None,
    /// Missing long-wavelength cones
    Protanope,
    /// Missing medium-wavelength cones
    Deuteranope,
    /// Missing short-wavelength cones
    Tritanope,
}

impl ColorVisionDeficiency {
    /// All variants, identity first
    pub const ALL: [ColorVisionDeficiency; 4] = [
        ColorVisionDeficiency::None,
        ColorVisionDeficiency::Protanope,
        ColorVisionDeficiency::Deuteranope,
        ColorVisionDeficiency::Tritanope,
    ];

    fn confusion_line(&self) -> Option<&'static ConfusionLine> {
        match self {
            ColorVisionDeficiency::None => None,
            ColorVisionDeficiency::Protanope => Some(&PROTAN),
            ColorVisionDeficiency::Deuteranope => Some(&DEUTAN),
            ColorVisionDeficiency::Tritanope => Some(&TRITAN),
        }
    }
}

impl fmt::Display for ColorVisionDeficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorVisionDeficiency::None => "none",
            ColorVisionDeficiency::Protanope => "protanope",
            ColorVisionDeficiency::Deuteranope => "deuteranope",
            ColorVisionDeficiency::Tritanope => "tritanope",
        };
        f.write_str(name)
    }
}

/// Copunctal point plus the boundary segment, with the segment's line
/// precomputed as slope and intercept
struct ConfusionLine {
    cp_u: f64,
    cp_v: f64,
    slope: f64,
    intercept: f64,
}

impl ConfusionLine {
    const fn new(cp_u: f64, cp_v: f64, begin: (f64, f64), end: (f64, f64)) -> Self {
        let slope = (end.1 - begin.1) / (end.0 - begin.0);
        Self {
            cp_u,
            cp_v,
            slope,
            intercept: begin.1 - begin.0 * slope,
        }
    }
}

const PROTAN: ConfusionLine =
    ConfusionLine::new(0.735, 0.265, (0.115807, 0.073581), (0.471899, 0.527051));
const DEUTAN: ConfusionLine =
    ConfusionLine::new(1.14, -0.14, (0.102776, 0.102864), (0.505845, 0.493211));
const TRITAN: ConfusionLine =
    ConfusionLine::new(0.171, -0.003, (0.045391, 0.294976), (0.665764, 0.334011));

/// Linear RGB to XYZ as used by the dichromat model
const RGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.430574, 0.341550, 0.178325],
    [0.222015, 0.706655, 0.071330],
    [0.020183, 0.129553, 0.939180],
]);

const XYZ_TO_RGB: Matrix3x3 = Matrix3x3::new([
    [3.063218, -1.393325, -0.475802],
    [-0.969243, 1.875966, 0.041555],
    [0.067871, -0.228834, 1.069251],
]);

/// Fraction of `delta` to add to `simulated` so the worst channel lands
/// back on the [0,1] boundary
///
/// Each channel contributes its own factor; factors outside [0,1] are
/// ignored and the largest remaining one wins.
pub(crate) fn gamut_correction(simulated: Tuple3, delta: Tuple3) -> f64 {
    simulated
        .iter()
        .zip(delta.iter())
        .map(|(&s, &d)| {
            if d == 0.0 {
                return 0.0;
            }
            let target = if s < 0.0 { 0.0 } else { 1.0 };
            let factor = (target - s) / d;
            if (0.0..=1.0).contains(&factor) {
                factor
            } else {
                0.0
            }
        })
        .fold(0.0, f64::max)
}

/// Simulate a deficiency on gamma-encoded RGB
///
/// Input is clamped to [0,1] first, including for
/// [`ColorVisionDeficiency::None`].
pub fn daltonize_rgb(rgb: Tuple3, deficiency: ColorVisionDeficiency, gamma: f64) -> Tuple3 {
    let rgb = clamp01(rgb);
    let Some(line) = deficiency.confusion_line() else {
        return rgb;
    };

    let linear = rgb.map(|c| gamma_decode(c, gamma));
    let [x, y, z] = RGB_TO_XYZ.multiply_vec(linear);
    if y <= 0.0 {
        return rgb;
    }

    let sum = x + y + z;
    let u = x / sum;
    let v = y / sum;

    let neutral = D65.neutral(y);

    let slope = if u < line.cp_u {
        (line.cp_v - v) / (line.cp_u - u)
    } else {
        (v - line.cp_v) / (u - line.cp_u)
    };
    let intercept = v - u * slope;

    let du = (line.intercept - intercept) / (slope - line.slope);
    let dv = slope * du + intercept;
    if dv == 0.0 {
        return rgb;
    }

    let sx = du * y / dv;
    let sz = (1.0 - du - dv) * y / dv;

    let simulated = XYZ_TO_RGB.multiply_vec([sx, y, sz]);
    let delta = XYZ_TO_RGB.multiply_vec([neutral.x - sx, 0.0, neutral.z - sz]);
    let adjust = gamut_correction(simulated, delta);

    let mut out = [0.0; 3];
    for (o, (s, d)) in out.iter_mut().zip(simulated.iter().zip(delta.iter())) {
        *o = gamma_encode((s + adjust * d).clamp(0.0, 1.0), gamma);
    }
    out
}

/// RGBA variant of [`daltonize_rgb`]; alpha passes through
pub fn daltonize_rgba(rgba: Tuple4, deficiency: ColorVisionDeficiency, gamma: f64) -> Tuple4 {
    let (rgb, alpha) = split_alpha(rgba);
    with_alpha(daltonize_rgb(rgb, deficiency, gamma), alpha)
}

/// Simulated copy of `color`
pub fn daltonize(color: &Color, deficiency: ColorVisionDeficiency, gamma: f64) -> Color {
    Color::from_rgba(daltonize_rgba(color.rgba(), deficiency, gamma))
}
