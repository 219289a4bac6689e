//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually uniform color space where equal distances
//! correspond to roughly equal perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! The `rgb_to_lab`/`lab_to_rgb` pair works on Lab rescaled into the unit
//! cube so it can be stored and interpolated like every other view:
//! `L / 100`, `(a + 128) / 255`, `(b + 128) / 255`. Callers that need
//! natural Lab must use `scaled_to_lab` to undo it.

use crate::convert::white_point::D65;
use crate::convert::xyz::{rgb_to_xyz, xyz_to_rgb};
use crate::tuple::{Tuple3, clamp01};

/// CIE linearization threshold, (6/29)^3 rounded as in the standard
const EPSILON: f64 = 0.008856;

/// Slope of the linear segment, (29/6)^2 / 3 rounded as in the standard
const KAPPA: f64 = 7.787;

const OFFSET: f64 = 16.0 / 116.0;

/// Lab forward function: f(t) for XYZ → Lab conversion
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA * t + OFFSET
    }
}

/// Lab inverse function: f⁻¹(t) for Lab → XYZ conversion
#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let cubed = f * f * f;
    if cubed > EPSILON {
        cubed
    } else {
        (f - OFFSET) / KAPPA
    }
}

/// CIE XYZ (D65) to natural Lab (L in [0,100], a/b roughly [-128,127])
pub fn xyz_to_lab(xyz: Tuple3) -> Tuple3 {
    let white = D65.xyz;
    let fx = lab_f(xyz[0] / white.x);
    let fy = lab_f(xyz[1] / white.y);
    let fz = lab_f(xyz[2] / white.z);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Natural Lab to CIE XYZ (D65)
pub fn lab_to_xyz(lab: Tuple3) -> Tuple3 {
    let white = D65.xyz;
    let fy = (lab[0] + 16.0) / 116.0;
    let fx = lab[1] / 500.0 + fy;
    let fz = fy - lab[2] / 200.0;

    [
        lab_f_inv(fx) * white.x,
        lab_f_inv(fy) * white.y,
        lab_f_inv(fz) * white.z,
    ]
}

/// Natural Lab to the unit-cube representation
#[inline]
pub fn lab_to_scaled(lab: Tuple3) -> Tuple3 {
    [lab[0] / 100.0, (lab[1] + 128.0) / 255.0, (lab[2] + 128.0) / 255.0]
}

/// Unit-cube Lab back to natural Lab
#[inline]
pub fn scaled_to_lab(scaled: Tuple3) -> Tuple3 {
    [
        scaled[0] * 100.0,
        scaled[1] * 255.0 - 128.0,
        scaled[2] * 255.0 - 128.0,
    ]
}

/// RGB to unit-cube Lab, clamped to [0,1]
pub fn rgb_to_lab(rgb: Tuple3) -> Tuple3 {
    clamp01(lab_to_scaled(xyz_to_lab(rgb_to_xyz(rgb))))
}

/// Unit-cube Lab to RGB, clamped to [0,1]
pub fn lab_to_rgb(lab: Tuple3) -> Tuple3 {
    xyz_to_rgb(lab_to_xyz(scaled_to_lab(clamp01(lab))))
}
