//! Gamma-encoded views
//!
//! "sRGB" in this crate means a plain power-law encoding with a caller
//! supplied exponent, not the piecewise IEC 61966-2-1 curve. Alpha is never
//! gamma encoded.

use crate::math::{gamma_decode, gamma_encode};
use crate::tuple::{Tuple3, Tuple4, clamp01};

/// Gamma used when the caller has no better value
pub const DEFAULT_GAMMA: f64 = 2.2;

/// Linear RGB to gamma-encoded RGB: `c^(1/gamma)`
pub fn rgb_to_srgb(rgb: Tuple3, gamma: f64) -> Tuple3 {
    clamp01(rgb).map(|c| gamma_encode(c, gamma))
}

/// Gamma-encoded RGB to linear RGB: `c^gamma`
pub fn srgb_to_rgb(srgb: Tuple3, gamma: f64) -> Tuple3 {
    clamp01(srgb).map(|c| gamma_decode(c, gamma))
}

/// RGBA variant of [`rgb_to_srgb`]
pub fn rgba_to_srgba(rgba: Tuple4, gamma: f64) -> Tuple4 {
    let [r, g, b] = rgb_to_srgb([rgba[0], rgba[1], rgba[2]], gamma);
    [r, g, b, rgba[3].clamp(0.0, 1.0)]
}

/// RGBA variant of [`srgb_to_rgb`]
pub fn srgba_to_rgba(srgba: Tuple4, gamma: f64) -> Tuple4 {
    let [r, g, b] = srgb_to_rgb([srgba[0], srgba[1], srgba[2]], gamma);
    [r, g, b, srgba[3].clamp(0.0, 1.0)]
}
