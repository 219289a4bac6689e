//! Transfer functions
//!
//! Two families live here:
//! - the piecewise IEC 61966-2-1 sRGB curve, used on the way into CIE XYZ
//! - a plain power law with a caller-chosen exponent, which is what the
//!   `srgb` views and the deficiency simulation mean by "gamma"

const SRGB_DECODE_THRESHOLD: f64 = 0.04045;
const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;
const SRGB_LINEAR_SLOPE: f64 = 12.92;

/// Piecewise sRGB, encoded to linear light
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= SRGB_DECODE_THRESHOLD {
        encoded / SRGB_LINEAR_SLOPE
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// Piecewise sRGB, linear light to encoded
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= SRGB_ENCODE_THRESHOLD {
        linear * SRGB_LINEAR_SLOPE
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// `encoded^gamma`; non-positive input maps to 0
#[inline]
pub fn gamma_decode(encoded: f64, gamma: f64) -> f64 {
    if encoded <= 0.0 { 0.0 } else { encoded.powf(gamma) }
}

/// `linear^(1/gamma)`; non-positive input maps to 0
#[inline]
pub fn gamma_encode(linear: f64, gamma: f64) -> f64 {
    if linear <= 0.0 {
        0.0
    } else {
        linear.powf(gamma.recip())
    }
}
