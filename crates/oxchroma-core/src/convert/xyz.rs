//! CIE XYZ Color Space
//!
//! XYZ is the hub between device RGB and the CIE-derived spaces. RGB input
//! is treated as sRGB-encoded and linearized with the piecewise sRGB curve
//! before the D65 primaries matrix is applied.

use crate::math::matrix::{SRGB_TO_XYZ, XYZ_TO_SRGB};
use crate::math::{srgb_gamma_decode, srgb_gamma_encode};
use crate::tuple::{Tuple3, clamp01};

/// CIE 1931 XYZ tristimulus values; Y is luminance
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn to_array(&self) -> Tuple3 {
        [self.x, self.y, self.z]
    }

    /// Chromaticity `(X, Y) / (X + Y + Z)`; `(0, 0)` for black
    #[inline]
    pub fn chromaticity(&self) -> (f64, f64) {
        let sum = self.x + self.y + self.z;
        if sum == 0.0 {
            return (0.0, 0.0);
        }
        (self.x / sum, self.y / sum)
    }
}

impl From<Tuple3> for Xyz {
    fn from(xyz: Tuple3) -> Self {
        Self::new(xyz[0], xyz[1], xyz[2])
    }
}

/// sRGB-encoded RGB in [0,1] to CIE XYZ (D65)
pub fn rgb_to_xyz(rgb: Tuple3) -> Tuple3 {
    let linear = clamp01(rgb).map(srgb_gamma_decode);
    SRGB_TO_XYZ.multiply_vec(linear)
}

/// CIE XYZ (D65) to sRGB-encoded RGB, clamped to [0,1]
pub fn xyz_to_rgb(xyz: Tuple3) -> Tuple3 {
    let linear = XYZ_TO_SRGB.multiply_vec(xyz);
    clamp01(clamp01(linear).map(srgb_gamma_encode))
}
