//! Reference white

use crate::convert::Xyz;

/// A reference white given as XYZ with Y = 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    pub name: &'static str,
    pub xyz: Xyz,
}

impl WhitePoint {
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }

    /// Chromaticity coordinates (x, y)
    pub fn chromaticity(&self) -> (f64, f64) {
        self.xyz.chromaticity()
    }

    /// Neutral gray of this white's chromaticity at `luminance`
    pub fn neutral(&self, luminance: f64) -> Xyz {
        let (x, y) = self.chromaticity();
        let z = 1.0 - x - y;
        Xyz::new(x * luminance / y, luminance, z * luminance / y)
    }
}

/// CIE D65, 2° observer. Reference white for sRGB, Lab and the
/// deficiency simulation.
pub const D65: WhitePoint = WhitePoint::new("D65", 0.95047, 1.0, 1.08883);
