//! Color space identifiers and grayscale reductions

use std::fmt;

/// A derived view of a color that can be read, written and interpolated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Canonical RGB, unit interval
    Rgb,
    /// Hue, saturation, lightness, unit interval
    Hsl,
    /// CIE Lab rescaled into the unit cube
    Lab,
    /// Naive subtractive CMYK
    Cmyk,
}

impl ColorSpace {
    /// Number of components without alpha
    pub fn channels(&self) -> usize {
        match self {
            ColorSpace::Rgb | ColorSpace::Hsl | ColorSpace::Lab => 3,
            ColorSpace::Cmyk => 4,
        }
    }

    /// Number of components, optionally including alpha
    pub fn stride(&self, alpha: bool) -> usize {
        self.channels() + usize::from(alpha)
    }

    /// Function-style prefix used by the string grammar
    pub fn prefix(&self, alpha: bool) -> &'static str {
        match (self, alpha) {
            (ColorSpace::Rgb, false) => "rgb",
            (ColorSpace::Rgb, true) => "rgba",
            (ColorSpace::Hsl, false) => "hsl",
            (ColorSpace::Hsl, true) => "hsla",
            (ColorSpace::Lab, false) => "lab",
            (ColorSpace::Lab, true) => "laba",
            (ColorSpace::Cmyk, false) => "cmyk",
            (ColorSpace::Cmyk, true) => "cmyka",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix(false))
    }
}

/// Reduction of a color to a single gray intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrayscaleAlgorithm {
    /// Mean of the three channels
    Average,
    /// Rec. 709 luma weights applied to the stored channels
    #[default]
    LinearLuminance,
    /// Midpoint of the largest and smallest channel (HSL lightness)
    LeastSaturatedVariant,
    /// Smallest channel
    MinimumDecomposition,
    /// Largest channel
    MaximumDecomposition,
}

impl GrayscaleAlgorithm {
    /// Apply the reduction to an RGB tuple
    pub fn apply(&self, rgb: [f64; 3]) -> f64 {
        let [r, g, b] = rgb;
        match self {
            GrayscaleAlgorithm::Average => (r + g + b) / 3.0,
            GrayscaleAlgorithm::LinearLuminance => 0.2126 * r + 0.7152 * g + 0.0722 * b,
            GrayscaleAlgorithm::LeastSaturatedVariant => {
                (r.max(g).max(b) + r.min(g).min(b)) * 0.5
            }
            GrayscaleAlgorithm::MinimumDecomposition => r.min(g).min(b),
            GrayscaleAlgorithm::MaximumDecomposition => r.max(g).max(b),
        }
    }
}
