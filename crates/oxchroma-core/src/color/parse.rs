//! Color string grammar
//!
//! Function form: `prefix(v0, v1, ...)` where the prefix is one of
//! `rgb rgba RGB RGBA RGBa hsl hsla lab laba cmyk cmyka` and the payload is a
//! JSON number list. Uppercase `RGB`/`RGBA` carry bytes (0-255); `RGBa`
//! carries byte RGB with a unit-interval alpha. Anything else must be a hex
//! color.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::color::DEFAULT_ALPHA;
use crate::convert::{cmyk_to_rgb, hex_to_rgba, hsl_to_rgb, is_hex, lab_to_rgb};
use crate::tuple::{Tuple4, clamp01, with_alpha};
use crate::{Error, Result};

static FUNCTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(rgba?|RGBA?|RGBa?|hsla?|laba?|cmyka?)\((.*?)\)$")
        .expect("color function pattern is valid")
});

/// Prefix of a function-style color string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPrefix {
    Rgb,
    Rgba,
    RgbUi8,
    RgbaUi8,
    /// Byte RGB with unit-interval alpha (`RGBa`)
    RgbUi8Alpha,
    Hsl,
    Hsla,
    Lab,
    Laba,
    Cmyk,
    Cmyka,
}

impl ColorPrefix {
    /// Look up a prefix by its exact spelling
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "rgb" => Self::Rgb,
            "rgba" => Self::Rgba,
            "RGB" => Self::RgbUi8,
            "RGBA" => Self::RgbaUi8,
            "RGBa" => Self::RgbUi8Alpha,
            "hsl" => Self::Hsl,
            "hsla" => Self::Hsla,
            "lab" => Self::Lab,
            "laba" => Self::Laba,
            "cmyk" => Self::Cmyk,
            "cmyka" => Self::Cmyka,
            _ => return None,
        })
    }

    /// Spelling of the prefix
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::RgbUi8 => "RGB",
            Self::RgbaUi8 => "RGBA",
            Self::RgbUi8Alpha => "RGBa",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Lab => "lab",
            Self::Laba => "laba",
            Self::Cmyk => "cmyk",
            Self::Cmyka => "cmyka",
        }
    }

    /// Number of components the payload must contain
    pub fn arity(&self) -> usize {
        match self {
            Self::Rgb | Self::RgbUi8 | Self::Hsl | Self::Lab => 3,
            Self::Rgba | Self::RgbaUi8 | Self::RgbUi8Alpha | Self::Hsla | Self::Laba | Self::Cmyk => 4,
            Self::Cmyka => 5,
        }
    }

    /// Convert a payload of the right arity into canonical RGBA
    fn decode(&self, v: &[f64]) -> Tuple4 {
        let alpha = |i: usize| v.get(i).copied().unwrap_or(DEFAULT_ALPHA);
        let rgba = match self {
            Self::Rgb | Self::Rgba => [v[0], v[1], v[2], alpha(3)],
            Self::RgbUi8 => [v[0] / 255.0, v[1] / 255.0, v[2] / 255.0, DEFAULT_ALPHA],
            Self::RgbaUi8 => [v[0] / 255.0, v[1] / 255.0, v[2] / 255.0, v[3] / 255.0],
            Self::RgbUi8Alpha => [v[0] / 255.0, v[1] / 255.0, v[2] / 255.0, v[3]],
            Self::Hsl | Self::Hsla => with_alpha(hsl_to_rgb([v[0], v[1], v[2]]), alpha(3)),
            Self::Lab | Self::Laba => with_alpha(lab_to_rgb([v[0], v[1], v[2]]), alpha(3)),
            Self::Cmyk | Self::Cmyka => {
                with_alpha(cmyk_to_rgb([v[0], v[1], v[2], v[3]]), alpha(4))
            }
        };
        clamp01(rgba)
    }
}

impl fmt::Display for ColorPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn rejected(input: &str) -> Error {
    warn!(input, "color string not understood, ignoring");
    Error::InvalidColorString(input.to_owned())
}

/// Parse a color string into canonical RGBA
///
/// Missing alpha defaults to 1. Malformed strings log a warning and return
/// [`Error::InvalidColorString`]; a payload with the wrong number of
/// components is a caller error reported as [`Error::Arity`].
pub fn parse_rgba(input: &str) -> Result<Tuple4> {
    let trimmed = input.trim();

    if let Some(captures) = FUNCTION_PATTERN.captures(trimmed) {
        let prefix = captures
            .get(1)
            .and_then(|m| ColorPrefix::from_name(m.as_str()))
            .ok_or_else(|| rejected(input))?;
        let payload = captures.get(2).map_or("", |m| m.as_str());

        let values: Vec<f64> =
            serde_json::from_str(&format!("[{payload}]")).map_err(|_| rejected(input))?;

        if values.len() != prefix.arity() {
            return Err(Error::Arity {
                prefix: prefix.name().to_owned(),
                expected: prefix.arity(),
                actual: values.len(),
            });
        }
        return Ok(prefix.decode(&values));
    }

    if is_hex(trimmed) {
        return Ok(hex_to_rgba(trimmed));
    }

    Err(rejected(input))
}
