//! Interleaved stop encodings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::tuple::Tuple4;
use crate::{Error, Result};

/// Layout of an interleaved color value array
///
/// Lowercase names carry unit-interval floats, uppercase names carry bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorEncoding {
    /// Float RGB, 3 values per stop
    #[serde(rename = "rgb")]
    Rgb,
    /// Float RGBA, 4 values per stop
    #[serde(rename = "rgba")]
    Rgba,
    /// Byte RGB, 3 values per stop
    #[serde(rename = "RGB")]
    RgbUi8,
    /// Byte RGBA, 4 values per stop
    #[serde(rename = "RGBA")]
    RgbaUi8,
}

impl ColorEncoding {
    /// Values per stop
    pub fn stride(&self) -> usize {
        match self {
            ColorEncoding::Rgb | ColorEncoding::RgbUi8 => 3,
            ColorEncoding::Rgba | ColorEncoding::RgbaUi8 => 4,
        }
    }

    /// Check if values are bytes (0-255)
    pub fn is_byte(&self) -> bool {
        matches!(self, ColorEncoding::RgbUi8 | ColorEncoding::RgbaUi8)
    }

    /// Check if each stop carries alpha
    pub fn has_alpha(&self) -> bool {
        self.stride() == 4
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorEncoding::Rgb => "rgb",
            ColorEncoding::Rgba => "rgba",
            ColorEncoding::RgbUi8 => "RGB",
            ColorEncoding::RgbaUi8 => "RGBA",
        }
    }

    /// Decode an interleaved array into colors
    pub fn decode(&self, values: &[f64]) -> Result<Vec<Color>> {
        let stride = self.stride();
        if values.len() % stride != 0 {
            return Err(Error::Stride {
                stride,
                len: values.len(),
            });
        }

        let scale = if self.is_byte() { 255.0 } else { 1.0 };
        Ok(values
            .chunks_exact(stride)
            .map(|chunk| {
                let mut rgba: Tuple4 = [scale; 4];
                for (slot, v) in rgba.iter_mut().zip(chunk) {
                    *slot = *v;
                }
                Color::from_rgba(rgba.map(|v| v / scale))
            })
            .collect())
    }
}

impl fmt::Display for ColorEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rgb" => Ok(ColorEncoding::Rgb),
            "rgba" => Ok(ColorEncoding::Rgba),
            "RGB" => Ok(ColorEncoding::RgbUi8),
            "RGBA" => Ok(ColorEncoding::RgbaUi8),
            _ => Err(Error::UnknownEncoding(s.to_owned())),
        }
    }
}
