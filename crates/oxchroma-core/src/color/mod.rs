//! The `Color` value type
//!
//! A color stores exactly one representation: four clamped RGBA components.
//! Every other space is a view computed from it on each read.

mod lerp;
pub mod parse;
pub mod space;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::Result;
use crate::convert::{
    cmyk_to_rgb, hex_to_rgba, hsl_to_rgb, is_hex, lab_to_rgb, rgb_to_cmyk, rgb_to_hex,
    rgb_to_hsl, rgb_to_lab, rgb_to_srgb, rgb_to_ui8, rgba_to_hex, rgba_to_ui8, srgb_to_rgb,
    ui8_to_rgba,
};
use crate::tuple::{Tuple3, Tuple4, Tuple5, clamp01, equals, with_alpha};

pub use parse::{ColorPrefix, parse_rgba};
pub use space::{ColorSpace, GrayscaleAlgorithm};

/// Alpha assumed when an input carries none
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Decimal places used by [`Color::serialize`]
pub const DEFAULT_PRECISION: usize = 4;

/// A single color held as clamped RGBA
///
/// Equality compares the four components exactly; the altered flag is not
/// part of a color's identity.
#[derive(Debug, Clone, Copy)]
pub struct Color {
    rgba: Tuple4,
    altered: bool,
}

impl Default for Color {
    /// Opaque black
    fn default() -> Self {
        Self {
            rgba: [0.0, 0.0, 0.0, DEFAULT_ALPHA],
            altered: false,
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        equals(&self.rgba, &other.rgba)
    }
}

impl Color {
    /// Create a color from RGBA components, clamping each to [0,1]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::from_rgba([r, g, b, a])
    }

    /// Create a color from an RGBA tuple
    pub fn from_rgba(rgba: Tuple4) -> Self {
        Self {
            rgba: clamp01(rgba),
            altered: false,
        }
    }

    /// Create an opaque color from an RGB tuple
    pub fn from_rgb(rgb: Tuple3) -> Self {
        Self::from_rgba(with_alpha(rgb, DEFAULT_ALPHA))
    }

    /// Create a color from byte RGBA
    pub fn from_ui8(rgba: [u8; 4]) -> Self {
        Self::from_rgba(ui8_to_rgba(rgba))
    }

    /// Create a color from a hex string; malformed input yields opaque black
    pub fn from_hex(hex: &str) -> Self {
        Self::from_rgba(hex_to_rgba(hex))
    }

    /// Parse any accepted color string
    pub fn parse(input: &str) -> Result<Self> {
        parse_rgba(input).map(Self::from_rgba)
    }

    /// Replace the canonical tuple and record whether it changed
    fn store(&mut self, rgba: Tuple4) -> &mut Self {
        let previous = self.rgba;
        self.rgba = clamp01(rgba);
        self.altered = !equals(&previous, &self.rgba);
        self
    }

    // ------------------------------------------------------------------
    // Components
    // ------------------------------------------------------------------

    #[inline]
    pub fn r(&self) -> f64 {
        self.rgba[0]
    }

    #[inline]
    pub fn g(&self) -> f64 {
        self.rgba[1]
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.rgba[2]
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.rgba[3]
    }

    pub fn set_r(&mut self, value: f64) -> &mut Self {
        self.store([value, self.rgba[1], self.rgba[2], self.rgba[3]])
    }

    pub fn set_g(&mut self, value: f64) -> &mut Self {
        self.store([self.rgba[0], value, self.rgba[2], self.rgba[3]])
    }

    pub fn set_b(&mut self, value: f64) -> &mut Self {
        self.store([self.rgba[0], self.rgba[1], value, self.rgba[3]])
    }

    pub fn set_a(&mut self, value: f64) -> &mut Self {
        self.store([self.rgba[0], self.rgba[1], self.rgba[2], value])
    }

    /// Whether the last mutation changed the stored value
    #[inline]
    pub fn altered(&self) -> bool {
        self.altered
    }

    /// Reset the altered flag
    #[inline]
    pub fn clear_altered(&mut self) {
        self.altered = false;
    }

    // ------------------------------------------------------------------
    // Setters per space
    // ------------------------------------------------------------------

    pub fn set_rgba(&mut self, rgba: Tuple4) -> &mut Self {
        self.store(rgba)
    }

    pub fn set_rgb(&mut self, rgb: Tuple3, alpha: f64) -> &mut Self {
        self.store(with_alpha(rgb, alpha))
    }

    pub fn set_hsl(&mut self, hsl: Tuple3, alpha: f64) -> &mut Self {
        self.store(with_alpha(hsl_to_rgb(hsl), alpha))
    }

    /// Set from unit-cube Lab (see [`crate::convert::lab`])
    pub fn set_lab(&mut self, lab: Tuple3, alpha: f64) -> &mut Self {
        self.store(with_alpha(lab_to_rgb(lab), alpha))
    }

    pub fn set_cmyk(&mut self, cmyk: Tuple4, alpha: f64) -> &mut Self {
        self.store(with_alpha(cmyk_to_rgb(cmyk), alpha))
    }

    /// Set from gamma-encoded RGB
    pub fn set_srgb(&mut self, srgb: Tuple3, alpha: f64, gamma: f64) -> &mut Self {
        self.store(with_alpha(srgb_to_rgb(srgb, gamma), alpha))
    }

    /// Set from a hex string
    ///
    /// Malformed input logs a warning and leaves the color untouched.
    pub fn set_hex(&mut self, hex: &str) -> &mut Self {
        if !is_hex(hex) {
            warn!(input = hex, "hex color string rejected");
            return self;
        }
        self.store(hex_to_rgba(hex))
    }

    pub fn set_ui8(&mut self, rgb: [u8; 3], alpha: u8) -> &mut Self {
        self.store(ui8_to_rgba([rgb[0], rgb[1], rgb[2], alpha]))
    }

    /// Set from any accepted color string
    ///
    /// On error the color is left untouched.
    pub fn set_str(&mut self, input: &str) -> Result<&mut Self> {
        let rgba = parse_rgba(input)?;
        Ok(self.store(rgba))
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    #[inline]
    pub fn rgb(&self) -> Tuple3 {
        [self.rgba[0], self.rgba[1], self.rgba[2]]
    }

    #[inline]
    pub fn rgba(&self) -> Tuple4 {
        self.rgba
    }

    pub fn hsl(&self) -> Tuple3 {
        rgb_to_hsl(self.rgb())
    }

    pub fn hsla(&self) -> Tuple4 {
        with_alpha(self.hsl(), self.a())
    }

    /// Lab rescaled into the unit cube
    pub fn lab(&self) -> Tuple3 {
        rgb_to_lab(self.rgb())
    }

    pub fn laba(&self) -> Tuple4 {
        with_alpha(self.lab(), self.a())
    }

    pub fn cmyk(&self) -> Tuple4 {
        rgb_to_cmyk(self.rgb())
    }

    pub fn cmyka(&self) -> Tuple5 {
        let [c, m, y, k] = self.cmyk();
        [c, m, y, k, self.a()]
    }

    /// Gamma-encoded RGB
    pub fn srgb(&self, gamma: f64) -> Tuple3 {
        rgb_to_srgb(self.rgb(), gamma)
    }

    pub fn srgba(&self, gamma: f64) -> Tuple4 {
        with_alpha(self.srgb(gamma), self.a())
    }

    pub fn rgb_ui8(&self) -> [u8; 3] {
        rgb_to_ui8(self.rgb())
    }

    pub fn rgba_ui8(&self) -> [u8; 4] {
        rgba_to_ui8(self.rgba)
    }

    /// `#rrggbb`
    pub fn hex_rgb(&self) -> String {
        rgb_to_hex(self.rgb())
    }

    /// `#rrggbbaa`
    pub fn hex_rgba(&self) -> String {
        rgba_to_hex(self.rgba)
    }

    /// Components of `space`, followed by alpha when requested
    pub fn tuple(&self, space: ColorSpace, alpha: bool) -> Vec<f64> {
        let mut values = match space {
            ColorSpace::Rgb => self.rgb().to_vec(),
            ColorSpace::Hsl => self.hsl().to_vec(),
            ColorSpace::Lab => self.lab().to_vec(),
            ColorSpace::Cmyk => self.cmyk().to_vec(),
        };
        if alpha {
            values.push(self.a());
        }
        values
    }

    /// Single gray intensity of this color
    pub fn gray(&self, algorithm: GrayscaleAlgorithm) -> f64 {
        algorithm.apply(self.rgb())
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Function-style string such as `hsla(0.5000, 1.0000, 0.5000, 1.0000)`
    pub fn format(&self, space: ColorSpace, alpha: bool, precision: usize) -> String {
        let values = self
            .tuple(space, alpha)
            .iter()
            .map(|v| format!("{:.*}", precision, v))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", space.prefix(alpha), values)
    }

    /// `rgba(r, g, b, a)` at [`DEFAULT_PRECISION`]
    pub fn serialize(&self) -> String {
        self.format(ColorSpace::Rgb, true, DEFAULT_PRECISION)
    }

    /// Set from a string written by [`Color::serialize`] or any other
    /// accepted form; alpha becomes 1 when the string has none
    pub fn deserialize(&mut self, input: &str) -> Result<&mut Self> {
        self.set_str(input)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        f.write_str(&self.format(ColorSpace::Rgb, true, precision))
    }
}

impl FromStr for Color {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Tuple4> for Color {
    fn from(rgba: Tuple4) -> Self {
        Self::from_rgba(rgba)
    }
}

impl From<Color> for Tuple4 {
    fn from(color: Color) -> Self {
        color.rgba
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format(ColorSpace::Rgb, true, DEFAULT_PRECISION))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::parse(&text).map_err(serde::de::Error::custom)
    }
}
