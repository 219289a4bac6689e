//! Byte (0-255) and unit-interval float conversions
//!
//! float → byte rounds to nearest; byte → float scales by 1/255. The pair
//! is an exact inverse only up to 8-bit quantization.

use crate::tuple::{Tuple3, Tuple4};

/// Unit-interval float to byte, rounding to nearest
#[inline]
pub fn unit_to_ui8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Byte to unit-interval float
#[inline]
pub fn ui8_to_unit(v: u8) -> f64 {
    v as f64 / 255.0
}

/// Float RGB to byte RGB
#[inline]
pub fn rgb_to_ui8(rgb: Tuple3) -> [u8; 3] {
    rgb.map(unit_to_ui8)
}

/// Byte RGB to float RGB
#[inline]
pub fn ui8_to_rgb(rgb: [u8; 3]) -> Tuple3 {
    rgb.map(ui8_to_unit)
}

/// Float RGBA to byte RGBA
#[inline]
pub fn rgba_to_ui8(rgba: Tuple4) -> [u8; 4] {
    rgba.map(unit_to_ui8)
}

/// Byte RGBA to float RGBA
#[inline]
pub fn ui8_to_rgba(rgba: [u8; 4]) -> Tuple4 {
    rgba.map(ui8_to_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_u8_conversion() {
        let rgb = ui8_to_rgb([255, 128, 0]);
        assert!((rgb[0] - 1.0).abs() < EPSILON);
        assert!((rgb[1] - 128.0 / 255.0).abs() < EPSILON);
        assert!((rgb[2] - 0.0).abs() < EPSILON);

        assert_eq!(rgb_to_ui8(rgb), [255, 128, 0]);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(rgb_to_ui8([0.5, 0.499, 1.0 / 255.0]), [128, 127, 1]);
        assert_eq!(rgba_to_ui8([1.5, -0.5, 0.0, 1.0]), [255, 0, 0, 255]);
    }

    #[test]
    fn test_all_bytes_roundtrip() {
        for v in 0..=255u8 {
            assert_eq!(rgba_to_ui8(ui8_to_rgba([v, v, v, v])), [v, v, v, v]);
        }
    }
}
