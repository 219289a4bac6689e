//! Color space conversions
//!
//! Pure, stateless functions between RGB and the other views:
//! - HSL
//! - CIE XYZ and CIE Lab (D65, Lab rescaled to the unit cube)
//! - CMYK
//! - gamma-encoded "sRGB"
//! - hex strings and 8-bit byte tuples
//!
//! Every function takes its input by value and returns a fresh tuple.
//! Inputs are clamped rather than rejected.

pub mod bytes;
pub mod cmyk;
pub mod hex;
pub mod hsl;
pub mod lab;
pub mod srgb;
pub mod white_point;
pub mod xyz;

pub use bytes::{rgb_to_ui8, rgba_to_ui8, ui8_to_rgb, ui8_to_rgba};
pub use cmyk::{cmyk_to_rgb, rgb_to_cmyk};
pub use hex::{hex_to_rgba, is_hex, rgb_to_hex, rgba_to_hex};
pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use lab::{lab_to_rgb, lab_to_xyz, rgb_to_lab, xyz_to_lab};
pub use srgb::{DEFAULT_GAMMA, rgb_to_srgb, rgba_to_srgba, srgb_to_rgb, srgba_to_rgba};
pub use white_point::{D65, WhitePoint};
pub use xyz::{Xyz, rgb_to_xyz, xyz_to_rgb};
