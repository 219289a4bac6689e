//! Hexadecimal color strings
//!
//! Accepted: `rgb`, `rgba`, `rrggbb`, `rrggbbaa`, case-insensitive, with an
//! optional `#` or `0x` prefix. Short forms duplicate each digit.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::convert::bytes::{rgb_to_ui8, ui8_to_rgba, unit_to_ui8};
use crate::tuple::{Tuple3, Tuple4};

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(#|0x)?(([0-9a-f]{3}){1,2}|([0-9a-f]{4}){1,2})$")
        .expect("hex color pattern is valid")
});

/// Opaque black, returned for malformed hex input
const FALLBACK: Tuple4 = [0.0, 0.0, 0.0, 1.0];

/// Check whether a string is a well-formed hex color
pub fn is_hex(hex: &str) -> bool {
    HEX_PATTERN.is_match(hex.trim())
}

fn decode(digits: &str) -> Option<[u8; 4]> {
    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_owned(),
        _ => return None,
    };

    let mut rgba = [255u8; 4];
    for (i, slot) in rgba.iter_mut().enumerate().take(expanded.len() / 2) {
        *slot = u8::from_str_radix(expanded.get(i * 2..i * 2 + 2)?, 16).ok()?;
    }
    Some(rgba)
}

/// Parse a hex color into float RGBA
///
/// Malformed input never fails: it logs a warning and yields opaque black.
pub fn hex_to_rgba(hex: &str) -> Tuple4 {
    let trimmed = hex.trim();
    let Some(captures) = HEX_PATTERN.captures(trimmed) else {
        warn!(input = hex, "hex color string not understood, using black");
        return FALLBACK;
    };

    match captures.get(2).and_then(|digits| decode(digits.as_str())) {
        Some(rgba) => ui8_to_rgba(rgba),
        None => {
            warn!(input = hex, "hex color string not understood, using black");
            FALLBACK
        }
    }
}

/// Float RGB to `#rrggbb`
pub fn rgb_to_hex(rgb: Tuple3) -> String {
    let [r, g, b] = rgb_to_ui8(rgb);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Float RGBA to `#rrggbbaa`
pub fn rgba_to_hex(rgba: Tuple4) -> String {
    let [r, g, b, a] = rgba.map(unit_to_ui8);
    format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
}
