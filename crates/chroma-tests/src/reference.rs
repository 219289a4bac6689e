//! Reference conversions backed by `palette`
//!
//! Values are returned in the same layout as oxchroma's unscaled views:
//! Lab as (L 0-100, a, b), HSL as unit-interval (hue as a fraction of a
//! turn).

use palette::white_point::D65;
use palette::{FromColor, Hsl, Lab, Srgb};

/// CIE Lab (D65) of gamma-encoded sRGB
pub fn lab(rgb: [f64; 3]) -> [f64; 3] {
    let lab = Lab::<D65, f64>::from_color(Srgb::new(rgb[0], rgb[1], rgb[2]));
    [lab.l, lab.a, lab.b]
}

/// Gamma-encoded sRGB of a CIE Lab (D65) color, unclamped
pub fn lab_to_rgb(lab: [f64; 3]) -> [f64; 3] {
    let rgb = Srgb::<f64>::from_color(Lab::<D65, f64>::new(lab[0], lab[1], lab[2]));
    [rgb.red, rgb.green, rgb.blue]
}

/// HSL of sRGB with hue scaled to [0,1)
pub fn hsl(rgb: [f64; 3]) -> [f64; 3] {
    let hsl = Hsl::<palette::encoding::Srgb, f64>::from_color(Srgb::new(rgb[0], rgb[1], rgb[2]));
    [
        hsl.hue.into_positive_degrees() / 360.0,
        hsl.saturation,
        hsl.lightness,
    ]
}

/// CIEDE2000 between two CIE Lab colors
pub fn delta_e_2000(a: [f64; 3], b: [f64; 3]) -> f64 {
    use palette::color_difference::Ciede2000;

    let a = Lab::<D65, f64>::new(a[0], a[1], a[2]);
    let b = Lab::<D65, f64>::new(b[0], b[1], b[2]);
    a.difference(b)
}
