//! Interpolation between two colors in a chosen space

use crate::color::{Color, ColorSpace};
use crate::convert::{cmyk_to_rgb, hsl_to_rgb, lab_to_rgb};
use crate::math::lerp_n;
use crate::tuple::{split_alpha, with_alpha};

impl Color {
    /// Blend `x` toward `y` by `amount`, mixing components of `space`
    ///
    /// Alpha is always mixed linearly. Amounts at or beyond either end
    /// return a copy of that endpoint without any space round trip.
    pub fn lerp(x: &Color, y: &Color, amount: f64, space: ColorSpace) -> Color {
        if amount <= 0.0 {
            return Color::from_rgba(x.rgba());
        }
        if amount >= 1.0 {
            return Color::from_rgba(y.rgba());
        }

        let rgba = match space {
            ColorSpace::Rgb => lerp_n(x.rgba(), y.rgba(), amount),
            ColorSpace::Hsl => {
                let (hsl, a) = split_alpha(lerp_n(x.hsla(), y.hsla(), amount));
                with_alpha(hsl_to_rgb(hsl), a)
            }
            ColorSpace::Lab => {
                let (lab, a) = split_alpha(lerp_n(x.laba(), y.laba(), amount));
                with_alpha(lab_to_rgb(lab), a)
            }
            ColorSpace::Cmyk => {
                let [c, m, ye, k, a] = lerp_n(x.cmyka(), y.cmyka(), amount);
                with_alpha(cmyk_to_rgb([c, m, ye, k]), a)
            }
        };
        Color::from_rgba(rgba)
    }
}
