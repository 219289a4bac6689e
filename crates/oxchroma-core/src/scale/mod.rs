//! Color scales
//!
//! A [`ColorScale`] is an ordered list of colors resampled from a handful of
//! positioned stops. Once built it only remembers the resampled colors, so
//! later queries treat them as evenly spaced.
//!
//! ## Example
//!
//! ```
//! use oxchroma_core::{ColorEncoding, ColorScale, ColorSpace};
//!
//! let scale = ColorScale::from_array(
//!     &[0.0, 0.0, 0.0, 255.0, 255.0, 255.0],
//!     ColorEncoding::RgbUi8,
//!     5,
//!     None,
//! )
//! .unwrap();
//! assert_eq!(scale.len(), 5);
//!
//! let bytes = scale.bits_ui8(ColorSpace::Rgb, true);
//! assert_eq!(bytes.len(), 5 * 4);
//! ```

mod encoding;
mod preset;

pub use encoding::ColorEncoding;
pub use preset::{Preset, PresetType, find_preset, parse_presets};

use tracing::{debug, trace};

use crate::color::{Color, ColorSpace};
use crate::convert::DEFAULT_GAMMA;
use crate::convert::bytes::unit_to_ui8;
use crate::daltonize::{ColorVisionDeficiency, daltonize};
use crate::math::interpolation::inverse_lerp;
use crate::{Error, Result};

/// How [`ColorScale::lerp`] blends neighbouring colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterpolationMode {
    /// Snap to the closer color
    Nearest,
    /// Blend the two neighbours
    #[default]
    Linear,
}

/// Options for scale construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleOptions {
    /// Mode used by [`ColorScale::lerp`]
    pub mode: InterpolationMode,
    /// Space in which stops are blended while resampling
    pub space: ColorSpace,
    /// Deficiency applied to exported buffers
    pub deficiency: ColorVisionDeficiency,
    /// Display gamma used by the deficiency simulation
    pub gamma: f64,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            mode: InterpolationMode::Linear,
            space: ColorSpace::Lab,
            deficiency: ColorVisionDeficiency::None,
            gamma: DEFAULT_GAMMA,
        }
    }
}

/// Ordered, evenly spaced list of colors
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    colors: Vec<Color>,
    mode: InterpolationMode,
    deficiency: ColorVisionDeficiency,
    gamma: f64,
    inverted: bool,
}

impl ColorScale {
    /// Build a scale of `step_count` colors from interleaved stop values
    ///
    /// Stops sit at `positions` when given (one per stop, non-decreasing),
    /// otherwise evenly over [0,1]. Uses [`ScaleOptions::default`].
    pub fn from_array(
        values: &[f64],
        encoding: ColorEncoding,
        step_count: usize,
        positions: Option<&[f64]>,
    ) -> Result<Self> {
        Self::from_array_with_options(values, encoding, step_count, positions, ScaleOptions::default())
    }

    /// Build a scale with explicit options
    pub fn from_array_with_options(
        values: &[f64],
        encoding: ColorEncoding,
        step_count: usize,
        positions: Option<&[f64]>,
        options: ScaleOptions,
    ) -> Result<Self> {
        let stops = encoding.decode(values)?;

        if let Some(positions) = positions {
            if positions.len() != stops.len() {
                return Err(Error::PositionCount {
                    expected: stops.len(),
                    actual: positions.len(),
                });
            }
            if positions.windows(2).any(|w| w[0] > w[1]) {
                return Err(Error::UnsortedPositions);
            }
        }

        debug!(
            stops = stops.len(),
            step_count,
            %encoding,
            space = %options.space,
            explicit_positions = positions.is_some(),
            "building color scale"
        );

        let colors = match positions {
            None if stops.len() == step_count => stops,
            _ => resample(&stops, step_count, positions, options.space),
        };

        Ok(Self {
            colors,
            mode: options.mode,
            deficiency: options.deficiency,
            gamma: options.gamma,
            inverted: false,
        })
    }

    /// Build a scale from the best-fitting resolution of a preset
    pub fn from_preset(preset: &Preset, step_count: usize) -> Result<Self> {
        Self::from_preset_with_options(preset, step_count, ScaleOptions::default())
    }

    /// [`ColorScale::from_preset`] with explicit options
    pub fn from_preset_with_options(
        preset: &Preset,
        step_count: usize,
        options: ScaleOptions,
    ) -> Result<Self> {
        let (values, positions) = preset.select(step_count)?;
        Self::from_array_with_options(values, preset.encoding, step_count, positions, options)
    }

    /// Sample the scale at `position` in [0,1]
    ///
    /// The position is scaled by the stop count, so the final stop covers
    /// the top `1/len` of the range. Returns `None` for an empty scale.
    /// Positions outside [0,1] clamp.
    pub fn lerp(&self, position: f64, space: ColorSpace) -> Option<Color> {
        let last = self.colors.len().checked_sub(1)?;
        if last == 0 {
            return Some(self.colors[0]);
        }

        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
        let x = position * self.colors.len() as f64;
        let lower = (x.floor() as usize).min(last);
        let upper = (lower + 1).min(last);
        let frac = (x - lower as f64).clamp(0.0, 1.0);

        let color = match self.mode {
            InterpolationMode::Nearest if frac < 0.5 => self.colors[lower],
            InterpolationMode::Nearest => self.colors[upper],
            InterpolationMode::Linear => {
                Color::lerp(&self.colors[lower], &self.colors[upper], frac, space)
            }
        };
        Some(color)
    }

    /// Reverse the color order in place
    pub fn invert(&mut self) {
        self.colors.reverse();
        self.inverted = !self.inverted;
    }

    /// Whether the scale has been inverted an odd number of times
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// Colors as they should be exported, with the deficiency applied
    fn exported(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().map(move |c| match self.deficiency {
            ColorVisionDeficiency::None => *c,
            deficiency => daltonize(c, deficiency, self.gamma),
        })
    }

    /// Interleaved byte buffer of every color in `space`
    pub fn bits_ui8(&self, space: ColorSpace, alpha: bool) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.colors.len() * space.stride(alpha));
        for color in self.exported() {
            out.extend(color.tuple(space, alpha).into_iter().map(unit_to_ui8));
        }
        trace!(len = out.len(), %space, alpha, "exported byte buffer");
        out
    }

    /// Interleaved float buffer of every color in `space`
    pub fn bits_f32(&self, space: ColorSpace, alpha: bool) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.colors.len() * space.stride(alpha));
        for color in self.exported() {
            out.extend(color.tuple(space, alpha).into_iter().map(|v| v as f32));
        }
        trace!(len = out.len(), %space, alpha, "exported float buffer");
        out
    }

    /// [`ColorScale::bits_f32`] reinterpreted as native-endian bytes
    pub fn bits_f32_bytes(&self, space: ColorSpace, alpha: bool) -> Vec<u8> {
        let floats = self.bits_f32(space, alpha);
        bytemuck::cast_slice::<f32, u8>(&floats).to_vec()
    }

    // Accessors

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn color(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn mode(&self) -> InterpolationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InterpolationMode) {
        self.mode = mode;
    }

    pub fn deficiency(&self) -> ColorVisionDeficiency {
        self.deficiency
    }

    pub fn set_deficiency(&mut self, deficiency: ColorVisionDeficiency) {
        self.deficiency = deficiency;
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn set_gamma(&mut self, gamma: f64) {
        self.gamma = gamma;
    }
}

/// Resample positioned stops onto `step_count` evenly spaced slots
fn resample(
    stops: &[Color],
    step_count: usize,
    positions: Option<&[f64]>,
    space: ColorSpace,
) -> Vec<Color> {
    let n = stops.len();
    if n == 0 || step_count == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![stops[0]; step_count];
    }
    if step_count == 1 {
        return vec![stops[0]];
    }

    let uniform: Vec<f64>;
    let positions = match positions {
        Some(p) => p,
        None => {
            uniform = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
            &uniform
        }
    };
    let first = positions[0];
    let last = positions[n - 1];

    let mut out = Vec::with_capacity(step_count);
    let mut lower = 0;
    for i in 0..step_count {
        let p = i as f64 / (step_count - 1) as f64;
        if p <= first {
            out.push(stops[0]);
        } else if p >= last {
            out.push(stops[n - 1]);
        } else {
            while lower + 1 < n && positions[lower + 1] < p {
                lower += 1;
            }
            let upper = (lower + 1).min(n - 1);
            let t = inverse_lerp(positions[lower], positions[upper], p);
            trace!(slot = i, position = p, lower, upper, t, "resampling");
            out.push(Color::lerp(&stops[lower], &stops[upper], t, space));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::approx_eq;

    const BLACK_WHITE: [f64; 6] = [0.0, 0.0, 0.0, 255.0, 255.0, 255.0];

    fn gray_scale(step_count: usize) -> ColorScale {
        ColorScale::from_array(&BLACK_WHITE, ColorEncoding::RgbUi8, step_count, None).unwrap()
    }

    #[test]
    fn test_endpoints() {
        for step_count in [2, 3, 7, 64] {
            let scale = gray_scale(step_count);
            assert_eq!(scale.len(), step_count);
            assert_eq!(scale.colors()[0].rgba(), [0.0, 0.0, 0.0, 1.0]);
            assert_eq!(scale.colors()[step_count - 1].rgba(), [1.0, 1.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn test_exact_count_is_verbatim() {
        let values = [0.1, 0.9, 0.3, 0.7, 0.2, 0.4, 0.5, 0.5, 0.5];
        let scale = ColorScale::from_array(&values, ColorEncoding::Rgb, 3, None).unwrap();
        assert_eq!(scale.colors()[0].rgb(), [0.1, 0.9, 0.3]);
        assert_eq!(scale.colors()[1].rgb(), [0.7, 0.2, 0.4]);
        assert_eq!(scale.colors()[2].rgb(), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_lab_midpoint() {
        let scale = gray_scale(3);
        let [r, g, b] = scale.colors()[1].rgb_ui8();
        assert!(r.abs_diff(119) <= 1, "r = {}", r);
        assert!(r.abs_diff(g) <= 1 && r.abs_diff(b) <= 1);
    }

    #[test]
    fn test_rgb_space_option() {
        let options = ScaleOptions {
            space: ColorSpace::Rgb,
            ..Default::default()
        };
        let scale = ColorScale::from_array_with_options(
            &BLACK_WHITE,
            ColorEncoding::RgbUi8,
            5,
            None,
            options,
        )
        .unwrap();
        assert!(approx_eq(&scale.colors()[1].rgb(), &[0.25, 0.25, 0.25], 1e-12));
        assert!(approx_eq(&scale.colors()[2].rgb(), &[0.5, 0.5, 0.5], 1e-12));
    }

    #[test]
    fn test_explicit_positions() {
        let options = ScaleOptions {
            space: ColorSpace::Rgb,
            ..Default::default()
        };
        // Stops at 0, 0.5 and 1 but the middle stop is pulled to 0.25
        let values = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let scale = ColorScale::from_array_with_options(
            &values,
            ColorEncoding::Rgb,
            5,
            Some(&[0.0, 0.25, 1.0]),
            options,
        )
        .unwrap();
        assert_eq!(scale.colors()[1].rgb(), [1.0, 1.0, 1.0]);
        assert_eq!(scale.colors()[4].rgb(), [1.0, 1.0, 1.0]);

        // Slots before the first position repeat the first stop
        let scale = ColorScale::from_array_with_options(
            &BLACK_WHITE,
            ColorEncoding::RgbUi8,
            5,
            Some(&[0.5, 1.0]),
            options,
        )
        .unwrap();
        assert_eq!(scale.colors()[0].rgb(), [0.0, 0.0, 0.0]);
        assert_eq!(scale.colors()[1].rgb(), [0.0, 0.0, 0.0]);
        assert_eq!(scale.colors()[2].rgb(), [0.0, 0.0, 0.0]);
        assert!(approx_eq(&scale.colors()[3].rgb(), &[0.5, 0.5, 0.5], 1e-12));
    }

    #[test]
    fn test_single_step_and_single_stop() {
        let scale = gray_scale(1);
        assert_eq!(scale.len(), 1);
        assert_eq!(scale.colors()[0].rgb(), [0.0, 0.0, 0.0]);

        let scale =
            ColorScale::from_array(&[0.2, 0.4, 0.6], ColorEncoding::Rgb, 4, None).unwrap();
        assert_eq!(scale.len(), 4);
        assert!(scale.colors().iter().all(|c| c.rgb() == [0.2, 0.4, 0.6]));

        let scale = ColorScale::from_array(&[], ColorEncoding::Rgb, 4, None).unwrap();
        assert!(scale.is_empty());
        assert!(scale.lerp(0.5, ColorSpace::Rgb).is_none());
    }

    #[test]
    fn test_contract_errors() {
        assert!(matches!(
            ColorScale::from_array(&[0.0; 5], ColorEncoding::Rgb, 3, None),
            Err(Error::Stride { stride: 3, len: 5 })
        ));
        assert!(matches!(
            ColorScale::from_array(&BLACK_WHITE, ColorEncoding::RgbUi8, 3, Some(&[0.0])),
            Err(Error::PositionCount {
                expected: 2,
                actual: 1
            })
        ));
        assert!(matches!(
            ColorScale::from_array(&BLACK_WHITE, ColorEncoding::RgbUi8, 3, Some(&[1.0, 0.0])),
            Err(Error::UnsortedPositions)
        ));
    }

    #[test]
    fn test_invert_involution() {
        let mut scale = gray_scale(6);
        let original = scale.clone();

        scale.invert();
        assert!(scale.inverted());
        assert_eq!(scale.colors()[0].rgb(), [1.0, 1.0, 1.0]);

        scale.invert();
        assert!(!scale.inverted());
        assert_eq!(scale, original);
    }

    #[test]
    fn test_lerp_linear() {
        let options = ScaleOptions {
            space: ColorSpace::Rgb,
            ..Default::default()
        };
        let scale = ColorScale::from_array_with_options(
            &BLACK_WHITE,
            ColorEncoding::RgbUi8,
            3,
            None,
            options,
        )
        .unwrap();

        let quarter = scale.lerp(0.25, ColorSpace::Rgb).unwrap();
        assert!(approx_eq(&quarter.rgb(), &[0.375, 0.375, 0.375], 1e-12));

        // 0.5 * 3 = 1.5, halfway between the middle and last stops
        let half = scale.lerp(0.5, ColorSpace::Rgb).unwrap();
        assert!(approx_eq(&half.rgb(), &[0.75, 0.75, 0.75], 1e-12), "{:?}", half.rgb());

        assert_eq!(scale.lerp(0.9, ColorSpace::Rgb).unwrap(), scale.colors()[2]);

        assert_eq!(scale.lerp(0.0, ColorSpace::Rgb).unwrap(), scale.colors()[0]);
        assert_eq!(scale.lerp(1.0, ColorSpace::Rgb).unwrap(), scale.colors()[2]);
        assert_eq!(scale.lerp(-3.0, ColorSpace::Rgb).unwrap(), scale.colors()[0]);
        assert_eq!(scale.lerp(9.0, ColorSpace::Rgb).unwrap(), scale.colors()[2]);
    }

    #[test]
    fn test_lerp_nearest() {
        let mut scale = gray_scale(3);
        scale.set_mode(InterpolationMode::Nearest);
        assert_eq!(scale.mode(), InterpolationMode::Nearest);

        assert_eq!(scale.lerp(0.1, ColorSpace::Lab).unwrap(), scale.colors()[0]);
        assert_eq!(scale.lerp(0.2, ColorSpace::Lab).unwrap(), scale.colors()[1]);
        assert_eq!(scale.lerp(0.4, ColorSpace::Lab).unwrap(), scale.colors()[1]);
        assert_eq!(scale.lerp(0.6, ColorSpace::Lab).unwrap(), scale.colors()[2]);
        assert_eq!(scale.lerp(0.8, ColorSpace::Lab).unwrap(), scale.colors()[2]);
    }

    #[test]
    fn test_export_buffers() {
        let scale = gray_scale(2);

        assert_eq!(scale.bits_ui8(ColorSpace::Rgb, false), vec![0, 0, 0, 255, 255, 255]);
        assert_eq!(
            scale.bits_f32(ColorSpace::Rgb, true),
            vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0]
        );
        assert_eq!(scale.bits_ui8(ColorSpace::Cmyk, true).len(), 10);

        let bytes = scale.bits_f32_bytes(ColorSpace::Rgb, true);
        assert_eq!(bytes.len(), 8 * 4);
        assert_eq!(&bytes[12..16], &1.0f32.to_ne_bytes());
    }

    #[test]
    fn test_export_applies_deficiency() {
        let values = [255.0, 0.0, 0.0, 0.0, 255.0, 0.0];
        let mut scale = ColorScale::from_array(&values, ColorEncoding::RgbUi8, 2, None).unwrap();
        let plain = scale.bits_ui8(ColorSpace::Rgb, false);

        scale.set_deficiency(ColorVisionDeficiency::Protanope);
        let simulated = scale.bits_ui8(ColorSpace::Rgb, false);
        assert_ne!(plain, simulated);

        // Stored colors are untouched
        assert_eq!(scale.colors()[0].rgb(), [1.0, 0.0, 0.0]);
    }
}
