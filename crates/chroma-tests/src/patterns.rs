//! Test pattern generation
//!
//! Patterns are lists of unit-interval RGB triples. Byte-derived patterns
//! hit exact 8-bit values so that reference and implementation see the same
//! input.

use oxchroma_core::convert::{hsl_to_rgb, ui8_to_rgb};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Evenly spaced byte grid with `n` steps per channel
    Grid(usize),
    /// Grayscale ramp
    Grayscale,
    /// Hue ramp at full saturation
    HueRamp,
    /// Random bytes with seed
    Random(u64),
    /// Skin tone samples
    SkinTones,
    /// Saturated colors near gamut boundary
    GamutBoundary,
}

/// Generate `count` samples of a pattern (grids ignore `count`)
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<[f64; 3]> {
    match pattern {
        TestPattern::ColorCube => cycle(
            &[
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ],
            count,
        ),
        TestPattern::Grid(steps) => {
            let steps = steps.max(2);
            let level = |i: usize| ((i * 255) / (steps - 1)) as u8;
            let mut out = Vec::with_capacity(steps * steps * steps);
            for r in 0..steps {
                for g in 0..steps {
                    for b in 0..steps {
                        out.push(ui8_to_rgb([level(r), level(g), level(b)]));
                    }
                }
            }
            out
        }
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = ((i * 255) / count.saturating_sub(1).max(1)) as u8;
                ui8_to_rgb([v, v, v])
            })
            .collect(),
        TestPattern::HueRamp => (0..count)
            .map(|i| hsl_to_rgb([i as f64 / count.max(1) as f64, 1.0, 0.5]))
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    let mut rgb = [0u8; 3];
                    rng.fill_bytes(&mut rgb);
                    ui8_to_rgb(rgb)
                })
                .collect()
        }
        TestPattern::SkinTones => cycle(
            &[
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ],
            count,
        ),
        TestPattern::GamutBoundary => cycle(
            &[
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 128, 0],
                [128, 0, 255],
            ],
            count,
        ),
    }
}

fn cycle(colors: &[[u8; 3]], count: usize) -> Vec<[f64; 3]> {
    colors
        .iter()
        .cycle()
        .take(count)
        .map(|c| ui8_to_rgb(*c))
        .collect()
}
