//! ColorScale resampling and export behaviour

use anyhow::Result;
use chroma_tests::{TestPattern, generate_pattern};
use oxchroma_core::{
    Color, ColorEncoding, ColorScale, ColorSpace, ColorVisionDeficiency, Error,
    InterpolationMode, ScaleOptions,
};

fn interleave(colors: &[[f64; 3]]) -> Vec<f64> {
    colors.iter().flatten().copied().collect()
}

#[test]
fn test_lab_midpoint_of_black_white() -> Result<()> {
    let scale = ColorScale::from_array(
        &[0.0, 0.0, 0.0, 255.0, 255.0, 255.0],
        ColorEncoding::RgbUi8,
        3,
        None,
    )?;

    assert_eq!(scale.colors()[0].rgba_ui8(), [0, 0, 0, 255]);
    assert_eq!(scale.colors()[2].rgba_ui8(), [255, 255, 255, 255]);

    // Perceptual midpoint is darker than the RGB midpoint
    let [r, g, b] = scale.colors()[1].rgb_ui8();
    eprintln!("Lab midpoint: {} {} {}", r, g, b);
    assert!(r.abs_diff(119) <= 1);
    assert!(r.abs_diff(g) <= 1 && r.abs_diff(b) <= 1);
    Ok(())
}

#[test]
fn test_resampling_keeps_endpoints_for_any_length() -> Result<()> {
    let stops = generate_pattern(TestPattern::Random(5), 6);
    let values = interleave(&stops);

    for step_count in 2..40 {
        let scale = ColorScale::from_array(&values, ColorEncoding::Rgb, step_count, None)?;
        assert_eq!(scale.len(), step_count);
        assert_eq!(scale.colors()[0].rgb(), stops[0]);
        assert_eq!(scale.colors()[step_count - 1].rgb(), stops[5]);
    }
    Ok(())
}

#[test]
fn test_resampling_hits_stops_on_shared_grid() -> Result<()> {
    // 3 uniform stops resampled to 5 slots: slots 0, 2 and 4 are the stops
    let stops = [[0.9, 0.1, 0.1], [0.1, 0.9, 0.1], [0.1, 0.1, 0.9]];
    let scale = ColorScale::from_array(&interleave(&stops), ColorEncoding::Rgb, 5, None)?;

    for (slot, stop) in [(0, stops[0]), (2, stops[1]), (4, stops[2])] {
        let rgb = scale.colors()[slot].rgb();
        for (a, b) in rgb.iter().zip(stop.iter()) {
            assert!((a - b).abs() < 1e-4, "slot {}: {:?} vs {:?}", slot, rgb, stop);
        }
    }
    Ok(())
}

#[test]
fn test_every_interpolation_space_keeps_endpoints() -> Result<()> {
    let values = [255.0, 0.0, 0.0, 0.0, 0.0, 255.0];
    for space in [ColorSpace::Rgb, ColorSpace::Hsl, ColorSpace::Lab, ColorSpace::Cmyk] {
        let options = ScaleOptions {
            space,
            ..Default::default()
        };
        let scale =
            ColorScale::from_array_with_options(&values, ColorEncoding::RgbUi8, 9, None, options)?;
        assert_eq!(scale.colors()[0].rgb(), [1.0, 0.0, 0.0], "{}", space);
        assert_eq!(scale.colors()[8].rgb(), [0.0, 0.0, 1.0], "{}", space);
    }
    Ok(())
}

#[test]
fn test_invert_twice_is_identity() -> Result<()> {
    let stops = generate_pattern(TestPattern::HueRamp, 12);
    let mut scale = ColorScale::from_array(&interleave(&stops), ColorEncoding::Rgb, 30, None)?;
    let before = scale.bits_f32(ColorSpace::Rgb, true);

    scale.invert();
    let inverted = scale.bits_f32(ColorSpace::Rgb, true);
    assert_ne!(before, inverted);
    assert_eq!(&inverted[..4], &before[before.len() - 4..]);

    scale.invert();
    assert_eq!(scale.bits_f32(ColorSpace::Rgb, true), before);
    Ok(())
}

#[test]
fn test_lerp_over_scale() -> Result<()> {
    let options = ScaleOptions {
        space: ColorSpace::Rgb,
        ..Default::default()
    };
    let mut scale = ColorScale::from_array_with_options(
        &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
        ColorEncoding::Rgb,
        11,
        None,
        options,
    )?;

    let sample = scale.lerp(0.33, ColorSpace::Rgb).expect("scale is not empty");
    // 0.33 * 11 = 3.63, between the 0.3 and 0.4 stops
    assert!((sample.r() - 0.363).abs() < 1e-9, "r = {}", sample.r());

    scale.set_mode(InterpolationMode::Nearest);
    let sample = scale.lerp(0.33, ColorSpace::Rgb).expect("scale is not empty");
    assert!((sample.r() - 0.4).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_export_layouts() -> Result<()> {
    let scale = ColorScale::from_array(
        &[0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0, 1.0],
        ColorEncoding::Rgba,
        4,
        None,
    )?;

    for space in [ColorSpace::Rgb, ColorSpace::Hsl, ColorSpace::Lab, ColorSpace::Cmyk] {
        for alpha in [false, true] {
            let stride = space.stride(alpha);
            assert_eq!(scale.bits_ui8(space, alpha).len(), 4 * stride);
            assert_eq!(scale.bits_f32(space, alpha).len(), 4 * stride);
            assert_eq!(scale.bits_f32_bytes(space, alpha).len(), 4 * stride * 4);
        }
    }

    let bytes = scale.bits_ui8(ColorSpace::Rgb, true);
    assert_eq!(bytes[3], 128);
    assert_eq!(bytes[15], 255);
    Ok(())
}

#[test]
fn test_deficiency_only_touches_exports() -> Result<()> {
    let options = ScaleOptions {
        deficiency: ColorVisionDeficiency::Deuteranope,
        ..Default::default()
    };
    let scale = ColorScale::from_array_with_options(
        &[255.0, 0.0, 0.0, 0.0, 255.0, 0.0],
        ColorEncoding::RgbUi8,
        2,
        None,
        options,
    )?;

    assert_eq!(scale.colors()[0], Color::new(1.0, 0.0, 0.0, 1.0));
    let exported = scale.bits_ui8(ColorSpace::Rgb, false);
    assert_ne!(&exported[..3], &[255, 0, 0]);
    Ok(())
}

#[test]
fn test_contract_violations() {
    assert!(matches!(
        ColorScale::from_array(&[0.0; 7], ColorEncoding::RgbaUi8, 2, None),
        Err(Error::Stride { stride: 4, len: 7 })
    ));
    assert!(matches!(
        ColorScale::from_array(&[0.0; 6], ColorEncoding::Rgb, 4, Some(&[0.0, 0.5, 1.0])),
        Err(Error::PositionCount { .. })
    ));
    assert!(matches!(
        ColorScale::from_array(&[0.0; 9], ColorEncoding::Rgb, 4, Some(&[0.0, 0.7, 0.5])),
        Err(Error::UnsortedPositions)
    ));
}
