//! Conversion parity against `palette`
//!
//! oxchroma uses the rounded CIE constants (0.008856, 7.787) while palette
//! uses the exact ratios, so small differences are expected and bounded.

use chroma_tests::reference;
use chroma_tests::{DeltaEStats, ParityTest, TestPattern, generate_pattern};
use oxchroma_core::convert::{
    hsl_to_rgb, lab, lab_to_rgb, rgb_to_hsl, rgb_to_lab, rgb_to_xyz, xyz_to_lab, xyz_to_rgb,
};

fn natural_lab(rgb: [f64; 3]) -> [f64; 3] {
    xyz_to_lab(rgb_to_xyz(rgb))
}

fn samples() -> Vec<[f64; 3]> {
    let mut samples = generate_pattern(TestPattern::Grid(9), 0);
    samples.extend(generate_pattern(TestPattern::Random(0x0c0ffee), 2000));
    samples.extend(generate_pattern(TestPattern::SkinTones, 6));
    samples.extend(generate_pattern(TestPattern::GamutBoundary, 8));
    samples
}

#[test]
fn test_lab_matches_palette() {
    let samples = samples();
    let result = ParityTest::new("rgb -> Lab", 0.02).run(&samples, natural_lab, reference::lab);
    eprintln!("{}", result);
    assert!(result.passed(), "{}", result);

    let ours: Vec<_> = samples.iter().map(|s| natural_lab(*s)).collect();
    let theirs: Vec<_> = samples.iter().map(|s| reference::lab(*s)).collect();
    let delta_e = DeltaEStats::compare(&ours, &theirs);
    eprintln!("deltaE2000: mean {:.2e}, max {:.2e}", delta_e.mean, delta_e.max);
    assert!(delta_e.is_excellent());
    assert!(delta_e.max < 0.05);
}

#[test]
fn test_lab_inverse_matches_palette() {
    // Start from palette's Lab so both sides invert the same input
    let samples = generate_pattern(TestPattern::Grid(7), 0);
    let result = ParityTest::new("Lab -> rgb", 1e-3).run(
        &samples,
        |rgb| xyz_to_rgb(lab::lab_to_xyz(reference::lab(rgb))),
        |rgb| reference::lab_to_rgb(reference::lab(rgb)),
    );
    eprintln!("{}", result);
    assert!(result.passed(), "{}", result);
}

#[test]
fn test_scaled_lab_roundtrip() {
    let samples = generate_pattern(TestPattern::Random(7), 1000);
    let result = ParityTest::new("rgb -> scaled Lab -> rgb", 1e-4).run(
        &samples,
        |rgb| lab_to_rgb(rgb_to_lab(rgb)),
        |rgb| rgb,
    );
    eprintln!("{}", result);
    assert!(result.passed(), "{}", result);
}

#[test]
fn test_hsl_matches_palette() {
    let mut worst = 0.0f64;

    for rgb in samples() {
        let ours = rgb_to_hsl(rgb);
        let theirs = reference::hsl(rgb);

        assert!((ours[1] - theirs[1]).abs() < 1e-9, "saturation of {:?}", rgb);
        assert!((ours[2] - theirs[2]).abs() < 1e-9, "lightness of {:?}", rgb);

        if ours[1] > 1e-9 {
            let diff = (ours[0] - theirs[0]).abs();
            let wrapped = diff.min(1.0 - diff);
            worst = worst.max(wrapped);
        }
    }

    eprintln!("HSL hue max diff: {:.3e}", worst);
    assert!(worst < 1e-9);
}

#[test]
fn test_hsl_roundtrip_over_random_colors() {
    let samples = generate_pattern(TestPattern::Random(99), 1000);
    let result = ParityTest::new("rgb -> hsl -> rgb", 1e-9).run(
        &samples,
        |rgb| hsl_to_rgb(rgb_to_hsl(rgb)),
        |rgb| rgb,
    );
    assert!(result.passed(), "{}", result);
}

#[test]
fn test_known_lab_values() {
    let red = natural_lab([1.0, 0.0, 0.0]);
    assert!((red[0] - 53.24).abs() < 0.01);
    assert!((red[1] - 80.09).abs() < 0.01);
    assert!((red[2] - 67.20).abs() < 0.01);

    let black = natural_lab([0.0, 0.0, 0.0]);
    assert!(black.iter().all(|v| v.abs() < 1e-9));
}
