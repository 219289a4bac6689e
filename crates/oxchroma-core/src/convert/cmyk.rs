//! CMYK (naive subtractive model, no ink profile)

use crate::tuple::{Tuple3, Tuple4, clamp01};

/// RGB to CMYK
///
/// Pure black has no defined chromatic inks; it maps to `[0, 0, 0, 1]`.
pub fn rgb_to_cmyk(rgb: Tuple3) -> Tuple4 {
    let [r, g, b] = clamp01(rgb);

    let k = 1.0 - r.max(g).max(b);
    let k1 = 1.0 - k;
    if k1 == 0.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }

    clamp01([
        (1.0 - r - k) / k1,
        (1.0 - g - k) / k1,
        (1.0 - b - k) / k1,
        k,
    ])
}

/// CMYK to RGB
pub fn cmyk_to_rgb(cmyk: Tuple4) -> Tuple3 {
    let [c, m, y, k] = clamp01(cmyk);
    let k1 = 1.0 - k;
    clamp01([(1.0 - c) * k1, (1.0 - m) * k1, (1.0 - y) * k1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::approx_eq;

    #[test]
    fn test_white_and_black() {
        assert_eq!(rgb_to_cmyk([1.0, 1.0, 1.0]), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_cmyk([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(cmyk_to_rgb([0.0, 0.0, 0.0, 1.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_primaries() {
        assert!(approx_eq(
            &rgb_to_cmyk([1.0, 0.0, 0.0]),
            &[0.0, 1.0, 1.0, 0.0],
            1e-12
        ));
        assert!(approx_eq(
            &rgb_to_cmyk([0.0, 0.5, 0.5]),
            &[1.0, 0.0, 0.0, 0.5],
            1e-12
        ));
    }

    #[test]
    fn test_roundtrip() {
        for rgb in [
            [1.0, 1.0, 1.0],
            [0.0, 0.0, 0.0],
            [0.2, 0.4, 0.6],
            [0.9, 0.1, 0.5],
            [0.3, 0.3, 0.3],
        ] {
            let back = cmyk_to_rgb(rgb_to_cmyk(rgb));
            assert!(approx_eq(&rgb, &back, 1e-12), "{:?} -> {:?}", rgb, back);
        }
    }
}
