//! Fixed-size float tuple helpers
//!
//! Every color space view in this crate is a plain `[f64; N]`. These helpers
//! clamp, compare and copy such tuples without caring about their meaning.

/// Three-component tuple (RGB, HSL, Lab, XYZ)
pub type Tuple3 = [f64; 3];

/// Four-component tuple (RGBA, HSLA, LabA, CMYK)
pub type Tuple4 = [f64; 4];

/// Five-component tuple (CMYKA)
pub type Tuple5 = [f64; 5];

/// Clamp every component to `[min, max]`
#[inline]
pub fn clamp<const N: usize>(tuple: [f64; N], min: f64, max: f64) -> [f64; N] {
    tuple.map(|v| v.clamp(min, max))
}

/// Clamp every component to the unit interval
#[inline]
pub fn clamp01<const N: usize>(tuple: [f64; N]) -> [f64; N] {
    clamp(tuple, 0.0, 1.0)
}

/// Exact component-wise equality
#[inline]
pub fn equals<const N: usize>(a: &[f64; N], b: &[f64; N]) -> bool {
    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Component-wise equality within `epsilon`
#[inline]
pub fn approx_eq<const N: usize>(a: &[f64; N], b: &[f64; N], epsilon: f64) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() < epsilon)
}

/// Independent copy of a tuple
///
/// Arrays are `Copy`, so this only exists to make call sites explicit
/// about handing out a value rather than a view.
#[inline]
pub fn duplicate<const N: usize>(tuple: &[f64; N]) -> [f64; N] {
    *tuple
}

/// Append an alpha component to a three-component tuple
#[inline]
pub fn with_alpha(t: Tuple3, alpha: f64) -> Tuple4 {
    [t[0], t[1], t[2], alpha]
}

/// Split a four-component tuple into its first three components and alpha
#[inline]
pub fn split_alpha(t: Tuple4) -> (Tuple3, f64) {
    ([t[0], t[1], t[2]], t[3])
}
