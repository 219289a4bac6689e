//! Straight-line blending of scalars and tuples

/// `a + t * (b - a)`; `t` is not clamped
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// [`lerp`] applied per component
#[inline]
pub fn lerp_n<const N: usize>(a: [f64; N], b: [f64; N], t: f64) -> [f64; N] {
    let mut out = a;
    for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        *o = lerp(*x, *y, t);
    }
    out
}

/// Weight of `value` between `a` and `b`
///
/// Returns 0 when the interval is empty.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    let span = b - a;
    if span == 0.0 { 0.0 } else { (value - a) / span }
}
