//! Cubic Bernstein basis.
//!
//! The single weighting primitive behind both curve and surface evaluation.
//! The four weights are non-negative on `[0, 1]` and sum to one.

/// The four cubic Bernstein weights at `t`:
/// `(1-t)^3, 3(1-t)^2 t, 3(1-t) t^2, t^3`.
///
/// At `t = 0` and `t = 1` the weights are exactly `[1, 0, 0, 0]` and
/// `[0, 0, 0, 1]`, which makes curves interpolate their end control points
/// without rounding error.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::bezier::cubic_basis;
///
/// assert_eq!(cubic_basis(0.0), [1.0, 0.0, 0.0, 0.0]);
/// assert_eq!(cubic_basis(0.5), [0.125, 0.375, 0.375, 0.125]);
/// ```
#[inline]
pub fn cubic_basis(t: f64) -> [f64; 4] {
    let u = 1.0 - t;
    [u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t]
}

/// Single cubic Bernstein weight `B_{i,3}(t)`.
///
/// Indices above 3 have no support in a cubic basis and yield 0.
#[inline]
pub fn bernstein(i: usize, t: f64) -> f64 {
    cubic_basis(t).get(i).copied().unwrap_or(0.0)
}
