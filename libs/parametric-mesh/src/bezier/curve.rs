//! # Cubic Bézier Curve
//!
//! Four control points sampled into a polyline at uniform parameter steps.

use config::constants::{DEFAULT_CURVE_CONTROL_POINTS, MIN_CURVE_SEGMENTS};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::basis::cubic_basis;
use crate::error::MeshResult;
use crate::grid::unit_parameter;
use crate::polyline::Polyline;
use crate::validate;

const SHAPE: &str = "bezier curve";

/// A cubic Bézier curve defined by four control points.
///
/// The curve starts at the first control point and ends at the last; the
/// two inner points shape the tangents.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::bezier::CubicBezier;
/// use glam::DVec3;
///
/// let curve = CubicBezier::default();
/// let line = curve.sample(200).unwrap();
/// assert_eq!(line.len(), 201);
/// assert_eq!(line.first(), Some(DVec3::new(-1.0, 0.0, 0.0)));
/// assert_eq!(line.last(), Some(DVec3::new(1.0, 0.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    control_points: [DVec3; 4],
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::new(default_control_points())
    }
}

impl CubicBezier {
    /// Creates a curve from its control points.
    pub fn new(control_points: [DVec3; 4]) -> Self {
        Self { control_points }
    }

    /// The raw control points, e.g. for drawing a control polygon overlay.
    pub fn control_points(&self) -> &[DVec3; 4] {
        &self.control_points
    }

    /// Evaluates the curve at parameter `t`.
    ///
    /// `t` is expected in `[0, 1]`; values outside extrapolate the polynomial.
    pub fn point_at(&self, t: f64) -> DVec3 {
        cubic_basis(t)
            .iter()
            .zip(&self.control_points)
            .fold(DVec3::ZERO, |acc, (&weight, &point)| acc + weight * point)
    }

    /// Samples the curve at `segments + 1` uniformly spaced parameters.
    pub fn sample(&self, segments: u32) -> MeshResult<Polyline> {
        let mut polyline = Polyline::new();
        self.sample_into(&mut polyline, segments)?;
        Ok(polyline)
    }

    /// Clears `polyline` and fills it with `segments + 1` samples at
    /// `t = k / segments`.
    pub fn sample_into(&self, polyline: &mut Polyline, segments: u32) -> MeshResult<()> {
        polyline.clear();
        validate::at_least(SHAPE, "segments", segments, MIN_CURVE_SEGMENTS)?;
        validate::finite_points(SHAPE, &self.control_points)?;

        let point_count = segments as usize + 1;
        validate::vertex_budget(point_count)?;
        polyline.reserve(point_count);

        for k in 0..=segments {
            polyline.push(self.point_at(unit_parameter(k, segments)));
        }

        tracing::debug!(segments, points = polyline.len(), "sampled bezier curve");

        Ok(())
    }

    /// The control points connected in order.
    pub fn control_polygon(&self) -> Polyline {
        Polyline::from_points(self.control_points.to_vec())
    }
}

/// Control points of the preset S-curve.
pub(crate) fn default_control_points() -> [DVec3; 4] {
    DEFAULT_CURVE_CONTROL_POINTS.map(DVec3::from_array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use approx::assert_abs_diff_eq;

    fn arbitrary_curve() -> CubicBezier {
        CubicBezier::new([
            DVec3::new(0.1, -2.7, 3.3),
            DVec3::new(5.0, 1.0e3, -7.25),
            DVec3::new(-0.3, 0.0, 1.0 / 3.0),
            DVec3::new(9.9, -4.4, 0.7),
        ])
    }

    #[test]
    fn test_curve_interpolates_endpoints_exactly() {
        let curve = arbitrary_curve();
        let line = curve.sample(7).unwrap();
        assert_eq!(line.first(), Some(curve.control_points()[0]));
        assert_eq!(line.last(), Some(curve.control_points()[3]));
    }

    #[test]
    fn test_curve_default_endpoints() {
        let line = CubicBezier::default().sample(200).unwrap();
        assert_eq!(line.len(), 201);
        assert_eq!(line.point(0), DVec3::new(-1.0, 0.0, 0.0));
        assert_eq!(line.point(200), DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_curve_midpoint() {
        let curve = CubicBezier::default();
        // (P0 + 3 P1 + 3 P2 + P3) / 8
        let mid = curve.point_at(0.5);
        assert_abs_diff_eq!(mid.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(mid.y, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_curve_single_segment() {
        let curve = arbitrary_curve();
        let line = curve.sample(1).unwrap();
        assert_eq!(line.points(), &[curve.control_points()[0], curve.control_points()[3]]);
    }

    #[test]
    fn test_curve_straight_line_is_uniform() {
        let curve = CubicBezier::new([
            DVec3::ZERO,
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
        ]);
        let line = curve.sample(6).unwrap();
        for (k, p) in line.points().iter().enumerate() {
            assert_abs_diff_eq!(p.x, k as f64 * 0.5, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(line.length(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_curve_sample_into_overwrites() {
        let curve = CubicBezier::default();
        let mut line = curve.sample(100).unwrap();
        curve.sample_into(&mut line, 4).unwrap();
        assert_eq!(line.len(), 5);
    }

    #[test]
    fn test_curve_rejects_zero_segments() {
        let result = CubicBezier::default().sample(0);
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter { parameter: "segments", .. })
        ));
    }

    #[test]
    fn test_curve_rejects_nan_control_point() {
        let mut points = default_control_points();
        points[2].y = f64::NAN;
        assert!(CubicBezier::new(points).sample(10).is_err());
    }

    #[test]
    fn test_curve_control_polygon() {
        let curve = CubicBezier::default();
        let polygon = curve.control_polygon();
        assert_eq!(polygon.points(), curve.control_points());
    }
}
