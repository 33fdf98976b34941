//! Parameter validation shared by every generator.
//!
//! All checks run before any geometry is produced so that invalid requests
//! fail fast instead of emitting NaN positions or zero-area triangles.

use config::constants::MAX_VERTICES;
use glam::DVec3;

use crate::error::{MeshError, MeshResult};

/// Rejects zero, negative and non-finite lengths.
pub(crate) fn positive(shape: &'static str, parameter: &'static str, value: f64) -> MeshResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(
            shape,
            parameter,
            format!("must be a positive finite number, got {value}"),
        ))
    }
}

/// Rejects resolutions below the family minimum.
pub(crate) fn at_least(
    shape: &'static str,
    parameter: &'static str,
    value: u32,
    min: u32,
) -> MeshResult<()> {
    if value >= min {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(
            shape,
            parameter,
            format!("must be at least {min}, got {value}"),
        ))
    }
}

/// Rejects control points with NaN or infinite coordinates.
pub(crate) fn finite_points<'a>(
    shape: &'static str,
    points: impl IntoIterator<Item = &'a DVec3>,
) -> MeshResult<()> {
    match points.into_iter().position(|p| !p.is_finite()) {
        None => Ok(()),
        Some(index) => Err(MeshError::invalid_parameter(
            shape,
            "control_points",
            format!("control point {index} has a non-finite coordinate"),
        )),
    }
}

/// Vertex count of a `(rows + 1) x (cols + 1)` sample grid, saturating on overflow.
pub(crate) fn grid_vertex_count(rows: u32, cols: u32) -> usize {
    (rows as usize + 1).saturating_mul(cols as usize + 1)
}

/// Rejects outputs larger than [`MAX_VERTICES`].
pub(crate) fn vertex_budget(count: usize) -> MeshResult<()> {
    if count <= MAX_VERTICES {
        Ok(())
    } else {
        Err(MeshError::TooManyVertices {
            count,
            max: MAX_VERTICES,
        })
    }
}
