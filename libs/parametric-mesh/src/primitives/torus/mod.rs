//! # Torus Primitive
//!
//! Tube swept around a circle in the XY plane. Doubly periodic, so there are
//! no caps; the seam row and seam column are duplicated.

use config::constants::MIN_TORUS_SEGMENTS;
use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::grid::{ring_angle, sample_grid, stitch_grid};
use crate::mesh::Mesh;
use crate::validate;

const SHAPE: &str = "torus";

/// Creates a torus mesh around the Z axis.
///
/// # Arguments
///
/// * `major_radius` - Distance from the axis to the tube centre, must be positive
/// * `minor_radius` - Tube radius, must be positive
/// * `major_segments` - Subdivisions around the axis, at least 3
/// * `minor_segments` - Subdivisions around the tube, at least 3
///
/// The vertex at `(u, v)` is
/// `((R + r cos v) cos u, (R + r cos v) sin u, r sin v)`.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::primitives::create_torus;
///
/// let torus = create_torus(1.5, 0.4, 48, 32).unwrap();
/// assert_eq!(torus.vertex_count(), 49 * 33);
/// assert_eq!(torus.triangle_count(), 2 * 48 * 32);
/// ```
pub fn create_torus(
    major_radius: f64,
    minor_radius: f64,
    major_segments: u32,
    minor_segments: u32,
) -> MeshResult<Mesh> {
    let mut mesh = Mesh::new();
    build_torus(&mut mesh, major_radius, minor_radius, major_segments, minor_segments)?;
    Ok(mesh)
}

/// Clears `mesh` and fills it with a torus.
pub fn build_torus(
    mesh: &mut Mesh,
    major_radius: f64,
    minor_radius: f64,
    major_segments: u32,
    minor_segments: u32,
) -> MeshResult<()> {
    mesh.clear();
    validate::positive(SHAPE, "major_radius", major_radius)?;
    validate::positive(SHAPE, "minor_radius", minor_radius)?;
    // Outer radius must stay finite or the outer ring overflows to inf/NaN
    if !(major_radius + minor_radius).is_finite() {
        return Err(MeshError::invalid_parameter(
            SHAPE,
            "minor_radius",
            format!("outer radius {} is not finite", major_radius + minor_radius),
        ));
    }
    validate::at_least(SHAPE, "major_segments", major_segments, MIN_TORUS_SEGMENTS)?;
    validate::at_least(SHAPE, "minor_segments", minor_segments, MIN_TORUS_SEGMENTS)?;

    let vertex_count = validate::grid_vertex_count(major_segments, minor_segments);
    validate::vertex_budget(vertex_count)?;
    mesh.reserve(vertex_count, 2 * major_segments as usize * minor_segments as usize);

    let base = sample_grid(mesh, major_segments, minor_segments, |i, j| {
        let (sin_u, cos_u) = ring_angle(i, major_segments).sin_cos();
        let (sin_v, cos_v) = ring_angle(j, minor_segments).sin_cos();
        let distance = major_radius + minor_radius * cos_v;
        DVec3::new(distance * cos_u, distance * sin_u, minor_radius * sin_v)
    });
    stitch_grid(mesh, base, major_segments, minor_segments);

    tracing::debug!(
        major_radius,
        minor_radius,
        major_segments,
        minor_segments,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated torus"
    );

    Ok(())
}

#[cfg(test)]
mod tests;
