//! # Cone Primitive
//!
//! Closed cone: side triangles fanning from an apex down to a base ring,
//! plus a fan cap closing the base.

use config::constants::MIN_SLICES;
use glam::DVec3;

use crate::error::MeshResult;
use crate::grid::ring_angle;
use crate::mesh::Mesh;
use crate::validate;

const SHAPE: &str = "cone";

/// Creates a closed cone mesh with its apex on +Z.
///
/// # Arguments
///
/// * `radius` - Base radius, must be positive
/// * `height` - Apex-to-base distance, centered on the origin, must be positive
/// * `slices` - Angular subdivisions of the base, at least 3
///
/// # Returns
///
/// A mesh with `slices + 3` vertices and `2 * slices` triangles.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::primitives::create_cone;
///
/// let cone = create_cone(1.0, 2.0, 48).unwrap();
/// assert_eq!(cone.vertex(0).z, 1.0); // apex
/// assert_eq!(cone.triangle_count(), 96);
/// ```
pub fn create_cone(radius: f64, height: f64, slices: u32) -> MeshResult<Mesh> {
    let mut mesh = Mesh::new();
    build_cone(&mut mesh, radius, height, slices)?;
    Ok(mesh)
}

/// Clears `mesh` and fills it with a closed cone.
///
/// Vertex layout: apex at 0, base ring at `1..=slices + 1` (seam duplicated),
/// base centre last.
pub fn build_cone(mesh: &mut Mesh, radius: f64, height: f64, slices: u32) -> MeshResult<()> {
    mesh.clear();
    validate::positive(SHAPE, "radius", radius)?;
    validate::positive(SHAPE, "height", height)?;
    validate::at_least(SHAPE, "slices", slices, MIN_SLICES)?;

    let vertex_count = slices as usize + 3;
    validate::vertex_budget(vertex_count)?;
    mesh.reserve(vertex_count, 2 * slices as usize);

    let half = height * 0.5;

    let apex = mesh.add_vertex(DVec3::new(0.0, 0.0, half));
    for i in 0..=slices {
        let (sin, cos) = ring_angle(i, slices).sin_cos();
        mesh.add_vertex(DVec3::new(radius * cos, radius * sin, -half));
    }

    for i in 0..slices {
        mesh.add_triangle(apex, i + 1, i + 2);
    }

    let base_center = mesh.add_vertex(DVec3::new(0.0, 0.0, -half));
    for i in 0..slices {
        let v = i + 1;
        let v_next = (i + 1) % slices + 1;
        mesh.add_triangle(base_center, v_next, v);
    }

    tracing::debug!(
        radius,
        height,
        slices,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated cone"
    );

    Ok(())
}
