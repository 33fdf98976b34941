//! # Cylinder Primitive
//!
//! Closed cylinder: a side band between two rings plus a triangle fan cap at
//! each end.

use config::constants::MIN_SLICES;
use glam::DVec3;

use crate::error::MeshResult;
use crate::grid::ring_angle;
use crate::mesh::Mesh;
use crate::validate;

const SHAPE: &str = "cylinder";

/// Creates a closed cylinder mesh.
///
/// # Arguments
///
/// * `radius` - Ring radius, must be positive
/// * `height` - Extent along Z, centered on the origin, must be positive
/// * `slices` - Angular subdivisions, at least 3
///
/// # Returns
///
/// A mesh with `2 * (slices + 1) + 2` vertices and `4 * slices` triangles.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(1.0, 2.0, 48).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 * 49 + 2);
/// assert_eq!(mesh.triangle_count(), 4 * 48);
/// ```
pub fn create_cylinder(radius: f64, height: f64, slices: u32) -> MeshResult<Mesh> {
    let mut mesh = Mesh::new();
    build_cylinder(&mut mesh, radius, height, slices)?;
    Ok(mesh)
}

/// Clears `mesh` and fills it with a closed cylinder.
///
/// Vertex layout:
/// - `2 * i` / `2 * i + 1`: bottom / top ring vertex at angle `i`, for
///   `i in 0..=slices` (the seam at 2π is duplicated)
/// - then the bottom cap centre, then the top cap centre
pub fn build_cylinder(mesh: &mut Mesh, radius: f64, height: f64, slices: u32) -> MeshResult<()> {
    mesh.clear();
    validate::positive(SHAPE, "radius", radius)?;
    validate::positive(SHAPE, "height", height)?;
    validate::at_least(SHAPE, "slices", slices, MIN_SLICES)?;

    let ring_vertices = slices as usize + 1;
    validate::vertex_budget(2 * ring_vertices + 2)?;
    mesh.reserve(2 * ring_vertices + 2, 4 * slices as usize);

    let half = height * 0.5;

    for i in 0..=slices {
        let (sin, cos) = ring_angle(i, slices).sin_cos();
        let x = radius * cos;
        let y = radius * sin;
        mesh.add_vertex(DVec3::new(x, y, -half));
        mesh.add_vertex(DVec3::new(x, y, half));
    }

    // Side band, wound so normals face away from the axis
    for i in 0..slices {
        let bottom = i * 2;
        let top = bottom + 1;
        let next_bottom = bottom + 2;
        let next_top = bottom + 3;
        mesh.add_triangle(bottom, next_bottom, top);
        mesh.add_triangle(top, next_bottom, next_top);
    }

    let bottom_center = mesh.add_vertex(DVec3::new(0.0, 0.0, -half));
    for i in 0..slices {
        let v = i * 2;
        let v_next = ((i + 1) % slices) * 2;
        mesh.add_triangle(bottom_center, v_next, v);
    }

    let top_center = mesh.add_vertex(DVec3::new(0.0, 0.0, half));
    for i in 0..slices {
        let v = i * 2 + 1;
        let v_next = ((i + 1) % slices) * 2 + 1;
        mesh.add_triangle(top_center, v, v_next);
    }

    tracing::debug!(
        radius,
        height,
        slices,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated cylinder"
    );

    Ok(())
}
