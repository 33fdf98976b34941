//! # Sphere Primitive
//!
//! Generates a latitude/longitude sphere on a `(stacks + 1) x (slices + 1)`
//! vertex grid.

use std::f64::consts::PI;

use config::constants::{MIN_SLICES, MIN_STACKS};
use glam::DVec3;

use crate::error::MeshResult;
use crate::grid::{ring_angle, sample_grid, stitch_grid};
use crate::mesh::Mesh;
use crate::validate;

const SHAPE: &str = "sphere";

/// Creates a sphere mesh using latitude/longitude tessellation.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere, must be positive
/// * `stacks` - Latitude bands from the +Z pole to the -Z pole, at least 1
/// * `slices` - Longitude subdivisions, at least 3
///
/// # Algorithm
///
/// - Row `i` sits at polar angle `phi = PI * i / stacks`
/// - Column `j` sits at azimuth `theta = 2 * PI * j / slices`
/// - The pole rows are degenerate rings: their vertices coincide in position
///   but keep distinct indices, and the seam column is duplicated
///
/// # Example
///
/// ```rust
/// use parametric_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(1.0, 30, 30).unwrap();
/// assert_eq!(mesh.vertex_count(), 31 * 31);
/// assert_eq!(mesh.triangle_count(), 2 * 30 * 30);
/// ```
pub fn create_sphere(radius: f64, stacks: u32, slices: u32) -> MeshResult<Mesh> {
    let mut mesh = Mesh::new();
    build_sphere(&mut mesh, radius, stacks, slices)?;
    Ok(mesh)
}

/// Clears `mesh` and fills it with a latitude/longitude sphere.
pub fn build_sphere(mesh: &mut Mesh, radius: f64, stacks: u32, slices: u32) -> MeshResult<()> {
    mesh.clear();
    validate::positive(SHAPE, "radius", radius)?;
    validate::at_least(SHAPE, "stacks", stacks, MIN_STACKS)?;
    validate::at_least(SHAPE, "slices", slices, MIN_SLICES)?;

    let vertex_count = validate::grid_vertex_count(stacks, slices);
    validate::vertex_budget(vertex_count)?;
    mesh.reserve(vertex_count, 2 * stacks as usize * slices as usize);

    let base = sample_grid(mesh, stacks, slices, |stack, slice| {
        let phi = PI * stack as f64 / stacks as f64;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = ring_angle(slice, slices).sin_cos();
        let ring_radius = radius * sin_phi;
        DVec3::new(ring_radius * cos_theta, ring_radius * sin_theta, radius * cos_phi)
    });
    stitch_grid(mesh, base, stacks, slices);

    tracing::debug!(
        radius,
        stacks,
        slices,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated sphere"
    );

    Ok(())
}
