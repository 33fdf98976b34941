//! Ring and grid sampling shared by the revolution primitives and the
//! Bézier patch tessellator.
//!
//! A grid of `rows x cols` cells is sampled into `(rows + 1) x (cols + 1)`
//! row-major vertices; the last row and column duplicate the seam instead of
//! wrapping indices.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::mesh::Mesh;

/// Angle of ring sample `index` out of `slices`, counter-clockwise from 0.
///
/// `index == slices` yields the closing seam angle 2π.
#[inline]
pub(crate) fn ring_angle(index: u32, slices: u32) -> f64 {
    TAU * index as f64 / slices as f64
}

/// Normalized parameter `index / steps` in `[0, 1]`.
#[inline]
pub(crate) fn unit_parameter(index: u32, steps: u32) -> f64 {
    index as f64 / steps as f64
}

/// Appends `(rows + 1) x (cols + 1)` vertices produced by `position(row, col)`.
///
/// Returns the index of the first appended vertex.
pub(crate) fn sample_grid(
    mesh: &mut Mesh,
    rows: u32,
    cols: u32,
    mut position: impl FnMut(u32, u32) -> DVec3,
) -> u32 {
    let base = mesh.vertex_count() as u32;
    for row in 0..=rows {
        for col in 0..=cols {
            mesh.add_vertex(position(row, col));
        }
    }
    base
}

/// Emits two triangles per grid cell with the same diagonal everywhere.
///
/// For the cell at `(row, col)` with `a` its top-left vertex and `b` the
/// vertex below it, the triangles are `(a, b, a+1)` and `(a+1, b, b+1)`.
pub(crate) fn stitch_grid(mesh: &mut Mesh, base: u32, rows: u32, cols: u32) {
    let stride = cols + 1;
    for row in 0..rows {
        for col in 0..cols {
            let a = base + row * stride + col;
            let b = a + stride;
            mesh.add_triangle(a, b, a + 1);
            mesh.add_triangle(a + 1, b, b + 1);
        }
    }
}
