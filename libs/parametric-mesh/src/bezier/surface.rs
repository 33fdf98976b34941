//! # Bicubic Bézier Patch
//!
//! A 4x4 control grid sampled on a regular `(u, v)` grid and triangulated
//! with the same stitching as the revolution primitives.

use config::constants::{MIN_SURFACE_RESOLUTION, SURFACE_WAVE_AMPLITUDE};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::basis::cubic_basis;
use crate::error::MeshResult;
use crate::grid::{sample_grid, stitch_grid, unit_parameter};
use crate::mesh::Mesh;
use crate::polyline::Polyline;
use crate::validate;

const SHAPE: &str = "bezier surface";

/// A bicubic tensor-product Bézier patch.
///
/// `control_grid[i][j]` is weighted by `B_i(u) * B_j(v)`. The patch passes
/// through its four corner control points.
///
/// # Example
///
/// ```rust
/// use parametric_mesh::bezier::BezierPatch;
///
/// let patch = BezierPatch::default();
/// let mesh = patch.tessellate(36).unwrap();
/// assert_eq!(mesh.vertex_count(), 37 * 37);
/// assert_eq!(mesh.vertex(0), patch.control_grid()[0][0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierPatch {
    control_grid: [[DVec3; 4]; 4],
}

impl Default for BezierPatch {
    fn default() -> Self {
        Self::new(default_control_grid())
    }
}

impl BezierPatch {
    /// Creates a patch from its control grid.
    pub fn new(control_grid: [[DVec3; 4]; 4]) -> Self {
        Self { control_grid }
    }

    /// The raw control grid, e.g. for drawing a control net overlay.
    pub fn control_grid(&self) -> &[[DVec3; 4]; 4] {
        &self.control_grid
    }

    /// Evaluates the patch at `(u, v)`, both expected in `[0, 1]`.
    pub fn point_at(&self, u: f64, v: f64) -> DVec3 {
        self.weighted_sum(&cubic_basis(u), &cubic_basis(v))
    }

    fn weighted_sum(&self, basis_u: &[f64; 4], basis_v: &[f64; 4]) -> DVec3 {
        let mut point = DVec3::ZERO;
        for (row, &bu) in self.control_grid.iter().zip(basis_u) {
            for (&control, &bv) in row.iter().zip(basis_v) {
                point += control * (bu * bv);
            }
        }
        point
    }

    /// Samples the patch on a `(resolution + 1)^2` grid and triangulates it.
    pub fn tessellate(&self, resolution: u32) -> MeshResult<Mesh> {
        let mut mesh = Mesh::new();
        self.tessellate_into(&mut mesh, resolution)?;
        Ok(mesh)
    }

    /// Clears `mesh` and fills it with the sampled patch.
    ///
    /// Row `iu` holds the samples at `u = iu / resolution`, column `iv` those
    /// at `v = iv / resolution`, so the corners land at vertex indices `0`,
    /// `resolution`, `resolution * (resolution + 1)` and the last vertex.
    pub fn tessellate_into(&self, mesh: &mut Mesh, resolution: u32) -> MeshResult<()> {
        mesh.clear();
        validate::at_least(SHAPE, "resolution", resolution, MIN_SURFACE_RESOLUTION)?;
        validate::finite_points(SHAPE, self.control_grid.iter().flatten())?;

        let vertex_count = validate::grid_vertex_count(resolution, resolution);
        validate::vertex_budget(vertex_count)?;
        mesh.reserve(vertex_count, 2 * resolution as usize * resolution as usize);

        // Same parameters on both axes, so one basis table serves u and v
        let basis: Vec<[f64; 4]> = (0..=resolution)
            .map(|k| cubic_basis(unit_parameter(k, resolution)))
            .collect();

        let base = sample_grid(mesh, resolution, resolution, |iu, iv| {
            self.weighted_sum(&basis[iu as usize], &basis[iv as usize])
        });
        stitch_grid(mesh, base, resolution, resolution);

        tracing::debug!(
            resolution,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "tessellated bezier surface"
        );

        Ok(())
    }

    /// Control net for debug overlays: the four rows (fixed `i`) followed by
    /// the four columns (fixed `j`).
    pub fn control_net(&self) -> Vec<Polyline> {
        let rows = self
            .control_grid
            .iter()
            .map(|row| Polyline::from_points(row.to_vec()));
        let columns = (0..4).map(|j| {
            Polyline::from_points(self.control_grid.iter().map(|row| row[j]).collect())
        });
        rows.chain(columns).collect()
    }
}

/// Preset grid: a unit-spaced 4x4 lattice in XZ with a sine ripple in Y.
pub(crate) fn default_control_grid() -> [[DVec3; 4]; 4] {
    std::array::from_fn(|i| {
        std::array::from_fn(|j| {
            DVec3::new(
                i as f64 - 1.5,
                SURFACE_WAVE_AMPLITUDE * ((i * j) as f64).sin(),
                j as f64 - 1.5,
            )
        })
    })
}
