//! # Mesh Data Structure
//!
//! Indexed triangle mesh: vertex positions plus triangle indices, with
//! optional vertex normals.

use std::collections::HashMap;

use crate::error::{MeshError, MeshResult};
use crate::polyline::Polyline;
use config::constants::approx_zero;
use glam::DVec3;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the renderer boundary via [`Mesh::vertices_f32`].
///
/// # Example
///
/// ```rust
/// use parametric_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions, insertion order is the vertex index
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all geometry while keeping the allocations for reuse.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.normals = None;
    }

    /// Reserves room for additional vertices and triangles.
    pub fn reserve(&mut self, vertex_count: usize, triangle_count: usize) {
        self.vertices.reserve(vertex_count);
        self.triangles.reserve(triangle_count);
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the vertex normals, if they have been computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes area-weighted vertex normals from the triangle winding.
    ///
    /// Seam vertices are distinct indices, so each side of a seam gets its
    /// own normal from the triangles that reference it.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Signed volume enclosed by the mesh.
    ///
    /// Positive when the triangles are wound counter-clockwise seen from
    /// outside (outward-facing normals). Only meaningful for closed meshes.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let v0 = self.vertices[tri[0] as usize];
                let v1 = self.vertices[tri[1] as usize];
                let v2 = self.vertices[tri[2] as usize];
                v0.dot(v1.cross(v2))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Counts triangles whose area is zero within tolerance.
    ///
    /// The tolerance is relative: twice the area is compared against the
    /// squared longest edge, so the count does not depend on mesh scale.
    /// A sphere has `2 * slices` of these along its pole rows.
    pub fn degenerate_triangle_count(&self) -> usize {
        self.triangles
            .iter()
            .filter(|tri| {
                let v0 = self.vertices[tri[0] as usize];
                let v1 = self.vertices[tri[1] as usize];
                let v2 = self.vertices[tri[2] as usize];
                let longest_sq = v0
                    .distance_squared(v1)
                    .max(v1.distance_squared(v2))
                    .max(v2.distance_squared(v0));
                // All three corners coincide
                if longest_sq == 0.0 {
                    return true;
                }
                approx_zero((v1 - v0).cross(v2 - v0).length() / longest_sq)
            })
            .count()
    }

    /// Validates the index buffer.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats an index
    ///
    /// Zero-area triangles are allowed: pole rows of a sphere collapse to a
    /// point while keeping distinct indices.
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        self.check_topology().is_ok()
    }

    /// Same checks as [`Mesh::validate`], reporting the first offending triangle.
    pub fn check_topology(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len() as u32;

        for (index, tri) in self.triangles.iter().enumerate() {
            if let Some(bad) = tri.iter().find(|&&v| v >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {index} references vertex {bad} but the mesh has {vertex_count} vertices"
                )));
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {index} repeats a vertex index: {tri:?}"
                )));
            }
        }

        Ok(())
    }

    /// Maps every vertex to the lowest index sharing its position within
    /// `epsilon`.
    ///
    /// Quadratic in the vertex count; intended for validation, not for
    /// production-size meshes.
    pub fn welded_indices(&self, epsilon: f64) -> Vec<u32> {
        let epsilon_sq = epsilon * epsilon;
        let mut canonical: Vec<u32> = Vec::with_capacity(self.vertices.len());

        for (index, position) in self.vertices.iter().enumerate() {
            let target = (0..index)
                .find(|&earlier| {
                    canonical[earlier] == earlier as u32
                        && self.vertices[earlier].distance_squared(*position) <= epsilon_sq
                })
                .unwrap_or(index);
            canonical.push(target as u32);
        }

        canonical
    }

    /// Counts undirected edges that are not shared by exactly two triangles
    /// once coincident vertices are welded.
    ///
    /// A closed surface returns zero. Triangles that collapse after welding
    /// (the pole rows of a sphere) are ignored.
    pub fn open_edge_count(&self, epsilon: f64) -> usize {
        let welded = self.welded_indices(epsilon);
        let mut uses: HashMap<(u32, u32), usize> = HashMap::new();

        for tri in &self.triangles {
            let w = tri.map(|v| welded[v as usize]);
            if w[0] == w[1] || w[1] == w[2] || w[0] == w[2] {
                continue;
            }
            for i in 0..3 {
                let (a, b) = (w[i], w[(i + 1) % 3]);
                *uses.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }

        uses.values().filter(|&&count| count != 2).count()
    }

    /// Returns the vertices as an unconnected point set.
    ///
    /// Fallback for renderers asked to draw a mesh that has no triangles.
    pub fn point_cloud(&self) -> Polyline {
        Polyline::from_points(self.vertices.clone())
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }
}
