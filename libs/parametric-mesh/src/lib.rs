//! # Parametric Mesh
//!
//! Mesh and curve generation for a closed set of parametric shapes.
//! Produces renderable buffers: indexed triangle meshes or polylines.
//!
//! ## Architecture
//!
//! ```text
//! Shape ──► primitives (cylinder, cone, sphere, torus) ──► Mesh
//!   │
//!   └─────► bezier (curve, patch) ──► Polyline / Mesh
//! ```
//!
//! ## Conventions
//!
//! - Z is the axis of revolution; shapes are centered on the origin
//! - Ring samples run counter-clockwise from angle 0; seam vertices are
//!   duplicated rather than wrapped
//! - Triangles are wound so that normals face outward
//! - Every generation call clears its output buffer first
//!
//! ## Usage
//!
//! ```rust
//! use parametric_mesh::{generate, Shape};
//!
//! let shape = Shape::Sphere { radius: 1.0, stacks: 30, slices: 30 };
//! let geometry = generate(&shape).unwrap();
//! let mesh = geometry.as_mesh().unwrap();
//! assert_eq!(mesh.triangle_count(), 2 * 30 * 30);
//! ```

pub mod batch;
pub mod bezier;
pub mod error;
pub mod export;
pub mod mesh;
pub mod polyline;
pub mod primitives;
pub mod shape;

mod grid;
mod validate;

pub use batch::generate_all;
pub use bezier::{BezierPatch, CubicBezier};
pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use polyline::Polyline;
pub use shape::{Geometry, ParseShapeKindError, Shape, ShapeKind};

/// Generates one shape into a fresh buffer.
///
/// This is the main entry point; equivalent to [`Shape::generate`].
pub fn generate(shape: &Shape) -> MeshResult<Geometry> {
    shape.generate()
}
