//! # Primitives
//!
//! Ring-sampled revolution surfaces (cylinder, cone, sphere, torus) as
//! indexed triangle meshes. All shapes are centered on the origin with Z as
//! the axis of revolution, sample angles counter-clockwise from angle 0, and
//! wind their triangles so that normals face outward.
//!
//! Every family has two entry points: `create_*` returns a fresh [`Mesh`],
//! `build_*` clears and refills a caller-owned one.
//!
//! [`Mesh`]: crate::mesh::Mesh

pub mod cone;
pub mod cylinder;
pub mod sphere;
pub mod torus;

pub use cone::{build_cone, create_cone};
pub use cylinder::{build_cylinder, create_cylinder};
pub use sphere::{build_sphere, create_sphere};
pub use torus::{build_torus, create_torus};
