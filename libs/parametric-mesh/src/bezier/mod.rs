//! # Bézier Evaluator
//!
//! Cubic Bézier curves and bicubic Bézier patches evaluated by Bernstein
//! weighted summation over their control points.
//!
//! ```text
//! basis (B0..B3) ──► CubicBezier ──► Polyline
//!        │
//!        └── B_i(u) * B_j(v) ──► BezierPatch ──► Mesh (shared grid stitching)
//! ```

pub mod basis;
pub mod curve;
pub mod surface;

pub use basis::{bernstein, cubic_basis};
pub use curve::CubicBezier;
pub use surface::BezierPatch;
