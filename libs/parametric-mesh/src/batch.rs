//! Parallel generation of independent shapes.
//!
//! Each request gets its own buffer, so the work splits across the rayon
//! pool without sharing any state.

use rayon::prelude::*;

use crate::error::MeshResult;
use crate::shape::{Geometry, Shape};

/// Generates every shape in parallel.
///
/// Results come back in request order; a failing request does not stop the
/// others.
///
/// ```rust
/// use parametric_mesh::{generate_all, Shape};
///
/// let results = generate_all(&Shape::presets());
/// assert!(results.iter().all(Result::is_ok));
/// ```
pub fn generate_all(shapes: &[Shape]) -> Vec<MeshResult<Geometry>> {
    let results: Vec<MeshResult<Geometry>> = shapes
        .par_iter()
        .enumerate()
        .map(|(index, shape)| {
            tracing::trace!(index, shape = %shape.kind(), "generating batch entry");
            shape.generate()
        })
        .collect();

    let failed = results.iter().filter(|result| result.is_err()).count();
    tracing::debug!(requests = shapes.len(), failed, "batch generation finished");

    results
}
