//! Batch command - generate a JSON list of requests in parallel
//!
//! The request file is a JSON array of shapes, e.g. the output of
//! `meshgen presets`. Each request `i` is written to `<out-dir>/<i>_<kind>.obj`.

use anyhow::{bail, Context, Result};
use clap::Args;
use parametric_mesh::{generate_all, Shape};
use std::path::{Path, PathBuf};

use crate::output::{with_normals, write_geometry};

/// Arguments for the batch command
#[derive(Args)]
pub struct BatchArgs {
    /// JSON file holding an array of shape requests
    pub requests: PathBuf,

    /// Directory receiving one OBJ file per request (created if missing)
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Compute vertex normals and write `vn` records (meshes only)
    #[arg(long)]
    pub normals: bool,
}

/// Reads and parses a request file.
pub fn load_requests(path: &Path) -> Result<Vec<Shape>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse shape requests in {}", path.display()))
}

/// Output file name of request `index`.
pub fn output_name(index: usize, shape: &Shape) -> String {
    format!("{}_{}.obj", index, shape.kind())
}

/// Execute the batch command
///
/// Every successful request is written even when others fail; the command
/// then reports the failures as an error.
pub fn execute(args: BatchArgs) -> Result<()> {
    let shapes = load_requests(&args.requests)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    let results = generate_all(&shapes);

    let mut failures = Vec::new();
    for (index, (shape, result)) in shapes.iter().zip(results).enumerate() {
        match result {
            Ok(geometry) => {
                let path = args.out_dir.join(output_name(index, shape));
                let geometry = with_normals(geometry, args.normals);
                write_geometry(&geometry, Some(&path))?;
                tracing::debug!(index, path = %path.display(), "wrote batch entry");
            }
            Err(err) => {
                tracing::warn!(index, shape = %shape.kind(), error = %err, "request failed");
                failures.push(format!("  [{index}] {}: {err}", shape.kind()));
            }
        }
    }

    tracing::info!(
        requests = shapes.len(),
        written = shapes.len() - failures.len(),
        out_dir = %args.out_dir.display(),
        "batch finished"
    );

    if !failures.is_empty() {
        bail!(
            "{} of {} requests failed:\n{}",
            failures.len(),
            shapes.len(),
            failures.join("\n")
        );
    }
    Ok(())
}
