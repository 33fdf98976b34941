//! OBJ output to a file or stdout.

use anyhow::{Context, Result};
use parametric_mesh::export::write_obj;
use parametric_mesh::Geometry;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `geometry` as OBJ to `path`, or to stdout when `path` is `None`.
pub fn write_geometry(geometry: &Geometry, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_obj(geometry, &mut writer)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writer
                .flush()
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            write_obj(geometry, &mut writer).context("Failed to write to stdout")?;
            writer.flush().context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Computes normals in place when requested; polylines have none.
pub fn with_normals(mut geometry: Geometry, normals: bool) -> Geometry {
    if normals {
        if let Geometry::Mesh(mesh) = &mut geometry {
            mesh.compute_normals();
        }
    }
    geometry
}

#[cfg(test)]
mod tests {
    use super::*;
    use parametric_mesh::{Shape, ShapeKind};
    use tempfile::tempdir;

    #[test]
    fn test_write_geometry_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cone.obj");
        let geometry = Shape::preset(ShapeKind::Cone).generate().unwrap();

        write_geometry(&geometry, Some(&path)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 51);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 96);
    }

    #[test]
    fn test_write_geometry_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.obj");
        let geometry = Shape::preset(ShapeKind::BezierCurve).generate().unwrap();
        assert!(write_geometry(&geometry, Some(&path)).is_err());
    }

    #[test]
    fn test_with_normals() {
        let mesh = Shape::preset(ShapeKind::Sphere).generate().unwrap();
        let mesh = with_normals(mesh, true);
        assert!(mesh.as_mesh().unwrap().normals().is_some());

        let curve = Shape::preset(ShapeKind::BezierCurve).generate().unwrap();
        assert_eq!(with_normals(curve.clone(), true), curve);
    }
}
