//! # Wavefront OBJ Export
//!
//! Writes generated geometry as text OBJ. Meshes become `v` and 1-based `f`
//! records (plus `vn` when normals were computed); polylines become `v`
//! records followed by a single `l` element.

use std::io::Write;

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::polyline::Polyline;
use crate::shape::Geometry;

/// Writes either output variant.
///
/// ```rust
/// use parametric_mesh::{export::write_obj, Shape, ShapeKind};
///
/// let geometry = Shape::preset(ShapeKind::Cone).generate().unwrap();
/// let mut out = Vec::new();
/// write_obj(&geometry, &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().starts_with("v 0 0 1\n"));
/// ```
pub fn write_obj<W: Write>(geometry: &Geometry, writer: &mut W) -> MeshResult<()> {
    match geometry {
        Geometry::Mesh(mesh) => write_mesh_obj(mesh, writer),
        Geometry::Polyline(polyline) => write_polyline_obj(polyline, writer),
    }
}

/// Writes a triangle mesh.
pub fn write_mesh_obj<W: Write>(mesh: &Mesh, writer: &mut W) -> MeshResult<()> {
    for v in mesh.vertices() {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }

    match mesh.normals() {
        Some(normals) => {
            for n in normals {
                writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
            }
            for [a, b, c] in mesh.triangles().iter().map(|tri| tri.map(|i| i + 1)) {
                writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")?;
            }
        }
        None => {
            for [a, b, c] in mesh.triangles().iter().map(|tri| tri.map(|i| i + 1)) {
                writeln!(writer, "f {a} {b} {c}")?;
            }
        }
    }

    Ok(())
}

/// Writes a polyline as one line element through every point.
pub fn write_polyline_obj<W: Write>(polyline: &Polyline, writer: &mut W) -> MeshResult<()> {
    for p in polyline.points() {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }

    // A line element needs at least two vertices
    if polyline.len() >= 2 {
        write!(writer, "l")?;
        for index in 1..=polyline.len() {
            write!(writer, " {index}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn to_text(geometry: &Geometry) -> String {
        let mut out = Vec::new();
        write_obj(geometry, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_mesh_obj() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::new(0.0, 1.5, -2.0));
        mesh.add_triangle(0, 1, 2);

        assert_eq!(
            to_text(&Geometry::Mesh(mesh)),
            "v 0 0 0\nv 1 0 0\nv 0 1.5 -2\nf 1 2 3\n"
        );
    }

    #[test]
    fn test_write_mesh_obj_with_normals() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh.compute_normals();

        let text = to_text(&Geometry::Mesh(mesh));
        assert_eq!(text.lines().filter(|l| *l == "vn 0 0 1").count(), 3);
        assert!(text.ends_with("f 1//1 2//2 3//3\n"));
    }

    #[test]
    fn test_write_polyline_obj() {
        let line = Polyline::from_points(vec![DVec3::ZERO, DVec3::X, DVec3::Y]);
        assert_eq!(
            to_text(&Geometry::Polyline(line)),
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nl 1 2 3\n"
        );
    }

    #[test]
    fn test_write_single_point_polyline_has_no_line() {
        let line = Polyline::from_points(vec![DVec3::Z]);
        assert_eq!(to_text(&Geometry::Polyline(line)), "v 0 0 1\n");
    }

    #[test]
    fn test_write_obj_counts_match_geometry() {
        let geometry = crate::Shape::preset(crate::ShapeKind::Torus).generate().unwrap();
        let mesh = geometry.as_mesh().unwrap();
        let text = to_text(&geometry);
        let vertices = text.lines().filter(|l| l.starts_with("v ")).count();
        let faces = text.lines().filter(|l| l.starts_with("f ")).count();
        assert_eq!(vertices, mesh.vertex_count());
        assert_eq!(faces, mesh.triangle_count());
    }
}
