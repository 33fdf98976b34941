//! Torus primitive tests.

use super::*;
use crate::error::MeshError;
use approx::assert_abs_diff_eq;
use config::constants::VERTEX_MERGE_EPSILON;
use std::f64::consts::PI;

#[test]
fn test_torus_counts() {
    let mesh = create_torus(1.5, 0.4, 48, 32).unwrap();
    assert_eq!(mesh.vertex_count(), 49 * 33);
    assert_eq!(mesh.triangle_count(), 2 * 48 * 32);
    assert!(mesh.validate());
}

#[test]
fn test_torus_vertices_within_tube_bounds() {
    let (major, minor) = (1.5, 0.4);
    let mesh = create_torus(major, minor, 48, 32).unwrap();
    let tolerance = 1e-9;
    for v in mesh.vertices() {
        let axis_distance = v.truncate().length();
        assert!(axis_distance >= major - minor - tolerance, "{v:?} too close to axis");
        assert!(axis_distance <= major + minor + tolerance, "{v:?} too far from axis");
    }
}

#[test]
fn test_torus_vertices_on_tube_surface() {
    let (major, minor) = (2.0, 0.5);
    let mesh = create_torus(major, minor, 12, 9).unwrap();
    for v in mesh.vertices() {
        let tube_center = v.truncate().normalize().extend(0.0) * major;
        assert_abs_diff_eq!(v.distance(tube_center), minor, epsilon = 1e-12);
    }
}

#[test]
fn test_torus_is_closed() {
    let mesh = create_torus(1.0, 0.25, 16, 8).unwrap();
    assert_eq!(mesh.open_edge_count(VERTEX_MERGE_EPSILON), 0);
}

#[test]
fn test_torus_faces_outward() {
    let (major, minor) = (1.5, 0.4);
    let mesh = create_torus(major, minor, 96, 64).unwrap();
    let volume = mesh.signed_volume();
    let exact = 2.0 * PI * PI * major * minor * minor;
    assert!(volume > 0.0);
    assert_abs_diff_eq!(volume, exact, epsilon = exact * 0.01);
}

#[test]
fn test_torus_invalid_parameters() {
    assert!(matches!(
        create_torus(0.0, 0.4, 48, 32),
        Err(MeshError::InvalidParameter { parameter: "major_radius", .. })
    ));
    assert!(matches!(
        create_torus(1.5, -0.4, 48, 32),
        Err(MeshError::InvalidParameter { parameter: "minor_radius", .. })
    ));
    assert!(matches!(
        create_torus(1.5, 0.4, 2, 32),
        Err(MeshError::InvalidParameter { parameter: "major_segments", .. })
    ));
    assert!(matches!(
        create_torus(1.5, 0.4, 48, 0),
        Err(MeshError::InvalidParameter { parameter: "minor_segments", .. })
    ));
}

#[test]
fn test_torus_rejects_overflowing_outer_radius() {
    // Each radius is finite on its own but their sum is not
    assert!(matches!(
        create_torus(f64::MAX, f64::MAX, 3, 3),
        Err(MeshError::InvalidParameter { parameter: "minor_radius", .. })
    ));

    let mesh = create_torus(f64::MAX / 4.0, f64::MAX / 4.0, 3, 3).unwrap();
    assert!(mesh.vertices().iter().all(|v| v.is_finite()));
}
