use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;
use parametric_mesh::primitives::{create_cylinder, create_sphere, create_torus};
use parametric_mesh::{
    generate_all, BezierPatch, CubicBezier, Geometry, MeshError, Shape, ShapeKind,
};

#[test]
fn sphere_counts_follow_resolution() {
    for (stacks, slices) in [(1, 3), (2, 5), (30, 30), (17, 64)] {
        let mesh = create_sphere(1.0, stacks, slices).unwrap();
        let (stacks, slices) = (stacks as usize, slices as usize);
        assert_eq!(mesh.triangle_count(), 2 * slices * stacks);
        assert_eq!(mesh.vertex_count(), (stacks + 1) * (slices + 1));
        let vertex_count = mesh.vertex_count() as u32;
        assert!(mesh.triangles().iter().flatten().all(|&i| i < vertex_count));
    }
}

#[test]
fn cylinder_is_closed_after_welding_seam() {
    for slices in [3, 4, 48, 100] {
        let mesh = create_cylinder(1.0, 2.0, slices).unwrap();
        assert_eq!(mesh.open_edge_count(VERTEX_MERGE_EPSILON), 0, "slices = {slices}");
    }
}

#[test]
fn revolution_shapes_are_closed_and_face_outward() {
    let closed = [
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Sphere,
        ShapeKind::Torus,
    ];
    for kind in closed {
        let geometry = Shape::preset(kind).generate().unwrap();
        let mesh = geometry.as_mesh().unwrap();
        assert_eq!(mesh.open_edge_count(VERTEX_MERGE_EPSILON), 0, "{kind} is open");
        assert!(mesh.signed_volume() > 0.0, "{kind} faces inward");
    }
}

#[test]
fn curve_hits_end_control_points_exactly() {
    let line = CubicBezier::default().sample(200).unwrap();
    assert_eq!(line.first(), Some(DVec3::new(-1.0, 0.0, 0.0)));
    assert_eq!(line.last(), Some(DVec3::new(1.0, 0.0, 0.0)));

    let points = [
        DVec3::new(0.3, -7.1, 2.0),
        DVec3::new(9.0, 1.0, -4.0),
        DVec3::new(-3.3, 0.25, 8.0),
        DVec3::new(5.5, -2.2, 0.1),
    ];
    let line = CubicBezier::new(points).sample(13).unwrap();
    assert_eq!(line.len(), 14);
    assert_eq!(line.first(), Some(points[0]));
    assert_eq!(line.last(), Some(points[3]));
}

#[test]
fn surface_corners_match_control_grid_corners() {
    let patch = BezierPatch::default();
    let resolution = 36;
    let mesh = patch.tessellate(resolution).unwrap();
    let grid = patch.control_grid();
    let last_row = resolution * (resolution + 1);

    assert_eq!(mesh.vertex(0), grid[0][0]);
    assert_eq!(mesh.vertex(resolution), grid[0][3]);
    assert_eq!(mesh.vertex(last_row), grid[3][0]);
    assert_eq!(mesh.vertex(last_row + resolution), grid[3][3]);
}

#[test]
fn torus_vertices_stay_within_tube_bounds() {
    let (major, minor) = (1.5, 0.4);
    let mesh = create_torus(major, minor, 48, 32).unwrap();
    for v in mesh.vertices() {
        let axis_distance = v.truncate().length();
        assert!(axis_distance >= major - minor - 1e-12);
        assert!(axis_distance <= major + minor + 1e-12);
    }
}

#[test]
fn identical_requests_produce_identical_buffers() {
    for shape in Shape::presets() {
        assert_eq!(shape.generate().unwrap(), shape.generate().unwrap());
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    let rejected = [
        Shape::Cylinder {
            radius: 1.0,
            height: 2.0,
            slices: 0,
        },
        Shape::Cone {
            radius: -1.0,
            height: 2.0,
            slices: 16,
        },
        Shape::Sphere {
            radius: -1.0,
            stacks: 8,
            slices: 8,
        },
        Shape::Sphere {
            radius: 1.0,
            stacks: 0,
            slices: 8,
        },
        Shape::Torus {
            major_radius: 1.5,
            minor_radius: 0.4,
            major_segments: 0,
            minor_segments: 8,
        },
        Shape::Torus {
            major_radius: f64::NAN,
            minor_radius: 0.4,
            major_segments: 8,
            minor_segments: 8,
        },
        Shape::BezierCurve {
            control_points: [DVec3::ZERO; 4],
            segments: 0,
        },
        Shape::BezierSurface {
            control_grid: [[DVec3::ZERO; 4]; 4],
            resolution: 0,
        },
    ];
    for shape in rejected {
        match shape.generate() {
            Err(MeshError::InvalidParameter { .. }) => {}
            other => panic!("expected invalid parameter for {shape:?}, got {other:?}"),
        }
    }
}

#[test]
fn oversized_request_fails_before_allocating() {
    let shape = Shape::Sphere {
        radius: 1.0,
        stacks: u32::MAX,
        slices: u32::MAX,
    };
    assert!(matches!(shape.generate(), Err(MeshError::TooManyVertices { .. })));
}

#[test]
fn reused_buffer_holds_only_latest_shape() {
    let mut geometry = Geometry::default();
    let big = Shape::Sphere {
        radius: 2.0,
        stacks: 64,
        slices: 64,
    };
    let small = Shape::Sphere {
        radius: 1.0,
        stacks: 2,
        slices: 3,
    };

    big.generate_into(&mut geometry).unwrap();
    small.generate_into(&mut geometry).unwrap();
    assert_eq!(geometry, small.generate().unwrap());

    for shape in Shape::presets() {
        shape.generate_into(&mut geometry).unwrap();
        assert_eq!(geometry, shape.generate().unwrap());
    }
}

#[test]
fn request_list_round_trips_through_json() {
    let shapes = Shape::presets();
    let json = serde_json::to_string(&shapes).unwrap();
    let parsed: Vec<Shape> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, shapes);
}

#[test]
fn batch_preserves_request_order() {
    let shapes: Vec<Shape> = (3..20)
        .map(|slices| Shape::Cone {
            radius: 1.0,
            height: 1.0,
            slices,
        })
        .collect();
    for (result, slices) in generate_all(&shapes).into_iter().zip(3usize..) {
        assert_eq!(result.unwrap().vertex_count(), slices + 3);
    }
}
