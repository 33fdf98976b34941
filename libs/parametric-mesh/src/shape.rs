//! # Shape Dispatch
//!
//! [`Shape`] carries one family's parameters and routes generation to the
//! primitive mesher or the Bézier evaluator. [`Geometry`] is the matching
//! output: an indexed mesh or a polyline.
//!
//! Shapes deserialize from JSON requests tagged by family name:
//!
//! ```rust
//! use parametric_mesh::{Shape, ShapeKind};
//!
//! let shape: Shape =
//!     serde_json::from_str(r#"{"shape":"sphere","radius":1.0,"stacks":30,"slices":30}"#).unwrap();
//! assert_eq!(shape, Shape::preset(ShapeKind::Sphere));
//! ```

use std::fmt;
use std::str::FromStr;

use config::constants::{
    DEFAULT_CURVE_SEGMENTS, DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_SLICES,
    DEFAULT_SPHERE_SLICES, DEFAULT_SPHERE_STACKS, DEFAULT_SURFACE_RESOLUTION,
    DEFAULT_TORUS_MAJOR_RADIUS, DEFAULT_TORUS_MAJOR_SEGMENTS, DEFAULT_TORUS_MINOR_RADIUS,
    DEFAULT_TORUS_MINOR_SEGMENTS,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bezier::curve::default_control_points;
use crate::bezier::surface::default_control_grid;
use crate::bezier::{BezierPatch, CubicBezier};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::polyline::Polyline;
use crate::primitives::{build_cone, build_cylinder, build_sphere, build_torus};

// =============================================================================
// SHAPE KIND
// =============================================================================

/// Shape family selector without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Cylinder,
    Cone,
    Sphere,
    Torus,
    BezierCurve,
    BezierSurface,
}

impl ShapeKind {
    /// Every family, in menu order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Sphere,
        ShapeKind::Torus,
        ShapeKind::BezierCurve,
        ShapeKind::BezierSurface,
    ];

    /// Snake case name, identical to the JSON tag.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Torus => "torus",
            ShapeKind::BezierCurve => "bezier_curve",
            ShapeKind::BezierSurface => "bezier_surface",
        }
    }

    /// True for families that produce a [`Polyline`] instead of a [`Mesh`].
    pub fn is_curve(self) -> bool {
        matches!(self, ShapeKind::BezierCurve)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown shape name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape `{0}` (expected one of: cylinder, cone, sphere, torus, bezier_curve, bezier_surface)")]
pub struct ParseShapeKindError(String);

impl FromStr for ShapeKind {
    type Err = ParseShapeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseShapeKindError(s.to_string()))
    }
}

// =============================================================================
// SHAPE
// =============================================================================

/// A generation request: one family plus its parameters.
///
/// Bézier control points default to the preset geometry when omitted from a
/// JSON request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Cylinder {
        radius: f64,
        height: f64,
        slices: u32,
    },
    Cone {
        radius: f64,
        height: f64,
        slices: u32,
    },
    Sphere {
        radius: f64,
        stacks: u32,
        slices: u32,
    },
    Torus {
        major_radius: f64,
        minor_radius: f64,
        major_segments: u32,
        minor_segments: u32,
    },
    BezierCurve {
        #[serde(default = "default_control_points")]
        control_points: [DVec3; 4],
        segments: u32,
    },
    BezierSurface {
        #[serde(default = "default_control_grid")]
        control_grid: [[DVec3; 4]; 4],
        resolution: u32,
    },
}

impl Shape {
    /// Reference parameters for a family.
    ///
    /// ```rust
    /// use parametric_mesh::{Shape, ShapeKind};
    ///
    /// assert_eq!(
    ///     Shape::preset(ShapeKind::Torus),
    ///     Shape::Torus {
    ///         major_radius: 1.5,
    ///         minor_radius: 0.4,
    ///         major_segments: 48,
    ///         minor_segments: 32,
    ///     },
    /// );
    /// ```
    pub fn preset(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Cylinder => Shape::Cylinder {
                radius: DEFAULT_RADIUS,
                height: DEFAULT_HEIGHT,
                slices: DEFAULT_SLICES,
            },
            ShapeKind::Cone => Shape::Cone {
                radius: DEFAULT_RADIUS,
                height: DEFAULT_HEIGHT,
                slices: DEFAULT_SLICES,
            },
            ShapeKind::Sphere => Shape::Sphere {
                radius: DEFAULT_RADIUS,
                stacks: DEFAULT_SPHERE_STACKS,
                slices: DEFAULT_SPHERE_SLICES,
            },
            ShapeKind::Torus => Shape::Torus {
                major_radius: DEFAULT_TORUS_MAJOR_RADIUS,
                minor_radius: DEFAULT_TORUS_MINOR_RADIUS,
                major_segments: DEFAULT_TORUS_MAJOR_SEGMENTS,
                minor_segments: DEFAULT_TORUS_MINOR_SEGMENTS,
            },
            ShapeKind::BezierCurve => Shape::BezierCurve {
                control_points: default_control_points(),
                segments: DEFAULT_CURVE_SEGMENTS,
            },
            ShapeKind::BezierSurface => Shape::BezierSurface {
                control_grid: default_control_grid(),
                resolution: DEFAULT_SURFACE_RESOLUTION,
            },
        }
    }

    /// Presets for every family, in [`ShapeKind::ALL`] order.
    pub fn presets() -> Vec<Shape> {
        ShapeKind::ALL.into_iter().map(Shape::preset).collect()
    }

    /// The family of this request.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
            Shape::Cone { .. } => ShapeKind::Cone,
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Torus { .. } => ShapeKind::Torus,
            Shape::BezierCurve { .. } => ShapeKind::BezierCurve,
            Shape::BezierSurface { .. } => ShapeKind::BezierSurface,
        }
    }

    /// Control polygon (curve) or control net (surface) for debug overlays.
    ///
    /// Empty for the revolution primitives.
    pub fn control_overlay(&self) -> Vec<Polyline> {
        match self {
            Shape::BezierCurve { control_points, .. } => {
                vec![CubicBezier::new(*control_points).control_polygon()]
            }
            Shape::BezierSurface { control_grid, .. } => {
                BezierPatch::new(*control_grid).control_net()
            }
            _ => Vec::new(),
        }
    }

    /// Generates the shape into a fresh buffer.
    pub fn generate(&self) -> MeshResult<Geometry> {
        let mut geometry = Geometry::default();
        self.generate_into(&mut geometry)?;
        Ok(geometry)
    }

    /// Clears `geometry` and refills it with this shape.
    ///
    /// The buffer is switched to the output variant of the family first, so a
    /// failed request always leaves an empty buffer of the right kind.
    pub fn generate_into(&self, geometry: &mut Geometry) -> MeshResult<()> {
        match *self {
            Shape::Cylinder {
                radius,
                height,
                slices,
            } => geometry.refill_mesh(|mesh| build_cylinder(mesh, radius, height, slices)),
            Shape::Cone {
                radius,
                height,
                slices,
            } => geometry.refill_mesh(|mesh| build_cone(mesh, radius, height, slices)),
            Shape::Sphere {
                radius,
                stacks,
                slices,
            } => geometry.refill_mesh(|mesh| build_sphere(mesh, radius, stacks, slices)),
            Shape::Torus {
                major_radius,
                minor_radius,
                major_segments,
                minor_segments,
            } => geometry.refill_mesh(|mesh| {
                build_torus(mesh, major_radius, minor_radius, major_segments, minor_segments)
            }),
            Shape::BezierCurve {
                control_points,
                segments,
            } => geometry.refill_polyline(|polyline| {
                CubicBezier::new(control_points).sample_into(polyline, segments)
            }),
            Shape::BezierSurface {
                control_grid,
                resolution,
            } => geometry.refill_mesh(|mesh| {
                BezierPatch::new(control_grid).tessellate_into(mesh, resolution)
            }),
        }
    }
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// Output of a generation call.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Mesh(Mesh),
    Polyline(Polyline),
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::Mesh(Mesh::new())
    }
}

impl Geometry {
    /// The mesh, if this is a mesh.
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match self {
            Geometry::Mesh(mesh) => Some(mesh),
            Geometry::Polyline(_) => None,
        }
    }

    /// The polyline, if this is a polyline.
    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            Geometry::Polyline(polyline) => Some(polyline),
            Geometry::Mesh(_) => None,
        }
    }

    /// Takes the mesh out, if this is a mesh.
    pub fn into_mesh(self) -> Option<Mesh> {
        match self {
            Geometry::Mesh(mesh) => Some(mesh),
            Geometry::Polyline(_) => None,
        }
    }

    /// Takes the polyline out, if this is a polyline.
    pub fn into_polyline(self) -> Option<Polyline> {
        match self {
            Geometry::Polyline(polyline) => Some(polyline),
            Geometry::Mesh(_) => None,
        }
    }

    /// All positions in index order.
    pub fn positions(&self) -> &[DVec3] {
        match self {
            Geometry::Mesh(mesh) => mesh.vertices(),
            Geometry::Polyline(polyline) => polyline.points(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions().is_empty()
    }

    // Reuses the existing allocation when the variant already matches.
    fn refill_mesh(&mut self, build: impl FnOnce(&mut Mesh) -> MeshResult<()>) -> MeshResult<()> {
        let mut mesh = match std::mem::take(self) {
            Geometry::Mesh(mesh) => mesh,
            Geometry::Polyline(_) => Mesh::new(),
        };
        let result = build(&mut mesh);
        *self = Geometry::Mesh(mesh);
        result
    }

    fn refill_polyline(
        &mut self,
        build: impl FnOnce(&mut Polyline) -> MeshResult<()>,
    ) -> MeshResult<()> {
        let mut polyline = match std::mem::take(self) {
            Geometry::Polyline(polyline) => polyline,
            Geometry::Mesh(_) => Polyline::new(),
        };
        let result = build(&mut polyline);
        *self = Geometry::Polyline(polyline);
        result
    }
}

impl From<Mesh> for Geometry {
    fn from(mesh: Mesh) -> Self {
        Geometry::Mesh(mesh)
    }
}

impl From<Polyline> for Geometry {
    fn from(polyline: Polyline) -> Self {
        Geometry::Polyline(polyline)
    }
}
