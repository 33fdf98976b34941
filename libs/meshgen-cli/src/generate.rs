//! Generate command - one shape from its preset plus flag overrides

use anyhow::{bail, Context, Result};
use clap::Args;
use parametric_mesh::{Shape, ShapeKind};
use std::path::PathBuf;

use crate::output::{with_normals, write_geometry};

/// Arguments for the generate command
#[derive(Args)]
pub struct GenerateArgs {
    /// Shape family: cylinder, cone, sphere, torus, bezier_curve, bezier_surface
    pub kind: ShapeKind,

    #[command(flatten)]
    pub overrides: ShapeOverrides,

    /// Compute vertex normals and write `vn` records (meshes only)
    #[arg(long)]
    pub normals: bool,

    /// Output OBJ file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parameter overrides applied on top of a preset.
///
/// Only the flags that belong to the chosen family are accepted.
#[derive(Args, Debug, Clone, Default)]
pub struct ShapeOverrides {
    /// Radius (cylinder, cone, sphere)
    #[arg(long)]
    pub radius: Option<f64>,

    /// Height (cylinder, cone)
    #[arg(long)]
    pub height: Option<f64>,

    /// Angular subdivisions (cylinder, cone, sphere)
    #[arg(long)]
    pub slices: Option<u32>,

    /// Latitude subdivisions (sphere)
    #[arg(long)]
    pub stacks: Option<u32>,

    /// Distance from the axis to the tube centre (torus)
    #[arg(long)]
    pub major_radius: Option<f64>,

    /// Tube radius (torus)
    #[arg(long)]
    pub minor_radius: Option<f64>,

    /// Subdivisions around the axis (torus)
    #[arg(long)]
    pub major_segments: Option<u32>,

    /// Subdivisions around the tube (torus)
    #[arg(long)]
    pub minor_segments: Option<u32>,

    /// Curve segments (bezier_curve)
    #[arg(long)]
    pub segments: Option<u32>,

    /// Samples per axis (bezier_surface)
    #[arg(long)]
    pub resolution: Option<u32>,
}

impl ShapeOverrides {
    /// Writes the overrides into `shape`, rejecting flags the family lacks.
    pub fn apply(mut self, shape: &mut Shape) -> Result<()> {
        match shape {
            Shape::Cylinder {
                radius,
                height,
                slices,
            }
            | Shape::Cone {
                radius,
                height,
                slices,
            } => {
                replace(radius, self.radius.take());
                replace(height, self.height.take());
                replace(slices, self.slices.take());
            }
            Shape::Sphere {
                radius,
                stacks,
                slices,
            } => {
                replace(radius, self.radius.take());
                replace(stacks, self.stacks.take());
                replace(slices, self.slices.take());
            }
            Shape::Torus {
                major_radius,
                minor_radius,
                major_segments,
                minor_segments,
            } => {
                replace(major_radius, self.major_radius.take());
                replace(minor_radius, self.minor_radius.take());
                replace(major_segments, self.major_segments.take());
                replace(minor_segments, self.minor_segments.take());
            }
            Shape::BezierCurve { segments, .. } => replace(segments, self.segments.take()),
            Shape::BezierSurface { resolution, .. } => {
                replace(resolution, self.resolution.take())
            }
        }

        let unused = self.given_flags();
        if !unused.is_empty() {
            bail!("{} does not accept {}", shape.kind(), unused.join(", "));
        }
        Ok(())
    }

    fn given_flags(&self) -> Vec<&'static str> {
        [
            ("--radius", self.radius.is_some()),
            ("--height", self.height.is_some()),
            ("--slices", self.slices.is_some()),
            ("--stacks", self.stacks.is_some()),
            ("--major-radius", self.major_radius.is_some()),
            ("--minor-radius", self.minor_radius.is_some()),
            ("--major-segments", self.major_segments.is_some()),
            ("--minor-segments", self.minor_segments.is_some()),
            ("--segments", self.segments.is_some()),
            ("--resolution", self.resolution.is_some()),
        ]
        .into_iter()
        .filter_map(|(flag, given)| given.then_some(flag))
        .collect()
    }
}

fn replace<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// Builds the request described by the arguments.
pub fn shape_from_args(kind: ShapeKind, overrides: ShapeOverrides) -> Result<Shape> {
    let mut shape = Shape::preset(kind);
    overrides.apply(&mut shape)?;
    Ok(shape)
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    let shape = shape_from_args(args.kind, args.overrides)?;
    let geometry = shape
        .generate()
        .with_context(|| format!("Failed to generate {}", shape.kind()))?;
    let geometry = with_normals(geometry, args.normals);

    let destination = args
        .output
        .as_deref()
        .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
    tracing::info!(
        shape = %shape.kind(),
        vertices = geometry.vertex_count(),
        output = %destination,
        "generated shape"
    );

    write_geometry(&geometry, args.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_no_overrides_gives_preset() {
        for kind in ShapeKind::ALL {
            let shape = shape_from_args(kind, ShapeOverrides::default()).unwrap();
            assert_eq!(shape, Shape::preset(kind));
        }
    }

    #[test]
    fn test_overrides_replace_preset_values() {
        let overrides = ShapeOverrides {
            radius: Some(3.0),
            stacks: Some(4),
            ..Default::default()
        };
        let shape = shape_from_args(ShapeKind::Sphere, overrides).unwrap();
        assert_eq!(
            shape,
            Shape::Sphere {
                radius: 3.0,
                stacks: 4,
                slices: 30
            }
        );
    }

    #[test]
    fn test_foreign_override_is_rejected() {
        let overrides = ShapeOverrides {
            stacks: Some(4),
            resolution: Some(9),
            ..Default::default()
        };
        let err = shape_from_args(ShapeKind::Cone, overrides).unwrap_err();
        assert_eq!(err.to_string(), "cone does not accept --stacks, --resolution");
    }

    #[test]
    fn test_execute_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curve.obj");
        execute(GenerateArgs {
            kind: ShapeKind::BezierCurve,
            overrides: ShapeOverrides {
                segments: Some(10),
                ..Default::default()
            },
            normals: false,
            output: Some(path.clone()),
        })
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 11);
        assert!(text.lines().any(|l| l.starts_with("l 1 2 ")));
    }

    #[test]
    fn test_execute_reports_invalid_parameters() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.obj");
        let result = execute(GenerateArgs {
            kind: ShapeKind::Cylinder,
            overrides: ShapeOverrides {
                slices: Some(2),
                ..Default::default()
            },
            normals: false,
            output: Some(path.clone()),
        });
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
