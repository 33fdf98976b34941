//! Presets command - print preset requests as JSON

use anyhow::{Context, Result};
use clap::Args;
use parametric_mesh::{Shape, ShapeKind};

/// Arguments for the presets command
#[derive(Args)]
pub struct PresetsArgs {
    /// Only print the preset of this shape
    #[arg(short, long)]
    pub kind: Option<ShapeKind>,
}

/// Renders the selected presets as a pretty-printed JSON array.
///
/// The output is a valid request file for `meshgen batch`.
pub fn render(kind: Option<ShapeKind>) -> Result<String> {
    let shapes = match kind {
        Some(kind) => vec![Shape::preset(kind)],
        None => Shape::presets(),
    };
    serde_json::to_string_pretty(&shapes).context("Failed to serialize presets")
}

/// Execute the presets command
pub fn execute(args: PresetsArgs) -> Result<()> {
    println!("{}", render(args.kind)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_all_presets_parses_back() {
        let json = render(None).unwrap();
        let shapes: Vec<Shape> = serde_json::from_str(&json).unwrap();
        assert_eq!(shapes.len(), ShapeKind::ALL.len());
        for (shape, kind) in shapes.iter().zip(ShapeKind::ALL) {
            assert_eq!(shape.kind(), kind);
        }
    }

    #[test]
    fn test_render_single_preset() {
        let json = render(Some(ShapeKind::Sphere)).unwrap();
        let shapes: Vec<Shape> = serde_json::from_str(&json).unwrap();
        assert_eq!(shapes, vec![Shape::preset(ShapeKind::Sphere)]);
        assert!(json.contains(r#""shape": "sphere""#));
    }
}
