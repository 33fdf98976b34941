//! Meshgen - command-line front end for the parametric mesh engine
//!
//! # Commands
//!
//! - `meshgen generate <kind>` - Generate one shape as OBJ (stdout or `-o`)
//! - `meshgen batch <requests.json>` - Generate a list of requests in parallel
//! - `meshgen presets` - Print the preset requests as JSON
//!
//! # Usage
//!
//! ```bash
//! # Default sphere to stdout
//! meshgen generate sphere > sphere.obj
//!
//! # Finer torus with normals
//! meshgen generate torus --major-segments 96 --minor-segments 64 --normals -o torus.obj
//!
//! # Start a request file from the presets, edit it, then run it
//! meshgen presets > requests.json
//! meshgen batch requests.json --out-dir meshes
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).

mod batch;
mod generate;
mod output;
mod presets;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Meshgen - parametric mesh and curve generator
#[derive(Parser)]
#[command(name = "meshgen")]
#[command(about = "Generate parametric meshes and curves as Wavefront OBJ")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one shape from its preset plus parameter overrides
    Generate(generate::GenerateArgs),

    /// Generate every request in a JSON file, in parallel
    Batch(batch::BatchArgs),

    /// Print the preset request of every shape as JSON
    Presets(presets::PresetsArgs),
}

fn main() -> Result<()> {
    // OBJ output goes to stdout, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::execute(args),
        Commands::Batch(args) => batch::execute(args),
        Commands::Presets(args) => presets::execute(args),
    }
}
