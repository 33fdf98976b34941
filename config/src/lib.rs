//! # Config Crate
//!
//! Centralized configuration constants for the parametric mesh engine.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_SLICES, MIN_SLICES};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Default resolutions always satisfy the minimums
//! assert!(DEFAULT_SLICES >= MIN_SLICES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Renderer Agnostic**: No GPU or platform-specific values
//! - **Reference Defaults**: Shape defaults match the interactive viewer presets
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
