//! # Configuration Constants
//!
//! Centralized constants for the parametric mesh engine. Precision values,
//! resolution minimums, safety limits and the reference shape presets are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Minimum tessellation counts per shape family
//! - **Limits**: Maximum values for safety bounds
//! - **Presets**: Default parameters for every shape family

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for vertex welding.
///
/// Slightly larger tolerance used when treating nearly-identical vertices as
/// the same point, e.g. the duplicated seam vertices produced at angle 0 and
/// angle 2π, whose trigonometric values differ by rounding noise.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// fn vertices_should_merge(v1: [f64; 3], v2: [f64; 3]) -> bool {
///     let dx = v1[0] - v2[0];
///     let dy = v1[1] - v2[1];
///     let dz = v1[2] - v2[2];
///     (dx * dx + dy * dy + dz * dz).sqrt() < VERTEX_MERGE_EPSILON
/// }
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum number of angular slices around a ring.
///
/// Fewer than three slices cannot enclose any area and would produce a
/// self-intersecting surface.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SLICES;
///
/// let requested = 2;
/// assert!(requested < MIN_SLICES); // rejected by the mesher
/// ```
pub const MIN_SLICES: u32 = 3;

/// Minimum number of latitude stacks for a sphere.
pub const MIN_STACKS: u32 = 1;

/// Minimum number of segments along either torus axis.
pub const MIN_TORUS_SEGMENTS: u32 = 3;

/// Minimum number of segments when sampling a Bézier curve.
///
/// One segment yields the two endpoints only.
pub const MIN_CURVE_SEGMENTS: u32 = 1;

/// Minimum sample resolution per axis of a Bézier surface patch.
pub const MIN_SURFACE_RESOLUTION: u32 = 1;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single generated buffer.
///
/// Safety limit checked before any allocation so that absurd resolution
/// requests fail instead of exhausting memory.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// PRESET CONSTANTS
// =============================================================================

/// Default radius for cylinders, cones and spheres.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default height for cylinders and cones.
pub const DEFAULT_HEIGHT: f64 = 2.0;

/// Default slice count for cylinders and cones.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SLICES, MIN_SLICES};
///
/// assert!(DEFAULT_SLICES >= MIN_SLICES);
/// ```
pub const DEFAULT_SLICES: u32 = 48;

/// Default number of latitude stacks for spheres.
pub const DEFAULT_SPHERE_STACKS: u32 = 30;

/// Default number of longitude slices for spheres.
pub const DEFAULT_SPHERE_SLICES: u32 = 30;

/// Default torus major radius (distance from the axis to the tube centre).
pub const DEFAULT_TORUS_MAJOR_RADIUS: f64 = 1.5;

/// Default torus minor radius (tube radius).
pub const DEFAULT_TORUS_MINOR_RADIUS: f64 = 0.4;

/// Default number of segments around the torus axis.
pub const DEFAULT_TORUS_MAJOR_SEGMENTS: u32 = 48;

/// Default number of segments around the torus tube.
pub const DEFAULT_TORUS_MINOR_SEGMENTS: u32 = 32;

/// Default number of segments when sampling a Bézier curve.
pub const DEFAULT_CURVE_SEGMENTS: u32 = 200;

/// Default per-axis sample resolution for Bézier surface patches.
pub const DEFAULT_SURFACE_RESOLUTION: u32 = 36;

/// Default control points of the cubic Bézier curve preset.
///
/// An S-shaped curve in the XY plane running from `(-1, 0, 0)` to `(1, 0, 0)`.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CURVE_CONTROL_POINTS;
///
/// assert_eq!(DEFAULT_CURVE_CONTROL_POINTS[0], [-1.0, 0.0, 0.0]);
/// assert_eq!(DEFAULT_CURVE_CONTROL_POINTS[3], [1.0, 0.0, 0.0]);
/// ```
pub const DEFAULT_CURVE_CONTROL_POINTS: [[f64; 3]; 4] = [
    [-1.0, 0.0, 0.0],
    [-0.5, 1.0, 0.0],
    [0.5, -1.0, 0.0],
    [1.0, 0.0, 0.0],
];

/// Amplitude of the height variation in the default Bézier surface grid.
///
/// The preset grid places control point `(i, j)` at
/// `(i - 1.5, SURFACE_WAVE_AMPLITUDE * sin(i * j), j - 1.5)`.
pub const SURFACE_WAVE_AMPLITUDE: f64 = 0.5;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
