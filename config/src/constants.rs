//! # Configuration Constants
//!
//! Centralized constants for the stamp pipeline. Tessellation parameters,
//! printability heuristics, parameter bounds and precision values are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Tessellation of curved outlines
//! - **Printability**: Hole, width and scaling heuristics
//! - **Parameters**: Accepted ranges and defaults for stamp parameters
//! - **Limits**: Safety bounds

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
/// Slightly larger tolerance used when merging nearly-identical vertices
/// during mesh cleanup. Absorbs numerical noise from boolean operations
/// and translations.
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
pub const VERTEX_MERGE_EPSILON: f64 = 1e-6;

/// Plane thickness used by the BSP boolean engine when classifying points.
///
/// Points closer than this to a splitting plane are treated as coplanar.
pub const BSP_EPSILON: f64 = 1e-5;

/// Smallest area (mm²) a ring may have before it is treated as degenerate.
pub const MIN_RING_AREA: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Number of vertices used to approximate circles and ellipses.
///
/// 64 segments per quarter turn. Lower values visibly facet the curved
/// edges of a printed stamp, so this must stay at or above 64.
///
/// # Example
///
/// ```rust
/// use config::constants::CIRCLE_SEGMENTS;
///
/// let step = std::f64::consts::TAU / CIRCLE_SEGMENTS as f64;
/// assert!(step < 0.1);
/// ```
pub const CIRCLE_SEGMENTS: usize = 256;

// =============================================================================
// PRINTABILITY CONSTANTS
// =============================================================================

/// Holes smaller than this area (mm²) are filled during normalization.
///
/// Equal to a 0.35 mm square. The value is an empirical printability
/// heuristic with no derivation: holes below it close up when molding or
/// printing, so they are dropped and reported as a warning.
pub const MIN_HOLE_AREA: f64 = 0.35 * 0.35;

/// Lower bound on the half-width used when buffering open strokes.
pub const MIN_HALF_WIDTH_FLOOR: f64 = 0.01;

/// Half-width (mm) above which fine details are likely to merge.
pub const LARGE_HALF_WIDTH: f64 = 1.0;

/// Scale factors below this value trigger a fine-detail loss warning.
pub const SCALE_WARNING_THRESHOLD: f64 = 0.5;

/// Miter limit for stroke joins, as a multiple of the half-width.
///
/// Joins whose miter tip would extend further are beveled instead.
pub const MITER_LIMIT: f64 = 5.0;

// =============================================================================
// PARAMETER CONSTANTS
// =============================================================================

/// Inclusive range of accepted values for a numeric stamp parameter.
///
/// # Example
///
/// ```rust
/// use config::constants::BASE_RANGE_MM;
///
/// assert!(BASE_RANGE_MM.contains(7.0));
/// assert!(!BASE_RANGE_MM.contains(25.0));
/// assert!(!BASE_RANGE_MM.contains(f64::NAN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
}

impl ParamRange {
    /// Returns true if `value` is finite and within `[min, max]`.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// Footprint sizes (mm) a stamp can be produced at.
pub const ALLOWED_SIZES_MM: [f64; 3] = [25.0, 30.0, 40.0];

/// Accepted base slab heights (mm).
pub const BASE_RANGE_MM: ParamRange = ParamRange { min: 2.0, max: 20.0 };

/// Accepted relief heights (mm).
pub const RELIEF_RANGE_MM: ParamRange = ParamRange { min: 0.6, max: 6.0 };

/// Accepted minimum line widths (mm).
pub const MIN_LINE_RANGE_MM: ParamRange = ParamRange { min: 0.4, max: 4.0 };

/// Default footprint size (mm).
pub const DEFAULT_SIZE_MM: f64 = 30.0;

/// Default base slab height (mm).
pub const DEFAULT_BASE_MM: f64 = 7.0;

/// Default relief height (mm).
pub const DEFAULT_RELIEF_MM: f64 = 2.2;

/// Default minimum line width (mm).
pub const DEFAULT_MIN_LINE_MM: f64 = 1.4;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Uploads shorter than this are rejected before parsing.
///
/// No meaningful SVG document fits in fewer bytes.
pub const MIN_UPLOAD_BYTES: usize = 50;

/// Red zone (bytes) checked before recursing into BSP subtrees.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Example
///
/// ```rust
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

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
