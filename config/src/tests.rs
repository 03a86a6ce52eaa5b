//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_MERGE_EPSILON >= EPSILON,
        "VERTEX_MERGE_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_bsp_epsilon_below_print_resolution() {
    // Printers resolve ~0.05 mm; the BSP plane thickness must be far below it.
    assert!(BSP_EPSILON < 1e-3);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_circle_segments_at_least_64() {
    assert!(CIRCLE_SEGMENTS >= 64);
    assert_eq!(CIRCLE_SEGMENTS % 4, 0, "segments should be symmetric per quadrant");
}

// =============================================================================
// PRINTABILITY TESTS
// =============================================================================

#[test]
fn test_min_hole_area_matches_heuristic() {
    assert!((MIN_HOLE_AREA - 0.1225).abs() < 1e-12);
}

#[test]
fn test_half_width_floor_is_small() {
    assert!(MIN_HALF_WIDTH_FLOOR > 0.0);
    assert!(MIN_HALF_WIDTH_FLOOR < MIN_LINE_RANGE_MM.min / 2.0);
}

#[test]
fn test_miter_limit_allows_right_angles() {
    // A 90 degree join needs sqrt(2) times the half-width.
    assert!(MITER_LIMIT > std::f64::consts::SQRT_2);
}

// =============================================================================
// PARAMETER TESTS
// =============================================================================

#[test]
fn test_defaults_within_ranges() {
    assert!(ALLOWED_SIZES_MM.contains(&DEFAULT_SIZE_MM));
    assert!(BASE_RANGE_MM.contains(DEFAULT_BASE_MM));
    assert!(RELIEF_RANGE_MM.contains(DEFAULT_RELIEF_MM));
    assert!(MIN_LINE_RANGE_MM.contains(DEFAULT_MIN_LINE_MM));
}

#[test]
fn test_param_range_bounds_inclusive() {
    assert!(RELIEF_RANGE_MM.contains(0.6));
    assert!(RELIEF_RANGE_MM.contains(6.0));
    assert!(!RELIEF_RANGE_MM.contains(0.59));
    assert!(!RELIEF_RANGE_MM.contains(6.01));
}

#[test]
fn test_param_range_rejects_non_finite() {
    assert!(!BASE_RANGE_MM.contains(f64::INFINITY));
    assert!(!BASE_RANGE_MM.contains(f64::NEG_INFINITY));
    assert!(!BASE_RANGE_MM.contains(f64::NAN));
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(1.0, 1.0 + 1e-11));
    assert!(!approx_equal(1.0, 1.0 + 1e-9));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-1e-11));
    assert!(!approx_zero(1e-9));
}
