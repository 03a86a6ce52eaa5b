//! # Boolean Operation Tests

use super::*;
use crate::primitives::create_slab;
use crate::repair::cleanup;
use approx::assert_relative_eq;
use glam::DVec3;

/// Box of `size` x `size` x `height`, centered in XY, bottom at `z`.
fn block(size: f64, height: f64, offset: DVec3) -> Mesh {
    create_slab(size, height).translated(offset)
}

/// Asserts that the cleaned result is a closed, consistently wound solid.
fn assert_watertight(mesh: &Mesh) {
    let (clean, _) = cleanup(mesh);
    assert!(clean.validate(), "{} open edges", clean.open_edge_count());
    assert_relative_eq!(clean.signed_volume(), mesh.signed_volume(), epsilon = 1e-6);
}

fn z_extent(mesh: &Mesh) -> (f64, f64) {
    let (min, max) = mesh.bounding_box().unwrap();
    (min.z, max.z)
}

// =============================================================================
// UNION TESTS
// =============================================================================

#[test]
fn test_union_empty_operands() {
    let a = block(1.0, 1.0, DVec3::ZERO);
    assert_eq!(union(&Mesh::new(), &a).unwrap(), a);
    assert_eq!(union(&a, &Mesh::new()).unwrap(), a);
}

#[test]
fn test_union_disjoint_keeps_both() {
    let a = block(1.0, 1.0, DVec3::new(-5.0, 0.0, 0.0));
    let b = block(1.0, 1.0, DVec3::new(5.0, 0.0, 0.0));
    let result = union(&a, &b).unwrap();
    assert!(result.triangle_count() >= 24);
    assert_relative_eq!(result.signed_volume(), 2.0, epsilon = 1e-6);
    assert_watertight(&result);
}

#[test]
fn test_union_overlapping_volume() {
    let a = block(2.0, 2.0, DVec3::ZERO);
    let b = block(2.0, 2.0, DVec3::new(1.0, 0.0, 0.0));
    let result = union(&a, &b).unwrap();
    // 8 + 8 - 4 shared
    assert_relative_eq!(result.signed_volume(), 12.0, epsilon = 1e-6);
    assert_watertight(&result);
}

#[test]
fn test_union_relief_on_slab() {
    let slab = block(30.0, 7.0, DVec3::ZERO);
    let relief = block(10.0, 2.2, DVec3::new(0.0, 0.0, 7.0));
    let result = union(&slab, &relief).unwrap();

    let (zmin, zmax) = z_extent(&result);
    assert_relative_eq!(zmin, 0.0, epsilon = 1e-9);
    assert_relative_eq!(zmax, 9.2, epsilon = 1e-9);
    assert_relative_eq!(result.signed_volume(), 6300.0 + 220.0, epsilon = 1e-6);
    assert_watertight(&result);
}

#[test]
fn test_union_identical() {
    let a = block(2.0, 1.0, DVec3::ZERO);
    let result = union(&a, &a.clone()).unwrap();
    assert_relative_eq!(result.signed_volume(), 4.0, epsilon = 1e-6);
    assert_watertight(&result);
}

// =============================================================================
// DIFFERENCE TESTS
// =============================================================================

#[test]
fn test_difference_empty_operands() {
    let a = block(1.0, 1.0, DVec3::ZERO);
    assert!(difference(&Mesh::new(), &a).unwrap().is_empty());
    assert_eq!(difference(&a, &Mesh::new()).unwrap(), a);
}

#[test]
fn test_difference_disjoint_keeps_base() {
    let a = block(1.0, 1.0, DVec3::ZERO);
    let b = block(1.0, 1.0, DVec3::new(10.0, 0.0, 0.0));
    let result = difference(&a, &b).unwrap();
    assert_relative_eq!(result.signed_volume(), 1.0, epsilon = 1e-6);
    assert_watertight(&result);
}

#[test]
fn test_difference_engraves_pocket() {
    let slab = block(30.0, 7.0, DVec3::ZERO);
    let cutter = block(10.0, 2.2, DVec3::new(0.0, 0.0, 4.8));
    let result = difference(&slab, &cutter).unwrap();

    let (zmin, zmax) = z_extent(&result);
    assert_relative_eq!(zmin, 0.0, epsilon = 1e-9);
    assert_relative_eq!(zmax, 7.0, epsilon = 1e-9);
    assert_relative_eq!(result.signed_volume(), 6300.0 - 220.0, epsilon = 1e-6);
    assert_watertight(&result);
}

#[test]
fn test_difference_full_cover_lowers_top() {
    let slab = block(30.0, 7.0, DVec3::ZERO);
    let cutter = block(30.0, 2.2, DVec3::new(0.0, 0.0, 4.8));
    let result = difference(&slab, &cutter).unwrap();
    assert_relative_eq!(result.signed_volume(), 900.0 * 4.8, epsilon = 1e-6);
    assert_relative_eq!(z_extent(&result).1, 4.8, epsilon = 1e-9);
    assert_watertight(&result);
}

#[test]
fn test_difference_pocket_through_corner() {
    // Cutter overhangs two sides of the slab.
    let slab = block(30.0, 7.0, DVec3::ZERO);
    let cutter = block(10.0, 2.2, DVec3::new(12.0, 12.0, 4.8));
    let result = difference(&slab, &cutter).unwrap();
    // Overlap is the 8 x 8 corner of the cutter.
    assert_relative_eq!(result.signed_volume(), 6300.0 - 64.0 * 2.2, epsilon = 1e-6);
    assert_watertight(&result);
}

#[test]
fn test_difference_swallowed_is_empty() {
    let a = block(1.0, 1.0, DVec3::ZERO);
    let b = block(4.0, 4.0, DVec3::new(0.0, 0.0, -1.0));
    let result = difference(&a, &b).unwrap();
    assert_relative_eq!(result.signed_volume(), 0.0, epsilon = 1e-9);
}

// =============================================================================
// CONVERSION TESTS
// =============================================================================

#[test]
fn test_bad_index_is_rejected() {
    let bad = Mesh::from_parts(vec![DVec3::ZERO], vec![[0, 1, 2]]);
    let err = union(&bad, &block(1.0, 1.0, DVec3::ZERO)).unwrap_err();
    assert!(matches!(err, MeshError::InvalidTopology { .. }));
}

#[test]
fn test_round_trip_preserves_triangles() {
    let slab = block(2.0, 1.0, DVec3::ZERO);
    let mesh = polygons_to_mesh(&mesh_to_polygons(&slab).unwrap());
    assert_eq!(mesh.triangle_count(), 12);
    assert_relative_eq!(mesh.signed_volume(), slab.signed_volume(), epsilon = 1e-12);
}
