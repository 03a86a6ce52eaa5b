//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry operations using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Union: A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine; result.invert()
//!
//! Output polygons are fan-triangulated with unshared vertices; run
//! [`cleanup`](crate::repair::cleanup) afterwards to weld them.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use stamp_mesh::ops::boolean::union;
//! use stamp_mesh::primitives::create_slab;
//!
//! let a = create_slab(2.0, 1.0);
//! let b = create_slab(2.0, 1.0).translated(DVec3::new(1.0, 0.0, 0.0));
//! let merged = union(&a, &b).unwrap();
//! assert!((merged.signed_volume() - 6.0).abs() < 1e-6);
//! ```

mod bsp;
mod plane;
mod polygon;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::error::MeshError;
use crate::Mesh;
use bsp::BspNode;
use polygon::Polygon;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compute union of two closed meshes.
///
/// ## Errors
///
/// `InvalidTopology` when an input references missing vertices;
/// `BooleanFailed` when two non-empty inputs produce nothing.
pub fn union(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    let polys_a = mesh_to_polygons(a)?;
    let polys_b = mesh_to_polygons(b)?;

    if polys_a.is_empty() {
        return Ok(b.clone());
    }
    if polys_b.is_empty() {
        return Ok(a.clone());
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.build(bsp_b.all_polygons());

    let result = polygons_to_mesh(&bsp_a.all_polygons());
    debug!(triangles = result.triangle_count(), "union");
    if result.is_empty() {
        return Err(MeshError::boolean_failed("union produced no faces"));
    }
    Ok(result)
}

/// Compute difference of two closed meshes (A - B).
///
/// An empty result is valid: `b` may swallow `a` entirely.
///
/// ## Errors
///
/// `InvalidTopology` when an input references missing vertices.
pub fn difference(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    let polys_a = mesh_to_polygons(a)?;
    let polys_b = mesh_to_polygons(b)?;

    if polys_a.is_empty() {
        return Ok(Mesh::new());
    }
    if polys_b.is_empty() {
        return Ok(a.clone());
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    // A - B = ~(~A | B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.build(bsp_b.all_polygons());
    bsp_a.invert();

    let result = polygons_to_mesh(&bsp_a.all_polygons());
    debug!(triangles = result.triangle_count(), "difference");
    Ok(result)
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

/// Convert mesh to list of polygons, skipping zero-area triangles.
fn mesh_to_polygons(mesh: &Mesh) -> Result<Vec<Polygon>, MeshError> {
    let vertex_count = mesh.vertex_count() as u32;
    mesh.triangles()
        .iter()
        .filter_map(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return Some(Err(MeshError::invalid_topology(format!(
                    "triangle {tri:?} references a vertex beyond {vertex_count}"
                ))));
            }
            Polygon::from_vertices(mesh.triangle_positions(*tri).to_vec()).map(Ok)
        })
        .collect()
}

/// Convert list of polygons back to mesh.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::new();

    for poly in polygons {
        let vertices = poly.vertices();
        if vertices.len() < 3 {
            continue;
        }

        let base = mesh.vertex_count() as u32;
        for v in vertices {
            mesh.add_vertex(*v);
        }

        // Fan triangulation
        for i in 1..(vertices.len() as u32 - 1) {
            mesh.add_triangle(base, base + i, base + i + 1);
        }
    }

    mesh
}
