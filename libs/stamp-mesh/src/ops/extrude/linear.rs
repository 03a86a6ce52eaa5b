//! # Linear Extrusion
//!
//! Extrudes a 2D polygon with holes straight up the Z axis, from `z = 0` to
//! `z = height`, into a closed prism.
//!
//! Caps are ear-cut (holes included) and side walls are one quad per ring
//! edge. All faces wind outward.

use earcutr::earcut;
use glam::{DVec2, DVec3};

use super::Polygon2D;
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Extrudes a 2D polygon along the Z axis.
///
/// Ring winding of the input does not matter; it is normalized first.
///
/// ## Errors
///
/// - `DegenerateGeometry` for a non-positive height or an outer ring with
///   fewer than three vertices
/// - `TriangulationFailed` when the caps cannot be ear-cut
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use stamp_mesh::ops::extrude::linear_extrude;
/// use stamp_mesh::Polygon2D;
///
/// let square = Polygon2D::new(vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(10.0, 0.0),
///     DVec2::new(10.0, 10.0),
///     DVec2::new(0.0, 10.0),
/// ]);
/// let mesh = linear_extrude(&square, 2.0).unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// assert!((mesh.signed_volume() - 200.0).abs() < 1e-9);
/// ```
pub fn linear_extrude(polygon: &Polygon2D, height: f64) -> Result<Mesh, MeshError> {
    if !(height > 0.0 && height.is_finite()) {
        return Err(MeshError::degenerate(format!(
            "extrusion height must be positive, got {height}"
        )));
    }
    if polygon.vertex_count() < 3 {
        return Err(MeshError::degenerate(
            "Polygon must have at least 3 vertices",
        ));
    }

    let polygon = polygon.oriented();
    let rings: Vec<&[DVec2]> = std::iter::once(polygon.outer.as_slice())
        .chain(polygon.holes.iter().map(Vec::as_slice))
        .collect();
    let n: usize = rings.iter().map(|r| r.len()).sum();
    let cap = triangulate(&rings)?;

    let mut mesh = Mesh::with_capacity(n * 2, cap.len() * 2 + n * 2);

    // Bottom ring vertices [0, n), top ring vertices [n, 2n)
    for z in [0.0, height] {
        for p in rings.iter().flat_map(|r| r.iter()) {
            mesh.add_vertex(DVec3::new(p.x, p.y, z));
        }
    }
    let top = n as u32;

    for [a, b, c] in &cap {
        // Top faces up, bottom faces down.
        mesh.add_triangle(top + a, top + b, top + c);
        mesh.add_triangle(*a, *c, *b);
    }

    // Exterior is counter-clockwise and holes clockwise, so for every edge
    // a -> b the solid lies on its left.
    let mut start = 0u32;
    for ring in &rings {
        let len = ring.len() as u32;
        for i in 0..len {
            let a = start + i;
            let b = start + (i + 1) % len;
            mesh.add_triangle(a, b, top + b);
            mesh.add_triangle(a, top + b, top + a);
        }
        start += len;
    }

    Ok(mesh)
}

/// Ear-cuts the rings, returning counter-clockwise triangles indexing the
/// concatenated ring vertices.
fn triangulate(rings: &[&[DVec2]]) -> Result<Vec<[u32; 3]>, MeshError> {
    let mut coords = Vec::new();
    let mut hole_starts = Vec::with_capacity(rings.len().saturating_sub(1));
    let mut points = Vec::new();
    for (i, ring) in rings.iter().enumerate() {
        if i > 0 {
            hole_starts.push(points.len());
        }
        for p in ring.iter() {
            coords.extend([p.x, p.y]);
            points.push(*p);
        }
    }

    let indices = earcut(&coords, &hole_starts, 2)
        .map_err(|e| MeshError::triangulation_failed(format!("{e:?}")))?;
    if indices.is_empty() {
        return Err(MeshError::triangulation_failed("ear-cutting produced no triangles"));
    }

    Ok(indices
        .chunks_exact(3)
        .map(|t| {
            let tri = [t[0] as u32, t[1] as u32, t[2] as u32];
            let (a, b, c) = (points[t[0]], points[t[1]], points[t[2]]);
            if (b - a).perp_dot(c - a) < 0.0 {
                [tri[0], tri[2], tri[1]]
            } else {
                tri
            }
        })
        .collect())
}
