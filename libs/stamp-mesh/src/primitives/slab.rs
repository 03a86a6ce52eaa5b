//! # Slab Primitive
//!
//! Generates the rectangular base block of a stamp.

use glam::DVec3;

use crate::mesh::Mesh;

/// Creates the base slab: a `size` x `size` square centered on the origin
/// in XY, spanning `z` from 0 to `height`.
///
/// Callers pass positive dimensions.
///
/// # Returns
///
/// A mesh with 8 vertices and 12 outward-facing triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use stamp_mesh::primitives::create_slab;
///
/// let mesh = create_slab(30.0, 7.0);
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_slab(size: f64, height: f64) -> Mesh {
    let half = size / 2.0;
    let min = DVec3::new(-half, -half, 0.0);
    let max = DVec3::new(half, half, height);

    let mut mesh = Mesh::with_capacity(8, 12);

    // Bottom face (z = 0)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));

    // Top face (z = height)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // Bottom, seen from below
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);

    // Top, seen from above
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);

    // y = min
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);

    // y = max
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);

    // x = min
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);

    // x = max
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_slab_bounds() {
        let mesh = create_slab(30.0, 7.0);
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, DVec3::new(-15.0, -15.0, 0.0));
        assert_eq!(max, DVec3::new(15.0, 15.0, 7.0));
    }

    #[test]
    fn test_slab_is_outward() {
        let mesh = create_slab(2.0, 3.0);
        assert!(mesh.validate());
        assert_relative_eq!(mesh.signed_volume(), 12.0, epsilon = 1e-12);
        for &tri in mesh.triangles() {
            let centroid = mesh.triangle_positions(tri).iter().sum::<DVec3>() / 3.0;
            let center = DVec3::new(0.0, 0.0, 1.5);
            assert!(mesh.triangle_normal(tri).dot(centroid - center) > 0.0);
        }
    }
}
