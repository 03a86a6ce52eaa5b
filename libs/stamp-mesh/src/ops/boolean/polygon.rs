//! # Polygon for BSP Operations
//!
//! Convex polygon with plane and splitting support.

use glam::DVec3;

use super::plane::{Classification, Plane};

// =============================================================================
// SPLIT RESULT
// =============================================================================

/// Pieces of polygons sorted against a splitting plane.
#[derive(Debug, Default)]
pub struct Split {
    /// Coplanar, facing the same way as the plane
    pub coplanar_front: Vec<Polygon>,
    /// Coplanar, facing away from the plane
    pub coplanar_back: Vec<Polygon>,
    pub front: Vec<Polygon>,
    pub back: Vec<Polygon>,
}

// =============================================================================
// POLYGON
// =============================================================================

/// A convex polygon with associated plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Vertices in counter-clockwise order.
    vertices: Vec<DVec3>,
    /// Plane containing this polygon.
    plane: Plane,
}

impl Polygon {
    /// Create polygon from vertices.
    ///
    /// Returns `None` if the first three vertices are collinear or there are
    /// fewer than three.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Create a polygon that keeps an already known plane.
    fn with_plane(vertices: Vec<DVec3>, plane: Plane) -> Option<Self> {
        (vertices.len() >= 3).then_some(Self { vertices, plane })
    }

    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Flip the polygon in place (reverse winding order and plane).
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flip();
    }

    /// Classify this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane) -> Classification {
        let (front, back) = self
            .vertices
            .iter()
            .fold((false, false), |(front, back), v| match plane.classify_point(*v) {
                Classification::Front => (true, back),
                Classification::Back => (front, true),
                _ => (front, back),
            });

        match (front, back) {
            (true, true) => Classification::Spanning,
            (true, false) => Classification::Front,
            (false, true) => Classification::Back,
            (false, false) => Classification::Coplanar,
        }
    }

    /// Split polygon by a plane, appending the pieces to `out`.
    ///
    /// Spanning polygons are cut along the plane; both halves keep this
    /// polygon's plane.
    pub fn split_into(self, plane: &Plane, out: &mut Split) {
        match self.classify(plane) {
            Classification::Coplanar => {
                if self.plane.normal().dot(plane.normal()) > 0.0 {
                    out.coplanar_front.push(self);
                } else {
                    out.coplanar_back.push(self);
                }
            }
            Classification::Front => out.front.push(self),
            Classification::Back => out.back.push(self),
            Classification::Spanning => {
                let n = self.vertices.len();
                let mut front_verts = Vec::with_capacity(n + 1);
                let mut back_verts = Vec::with_capacity(n + 1);

                for i in 0..n {
                    let vi = self.vertices[i];
                    let vj = self.vertices[(i + 1) % n];
                    let ti = plane.classify_point(vi);
                    let tj = plane.classify_point(vj);

                    if ti != Classification::Back {
                        front_verts.push(vi);
                    }
                    if ti != Classification::Front {
                        back_verts.push(vi);
                    }

                    let crosses = matches!(
                        (ti, tj),
                        (Classification::Front, Classification::Back)
                            | (Classification::Back, Classification::Front)
                    );
                    if crosses {
                        let cut = plane.intersect(vi, vj);
                        front_verts.push(cut);
                        back_verts.push(cut);
                    }
                }

                out.front.extend(Self::with_plane(front_verts, self.plane));
                out.back.extend(Self::with_plane(back_verts, self.plane));
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
