//! # Extrusion Operations
//!
//! Straight extrusion of planar regions along the Z axis.

mod linear;


pub use linear::linear_extrude;

use geo::{Area, LineString, Polygon};
use glam::DVec2;

/// A 2D polygon for extrusion operations.
///
/// Represents a closed 2D shape with optional holes. Rings are open (the
/// last vertex is not a copy of the first).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    /// Outer boundary vertices, counter-clockwise
    pub outer: Vec<DVec2>,
    /// Holes, each clockwise
    pub holes: Vec<Vec<DVec2>>,
}

/// Signed area of an open ring (positive when counter-clockwise).
pub(crate) fn ring_area(ring: &[DVec2]) -> f64 {
    let line: LineString<f64> = ring.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>().into();
    Polygon::new(line, Vec::new()).signed_area()
}

impl Polygon2D {
    /// Creates a new polygon from outer boundary vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use stamp_mesh::Polygon2D;
    ///
    /// let square = Polygon2D::new(vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(1.0, 0.0),
    ///     DVec2::new(1.0, 1.0),
    ///     DVec2::new(0.0, 1.0),
    /// ]);
    /// assert_eq!(square.area(), 1.0);
    /// ```
    pub fn new(outer: Vec<DVec2>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Creates a polygon with holes.
    pub fn with_holes(outer: Vec<DVec2>, holes: Vec<Vec<DVec2>>) -> Self {
        Self { outer, holes }
    }

    /// Returns the number of vertices in the outer boundary.
    pub fn vertex_count(&self) -> usize {
        self.outer.len()
    }

    /// Filled area (outer minus holes), independent of ring winding.
    pub fn area(&self) -> f64 {
        ring_area(&self.outer).abs() - self.holes.iter().map(|h| ring_area(h).abs()).sum::<f64>()
    }

    /// Returns a copy with the outer ring counter-clockwise and every hole
    /// clockwise.
    pub fn oriented(&self) -> Self {
        let orient = |ring: &Vec<DVec2>, ccw: bool| {
            let mut ring = ring.clone();
            if (ring_area(&ring) > 0.0) != ccw {
                ring.reverse();
            }
            ring
        };
        Self {
            outer: orient(&self.outer, true),
            holes: self.holes.iter().map(|h| orient(h, false)).collect(),
        }
    }

    /// Translates the polygon by the given offset.
    pub fn translate(&mut self, offset: DVec2) {
        for vertex in self.outer.iter_mut().chain(self.holes.iter_mut().flatten()) {
            *vertex += offset;
        }
    }
}
