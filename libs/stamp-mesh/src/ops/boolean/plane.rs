//! # Plane for BSP Operations
//!
//! Plane representation with point classification.

use config::constants::BSP_EPSILON;
use glam::DVec3;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a point or polygon relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// In front of plane (positive side).
    Front,
    /// Behind plane (negative side).
    Back,
    /// On the plane.
    Coplanar,
    /// Polygon has vertices on both sides.
    Spanning,
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane in 3D space defined by unit normal and distance from origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: DVec3,
    w: f64,
}

impl Plane {
    /// Create plane from normal and distance.
    pub fn new(normal: DVec3, w: f64) -> Self {
        Self { normal, w }
    }

    /// Create plane from three points.
    ///
    /// Points in counter-clockwise order when viewed from front. Returns
    /// `None` for collinear points.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        Some(Self::new(normal, normal.dot(a)))
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Flip the plane (reverse normal).
    pub fn flip(&self) -> Plane {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Classify a point relative to this plane.
    pub fn classify_point(&self, point: DVec3) -> Classification {
        let dist = self.signed_distance(point);
        if dist > BSP_EPSILON {
            Classification::Front
        } else if dist < -BSP_EPSILON {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }

    /// Signed distance from point to plane.
    ///
    /// Positive = front, negative = back, zero = on plane.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Point where segment `a`-`b` crosses the plane.
    pub fn intersect(&self, a: DVec3, b: DVec3) -> DVec3 {
        let t = (self.w - self.normal.dot(a)) / self.normal.dot(b - a);
        a.lerp(b, t)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
        assert_eq!(plane.normal(), DVec3::Z);
        assert_eq!(plane.w, 0.0);
    }

    #[test]
    fn test_plane_from_collinear_points() {
        assert!(Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::X * 2.0).is_none());
    }

    #[test]
    fn test_plane_classify_point() {
        let plane = Plane::new(DVec3::Z, 0.0);
        assert_eq!(plane.classify_point(DVec3::Z), Classification::Front);
        assert_eq!(plane.classify_point(-DVec3::Z), Classification::Back);
        assert_eq!(plane.classify_point(DVec3::new(1.0, 1.0, 1e-7)), Classification::Coplanar);
    }

    #[test]
    fn test_plane_flip() {
        let flipped = Plane::new(DVec3::Z, 5.0).flip();
        assert_eq!(flipped.normal(), -DVec3::Z);
        assert_eq!(flipped.w, -5.0);
    }

    #[test]
    fn test_plane_intersect() {
        let plane = Plane::new(DVec3::Z, 1.0);
        let p = plane.intersect(DVec3::new(2.0, 0.0, 0.0), DVec3::new(2.0, 0.0, 4.0));
        assert_relative_eq!(p.z, 1.0);
        assert_relative_eq!(p.x, 2.0);
    }
}
