//! # Raw Primitives
//!
//! Untyped 2D shapes produced by the extractor.

use glam::DVec2;

/// A 2D shape as found in the drawing, before any cleanup.
///
/// Both variants hold at least three points. An open curve is a stroke and
/// gets buffered into a band downstream; a closed region is implicitly
/// closed and filled.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPrimitive {
    /// Polyline that is not implicitly closed
    OpenCurve(Vec<DVec2>),
    /// Ring that is implicitly closed
    ClosedRegion(Vec<DVec2>),
}

impl RawPrimitive {
    /// Creates an open curve, or `None` with fewer than three points.
    pub fn open(points: Vec<DVec2>) -> Option<Self> {
        (points.len() >= 3).then_some(Self::OpenCurve(points))
    }

    /// Creates a closed region, or `None` with fewer than three points.
    ///
    /// A trailing point equal to the first is dropped; the ring is implicit.
    pub fn closed(mut points: Vec<DVec2>) -> Option<Self> {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        (points.len() >= 3).then_some(Self::ClosedRegion(points))
    }

    /// Returns the points of the primitive.
    pub fn points(&self) -> &[DVec2] {
        match self {
            Self::OpenCurve(points) | Self::ClosedRegion(points) => points,
        }
    }

    /// Returns true for closed regions.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::ClosedRegion(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<DVec2> {
        vec![DVec2::ZERO, DVec2::X, DVec2::Y]
    }

    #[test]
    fn test_open_requires_three_points() {
        assert!(RawPrimitive::open(vec![DVec2::ZERO, DVec2::X]).is_none());
        assert!(RawPrimitive::open(triangle()).is_some());
    }

    #[test]
    fn test_closed_drops_repeated_start() {
        let ring = vec![DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::ZERO];
        let prim = RawPrimitive::closed(ring).unwrap();
        assert_eq!(prim.points().len(), 3);
        assert!(RawPrimitive::closed(vec![DVec2::ZERO, DVec2::X, DVec2::ZERO]).is_none());
    }

    #[test]
    fn test_closed_flag() {
        let closed = RawPrimitive::closed(triangle()).unwrap();
        let open = RawPrimitive::open(triangle()).unwrap();
        assert!(closed.is_closed());
        assert!(!open.is_closed());
        assert_eq!(closed.points(), open.points());
    }
}
