//! # Planar Regions
//!
//! Oriented polygons with holes, and ordered sets of them.
//!
//! Rings are stored open (no repeated closing vertex). Exteriors wind
//! counter-clockwise and holes clockwise; constructors enforce this.

use config::constants::MIN_RING_AREA;
use geo::{Area, BoundingRect, Coord, LineString, MultiPolygon, Polygon, Rect};
use glam::DVec2;

// =============================================================================
// RING HELPERS
// =============================================================================

/// Signed area of an open ring (positive when counter-clockwise).
pub fn signed_area(ring: &[DVec2]) -> f64 {
    Polygon::new(ring_to_geo(ring), Vec::new()).signed_area()
}

/// Reads a kernel ring into open form.
pub fn ring_from_geo(line: &LineString<f64>) -> Vec<DVec2> {
    let mut ring: Vec<DVec2> = line.coords().map(|c| DVec2::new(c.x, c.y)).collect();
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// Builds a kernel ring from open form. The kernel closes it.
pub fn ring_to_geo(ring: &[DVec2]) -> LineString<f64> {
    LineString::new(ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect())
}

fn oriented(mut ring: Vec<DVec2>, ccw: bool) -> Option<Vec<DVec2>> {
    let area = signed_area(&ring);
    if area.abs() <= MIN_RING_AREA {
        return None;
    }
    if (area > 0.0) != ccw {
        ring.reverse();
    }
    Some(ring)
}

// =============================================================================
// BOUNDS
// =============================================================================

/// Axis-aligned 2D bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    pub min: DVec2,
    pub max: DVec2,
}

impl From<Rect<f64>> for Bounds2 {
    fn from(rect: Rect<f64>) -> Self {
        Self {
            min: DVec2::new(rect.min().x, rect.min().y),
            max: DVec2::new(rect.max().x, rect.max().y),
        }
    }
}

impl Bounds2 {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// `(min_x, min_y, max_x, max_y)`
    pub fn to_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min.x, self.min.y, self.max.x, self.max.y)
    }
}

// =============================================================================
// PLANAR REGION
// =============================================================================

/// One simple polygon with zero or more holes.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarRegion {
    exterior: Vec<DVec2>,
    holes: Vec<Vec<DVec2>>,
}

impl PlanarRegion {
    /// Creates a region, orienting the exterior counter-clockwise and every
    /// hole clockwise.
    ///
    /// Returns `None` when the exterior has no area. Degenerate holes are
    /// dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use stamp_geometry::PlanarRegion;
    ///
    /// // Clockwise input is flipped.
    /// let cw = vec![DVec2::ZERO, DVec2::Y, DVec2::ONE, DVec2::X];
    /// let region = PlanarRegion::new(cw, vec![]).unwrap();
    /// assert!(region.area() > 0.0);
    /// ```
    pub fn new(exterior: Vec<DVec2>, holes: Vec<Vec<DVec2>>) -> Option<Self> {
        let exterior = oriented(exterior, true)?;
        let holes = holes
            .into_iter()
            .filter_map(|hole| oriented(hole, false))
            .collect();
        Some(Self { exterior, holes })
    }

    /// Reads a kernel polygon.
    pub fn from_geo(polygon: &Polygon<f64>) -> Option<Self> {
        Self::new(
            ring_from_geo(polygon.exterior()),
            polygon.interiors().iter().map(ring_from_geo).collect(),
        )
    }

    /// Converts into a kernel polygon.
    pub fn to_geo(&self) -> Polygon<f64> {
        Polygon::new(
            ring_to_geo(&self.exterior),
            self.holes.iter().map(|h| ring_to_geo(h)).collect(),
        )
    }

    pub fn exterior(&self) -> &[DVec2] {
        &self.exterior
    }

    pub fn holes(&self) -> &[Vec<DVec2>] {
        &self.holes
    }

    /// Filled area: exterior minus holes.
    pub fn area(&self) -> f64 {
        signed_area(&self.exterior) + self.holes.iter().map(|h| signed_area(h)).sum::<f64>()
    }

    /// Applies `f` to every vertex.
    ///
    /// `f` must preserve orientation (no mirroring).
    pub fn map_points(&self, f: impl Fn(DVec2) -> DVec2) -> Self {
        Self {
            exterior: self.exterior.iter().map(|&p| f(p)).collect(),
            holes: self
                .holes
                .iter()
                .map(|h| h.iter().map(|&p| f(p)).collect())
                .collect(),
        }
    }
}

// =============================================================================
// REGION SET
// =============================================================================

/// Ordered collection of disjoint regions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionSet {
    regions: Vec<PlanarRegion>,
}

impl RegionSet {
    pub fn new(regions: Vec<PlanarRegion>) -> Self {
        Self { regions }
    }

    /// Reads a kernel multipolygon, skipping zero-area members.
    pub fn from_multi_polygon(multi: &MultiPolygon<f64>) -> Self {
        Self::new(multi.iter().filter_map(PlanarRegion::from_geo).collect())
    }

    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        MultiPolygon::new(self.regions.iter().map(PlanarRegion::to_geo).collect())
    }

    pub fn regions(&self) -> &[PlanarRegion] {
        &self.regions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanarRegion> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Sum of region areas.
    pub fn total_area(&self) -> f64 {
        self.regions.iter().map(PlanarRegion::area).sum()
    }

    /// Bounding box of all exteriors.
    pub fn bounds(&self) -> Option<Bounds2> {
        self.to_multi_polygon().bounding_rect().map(Bounds2::from)
    }

    pub fn hole_count(&self) -> usize {
        self.regions.iter().map(|r| r.holes.len()).sum()
    }

    /// Applies an orientation-preserving map to every vertex.
    pub fn map_points(&self, f: impl Fn(DVec2) -> DVec2) -> Self {
        Self::new(self.regions.iter().map(|r| r.map_points(&f)).collect())
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a PlanarRegion;
    type IntoIter = std::slice::Iter<'a, PlanarRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
