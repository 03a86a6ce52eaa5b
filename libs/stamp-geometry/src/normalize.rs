//! # Geometry Normalizer
//!
//! Turns an arbitrary pile of polygons into disjoint, valid regions.
//!
//! ## Steps
//!
//! 1. Repair each polygon: drop repeated vertices and zero-area rings, then
//!    self-union so bow-ties and self-overlaps split into valid pieces.
//! 2. Union everything into one arrangement.
//! 3. Drop zero-area pieces and fill holes smaller than [`MIN_HOLE_AREA`].
//!
//! Running the normalizer on its own output changes nothing.

use config::constants::{EPSILON, MIN_HOLE_AREA, MIN_RING_AREA};
use geo::orient::Direction;
use geo::{Area, BooleanOps, LineString, MultiPolygon, Orient, Polygon};
use tracing::{debug, warn};

use crate::error::GeometryError;
use crate::region::{ring_from_geo, ring_to_geo, signed_area, PlanarRegion, RegionSet};

/// Result of a normalization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOutcome {
    pub regions: RegionSet,
    /// Holes filled because they were below the printable threshold
    pub removed_holes: usize,
    /// User-facing warnings, in order
    pub warnings: Vec<String>,
}

/// Repairs one polygon into a valid multipolygon.
///
/// Self-intersecting rings are resolved with the even-odd rule.
///
/// # Example
///
/// ```rust
/// use geo::{polygon, Area};
/// use stamp_geometry::normalize::repair_polygon;
///
/// // Bow-tie: two triangles meeting at (1, 1).
/// let bowtie = polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 2.0), (x: 2.0, y: 0.0), (x: 0.0, y: 2.0)];
/// let repaired = repair_polygon(&bowtie);
/// assert_eq!(repaired.0.len(), 2);
/// assert!((repaired.unsigned_area() - 2.0).abs() < 1e-6);
/// ```
pub fn repair_polygon(polygon: &Polygon<f64>) -> MultiPolygon<f64> {
    let Some(exterior) = clean_ring(polygon.exterior()) else {
        return MultiPolygon::new(Vec::new());
    };
    let interiors = polygon.interiors().iter().filter_map(clean_ring).collect();
    Polygon::new(exterior, interiors).union(&MultiPolygon::new(Vec::new()))
}

/// Removes consecutive duplicates; `None` when the ring has no area left.
fn clean_ring(line: &LineString<f64>) -> Option<LineString<f64>> {
    let mut ring = ring_from_geo(line);
    ring.dedup_by(|b, a| a.distance(*b) <= EPSILON);
    while ring.len() > 1 && ring[0].distance(ring[ring.len() - 1]) <= EPSILON {
        ring.pop();
    }
    (signed_area(&ring).abs() > MIN_RING_AREA).then(|| ring_to_geo(&ring))
}

/// Normalizes a list of polygons.
///
/// ## Errors
///
/// Returns `EmptyGeometry` when nothing with positive area remains.
pub fn normalize<I>(polygons: I) -> Result<NormalizeOutcome, GeometryError>
where
    I: IntoIterator<Item = Polygon<f64>>,
{
    let mut merged = MultiPolygon::<f64>::new(Vec::new());
    let mut inputs = 0usize;
    for polygon in polygons {
        inputs += 1;
        let repaired = repair_polygon(&polygon);
        if !repaired.0.is_empty() {
            merged = merged.union(&repaired);
        }
    }
    debug!(inputs, pieces = merged.0.len(), "union complete");

    let mut regions = Vec::new();
    let mut removed_holes = 0;
    let mut warnings = Vec::new();

    for polygon in merged.orient(Direction::Default) {
        if polygon.unsigned_area() <= MIN_RING_AREA {
            continue;
        }
        let (exterior, interiors) = polygon.into_inner();
        let (kept, dropped): (Vec<_>, Vec<_>) = interiors
            .iter()
            .map(ring_from_geo)
            .partition(|hole| signed_area(hole).abs() >= MIN_HOLE_AREA);

        if !dropped.is_empty() {
            let message = format!(
                "Removed {} small hole(s) to improve printability.",
                dropped.len()
            );
            warn!("{message}");
            warnings.push(message);
            removed_holes += dropped.len();
        }

        if let Some(region) = PlanarRegion::new(ring_from_geo(&exterior), kept) {
            regions.push(region);
        }
    }

    if regions.is_empty() {
        return Err(GeometryError::empty(
            "Geometry is empty after union/cleanup. Ensure your SVG has closed shapes.",
        ));
    }

    debug!(regions = regions.len(), removed_holes, "normalized");
    Ok(NormalizeOutcome {
        regions: RegionSet::new(regions),
        removed_holes,
        warnings,
    })
}

/// Normalizes an existing region set.
pub fn normalize_regions(regions: &RegionSet) -> Result<NormalizeOutcome, GeometryError> {
    normalize(regions.to_multi_polygon())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::{polygon, Rect};

    fn square(min: f64, max: f64) -> Polygon<f64> {
        Rect::new((min, min), (max, max)).to_polygon()
    }

    fn with_hole(side: f64) -> Polygon<f64> {
        let outer = square(0.0, 10.0);
        let hole = square(5.0, 5.0 + side);
        Polygon::new(outer.exterior().clone(), vec![hole.exterior().clone()])
    }

    #[test]
    fn test_overlapping_squares_merge() {
        let outcome = normalize(vec![square(0.0, 2.0), square(1.0, 3.0)]).unwrap();
        assert_eq!(outcome.regions.len(), 1);
        assert_relative_eq!(outcome.regions.total_area(), 7.0, epsilon = 1e-6);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_disjoint_squares_stay_separate() {
        let outcome = normalize(vec![square(0.0, 1.0), square(5.0, 6.0)]).unwrap();
        assert_eq!(outcome.regions.len(), 2);
    }

    #[test]
    fn test_small_hole_removed_with_warning() {
        let outcome = normalize(vec![with_hole(0.3)]).unwrap();
        assert_eq!(outcome.regions.hole_count(), 0);
        assert_eq!(outcome.removed_holes, 1);
        assert_eq!(
            outcome.warnings,
            vec!["Removed 1 small hole(s) to improve printability.".to_string()]
        );
        assert_relative_eq!(outcome.regions.total_area(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hole_at_threshold_kept() {
        let outcome = normalize(vec![with_hole(0.36)]).unwrap();
        assert_eq!(outcome.regions.hole_count(), 1);
        assert_eq!(outcome.removed_holes, 0);
        for hole in outcome.regions.regions()[0].holes() {
            assert!(signed_area(hole).abs() >= MIN_HOLE_AREA);
        }
    }

    #[test]
    fn test_bowtie_repaired() {
        let bowtie = polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 2.0), (x: 2.0, y: 0.0), (x: 0.0, y: 2.0)];
        let outcome = normalize(vec![bowtie]).unwrap();
        assert_relative_eq!(outcome.regions.total_area(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_area_only_is_empty() {
        let sliver = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 2.0, y: 0.0)];
        let err = normalize(vec![sliver]).unwrap_err();
        assert!(matches!(err, GeometryError::EmptyGeometry { .. }));
        assert!(normalize(Vec::new()).is_err());
    }

    #[test]
    fn test_idempotent() {
        let first = normalize(vec![square(0.0, 2.0), square(1.0, 3.0), with_hole(1.0)]).unwrap();
        let second = normalize_regions(&first.regions).unwrap();
        assert_eq!(second.regions.len(), first.regions.len());
        assert_eq!(second.regions.hole_count(), first.regions.hole_count());
        assert_relative_eq!(
            second.regions.total_area(),
            first.regions.total_area(),
            epsilon = 1e-6
        );
        assert!(second.warnings.is_empty());
    }

    #[test]
    fn test_output_orientation() {
        let outcome = normalize(vec![with_hole(2.0)]).unwrap();
        let region = &outcome.regions.regions()[0];
        assert!(signed_area(region.exterior()) > 0.0);
        assert!(signed_area(&region.holes()[0]) < 0.0);
    }
}
