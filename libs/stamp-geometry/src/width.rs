//! # Minimum-Width Enforcer
//!
//! Turns open strokes into filled bands and re-validates the scaled regions.
//!
//! ## Algorithm Overview
//!
//! Strokes are buffered the way a polygon offset works, one piece per
//! feature, then unioned:
//! 1. For each segment, a rectangle `amount` either side of it (butt caps)
//! 2. For each corner, the outer offset points of both adjacent segments
//! 3. Miter or chamfer join between them on the outer side
//!
//! A corner whose miter tip would lie further than `miter_limit * amount`
//! from the vertex is chamfered instead.

use config::constants::{
    DEFAULT_MIN_LINE_MM, EPSILON, LARGE_HALF_WIDTH, MIN_HALF_WIDTH_FLOOR, MITER_LIMIT,
};
use geo::{BooleanOps, MultiPolygon, Polygon};
use glam::DVec2;
use stamp_svg::RawPrimitive;
use tracing::{debug, warn};

use crate::error::GeometryError;
use crate::normalize::{normalize, repair_polygon, NormalizeOutcome};
use crate::region::{ring_to_geo, RegionSet};

/// Half of the band width used for strokes.
///
/// # Example
///
/// ```rust
/// use stamp_geometry::half_width;
///
/// assert_eq!(half_width(1.4), 0.7);
/// assert_eq!(half_width(0.0), 0.01);
/// ```
pub fn half_width(min_line: f64) -> f64 {
    (min_line / 2.0).max(MIN_HALF_WIDTH_FLOOR)
}

/// Parameters for buffering an open stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferParams {
    /// Distance from the centerline to either band edge
    pub amount: f64,
    /// Longest miter allowed, in multiples of `amount`
    pub miter_limit: f64,
}

impl Default for BufferParams {
    fn default() -> Self {
        Self {
            amount: half_width(DEFAULT_MIN_LINE_MM),
            miter_limit: MITER_LIMIT,
        }
    }
}

impl BufferParams {
    /// Buffer by `amount` with the default miter limit.
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }
}

fn polygon(points: &[DVec2]) -> Polygon<f64> {
    Polygon::new(ring_to_geo(points), Vec::new())
}

fn perp(d: DVec2) -> DVec2 {
    DVec2::new(-d.y, d.x)
}

fn orient(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    robust::orient2d(
        robust::Coord { x: a.x, y: a.y },
        robust::Coord { x: b.x, y: b.y },
        robust::Coord { x: c.x, y: c.y },
    )
}

/// Buffers an open polyline into a band.
///
/// Returns an empty multipolygon when the curve has fewer than two distinct
/// points. A collinear curve still yields a band with positive area.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use geo::Area;
/// use stamp_geometry::width::{buffer_open_curve, BufferParams};
///
/// let band = buffer_open_curve(&[DVec2::ZERO, DVec2::new(4.0, 0.0)], &BufferParams::new(0.5));
/// assert!((band.unsigned_area() - 4.0).abs() < 1e-9);
/// ```
pub fn buffer_open_curve(points: &[DVec2], params: &BufferParams) -> MultiPolygon<f64> {
    let amount = params.amount;
    let mut pts = points.to_vec();
    pts.dedup_by(|b, a| a.distance(*b) <= EPSILON);
    if pts.len() < 2 || amount <= 0.0 {
        return MultiPolygon::new(Vec::new());
    }

    let mut pieces = Vec::with_capacity(pts.len() * 2);

    for seg in pts.windows(2) {
        let (a, b) = (seg[0], seg[1]);
        let normal = perp((b - a).normalize()) * amount;
        pieces.push(polygon(&[a - normal, b - normal, b + normal, a + normal]));
    }

    for w in pts.windows(3) {
        let (prev, curr, next) = (w[0], w[1], w[2]);
        let turn = orient(prev, curr, next);
        if turn == 0.0 {
            // Straight or fully reversed: the rectangles already cover the joint.
            continue;
        }

        let edge1 = curr - prev;
        let edge2 = next - curr;

        // Outer side is right of a left turn and left of a right turn.
        let side = if turn > 0.0 { -1.0 } else { 1.0 };
        let normal1 = perp(edge1.normalize()) * side;
        let normal2 = perp(edge2.normalize()) * side;
        let offset1 = curr + normal1 * amount;
        let offset2 = curr + normal2 * amount;

        let avg_normal = normal1 + normal2;
        let avg_len = avg_normal.length();
        let dot = normal1.dot(normal2);

        // Tip distance is amount / cos(half the turn).
        let scale = if 1.0 + dot > EPSILON {
            (2.0 / (1.0 + dot)).sqrt()
        } else {
            f64::INFINITY
        };

        if avg_len < EPSILON || scale > params.miter_limit {
            pieces.push(polygon(&[curr, offset1, offset2]));
        } else {
            let tip = curr + avg_normal / avg_len * amount * scale;
            pieces.push(polygon(&[curr, offset1, tip, offset2]));
        }
    }

    pieces
        .iter()
        .fold(MultiPolygon::new(Vec::new()), |acc, piece| acc.union(piece))
}

/// Converts extracted primitives into kernel polygons.
///
/// Closed regions are taken as-is; open curves are buffered by `half`.
pub fn primitives_to_polygons(primitives: &[RawPrimitive], half: f64) -> Vec<Polygon<f64>> {
    let mut polygons = Vec::with_capacity(primitives.len());
    for primitive in primitives {
        match primitive {
            RawPrimitive::ClosedRegion(points) => polygons.push(polygon(points)),
            RawPrimitive::OpenCurve(points) => {
                polygons.extend(buffer_open_curve(points, &BufferParams::new(half)));
            }
        }
    }
    debug!(primitives = primitives.len(), polygons = polygons.len(), half, "primitives to polygons");
    polygons
}

/// Re-validates scaled regions and re-runs normalization.
///
/// ## Errors
///
/// Returns `EmptyGeometry` when repair leaves nothing, or when the second
/// normalization pass does.
pub fn enforce_min_width(
    regions: &RegionSet,
    min_line: f64,
) -> Result<NormalizeOutcome, GeometryError> {
    let half = half_width(min_line);
    let repaired: Vec<Polygon<f64>> = regions
        .iter()
        .flat_map(|region| repair_polygon(&region.to_geo()))
        .collect();
    if repaired.is_empty() {
        return Err(GeometryError::empty(
            "After processing, geometry became empty. Try increasing minimum line thickness.",
        ));
    }

    let mut warnings = Vec::new();
    if half > LARGE_HALF_WIDTH {
        let message = "Minimum line thickness is large; small details may be merged.";
        warn!(half, "{message}");
        warnings.push(message.to_string());
    }

    let mut outcome = normalize(repaired)?;
    warnings.append(&mut outcome.warnings);
    outcome.warnings = warnings;
    Ok(outcome)
}
