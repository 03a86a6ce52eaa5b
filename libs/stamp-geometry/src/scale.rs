//! # Scaler/Centerer
//!
//! Fits a region set into the square stamp footprint and centers it on the
//! origin, preserving aspect ratio.

use config::constants::{approx_zero, SCALE_WARNING_THRESHOLD};
use glam::DVec2;
use tracing::{debug, warn};

use crate::error::GeometryError;
use crate::region::RegionSet;

/// Uniform scale about the origin followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform {
    pub factor: f64,
    pub offset: DVec2,
}

impl ScaleTransform {
    pub fn apply(&self, p: DVec2) -> DVec2 {
        p * self.factor + self.offset
    }

    /// Maps a transformed point back to drawing units.
    pub fn invert(&self, p: DVec2) -> DVec2 {
        (p - self.offset) / self.factor
    }

    pub fn inverse(&self) -> Self {
        Self {
            factor: 1.0 / self.factor,
            offset: -self.offset / self.factor,
        }
    }
}

/// Output of [`fit_to_footprint`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledRegions {
    pub regions: RegionSet,
    pub transform: ScaleTransform,
    pub warnings: Vec<String>,
}

/// Scales `regions` so the larger bounding box side equals `target`, then
/// moves the bounding box center to the origin.
///
/// ## Parameters
///
/// - `regions`: normalized regions in drawing units
/// - `target`: footprint side length in millimeters
///
/// ## Errors
///
/// Returns `DegenerateBounds` when the bounding box has zero width or height.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use stamp_geometry::{fit_to_footprint, PlanarRegion, RegionSet};
///
/// let square = vec![DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::splat(10.0), DVec2::new(0.0, 10.0)];
/// let set = RegionSet::new(vec![PlanarRegion::new(square, vec![]).unwrap()]);
/// let scaled = fit_to_footprint(&set, 30.0).unwrap();
/// assert_eq!(scaled.transform.factor, 3.0);
/// assert_eq!(scaled.regions.bounds().unwrap().to_tuple(), (-15.0, -15.0, 15.0, 15.0));
/// ```
pub fn fit_to_footprint(regions: &RegionSet, target: f64) -> Result<ScaledRegions, GeometryError> {
    let bounds = regions.bounds().ok_or(GeometryError::DegenerateBounds)?;
    let (w, h) = (bounds.width(), bounds.height());
    if approx_zero(w) || approx_zero(h) {
        return Err(GeometryError::DegenerateBounds);
    }

    let factor = target / w.max(h);
    let transform = ScaleTransform {
        factor,
        offset: -bounds.center() * factor,
    };

    let mut warnings = Vec::new();
    if factor < SCALE_WARNING_THRESHOLD {
        let message =
            "The SVG was scaled down significantly; very fine details may be lost in printing.";
        warn!(factor, "{message}");
        warnings.push(message.to_string());
    }

    debug!(factor, offset_x = transform.offset.x, offset_y = transform.offset.y, "fit to footprint");
    Ok(ScaledRegions {
        regions: regions.map_points(|p| transform.apply(p)),
        transform,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::PlanarRegion;
    use approx::assert_relative_eq;

    fn rect(w: f64, h: f64, origin: DVec2) -> RegionSet {
        let ring = vec![
            origin,
            origin + DVec2::new(w, 0.0),
            origin + DVec2::new(w, h),
            origin + DVec2::new(0.0, h),
        ];
        RegionSet::new(vec![PlanarRegion::new(ring, vec![]).unwrap()])
    }

    #[test]
    fn test_wide_drawing_fits_width() {
        let scaled = fit_to_footprint(&rect(40.0, 10.0, DVec2::new(5.0, 7.0)), 25.0).unwrap();
        let b = scaled.regions.bounds().unwrap();
        assert_relative_eq!(b.width(), 25.0, epsilon = 1e-9);
        assert_relative_eq!(b.height(), 6.25, epsilon = 1e-9);
        assert_relative_eq!(b.center().x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(b.center().y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_large_reduction_warns() {
        let scaled = fit_to_footprint(&rect(300.0, 300.0, DVec2::ZERO), 30.0).unwrap();
        assert_eq!(scaled.warnings.len(), 1);
        let scaled = fit_to_footprint(&rect(60.0, 60.0, DVec2::ZERO), 30.0).unwrap();
        assert!(scaled.warnings.is_empty());
    }

    #[test]
    fn test_empty_set_is_degenerate() {
        assert_eq!(
            fit_to_footprint(&RegionSet::default(), 30.0),
            Err(GeometryError::DegenerateBounds)
        );
    }

    #[test]
    fn test_round_trip_restores_drawing() {
        let original = rect(12.0, 3.0, DVec2::new(-4.0, 9.0));
        let scaled = fit_to_footprint(&original, 40.0).unwrap();
        let inverse = scaled.transform.inverse();
        let restored = scaled.regions.map_points(|p| inverse.apply(p));

        for (a, b) in original.regions()[0]
            .exterior()
            .iter()
            .zip(restored.regions()[0].exterior())
        {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        }
        let p = DVec2::new(3.0, -2.0);
        assert_relative_eq!(scaled.transform.invert(scaled.transform.apply(p)).x, p.x, epsilon = 1e-12);
    }
}
