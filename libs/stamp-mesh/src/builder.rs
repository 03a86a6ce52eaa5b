//! # Stamp Builder
//!
//! Turns planar regions into the stamp solid: a square base slab with the
//! drawing either raised on top of it or engraved into it.
//!
//! ## Layout
//!
//! - Slab: `size` x `size`, centered on the origin, `z` in `[0, base]`
//! - Raised: relief prisms sit on the slab, `z` in `[base, base + relief]`
//! - Engraved: relief prisms are cut out of the slab, `z` in
//!   `[base - relief, base]`

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::backend::BooleanBackend;
use crate::error::{MeshError, ParseModeError};
use crate::mesh::Mesh;
use crate::ops::extrude::{linear_extrude, Polygon2D};
use crate::primitives::create_slab;

// =============================================================================
// MODE
// =============================================================================

/// Whether the drawing stands out of the base or is cut into it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Raised,
    Engraved,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Raised => "raised",
            Mode::Engraved => "engraved",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    /// Parses `raised` or `engraved`, ignoring case and surrounding spaces.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stamp_mesh::Mode;
    ///
    /// assert_eq!(" Engraved ".parse::<Mode>(), Ok(Mode::Engraved));
    /// assert!("embossed".parse::<Mode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("raised") {
            Ok(Mode::Raised)
        } else if s.eq_ignore_ascii_case("engraved") {
            Ok(Mode::Engraved)
        } else {
            Err(ParseModeError)
        }
    }
}

// =============================================================================
// OPTIONS
// =============================================================================

/// What to do with engraved mode when the backend cannot subtract solids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngraveFallback {
    /// Export the plain slab and warn
    #[default]
    KeepBase,
    /// Refuse with `BooleanFailed`
    Fail,
}

/// Builder knobs that are not part of the stamp's dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub engrave_fallback: EngraveFallback,
}

/// Physical dimensions of the stamp, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StampDimensions {
    /// Footprint side length
    pub size: f64,
    /// Slab thickness
    pub base: f64,
    /// Relief height (raised) or engraving depth (engraved)
    pub relief: f64,
    pub mode: Mode,
}

/// Built solid plus the warnings raised on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct StampMesh {
    pub mesh: Mesh,
    pub warnings: Vec<String>,
}

// =============================================================================
// BUILD
// =============================================================================

const CONCAT_UNION_WARNING: &str =
    "Solid boolean engine not available; exported as multi-solid STL (still printable).";
const CONCAT_ENGRAVE_WARNING: &str =
    "Solid boolean engine not available; engraved mode approximated (no boolean).";
const CUT_THROUGH_WARNING: &str =
    "Engraving depth reaches the bottom of the base; the relief cuts through the stamp.";

/// Extrudes every region and concatenates the prisms, bottom at `z = 0`.
///
/// Regions without area are skipped.
///
/// ## Errors
///
/// `ExtrusionFailed` when a region cannot be extruded; `EmptyResult` when no
/// region produced a prism.
pub fn extrude_regions(regions: &[Polygon2D], height: f64) -> Result<Mesh, MeshError> {
    let mut relief = Mesh::new();
    let mut meshed = 0usize;

    for region in regions {
        if region.area() <= 0.0 {
            continue;
        }
        let prism = linear_extrude(region, height)
            .map_err(|e| MeshError::extrusion_failed(e.to_string()))?;
        relief.merge(&prism);
        meshed += 1;
    }

    debug!(regions = regions.len(), meshed, triangles = relief.triangle_count(), "relief extruded");
    if relief.is_empty() {
        return Err(MeshError::EmptyResult);
    }
    Ok(relief)
}

/// Builds the stamp solid from planar regions centered on the origin.
///
/// ## Parameters
///
/// - `regions`: drawing in millimeters, already fitted to the footprint
/// - `dims`: footprint, base and relief sizes plus mode
/// - `backend`: how slab and relief are combined
/// - `options`: fallback policy for inexact backends
///
/// ## Errors
///
/// - `ExtrusionFailed` / `EmptyResult` from [`extrude_regions`]
/// - `BooleanFailed` from the backend, or for engraved mode on an inexact
///   backend with [`EngraveFallback::Fail`]
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use stamp_mesh::backend::BspBackend;
/// use stamp_mesh::builder::{build_stamp, BuildOptions, StampDimensions};
/// use stamp_mesh::{Mode, Polygon2D};
///
/// let square = Polygon2D::new(vec![
///     DVec2::new(-5.0, -5.0),
///     DVec2::new(5.0, -5.0),
///     DVec2::new(5.0, 5.0),
///     DVec2::new(-5.0, 5.0),
/// ]);
/// let dims = StampDimensions { size: 30.0, base: 7.0, relief: 2.2, mode: Mode::Raised };
/// let stamp = build_stamp(&[square], &dims, &BspBackend, &BuildOptions::default()).unwrap();
/// let (_, max) = stamp.mesh.bounding_box().unwrap();
/// assert!((max.z - 9.2).abs() < 1e-9);
/// assert!(stamp.warnings.is_empty());
/// ```
pub fn build_stamp(
    regions: &[Polygon2D],
    dims: &StampDimensions,
    backend: &dyn BooleanBackend,
    options: &BuildOptions,
) -> Result<StampMesh, MeshError> {
    let slab = create_slab(dims.size, dims.base);
    let relief = extrude_regions(regions, dims.relief)?;
    let mut warnings = Vec::new();

    let mesh = match dims.mode {
        Mode::Raised => {
            let relief = relief.translated(DVec3::new(0.0, 0.0, dims.base));
            let mesh = backend.union(&slab, &relief)?;
            if !backend.is_exact() {
                warn!(backend = backend.name(), "{CONCAT_UNION_WARNING}");
                warnings.push(CONCAT_UNION_WARNING.to_string());
            }
            mesh
        }
        Mode::Engraved => {
            if dims.relief >= dims.base {
                warn!(relief = dims.relief, base = dims.base, "{CUT_THROUGH_WARNING}");
                warnings.push(CUT_THROUGH_WARNING.to_string());
            }
            if !backend.is_exact() && options.engrave_fallback == EngraveFallback::Fail {
                return Err(MeshError::boolean_failed(format!(
                    "backend '{}' cannot engrave",
                    backend.name()
                )));
            }
            let cutter = relief.translated(DVec3::new(0.0, 0.0, dims.base - dims.relief));
            let mesh = backend.difference(&slab, &cutter)?;
            if !backend.is_exact() {
                warn!(backend = backend.name(), "{CONCAT_ENGRAVE_WARNING}");
                warnings.push(CONCAT_ENGRAVE_WARNING.to_string());
            }
            mesh
        }
    };

    debug!(
        mode = %dims.mode,
        backend = backend.name(),
        triangles = mesh.triangle_count(),
        "stamp built"
    );
    Ok(StampMesh { mesh, warnings })
}
