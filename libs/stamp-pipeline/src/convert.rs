//! # Converter
//!
//! Runs one drawing through every stage, in order:
//!
//! ```text
//! validate params → extract → buffer strokes → normalize → fit → min width
//!          → build_stamp → cleanup + validate → write_stl → DimensionReport
//! ```
//!
//! Each stage sees only the previous stage's output. Warnings are collected
//! in the order the stages raise them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use stamp_geometry::{
    enforce_min_width, fit_to_footprint, half_width, normalize, primitives_to_polygons, RegionSet,
};
use stamp_mesh::builder::{build_stamp, BuildOptions, EngraveFallback, StampDimensions};
use stamp_mesh::repair::cleanup;
use stamp_mesh::{BooleanBackend, BspBackend, ConcatBackend, MeshError, Polygon2D, StlFormat};
use stamp_svg::extract_primitives;
use tracing::{debug, info, warn};

use crate::error::ConvertError;
use crate::params::StampParams;
use crate::report::DimensionReport;

const OPEN_MESH_WARNING: &str =
    "The exported mesh is not fully closed; check it in your slicer before printing.";

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Which boolean engine combines slab and relief.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanMode {
    /// Exact solid booleans
    #[default]
    Bsp,
    /// No solid engine; multi-solid output
    Concat,
}

impl BooleanMode {
    fn backend(self) -> Box<dyn BooleanBackend> {
        match self {
            BooleanMode::Bsp => Box::new(BspBackend),
            BooleanMode::Concat => Box::new(ConcatBackend),
        }
    }
}

/// Behaviour fixed for the lifetime of a [`Converter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub boolean: BooleanMode,
    pub engrave_fallback: EngraveFallback,
    pub stl_format: StlFormat,
}

// =============================================================================
// CONVERTER
// =============================================================================

/// Reusable, thread-safe SVG to STL converter.
#[derive(Debug)]
pub struct Converter {
    config: ConverterConfig,
    backend: Box<dyn BooleanBackend>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            backend: config.boolean.backend(),
            config,
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts `svg` into a stamp STL written to `out`.
    ///
    /// ## Parameters
    ///
    /// - `svg`: raw upload
    /// - `out`: destination file; parent directories are created
    /// - `params`: stamp dimensions, validated first
    ///
    /// ## Errors
    ///
    /// Any [`ConvertError`]. Nothing is written unless every stage before
    /// export succeeded. Upload size is not checked here; request handlers
    /// call [`validate_upload`](crate::validate_upload) first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stamp_pipeline::{Converter, StampParams};
    ///
    /// let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10">
    ///     <rect x="0" y="0" width="10" height="10"/>
    /// </svg>"#;
    /// let dir = tempfile::tempdir().unwrap();
    /// let out = dir.path().join("stamp.stl");
    ///
    /// let report = Converter::default().convert(svg, &out, &StampParams::default()).unwrap();
    /// assert!((report.width() - 30.0).abs() < 1e-6);
    /// assert!(out.exists());
    /// ```
    pub fn convert(
        &self,
        svg: &[u8],
        out: &Path,
        params: &StampParams,
    ) -> Result<DimensionReport, ConvertError> {
        params.validate()?;

        let mut warnings = Vec::new();

        let primitives = extract_primitives(svg)?;
        let polygons = primitives_to_polygons(&primitives, half_width(params.min_line_mm));

        let normalized = normalize(polygons)?;
        warnings.extend(normalized.warnings);

        let scaled = fit_to_footprint(&normalized.regions, params.size_mm)?;
        warnings.extend(scaled.warnings);

        let thickened = enforce_min_width(&scaled.regions, params.min_line_mm)?;
        warnings.extend(thickened.warnings);
        let regions = thickened.regions;

        let dims = StampDimensions {
            size: params.size_mm,
            base: params.base_mm,
            relief: params.relief_mm,
            mode: params.mode,
        };
        let options = BuildOptions {
            engrave_fallback: self.config.engrave_fallback,
        };
        let stamp = build_stamp(&to_polygons(&regions), &dims, self.backend.as_ref(), &options)?;
        warnings.extend(stamp.warnings);

        let (mesh, summary) = cleanup(&stamp.mesh);
        if summary.had_changes() {
            debug!(%summary, "stamp cleaned");
        }
        if mesh.is_empty() {
            return Err(MeshError::EmptyMesh.into());
        }
        if !mesh.validate() {
            warn!(open_edges = mesh.open_edge_count(), "{OPEN_MESH_WARNING}");
            warnings.push(OPEN_MESH_WARNING.to_string());
        }

        stamp_mesh::write_stl(&mesh, out, self.config.stl_format)?;

        let report = DimensionReport::from_result(params, &mesh, regions.total_area(), warnings);
        info!(
            size = report.size_mm,
            mode = %report.mode,
            width = report.width(),
            height = report.height(),
            area = report.approx_area_mm2,
            triangles = mesh.triangle_count(),
            warnings = report.warnings.len(),
            backend = self.backend.name(),
            "stamp converted"
        );
        Ok(report)
    }
}

fn to_polygons(regions: &RegionSet) -> Vec<Polygon2D> {
    regions
        .iter()
        .map(|region| Polygon2D::with_holes(region.exterior().to_vec(), region.holes().to_vec()))
        .collect()
}

/// Converts with the default configuration.
pub fn convert_svg_to_stl(
    svg: &[u8],
    out: &Path,
    params: &StampParams,
) -> Result<DimensionReport, ConvertError> {
    Converter::default().convert(svg, out, params)
}
