//! Dimension report returned alongside every STL.

use serde::{Deserialize, Serialize};
use stamp_mesh::Mesh;

use crate::params::{Mode, StampParams};

/// What was built, for display next to the download.
///
/// Field names match the JSON the request handler emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionReport {
    pub size_mm: f64,
    pub base_mm: f64,
    pub relief_mm: f64,
    pub mode: Mode,
    /// `(min_x, min_y, max_x, max_y)` of the exported mesh
    pub bbox_mm: (f64, f64, f64, f64),
    /// Area of the final drawing regions
    pub approx_area_mm2: f64,
    pub warnings: Vec<String>,
}

impl DimensionReport {
    /// Assembles the report from the exported mesh.
    ///
    /// An empty mesh reports a zero box.
    pub fn from_result(
        params: &StampParams,
        mesh: &Mesh,
        approx_area_mm2: f64,
        warnings: Vec<String>,
    ) -> Self {
        let bbox_mm = mesh
            .bounding_box()
            .map(|(min, max)| (min.x, min.y, max.x, max.y))
            .unwrap_or_default();
        Self {
            size_mm: params.size_mm,
            base_mm: params.base_mm,
            relief_mm: params.relief_mm,
            mode: params.mode,
            bbox_mm,
            approx_area_mm2,
            warnings,
        }
    }

    pub fn width(&self) -> f64 {
        self.bbox_mm.2 - self.bbox_mm.0
    }

    pub fn height(&self) -> f64 {
        self.bbox_mm.3 - self.bbox_mm.1
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stamp_mesh::primitives::create_slab;

    #[test]
    fn test_bbox_from_mesh() {
        let report = DimensionReport::from_result(
            &StampParams::default(),
            &create_slab(30.0, 7.0),
            120.0,
            vec!["note".into()],
        );
        assert_eq!(report.bbox_mm, (-15.0, -15.0, 15.0, 15.0));
        assert_eq!(report.width(), 30.0);
        assert_eq!(report.height(), 30.0);
        assert_eq!(report.warnings, ["note"]);
    }

    #[test]
    fn test_json_field_names() {
        let report = DimensionReport::from_result(
            &StampParams { mode: Mode::Engraved, ..Default::default() },
            &create_slab(25.0, 2.0),
            10.0,
            Vec::new(),
        );
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["mode"], "engraved");
        assert_eq!(value["size_mm"], 30.0);
        assert_eq!(value["bbox_mm"][2], 12.5);
        assert_eq!(value["approx_area_mm2"], 10.0);
        assert!(value["warnings"].as_array().unwrap().is_empty());

        let back: DimensionReport = serde_json::from_value(value).unwrap();
        assert_eq!(back, report);
    }
}
