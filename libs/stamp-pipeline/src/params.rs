//! # Stamp Parameters
//!
//! Numeric knobs supplied with each upload, and the checks run on them and
//! on the upload itself before any parsing happens.

use config::constants::{
    approx_equal, ALLOWED_SIZES_MM, BASE_RANGE_MM, DEFAULT_BASE_MM, DEFAULT_MIN_LINE_MM,
    DEFAULT_RELIEF_MM, DEFAULT_SIZE_MM, MIN_LINE_RANGE_MM, MIN_UPLOAD_BYTES, RELIEF_RANGE_MM,
};
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

pub use stamp_mesh::Mode;

/// Parameters of one conversion, all lengths in millimeters.
///
/// # Example
///
/// ```rust
/// use stamp_pipeline::{Mode, StampParams};
///
/// let params = StampParams { mode: Mode::Engraved, ..StampParams::default() };
/// assert!(params.validate().is_ok());
///
/// let bad = StampParams { size_mm: 35.0, ..params };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StampParams {
    /// Footprint side length; one of 25, 30 or 40
    pub size_mm: f64,
    pub mode: Mode,
    /// Slab thickness
    pub base_mm: f64,
    /// Relief height, or engraving depth
    pub relief_mm: f64,
    /// Thinnest printable stroke
    pub min_line_mm: f64,
}

impl Default for StampParams {
    fn default() -> Self {
        Self {
            size_mm: DEFAULT_SIZE_MM,
            mode: Mode::default(),
            base_mm: DEFAULT_BASE_MM,
            relief_mm: DEFAULT_RELIEF_MM,
            min_line_mm: DEFAULT_MIN_LINE_MM,
        }
    }
}

impl StampParams {
    /// Checks every parameter against its accepted range.
    ///
    /// ## Errors
    ///
    /// `InvalidParameter` naming the first offending parameter. Non-finite
    /// values are always rejected.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !ALLOWED_SIZES_MM.iter().any(|&s| approx_equal(s, self.size_mm)) {
            return Err(ConvertError::invalid_parameter(
                "Invalid size. Allowed sizes: 25, 30, 40 mm.",
            ));
        }
        if !BASE_RANGE_MM.contains(self.base_mm) {
            return Err(ConvertError::invalid_parameter(
                "Base height must be between 2 and 20 mm.",
            ));
        }
        if !RELIEF_RANGE_MM.contains(self.relief_mm) {
            return Err(ConvertError::invalid_parameter(
                "Relief height must be between 0.6 and 6 mm.",
            ));
        }
        if !MIN_LINE_RANGE_MM.contains(self.min_line_mm) {
            return Err(ConvertError::invalid_parameter(
                "Minimum line thickness must be between 0.4 and 4 mm.",
            ));
        }
        Ok(())
    }
}

/// Rejects uploads too short to hold any SVG document.
pub fn validate_upload(bytes: &[u8]) -> Result<(), ConvertError> {
    if bytes.len() < MIN_UPLOAD_BYTES {
        return Err(ConvertError::invalid_input(
            "The uploaded file is empty or too small to be a valid SVG.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(params: StampParams) -> String {
        params.validate().unwrap_err().to_string()
    }

    #[test]
    fn test_defaults_are_valid() {
        let params = StampParams::default();
        assert_eq!(params.size_mm, 30.0);
        assert_eq!(params.mode, Mode::Raised);
        assert_eq!(params.base_mm, 7.0);
        assert_eq!(params.relief_mm, 2.2);
        assert_eq!(params.min_line_mm, 1.4);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_every_allowed_size() {
        for size_mm in [25.0, 30.0, 40.0] {
            let params = StampParams { size_mm, ..Default::default() };
            assert!(params.validate().is_ok(), "size {size_mm}");
        }
    }

    #[test]
    fn test_out_of_range_messages() {
        let d = StampParams::default();
        assert_eq!(
            message(StampParams { size_mm: 32.0, ..d }),
            "Invalid size. Allowed sizes: 25, 30, 40 mm."
        );
        assert_eq!(
            message(StampParams { base_mm: 1.5, ..d }),
            "Base height must be between 2 and 20 mm."
        );
        assert_eq!(
            message(StampParams { relief_mm: 6.5, ..d }),
            "Relief height must be between 0.6 and 6 mm."
        );
        assert_eq!(
            message(StampParams { min_line_mm: 0.3, ..d }),
            "Minimum line thickness must be between 0.4 and 4 mm."
        );
    }

    #[test]
    fn test_range_edges_inclusive() {
        let d = StampParams::default();
        assert!(StampParams { base_mm: 2.0, relief_mm: 6.0, min_line_mm: 4.0, ..d }
            .validate()
            .is_ok());
        assert!(StampParams { base_mm: 20.0, relief_mm: 0.6, min_line_mm: 0.4, ..d }
            .validate()
            .is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let d = StampParams::default();
        assert!(StampParams { size_mm: f64::NAN, ..d }.validate().is_err());
        assert!(StampParams { base_mm: f64::INFINITY, ..d }.validate().is_err());
        assert!(StampParams { relief_mm: f64::NAN, ..d }.validate().is_err());
    }

    #[test]
    fn test_serde_uses_defaults_for_missing_fields() {
        let params: StampParams =
            serde_json::from_str(r#"{"size_mm": 40, "mode": "engraved"}"#).unwrap();
        assert_eq!(params.size_mm, 40.0);
        assert_eq!(params.mode, Mode::Engraved);
        assert_eq!(params.base_mm, DEFAULT_BASE_MM);
    }

    #[test]
    fn test_upload_size() {
        assert!(matches!(
            validate_upload(b""),
            Err(ConvertError::InvalidInput { .. })
        ));
        assert!(validate_upload(&[b' '; 49]).is_err());
        assert!(validate_upload(&[b' '; 50]).is_ok());
    }
}
