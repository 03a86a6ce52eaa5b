//! # Conversion Errors
//!
//! One flat taxonomy for every way a conversion can fail. Each variant
//! carries a short message meant for the person who uploaded the drawing.

use stamp_geometry::GeometryError;
use stamp_mesh::{MeshError, ParseModeError};
use stamp_svg::SvgError;
use thiserror::Error;

/// Shown instead of the real message for server-side failures.
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "Unexpected error while converting. Try simplifying the SVG and retry.";

/// Errors raised by [`Converter::convert`](crate::Converter::convert).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Upload or markup unusable
    #[error("{message}")]
    InvalidInput { message: String },

    /// Raster images in the drawing
    #[error("{message}")]
    UnsupportedContent { message: String },

    /// Curves or arcs in a path
    #[error("{message}")]
    UnsupportedPathCommand { message: String },

    /// Nothing fillable survived a planar stage
    #[error("{message}")]
    EmptyGeometry { message: String },

    /// Drawing has zero width or height
    #[error("{message}")]
    DegenerateBounds { message: String },

    /// Extrusion or boolean combination failed
    #[error("{message}")]
    MeshBuildFailure { message: String },

    /// No region produced a solid
    #[error("{message}")]
    EmptyResult { message: String },

    /// Final mesh empty after cleanup
    #[error("{message}")]
    MeshExportFailure { message: String },

    /// Stamp parameter out of range
    #[error("{message}")]
    InvalidParameter { message: String },

    /// Writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// True when the caller's input is at fault (4xx), false for server-side
    /// failures (5xx).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ConvertError::Io(_))
    }

    /// Message safe to show the uploader.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stamp_pipeline::ConvertError;
    ///
    /// let err = ConvertError::invalid_parameter("Invalid size. Allowed sizes: 25, 30, 40 mm.");
    /// assert_eq!(err.user_message(), "Invalid size. Allowed sizes: 25, 30, 40 mm.");
    ///
    /// let io = ConvertError::from(std::io::Error::other("disk full"));
    /// assert!(!io.is_client_error());
    /// assert!(io.user_message().starts_with("Unexpected error"));
    /// ```
    pub fn user_message(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            UNEXPECTED_ERROR_MESSAGE.to_string()
        }
    }
}

impl From<SvgError> for ConvertError {
    fn from(err: SvgError) -> Self {
        let message = err.to_string();
        match err {
            SvgError::InvalidInput { .. } => Self::InvalidInput { message },
            SvgError::UnsupportedContent { .. } => Self::UnsupportedContent { message },
            SvgError::UnsupportedPathCommand { .. } => Self::UnsupportedPathCommand { message },
            SvgError::EmptyGeometry => Self::EmptyGeometry { message },
        }
    }
}

impl From<GeometryError> for ConvertError {
    fn from(err: GeometryError) -> Self {
        let message = err.to_string();
        match err {
            GeometryError::EmptyGeometry { .. } => Self::EmptyGeometry { message },
            GeometryError::DegenerateBounds => Self::DegenerateBounds { message },
        }
    }
}

impl From<MeshError> for ConvertError {
    fn from(err: MeshError) -> Self {
        match err {
            MeshError::Io(io) => Self::Io(io),
            MeshError::EmptyResult => Self::EmptyResult {
                message: err.to_string(),
            },
            MeshError::EmptyMesh => Self::MeshExportFailure {
                message: err.to_string(),
            },
            MeshError::DegenerateGeometry { .. }
            | MeshError::TriangulationFailed { .. }
            | MeshError::ExtrusionFailed { .. }
            | MeshError::BooleanFailed { .. }
            | MeshError::InvalidTopology { .. } => Self::MeshBuildFailure {
                message: err.to_string(),
            },
        }
    }
}

impl From<ParseModeError> for ConvertError {
    fn from(err: ParseModeError) -> Self {
        Self::invalid_parameter(err.to_string())
    }
}
