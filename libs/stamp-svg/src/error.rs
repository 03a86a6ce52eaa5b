//! # SVG Errors
//!
//! Error types for shape extraction. Messages are user-facing: the request
//! layer forwards them verbatim.

use thiserror::Error;

/// Errors that can occur while extracting shapes from a drawing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SvgError {
    /// Markup could not be parsed
    #[error("Invalid SVG file: {message}")]
    InvalidInput { message: String },

    /// Embedded raster image or raster reference
    #[error("The SVG contains embedded raster images. Please upload a vector-only SVG (no <image> tags).")]
    UnsupportedContent { detail: String },

    /// Curve or arc command inside a path
    #[error("Unsupported SVG path command '{command}'. Please convert curves to line segments (no C/Q/A).")]
    UnsupportedPathCommand { command: char },

    /// No recognized shape produced geometry
    #[error("No vector paths/shapes found. Please export SVG with paths (not text/raster).")]
    EmptyGeometry,
}

impl SvgError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an unsupported content error.
    pub fn unsupported_content(detail: impl Into<String>) -> Self {
        Self::UnsupportedContent {
            detail: detail.into(),
        }
    }
}
