//! # Geometry Errors

use thiserror::Error;

/// Errors raised by the planar stages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Nothing polygonal survived a stage
    #[error("{message}")]
    EmptyGeometry { message: String },

    /// Union has zero width or height
    #[error("SVG has invalid geometry bounds (zero area).")]
    DegenerateBounds,
}

impl GeometryError {
    /// Creates an empty geometry error with a stage-specific message.
    pub fn empty(message: impl Into<String>) -> Self {
        Self::EmptyGeometry {
            message: message.into(),
        }
    }
}
