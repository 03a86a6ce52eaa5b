//! # Mesh Errors
//!
//! Error types for solid construction and export.

use thiserror::Error;

/// Errors that can occur while building or exporting a stamp mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Degenerate input geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Cap triangulation failed
    #[error("Triangulation failed: {message}")]
    TriangulationFailed { message: String },

    /// A region could not be turned into a prism
    #[error("Could not extrude polygon: {message}")]
    ExtrusionFailed { message: String },

    /// Boolean operation failed
    #[error("Boolean operation failed: {message}")]
    BooleanFailed { message: String },

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// No region produced any solid
    #[error("No printable geometry after processing. Try increasing min line thickness or simplifying the SVG.")]
    EmptyResult,

    /// Nothing left to export
    #[error("Mesh generation failed (empty).")]
    EmptyMesh,

    /// Writing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a triangulation error.
    pub fn triangulation_failed(message: impl Into<String>) -> Self {
        Self::TriangulationFailed {
            message: message.into(),
        }
    }

    /// Creates an extrusion error.
    pub fn extrusion_failed(message: impl Into<String>) -> Self {
        Self::ExtrusionFailed {
            message: message.into(),
        }
    }

    /// Creates a boolean operation failed error.
    pub fn boolean_failed(message: impl Into<String>) -> Self {
        Self::BooleanFailed {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

/// Error returned when parsing a [`Mode`](crate::Mode) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Mode must be 'raised' or 'engraved'.")]
pub struct ParseModeError;
