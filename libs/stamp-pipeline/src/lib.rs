//! # Stamp Pipeline
//!
//! Turns a restricted SVG drawing into a 3D printable stamp: a square base
//! slab with the drawing raised above it or engraved into it.
//!
//! ## Architecture
//!
//! ```text
//! SVG bytes ─→ stamp_svg ─→ stamp_geometry ─→ stamp_mesh ─→ STL file
//!              (primitives)  (regions in mm)   (solid)     + DimensionReport
//! ```
//!
//! The request handler in front of this crate owns transport. It calls
//! [`Converter::convert`] and maps the result: a [`DimensionReport`] on
//! success, otherwise [`ConvertError::user_message`] with a 4xx or 5xx status
//! per [`ConvertError::is_client_error`].
//!
//! ## Usage
//!
//! ```rust
//! use stamp_pipeline::{convert_svg_to_stl, Mode, StampParams};
//!
//! let svg = br#"<svg xmlns="http://www.w3.org/2000/svg">
//!     <polygon points="0,0 10,0 10,10 0,10"/>
//! </svg>"#;
//! let dir = tempfile::tempdir().unwrap();
//! let params = StampParams { size_mm: 25.0, mode: Mode::Engraved, ..Default::default() };
//!
//! let report = convert_svg_to_stl(svg, &dir.path().join("stamp.stl"), &params).unwrap();
//! assert_eq!(report.mode, Mode::Engraved);
//! println!("{}", report.to_json().unwrap());
//! ```

pub mod convert;
pub mod error;
pub mod params;
pub mod report;

pub use convert::{convert_svg_to_stl, BooleanMode, Converter, ConverterConfig};
pub use error::{ConvertError, UNEXPECTED_ERROR_MESSAGE};
pub use params::{validate_upload, Mode, StampParams};
pub use report::DimensionReport;
pub use stamp_mesh::{EngraveFallback, StlFormat};
