//! # Stamp SVG
//!
//! Extracts untyped 2D primitives from a restricted SVG drawing.
//!
//! ## Architecture
//!
//! ```text
//! SVG bytes → extract (markup + raster check) → ShapeKind dispatch → RawPrimitive
//!                                                   ↘ path::interpret (M/L/H/V/Z)
//! ```
//!
//! ## Supported Content
//!
//! - `rect`, `circle`, `ellipse`, `polygon`, `polyline`, `path`
//! - Paths made of straight segments only; curves and arcs must be
//!   flattened before upload
//!
//! Embedded raster images are rejected. Unknown elements are skipped.
//!
//! ## Usage
//!
//! ```rust
//! use stamp_svg::{extract_primitives, RawPrimitive};
//!
//! let svg = br#"<svg xmlns="http://www.w3.org/2000/svg">
//!     <rect x="0" y="0" width="10" height="10"/>
//! </svg>"#;
//! let primitives = extract_primitives(svg).unwrap();
//! assert_eq!(primitives.len(), 1);
//! assert!(matches!(primitives[0], RawPrimitive::ClosedRegion(_)));
//! ```

pub mod error;
pub mod extract;
pub mod path;
pub mod primitive;
pub mod raster;
pub mod shapes;

pub use error::SvgError;
pub use extract::extract_primitives;
pub use primitive::RawPrimitive;
pub use shapes::ShapeKind;
