//! # Stamp Mesh
//!
//! Solid construction for stamps: extrusion, slab, booleans, cleanup and
//! STL export.
//!
//! ## Architecture
//!
//! ```text
//! Polygon2D regions → builder::build_stamp → repair::cleanup → export::write_stl
//!                      (slab + relief,
//!                       BooleanBackend)
//! ```
//!
//! ## Algorithms
//!
//! - **Boolean Operations**: BSP trees (csg.js algorithm), or plain
//!   concatenation when no solid engine is wanted
//! - **Triangulation**: ear-cutting with holes (`earcutr`)
//! - **Cleanup**: spatial-hash welding, orientation repair per component
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use stamp_mesh::backend::BspBackend;
//! use stamp_mesh::builder::{build_stamp, BuildOptions, StampDimensions};
//! use stamp_mesh::repair::cleanup;
//! use stamp_mesh::{Mode, Polygon2D};
//!
//! let square = Polygon2D::new(vec![
//!     DVec2::new(-5.0, -5.0),
//!     DVec2::new(5.0, -5.0),
//!     DVec2::new(5.0, 5.0),
//!     DVec2::new(-5.0, 5.0),
//! ]);
//! let dims = StampDimensions { size: 30.0, base: 7.0, relief: 2.2, mode: Mode::Engraved };
//! let stamp = build_stamp(&[square], &dims, &BspBackend, &BuildOptions::default()).unwrap();
//! let (mesh, _summary) = cleanup(&stamp.mesh);
//! assert!(!mesh.is_empty());
//! ```

pub mod backend;
pub mod builder;
pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod repair;

pub use backend::{BooleanBackend, BspBackend, ConcatBackend};
pub use builder::{build_stamp, BuildOptions, EngraveFallback, Mode, StampDimensions, StampMesh};
pub use error::{MeshError, ParseModeError};
pub use export::{write_stl, StlFormat};
pub use mesh::Mesh;
pub use ops::extrude::Polygon2D;
pub use repair::{cleanup, CleanupSummary};
