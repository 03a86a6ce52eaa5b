//! # Stamp Geometry
//!
//! Planar stages between shape extraction and meshing.
//!
//! ## Architecture
//!
//! ```text
//! RawPrimitive ─→ width::primitives_to_polygons ─→ normalize ─→ scale::fit_to_footprint
//!                    (strokes buffered to bands)    (repair,      (footprint fit,
//!                                                    union,        centered)
//!                                                    small holes)       │
//!                                                                        ↓
//!                                               RegionSet ←─ width::enforce_min_width
//! ```
//!
//! All polygon booleans go through [`geo::BooleanOps`]. Regions leave this
//! crate as plain [`PlanarRegion`] rings so the mesh layer never sees the
//! planar kernel's types.

pub mod error;
pub mod normalize;
pub mod region;
pub mod scale;
pub mod width;

pub use error::GeometryError;
pub use normalize::{normalize, normalize_regions, NormalizeOutcome};
pub use region::{Bounds2, PlanarRegion, RegionSet};
pub use scale::{fit_to_footprint, ScaleTransform, ScaledRegions};
pub use width::{
    buffer_open_curve, enforce_min_width, half_width, primitives_to_polygons, BufferParams,
};
