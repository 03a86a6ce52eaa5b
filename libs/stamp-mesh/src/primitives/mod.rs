//! # Primitives
//!
//! Mesh generation for the stamp's base solid.

pub mod slab;

pub use slab::create_slab;
