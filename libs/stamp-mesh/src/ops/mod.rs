//! # Mesh Operations

pub mod boolean;
pub mod extrude;
