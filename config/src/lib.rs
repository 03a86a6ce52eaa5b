//! # Config Crate
//!
//! Centralized configuration constants for the SVG-to-stamp pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, CIRCLE_SEGMENTS, MIN_HOLE_AREA};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Curved outlines are tessellated with a fixed resolution
//! assert!(CIRCLE_SEGMENTS >= 64);
//! assert!(MIN_HOLE_AREA > 0.1 && MIN_HOLE_AREA < 0.13);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Physical Units**: Every length is in millimetres at the working scale
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
