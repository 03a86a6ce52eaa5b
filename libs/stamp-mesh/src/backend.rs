//! Boolean backends used by the stamp builder.
//!
//! The builder never decides how solids are combined; it is handed a
//! [`BooleanBackend`] chosen once at configuration time.

use std::fmt::Debug;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::boolean;

/// Strategy for combining two closed meshes.
///
/// # Examples
/// ```
/// use stamp_mesh::backend::{BooleanBackend, BspBackend, ConcatBackend};
/// use stamp_mesh::primitives::create_slab;
///
/// let slab = create_slab(2.0, 1.0);
/// assert!(BspBackend.is_exact());
/// let merged = ConcatBackend.union(&slab, &slab).unwrap();
/// assert_eq!(merged.triangle_count(), 24);
/// ```
pub trait BooleanBackend: Send + Sync + Debug {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Whether results are true solid booleans.
    fn is_exact(&self) -> bool;

    /// Solid covering both inputs.
    fn union(&self, a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError>;

    /// `a` with `b` removed.
    fn difference(&self, a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError>;
}

/// Exact CSG on BSP trees.
#[derive(Debug, Default, Clone, Copy)]
pub struct BspBackend;

impl BooleanBackend for BspBackend {
    fn name(&self) -> &'static str {
        "bsp"
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn union(&self, a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
        boolean::union(a, b)
    }

    fn difference(&self, a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
        boolean::difference(a, b)
    }
}

/// Fallback without a solid engine.
///
/// Union concatenates the inputs into a multi-solid mesh. Difference cannot
/// be approximated and returns `a` unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcatBackend;

impl BooleanBackend for ConcatBackend {
    fn name(&self) -> &'static str {
        "concat"
    }

    fn is_exact(&self) -> bool {
        false
    }

    fn union(&self, a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
        let mut merged = a.clone();
        merged.merge(b);
        Ok(merged)
    }

    fn difference(&self, a: &Mesh, _b: &Mesh) -> Result<Mesh, MeshError> {
        Ok(a.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_slab;
    use glam::DVec3;

    #[test]
    fn test_concat_difference_keeps_base() {
        let slab = create_slab(4.0, 2.0);
        let cutter = create_slab(1.0, 1.0).translated(DVec3::new(0.0, 0.0, 1.5));
        assert_eq!(ConcatBackend.difference(&slab, &cutter).unwrap(), slab);
    }

    #[test]
    fn test_backends_are_object_safe() {
        let backends: Vec<Box<dyn BooleanBackend>> = vec![Box::new(BspBackend), Box::new(ConcatBackend)];
        let names: Vec<_> = backends.iter().map(|b| b.name()).collect();
        assert_eq!(names, ["bsp", "concat"]);
        assert!(!backends[1].is_exact());
    }
}
