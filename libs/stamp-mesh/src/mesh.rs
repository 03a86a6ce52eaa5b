//! # Mesh Data Structure
//!
//! Indexed triangle mesh used for every solid in the pipeline.

use std::collections::HashMap;

use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;

/// A triangle mesh with vertices and indices.
///
/// Triangles wind counter-clockwise when seen from outside, so the right-hand
/// normal points out of the solid.
///
/// # Example
///
/// ```rust
/// use stamp_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Builds a mesh from raw parts without validation.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Consumes the mesh, returning its raw parts.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<[u32; 3]>) {
        (self.vertices, self.triangles)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Corner positions of a triangle.
    pub fn triangle_positions(&self, tri: [u32; 3]) -> [DVec3; 3] {
        [self.vertex(tri[0]), self.vertex(tri[1]), self.vertex(tri[2])]
    }

    /// Unit normal of a triangle, or zero when it has no area.
    pub fn triangle_normal(&self, tri: [u32; 3]) -> DVec3 {
        let [v0, v1, v2] = self.triangle_positions(tri);
        (v1 - v0).cross(v2 - v0).normalize_or_zero()
    }

    /// Computes the axis-aligned bounding box of referenced and unreferenced
    /// vertices alike.
    ///
    /// Returns `None` for a mesh without vertices.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let (first, rest) = self.vertices.split_first()?;
        Some(
            rest.iter()
                .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v))),
        )
    }

    /// Signed enclosed volume (divergence theorem).
    ///
    /// Positive for a closed mesh with outward winding.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let [v0, v1, v2] = self.triangle_positions(*tri);
                v0.dot(v1.cross(v2))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Returns a translated copy.
    pub fn translated(&self, offset: DVec3) -> Self {
        let mut mesh = self.clone();
        mesh.translate(offset);
        mesh
    }

    /// Reverses the winding of every triangle.
    pub fn flip(&mut self) {
        for tri in &mut self.triangles {
            tri.swap(1, 2);
        }
    }

    /// Merges another mesh into this one.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Number of directed edges without a reverse partner.
    ///
    /// Zero for a closed, consistently wound surface. Coincident solids
    /// (multi-solid output) still count as closed when each one is.
    pub fn open_edge_count(&self) -> usize {
        let mut balance: HashMap<(u32, u32), i64> = HashMap::new();
        for tri in &self.triangles {
            for e in 0..3 {
                let (a, b) = (tri[e], tri[(e + 1) % 3]);
                if a < b {
                    *balance.entry((a, b)).or_default() += 1;
                } else {
                    *balance.entry((b, a)).or_default() -= 1;
                }
            }
        }
        balance.values().map(|n| n.unsigned_abs() as usize).sum()
    }

    /// Returns true when every edge is shared by two oppositely wound
    /// triangles.
    pub fn is_watertight(&self) -> bool {
        self.open_edge_count() == 0
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    /// - Every edge has a reverse partner (watertight)
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        let faces_ok = self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let [v0, v1, v2] = self.triangle_positions(*tri);
            (v1 - v0).cross(v2 - v0).length() >= VERTEX_MERGE_EPSILON
        });
        faces_ok && self.is_watertight()
    }
}
