//! # Mesh Cleanup
//!
//! Post-processing applied to every built stamp before export:
//!
//! 1. Weld vertices closer than [`VERTEX_MERGE_EPSILON`]
//! 2. Drop degenerate triangles (repeated corner or no area)
//! 3. Split triangles at vertices lying inside their edges (T-junctions)
//! 4. Drop duplicate triangles; coincident opposite-facing pairs cancel
//! 5. Drop unreferenced vertices
//! 6. Flip connected components whose enclosed volume is negative
//!
//! Boolean output is a set of polygons whose edges meet neighbours at
//! interior points; step 3 is what makes it watertight.

use std::collections::{HashMap, HashSet};
use std::fmt;

use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;
use tracing::debug;

use crate::mesh::Mesh;

/// Counts of what [`cleanup`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    pub vertices_welded: usize,
    pub degenerates_removed: usize,
    pub t_junctions_split: usize,
    pub duplicates_removed: usize,
    pub unreferenced_removed: usize,
    pub components_flipped: usize,
}

impl CleanupSummary {
    pub fn had_changes(&self) -> bool {
        self.vertices_welded > 0
            || self.degenerates_removed > 0
            || self.t_junctions_split > 0
            || self.duplicates_removed > 0
            || self.unreferenced_removed > 0
            || self.components_flipped > 0
    }
}

impl fmt::Display for CleanupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cleanup: {} welded, {} degenerate, {} split, {} duplicate, {} unreferenced, {} flipped",
            self.vertices_welded,
            self.degenerates_removed,
            self.t_junctions_split,
            self.duplicates_removed,
            self.unreferenced_removed,
            self.components_flipped
        )
    }
}

/// Cleans a mesh for export.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use stamp_mesh::repair::cleanup;
/// use stamp_mesh::Mesh;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.add_vertex(DVec3::X);
/// mesh.add_vertex(DVec3::Y);
/// mesh.add_vertex(DVec3::new(1.0 + 1e-9, 0.0, 0.0)); // near-duplicate of 1
/// mesh.add_triangle(0, 1, 2);
/// mesh.add_triangle(0, 3, 2);
///
/// let (clean, summary) = cleanup(&mesh);
/// assert_eq!(summary.vertices_welded, 1);
/// assert_eq!(summary.duplicates_removed, 1);
/// assert_eq!(clean.triangle_count(), 1);
/// ```
pub fn cleanup(mesh: &Mesh) -> (Mesh, CleanupSummary) {
    let mut summary = CleanupSummary::default();
    let (mut vertices, triangles) = mesh.clone().into_parts();

    let (remap, welded) = weld(&vertices, VERTEX_MERGE_EPSILON);
    summary.vertices_welded = welded;
    let mut triangles: Vec<[u32; 3]> = triangles
        .iter()
        .map(|tri| tri.map(|i| remap[i as usize]))
        .collect();

    let before = triangles.len();
    triangles.retain(|tri| !is_degenerate(&vertices, *tri));
    summary.degenerates_removed = before - triangles.len();

    let (split, splits) = split_t_junctions(&vertices, triangles, VERTEX_MERGE_EPSILON);
    summary.t_junctions_split = splits;
    triangles = split;

    let before = triangles.len();
    triangles = remove_duplicates(triangles);
    summary.duplicates_removed = before - triangles.len();

    summary.unreferenced_removed = compact(&mut vertices, &mut triangles);
    summary.components_flipped = orient_components(&vertices, &mut triangles);

    debug!(%summary, triangles = triangles.len(), "mesh cleaned");
    (Mesh::from_parts(vertices, triangles), summary)
}

// =============================================================================
// WELDING
// =============================================================================

fn cell_of(p: DVec3, cell_size: f64) -> (i64, i64, i64) {
    (
        (p.x / cell_size).floor() as i64,
        (p.y / cell_size).floor() as i64,
        (p.z / cell_size).floor() as i64,
    )
}

/// Maps every vertex to the lowest-index vertex within `epsilon` of it,
/// returning the map and how many vertices were merged away.
fn weld(vertices: &[DVec3], epsilon: f64) -> (Vec<u32>, usize) {
    let cell_size = epsilon * 2.0;
    let mut grid: HashMap<(i64, i64, i64), Vec<u32>> = HashMap::new();
    for (idx, v) in vertices.iter().enumerate() {
        grid.entry(cell_of(*v, cell_size)).or_default().push(idx as u32);
    }

    let mut remap: Vec<u32> = (0..vertices.len() as u32).collect();
    let mut merged = 0;

    for (idx, v) in vertices.iter().enumerate() {
        let idx = idx as u32;
        if remap[idx as usize] != idx {
            continue;
        }
        let (cx, cy, cz) = cell_of(*v, cell_size);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(candidates) = grid.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    for &other in candidates {
                        if other <= idx || remap[other as usize] != other {
                            continue;
                        }
                        if v.distance(vertices[other as usize]) < epsilon {
                            remap[other as usize] = idx;
                            merged += 1;
                        }
                    }
                }
            }
        }
    }

    (remap, merged)
}

// =============================================================================
// T-JUNCTIONS
// =============================================================================

/// Referenced vertices sorted by x, for range queries along an edge.
struct EdgeIndex<'a> {
    vertices: &'a [DVec3],
    order: Vec<u32>,
    xs: Vec<f64>,
    epsilon: f64,
}

impl<'a> EdgeIndex<'a> {
    fn new(vertices: &'a [DVec3], triangles: &[[u32; 3]], epsilon: f64) -> Self {
        let mut order: Vec<u32> = triangles.iter().flatten().copied().collect();
        order.sort_unstable();
        order.dedup();
        order.sort_by(|&a, &b| vertices[a as usize].x.total_cmp(&vertices[b as usize].x));
        let xs = order.iter().map(|&i| vertices[i as usize].x).collect();
        Self {
            vertices,
            order,
            xs,
            epsilon,
        }
    }

    /// A vertex within `epsilon` of segment `a`-`b` and farther than
    /// `epsilon` from both ends.
    fn interior_vertex(&self, a: u32, b: u32) -> Option<u32> {
        let (pa, pb) = (self.vertices[a as usize], self.vertices[b as usize]);
        let d = pb - pa;
        let len2 = d.length_squared();
        if len2 <= self.epsilon * self.epsilon {
            return None;
        }

        let lo = pa.x.min(pb.x) - self.epsilon;
        let hi = pa.x.max(pb.x) + self.epsilon;
        let start = self.xs.partition_point(|&x| x < lo);

        self.order[start..]
            .iter()
            .zip(&self.xs[start..])
            .take_while(|&(_, &x)| x <= hi)
            .map(|(&v, _)| v)
            .find(|&v| {
                if v == a || v == b {
                    return false;
                }
                let p = self.vertices[v as usize];
                let t = (p - pa).dot(d) / len2;
                t > 0.0
                    && t < 1.0
                    && p.distance(pa + d * t) < self.epsilon
                    && p.distance(pa) > self.epsilon
                    && p.distance(pb) > self.epsilon
            })
    }
}

/// Splits every triangle at vertices lying inside its edges until no edge
/// has one; returns the new triangles and the number of splits.
///
/// Output keeps the input order: the pieces of a triangle take its place.
fn split_t_junctions(
    vertices: &[DVec3],
    triangles: Vec<[u32; 3]>,
    epsilon: f64,
) -> (Vec<[u32; 3]>, usize) {
    let index = EdgeIndex::new(vertices, &triangles, epsilon);
    // Upper bound on splits per input triangle.
    let max_splits = index.order.len() * 3;

    let mut result = Vec::with_capacity(triangles.len());
    let mut splits = 0;

    for tri in triangles {
        let mut work = vec![tri];
        let mut local = 0;
        while let Some(t) = work.pop() {
            let found = (local < max_splits)
                .then(|| {
                    (0..3).find_map(|e| {
                        let (a, b, c) = (t[e], t[(e + 1) % 3], t[(e + 2) % 3]);
                        index.interior_vertex(a, b).map(|p| ([a, p, c], [p, b, c]))
                    })
                })
                .flatten();
            match found {
                Some((first, second)) => {
                    local += 1;
                    work.push(second);
                    work.push(first);
                }
                None => result.push(t),
            }
        }
        splits += local;
    }

    (result, splits)
}

// =============================================================================
// TRIANGLE FILTERS
// =============================================================================

fn is_degenerate(vertices: &[DVec3], [a, b, c]: [u32; 3]) -> bool {
    if a == b || b == c || a == c {
        return true;
    }
    let (v0, v1, v2) = (vertices[a as usize], vertices[b as usize], vertices[c as usize]);
    (v1 - v0).cross(v2 - v0).length() * 0.5 < VERTEX_MERGE_EPSILON * VERTEX_MERGE_EPSILON
}

/// Rotates a triangle so its smallest index comes first, keeping winding.
fn canonical(tri: [u32; 3]) -> [u32; 3] {
    let start = (0..3).min_by_key(|&i| tri[i]).unwrap_or(0);
    [tri[start], tri[(start + 1) % 3], tri[(start + 2) % 3]]
}

/// Keeps the first of each same-winding duplicate and removes coincident
/// opposite-facing pairs entirely.
fn remove_duplicates(triangles: Vec<[u32; 3]>) -> Vec<[u32; 3]> {
    let mut seen: HashSet<[u32; 3]> = HashSet::new();
    let mut reversed: HashSet<[u32; 3]> = HashSet::new();
    let mut unique = Vec::with_capacity(triangles.len());

    for tri in triangles {
        if seen.insert(canonical(tri)) {
            reversed.insert(canonical([tri[0], tri[2], tri[1]]));
            unique.push(tri);
        }
    }

    unique
        .into_iter()
        .filter(|tri| !reversed.contains(&canonical(*tri)))
        .collect()
}

/// Drops vertices no triangle uses, keeping the order of the rest; returns
/// how many were dropped.
fn compact(vertices: &mut Vec<DVec3>, triangles: &mut [[u32; 3]]) -> usize {
    let mut used = vec![false; vertices.len()];
    for &i in triangles.iter().flatten() {
        used[i as usize] = true;
    }

    let mut new_index = vec![0u32; vertices.len()];
    let mut kept = Vec::with_capacity(vertices.len());
    for (i, v) in vertices.iter().enumerate() {
        if used[i] {
            new_index[i] = kept.len() as u32;
            kept.push(*v);
        }
    }
    for i in triangles.iter_mut().flatten() {
        *i = new_index[*i as usize];
    }

    let removed = vertices.len() - kept.len();
    *vertices = kept;
    removed
}

// =============================================================================
// ORIENTATION
// =============================================================================

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

/// Flips every vertex-connected component with negative signed volume.
fn orient_components(vertices: &[DVec3], triangles: &mut [[u32; 3]]) -> usize {
    let mut parent: Vec<usize> = (0..vertices.len()).collect();
    for tri in triangles.iter() {
        let root = find(&mut parent, tri[0] as usize);
        for &v in &tri[1..] {
            let other = find(&mut parent, v as usize);
            parent[other] = root;
        }
    }

    let mut volume: HashMap<usize, f64> = HashMap::new();
    for tri in triangles.iter() {
        let root = find(&mut parent, tri[0] as usize);
        let [v0, v1, v2] = tri.map(|i| vertices[i as usize]);
        *volume.entry(root).or_default() += v0.dot(v1.cross(v2)) / 6.0;
    }

    let inverted: HashSet<usize> = volume
        .into_iter()
        .filter(|&(_, v)| v < 0.0)
        .map(|(root, _)| root)
        .collect();
    if inverted.is_empty() {
        return 0;
    }

    for tri in triangles.iter_mut() {
        if inverted.contains(&find(&mut parent, tri[0] as usize)) {
            tri.swap(1, 2);
        }
    }
    inverted.len()
}
