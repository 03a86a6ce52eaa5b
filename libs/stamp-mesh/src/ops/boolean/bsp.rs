//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! ## Algorithm
//!
//! Each BSP node contains:
//! - A dividing plane
//! - Polygons coplanar with the plane
//! - Front subtree (polygons in front of plane)
//! - Back subtree (polygons behind plane)
//!
//! ## Operations
//!
//! - `clip_to`: Remove polygons from this tree that are inside another tree
//! - `invert`: Flip all polygons and swap front/back subtrees
//! - `all_polygons`: Collect all polygons from the tree
//!
//! ## Stack Safety
//!
//! Traversals recurse through [`grow`], which moves onto a heap-allocated
//! stack segment when the remaining stack gets short. Dropping is iterative.

use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;

use super::plane::Plane;
use super::polygon::{Polygon, Split};

fn grow<R>(f: impl FnOnce() -> R) -> R {
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, f)
}

/// A node in the BSP tree.
///
/// # Example
///
/// ```rust,ignore
/// let polygons = mesh_to_polygons(&mesh);
/// let tree = BspNode::new(polygons);
/// ```
#[derive(Debug, Default)]
pub struct BspNode {
    /// Dividing plane, `None` for an empty node
    plane: Option<Plane>,
    /// Polygons coplanar with this node's plane
    polygons: Vec<Polygon>,
    /// Front subtree (polygons in front of plane)
    front: Option<Box<BspNode>>,
    /// Back subtree (polygons behind plane)
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a new BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = Self::default();
        root.build(polygons);
        root
    }

    /// Adds polygons to the tree, splitting them along existing planes.
    ///
    /// The first polygon of an empty node becomes its splitter.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        grow(|| {
            let plane = *self.plane.get_or_insert(*polygons[0].plane());

            let mut split = Split::default();
            for poly in polygons {
                poly.split_into(&plane, &mut split);
            }

            self.polygons.append(&mut split.coplanar_front);
            self.polygons.append(&mut split.coplanar_back);

            if !split.front.is_empty() {
                self.front
                    .get_or_insert_with(Box::default)
                    .build(split.front);
            }
            if !split.back.is_empty() {
                self.back.get_or_insert_with(Box::default).build(split.back);
            }
        })
    }

    /// Inverts this BSP tree (flips all polygons and swaps subtrees).
    ///
    /// Turns the solid inside out; used for difference.
    pub fn invert(&mut self) {
        grow(|| {
            for poly in &mut self.polygons {
                poly.flip();
            }
            self.plane = self.plane.map(|p| p.flip());
            if let Some(front) = self.front.as_mut() {
                front.invert();
            }
            if let Some(back) = self.back.as_mut() {
                back.invert();
            }
            std::mem::swap(&mut self.front, &mut self.back);
        })
    }

    /// Clips polygons to this BSP tree.
    ///
    /// Returns the parts of `polygons` that lie outside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let Some(plane) = self.plane else {
            return polygons;
        };
        grow(|| {
            let mut split = Split::default();
            for poly in polygons {
                poly.split_into(&plane, &mut split);
            }

            let mut front = split.front;
            front.append(&mut split.coplanar_front);
            let mut back = split.back;
            back.append(&mut split.coplanar_back);

            let mut result = match &self.front {
                Some(node) => node.clip_polygons(front),
                None => front,
            };
            // Without a back subtree everything behind is inside the solid.
            if let Some(node) = &self.back {
                result.extend(node.clip_polygons(back));
            }
            result
        })
    }

    /// Removes the parts of this tree's polygons that are inside `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        grow(|| {
            self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
            if let Some(front) = self.front.as_mut() {
                front.clip_to(other);
            }
            if let Some(back) = self.back.as_mut() {
                back.clip_to(other);
            }
        })
    }

    /// Collects all polygons from this tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }

        result
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        // Detach children first so no drop recurses.
        let mut stack: Vec<Box<BspNode>> = Vec::new();
        stack.extend(self.front.take());
        stack.extend(self.back.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle(z: f64) -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_bsp_new_empty() {
        let tree = BspNode::new(vec![]);
        assert_eq!(tree.all_polygons().len(), 0);
        assert!(tree.plane.is_none());
    }

    #[test]
    fn test_bsp_keeps_every_polygon() {
        let tree = BspNode::new(vec![triangle(0.0), triangle(1.0), triangle(-1.0)]);
        assert_eq!(tree.all_polygons().len(), 3);
    }

    #[test]
    fn test_bsp_coplanar_share_node() {
        let mut flipped = triangle(0.0);
        flipped.flip();
        let tree = BspNode::new(vec![triangle(0.0), flipped]);
        assert_eq!(tree.polygons.len(), 2);
        assert!(tree.front.is_none() && tree.back.is_none());
    }

    #[test]
    fn test_bsp_invert() {
        let mut tree = BspNode::new(vec![triangle(0.0), triangle(1.0)]);
        tree.invert();
        assert_eq!(tree.polygons[0].plane().normal(), -DVec3::Z);
        assert!(tree.front.is_none());
        assert!(tree.back.is_some());
    }

    #[test]
    fn test_bsp_clip_polygons() {
        let tree = BspNode::new(vec![triangle(0.0)]);
        assert_eq!(tree.clip_polygons(vec![triangle(1.0)]).len(), 1);
        assert!(tree.clip_polygons(vec![triangle(-1.0)]).is_empty());
    }

    #[test]
    fn test_deep_tree_drops() {
        let polygons = (0..5_000).map(|i| triangle(i as f64)).collect();
        let tree = BspNode::new(polygons);
        assert_eq!(tree.all_polygons().len(), 5_000);
        drop(tree);
    }
}
