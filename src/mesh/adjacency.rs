//! Edge-to-triangle adjacency.
//!
//! Built once during ingestion so the face grouper can find the triangles
//! across an edge without scanning the whole triangle array.

use crate::mesh::triangle::{Side, Triangle};
use hashbrown::HashMap;

/// Maps every side (order-independent) to the triangles that use it, in
/// ascending triangle order. A manifold edge has two entries, a boundary edge
/// one, a non-manifold edge three or more.
#[derive(Debug, Clone, Default)]
pub struct EdgeAdjacency {
    edge_to_triangles: HashMap<Side, Vec<usize>>,
}

impl EdgeAdjacency {
    pub fn build(triangles: &[Triangle]) -> Self {
        let mut edge_to_triangles: HashMap<Side, Vec<usize>> =
            HashMap::with_capacity(triangles.len() * 3 / 2);

        for (tri_idx, tri) in triangles.iter().enumerate() {
            for side in tri.sides() {
                let users = edge_to_triangles.entry(side).or_default();
                // A collapsed triangle can list the same side twice.
                if users.last() != Some(&tri_idx) {
                    users.push(tri_idx);
                }
            }
        }

        Self { edge_to_triangles }
    }

    /// Triangles using `side`; empty if the side is not in the mesh
    pub fn triangles_for_side(&self, side: &Side) -> &[usize] {
        self.edge_to_triangles
            .get(side)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Triangles across `side` from `tri_idx`
    pub fn neighbors(&self, tri_idx: usize, side: &Side) -> impl Iterator<Item = usize> + '_ {
        self.triangles_for_side(side)
            .iter()
            .copied()
            .filter(move |&t| t != tri_idx)
    }

    /// Number of distinct edges
    pub fn edge_count(&self) -> usize {
        self.edge_to_triangles.len()
    }

    /// Iterate over `(side, triangles)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&Side, &[usize])> + '_ {
        self.edge_to_triangles
            .iter()
            .map(|(side, tris)| (side, tris.as_slice()))
    }

    /// Count edges used by exactly one triangle
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_to_triangles
            .values()
            .filter(|tris| tris.len() == 1)
            .count()
    }

    /// Count edges used by more than two triangles
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_to_triangles
            .values()
            .filter(|tris| tris.len() > 2)
            .count()
    }
}
