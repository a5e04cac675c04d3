//! Manifold validation and topology analysis over the ingested mesh

use crate::mesh::ingest::IngestedMesh;
use crate::mesh::triangle::{Side, Triangle};

/// **Manifold Topology Report**
///
/// The wireframe pipeline does not require manifold input: open or
/// non-manifold meshes still produce a ribbon, only some corners and chains
/// become approximate. This report lets callers tell the two situations apart.
///
/// ## **Properties Reported**
/// 1. **Edge Manifold**: each edge shared by exactly 2 triangles
/// 2. **Orientation Consistency**: adjacent triangles traverse their shared edge in opposite directions
/// 3. **Boundary Detection**: edges used by a single triangle
/// 4. **Connectivity**: number of edge-connected components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifoldAnalysis {
    /// Whether the mesh is a closed, consistently oriented 2-manifold
    pub is_manifold: bool,
    /// Number of boundary edges (0 for closed manifolds)
    pub boundary_edges: usize,
    /// Number of non-manifold edges (shared by >2 triangles)
    pub non_manifold_edges: usize,
    /// Number of connected components
    pub connected_components: usize,
    /// Whether all triangles have consistent orientation
    pub consistent_orientation: bool,
    /// Euler characteristic (V - E + F)
    pub euler_characteristic: i64,
}

impl IngestedMesh {
    /// **Comprehensive Manifold Analysis**
    ///
    /// Uses the edge adjacency built at ingestion, so every query is a
    /// direct index lookup:
    /// - **Euler Characteristic**: χ = V - E + F (2 for a closed sphere-like mesh)
    /// - **Manifold Violations**: boundary and non-manifold edges
    /// - **Orientation**: winding agreement across shared edges
    /// - **Connectivity**: union of triangles reachable across edges
    pub fn analyze_manifold(&self) -> ManifoldAnalysis {
        let boundary_edges = self.adjacency.boundary_edge_count();
        let non_manifold_edges = self.adjacency.non_manifold_edge_count();

        let consistent_orientation = self.check_orientation_consistency();
        let connected_components = self.count_connected_components();

        let euler_characteristic = self.vertices.len() as i64 - self.adjacency.edge_count() as i64
            + self.triangles.len() as i64;

        let is_manifold =
            boundary_edges == 0 && non_manifold_edges == 0 && consistent_orientation;

        ManifoldAnalysis {
            is_manifold,
            boundary_edges,
            non_manifold_edges,
            connected_components,
            consistent_orientation,
            euler_characteristic,
        }
    }

    /// Check orientation consistency across adjacent triangles
    fn check_orientation_consistency(&self) -> bool {
        self.adjacency
            .iter()
            .filter(|(_, tris)| tris.len() == 2)
            .all(|(side, tris)| {
                let first = edge_direction(&self.triangles[tris[0]], side);
                let second = edge_direction(&self.triangles[tris[1]], side);
                // Adjacent triangles should walk the shared edge in opposite directions
                match (first, second) {
                    (Some(d1), Some(d2)) => d1 != d2,
                    _ => true,
                }
            })
    }

    /// Count connected components with an explicit depth-first stack
    fn count_connected_components(&self) -> usize {
        let mut visited = vec![false; self.triangles.len()];
        let mut components = 0;
        let mut stack = Vec::new();

        for seed in 0..self.triangles.len() {
            if visited[seed] {
                continue;
            }
            components += 1;
            visited[seed] = true;
            stack.push(seed);

            while let Some(tri_idx) = stack.pop() {
                for side in self.triangles[tri_idx].sides() {
                    for neighbor in self.adjacency.neighbors(tri_idx, &side) {
                        if !visited[neighbor] {
                            visited[neighbor] = true;
                            stack.push(neighbor);
                        }
                    }
                }
            }
        }

        components
    }
}

/// `Some(true)` if `tri` walks `side` as `a -> b`, `Some(false)` for `b -> a`
fn edge_direction(tri: &Triangle, side: &Side) -> Option<bool> {
    tri.sides().iter().find_map(|s| {
        if s.a == side.a && s.b == side.b {
            Some(true)
        } else if s.a == side.b && s.b == side.a {
            Some(false)
        } else {
            None
        }
    })
}
