//! Assembly of the ribbon triangles into a deduplicated output mesh.

use crate::mesh::{IngestedMesh, TriangleMesh, VertexPool};
use crate::wireframe::offset::ResolvedChain;

/// Accumulates ribbon quads into one shared vertex/index buffer.
#[derive(Debug, Default)]
pub struct RibbonBuilder {
    pool: VertexPool,
    indices: Vec<usize>,
}

impl RibbonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit two triangles per node of `resolved`.
    ///
    /// With `A`, `B` the original edge endpoints and `A'`, `B'` their offset
    /// vertices, each node becomes the quad
    ///
    /// ```text
    /// (A', A, B)  and  (B, B', A')
    /// ```
    ///
    /// so every quad of every chain shares one winding.
    pub fn add_chain(&mut self, mesh: &IngestedMesh, resolved: &ResolvedChain) {
        for (node, [offset_a, offset_b]) in resolved.chain.nodes.iter().zip(&resolved.offsets) {
            let orig_a = self.pool.find_or_insert(mesh.vertices[node.a]);
            let orig_b = self.pool.find_or_insert(mesh.vertices[node.b]);
            let wire_a = self.pool.find_or_insert(*offset_a);
            let wire_b = self.pool.find_or_insert(*offset_b);

            self.indices.extend([wire_a, orig_a, orig_b]);
            self.indices.extend([orig_b, wire_b, wire_a]);
        }
    }

    pub const fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn build(self) -> TriangleMesh {
        TriangleMesh {
            positions: self.pool.into_positions(),
            indices: self.indices,
        }
    }
}

/// Emit every resolved chain into one ribbon mesh.
pub fn emit_ribbon(mesh: &IngestedMesh, chains: &[ResolvedChain]) -> TriangleMesh {
    let mut builder = RibbonBuilder::new();
    for resolved in chains {
        builder.add_chain(mesh, resolved);
    }
    builder.build()
}
