//! `TriangleMesh` struct: the input and output shape of the wireframe pipeline

use crate::errors::ValidationError;
use crate::float_types::Real;
use nalgebra::{Matrix4, Point3, Vector3};

pub mod adjacency;
pub mod ingest;
pub mod manifold;
pub mod triangle;
pub mod vertex;

pub use adjacency::EdgeAdjacency;
pub use ingest::{IngestedMesh, ingest};
pub use manifold::ManifoldAnalysis;
pub use triangle::{Side, Triangle};
pub use vertex::VertexPool;

/// A plain triangle soup: vertex positions plus a flat index array whose
/// length is a multiple of 3.
///
/// Positions may repeat; ingestion deduplicates them by exact value. The
/// emitted ribbon uses the same type with already-deduplicated positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions
    pub positions: Vec<Point3<Real>>,

    /// Triangle index triples, flattened
    pub indices: Vec<usize>,
}

impl TriangleMesh {
    pub const fn new() -> Self {
        TriangleMesh {
            positions: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Build a mesh from positions and explicit index triples
    pub fn from_triangles(positions: Vec<Point3<Real>>, triangles: &[[usize; 3]]) -> Self {
        TriangleMesh {
            positions,
            indices: triangles.iter().flatten().copied().collect(),
        }
    }

    /// Number of whole triangles described by `indices`
    pub const fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over index triples. A trailing partial triple is ignored; call
    /// [`TriangleMesh::validate`] first when the input is untrusted.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Iterate over the corner positions of each triangle
    pub fn triangle_positions(&self) -> impl Iterator<Item = [Point3<Real>; 3]> + '_ {
        self.triangles()
            .map(|[a, b, c]| [self.positions[a], self.positions[b], self.positions[c]])
    }

    /// Check that the index array describes whole triangles, that every index
    /// is in range and that every referenced coordinate is finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.indices.len() % 3 != 0 {
            return Err(ValidationError::IndexCount {
                len: self.indices.len(),
            });
        }

        for &index in &self.indices {
            let Some(pos) = self.positions.get(index) else {
                return Err(ValidationError::IndexOutOfRange {
                    index,
                    vertex_count: self.positions.len(),
                });
            };
            if !(pos.x.is_finite() && pos.y.is_finite() && pos.z.is_finite()) {
                return Err(ValidationError::InvalidCoordinate(*pos));
            }
        }

        Ok(())
    }

    /// Apply an arbitrary 3D transform (as a 4x4 matrix) to every position.
    pub fn transform(&self, matrix: &Matrix4<Real>) -> TriangleMesh {
        TriangleMesh {
            positions: self
                .positions
                .iter()
                .map(|p| matrix.transform_point(p))
                .collect(),
            indices: self.indices.clone(),
        }
    }

    /// Returns a new mesh translated by x, y, and z.
    pub fn translate(&self, x: Real, y: Real, z: Real) -> TriangleMesh {
        self.transform(&Matrix4::new_translation(&Vector3::new(x, y, z)))
    }
}
