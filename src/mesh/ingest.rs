//! Mesh ingestion: deduplicate positions, build triangle records and the
//! edge adjacency index.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::adjacency::EdgeAdjacency;
use crate::mesh::triangle::Triangle;
use crate::mesh::vertex::VertexPool;
use crate::mesh::TriangleMesh;
use log::debug;
use nalgebra::Point3;

/// Pipeline state produced by ingestion and consumed by every later stage.
#[derive(Debug, Clone, Default)]
pub struct IngestedMesh {
    /// Deduplicated vertex positions
    pub vertices: Vec<Point3<Real>>,
    /// One record per input triangle, in input order
    pub triangles: Vec<Triangle>,
    /// Edge to triangles lookup over `triangles`
    pub adjacency: EdgeAdjacency,
}

impl IngestedMesh {
    /// Corner positions of every triangle in order, i.e. the input point
    /// sequence reconstructed from the deduplicated vertex array.
    pub fn expand(&self) -> Vec<Point3<Real>> {
        self.triangles
            .iter()
            .flat_map(|tri| tri.indices.map(|i| self.vertices[i]))
            .collect()
    }

    /// Number of zero-area triangles (NaN normals)
    pub fn degenerate_triangle_count(&self) -> usize {
        self.triangles.iter().filter(|t| t.is_degenerate()).count()
    }

    /// Face label of every triangle
    pub fn face_labels(&self) -> Vec<Option<usize>> {
        self.triangles.iter().map(|t| t.face).collect()
    }

    /// Forget all face labels so the mesh can be grouped again
    pub fn reset_faces(&mut self) {
        for tri in &mut self.triangles {
            tri.face = None;
        }
    }
}

/// Validate `mesh` and turn it into deduplicated pipeline state.
///
/// Every triangle corner is looked up in a [`VertexPool`] by exact value,
/// so two input vertices with identical coordinates become one vertex even
/// when the input indexed them separately.
pub fn ingest(mesh: &TriangleMesh) -> Result<IngestedMesh, ValidationError> {
    mesh.validate()?;

    let mut pool = VertexPool::with_capacity(mesh.positions.len());
    let corner_indices: Vec<[usize; 3]> = mesh
        .triangles()
        .map(|tri| tri.map(|i| pool.find_or_insert(mesh.positions[i])))
        .collect();

    let vertices = pool.into_positions();
    let triangles: Vec<Triangle> = corner_indices
        .into_iter()
        .map(|indices| Triangle::new(indices, &vertices))
        .collect();
    let adjacency = EdgeAdjacency::build(&triangles);

    debug!(
        "ingested {} triangles over {} unique vertices ({} input positions, {} edges)",
        triangles.len(),
        vertices.len(),
        mesh.positions.len(),
        adjacency.edge_count()
    );

    Ok(IngestedMesh {
        vertices,
        triangles,
        adjacency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    /// Two triangles of a unit square, emitted as a triangle soup (6 positions).
    fn soup_square() -> TriangleMesh {
        let p = |x, y| Point3::new(x, y, 0.0);
        TriangleMesh {
            positions: vec![
                p(0.0, 0.0),
                p(1.0, 0.0),
                p(1.0, 1.0),
                p(0.0, 0.0),
                p(1.0, 1.0),
                p(0.0, 1.0),
            ],
            indices: (0..6).collect(),
        }
    }

    #[test]
    fn duplicate_positions_are_merged() {
        let ingested = ingest(&soup_square()).expect("valid mesh");
        assert_eq!(ingested.vertices.len(), 4);
        assert_eq!(ingested.triangles.len(), 2);
        assert_eq!(ingested.triangles[0].indices, [0, 1, 2]);
        assert_eq!(ingested.triangles[1].indices, [0, 2, 3]);
        assert_eq!(ingested.adjacency.edge_count(), 5);
    }

    #[test]
    fn normals_are_unit_length() {
        let ingested = ingest(&soup_square()).expect("valid mesh");
        for tri in &ingested.triangles {
            assert!((tri.normal - Vector3::z()).norm() < 1e-6);
            assert_eq!(tri.face, None);
        }
    }

    #[test]
    fn expand_reproduces_the_input_corners() {
        let mesh = soup_square();
        let ingested = ingest(&mesh).expect("valid mesh");
        assert_eq!(ingested.expand(), mesh.positions);
    }

    #[test]
    fn invalid_index_count_is_rejected() {
        let mut mesh = soup_square();
        mesh.indices.truncate(5);
        assert_eq!(
            ingest(&mesh).unwrap_err(),
            ValidationError::IndexCount { len: 5 }
        );
    }

    #[test]
    fn degenerate_triangles_are_kept_and_counted() {
        let mesh = TriangleMesh::from_triangles(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
            ],
            &[[0, 1, 2]],
        );
        let ingested = ingest(&mesh).expect("valid mesh");
        assert_eq!(ingested.triangles.len(), 1);
        assert_eq!(ingested.degenerate_triangle_count(), 1);
    }
}
