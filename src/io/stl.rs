use crate::float_types::Real;
use crate::mesh::TriangleMesh;
use crate::triangulated::Triangulated3D;
use nalgebra::Point3;
use std::io::Cursor;

/// Export to ASCII STL
/// Convert a triangulated shape to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use meshwire::TriangleMesh;
/// let mesh = TriangleMesh::cube(1.0);
/// let text = mesh.to_stl_ascii("my_solid");
/// assert!(text.starts_with("solid my_solid"));
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri, n| {
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for p in &tri {
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// The 80-byte header of a binary STL carries no name, so `_name` is unused.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T, _name: &str) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri, n| {
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
            });
        }
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl TriangleMesh {
    /// Read a mesh from ASCII or binary STL data using `stl_io`.
    ///
    /// Every facet contributes three fresh positions; shared corners are
    /// merged later, when the mesh is ingested. Stored facet normals are
    /// ignored in favour of the winding.
    pub fn from_stl(stl_data: &[u8]) -> std::io::Result<TriangleMesh> {
        let mut cursor = Cursor::new(stl_data);
        let stl_reader = stl_io::create_stl_reader(&mut cursor)?;

        let mut mesh = TriangleMesh::new();
        for tri_result in stl_reader {
            let tri = tri_result?;
            for v in tri.vertices {
                mesh.indices.push(mesh.positions.len());
                mesh.positions
                    .push(Point3::new(v[0] as Real, v[1] as Real, v[2] as Real));
            }
        }

        Ok(mesh)
    }

    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }

    pub fn to_stl_binary(&self, name: &str) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self, name)
    }
}
