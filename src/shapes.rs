//! Small closed and open meshes used as fixtures and demos.

use crate::float_types::Real;
use crate::mesh::TriangleMesh;
use nalgebra::Point3;

/// Split a convex quad `[q0, q1, q2, q3]` into the fan `(q0, q1, q2)`, `(q0, q2, q3)`
fn quad(indices: [usize; 4]) -> [[usize; 3]; 2] {
    let [q0, q1, q2, q3] = indices;
    [[q0, q1, q2], [q0, q2, q3]]
}

impl TriangleMesh {
    /// A flat square of side `size` in the XY plane, centered on the origin,
    /// made of two triangles sharing a diagonal. Normal is +Z.
    pub fn square(size: Real) -> TriangleMesh {
        let h = size * 0.5;
        let positions = vec![
            Point3::new(-h, -h, 0.0),
            Point3::new(h, -h, 0.0),
            Point3::new(h, h, 0.0),
            Point3::new(-h, h, 0.0),
        ];
        TriangleMesh::from_triangles(positions, &quad([0, 1, 2, 3]))
    }

    /// A flat `size` x `size` square subdivided into `cells` x `cells` quads
    /// (two triangles each), centered on the origin in the XY plane.
    pub fn grid(size: Real, cells: usize) -> TriangleMesh {
        let cells = cells.max(1);
        let step = size / cells as Real;
        let origin = -size * 0.5;
        let row = cells + 1;

        let mut positions = Vec::with_capacity(row * row);
        for j in 0..=cells {
            for i in 0..=cells {
                positions.push(Point3::new(
                    origin + i as Real * step,
                    origin + j as Real * step,
                    0.0,
                ));
            }
        }

        let mut triangles = Vec::with_capacity(cells * cells * 2);
        for j in 0..cells {
            for i in 0..cells {
                let v00 = j * row + i;
                let v10 = v00 + 1;
                let v11 = v10 + row;
                let v01 = v00 + row;
                triangles.extend(quad([v00, v10, v11, v01]));
            }
        }

        TriangleMesh::from_triangles(positions, &triangles)
    }

    /// A flat square frame: an `outer` square with a concentric `inner`
    /// square hole, in the XY plane. One planar face with two boundary loops.
    pub fn framed_square(outer: Real, inner: Real) -> TriangleMesh {
        let o = outer * 0.5;
        let i = inner * 0.5;
        let positions = vec![
            // outer ring, counter-clockwise
            Point3::new(-o, -o, 0.0),
            Point3::new(o, -o, 0.0),
            Point3::new(o, o, 0.0),
            Point3::new(-o, o, 0.0),
            // inner ring, counter-clockwise
            Point3::new(-i, -i, 0.0),
            Point3::new(i, -i, 0.0),
            Point3::new(i, i, 0.0),
            Point3::new(-i, i, 0.0),
        ];

        let triangles: Vec<[usize; 3]> = [
            [0, 1, 5, 4], // bottom strip
            [1, 2, 6, 5], // right strip
            [2, 3, 7, 6], // top strip
            [3, 0, 4, 7], // left strip
        ]
        .into_iter()
        .flat_map(quad)
        .collect();

        TriangleMesh::from_triangles(positions, &triangles)
    }

    /// An axis-aligned box spanning `(0,0,0)` to `(width, length, height)`,
    /// two triangles per side, wound counter-clockwise seen from outside.
    pub fn cuboid(width: Real, length: Real, height: Real) -> TriangleMesh {
        // Define the eight corner vertices once
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),          // 0: origin
            Point3::new(width, 0.0, 0.0),        // 1: +X
            Point3::new(width, length, 0.0),     // 2: +X+Y
            Point3::new(0.0, length, 0.0),       // 3: +Y
            Point3::new(0.0, 0.0, height),       // 4: +Z
            Point3::new(width, 0.0, height),     // 5: +X+Z
            Point3::new(width, length, height),  // 6: +X+Y+Z
            Point3::new(0.0, length, height),    // 7: +Y+Z
        ];

        let triangles: Vec<[usize; 3]> = [
            [0, 3, 2, 1], // Bottom face
            [4, 5, 6, 7], // Top face
            [0, 1, 5, 4], // Front face
            [3, 7, 6, 2], // Back face
            [0, 4, 7, 3], // Left face
            [1, 2, 6, 5], // Right face
        ]
        .into_iter()
        .flat_map(quad)
        .collect();

        TriangleMesh::from_triangles(positions, &triangles)
    }

    pub fn cube(size: Real) -> TriangleMesh {
        Self::cuboid(size, size, size)
    }

    /// A regular tetrahedron inscribed in the cube `[-size, size]^3`.
    pub fn tetrahedron(size: Real) -> TriangleMesh {
        let s = size;
        let positions = vec![
            Point3::new(s, s, s),
            Point3::new(s, -s, -s),
            Point3::new(-s, s, -s),
            Point3::new(-s, -s, s),
        ];
        TriangleMesh::from_triangles(positions, &[[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]])
    }
}
