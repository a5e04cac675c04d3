//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use meshwire::{TriangleMesh, float_types::Real};
use nalgebra::Point3;

/// Returns the bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]`
/// of a set of positions.
pub fn bounding_box(positions: &[Point3<Real>]) -> [Real; 6] {
    let mut bb = [Real::MAX, Real::MAX, Real::MAX, Real::MIN, Real::MIN, Real::MIN];
    for p in positions {
        for axis in 0..3 {
            bb[axis] = bb[axis].min(p[axis]);
            bb[axis + 3] = bb[axis + 3].max(p[axis]);
        }
    }
    bb
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Distance from `p` to the infinite line through `a` and `b`.
pub fn distance_to_line(p: &Point3<Real>, a: &Point3<Real>, b: &Point3<Real>) -> Real {
    let dir = (b - a).normalize();
    let rel = p - a;
    (rel - dir * rel.dot(&dir)).norm()
}

/// Build a mesh from literal triangles, one fresh position per corner.
pub fn soup(triangles: &[[[Real; 3]; 3]]) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    for tri in triangles {
        for corner in tri {
            mesh.indices.push(mesh.positions.len());
            mesh.positions.push(Point3::from(*corner));
        }
    }
    mesh
}

/// `true` when every position of `mesh` lies on the plane `z = const`.
pub fn lies_on_plane_z(mesh: &TriangleMesh, z: Real, eps: Real) -> bool {
    mesh.positions.iter().all(|p| approx_eq(p.z, z, eps))
}
