//! A trait for any shape which can be represented by triangles
use crate::float_types::{EPSILON, Real};
use crate::mesh::TriangleMesh;
use nalgebra::{Point3, Vector3};

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each triangle.
    ///
    /// The triangle is `[p0, p1, p2]` together with its facet normal.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Point3<Real>; 3], Vector3<Real>);
}

/// Unit normal of a counter-clockwise triangle, or zero when it has no area.
pub fn facet_normal([a, b, c]: &[Point3<Real>; 3]) -> Vector3<Real> {
    (b - a).cross(&(c - a)).try_normalize(EPSILON).unwrap_or_else(Vector3::zeros)
}

impl Triangulated3D for TriangleMesh {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Point3<Real>; 3], Vector3<Real>),
    {
        for tri in self.triangle_positions() {
            f(tri, facet_normal(&tri));
        }
    }
}
