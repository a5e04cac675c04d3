//! Triangle records and their sides

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};
use std::hash::{Hash, Hasher};

/// One triangle edge, given as two vertex indices.
///
/// The pair keeps the order it was created with (so a boundary walk knows
/// which end it started from), but equality and hashing ignore the order:
/// `Side::new(1, 2) == Side::new(2, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct Side {
    pub a: usize,
    pub b: usize,
}

impl Side {
    pub const fn new(a: usize, b: usize) -> Self {
        Side { a, b }
    }

    /// Canonical (smaller index first) form of this side
    pub const fn key(&self) -> (usize, usize) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    /// The endpoint that is not `vertex`, or `None` if `vertex` is not on this side
    pub const fn other(&self, vertex: usize) -> Option<usize> {
        if self.a == vertex {
            Some(self.b)
        } else if self.b == vertex {
            Some(self.a)
        } else {
            None
        }
    }
}

impl PartialEq for Side {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Side {}

impl Hash for Side {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// A triangle of the ingested mesh.
///
/// `face` starts out `None` and is written exactly once by the face grouper.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Indices into the deduplicated vertex array
    pub indices: [usize; 3],
    /// Unit face normal, `(v1 - v0) x (v2 - v0)` normalized. NaN-bearing for
    /// zero-area triangles.
    pub normal: Vector3<Real>,
    /// Planar face this triangle was grouped into
    pub face: Option<usize>,
}

impl Triangle {
    /// Build a triangle record, computing its normal from `vertices`.
    pub fn new(indices: [usize; 3], vertices: &[Point3<Real>]) -> Self {
        let [v0, v1, v2] = indices.map(|i| vertices[i]);
        Triangle {
            indices,
            normal: (v1 - v0).cross(&(v2 - v0)).normalize(),
            face: None,
        }
    }

    /// The three sides in winding order: `(a, b)`, `(b, c)`, `(c, a)`
    pub const fn sides(&self) -> [Side; 3] {
        let [a, b, c] = self.indices;
        [Side::new(a, b), Side::new(b, c), Side::new(c, a)]
    }

    /// The vertex opposite the side `(v1, v2)`.
    ///
    /// Returns the first corner that is neither `v1` nor `v2`; a triangle with
    /// collapsed indices falls back to its first corner.
    pub fn opposite(&self, v1: usize, v2: usize) -> usize {
        self.indices
            .iter()
            .copied()
            .find(|&v| v != v1 && v != v2)
            .unwrap_or(self.indices[0])
    }

    /// Zero-area (or otherwise degenerate) triangles have no usable normal
    pub fn is_degenerate(&self) -> bool {
        !(self.normal.x.is_finite() && self.normal.y.is_finite() && self.normal.z.is_finite())
    }

    /// `|n1 - n2|^2`, the cheap proxy for the angle between two unit normals
    pub fn normal_distance_squared(&self, other: &Triangle) -> Real {
        (self.normal - other.normal).norm_squared()
    }
}
