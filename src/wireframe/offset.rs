//! Offset lines and mitered corners of the wireframe ribbon.

use crate::float_types::Real;
use crate::mesh::IngestedMesh;
use crate::wireframe::chains::{Chain, ChainNode};
use crate::wireframe::config::WireframeConfig;
use nalgebra::{Point3, Vector3};

/// A boundary edge `a -> b` shifted within its triangle's plane.
///
/// `begin` is the shifted `b`, `end` the shifted `a`: the line runs against
/// the walk so that `begin` sits at the corner shared with the next node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetLine {
    pub begin: Point3<Real>,
    pub end: Point3<Real>,
}

/// How a ribbon corner was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Corner {
    /// The two offset lines meet (their closest points agree within tolerance)
    Intersection(Point3<Real>),
    /// The lines are (nearly) parallel; the first line's `begin` stands in
    Parallel(Point3<Real>),
    /// The lines pass each other without meeting; the first line's `begin` stands in
    Skew(Point3<Real>),
}

impl Corner {
    pub const fn point(&self) -> Point3<Real> {
        match *self {
            Corner::Intersection(p) | Corner::Parallel(p) | Corner::Skew(p) => p,
        }
    }

    /// `true` for the two fallback kinds
    pub const fn is_approximate(&self) -> bool {
        !matches!(self, Corner::Intersection(_))
    }
}

/// A chain with both ribbon vertices of every node resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedChain {
    pub chain: Chain,
    /// `offsets[i]` is `[offset_a, offset_b]` of `chain.nodes[i]`
    pub offsets: Vec<[Point3<Real>; 2]>,
    /// Corners that fell back to the parallel approximation
    pub parallel_corners: usize,
    /// Corners that fell back to the non-intersecting approximation
    pub skew_corners: usize,
}

/// **Offset Line of a Boundary Edge**
///
/// The shift direction `d` lies in the plane of the owning triangle,
/// perpendicular to the edge, and points to the side of the edge where the
/// triangle's third vertex lies, so the ribbon covers the face it outlines:
///
/// ```text
/// d = n x t,   flipped if d · (c - a) < 0
/// ```
///
/// `d` is then re-orthogonalized against `n` and `t̂` (Gram–Schmidt) and
/// scaled to `width`. A zero-area triangle has no plane and yields NaN.
pub fn offset_line(mesh: &IngestedMesh, node: &ChainNode, width: Real) -> OffsetLine {
    let tri = &mesh.triangles[node.triangle];
    let a = mesh.vertices[node.a];
    let b = mesh.vertices[node.b];
    let c = mesh.vertices[tri.opposite(node.a, node.b)];

    let normal = tri.normal;
    let tangent = (b - a).normalize();

    let mut dir = normal.cross(&tangent);
    if dir.dot(&(c - a)) < 0.0 {
        dir = -dir;
    }
    dir -= normal * normal.dot(&dir);
    dir -= tangent * tangent.dot(&dir);

    let shift: Vector3<Real> = dir.normalize() * width;
    OffsetLine {
        begin: b + shift,
        end: a + shift,
    }
}

/// **Closest-Approach Intersection of Two 3D Lines**
///
/// For lines `A1 + s·dA` and `B1 + t·dB` with `w = A1 - B1`:
///
/// ```text
/// denom = |dA|²·|dB|² - (dA·dB)²
/// s     = ((dB·w)(dA·dB) - (dA·w)|dB|²) / denom
/// t     = ((dB·w) + (dA·dB)·s) / |dB|²
/// ```
///
/// - `|denom| < parallel`: [`Corner::Parallel`] at `first.begin`.
/// - closest points further apart than `tolerance` (squared): [`Corner::Skew`]
///   at `first.begin`.
/// - otherwise [`Corner::Intersection`] at the closest point on `first`.
pub fn intersect(
    first: &OffsetLine,
    second: &OffsetLine,
    parallel: Real,
    tolerance: Real,
) -> Corner {
    let dir_a = first.end - first.begin;
    let dir_b = second.end - second.begin;
    let diff = first.begin - second.begin;

    let ab = dir_a.dot(&dir_b);
    let ad = dir_a.dot(&diff);
    let bd = dir_b.dot(&diff);
    let sqr_a = dir_a.norm_squared();
    let sqr_b = dir_b.norm_squared();

    let denom = sqr_a * sqr_b - ab * ab;
    // NaN-bearing lines fail this comparison and fall through to the parallel case.
    if !(denom.abs() >= parallel) {
        return Corner::Parallel(first.begin);
    }

    let k_a = (bd * ab - ad * sqr_b) / denom;
    let k_b = (bd + ab * k_a) / sqr_b;

    let cross_a = first.begin + dir_a * k_a;
    let cross_b = second.begin + dir_b * k_b;

    if (cross_b - cross_a).norm_squared() < tolerance {
        Corner::Intersection(cross_a)
    } else {
        // TODO: insert a bevel triangle here instead of snapping to `first.begin`
        // when the miter of a sharp convex corner misses both segments.
        Corner::Skew(first.begin)
    }
}

/// **Mitered Corner Resolution for One Chain**
///
/// Corner `i` joins node `i - 1` to node `i` and is
/// `intersect(line[i - 1], line[i])`; the fallback point `line[i - 1].begin`
/// is the previous edge's shifted endpoint, which is this same corner.
/// Node `i` spans corners `i` and `i + 1`.
///
/// Closed chains wrap: corner `0` joins the last node back to the first.
/// An open chain has no node before its first or after its last, so its two
/// free ends use the plain shifted endpoints `line[0].end` and
/// `line[n - 1].begin`.
pub fn resolve_chain(mesh: &IngestedMesh, chain: Chain, config: &WireframeConfig) -> ResolvedChain {
    let n = chain.nodes.len();
    let closed = chain.is_closed();
    let lines: Vec<OffsetLine> = chain
        .nodes
        .iter()
        .map(|node| offset_line(mesh, node, config.wire_line_width))
        .collect();

    let mut parallel_corners = 0;
    let mut skew_corners = 0;
    let mut corners = Vec::with_capacity(n + 1);

    for i in 0..n {
        if i == 0 && !closed {
            corners.push(lines[0].end);
            continue;
        }
        let prev = &lines[(i + n - 1) % n];
        let corner = intersect(
            prev,
            &lines[i],
            config.cross_line_parallel,
            config.cross_line_tolerance,
        );
        match corner {
            Corner::Parallel(_) => parallel_corners += 1,
            Corner::Skew(_) => skew_corners += 1,
            Corner::Intersection(_) => {},
        }
        corners.push(corner.point());
    }

    let seam = if closed {
        corners.first().copied()
    } else {
        lines.last().map(|last| last.begin)
    };
    corners.extend(seam);

    let offsets = corners.windows(2).map(|w| [w[0], w[1]]).collect();

    ResolvedChain {
        chain,
        offsets,
        parallel_corners,
        skew_corners,
    }
}

/// Resolve every chain, in order.
#[cfg(not(feature = "parallel"))]
pub fn resolve_chains(
    mesh: &IngestedMesh,
    chains: Vec<Chain>,
    config: &WireframeConfig,
) -> Vec<ResolvedChain> {
    chains
        .into_iter()
        .map(|chain| resolve_chain(mesh, chain, config))
        .collect()
}

/// Resolve every chain in parallel, keeping chain order.
#[cfg(feature = "parallel")]
pub fn resolve_chains(
    mesh: &IngestedMesh,
    chains: Vec<Chain>,
    config: &WireframeConfig,
) -> Vec<ResolvedChain> {
    use rayon::prelude::*;

    chains
        .into_par_iter()
        .map(|chain| resolve_chain(mesh, chain, config))
        .collect()
}
