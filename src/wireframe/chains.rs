//! Linking a face's boundary edges into ordered loops.

use crate::wireframe::faces::{BoundaryEdge, Face};
use hashbrown::HashMap;
use log::{debug, warn};
use std::collections::BTreeSet;

/// One step of a boundary walk: the edge `a -> b`, owned by `triangle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainNode {
    pub triangle: usize,
    pub a: usize,
    pub b: usize,
}

/// An ordered walk around one boundary loop of one face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub face: usize,
    pub nodes: Vec<ChainNode>,
}

impl Chain {
    /// A chain is closed when its last edge ends where its first edge starts.
    pub fn is_closed(&self) -> bool {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(first), Some(last)) => last.b == first.a,
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Chains of one face together with what the walk noticed on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceChains {
    pub chains: Vec<Chain>,
    /// Boundary vertices touched by more than two boundary edges of the face
    pub non_manifold_vertices: usize,
}

/// Walk the boundary of `face` into chains.
///
/// A chain starts at the earliest remaining boundary edge, oriented the way
/// its triangle winds it, and repeatedly extends from its trailing vertex
/// through a remaining edge that touches it. Consumed edges leave the working
/// set, so the outer loop ends when the set is empty.
///
/// Where more than two boundary edges meet at one vertex the walk continues
/// through the earliest remaining edge that leaves the vertex in its
/// triangle's winding, and only takes an edge against its winding when none
/// is left. Such vertices are counted in [`FaceChains::non_manifold_vertices`].
pub fn build_chains(face: &Face) -> FaceChains {
    let edges = &face.boundary;

    let mut incident: HashMap<usize, Vec<usize>> = HashMap::new();
    for (edge_idx, edge) in edges.iter().enumerate() {
        incident.entry(edge.side.a).or_default().push(edge_idx);
        if edge.side.b != edge.side.a {
            incident.entry(edge.side.b).or_default().push(edge_idx);
        }
    }
    let non_manifold_vertices = incident.values().filter(|e| e.len() > 2).count();

    let mut remaining: BTreeSet<usize> = (0..edges.len()).collect();
    let mut chains = Vec::new();

    while let Some(start) = remaining.pop_first() {
        let first = edges[start];
        let mut trailing = first.side.b;
        let mut nodes = vec![ChainNode {
            triangle: first.triangle,
            a: first.side.a,
            b: trailing,
        }];

        while let Some(next) = next_edge(edges, &incident, &remaining, trailing) {
            remaining.remove(&next);
            let edge = edges[next];
            let leading = trailing;
            trailing = edge.side.other(leading).unwrap_or(leading);
            nodes.push(ChainNode {
                triangle: edge.triangle,
                a: leading,
                b: trailing,
            });
        }

        chains.push(Chain {
            face: face.id,
            nodes,
        });
    }

    let open = chains.iter().filter(|c| !c.is_closed()).count();
    if non_manifold_vertices > 0 || open > 0 {
        warn!(
            "face {}: {} non-manifold boundary vertices, {} open chains",
            face.id, non_manifold_vertices, open
        );
    }
    debug!("face {}: {} chains", face.id, chains.len());

    FaceChains {
        chains,
        non_manifold_vertices,
    }
}

/// Earliest remaining edge at `vertex` that starts there, else the earliest
/// remaining edge at all.
fn next_edge(
    edges: &[BoundaryEdge],
    incident: &HashMap<usize, Vec<usize>>,
    remaining: &BTreeSet<usize>,
    vertex: usize,
) -> Option<usize> {
    let mut available = incident
        .get(&vertex)?
        .iter()
        .copied()
        .filter(|e| remaining.contains(e));
    let first = available.next()?;
    if edges[first].side.a == vertex {
        return Some(first);
    }
    Some(available.find(|&e| edges[e].side.a == vertex).unwrap_or(first))
}
