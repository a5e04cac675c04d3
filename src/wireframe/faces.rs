//! Grouping of adjacent, nearly coplanar triangles into faces.

use crate::float_types::Real;
use crate::mesh::{IngestedMesh, Side};
use hashbrown::HashMap;
use log::debug;

/// A triangle side on the boundary of a face, remembered together with the
/// triangle that contributed it. The side keeps that triangle's winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryEdge {
    pub triangle: usize,
    pub side: Side,
}

/// A maximal edge-connected group of triangles whose neighbouring normals
/// are within the planar tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub id: usize,
    /// Member triangles in discovery order; the first one seeded the face
    pub triangles: Vec<usize>,
    /// Sides used by exactly one member triangle, in insertion order
    pub boundary: Vec<BoundaryEdge>,
}

/// Symmetric-difference edge set with stable insertion order.
///
/// Toggling a side that is present removes it (it is shared by two member
/// triangles, so it is interior); toggling an absent side appends it.
#[derive(Debug, Default)]
struct BoundarySet {
    slots: Vec<Option<BoundaryEdge>>,
    position: HashMap<Side, usize>,
}

impl BoundarySet {
    fn toggle(&mut self, edge: BoundaryEdge) {
        if let Some(slot) = self.position.remove(&edge.side) {
            self.slots[slot] = None;
        } else {
            self.position.insert(edge.side, self.slots.len());
            self.slots.push(Some(edge));
        }
    }

    fn into_edges(self) -> Vec<BoundaryEdge> {
        self.slots.into_iter().flatten().collect()
    }
}

/// **Planar Face Grouping by Flood Fill**
///
/// Repeatedly seeds a new face at the first unlabelled triangle and grows it
/// across shared edges:
///
/// - a neighbour across side `s` joins the face when it is still unlabelled
///   and `|n_current - n_neighbour|^2 < planar_tolerance`;
/// - otherwise `s` is toggled in the face's boundary set.
///
/// A side two member triangles share is either the side one was discovered
/// through (never recorded) or toggled by both (recorded, then removed), so
/// the final set holds exactly the sides owned by one member triangle.
///
/// The traversal uses an explicit stack; each triangle is pushed at most once
/// because it is labelled when discovered. Triangles that already carry a
/// label are never relabelled, so running this again on a grouped mesh
/// returns no new faces.
pub fn group_faces(mesh: &mut IngestedMesh, planar_tolerance: Real) -> Vec<Face> {
    let IngestedMesh {
        triangles,
        adjacency,
        ..
    } = mesh;

    let first_id = triangles
        .iter()
        .filter_map(|t| t.face)
        .max()
        .map_or(0, |id| id + 1);

    let mut faces = Vec::new();
    let mut stack: Vec<(usize, Option<Side>)> = Vec::new();

    for seed in 0..triangles.len() {
        if triangles[seed].face.is_some() {
            continue;
        }

        let face_id = first_id + faces.len();
        triangles[seed].face = Some(face_id);

        let mut members = vec![seed];
        let mut boundary = BoundarySet::default();
        stack.push((seed, None));

        while let Some((tri_idx, entered_through)) = stack.pop() {
            for side in triangles[tri_idx].sides() {
                if entered_through == Some(side) {
                    continue;
                }

                let joined = adjacency.neighbors(tri_idx, &side).find(|&n| {
                    triangles[n].face.is_none()
                        && triangles[tri_idx].normal_distance_squared(&triangles[n])
                            < planar_tolerance
                });

                match joined {
                    Some(neighbor) => {
                        triangles[neighbor].face = Some(face_id);
                        members.push(neighbor);
                        stack.push((neighbor, Some(side)));
                    },
                    None => boundary.toggle(BoundaryEdge {
                        triangle: tri_idx,
                        side,
                    }),
                }
            }
        }

        faces.push(Face {
            id: face_id,
            triangles: members,
            boundary: boundary.into_edges(),
        });
    }

    debug!(
        "grouped {} triangles into {} faces ({} boundary edges)",
        triangles.len(),
        faces.len(),
        faces.iter().map(|f| f.boundary.len()).sum::<usize>()
    );

    faces
}
