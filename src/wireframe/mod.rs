//! Wireframe ribbon generation.
//!
//! [`build_wireframe`] runs the whole pipeline on an indexed triangle mesh:
//!
//! 1. ingest: validate, deduplicate positions, index shared sides
//! 2. [`group_faces`]: flood-fill nearly coplanar triangles into faces
//! 3. [`build_chains`]: walk each face's boundary into ordered loops
//! 4. [`resolve_chains`]: shift every boundary edge inward and miter the corners
//! 5. [`emit_ribbon`]: two triangles per boundary edge, in one shared buffer

pub mod chains;
pub mod config;
pub mod emit;
pub mod faces;
pub mod offset;

pub use chains::{Chain, ChainNode, FaceChains, build_chains};
pub use config::WireframeConfig;
pub use emit::{RibbonBuilder, emit_ribbon};
pub use faces::{BoundaryEdge, Face, group_faces};
pub use offset::{Corner, OffsetLine, ResolvedChain, intersect, offset_line, resolve_chain, resolve_chains};

use crate::errors::WireframeResult;
use crate::mesh::{ManifoldAnalysis, TriangleMesh, ingest};
use log::{info, warn};

/// Counts gathered while building a wireframe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WireframeReport {
    /// Distinct input positions after deduplication
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub face_count: usize,
    pub boundary_edge_count: usize,
    pub chain_count: usize,
    /// Chains whose last edge does not end where the first one starts
    pub open_chain_count: usize,
    /// Boundary vertices shared by more than two boundary edges of one face
    pub non_manifold_vertex_count: usize,
    /// Zero-area input triangles
    pub degenerate_triangle_count: usize,
    pub parallel_corner_count: usize,
    pub skew_corner_count: usize,
    pub ribbon_triangle_count: usize,
}

impl WireframeReport {
    /// `true` when the run hit something worth a second look
    pub const fn has_warnings(&self) -> bool {
        self.open_chain_count > 0
            || self.non_manifold_vertex_count > 0
            || self.degenerate_triangle_count > 0
            || self.skew_corner_count > 0
    }
}

/// The generated ribbon mesh and how it came about.
#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe {
    pub mesh: TriangleMesh,
    pub report: WireframeReport,
    /// Topology of the ingested input, taken from the same pass
    pub manifold: ManifoldAnalysis,
}

/// Build the wireframe ribbon of `mesh`.
///
/// Each boundary edge of each planar face yields exactly two triangles, so
/// `report.ribbon_triangle_count == 2 * report.boundary_edge_count`.
///
/// # Errors
/// - [`WireframeError::InvalidConfig`](crate::errors::WireframeError::InvalidConfig)
///   when a configuration value is negative or not finite.
/// - [`WireframeError::InvalidMesh`](crate::errors::WireframeError::InvalidMesh)
///   when the input is malformed. Nothing is produced in that case.
pub fn build_wireframe(mesh: &TriangleMesh, config: &WireframeConfig) -> WireframeResult<Wireframe> {
    config.validate()?;
    let mut ingested = ingest(mesh)?;
    let manifold = ingested.analyze_manifold();

    let faces = group_faces(&mut ingested, config.planar_tolerance);

    let mut report = WireframeReport {
        vertex_count: ingested.vertices.len(),
        triangle_count: ingested.triangles.len(),
        face_count: faces.len(),
        boundary_edge_count: faces.iter().map(|f| f.boundary.len()).sum(),
        degenerate_triangle_count: ingested.degenerate_triangle_count(),
        ..WireframeReport::default()
    };

    let mut chains = Vec::new();
    for face in &faces {
        let face_chains = build_chains(face);
        report.non_manifold_vertex_count += face_chains.non_manifold_vertices;
        chains.extend(face_chains.chains);
    }
    report.chain_count = chains.len();
    report.open_chain_count = chains.iter().filter(|c| !c.is_closed()).count();

    let resolved = resolve_chains(&ingested, chains, config);
    for chain in &resolved {
        report.parallel_corner_count += chain.parallel_corners;
        report.skew_corner_count += chain.skew_corners;
    }

    let ribbon = emit_ribbon(&ingested, &resolved);
    report.ribbon_triangle_count = ribbon.triangle_count();

    if report.degenerate_triangle_count > 0 {
        warn!(
            "{} degenerate triangles have no normal and form faces of their own",
            report.degenerate_triangle_count
        );
    }
    if report.skew_corner_count > 0 {
        warn!(
            "{} corners have offset lines that do not meet; using the unmitered endpoint",
            report.skew_corner_count
        );
    }
    info!(
        "wireframe: {} triangles -> {} faces, {} chains, {} ribbon triangles",
        report.triangle_count, report.face_count, report.chain_count, report.ribbon_triangle_count
    );

    Ok(Wireframe {
        mesh: ribbon,
        report,
        manifold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WireframeError;

    #[test]
    fn square_report() {
        let wire = build_wireframe(&TriangleMesh::square(2.0), &WireframeConfig::default())
            .expect("wireframe");
        let report = wire.report;
        assert_eq!(report.vertex_count, 4);
        assert_eq!(report.face_count, 1);
        assert_eq!(report.boundary_edge_count, 4);
        assert_eq!(report.chain_count, 1);
        assert_eq!(report.open_chain_count, 0);
        assert_eq!(report.ribbon_triangle_count, 8);
        assert!(!report.has_warnings());
        assert_eq!(wire.mesh.triangle_count(), 8);
        assert!(!wire.manifold.is_manifold);
        assert_eq!(wire.manifold.boundary_edges, 4);
    }

    #[test]
    fn closed_input_is_reported_manifold() {
        let wire = build_wireframe(&TriangleMesh::cube(1.0), &WireframeConfig::default())
            .expect("wireframe");
        assert!(wire.manifold.is_manifold);
        assert_eq!(wire.manifold.euler_characteristic, 2);
    }

    #[test]
    fn invalid_config_is_rejected_before_ingest() {
        // The mesh is malformed too; the config error wins.
        let broken = TriangleMesh {
            positions: Vec::new(),
            indices: vec![0, 1],
        };
        let config = WireframeConfig::default().with_wire_line_width(-0.1);
        assert!(matches!(
            build_wireframe(&broken, &config),
            Err(WireframeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_mesh_gives_empty_ribbon() {
        let wire =
            build_wireframe(&TriangleMesh::new(), &WireframeConfig::default()).expect("wireframe");
        assert!(wire.mesh.is_empty());
        assert_eq!(wire.report, WireframeReport::default());
    }
}
