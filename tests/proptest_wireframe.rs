//! Property-based tests for the wireframe pipeline.
//!
//! These tests use proptest to generate random meshes and verify invariants.
//!
//! Run with: cargo test -- proptest

mod support;

use meshwire::float_types::Real;
use meshwire::mesh::ingest;
use meshwire::wireframe::{build_chains, group_faces, offset_line, resolve_chain};
use meshwire::{TriangleMesh, WireframeConfig, build_wireframe};
use nalgebra::Point3;
use proptest::prelude::*;
use support::distance_to_line;

// =============================================================================
// Strategies for generating random meshes
// =============================================================================

/// Generate a random vertex position in a bounded range.
fn arb_position() -> impl Strategy<Value = Point3<Real>> {
    prop::array::uniform3(-100.0..100.0 as Real).prop_map(Point3::from)
}

/// Generate a mesh whose indices are all in range.
fn arb_mesh(max_vertices: usize, max_triangles: usize) -> impl Strategy<Value = TriangleMesh> {
    (3..=max_vertices).prop_flat_map(move |num_vertices| {
        let positions = prop::collection::vec(arb_position(), num_vertices);
        let triangles =
            prop::collection::vec(prop::array::uniform3(0..num_vertices), 0..=max_triangles);
        (positions, triangles)
            .prop_map(|(positions, triangles)| TriangleMesh::from_triangles(positions, &triangles))
    })
}

/// Generate a triangle that is far from degenerate.
fn arb_fat_triangle() -> impl Strategy<Value = [Point3<Real>; 3]> {
    prop::array::uniform3(arb_position()).prop_filter("triangle too thin", |[a, b, c]| {
        let area2 = (b - a).cross(&(c - a)).norm();
        let longest = (b - a).norm().max((c - b).norm()).max((a - c).norm());
        area2 > 0.1 * longest * longest
    })
}

// =============================================================================
// Property Tests: Ingestion
// =============================================================================

proptest! {
    /// Expanding the deduplicated mesh reproduces every triangle corner exactly.
    #[test]
    fn dedup_then_expand_round_trips(mesh in arb_mesh(30, 40)) {
        let ingested = ingest(&mesh).expect("generated meshes are valid");
        let original: Vec<Point3<Real>> = mesh.triangle_positions().flatten().collect();
        prop_assert_eq!(ingested.expand(), original);
        prop_assert!(ingested.vertices.len() <= mesh.positions.len());
    }
}

// =============================================================================
// Property Tests: Face grouping
// =============================================================================

proptest! {
    /// Grouping depends only on the mesh and the tolerance.
    #[test]
    fn grouping_is_deterministic(mesh in arb_mesh(20, 30), tolerance in 0.0..4.0 as Real) {
        let mut first = ingest(&mesh).expect("valid");
        let mut second = ingest(&mesh).expect("valid");
        prop_assert_eq!(group_faces(&mut first, tolerance), group_faces(&mut second, tolerance));
    }

    /// Resetting the labels and grouping again yields the same partition.
    #[test]
    fn regrouping_after_reset_is_identical(mesh in arb_mesh(20, 30), tolerance in 0.0..4.0 as Real) {
        let mut ingested = ingest(&mesh).expect("valid");
        let faces = group_faces(&mut ingested, tolerance);
        let labels = ingested.face_labels();

        prop_assert!(group_faces(&mut ingested, tolerance).is_empty());

        ingested.reset_faces();
        prop_assert_eq!(group_faces(&mut ingested, tolerance), faces);
        prop_assert_eq!(ingested.face_labels(), labels);
    }

    /// Every boundary edge of every face ends up in exactly one chain node.
    #[test]
    fn chains_use_every_boundary_edge_once(mesh in arb_mesh(20, 30)) {
        let mut ingested = ingest(&mesh).expect("valid");
        for face in group_faces(&mut ingested, 0.3) {
            let walked: usize = build_chains(&face).chains.iter().map(|c| c.len()).sum();
            prop_assert_eq!(walked, face.boundary.len());
        }
    }
}

// =============================================================================
// Property Tests: Ribbon
// =============================================================================

proptest! {
    /// The pipeline never panics and always emits two triangles per boundary edge.
    #[test]
    fn ribbon_has_two_triangles_per_boundary_edge(
        mesh in arb_mesh(30, 40),
        tolerance in 0.0..4.0 as Real,
        width in 0.0..2.0 as Real,
    ) {
        let config = WireframeConfig::default()
            .with_planar_tolerance(tolerance)
            .with_wire_line_width(width);
        let wire = build_wireframe(&mesh, &config).expect("valid input");
        prop_assert_eq!(wire.mesh.triangle_count(), 2 * wire.report.boundary_edge_count);
        prop_assert!(wire.mesh.validate().is_ok() || wire.report.degenerate_triangle_count > 0);
    }

    /// Doubling the width doubles the distance of each offset line from its edge.
    #[test]
    fn offset_distance_scales_with_width(tri in arb_fat_triangle(), width in 0.01..5.0 as Real) {
        let mesh = TriangleMesh::from_triangles(tri.to_vec(), &[[0, 1, 2]]);
        let mut ingested = ingest(&mesh).expect("valid");
        let faces = group_faces(&mut ingested, 0.3);
        let chain = &build_chains(&faces[0]).chains[0];

        for node in &chain.nodes {
            let a = ingested.vertices[node.a];
            let b = ingested.vertices[node.b];
            let single = offset_line(&ingested, node, width);
            let double = offset_line(&ingested, node, 2.0 * width);

            let d1 = distance_to_line(&single.end, &a, &b);
            let d2 = distance_to_line(&double.end, &a, &b);
            prop_assert!((d1 - width).abs() < 1e-6 * (1.0 + width));
            prop_assert!((d2 - 2.0 * d1).abs() < 1e-6 * (1.0 + width));
        }
    }

    /// Every mitered corner sits one width from both edges it joins, so
    /// doubling the width doubles both distances.
    #[test]
    fn mitered_corners_scale_with_width(tri in arb_fat_triangle(), width in 0.01..5.0 as Real) {
        let mesh = TriangleMesh::from_triangles(tri.to_vec(), &[[0, 1, 2]]);
        let mut ingested = ingest(&mesh).expect("valid");
        let faces = group_faces(&mut ingested, 0.3);
        let chain = build_chains(&faces[0]).chains.remove(0);
        prop_assert!(chain.is_closed());

        let single_config = WireframeConfig::default().with_wire_line_width(width);
        let double_config = WireframeConfig::default().with_wire_line_width(2.0 * width);
        let single = resolve_chain(&ingested, chain.clone(), &single_config);
        let double = resolve_chain(&ingested, chain.clone(), &double_config);
        prop_assume!(single.parallel_corners == 0 && single.skew_corners == 0);
        prop_assume!(double.parallel_corners == 0 && double.skew_corners == 0);

        let n = chain.len();
        let tolerance = 1e-6 * (1.0 + width);
        for i in 0..n {
            let previous = &chain.nodes[(i + n - 1) % n];
            let current = &chain.nodes[i];
            for node in [previous, current] {
                let a = ingested.vertices[node.a];
                let b = ingested.vertices[node.b];
                let d1 = distance_to_line(&single.offsets[i][0], &a, &b);
                let d2 = distance_to_line(&double.offsets[i][0], &a, &b);
                prop_assert!((d1 - width).abs() < tolerance, "corner {} is {} from its edge", i, d1);
                prop_assert!((d2 - 2.0 * d1).abs() < 2.0 * tolerance, "corner {} did not double: {} vs {}", i, d1, d2);
            }
        }
    }
}
