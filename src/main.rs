// main.rs
//
// Reads an STL mesh, builds its wireframe ribbon and writes the ribbon as STL.
// Logging goes through env_logger; set RUST_LOG=debug for per-stage counts.

use clap::Parser;
use log::{info, warn};
use meshwire::float_types::Real;
use meshwire::wireframe::config::{
    DEFAULT_CROSS_LINE_PARALLEL, DEFAULT_CROSS_LINE_TOLERANCE, DEFAULT_PLANAR_TOLERANCE,
    DEFAULT_WIRE_LINE_WIDTH,
};
use meshwire::{TriangleMesh, WireframeConfig, WireframeResult, build_wireframe};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "meshwire", version, about = "Trace the planar faces of an STL mesh with mitered ribbons")]
struct Cli {
    /// Input mesh (ASCII or binary STL)
    #[arg(long, short)]
    input: PathBuf,
    /// Output ribbon mesh
    #[arg(long, short)]
    output: PathBuf,
    /// Squared normal difference below which neighbouring triangles share a face
    #[arg(long, env = "MESHWIRE_PLANAR_TOLERANCE", default_value_t = DEFAULT_PLANAR_TOLERANCE)]
    planar_tolerance: Real,
    /// Ribbon width in mesh units
    #[arg(long, env = "MESHWIRE_LINE_WIDTH", default_value_t = DEFAULT_WIRE_LINE_WIDTH)]
    width: Real,
    /// Direction determinant below which two offset lines count as parallel
    #[arg(long, env = "MESHWIRE_CROSS_LINE_PARALLEL", default_value_t = DEFAULT_CROSS_LINE_PARALLEL)]
    cross_line_parallel: Real,
    /// Squared closest-point gap below which two offset lines meet
    #[arg(long, env = "MESHWIRE_CROSS_LINE_TOLERANCE", default_value_t = DEFAULT_CROSS_LINE_TOLERANCE)]
    cross_line_tolerance: Real,
    /// Write ASCII instead of binary STL
    #[arg(long)]
    ascii: bool,
    /// Solid name written to ASCII STL
    #[arg(long, default_value = "wireframe")]
    name: String,
}

impl Cli {
    fn config(&self) -> WireframeConfig {
        WireframeConfig::default()
            .with_planar_tolerance(self.planar_tolerance)
            .with_wire_line_width(self.width)
            .with_cross_line_parallel(self.cross_line_parallel)
            .with_cross_line_tolerance(self.cross_line_tolerance)
    }
}

fn main() -> WireframeResult<()> {
    env_logger::init();
    let cli = Cli::parse();

    let data = fs::read(&cli.input)?;
    let mesh = TriangleMesh::from_stl(&data)?;
    info!("read {} triangles from {}", mesh.triangle_count(), cli.input.display());

    let wire = build_wireframe(&mesh, &cli.config())?;
    let analysis = &wire.manifold;
    if !analysis.is_manifold {
        warn!(
            "input is not a closed manifold: {} boundary edges, {} non-manifold edges",
            analysis.boundary_edges, analysis.non_manifold_edges
        );
    }
    let report = &wire.report;
    info!(
        "{} faces, {} boundary edges, {} chains ({} open), {} parallel and {} skew corners",
        report.face_count,
        report.boundary_edge_count,
        report.chain_count,
        report.open_chain_count,
        report.parallel_corner_count,
        report.skew_corner_count
    );

    if cli.ascii {
        fs::write(&cli.output, wire.mesh.to_stl_ascii(&cli.name))?;
    } else {
        fs::write(&cli.output, wire.mesh.to_stl_binary(&cli.name)?)?;
    }
    info!(
        "wrote {} ribbon triangles to {}",
        wire.mesh.triangle_count(),
        cli.output.display()
    );

    Ok(())
}
