//! Mitered **wireframe ribbons** for triangle meshes.
//!
//! Adjacent triangles whose normals nearly agree are merged into planar faces;
//! every face outline is then traced by a thin band of triangles lying on the
//! face itself, with neighbouring band segments joined at mitered corners.
//! The result is a plain indexed triangle mesh that renders as a wireframe
//! without any line primitives.
//!
//! ```rust
//! use meshwire::{TriangleMesh, WireframeConfig, build_wireframe};
//!
//! let cube = TriangleMesh::cube(2.0);
//! let wire = build_wireframe(&cube, &WireframeConfig::default()).unwrap();
//! assert_eq!(wire.report.face_count, 6);
//! assert_eq!(wire.mesh.triangle_count(), 48);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` import/export
//! - **cli**: the `meshwire` binary (pulls in `stl-io`, clap and env_logger)
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to resolve boundary chains on multiple threads

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod shapes;
pub mod triangulated;
pub mod wireframe;

#[cfg(feature = "stl-io")]
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{ValidationError, WireframeError, WireframeResult};
pub use mesh::TriangleMesh;
pub use wireframe::{Wireframe, WireframeConfig, WireframeReport, build_wireframe};
