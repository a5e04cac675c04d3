//! Validation and pipeline errors

use crate::float_types::Real;
use nalgebra::Point3;

/// Result type for wireframe generation.
pub type WireframeResult<T> = Result<T, WireframeError>;

/// Ways an input mesh can be malformed.
///
/// Any of these is reported as [`WireframeError::InvalidMesh`] before a single
/// face is grouped, so the pipeline never produces partial output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (IndexCount) The index array does not describe whole triangles
    #[error("(IndexCount) index count {len} is not a multiple of 3")]
    IndexCount { len: usize },
    /// (IndexOutOfRange) A triangle references a vertex that does not exist
    #[error("(IndexOutOfRange) index {index} is out of range (positions.len = {vertex_count})")]
    IndexOutOfRange { index: usize, vertex_count: usize },
    /// (InvalidCoordinate) A referenced coordinate has a NaN or infinite component
    #[error("(InvalidCoordinate) the coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Point3<Real>),
}

/// All the possible failures of a wireframe run.
#[derive(Debug, thiserror::Error)]
pub enum WireframeError {
    /// Malformed input mesh
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] ValidationError),
    /// A configuration value is out of its legal range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Reading or writing a mesh file failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
