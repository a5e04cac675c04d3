//! Mesh file formats.

mod stl;

pub use stl::{to_stl_ascii, to_stl_binary};
