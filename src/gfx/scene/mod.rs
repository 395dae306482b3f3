//! # Scene Module
//!
//! GPU-side representation of generated tubes.
//!
//! - [`TubeMesh`] - Interleaved vertices plus lazily uploaded wgpu buffers
//! - [`DrawTube`] - Render pass extension for drawing a [`TubeMesh`]
//! - [`Vertex3D`] - Vertex with position, normal, and texture coordinates

pub mod object;
pub mod vertex;

// Re-export main types
pub use object::{DrawTube, TubeMesh};
pub use vertex::Vertex3D;
