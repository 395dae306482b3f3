// src/lib.rs
//! Tuberender
//!
//! Procedural tube meshes swept along 3D polylines, with a fingerprint-gated
//! component for per-frame hosts and wgpu buffer upload.

pub mod error;
pub mod gfx;
pub mod io;
pub mod prelude;
pub mod tube;

// Re-export main types for convenience
pub use error::{ObjError, TubeError, TubeResult};
pub use gfx::geometry::{generate, MeshBuffers, TubeProfile};
pub use tube::TubeRenderer;
