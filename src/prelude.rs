//! # Tuberender Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use tuberender::prelude::*;
//!
//! let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 10.0)];
//! let mut tube = TubeRenderer::new(points, TubeProfile::default());
//! let mut mesh = TubeMesh::new();
//! tube.update(&mut mesh).unwrap();
//! assert!(mesh.is_dirty());
//! ```

pub use crate::error::{TubeError, TubeResult};
pub use crate::gfx::geometry::{generate, Aabb, MeshBuffers, TubeDescription, TubeProfile};
pub use crate::gfx::scene::{DrawTube, TubeMesh, Vertex3D};
pub use crate::tube::{MeshTarget, NodeSphere, TubeRenderer};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Point3, Vector3};
