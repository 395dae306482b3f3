//! # Tube Component
//!
//! Host integration for tube geometry: the regeneration gate that memoizes
//! generation on an input fingerprint, the [`TubeRenderer`] component that
//! hosts tick every frame, and control point gizmos for editor overlays.
//!
//! ## Key Components
//!
//! - [`TubeRenderer`] - Owns the inputs and drives regeneration
//! - [`MeshTarget`] - Anything that accepts finished mesh buffers
//! - [`RegenerationGate`] - Fingerprint comparison
//! - [`NodeSphere`] - Debug sphere at a control point

pub mod gate;
pub mod gizmo;
pub mod renderer;

pub use gate::{Fingerprint, RegenerationGate};
pub use gizmo::{node_spheres, NodeSphere};
pub use renderer::{MeshSummary, MeshTarget, TubeRenderer};
