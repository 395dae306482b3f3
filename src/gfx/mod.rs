//! # Graphics Module
//!
//! Geometry generation and the GPU-facing scene types for tube meshes.
//!
//! - **Geometry** ([`geometry`]) - Centerline interpolation, rings, and mesh assembly
//! - **Scene** ([`scene`]) - Vertex layout and the uploadable [`TubeMesh`]
//!
//! [`TubeMesh`]: scene::TubeMesh

pub mod geometry;
pub mod scene;
