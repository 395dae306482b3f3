//! # Tube Renderer
//!
//! Host-facing component that owns a centerline and profile, regenerates the
//! mesh when either changes, and forwards the result to a [`MeshTarget`].
//!
//! ## Lifecycle
//!
//! 1. **Initialize** - build the mesh once when the host attaches the tube
//! 2. **Update Loop** - call [`TubeRenderer::update`] every frame; it only
//!    rebuilds when the input fingerprint changed
//! 3. **Gizmos** - optionally query [`TubeRenderer::node_spheres`] for
//!    editor overlays
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use tuberender::gfx::geometry::{MeshBuffers, TubeProfile};
//! use tuberender::tube::TubeRenderer;
//!
//! let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 10.0)];
//! let mut tube = TubeRenderer::new(points, TubeProfile::default());
//! let mut target = MeshBuffers::new();
//!
//! assert!(tube.update(&mut target).unwrap());
//! // Nothing changed, nothing rebuilt
//! assert!(!tube.update(&mut target).unwrap());
//!
//! tube.points[1].x = 2.0;
//! assert!(tube.update(&mut target).unwrap());
//! ```

use cgmath::Point3;

use super::gate::{Fingerprint, RegenerationGate};
use super::gizmo::{node_spheres, NodeSphere};
use crate::error::TubeResult;
use crate::gfx::geometry::{generate, Aabb, MeshBuffers, TubeProfile};

/// Receiver of finished tube geometry.
///
/// Implementations replace whatever they held before; buffers are never
/// patched incrementally.
pub trait MeshTarget {
    fn replace(&mut self, buffers: &MeshBuffers);
}

impl MeshTarget for MeshBuffers {
    fn replace(&mut self, buffers: &MeshBuffers) {
        self.clone_from(buffers);
    }
}

/// Size and extent of the last mesh handed to a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshSummary {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub bounds: Option<Aabb>,
}

impl MeshSummary {
    pub fn of(mesh: &MeshBuffers) -> Self {
        Self {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            bounds: mesh.bounds(),
        }
    }
}

/// Tube component driven by an explicit tick.
#[derive(Debug, Clone)]
pub struct TubeRenderer {
    /// Centerline control points, in the host object's local space
    pub points: Vec<Point3<f32>>,
    pub profile: TubeProfile,
    /// Host object's world position, used to place gizmos
    pub origin: Point3<f32>,
    /// No regeneration happens while this is false
    pub should_render: bool,
    /// Emit control point gizmos
    pub show_nodes: bool,
    gate: RegenerationGate,
    summary: Option<MeshSummary>,
    generation: u64,
}

impl TubeRenderer {
    /// Create a tube with rendering enabled and gizmos hidden.
    pub fn new(points: Vec<Point3<f32>>, profile: TubeProfile) -> Self {
        Self {
            points,
            profile,
            origin: Point3::new(0.0, 0.0, 0.0),
            should_render: true,
            show_nodes: false,
            gate: RegenerationGate::new(),
            summary: None,
            generation: 0,
        }
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Point3<f32>) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn with_nodes_shown(mut self, show_nodes: bool) -> Self {
        self.show_nodes = show_nodes;
        self
    }

    #[must_use]
    pub fn with_rendering(mut self, should_render: bool) -> Self {
        self.should_render = should_render;
        self
    }

    /// Fingerprint of the current inputs.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::new(&self.points, &self.profile)
    }

    /// Counts and bounds of the most recently generated mesh, if any.
    ///
    /// The buffers themselves live only in the target.
    pub fn summary(&self) -> Option<MeshSummary> {
        self.summary
    }

    /// Number of successful regenerations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Build the mesh when the host first attaches the tube.
    ///
    /// Always rebuilds when rendering is enabled, even if a fingerprint was
    /// already applied.
    pub fn initialize<T: MeshTarget>(&mut self, target: &mut T) -> TubeResult<bool> {
        if !self.should_render {
            return Ok(false);
        }
        self.regenerate(target).map(|_| true)
    }

    /// Per-frame tick: rebuild only when the inputs changed.
    ///
    /// Returns `Ok(true)` when new buffers were handed to `target`.
    ///
    /// # Errors
    ///
    /// Returns the precondition violation when the changed inputs are
    /// invalid. The offending inputs are remembered, so the error is
    /// reported once rather than on every tick, and the previous buffers
    /// stay in place.
    pub fn update<T: MeshTarget>(&mut self, target: &mut T) -> TubeResult<bool> {
        if !self.should_render {
            return Ok(false);
        }

        let fingerprint = self.fingerprint();
        if !self.gate.should_regenerate(&fingerprint) {
            log::trace!("tube unchanged ({:016x})", fingerprint.digest());
            return Ok(false);
        }

        self.apply(fingerprint, target).map(|_| true)
    }

    /// Rebuild unconditionally and record the current fingerprint.
    pub fn regenerate<T: MeshTarget>(&mut self, target: &mut T) -> TubeResult<()> {
        let fingerprint = self.fingerprint();
        self.apply(fingerprint, target)
    }

    /// Force the next [`TubeRenderer::update`] to rebuild.
    pub fn invalidate(&mut self) {
        self.gate.invalidate();
    }

    fn apply<T: MeshTarget>(&mut self, fingerprint: Fingerprint, target: &mut T) -> TubeResult<()> {
        let digest = fingerprint.digest();
        self.gate.mark_applied(fingerprint);

        let mesh = generate(&self.points, &self.profile).map_err(|err| {
            log::warn!("tube {:016x} not regenerated: {}", digest, err);
            err
        })?;

        target.replace(&mesh);
        self.generation += 1;

        let summary = MeshSummary::of(&mesh);
        log::debug!(
            "regenerated tube {:016x}: {} vertices, {} triangles, bounds {:?}",
            digest,
            summary.vertex_count,
            summary.triangle_count,
            summary.bounds
        );

        self.summary = Some(summary);
        Ok(())
    }

    /// Control point gizmos, empty unless `show_nodes` is set.
    pub fn node_spheres(&self) -> impl Iterator<Item = NodeSphere> + '_ {
        let points: &[Point3<f32>] = if self.show_nodes { &self.points } else { &[] };
        node_spheres(points, &self.profile, self.origin)
    }
}
