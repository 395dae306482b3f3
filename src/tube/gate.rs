//! # Regeneration Gate
//!
//! Memoizes tube generation on a fingerprint of its inputs, so a host can
//! tick every frame and only pay for rebuilds when something changed.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use cgmath::Point3;

use crate::gfx::geometry::TubeProfile;

/// Exact snapshot of everything that shapes a tube.
///
/// Floats are stored as bit patterns, so comparison is order-sensitive and
/// exact: two fingerprints are equal only for byte-identical inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    points: Vec<[u32; 3]>,
    subdivisions: usize,
    segments: usize,
    start_width: u32,
    end_width: u32,
    uv_scale: [u32; 2],
    inside: bool,
}

impl Fingerprint {
    pub fn new(points: &[Point3<f32>], profile: &TubeProfile) -> Self {
        Self {
            points: points
                .iter()
                .map(|p| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
                .collect(),
            subdivisions: profile.subdivisions,
            segments: profile.segments,
            start_width: profile.start_width.to_bits(),
            end_width: profile.end_width.to_bits(),
            uv_scale: [profile.uv_scale[0].to_bits(), profile.uv_scale[1].to_bits()],
            inside: profile.inside,
        }
    }

    /// Compact hash of the fingerprint, for log output.
    pub fn digest(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Remembers the last fingerprint that was applied.
#[derive(Debug, Clone, Default)]
pub struct RegenerationGate {
    applied: Option<Fingerprint>,
}

impl RegenerationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `fingerprint` differs from the last applied one.
    pub fn should_regenerate(&self, fingerprint: &Fingerprint) -> bool {
        self.applied.as_ref() != Some(fingerprint)
    }

    pub fn mark_applied(&mut self, fingerprint: Fingerprint) {
        self.applied = Some(fingerprint);
    }

    /// Forget the applied fingerprint so the next check always regenerates.
    pub fn invalidate(&mut self) {
        self.applied = None;
    }

    pub fn applied(&self) -> Option<&Fingerprint> {
        self.applied.as_ref()
    }
}
