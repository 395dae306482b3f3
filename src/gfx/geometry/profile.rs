//! # Tube Profile
//!
//! Shape parameters shared by every stage of the tube pipeline. A profile
//! can be built in code with the `with_*` methods or deserialized from JSON
//! as part of a [`TubeDescription`].

use cgmath::Point3;
use serde::{Deserialize, Serialize};

use crate::error::{TubeError, TubeResult};

/// Smallest ring that still encloses a volume.
pub const MIN_SEGMENTS: usize = 3;

/// Fewest control points that define a centerline.
pub const MIN_CONTROL_POINTS: usize = 2;

/// Shape configuration for a generated tube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TubeProfile {
    /// Interpolated points per control segment
    pub subdivisions: usize,
    /// Vertices per ring
    pub segments: usize,
    /// Radius at the first control point
    pub start_width: f32,
    /// Radius at the last control point
    pub end_width: f32,
    /// Scale applied to texture coordinates (u around, v along)
    pub uv_scale: [f32; 2],
    /// Render the interior surface instead of the exterior
    pub inside: bool,
}

impl Default for TubeProfile {
    fn default() -> Self {
        Self {
            subdivisions: 3,
            segments: 8,
            start_width: 1.0,
            end_width: 1.0,
            uv_scale: [1.0, 1.0],
            inside: false,
        }
    }
}

impl TubeProfile {
    #[must_use]
    pub fn with_subdivisions(mut self, subdivisions: usize) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Set the same radius at both ends.
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.start_width = width;
        self.end_width = width;
        self
    }

    #[must_use]
    pub fn with_widths(mut self, start_width: f32, end_width: f32) -> Self {
        self.start_width = start_width;
        self.end_width = end_width;
        self
    }

    #[must_use]
    pub fn with_uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = [u, v];
        self
    }

    #[must_use]
    pub fn inside(mut self, inside: bool) -> Self {
        self.inside = inside;
        self
    }

    /// Radius at parameter `t` in `[0, 1]` along the tube.
    pub fn width_at(&self, t: f32) -> f32 {
        self.start_width + (self.end_width - self.start_width) * t
    }

    /// Check the profile's own preconditions.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `subdivisions` is zero
    /// - `segments` is below [`MIN_SEGMENTS`]
    /// - either width is negative or not finite
    pub fn validate(&self) -> TubeResult<()> {
        if self.subdivisions < 1 {
            return Err(TubeError::InvalidSubdivisions(self.subdivisions));
        }

        if self.segments < MIN_SEGMENTS {
            return Err(TubeError::TooFewSegments {
                min: MIN_SEGMENTS,
                actual: self.segments,
            });
        }

        for (which, value) in [("start", self.start_width), ("end", self.end_width)] {
            if value < 0.0 || !value.is_finite() {
                return Err(TubeError::InvalidWidth { which, value });
            }
        }

        Ok(())
    }

    /// Check the profile together with the centerline it will be swept along.
    ///
    /// # Errors
    ///
    /// Everything [`TubeProfile::validate`] reports, plus too few control
    /// points, control points with NaN or infinite coordinates, and meshes
    /// whose buffer sizes overflow `usize` or whose vertices cannot all be
    /// addressed by `u32` indices.
    pub fn validate_with(&self, points: &[Point3<f32>]) -> TubeResult<()> {
        if points.len() < MIN_CONTROL_POINTS {
            return Err(TubeError::TooFewPoints {
                min: MIN_CONTROL_POINTS,
                actual: points.len(),
            });
        }

        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(TubeError::NonFinitePoint { index });
        }

        self.validate()?;
        self.check_mesh_size(points.len())
    }

    fn check_mesh_size(&self, control_points: usize) -> TubeResult<()> {
        let samples = (control_points - 1)
            .checked_mul(self.subdivisions)
            .and_then(|steps| steps.checked_add(1));
        let vertices = samples.and_then(|s| s.checked_mul(self.segments));
        let indices = samples
            .and_then(|s| (s - 1).checked_mul(self.segments))
            .and_then(|quads| quads.checked_mul(6));

        match (vertices, indices) {
            (Some(vertices), Some(_)) if u32::try_from(vertices - 1).is_ok() => Ok(()),
            _ => Err(TubeError::MeshTooLarge {
                control_points,
                subdivisions: self.subdivisions,
                segments: self.segments,
            }),
        }
    }
}

/// A centerline plus its profile, as stored in a JSON description file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TubeDescription {
    pub points: Vec<[f32; 3]>,
    #[serde(default)]
    pub profile: TubeProfile,
}

impl TubeDescription {
    pub fn new(points: &[Point3<f32>], profile: TubeProfile) -> Self {
        Self {
            points: points.iter().map(|p| [p.x, p.y, p.z]).collect(),
            profile,
        }
    }

    /// Control points as cgmath points.
    pub fn control_points(&self) -> Vec<Point3<f32>> {
        self.points
            .iter()
            .map(|p| Point3::new(p[0], p[1], p[2]))
            .collect()
    }
}
