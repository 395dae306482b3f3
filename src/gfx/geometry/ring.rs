//! # Ring Generation
//!
//! Builds one circular cross-section per centerline sample. Every ring shares
//! a local orthonormal frame derived from the central-difference tangent at
//! its sample, and a radius interpolated between the profile's start and end
//! widths.

use cgmath::{InnerSpace, Point3, Vector3};
use std::f32::consts::PI;

use super::profile::TubeProfile;

/// World up axis (+Y) used to orient every ring.
pub const WORLD_UP: Vector3<f32> = Vector3 {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};

/// Reference axis used instead of [`WORLD_UP`] when the tangent is vertical.
pub const FALLBACK_AXIS: Vector3<f32> = Vector3 {
    x: 1.0,
    y: 0.0,
    z: 0.0,
};

const DEGENERATE_EPSILON: f32 = 1e-12;

/// Local orthonormal frame of one ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Unit tangent, pointing from the next sample towards the previous one
    pub forward: Vector3<f32>,
    pub up: Vector3<f32>,
    pub right: Vector3<f32>,
}

impl Frame {
    /// Build a frame around a unit `forward` vector.
    ///
    /// `up = forward x WORLD_UP` and `right = forward x up`, both normalized.
    /// A vertical `forward` uses [`FALLBACK_AXIS`] in place of world up.
    pub fn new(forward: Vector3<f32>) -> Self {
        let mut up = forward.cross(WORLD_UP);
        if up.magnitude2() < DEGENERATE_EPSILON {
            log::trace!("vertical tangent {:?}, using fallback axis", forward);
            up = forward.cross(FALLBACK_AXIS);
        }
        let up = up.normalize();
        let right = forward.cross(up);

        Self { forward, up, right }
    }

    /// Unit direction from the ring center towards angle `t`.
    pub fn radial(&self, t: f32) -> Vector3<f32> {
        self.up * t.sin() + self.right * t.cos()
    }
}

/// Central-difference tangents for every sample.
///
/// The ends reuse themselves as the missing neighbour. A zero-length
/// difference (duplicate samples) repeats the previous tangent, or +Z for
/// the first sample.
pub fn tangents(samples: &[Point3<f32>]) -> Vec<Vector3<f32>> {
    let count = samples.len();
    let mut previous = Vector3::unit_z();

    (0..count)
        .map(|i| {
            let behind = samples[i.saturating_sub(1)];
            let ahead = samples[(i + 1).min(count - 1)];
            let delta = behind - ahead;
            if delta.magnitude2() > DEGENERATE_EPSILON {
                previous = delta.normalize();
            }
            previous
        })
        .collect()
}

/// One circular cross-section of the tube.
#[derive(Debug, Clone)]
pub struct Ring {
    pub center: Point3<f32>,
    pub frame: Frame,
    pub radius: f32,
    pub vertices: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub tex_coords: Vec<[f32; 2]>,
}

impl Ring {
    /// Build ring `index` of `count` around `center`.
    pub fn new(
        center: Point3<f32>,
        frame: Frame,
        index: usize,
        count: usize,
        profile: &TubeProfile,
    ) -> Self {
        let segments = profile.segments;
        let radius = profile.width_at(ring_parameter(index, count));
        let v = index as f32 / profile.subdivisions as f32;

        let mut vertices = Vec::with_capacity(segments);
        let mut normals = Vec::with_capacity(segments);
        let mut tex_coords = Vec::with_capacity(segments);

        for j in 0..segments {
            let u = j as f32 / segments as f32;
            let direction = frame.radial(2.0 * PI * u);
            let vertex = center + direction * radius;
            let normal = if profile.inside { -direction } else { direction };

            vertices.push([vertex.x, vertex.y, vertex.z]);
            normals.push([normal.x, normal.y, normal.z]);
            tex_coords.push([u * profile.uv_scale[0], v * profile.uv_scale[1]]);
        }

        Self {
            center,
            frame,
            radius,
            vertices,
            normals,
            tex_coords,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Position of ring `index` along the tube in `[0, 1]`.
pub fn ring_parameter(index: usize, count: usize) -> f32 {
    if count > 1 {
        index as f32 / (count - 1) as f32
    } else {
        0.0
    }
}

/// Build one ring per centerline sample.
pub fn generate_rings(samples: &[Point3<f32>], profile: &TubeProfile) -> Vec<Ring> {
    let count = samples.len();

    samples
        .iter()
        .zip(tangents(samples))
        .enumerate()
        .map(|(i, (&center, forward))| Ring::new(center, Frame::new(forward), i, count, profile))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::centerline::interpolate;

    const EPS: f32 = 1e-5;

    fn length(v: [f32; 3]) -> f32 {
        Vector3::from(v).magnitude()
    }

    fn straight_z() -> Vec<Point3<f32>> {
        vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 10.0)]
    }

    /// Rings over the interpolated centerline, as the pipeline builds them.
    fn rings_along(points: &[Point3<f32>], profile: &TubeProfile) -> Vec<Ring> {
        generate_rings(&interpolate(points, profile.subdivisions), profile)
    }

    #[test]
    fn test_frame_is_orthonormal() {
        let forward = Vector3::new(1.0, 2.0, -0.5).normalize();
        let frame = Frame::new(forward);

        assert!((frame.up.magnitude() - 1.0).abs() < EPS);
        assert!((frame.right.magnitude() - 1.0).abs() < EPS);
        assert!(frame.up.dot(frame.forward).abs() < EPS);
        assert!(frame.right.dot(frame.forward).abs() < EPS);
        assert!(frame.up.dot(frame.right).abs() < EPS);
    }

    #[test]
    fn test_vertical_tangent_uses_fallback() {
        let frame = Frame::new(Vector3::unit_y());
        assert!((frame.up.magnitude() - 1.0).abs() < EPS);
        assert!((frame.right.magnitude() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_tangents_central_difference() {
        let samples = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 2.0),
        ];
        let tangents = tangents(&samples);
        for tangent in tangents {
            assert!((tangent - Vector3::new(0.0, 0.0, -1.0)).magnitude() < EPS);
        }
    }

    #[test]
    fn test_duplicate_samples_reuse_tangent() {
        let samples = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ];
        let tangents = tangents(&samples);
        assert!(tangents.iter().all(|t| *t == Vector3::unit_z()));
    }

    #[test]
    fn test_ring_centers_and_radius() {
        let profile = TubeProfile::default()
            .with_subdivisions(1)
            .with_segments(4)
            .with_width(1.0);
        let rings = generate_rings(&straight_z(), &profile);

        assert_eq!(rings.len(), 2);
        for (ring, z) in rings.iter().zip([0.0, 10.0]) {
            assert_eq!(ring.len(), 4);
            assert_eq!(ring.center, Point3::new(0.0, 0.0, z));
            for vertex in &ring.vertices {
                assert!((vertex[2] - z).abs() < EPS);
                let offset = [vertex[0], vertex[1], 0.0];
                assert!((length(offset) - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_radius_reaches_end_width() {
        let profile = TubeProfile::default()
            .with_subdivisions(2)
            .with_widths(1.0, 3.0);
        let rings = rings_along(&straight_z(), &profile);

        let radii: Vec<f32> = rings.iter().map(|r| r.radius).collect();
        assert_eq!(radii, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_normals_are_unit_and_radial() {
        let samples = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 5.0, 0.0),
            Point3::new(3.0, 5.0, 2.0),
        ];
        let profile = TubeProfile::default().with_width(0.5);
        let rings = generate_rings(&samples, &profile);

        for ring in &rings {
            for (vertex, normal) in ring.vertices.iter().zip(&ring.normals) {
                assert!((length(*normal) - 1.0).abs() < EPS);
                let outward = Point3::from(*vertex) - ring.center;
                assert!(outward.dot(Vector3::from(*normal)) > 0.0);
            }
        }
    }

    #[test]
    fn test_inside_negates_normals_of_every_ring() {
        let profile = TubeProfile::default();
        let outside = generate_rings(&straight_z(), &profile);
        let inside = generate_rings(&straight_z(), &profile.inside(true));

        for (a, b) in outside.iter().zip(&inside) {
            assert_eq!(a.vertices, b.vertices);
            for (na, nb) in a.normals.iter().zip(&b.normals) {
                assert_eq!([-na[0], -na[1], -na[2]], *nb);
            }
        }
    }

    #[test]
    fn test_zero_width_has_finite_normals() {
        let profile = TubeProfile::default().with_width(0.0);
        let rings = generate_rings(&straight_z(), &profile);

        for ring in &rings {
            assert!(ring.vertices.iter().all(|v| Point3::from(*v) == ring.center));
            assert!(ring.normals.iter().all(|n| (length(*n) - 1.0).abs() < EPS));
        }
    }

    #[test]
    fn test_tex_coords() {
        let profile = TubeProfile::default()
            .with_subdivisions(2)
            .with_segments(4)
            .with_uv_scale(2.0, 3.0);
        let rings = rings_along(&straight_z(), &profile);

        assert_eq!(rings.len(), 3);
        assert_eq!(rings[0].tex_coords[0], [0.0, 0.0]);
        assert_eq!(rings[0].tex_coords[1], [0.5, 0.0]);
        assert_eq!(rings[1].tex_coords[2], [1.0, 1.5]);
        assert_eq!(rings[2].tex_coords[3], [1.5, 3.0]);
    }
}
