//! # Control Point Gizmos
//!
//! Debug side channel: one sphere per control point, sized by the tube
//! radius at that point. These are draw requests for an editor overlay and
//! never end up in the mesh buffers.

use cgmath::{EuclideanSpace, Point3};

use crate::gfx::geometry::ring::ring_parameter;
use crate::gfx::geometry::TubeProfile;

/// Sphere drawn at a control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSphere {
    /// World-space center
    pub center: Point3<f32>,
    pub radius: f32,
}

/// Spheres for every control point, offset by the host's `origin`.
///
/// Control point `k` coincides with ring `k * subdivisions`, so its radius
/// matches the ring generated there.
pub fn node_spheres<'a>(
    points: &'a [Point3<f32>],
    profile: &'a TubeProfile,
    origin: Point3<f32>,
) -> impl Iterator<Item = NodeSphere> + 'a {
    let count = points.len();

    points.iter().enumerate().map(move |(k, point)| NodeSphere {
        center: origin + point.to_vec(),
        radius: profile.width_at(ring_parameter(k, count)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_per_point() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(0.0, 0.0, 10.0),
        ];
        let profile = TubeProfile::default().with_widths(1.0, 2.0);
        let origin = Point3::new(1.0, 1.0, 1.0);

        let spheres: Vec<NodeSphere> = node_spheres(&points, &profile, origin).collect();

        assert_eq!(spheres.len(), 3);
        assert_eq!(spheres[0].center, Point3::new(1.0, 1.0, 1.0));
        assert_eq!(spheres[2].center, Point3::new(1.0, 1.0, 11.0));
        assert_eq!(spheres[0].radius, 1.0);
        assert_eq!(spheres[1].radius, 1.5);
        assert_eq!(spheres[2].radius, 2.0);
    }
}
