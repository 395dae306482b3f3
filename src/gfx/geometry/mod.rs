//! # Procedural Tube Geometry
//!
//! This module sweeps a circular cross-section along a polyline of control
//! points and produces flat mesh buffers ready for GPU upload.
//!
//! ## Pipeline
//!
//! - **Centerline** ([`centerline`]): densify the control points
//! - **Rings** ([`ring`]): one oriented vertex ring per centerline sample
//! - **Assembly** ([`assembler`]): stitch adjacent rings into triangles
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use tuberender::gfx::geometry::{generate, TubeProfile};
//!
//! let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 10.0)];
//! let profile = TubeProfile::default().with_subdivisions(1).with_segments(4);
//!
//! let mesh = generate(&points, &profile).unwrap();
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.triangle_count(), 8);
//! ```

pub mod assembler;
pub mod bounds;
pub mod centerline;
pub mod profile;
pub mod ring;

pub use bounds::Aabb;
pub use profile::{TubeDescription, TubeProfile};

use cgmath::Point3;

use crate::error::TubeResult;

/// Generated tube geometry ready for GPU upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            tex_coords: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bounds over all vertex positions
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_vertices(&self.vertices)
    }

    /// Interleave into the vertex format used by the renderer
    pub fn to_scene_format(&self) -> (Vec<crate::gfx::scene::vertex::Vertex3D>, Vec<u32>) {
        use crate::gfx::scene::vertex::Vertex3D;

        let vertices: Vec<Vertex3D> = self
            .vertices
            .iter()
            .zip(&self.normals)
            .zip(&self.tex_coords)
            .map(|((&position, &normal), &tex_coords)| Vertex3D {
                position,
                normal,
                tex_coords,
            })
            .collect();

        (vertices, self.indices.clone())
    }
}

/// Sweep `profile` along `points` and build the complete tube mesh.
///
/// # Errors
///
/// Returns an error if the control points or profile violate their
/// preconditions (see [`TubeProfile::validate_with`]).
pub fn generate(points: &[Point3<f32>], profile: &TubeProfile) -> TubeResult<MeshBuffers> {
    profile.validate_with(points)?;

    let samples = centerline::interpolate(points, profile.subdivisions);
    let rings = ring::generate_rings(&samples, profile);
    let mesh = assembler::assemble(&rings, profile);

    log::trace!(
        "generated tube: {} rings, {} vertices, {} triangles",
        rings.len(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TubeError;
    use cgmath::{EuclideanSpace, InnerSpace, Vector3};

    fn straight_z() -> Vec<Point3<f32>> {
        vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 10.0)]
    }

    #[test]
    fn test_end_to_end_straight_tube() {
        let profile = TubeProfile::default()
            .with_subdivisions(1)
            .with_segments(4)
            .with_width(1.0);
        let mesh = generate(&straight_z(), &profile).unwrap();

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.normals.len(), 8);
        assert_eq!(mesh.tex_coords.len(), 8);
        assert_eq!(mesh.triangle_count(), 8);

        for (ring, z) in mesh.vertices.chunks(4).zip([0.0f32, 10.0]) {
            let points: Vec<Point3<f32>> = ring.iter().map(|&v| Point3::from(v)).collect();
            let center = Point3::centroid(&points);
            assert!((center - Point3::new(0.0, 0.0, z)).magnitude() < 1e-5);
        }
    }

    #[test]
    fn test_vertex_count_formula() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 1.0),
            Point3::new(4.0, 1.0, 1.0),
            Point3::new(6.0, 1.0, 3.0),
        ];
        for (subdivisions, segments) in [(1, 3), (2, 8), (5, 7)] {
            let profile = TubeProfile::default()
                .with_subdivisions(subdivisions)
                .with_segments(segments);
            let mesh = generate(&points, &profile).unwrap();
            let rings = (points.len() - 1) * subdivisions + 1;

            assert_eq!(mesh.vertex_count(), segments * rings);
            assert_eq!(mesh.triangle_count(), 2 * segments * (rings - 1));
        }
    }

    #[test]
    fn test_normals_unit_even_when_vertical() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
            Point3::new(0.0, 8.0, 0.0),
        ];
        let mesh = generate(&points, &TubeProfile::default()).unwrap();

        for normal in &mesh.normals {
            assert!((Vector3::from(*normal).magnitude() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_inside_toggle() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(3.0, 2.0, 5.0),
        ];
        let profile = TubeProfile::default().with_segments(6);
        let outside = generate(&points, &profile).unwrap();
        let inside = generate(&points, &profile.inside(true)).unwrap();

        assert_eq!(outside.vertices, inside.vertices);
        assert_eq!(outside.tex_coords, inside.tex_coords);
        for (a, b) in outside.normals.iter().zip(&inside.normals) {
            assert_eq!([-a[0], -a[1], -a[2]], *b);
        }
        for (a, b) in outside.indices.chunks(3).zip(inside.indices.chunks(3)) {
            assert_eq!([a[2], a[1], a[0]], [b[0], b[1], b[2]]);
        }
    }

    #[test]
    fn test_precondition_errors() {
        let profile = TubeProfile::default();
        assert!(matches!(
            generate(&straight_z()[..1], &profile),
            Err(TubeError::TooFewPoints { .. })
        ));
        assert!(matches!(
            generate(&straight_z(), &profile.with_segments(2)),
            Err(TubeError::TooFewSegments { .. })
        ));
        assert!(matches!(
            generate(&straight_z(), &profile.with_subdivisions(0)),
            Err(TubeError::InvalidSubdivisions(0))
        ));
        assert!(matches!(
            generate(&straight_z(), &profile.with_widths(1.0, -0.5)),
            Err(TubeError::InvalidWidth { .. })
        ));
        assert!(matches!(
            generate(&straight_z(), &profile.with_subdivisions(usize::MAX)),
            Err(TubeError::MeshTooLarge { .. })
        ));
    }

    #[test]
    fn test_duplicate_points_stay_finite() {
        let points = vec![
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(1.0, 1.0, 4.0),
        ];
        let mesh = generate(&points, &TubeProfile::default()).unwrap();

        assert!(mesh
            .vertices
            .iter()
            .chain(&mesh.normals)
            .all(|v| v.iter().all(|c| c.is_finite())));
    }

    #[test]
    fn test_bounds_cover_tube() {
        let profile = TubeProfile::default().with_width(2.0).with_segments(16);
        let mesh = generate(&straight_z(), &profile).unwrap();
        let bounds = mesh.bounds().unwrap();

        assert!((bounds.min.z - 0.0).abs() < 1e-5);
        assert!((bounds.max.z - 10.0).abs() < 1e-5);
        assert!((bounds.max.x - 2.0).abs() < 1e-4);
        assert!((bounds.min.y + 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_to_scene_format() {
        let mesh = generate(&straight_z(), &TubeProfile::default()).unwrap();
        let (vertices, indices) = mesh.to_scene_format();

        assert_eq!(vertices.len(), mesh.vertex_count());
        assert_eq!(indices, mesh.indices);
        assert_eq!(vertices[5].position, mesh.vertices[5]);
        assert_eq!(vertices[5].normal, mesh.normals[5]);
        assert_eq!(vertices[5].tex_coords, mesh.tex_coords[5]);
    }
}
