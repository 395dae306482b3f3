//! # Mesh Assembly
//!
//! Stitches consecutive rings into a closed band of triangles. Ring `i` is
//! joined to ring `i + 1` with two triangles per angular segment; the last
//! ring is a free boundary since the tube has no caps.

use super::profile::TubeProfile;
use super::ring::Ring;
use super::MeshBuffers;

/// Number of indices emitted for `ring_count` rings of `segments` vertices,
/// saturating at `usize::MAX`.
pub fn index_count(ring_count: usize, segments: usize) -> usize {
    ring_count
        .saturating_sub(1)
        .saturating_mul(segments)
        .saturating_mul(6)
}

/// Flatten `rings` into mesh buffers and triangulate the bands between them.
///
/// Angular indices wrap modulo `segments`, so the seam between the last and
/// first vertex of each ring is closed. Winding follows `profile.inside`:
/// counter-clockwise seen from outside by default, reversed for interiors.
pub fn assemble(rings: &[Ring], profile: &TubeProfile) -> MeshBuffers {
    let segments = profile.segments;
    let vertex_count = rings.len() * segments;

    let mut data = MeshBuffers::with_capacity(vertex_count, index_count(rings.len(), segments));

    for ring in rings {
        data.vertices.extend_from_slice(&ring.vertices);
        data.normals.extend_from_slice(&ring.normals);
        data.tex_coords.extend_from_slice(&ring.tex_coords);
    }

    // Index of vertex `j` (wrapped) on ring `r`
    let at = |r: usize, j: usize| (r * segments + j % segments) as u32;

    for i in 0..rings.len().saturating_sub(1) {
        for j in 0..segments {
            let current = at(i, j);
            let next_around = at(i, j + 1);
            let next_along = at(i + 1, j);
            let next_along_prev = at(i + 1, j + segments - 1);

            if profile.inside {
                data.indices.extend_from_slice(&[current, next_along, next_around]);
                data.indices.extend_from_slice(&[current, next_along_prev, next_along]);
            } else {
                data.indices.extend_from_slice(&[next_around, next_along, current]);
                data.indices.extend_from_slice(&[next_along, next_along_prev, current]);
            }
        }
    }

    data
}
