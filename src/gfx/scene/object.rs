use std::ops::Range;

use wgpu::Device;

use super::vertex::Vertex3D;
use crate::gfx::geometry::{Aabb, MeshBuffers};
use crate::tube::MeshTarget;

/// Renderable tube mesh.
///
/// Holds the interleaved CPU copy of the latest [`MeshBuffers`] and the GPU
/// buffers built from it. Replacing the geometry marks the GPU side stale;
/// [`TubeMesh::sync_gpu`] rebuilds both buffers wholesale.
#[derive(Debug, Default)]
pub struct TubeMesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    bounds: Option<Aabb>,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
    dirty: bool,
}

impl TubeMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    /// Whether the GPU buffers lag behind the CPU geometry
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_uploaded(&self) -> bool {
        self.vertex_buffer.is_some() && self.index_buffer.is_some()
    }

    /// Upload the current geometry if it changed since the last upload.
    ///
    /// Returns `true` when new buffers were created.
    pub fn sync_gpu(&mut self, device: &Device) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;

        if self.vertices.is_empty() || self.indices.is_empty() {
            self.vertex_buffer = None;
            self.index_buffer = None;
            return false;
        }

        let vertex_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some("Tube Vertex Buffer"),
                contents: bytemuck::cast_slice(&self.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        let index_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some("Tube Index Buffer"),
                contents: bytemuck::cast_slice(&self.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        );

        log::debug!(
            "uploaded tube mesh: {} vertices, {} indices",
            self.vertices.len(),
            self.indices.len()
        );

        self.vertex_buffer = Some(vertex_buffer);
        self.index_buffer = Some(index_buffer);
        true
    }
}

impl MeshTarget for TubeMesh {
    fn replace(&mut self, buffers: &MeshBuffers) {
        let (vertices, indices) = buffers.to_scene_format();

        self.index_count = indices.len() as u32;
        self.vertices = vertices;
        self.indices = indices;
        self.bounds = buffers.bounds();
        self.dirty = true;
    }
}

pub trait DrawTube<'a> {
    fn draw_tube(&mut self, mesh: &'a TubeMesh);
    fn draw_tube_instanced(&mut self, mesh: &'a TubeMesh, instances: Range<u32>);
}

impl<'a, 'b> DrawTube<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_tube(&mut self, mesh: &'b TubeMesh) {
        self.draw_tube_instanced(mesh, 0..1);
    }

    fn draw_tube_instanced(&mut self, mesh: &'b TubeMesh, instances: Range<u32>) {
        let (Some(vertex_buffer), Some(index_buffer)) = (&mesh.vertex_buffer, &mesh.index_buffer)
        else {
            // Skip drawing if not uploaded
            return;
        };

        self.set_vertex_buffer(0, vertex_buffer.slice(..));
        self.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, instances);
    }
}
