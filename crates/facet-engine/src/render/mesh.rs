use std::marker::PhantomData;
use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::layout::{slot, VertexLayout};

/// Vertices of one layout, optionally indexed with `u16`.
///
/// The vertex type is part of the mesh type, so a [`crate::render::DrawInputs`]
/// can only pair a mesh with the pipeline variant that reads its layout.
#[derive(Debug)]
pub struct Mesh<V> {
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
    index_count: u32,
    _vertex: PhantomData<fn() -> V>,
}

impl<V: VertexLayout> Mesh<V> {
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        vertices: &[V],
        indices: Option<&[u16]>,
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = indices.map(|indices| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                // Buffer sizes must be a multiple of 4; pad odd u16 counts.
                contents: bytemuck::cast_slice(&padded(indices)),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        Self {
            vertex_buffer,
            index_buffer,
            vertex_count: vertices.len() as u32,
            index_count: indices.map_or(0, |i| i.len() as u32),
            _vertex: PhantomData,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Index count, or `None` for a non-indexed mesh.
    #[inline]
    pub fn index_count(&self) -> Option<u32> {
        self.index_buffer.as_ref().map(|_| self.index_count)
    }

    /// Binds the buffers and issues the draw for `instances`.
    pub(crate) fn record(&self, pass: &mut wgpu::RenderPass<'_>, instances: Range<u32>) {
        if self.vertex_count == 0 {
            return;
        }
        pass.set_vertex_buffer(slot::VERTEX, self.vertex_buffer.slice(..));

        match &self.index_buffer {
            Some(_) if self.index_count == 0 => {}
            Some(index_buffer) => {
                pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..self.index_count, 0, instances);
            }
            None => pass.draw(0..self.vertex_count, instances),
        }
    }
}

fn padded(indices: &[u16]) -> Vec<u16> {
    let mut out = indices.to_vec();
    if out.len() % 2 == 1 {
        out.push(0);
    }
    out
}
