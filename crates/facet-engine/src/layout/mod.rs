//! Vertex and instance buffer layouts.
//!
//! The record structs uploaded by the driver and the attribute descriptors
//! handed to wgpu live side by side. Byte offsets are taken from the structs
//! with `offset_of!`, shader locations from [`location`]. The bundled WGSL is
//! checked against the same tables by [`crate::contract`].
//!
//! Location map:
//!
//! | location | field                         | buffer slot | step rate |
//! |----------|-------------------------------|-------------|-----------|
//! | 0        | position (`vec3<f32>`)        | 0           | vertex    |
//! | 1        | color / tex coord             | 0           | vertex    |
//! | 2..=5    | instance matrix rows (`vec4`) | 1           | instance  |

mod instance;
mod vertex;

use bytemuck::Pod;

pub use instance::InstanceRecord;
pub use vertex::{ColorVertex, TexturedVertex};

/// Shader input locations shared by every pipeline variant.
pub mod location {
    /// Vertex position, always `vec3<f32>`.
    pub const POSITION: u32 = 0;

    /// Per-vertex color (color variant) or texture coordinate (textured variants).
    pub const SECONDARY: u32 = 1;

    /// The four rows of the per-instance transform, in declared order.
    pub const INSTANCE_ROWS: [u32; 4] = [2, 3, 4, 5];
}

/// Vertex buffer slots passed to `set_vertex_buffer`.
pub mod slot {
    pub const VERTEX: u32 = 0;
    pub const INSTANCE: u32 = 1;
}

/// A `#[repr(C)]` record that can be read by the vertex stage straight out of a
/// GPU buffer.
pub trait VertexLayout: Pod {
    /// Attribute descriptors, one per shader input fed by this record.
    const ATTRIBUTES: &'static [wgpu::VertexAttribute];

    /// Whether the record advances per vertex or per instance.
    const STEP_MODE: wgpu::VertexStepMode;

    /// Element stride in bytes.
    const STRIDE: wgpu::BufferAddress = std::mem::size_of::<Self>() as wgpu::BufferAddress;

    fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE,
            step_mode: Self::STEP_MODE,
            attributes: Self::ATTRIBUTES,
        }
    }
}

pub(crate) const fn attribute(
    shader_location: u32,
    format: wgpu::VertexFormat,
    offset: usize,
) -> wgpu::VertexAttribute {
    wgpu::VertexAttribute {
        format,
        offset: offset as wgpu::BufferAddress,
        shader_location,
    }
}
