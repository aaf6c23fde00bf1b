use std::mem::offset_of;

use bytemuck::{Pod, Zeroable};

use super::{attribute, location, VertexLayout};

/// Per-vertex record of the color pipeline.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    /// Straight RGBA.
    pub color: [f32; 4],
}

impl ColorVertex {
    #[inline]
    pub const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

impl VertexLayout for ColorVertex {
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &[
        attribute(
            location::POSITION,
            wgpu::VertexFormat::Float32x3,
            offset_of!(ColorVertex, position),
        ),
        attribute(
            location::SECONDARY,
            wgpu::VertexFormat::Float32x4,
            offset_of!(ColorVertex, color),
        ),
    ];

    const STEP_MODE: wgpu::VertexStepMode = wgpu::VertexStepMode::Vertex;
}

/// Per-vertex record of the textured and instanced pipelines.
///
/// `tex_coord` is nominally in `[0, 1]` but is not clamped; values outside
/// that range resolve through the sampler's wrap mode.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl TexturedVertex {
    #[inline]
    pub const fn new(position: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self { position, tex_coord }
    }
}

impl VertexLayout for TexturedVertex {
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &[
        attribute(
            location::POSITION,
            wgpu::VertexFormat::Float32x3,
            offset_of!(TexturedVertex, position),
        ),
        attribute(
            location::SECONDARY,
            wgpu::VertexFormat::Float32x2,
            offset_of!(TexturedVertex, tex_coord),
        ),
    ];

    const STEP_MODE: wgpu::VertexStepMode = wgpu::VertexStepMode::Vertex;
}
