//! Vertex stage programs.

use glam::{Vec2, Vec3, Vec4};

use crate::layout::{ColorVertex, InstanceRecord, TexturedVertex};

use super::VertexOutput;

/// Homogeneous lift: `[x, y, z] -> [x, y, z, 1]`.
#[inline]
pub fn lift(position: [f32; 3]) -> Vec4 {
    Vec3::from(position).extend(1.0)
}

/// Color variant: position lifted, color copied.
#[inline]
pub fn pass_through_color(vertex: &ColorVertex) -> VertexOutput<Vec4> {
    VertexOutput {
        clip_position: lift(vertex.position),
        varying: Vec4::from(vertex.color),
    }
}

/// Textured variant: position lifted, UV copied.
#[inline]
pub fn pass_through_textured(vertex: &TexturedVertex) -> VertexOutput<Vec2> {
    VertexOutput {
        clip_position: lift(vertex.position),
        varying: Vec2::from(vertex.tex_coord),
    }
}

/// Instanced variant: `M * [x, y, z, 1]` with `M` decoded from the instance
/// record, UV copied.
///
/// No divide, normalization or clamping happens here. A singular `M` collapses
/// the geometry (or yields NaN), which is passed on as is.
#[inline]
pub fn instanced_transform(vertex: &TexturedVertex, instance: &InstanceRecord) -> VertexOutput<Vec2> {
    VertexOutput {
        clip_position: instance.to_matrix() * lift(vertex.position),
        varying: Vec2::from(vertex.tex_coord),
    }
}
