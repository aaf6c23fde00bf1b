use std::mem::offset_of;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::{attribute, location, VertexLayout};

/// Per-instance transform of the instanced pipeline.
///
/// Serialized as four consecutive `vec4<f32>` rows fed to locations 2..=5.
/// The vertex stage rebuilds the matrix as
/// `mat4x4<f32>(row_0, row_1, row_2, row_3)`, and WGSL's matrix constructor
/// takes its vectors as columns. Row `i` of the record is therefore column `i`
/// of the transform, which is glam's memory order: [`from_matrix`] and
/// [`to_matrix`] are plain column copies and `to_matrix() * p` is exactly what
/// the GPU computes.
///
/// [`from_matrix`]: InstanceRecord::from_matrix
/// [`to_matrix`]: InstanceRecord::to_matrix
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct InstanceRecord {
    pub rows: [[f32; 4]; 4],
}

impl InstanceRecord {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Encodes a transform into its wire rows.
    #[inline]
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self::from_rows(matrix.to_cols_array_2d())
    }

    /// Decodes the wire rows into the transform the vertex stage applies.
    #[inline]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.rows)
    }
}

impl Default for InstanceRecord {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Mat4> for InstanceRecord {
    fn from(matrix: Mat4) -> Self {
        Self::from_matrix(matrix)
    }
}

impl VertexLayout for InstanceRecord {
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &[
        attribute(
            location::INSTANCE_ROWS[0],
            wgpu::VertexFormat::Float32x4,
            offset_of!(InstanceRecord, rows),
        ),
        attribute(
            location::INSTANCE_ROWS[1],
            wgpu::VertexFormat::Float32x4,
            offset_of!(InstanceRecord, rows) + size_of::<[f32; 4]>(),
        ),
        attribute(
            location::INSTANCE_ROWS[2],
            wgpu::VertexFormat::Float32x4,
            offset_of!(InstanceRecord, rows) + 2 * size_of::<[f32; 4]>(),
        ),
        attribute(
            location::INSTANCE_ROWS[3],
            wgpu::VertexFormat::Float32x4,
            offset_of!(InstanceRecord, rows) + 3 * size_of::<[f32; 4]>(),
        ),
    ];

    const STEP_MODE: wgpu::VertexStepMode = wgpu::VertexStepMode::Instance;
}
