//! Per-instance transforms for the instanced demo.

use facet_engine::layout::InstanceRecord;
use glam::{Mat4, Quat, Vec3};

/// Translation, rotation and scale of one instance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn rotated(self, axis: Vec3, angle: f32) -> Self {
        Self {
            rotation: self.rotation * Quat::from_axis_angle(axis, angle),
            ..self
        }
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self {
            scale: self.scale * factor,
            ..self
        }
    }

    pub fn translated(self, offset: Vec3) -> Self {
        Self {
            translation: self.translation + offset,
            ..self
        }
    }

    /// Scale, then rotate, then translate.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    pub fn to_record(&self) -> InstanceRecord {
        InstanceRecord::from_matrix(self.to_matrix())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `count` instances spread evenly across clip-space x, each spinning about
/// z and pulsing in size.
#[derive(Debug, Clone)]
pub struct InstanceRow {
    count: u32,
}

impl InstanceRow {
    const SPIN: f32 = 1.0;
    const PHASE: f32 = 0.6;

    pub fn new(count: u32) -> Self {
        Self { count }
    }

    pub fn transform(&self, index: u32, time: f32) -> Transform {
        let cell = 2.0 / self.count.max(1) as f32;
        let x = -1.0 + cell * (index as f32 + 0.5);
        let phase = index as f32 * Self::PHASE;
        let pulse = 0.8 + 0.2 * (time * 2.0 + phase).sin();

        Transform::IDENTITY
            .scaled(cell.min(1.0) * 0.7 * pulse)
            .rotated(Vec3::Z, time * Self::SPIN + phase)
            .translated(Vec3::new(x, 0.0, 0.0))
    }

    pub fn records(&self, time: f32) -> Vec<InstanceRecord> {
        (0..self.count)
            .map(|i| self.transform(i, time).to_record())
            .collect()
    }
}
