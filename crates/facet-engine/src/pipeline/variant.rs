use crate::layout::{ColorVertex, InstanceRecord, TexturedVertex, VertexLayout};
use crate::shader::{self, ShaderProgram};

/// The three fixed pipeline configurations.
///
/// Each variant names its program, its vertex buffers and whether it reads the
/// texture group. Nothing is switched at draw time: a new capability is a new
/// variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PipelineVariant {
    /// Position + color, flat color output.
    Color,
    /// Position + UV, texture sample output.
    Textured,
    /// Position + UV with a per-instance transform, texture sample output.
    InstancedTextured,
}

impl PipelineVariant {
    pub const ALL: [Self; 3] = [Self::Color, Self::Textured, Self::InstancedTextured];

    pub fn label(self) -> &'static str {
        match self {
            Self::Color => "facet color pipeline",
            Self::Textured => "facet textured pipeline",
            Self::InstancedTextured => "facet instanced pipeline",
        }
    }

    pub fn shader(self) -> ShaderProgram {
        match self {
            Self::Color => shader::COLOR,
            Self::Textured => shader::TEXTURED,
            Self::InstancedTextured => shader::INSTANCED_TEXTURED,
        }
    }

    /// Vertex buffer layouts in slot order.
    pub fn vertex_buffers(self) -> Vec<wgpu::VertexBufferLayout<'static>> {
        match self {
            Self::Color => vec![ColorVertex::buffer_layout()],
            Self::Textured => vec![TexturedVertex::buffer_layout()],
            Self::InstancedTextured => {
                vec![TexturedVertex::buffer_layout(), InstanceRecord::buffer_layout()]
            }
        }
    }

    /// Whether the variant samples the texture group at group 0.
    pub fn binds_texture(self) -> bool {
        !matches!(self, Self::Color)
    }

    pub fn is_instanced(self) -> bool {
        matches!(self, Self::InstancedTextured)
    }
}

#[cfg(test)]
mod tests {
    use crate::layout::slot;

    use super::*;

    #[test]
    fn each_variant_extends_the_previous_one() {
        let color = PipelineVariant::Color;
        let textured = PipelineVariant::Textured;
        let instanced = PipelineVariant::InstancedTextured;

        assert!(!color.binds_texture() && !color.is_instanced());
        assert!(textured.binds_texture() && !textured.is_instanced());
        assert!(instanced.binds_texture() && instanced.is_instanced());

        let textured_buffers = textured.vertex_buffers();
        let instanced_buffers = instanced.vertex_buffers();
        assert_eq!(instanced_buffers[slot::VERTEX as usize], textured_buffers[0]);
    }

    #[test]
    fn instance_buffer_sits_in_its_slot() {
        let buffers = PipelineVariant::InstancedTextured.vertex_buffers();
        assert_eq!(buffers.len(), 2);
        assert_eq!(buffers[slot::INSTANCE as usize].step_mode, wgpu::VertexStepMode::Instance);
    }

    #[test]
    fn labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            PipelineVariant::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(labels.len(), 3);
    }
}
