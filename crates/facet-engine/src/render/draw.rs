use crate::binding::{TextureBinding, TEXTURE_GROUP};
use crate::layout::{slot, ColorVertex, TexturedVertex};
use crate::pipeline::{Pipeline, PipelineVariant};

use super::{InstanceBuffer, Mesh};

/// Everything one draw binds, shaped per pipeline variant.
///
/// The mesh's vertex type fixes which variants it can reach, so a color mesh
/// can never be drawn through a textured pipeline.
#[derive(Debug, Copy, Clone)]
pub enum DrawInputs<'a> {
    Color {
        mesh: &'a Mesh<ColorVertex>,
    },
    Textured {
        mesh: &'a Mesh<TexturedVertex>,
        texture: &'a TextureBinding,
    },
    InstancedTextured {
        mesh: &'a Mesh<TexturedVertex>,
        instances: &'a InstanceBuffer,
        texture: &'a TextureBinding,
    },
}

impl DrawInputs<'_> {
    pub fn variant(&self) -> PipelineVariant {
        match self {
            DrawInputs::Color { .. } => PipelineVariant::Color,
            DrawInputs::Textured { .. } => PipelineVariant::Textured,
            DrawInputs::InstancedTextured { .. } => PipelineVariant::InstancedTextured,
        }
    }

    pub(crate) fn record(&self, pass: &mut wgpu::RenderPass<'_>, pipeline: &Pipeline) {
        debug_assert_eq!(pipeline.variant(), self.variant());

        match *self {
            DrawInputs::Color { mesh } => {
                pass.set_pipeline(pipeline.raw());
                mesh.record(pass, 0..1);
            }
            DrawInputs::Textured { mesh, texture } => {
                pass.set_pipeline(pipeline.raw());
                pass.set_bind_group(TEXTURE_GROUP, texture.bind_group(), &[]);
                mesh.record(pass, 0..1);
            }
            DrawInputs::InstancedTextured {
                mesh,
                instances,
                texture,
            } => {
                if instances.is_empty() {
                    log::trace!("instanced draw with no instances skipped");
                    return;
                }
                pass.set_pipeline(pipeline.raw());
                pass.set_bind_group(TEXTURE_GROUP, texture.bind_group(), &[]);
                pass.set_vertex_buffer(slot::INSTANCE, instances.slice());
                mesh.record(pass, 0..instances.len());
            }
        }
    }
}
