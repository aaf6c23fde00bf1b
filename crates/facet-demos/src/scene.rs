//! The three demo scenes.
//!
//! Each scene owns the buffers and texture its pipeline variant reads and
//! records one draw per frame.

use anyhow::{Context, Result};
use facet_engine::binding::SamplerConfig;
use facet_engine::layout::{ColorVertex, TexturedVertex};
use facet_engine::pipeline::{PipelineConfig, PipelineSet};
use facet_engine::render::{DrawInputs, InstanceBuffer, Mesh, RenderCtx, RenderTarget};

use crate::animation::InstanceRow;
use crate::texture::{DemoTexture, TextureSource};

const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.03,
    a: 1.0,
};

const TRIANGLE: [ColorVertex; 3] = [
    ColorVertex::new([0.0, 0.5, 0.0], [1.0, 0.0, 0.0, 1.0]),
    ColorVertex::new([-0.5, -0.5, 0.0], [0.0, 1.0, 0.0, 1.0]),
    ColorVertex::new([0.5, -0.5, 0.0], [0.0, 0.0, 1.0, 1.0]),
];

/// Unit quad centered on the origin; `v` grows downwards.
pub const QUAD: [TexturedVertex; 4] = [
    TexturedVertex::new([-0.5, -0.5, 0.0], [0.0, 1.0]),
    TexturedVertex::new([0.5, -0.5, 0.0], [1.0, 1.0]),
    TexturedVertex::new([0.5, 0.5, 0.0], [1.0, 0.0]),
    TexturedVertex::new([-0.5, 0.5, 0.0], [0.0, 0.0]),
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SceneKind {
    /// Per-vertex colored triangle.
    Color,
    /// Textured quad.
    Texture,
    /// A row of animated textured quads.
    Instanced,
}

impl SceneKind {
    pub fn title(self) -> &'static str {
        match self {
            SceneKind::Color => "facet - color",
            SceneKind::Texture => "facet - texture",
            SceneKind::Instanced => "facet - instanced",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub kind: SceneKind,
    pub texture: TextureSource,
    pub sampler: SamplerConfig,
    pub instances: u32,
}

enum Content {
    Color {
        mesh: Mesh<ColorVertex>,
    },
    Texture {
        mesh: Mesh<TexturedVertex>,
        texture: DemoTexture,
    },
    Instanced {
        mesh: Mesh<TexturedVertex>,
        texture: DemoTexture,
        instances: InstanceBuffer,
        row: InstanceRow,
    },
}

pub struct Scene {
    pipelines: PipelineSet,
    content: Content,
}

impl Scene {
    pub fn new(ctx: &RenderCtx<'_>, config: &SceneConfig) -> Result<Self> {
        let pipelines = PipelineSet::new(ctx.device, &PipelineConfig::new(ctx.color_format))
            .context("bundled shaders do not match their pipeline layouts")?;

        let content = match config.kind {
            SceneKind::Color => Content::Color {
                mesh: Mesh::new(ctx.device, "facet triangle", &TRIANGLE, None),
            },
            SceneKind::Texture => Content::Texture {
                mesh: quad_mesh(ctx),
                texture: load_texture(ctx, &pipelines, config)?,
            },
            SceneKind::Instanced => {
                let row = InstanceRow::new(config.instances);
                Content::Instanced {
                    mesh: quad_mesh(ctx),
                    texture: load_texture(ctx, &pipelines, config)?,
                    instances: InstanceBuffer::new(ctx.device, ctx.queue, &row.records(0.0)),
                    row,
                }
            }
        };

        log::info!("scene ready: {:?}", config.kind);
        Ok(Self { pipelines, content })
    }

    /// Records one frame at `time` seconds into `target`.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, time: f32) {
        if let Content::Instanced { instances, row, .. } = &mut self.content {
            instances.write(ctx.device, ctx.queue, &row.records(time));
        }

        let inputs = match &self.content {
            Content::Color { mesh } => DrawInputs::Color { mesh },
            Content::Texture { mesh, texture } => DrawInputs::Textured {
                mesh,
                texture: texture.binding(),
            },
            Content::Instanced {
                mesh,
                texture,
                instances,
                ..
            } => DrawInputs::InstancedTextured {
                mesh,
                instances,
                texture: texture.binding(),
            },
        };

        let mut pass = target.begin_pass("facet scene pass", Some(CLEAR));
        self.pipelines.draw(&mut pass, &inputs);
    }
}

fn quad_mesh(ctx: &RenderCtx<'_>) -> Mesh<TexturedVertex> {
    Mesh::new(ctx.device, "facet quad", &QUAD, Some(&QUAD_INDICES))
}

fn load_texture(
    ctx: &RenderCtx<'_>,
    pipelines: &PipelineSet,
    config: &SceneConfig,
) -> Result<DemoTexture> {
    let image = config.texture.load()?;
    DemoTexture::upload(ctx, pipelines, &image, &config.sampler)
}

#[cfg(test)]
mod tests {
    use facet_engine::binding::WrapMode;
    use facet_engine::stage::{Framebuffer, ReferenceDraw, ReferenceTexture, TexelGrid};
    use glam::Vec4;

    use super::*;

    #[test]
    fn quad_uv_origin_is_the_top_left_corner() {
        let grid = TexelGrid::checkerboard(2, Vec4::ONE, Vec4::ZERO);
        let draw = ReferenceDraw::Textured {
            vertices: &QUAD,
            indices: Some(&QUAD_INDICES),
            texture: ReferenceTexture {
                texels: &grid,
                sampler: SamplerConfig::nearest(WrapMode::ClampToEdge),
            },
        };

        let mut fb = Framebuffer::new(8, 8, Vec4::splat(0.5));
        fb.draw(&draw);

        // The quad covers pixels 2..6 on both axes.
        assert_eq!(fb.color(2, 2), Some(Vec4::ONE));
        assert_eq!(fb.color(5, 2), Some(Vec4::ZERO));
        assert_eq!(fb.color(2, 5), Some(Vec4::ZERO));
        assert_eq!(fb.color(5, 5), Some(Vec4::ONE));
        assert_eq!(fb.coverage(1, 1), 0);
    }

    #[test]
    fn triangle_covers_the_center() {
        let mut fb = Framebuffer::new(8, 8, Vec4::ZERO);
        fb.draw(&ReferenceDraw::Color {
            vertices: &TRIANGLE,
            indices: None,
        });
        assert_eq!(fb.coverage(4, 4), 1);
        assert_eq!(fb.coverage(0, 0), 0);
    }
}
