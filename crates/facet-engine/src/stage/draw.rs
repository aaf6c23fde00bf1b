use crate::binding::SamplerConfig;
use crate::layout::{ColorVertex, InstanceRecord, TexturedVertex};
use crate::pipeline::PipelineVariant;

use super::{fragment, vertex, Framebuffer, TexelGrid, VertexOutput};

/// Texture + sampler pair for a reference draw.
#[derive(Debug, Copy, Clone)]
pub struct ReferenceTexture<'a> {
    pub texels: &'a TexelGrid,
    pub sampler: SamplerConfig,
}

/// CPU counterpart of [`crate::render::DrawInputs`].
///
/// `indices` lists triangles as index triples; `None` draws the vertices in
/// order. Triangles referencing a missing vertex are skipped.
#[derive(Debug, Copy, Clone)]
pub enum ReferenceDraw<'a> {
    Color {
        vertices: &'a [ColorVertex],
        indices: Option<&'a [u16]>,
    },
    Textured {
        vertices: &'a [TexturedVertex],
        indices: Option<&'a [u16]>,
        texture: ReferenceTexture<'a>,
    },
    InstancedTextured {
        vertices: &'a [TexturedVertex],
        indices: Option<&'a [u16]>,
        instances: &'a [InstanceRecord],
        texture: ReferenceTexture<'a>,
    },
}

impl ReferenceDraw<'_> {
    pub fn variant(&self) -> PipelineVariant {
        match self {
            ReferenceDraw::Color { .. } => PipelineVariant::Color,
            ReferenceDraw::Textured { .. } => PipelineVariant::Textured,
            ReferenceDraw::InstancedTextured { .. } => PipelineVariant::InstancedTextured,
        }
    }
}

impl Framebuffer {
    /// Runs a whole draw through the reference stages.
    pub fn draw(&mut self, draw: &ReferenceDraw<'_>) {
        match *draw {
            ReferenceDraw::Color { vertices, indices } => {
                for tri in triangles(vertices, indices) {
                    self.rasterize(tri.map(vertex::pass_through_color), fragment::flat_color);
                }
            }
            ReferenceDraw::Textured {
                vertices,
                indices,
                texture,
            } => {
                for tri in triangles(vertices, indices) {
                    self.rasterize(tri.map(vertex::pass_through_textured), |uv| {
                        fragment::sample_texture(texture.texels, &texture.sampler, uv)
                    });
                }
            }
            ReferenceDraw::InstancedTextured {
                vertices,
                indices,
                instances,
                texture,
            } => {
                if instances.is_empty() {
                    log::debug!("reference draw with zero instances; nothing rasterized");
                }
                for instance in instances {
                    for tri in triangles(vertices, indices) {
                        let outputs: [VertexOutput<_>; 3] =
                            tri.map(|v| vertex::instanced_transform(v, instance));
                        self.rasterize(outputs, |uv| {
                            fragment::sample_texture(texture.texels, &texture.sampler, uv)
                        });
                    }
                }
            }
        }
    }
}

fn triangles<'v, T>(
    vertices: &'v [T],
    indices: Option<&'v [u16]>,
) -> impl Iterator<Item = [&'v T; 3]> + 'v {
    let count = indices.map_or(vertices.len(), <[u16]>::len) / 3;

    (0..count).filter_map(move |t| {
        let index = move |corner: usize| -> Option<&'v T> {
            let i = match indices {
                Some(indices) => usize::from(indices[t * 3 + corner]),
                None => t * 3 + corner,
            };
            vertices.get(i)
        };
        Some([index(0)?, index(1)?, index(2)?])
    })
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn triangles_follow_indices_and_skip_bad_ones() {
        let verts = [10, 11, 12, 13];
        let tris: Vec<[&i32; 3]> = triangles(&verts, Some(&[0, 1, 3, 1, 2, 9, 2])).collect();
        assert_eq!(tris, vec![[&10, &11, &13]]);

        let tris: Vec<[&i32; 3]> = triangles(&verts, None).collect();
        assert_eq!(tris, vec![[&10, &11, &12]]);
    }

    #[test]
    fn color_draw_fills_with_vertex_color() {
        let red = [1.0, 0.0, 0.0, 1.0];
        let verts = [
            ColorVertex::new([-1.0, -1.0, 0.0], red),
            ColorVertex::new([3.0, -1.0, 0.0], red),
            ColorVertex::new([-1.0, 3.0, 0.0], red),
        ];
        let draw = ReferenceDraw::Color {
            vertices: &verts,
            indices: None,
        };
        assert_eq!(draw.variant(), PipelineVariant::Color);

        let mut fb = Framebuffer::new(4, 4, Vec4::ZERO);
        fb.draw(&draw);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(fb.color(x, y), Some(Vec4::from(red)));
                assert_eq!(fb.coverage(x, y), 1);
            }
        }
    }
}
