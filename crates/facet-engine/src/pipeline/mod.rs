//! The three render pipelines.
//!
//! [`PipelineSet`] builds every variant up front for one color format. Draws
//! select a pipeline by [`PipelineVariant`]; nothing is created lazily.

mod config;
mod variant;

pub use config::PipelineConfig;
pub use variant::PipelineVariant;

use crate::binding::{self, TextureBinding};
use crate::contract::{self, ContractError};
use crate::render::DrawInputs;

/// A compiled render pipeline and the state it was built for.
#[derive(Debug)]
pub struct Pipeline {
    variant: PipelineVariant,
    color_format: wgpu::TextureFormat,
    raw: wgpu::RenderPipeline,
}

impl Pipeline {
    fn new(
        device: &wgpu::Device,
        variant: PipelineVariant,
        config: &PipelineConfig,
        texture_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let program = variant.shader();
        let shader = program.create_module(device);

        let texture_layouts = [texture_layout];
        let bind_group_layouts: &[&wgpu::BindGroupLayout] = if variant.binds_texture() {
            &texture_layouts
        } else {
            &[]
        };

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(variant.label()),
            bind_group_layouts,
            immediate_size: 0,
        });

        let buffers = variant.vertex_buffers();

        let raw = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(variant.label()),
            layout: Some(&layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(program.vertex_entry),
                compilation_options: Default::default(),
                buffers: &buffers,
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(program.fragment_entry),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: config.primitive_state(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!(
            "created {} for {:?} ({} vertex buffers)",
            variant.label(),
            config.color_format,
            buffers.len()
        );

        Self {
            variant,
            color_format: config.color_format,
            raw,
        }
    }

    #[inline]
    pub fn variant(&self) -> PipelineVariant {
        self.variant
    }

    #[inline]
    pub fn color_format(&self) -> wgpu::TextureFormat {
        self.color_format
    }

    #[inline]
    pub fn raw(&self) -> &wgpu::RenderPipeline {
        &self.raw
    }
}

/// All three pipelines plus the texture group layout they share.
#[derive(Debug)]
pub struct PipelineSet {
    color: Pipeline,
    textured: Pipeline,
    instanced: Pipeline,
    texture_layout: wgpu::BindGroupLayout,
}

impl PipelineSet {
    /// Builds every variant for `config.color_format`.
    ///
    /// With `verify_contracts` set, each bundled program is checked against its
    /// vertex buffers and texture group first, and the first mismatch is
    /// returned instead of a pipeline.
    pub fn new(device: &wgpu::Device, config: &PipelineConfig) -> Result<Self, ContractError> {
        if config.verify_contracts {
            for variant in PipelineVariant::ALL {
                contract::verify(variant).inspect_err(|e| log::error!("{e}"))?;
            }
        }

        let texture_layout = binding::create_texture_layout(device);

        let color = Pipeline::new(device, PipelineVariant::Color, config, &texture_layout);
        let textured = Pipeline::new(device, PipelineVariant::Textured, config, &texture_layout);
        let instanced = Pipeline::new(
            device,
            PipelineVariant::InstancedTextured,
            config,
            &texture_layout,
        );

        Ok(Self {
            color,
            textured,
            instanced,
            texture_layout,
        })
    }

    pub fn get(&self, variant: PipelineVariant) -> &Pipeline {
        match variant {
            PipelineVariant::Color => &self.color,
            PipelineVariant::Textured => &self.textured,
            PipelineVariant::InstancedTextured => &self.instanced,
        }
    }

    #[inline]
    pub fn color_format(&self) -> wgpu::TextureFormat {
        self.color.color_format
    }

    /// Layout of the texture group used by both textured variants.
    #[inline]
    pub fn texture_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_layout
    }

    /// Binds `view` and `sampler` against this set's texture group layout.
    pub fn create_texture_binding(
        &self,
        device: &wgpu::Device,
        view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> TextureBinding {
        TextureBinding::new(device, &self.texture_layout, view, sampler)
    }

    /// Records one draw into `pass` with the pipeline matching `inputs`.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, inputs: &DrawInputs<'_>) {
        inputs.record(pass, self.get(inputs.variant()));
    }
}
