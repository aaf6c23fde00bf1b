//! Texture binding group contract.
//!
//! The textured pipelines read one sampled image and one sampler, both in
//! group [`TEXTURE_GROUP`]. The driver creates the image, view and sampler; the
//! core only declares the slots and wraps the resulting bind group.

mod sampler;

pub use sampler::{FilterMode, SamplerConfig, WrapMode};

/// Bind group index of the texture group.
pub const TEXTURE_GROUP: u32 = 0;

/// Binding of the sampled `texture_2d<f32>`.
pub const IMAGE_BINDING: u32 = 0;

/// Binding of the filtering sampler.
pub const SAMPLER_BINDING: u32 = 1;

/// Layout entries of the texture group, visible to the fragment stage only.
pub fn texture_layout_entries() -> [wgpu::BindGroupLayoutEntry; 2] {
    [
        wgpu::BindGroupLayoutEntry {
            binding: IMAGE_BINDING,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        },
        wgpu::BindGroupLayoutEntry {
            binding: SAMPLER_BINDING,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        },
    ]
}

pub(crate) fn create_texture_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("facet texture bgl"),
        entries: &texture_layout_entries(),
    })
}

/// An image + sampler pair bound at group 0.
///
/// Immutable once created. The referenced view and sampler are kept alive by
/// the bind group itself.
#[derive(Debug, Clone)]
pub struct TextureBinding {
    bind_group: wgpu::BindGroup,
}

impl TextureBinding {
    /// Builds the bind group against `layout`, which must be the texture layout
    /// the textured pipelines were created with
    /// (see [`crate::pipeline::PipelineSet::texture_layout`]).
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> Self {
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("facet texture bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: IMAGE_BINDING,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: SAMPLER_BINDING,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        Self { bind_group }
    }

    #[inline]
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
