//! Image decoding and texture upload.

use std::path::PathBuf;

use anyhow::{Context, Result};
use facet_engine::binding::{SamplerConfig, TextureBinding};
use facet_engine::pipeline::PipelineSet;
use facet_engine::render::RenderCtx;
use image::{Rgba, RgbaImage};

const LIGHT: Rgba<u8> = Rgba([235, 235, 235, 255]);
const DARK: Rgba<u8> = Rgba([40, 40, 48, 255]);

/// Where the demo texture comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureSource {
    File(PathBuf),
    Checkerboard { size: u32, cells: u32 },
}

impl TextureSource {
    pub const CHECKERBOARD: Self = Self::Checkerboard { size: 256, cells: 8 };

    pub fn load(&self) -> Result<RgbaImage> {
        match self {
            TextureSource::File(path) => {
                let image = image::open(path)
                    .with_context(|| format!("failed to decode {}", path.display()))?;
                Ok(image.to_rgba8())
            }
            TextureSource::Checkerboard { size, cells } => Ok(checkerboard(*size, *cells, LIGHT, DARK)),
        }
    }
}

/// `size x size` image of `cells x cells` squares, `even` at the top-left.
pub fn checkerboard(size: u32, cells: u32, even: Rgba<u8>, odd: Rgba<u8>) -> RgbaImage {
    let size = size.max(1);
    let cell = (size / cells.max(1)).max(1);

    RgbaImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            even
        } else {
            odd
        }
    })
}

/// Rejects images the device cannot hold in a single 2D texture.
pub fn check_texture_size(width: u32, height: u32, max_dimension: u32) -> Result<()> {
    anyhow::ensure!(width > 0 && height > 0, "image has zero size ({width}x{height})");
    if width > max_dimension || height > max_dimension {
        anyhow::bail!(
            "image is {width}x{height}, larger than the device texture limit of {max_dimension}"
        );
    }
    Ok(())
}

/// A single-level sRGB texture bound at the texture group.
pub struct DemoTexture {
    _texture: wgpu::Texture,
    binding: TextureBinding,
}

impl DemoTexture {
    pub fn upload(
        ctx: &RenderCtx<'_>,
        pipelines: &PipelineSet,
        image: &RgbaImage,
        sampler: &SamplerConfig,
    ) -> Result<Self> {
        let (width, height) = image.dimensions();
        check_texture_size(width, height, ctx.device.limits().max_texture_dimension_2d)?;

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("facet demo texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = sampler.create_sampler(ctx.device);
        let binding = pipelines.create_texture_binding(ctx.device, &view, &sampler);

        log::debug!("uploaded {width}x{height} texture");

        Ok(Self {
            _texture: texture,
            binding,
        })
    }

    pub fn binding(&self) -> &TextureBinding {
        &self.binding
    }
}
