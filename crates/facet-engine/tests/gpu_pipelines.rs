//! Builds the three pipelines on wgpu's no-op backend and records every draw
//! shape through them. Validation still runs, so a layout or binding mismatch
//! surfaces as an uncaptured error.

use facet_engine::binding::{SamplerConfig, WrapMode};
use facet_engine::layout::{ColorVertex, InstanceRecord, TexturedVertex};
use facet_engine::pipeline::{PipelineConfig, PipelineSet, PipelineVariant};
use facet_engine::render::{DrawInputs, InstanceBuffer, Mesh, RenderTarget};
use glam::{Mat4, Vec3};

const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

const TRIANGLE: [ColorVertex; 3] = [
    ColorVertex::new([0.0, 0.5, 0.0], [1.0, 0.0, 0.0, 1.0]),
    ColorVertex::new([-0.5, -0.5, 0.0], [0.0, 1.0, 0.0, 1.0]),
    ColorVertex::new([0.5, -0.5, 0.0], [0.0, 0.0, 1.0, 1.0]),
];

const QUAD: [TexturedVertex; 4] = [
    TexturedVertex::new([-0.5, 0.5, 0.0], [0.0, 0.0]),
    TexturedVertex::new([-0.5, -0.5, 0.0], [0.0, 1.0]),
    TexturedVertex::new([0.5, -0.5, 0.0], [1.0, 1.0]),
    TexturedVertex::new([0.5, 0.5, 0.0], [1.0, 0.0]),
];
const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

fn noop_device() -> (wgpu::Device, wgpu::Queue) {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::NOOP,
        backend_options: wgpu::BackendOptions {
            noop: wgpu::NoopBackendOptions { enable: true },
            ..Default::default()
        },
        ..Default::default()
    });

    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::default(),
        compatible_surface: None,
        force_fallback_adapter: false,
    }))
    .expect("no-op adapter");

    pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
        label: Some("facet test device"),
        required_features: wgpu::Features::empty(),
        required_limits: wgpu::Limits::downlevel_defaults(),
        experimental_features: wgpu::ExperimentalFeatures::disabled(),
        memory_hints: wgpu::MemoryHints::default(),
        trace: wgpu::Trace::Off,
    }))
    .expect("no-op device")
}

fn texture_2d(
    device: &wgpu::Device,
    label: &str,
    size: u32,
    usage: wgpu::TextureUsages,
) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: FORMAT,
        usage,
        view_formats: &[],
    })
}

fn row(count: usize) -> Vec<InstanceRecord> {
    (0..count)
        .map(|i| InstanceRecord::from_matrix(Mat4::from_translation(Vec3::X * i as f32 * 0.01)))
        .collect()
}

#[test]
fn every_variant_builds_for_the_target_format() {
    let (device, _queue) = noop_device();
    let pipelines = PipelineSet::new(&device, &PipelineConfig::new(FORMAT)).unwrap();

    assert_eq!(pipelines.color_format(), FORMAT);
    for variant in PipelineVariant::ALL {
        let pipeline = pipelines.get(variant);
        assert_eq!(pipeline.variant(), variant);
        assert_eq!(pipeline.color_format(), FORMAT);
    }
}

#[test]
fn instance_buffer_grows_past_its_minimum() {
    let (device, queue) = noop_device();

    let mut instances = InstanceBuffer::new(&device, &queue, &row(3));
    assert_eq!((instances.len(), instances.capacity()), (3, 64));

    instances.write(&device, &queue, &row(100));
    assert_eq!((instances.len(), instances.capacity()), (100, 128));

    instances.write(&device, &queue, &[]);
    assert!(instances.is_empty());
    assert_eq!(instances.capacity(), 128);
}

#[test]
fn all_draw_shapes_record_and_submit() {
    let (device, queue) = noop_device();
    let pipelines = PipelineSet::new(&device, &PipelineConfig::new(FORMAT)).unwrap();

    let target = texture_2d(
        &device,
        "facet test target",
        8,
        wgpu::TextureUsages::RENDER_ATTACHMENT,
    );
    let target_view = target.create_view(&wgpu::TextureViewDescriptor::default());

    let image = texture_2d(
        &device,
        "facet test image",
        2,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    let texels: [u8; 16] = [
        255, 255, 255, 255, 0, 0, 0, 255, //
        0, 0, 0, 255, 255, 255, 255, 255,
    ];
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &image,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &texels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(8),
            rows_per_image: Some(2),
        },
        wgpu::Extent3d {
            width: 2,
            height: 2,
            depth_or_array_layers: 1,
        },
    );
    let image_view = image.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = SamplerConfig::nearest(WrapMode::Repeat).create_sampler(&device);
    let texture = pipelines.create_texture_binding(&device, &image_view, &sampler);

    let triangle = Mesh::new(&device, "facet test triangle", &TRIANGLE, None);
    let quad = Mesh::new(&device, "facet test quad", &QUAD, Some(&QUAD_INDICES));
    assert_eq!(triangle.vertex_count(), 3);
    assert_eq!(quad.index_count(), Some(6));

    let mut instances = InstanceBuffer::new(&device, &queue, &row(2));
    instances.write(&device, &queue, &row(100));
    assert_eq!(instances.capacity(), 128);
    let no_instances = InstanceBuffer::new(&device, &queue, &[]);

    let draws = [
        DrawInputs::Color { mesh: &triangle },
        DrawInputs::Textured {
            mesh: &quad,
            texture: &texture,
        },
        DrawInputs::InstancedTextured {
            mesh: &quad,
            instances: &instances,
            texture: &texture,
        },
        DrawInputs::InstancedTextured {
            mesh: &quad,
            instances: &no_instances,
            texture: &texture,
        },
    ];

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("facet test encoder"),
    });
    {
        let mut target = RenderTarget::new(&mut encoder, &target_view);
        let mut pass = target.begin_pass("facet test pass", Some(wgpu::Color::BLACK));
        for draw in &draws {
            pipelines.draw(&mut pass, draw);
        }
    }
    queue.submit(std::iter::once(encoder.finish()));
}
