//! Bundled WGSL programs.
//!
//! One program per pipeline variant. The two textured variants share their
//! fragment stage source verbatim; only the vertex stage differs.

/// A WGSL module with one vertex and one fragment entry point.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderProgram {
    pub label: &'static str,
    pub source: &'static str,
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
}

pub const COLOR: ShaderProgram = ShaderProgram {
    label: "facet color shader",
    source: include_str!("color.wgsl"),
    vertex_entry: "vs_main",
    fragment_entry: "fs_main",
};

pub const TEXTURED: ShaderProgram = ShaderProgram {
    label: "facet textured shader",
    source: concat!(include_str!("textured_vs.wgsl"), include_str!("textured_fs.wgsl")),
    vertex_entry: "vs_main",
    fragment_entry: "fs_main",
};

pub const INSTANCED_TEXTURED: ShaderProgram = ShaderProgram {
    label: "facet instanced shader",
    source: concat!(include_str!("instanced_vs.wgsl"), include_str!("textured_fs.wgsl")),
    vertex_entry: "vs_main",
    fragment_entry: "fs_main",
};

impl ShaderProgram {
    pub fn create_module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(self.label),
            source: wgpu::ShaderSource::Wgsl(self.source.into()),
        })
    }
}
