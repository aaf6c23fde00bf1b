/// Fixed-function state shared by the three pipelines.
///
/// The programmable stages are fixed per variant; everything here is the
/// surrounding state the driver chooses once at startup.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Format of the single color attachment.
    pub color_format: wgpu::TextureFormat,

    pub topology: wgpu::PrimitiveTopology,

    pub front_face: wgpu::FrontFace,

    /// `None` draws both faces, which keeps mirrored instance transforms visible.
    pub cull_mode: Option<wgpu::Face>,

    /// Check the bundled WGSL against the buffer layouts before creating the
    /// pipelines. Defaults to on in debug builds.
    pub verify_contracts: bool,
}

impl PipelineConfig {
    pub fn new(color_format: wgpu::TextureFormat) -> Self {
        Self {
            color_format,
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            verify_contracts: cfg!(debug_assertions),
        }
    }

    pub(crate) fn primitive_state(&self) -> wgpu::PrimitiveState {
        wgpu::PrimitiveState {
            topology: self.topology,
            strip_index_format: None,
            front_face: self.front_face,
            cull_mode: self.cull_mode,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(wgpu::TextureFormat::Bgra8UnormSrgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_draw_both_faces_as_triangle_lists() {
        let config = PipelineConfig::new(wgpu::TextureFormat::Rgba8UnormSrgb);
        let primitive = config.primitive_state();

        assert_eq!(config.color_format, wgpu::TextureFormat::Rgba8UnormSrgb);
        assert_eq!(primitive.topology, wgpu::PrimitiveTopology::TriangleList);
        assert_eq!(primitive.cull_mode, None);
        assert_eq!(primitive.polygon_mode, wgpu::PolygonMode::Fill);
        assert_eq!(config.verify_contracts, cfg!(debug_assertions));
    }
}
