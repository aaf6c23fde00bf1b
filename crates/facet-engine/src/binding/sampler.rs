/// Texel filtering applied when the sampled footprint does not hit a texel center.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FilterMode {
    Nearest,
    #[default]
    Linear,
}

/// How texture coordinates outside `[0, 1]` are resolved.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum WrapMode {
    #[default]
    ClampToEdge,
    Repeat,
    MirrorRepeat,
}

/// Sampler policy for the texture group.
///
/// The same description creates the GPU sampler and drives the CPU reference
/// sampler in [`crate::stage::fragment`], so both resolve a coordinate the same
/// way. Mip levels are not used: the textures carry a single level.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct SamplerConfig {
    pub filter: FilterMode,
    pub wrap: WrapMode,
}

impl SamplerConfig {
    pub const fn new(filter: FilterMode, wrap: WrapMode) -> Self {
        Self { filter, wrap }
    }

    pub const fn nearest(wrap: WrapMode) -> Self {
        Self::new(FilterMode::Nearest, wrap)
    }

    pub const fn linear(wrap: WrapMode) -> Self {
        Self::new(FilterMode::Linear, wrap)
    }

    pub fn descriptor<'a>(&self, label: Option<&'a str>) -> wgpu::SamplerDescriptor<'a> {
        let address_mode = self.wrap.into();
        let filter = self.filter.into();

        wgpu::SamplerDescriptor {
            label,
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: address_mode,
            mag_filter: filter,
            min_filter: filter,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }
    }

    pub fn create_sampler(&self, device: &wgpu::Device) -> wgpu::Sampler {
        device.create_sampler(&self.descriptor(Some("facet texture sampler")))
    }
}

impl From<FilterMode> for wgpu::FilterMode {
    fn from(mode: FilterMode) -> Self {
        match mode {
            FilterMode::Nearest => wgpu::FilterMode::Nearest,
            FilterMode::Linear => wgpu::FilterMode::Linear,
        }
    }
}

impl From<WrapMode> for wgpu::AddressMode {
    fn from(mode: WrapMode) -> Self {
        match mode {
            WrapMode::ClampToEdge => wgpu::AddressMode::ClampToEdge,
            WrapMode::Repeat => wgpu::AddressMode::Repeat,
            WrapMode::MirrorRepeat => wgpu::AddressMode::MirrorRepeat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_linear_clamped() {
        let d = SamplerConfig::default().descriptor(None);
        assert_eq!(d.mag_filter, wgpu::FilterMode::Linear);
        assert_eq!(d.min_filter, wgpu::FilterMode::Linear);
        assert_eq!(d.address_mode_u, wgpu::AddressMode::ClampToEdge);
        assert_eq!(d.address_mode_v, wgpu::AddressMode::ClampToEdge);
    }

    #[test]
    fn wrap_applies_to_every_axis() {
        let d = SamplerConfig::nearest(WrapMode::MirrorRepeat).descriptor(Some("s"));
        assert_eq!(d.label, Some("s"));
        assert_eq!(d.mag_filter, wgpu::FilterMode::Nearest);
        for mode in [d.address_mode_u, d.address_mode_v, d.address_mode_w] {
            assert_eq!(mode, wgpu::AddressMode::MirrorRepeat);
        }
    }
}
