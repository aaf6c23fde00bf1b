//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use facet_engine::binding::{FilterMode, SamplerConfig, WrapMode};

use crate::scene::{SceneConfig, SceneKind};
use crate::texture::TextureSource;

#[derive(Parser, Debug)]
#[command(name = "facet-demos", about = "Color, textured and instanced pipeline demos")]
pub struct Args {
    /// Which demo to open.
    #[arg(short, long, value_enum, default_value_t = SceneKind::Instanced)]
    pub scene: SceneKind,

    /// Image to texture the quad with. Defaults to a generated checkerboard.
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Number of instances in the instanced demo.
    #[arg(short = 'n', long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=4096))]
    pub instances: u32,

    #[arg(long, value_enum, default_value_t = CliFilter::Nearest)]
    pub filter: CliFilter,

    #[arg(long, value_enum, default_value_t = CliWrap::ClampToEdge)]
    pub wrap: CliWrap,

    /// Log filter in `env_logger` syntax; overrides `RUST_LOG`.
    #[arg(long)]
    pub log: Option<String>,
}

impl Args {
    pub fn scene_config(&self) -> SceneConfig {
        let texture = match &self.image {
            Some(path) => TextureSource::File(path.clone()),
            None => TextureSource::CHECKERBOARD,
        };

        SceneConfig {
            kind: self.scene,
            texture,
            sampler: SamplerConfig::new(self.filter.into(), self.wrap.into()),
            instances: self.instances,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFilter {
    Nearest,
    Linear,
}

impl From<CliFilter> for FilterMode {
    fn from(cli: CliFilter) -> Self {
        match cli {
            CliFilter::Nearest => FilterMode::Nearest,
            CliFilter::Linear => FilterMode::Linear,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliWrap {
    #[value(name = "clamp")]
    ClampToEdge,
    Repeat,
    #[value(name = "mirror")]
    MirrorRepeat,
}

impl From<CliWrap> for WrapMode {
    fn from(cli: CliWrap) -> Self {
        match cli {
            CliWrap::ClampToEdge => WrapMode::ClampToEdge,
            CliWrap::Repeat => WrapMode::Repeat,
            CliWrap::MirrorRepeat => WrapMode::MirrorRepeat,
        }
    }
}
