//! Demo driver for the facet pipelines.
//!
//! Opens a window, uploads the geometry and texture for the chosen scene and
//! draws it every frame through `facet_engine`.

mod animation;
mod args;
mod device;
mod runtime;
mod scene;
mod texture;

use anyhow::Result;
use clap::Parser;
use facet_engine::logging::{init_logging, LoggingConfig};

use crate::args::Args;
use crate::device::GpuInit;
use crate::runtime::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..Default::default()
    });

    let scene = args.scene_config();
    log::info!(
        "starting {:?} demo ({} instances, {:?})",
        scene.kind,
        scene.instances,
        scene.sampler
    );

    let config = RuntimeConfig {
        title: scene.kind.title().to_string(),
        ..Default::default()
    };

    Runtime::run(config, GpuInit::default(), scene)
}
