//! GPU side of a draw.
//!
//! Owns the buffers a draw reads ([`Mesh`], [`InstanceBuffer`]) and the
//! [`DrawInputs`] that tie them to a pipeline variant. Recording goes through
//! [`crate::pipeline::PipelineSet::draw`].
//!
//! Convention:
//! - Positions are already in clip space; there is no camera or viewport uniform.
//! - Slot 0 carries vertices, slot 1 carries instance records.

mod ctx;
mod draw;
mod instances;
mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use draw::DrawInputs;
pub use instances::InstanceBuffer;
pub use mesh::Mesh;
