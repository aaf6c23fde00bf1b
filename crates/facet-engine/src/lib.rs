//! facet engine crate.
//!
//! Owns the shader-stage contracts and the three render pipeline variants used
//! by the facet demos: flat color, single texture, and instanced transform.
//! Window, surface and image handling belong to the driver.

pub mod binding;
pub mod contract;
pub mod layout;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod shader;
pub mod stage;
