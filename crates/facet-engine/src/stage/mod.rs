//! CPU reference implementation of the programmable stages.
//!
//! The WGSL programs in [`crate::shader`] are the real stages. The functions
//! here compute the same values on the CPU with the same `f32` arithmetic so
//! the numeric contract (pass-through, `M * [p, 1]`, wrap-mode sampling) can be
//! tested without a GPU. [`Framebuffer`] adds a small rasterizer with
//! perspective-correct interpolation for whole-draw checks.

mod draw;
pub mod fragment;
mod raster;
mod texels;
pub mod vertex;

use glam::{Vec2, Vec4};

pub use draw::{ReferenceDraw, ReferenceTexture};
pub use raster::Framebuffer;
pub use texels::TexelGrid;

/// A value carried from the vertex stage to the fragment stage.
pub trait Varying: Copy {
    /// `values[0] * weights[0] + values[1] * weights[1] + values[2] * weights[2]`.
    fn weighted_sum(values: [Self; 3], weights: [f32; 3]) -> Self;
}

impl Varying for Vec2 {
    #[inline]
    fn weighted_sum(values: [Self; 3], weights: [f32; 3]) -> Self {
        values[0] * weights[0] + values[1] * weights[1] + values[2] * weights[2]
    }
}

impl Varying for Vec4 {
    #[inline]
    fn weighted_sum(values: [Self; 3], weights: [f32; 3]) -> Self {
        values[0] * weights[0] + values[1] * weights[1] + values[2] * weights[2]
    }
}

/// Output of a vertex stage: clip position plus the secondary attribute.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexOutput<V> {
    pub clip_position: Vec4,
    pub varying: V,
}

/// Interpolates the varyings of a triangle at screen-space barycentric
/// `weights`, with perspective correction from the clip `w` of each vertex.
///
/// Falls back to the screen-space weights when the corrected weights do not
/// normalize (all `w` infinite or the weights sum to zero).
pub fn interpolate<V: Varying>(triangle: &[VertexOutput<V>; 3], weights: [f32; 3]) -> V {
    let corrected = [
        weights[0] / triangle[0].clip_position.w,
        weights[1] / triangle[1].clip_position.w,
        weights[2] / triangle[2].clip_position.w,
    ];
    let sum = corrected[0] + corrected[1] + corrected[2];

    let weights = if sum.is_finite() && sum != 0.0 {
        [corrected[0] / sum, corrected[1] / sum, corrected[2] / sum]
    } else {
        weights
    };

    V::weighted_sum(triangle.map(|v| v.varying), weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out(w: f32, uv: [f32; 2]) -> VertexOutput<Vec2> {
        VertexOutput {
            clip_position: Vec4::new(0.0, 0.0, 0.0, w),
            varying: Vec2::from(uv),
        }
    }

    #[test]
    fn unit_w_interpolation_is_the_barycentric_average() {
        let tri = [out(1.0, [0.0, 0.0]), out(1.0, [1.0, 0.0]), out(1.0, [0.0, 1.0])];
        let v = interpolate(&tri, [0.2, 0.3, 0.5]);
        assert!((v - Vec2::new(0.3, 0.5)).abs().max_element() < 1e-6);
    }

    #[test]
    fn vertex_weights_reproduce_vertex_values() {
        let tri = [out(2.0, [0.1, 0.9]), out(0.5, [0.7, 0.2]), out(4.0, [0.3, 0.3])];
        for (i, expected) in tri.iter().enumerate() {
            let mut w = [0.0; 3];
            w[i] = 1.0;
            assert!((interpolate(&tri, w) - expected.varying).abs().max_element() < 1e-6);
        }
    }

    #[test]
    fn perspective_pulls_towards_the_nearer_vertex() {
        // Vertex 0 has w = 1 (near), vertex 1 has w = 3 (far).
        let tri = [out(1.0, [0.0, 0.0]), out(3.0, [1.0, 0.0]), out(3.0, [1.0, 0.0])];
        let v = interpolate(&tri, [0.5, 0.5, 0.0]);
        // 0.5/3 / (0.5/1 + 0.5/3) = 0.25
        assert!((v.x - 0.25).abs() < 1e-6);
    }
}
