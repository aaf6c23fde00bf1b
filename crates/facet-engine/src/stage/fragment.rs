//! Fragment stage programs.

use glam::{Vec2, Vec4};

use crate::binding::{FilterMode, SamplerConfig, WrapMode};

use super::TexelGrid;

/// Color variant: the interpolated color is the pixel color.
#[inline]
pub fn flat_color(color: Vec4) -> Vec4 {
    color
}

/// Textured variants: filtered lookup of `texels` at `uv`.
///
/// Follows the usual GPU rules for a single mip level. Nearest picks the texel
/// containing `uv * size`; linear blends the four texels around
/// `uv * size - 0.5`. Every integer coordinate is resolved through the wrap
/// mode before the lookup, so any `uv` (including infinities and NaN) reads a
/// valid texel.
pub fn sample_texture(texels: &TexelGrid, sampler: &SamplerConfig, uv: Vec2) -> Vec4 {
    let (w, h) = (texels.width(), texels.height());

    match sampler.filter {
        FilterMode::Nearest => {
            let x = wrap(floor_index(uv.x * w as f32), w, sampler.wrap);
            let y = wrap(floor_index(uv.y * h as f32), h, sampler.wrap);
            texels.texel(x, y)
        }
        FilterMode::Linear => {
            let (x0, x1, tx) = linear_taps(uv.x * w as f32 - 0.5, w, sampler.wrap);
            let (y0, y1, ty) = linear_taps(uv.y * h as f32 - 0.5, h, sampler.wrap);

            let top = texels.texel(x0, y0).lerp(texels.texel(x1, y0), tx);
            let bottom = texels.texel(x0, y1).lerp(texels.texel(x1, y1), tx);
            top.lerp(bottom, ty)
        }
    }
}

fn linear_taps(coord: f32, size: u32, mode: WrapMode) -> (u32, u32, f32) {
    let base = coord.floor();
    let i = floor_index(coord);
    let t = coord - base;
    let t = if t.is_finite() { t } else { 0.0 };
    (wrap(i, size, mode), wrap(i.saturating_add(1), size, mode), t)
}

// `as` saturates out-of-range values and maps NaN to 0.
#[inline]
fn floor_index(coord: f32) -> i64 {
    coord.floor() as i64
}

fn wrap(i: i64, size: u32, mode: WrapMode) -> u32 {
    let n = i64::from(size);
    let resolved = match mode {
        WrapMode::ClampToEdge => i.clamp(0, n - 1),
        WrapMode::Repeat => i.rem_euclid(n),
        WrapMode::MirrorRepeat => {
            let m = i.rem_euclid(2 * n);
            if m < n { m } else { 2 * n - 1 - m }
        }
    };
    resolved as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
    const GREEN: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);
    const BLUE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);
    const WHITE: Vec4 = Vec4::ONE;

    // RED   GREEN
    // BLUE  WHITE
    fn corners() -> TexelGrid {
        TexelGrid::new(2, 2, vec![RED, GREEN, BLUE, WHITE]).unwrap()
    }

    fn close(a: Vec4, b: Vec4) -> bool {
        (a - b).abs().max_element() < 1e-6
    }

    #[test]
    fn flat_color_is_unmodified() {
        let c = Vec4::new(0.2, 0.4, 0.6, 0.5);
        assert_eq!(flat_color(c), c);
    }

    #[test]
    fn nearest_picks_containing_texel() {
        let s = SamplerConfig::nearest(WrapMode::ClampToEdge);
        let t = corners();
        assert_eq!(sample_texture(&t, &s, Vec2::new(0.25, 0.25)), RED);
        assert_eq!(sample_texture(&t, &s, Vec2::new(0.75, 0.25)), GREEN);
        assert_eq!(sample_texture(&t, &s, Vec2::new(0.25, 0.75)), BLUE);
        assert_eq!(sample_texture(&t, &s, Vec2::new(0.75, 0.75)), WHITE);
    }

    #[test]
    fn corner_uvs_follow_wrap_mode() {
        let t = corners();

        let clamp = SamplerConfig::nearest(WrapMode::ClampToEdge);
        assert_eq!(sample_texture(&t, &clamp, Vec2::ZERO), RED);
        assert_eq!(sample_texture(&t, &clamp, Vec2::ONE), WHITE);

        // uv = 1 lands on texel index 2, which repeats to 0 and mirrors to 1.
        let repeat = SamplerConfig::nearest(WrapMode::Repeat);
        assert_eq!(sample_texture(&t, &repeat, Vec2::ZERO), RED);
        assert_eq!(sample_texture(&t, &repeat, Vec2::ONE), RED);

        let mirror = SamplerConfig::nearest(WrapMode::MirrorRepeat);
        assert_eq!(sample_texture(&t, &mirror, Vec2::ZERO), RED);
        assert_eq!(sample_texture(&t, &mirror, Vec2::ONE), WHITE);

        let linear = SamplerConfig::linear(WrapMode::ClampToEdge);
        assert!(close(sample_texture(&t, &linear, Vec2::ZERO), RED));
        assert!(close(sample_texture(&t, &linear, Vec2::ONE), WHITE));
    }

    #[test]
    fn linear_blends_at_the_center() {
        let s = SamplerConfig::linear(WrapMode::ClampToEdge);
        let center = sample_texture(&corners(), &s, Vec2::splat(0.5));
        assert!(close(center, (RED + GREEN + BLUE + WHITE) / 4.0));
    }

    #[test]
    fn linear_repeat_wraps_across_the_edge() {
        let s = SamplerConfig::linear(WrapMode::Repeat);
        // Halfway between column 1 and the wrapped column 0, on row 0.
        let v = sample_texture(&corners(), &s, Vec2::new(1.0, 0.25));
        assert!(close(v, (GREEN + RED) / 2.0));
    }

    #[test]
    fn out_of_range_coordinates_stay_in_bounds() {
        let t = corners();
        let uvs = [
            Vec2::new(-1e30, 1e30),
            Vec2::new(f32::INFINITY, f32::NEG_INFINITY),
            Vec2::new(f32::NAN, 0.5),
            Vec2::new(-3.75, 12.25),
            Vec2::new(f32::MAX, f32::MIN),
        ];
        for wrap in [WrapMode::ClampToEdge, WrapMode::Repeat, WrapMode::MirrorRepeat] {
            for filter in [FilterMode::Nearest, FilterMode::Linear] {
                let s = SamplerConfig::new(filter, wrap);
                for uv in uvs {
                    let c = sample_texture(&t, &s, uv);
                    assert!(c.is_finite(), "{s:?} at {uv:?} gave {c:?}");
                }
            }
        }
    }

    #[test]
    fn wrap_resolves_every_mode() {
        assert_eq!(wrap(-1, 4, WrapMode::ClampToEdge), 0);
        assert_eq!(wrap(9, 4, WrapMode::ClampToEdge), 3);
        assert_eq!(wrap(-1, 4, WrapMode::Repeat), 3);
        assert_eq!(wrap(9, 4, WrapMode::Repeat), 1);
        assert_eq!(wrap(-1, 4, WrapMode::MirrorRepeat), 0);
        assert_eq!(wrap(4, 4, WrapMode::MirrorRepeat), 3);
        assert_eq!(wrap(9, 4, WrapMode::MirrorRepeat), 1);
        assert_eq!(wrap(i64::MAX, 4, WrapMode::MirrorRepeat), 0);
    }
}
