use glam::{Vec2, Vec4};

use super::{interpolate, Varying, VertexOutput};

/// CPU color target for the reference stages.
///
/// Pixel `(0, 0)` is the top-left corner. NDC `(-1, 1)` maps to the top-left
/// edge of the target and `(1, -1)` to the bottom-right edge, as in wgpu.
/// Alongside the color, every pixel counts how many fragments were written to
/// it.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    color: Vec<Vec4>,
    coverage: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32, clear: Vec4) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            color: vec![clear; len],
            coverage: vec![0; len],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at `(x, y)`, or `None` outside the target.
    pub fn color(&self, x: u32, y: u32) -> Option<Vec4> {
        self.index(x, y).map(|i| self.color[i])
    }

    /// Number of fragments written to `(x, y)`; 0 outside the target.
    pub fn coverage(&self, x: u32, y: u32) -> u32 {
        self.index(x, y).map_or(0, |i| self.coverage[i])
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y * self.width + x) as usize)
    }

    /// Rasterizes one triangle and writes `shade(varying)` to every covered
    /// pixel center.
    ///
    /// Uses the top-left fill rule, so triangles sharing an edge never write
    /// the same pixel twice. Triangles with a vertex at `w <= 0` are dropped
    /// (there is no clipper), as are zero-area and non-finite triangles.
    pub fn rasterize<V, F>(&mut self, triangle: [VertexOutput<V>; 3], mut shade: F)
    where
        V: Varying,
        F: FnMut(V) -> Vec4,
    {
        if triangle
            .iter()
            .any(|v| !(v.clip_position.w > 0.0) || !v.clip_position.is_finite())
        {
            return;
        }

        let mut tri = triangle;
        let mut s = tri.map(|v| self.to_screen(v.clip_position));

        let mut area = edge(s[0], s[1], s[2]);
        if !(area.abs() > f32::EPSILON) {
            return;
        }
        if area < 0.0 {
            tri.swap(1, 2);
            s.swap(1, 2);
            area = -area;
        }

        let min = s[0].min(s[1]).min(s[2]).max(Vec2::ZERO).floor();
        let max = s[0]
            .max(s[1])
            .max(s[2])
            .min(Vec2::new(self.width as f32, self.height as f32))
            .ceil();

        for y in min.y as u32..max.y as u32 {
            for x in min.x as u32..max.x as u32 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

                let e = [edge(s[1], s[2], p), edge(s[2], s[0], p), edge(s[0], s[1], p)];
                let owners = [(s[1], s[2]), (s[2], s[0]), (s[0], s[1])];

                let inside = e
                    .iter()
                    .zip(owners)
                    .all(|(&e, (a, b))| e > 0.0 || (e == 0.0 && is_top_left(a, b)));
                if !inside {
                    continue;
                }

                let varying = interpolate(&tri, [e[0] / area, e[1] / area, e[2] / area]);
                let color = shade(varying);

                if let Some(i) = self.index(x, y) {
                    self.color[i] = color;
                    self.coverage[i] += 1;
                }
            }
        }
    }

    fn to_screen(&self, clip: Vec4) -> Vec2 {
        let ndc = clip.truncate().truncate() / clip.w;
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - ndc.y) * 0.5 * self.height as f32,
        )
    }
}

/// Twice the signed area of `(a, b, p)`; positive when `p` lies on the
/// interior side of `a -> b` for a positively wound triangle.
#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

// Screen space is +Y down; with positive winding a top edge runs in +X and a
// left edge runs in -Y.
#[inline]
fn is_top_left(a: Vec2, b: Vec2) -> bool {
    let d = b - a;
    (d.y == 0.0 && d.x > 0.0) || d.y < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vo(x: f32, y: f32, c: Vec4) -> VertexOutput<Vec4> {
        VertexOutput {
            clip_position: Vec4::new(x, y, 0.0, 1.0),
            varying: c,
        }
    }

    fn total_coverage(fb: &Framebuffer) -> u32 {
        (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .map(|(x, y)| fb.coverage(x, y))
            .sum()
    }

    #[test]
    fn full_screen_quad_covers_every_pixel_once() {
        let mut fb = Framebuffer::new(8, 8, Vec4::ZERO);
        let c = Vec4::ONE;
        let (bl, br, tr, tl) = (vo(-1.0, -1.0, c), vo(1.0, -1.0, c), vo(1.0, 1.0, c), vo(-1.0, 1.0, c));

        fb.rasterize([bl, br, tl], |v| v);
        fb.rasterize([br, tr, tl], |v| v);

        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(fb.coverage(x, y), 1, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn winding_does_not_matter() {
        let c = Vec4::ONE;
        let mut ccw = Framebuffer::new(16, 16, Vec4::ZERO);
        ccw.rasterize([vo(-0.8, -0.8, c), vo(0.8, -0.8, c), vo(0.0, 0.8, c)], |v| v);
        let mut cw = Framebuffer::new(16, 16, Vec4::ZERO);
        cw.rasterize([vo(-0.8, -0.8, c), vo(0.0, 0.8, c), vo(0.8, -0.8, c)], |v| v);

        assert!(total_coverage(&ccw) > 0);
        assert_eq!(total_coverage(&ccw), total_coverage(&cw));
    }

    #[test]
    fn interior_color_is_the_barycentric_blend() {
        let (r, g, b) = (
            Vec4::new(1.0, 0.0, 0.0, 1.0),
            Vec4::new(0.0, 1.0, 0.0, 1.0),
            Vec4::new(0.0, 0.0, 1.0, 1.0),
        );
        let tri = [vo(-1.0, -1.0, r), vo(1.0, -1.0, g), vo(-1.0, 1.0, b)];
        let mut fb = Framebuffer::new(4, 4, Vec4::ZERO);
        fb.rasterize(tri, |v| v);

        // Pixel (0, 3) has its center at NDC (-0.75, -0.75).
        // Solving for barycentrics: g = 0.125, b = 0.125, r = 0.75.
        let got = fb.color(0, 3).unwrap();
        let expected = r * 0.75 + g * 0.125 + b * 0.125;
        assert!((got - expected).abs().max_element() < 1e-5, "{got:?}");
    }

    #[test]
    fn degenerate_and_behind_camera_triangles_are_dropped() {
        let c = Vec4::ONE;
        let mut fb = Framebuffer::new(8, 8, Vec4::ZERO);

        fb.rasterize([vo(0.0, 0.0, c), vo(0.0, 0.0, c), vo(0.0, 0.0, c)], |v| v);
        fb.rasterize([vo(-1.0, -1.0, c), vo(0.0, 0.0, c), vo(1.0, 1.0, c)], |v| v);

        let mut behind = vo(1.0, -1.0, c);
        behind.clip_position.w = -1.0;
        fb.rasterize([vo(-1.0, -1.0, c), behind, vo(-1.0, 1.0, c)], |v| v);

        let nan = VertexOutput {
            clip_position: Vec4::NAN,
            varying: c,
        };
        fb.rasterize([nan, vo(1.0, -1.0, c), vo(-1.0, 1.0, c)], |v| v);

        assert_eq!(total_coverage(&fb), 0);
    }

    #[test]
    fn out_of_range_reads_are_none() {
        let fb = Framebuffer::new(2, 2, Vec4::ONE);
        assert_eq!(fb.color(1, 1), Some(Vec4::ONE));
        assert_eq!(fb.color(2, 0), None);
        assert_eq!(fb.coverage(0, 2), 0);
    }
}
