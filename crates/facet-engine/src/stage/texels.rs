use glam::Vec4;

/// A single-level 2D image as seen by the reference sampler.
///
/// Texels are stored row-major from the top-left corner, which is where
/// texture coordinate `(0, 0)` points. Channel values are taken as stored;
/// sRGB decoding is a property of the GPU texture format, not of this grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TexelGrid {
    width: u32,
    height: u32,
    texels: Vec<Vec4>,
}

impl TexelGrid {
    /// Returns `None` when a dimension is zero or `texels` has the wrong length.
    pub fn new(width: u32, height: u32, texels: Vec<Vec4>) -> Option<Self> {
        if width == 0 || height == 0 || texels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self { width, height, texels })
    }

    /// Builds a grid from tightly packed RGBA8 bytes, mapping `0..=255` to `0.0..=1.0`.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width as usize * height as usize * 4 {
            return None;
        }
        let texels = bytes
            .chunks_exact(4)
            .map(|px| Vec4::new(px[0] as f32, px[1] as f32, px[2] as f32, px[3] as f32) / 255.0)
            .collect();
        Self::new(width, height, texels)
    }

    /// `cells x cells` checkerboard, one texel per cell, `even` at the top-left.
    pub fn checkerboard(cells: u32, even: Vec4, odd: Vec4) -> Self {
        let cells = cells.max(1);
        let texels = (0..cells)
            .flat_map(|y| (0..cells).map(move |x| if (x + y) % 2 == 0 { even } else { odd }))
            .collect();
        Self {
            width: cells,
            height: cells,
            texels,
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

    /// Texel at integer coordinates already resolved into range.
    #[inline]
    pub(crate) fn texel(&self, x: u32, y: u32) -> Vec4 {
        self.texels[(y * self.width + x) as usize]
    }
}
