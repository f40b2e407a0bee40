use crate::{
    foundation::core::Rgb,
    icon::grid::{Cell, IconGrid},
};

/// Alpha written to every output pixel; the compositor never blends.
const OPAQUE: u8 = 255;

/// Straight RGBA8 pixel buffer holding one rendered icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconRgba {
    /// Width in pixels (`size * scale`).
    pub width: u32,
    /// Height in pixels, always equal to `width`.
    pub height: u32,
    /// Row-major RGBA8 samples, 4 bytes per pixel, alpha always 255.
    pub data: Vec<u8>,
}

/// Mapping from each cell kind to its straight RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Color for [`Cell::Background`].
    pub background: Rgb,
    /// Color for [`Cell::Foreground`].
    pub foreground: Rgb,
    /// Color for [`Cell::Spot`].
    pub spot: Rgb,
}

impl Palette {
    /// The color a cell kind maps to.
    pub fn color_of(&self, cell: Cell) -> Rgb {
        match cell {
            Cell::Background => self.background,
            Cell::Foreground => self.foreground,
            Cell::Spot => self.spot,
        }
    }
}

/// Expand each grid cell into a scale×scale block of opaque pixels.
///
/// Cell (r, c) fills the block at pixel offset (r·scale, c·scale); exactly
/// one palette color appears in any given block. No blending, no
/// anti-aliasing.
pub fn composite_grid(grid: &IconGrid, scale: u32, palette: &Palette) -> IconRgba {
    let side = grid.size() * scale;
    let mut data = Vec::with_capacity(side as usize * side as usize * 4);
    for y in 0..side {
        let row = y / scale;
        for x in 0..side {
            let color = palette.color_of(grid.get(row, x / scale));
            data.extend_from_slice(&[color.r, color.g, color.b, OPAQUE]);
        }
    }

    IconRgba {
        width: side,
        height: side,
        data,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
