//! Frame quantization
//!
//! Rendered frames carry alpha. The VDP has no alpha: slot 0 is the
//! transparent color, so frames are first flattened onto black and then
//! every pixel is replaced by its nearest palette slot.

use crate::palette::Palette;
use image::{imageops, Rgb, RgbImage, Rgba, RgbaImage};

/// Frame whose pixels are palette slot indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFrame {
    width: u32,
    height: u32,
    /// Row-major slot indices, one byte per pixel
    indices: Vec<u8>,
}

impl IndexedFrame {
    pub fn new(width: u32, height: u32, indices: Vec<u8>) -> Self {
        debug_assert_eq!(indices.len(), width as usize * height as usize);
        Self {
            width,
            height,
            indices,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    pub fn index(&self, x: u32, y: u32) -> u8 {
        self.indices[(y * self.width + x) as usize]
    }

    /// Expand back to RGB through the palette
    pub fn to_rgb(&self, palette: &Palette) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| palette.color(self.index(x, y)))
    }
}

/// Flatten an RGBA frame onto black, using alpha as the paste mask
pub fn composite_over_black(frame: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(frame.width(), frame.height(), |x, y| {
        let Rgba([r, g, b, a]) = *frame.get_pixel(x, y);
        let mask = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u8;
        Rgb([mask(r), mask(g), mask(b)])
    })
}

/// Map every pixel of a rendered frame to its nearest palette slot
pub fn quantize_frame(frame: &RgbaImage, palette: &Palette) -> IndexedFrame {
    let flat = composite_over_black(frame);
    let indexed = imageops::index_colors(&flat, palette);
    IndexedFrame::new(flat.width(), flat.height(), indexed.into_raw())
}
