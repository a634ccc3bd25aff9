//! Reference sprite sheet
//!
//! All quantized frames side by side, left to right, expanded through the
//! palette. This is what the console will show, so it doubles as a check
//! on the quantization.

use crate::palette::Palette;
use crate::quantize::IndexedFrame;
use anyhow::{Context, Result};
use image::{imageops, ImageFormat, RgbImage};
use std::path::Path;

/// Lay frames out in a single row, frame `i` at `x = i * size`
pub fn build_sheet(frames: &[IndexedFrame], palette: &Palette, size: u32) -> RgbImage {
    let width = size * frames.len() as u32;
    let mut sheet = RgbImage::new(width, size);
    for (i, frame) in frames.iter().enumerate() {
        let x = i64::from(size) * i as i64;
        imageops::replace(&mut sheet, &frame.to_rgb(palette), x, 0);
    }
    sheet
}

/// Save a sheet as PNG
pub fn write_sheet(sheet: &RgbImage, path: &Path) -> Result<()> {
    sheet
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write sprite sheet: {:?}", path))
}
