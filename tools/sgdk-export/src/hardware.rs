//! Mega Drive VDP constants and color words
//!
//! # Color word layout
//! ```text
//! bit  15..12  11..9  8  7..5  4  3..1  0
//!      0000    BBB    0  GGG   0  RRR   0
//! ```
//! Each channel keeps the top nibble of its 8-bit component (`c >> 4`) with
//! the nibble's low bit cleared, so a channel has 8 levels.

use image::Rgb;

/// Tile edge length in pixels
pub const TILE_SIZE: u32 = 8;

/// Colors per sprite palette line
pub const PALETTE_SIZE: usize = 16;

/// Bits per stored pixel index
pub const BITS_PER_PIXEL: u32 = 4;

/// Pixel indices packed into one byte
pub const PIXELS_PER_BYTE: usize = (u8::BITS / BITS_PER_PIXEL) as usize;

/// Largest value a pixel index can hold
pub const INDEX_MASK: u8 = (1 << BITS_PER_PIXEL) - 1;

/// Slots in the 8-bit indexed palette used for quantization
///
/// Only the first [`PALETTE_SIZE`] are real colors; the rest are black.
pub const QUANTIZER_SLOTS: usize = 256;

const CHANNEL_MASK: u16 = 0xE;
const RED_SHIFT: u32 = 0;
const GREEN_SHIFT: u32 = 4;
const BLUE_SHIFT: u32 = 8;

/// Tiles needed to cover `size` pixels along one axis
pub fn tiles_per_axis(size: u32) -> u32 {
    size.div_ceil(TILE_SIZE)
}

/// Tiles needed to cover a `size × size` sprite
pub fn tile_count(size: u32) -> u32 {
    tiles_per_axis(size) * tiles_per_axis(size)
}

/// Encode an 8-bit RGB color as a VDP color word
pub fn encode_color_word(color: Rgb<u8>) -> u16 {
    let channel = |c: u8| (u16::from(c) >> 4) & CHANNEL_MASK;
    let [r, g, b] = color.0;
    (channel(b) << BLUE_SHIFT) | (channel(g) << GREEN_SHIFT) | (channel(r) << RED_SHIFT)
}

/// Expand a VDP color word back to 8-bit RGB
pub fn decode_color_word(word: u16) -> Rgb<u8> {
    let channel = |shift: u32| (((word >> shift) & CHANNEL_MASK) << 4) as u8;
    Rgb([channel(RED_SHIFT), channel(GREEN_SHIFT), channel(BLUE_SHIFT)])
}
