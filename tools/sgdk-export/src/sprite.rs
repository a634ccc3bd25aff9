//! Encoded sprite data and its C symbol names

use crate::hardware::{tile_count, tiles_per_axis, PALETTE_SIZE};
use crate::packing::pack_4bpp;
use crate::palette::Palette;
use crate::quantize::IndexedFrame;

/// Palette words, packed frames and tile geometry for one character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSprite {
    /// C identifier prefix for every emitted symbol
    pub name: String,
    /// Sprite edge length in pixels
    pub size: u32,
    pub palette: [u16; PALETTE_SIZE],
    /// One 4bpp byte array per frame
    pub frames: Vec<Vec<u8>>,
    pub tiles_per_axis: u32,
    pub tile_count: u32,
}

impl EncodedSprite {
    /// Pack quantized frames against their palette
    pub fn encode(name: &str, size: u32, palette: &Palette, frames: &[IndexedFrame]) -> Self {
        Self {
            name: symbol_name(name),
            size,
            palette: palette.hardware_words(),
            frames: frames.iter().map(|f| pack_4bpp(f.indices())).collect(),
            tiles_per_axis: tiles_per_axis(size),
            tile_count: tile_count(size),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// An animation table is only emitted for more than one frame
    pub fn has_animation(&self) -> bool {
        self.frames.len() > 1
    }

    pub fn palette_symbol(&self) -> String {
        format!("{}_palette", self.name)
    }

    pub fn frame_symbol(&self, frame: usize) -> String {
        format!("{}_frame{}", self.name, frame)
    }

    pub fn frame_data_symbol(&self, frame: usize) -> String {
        format!("{}_frame{}_data", self.name, frame)
    }

    pub fn animation_symbol(&self) -> String {
        format!("{}_animation", self.name)
    }

    /// Upper-case prefix for header guard and defines
    pub fn macro_prefix(&self) -> String {
        self.name.to_uppercase()
    }
}

/// Turn a file stem into a valid C identifier
///
/// Anything but ASCII letters, digits and `_` becomes `_`; a leading digit
/// gets a `_` prefix.
pub fn symbol_name(stem: &str) -> String {
    let mut name: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if name.is_empty() {
        name.push_str("sprite");
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use character_gen::CharacterSpec;

    #[test]
    fn test_symbol_name() {
        assert_eq!(symbol_name("hero"), "hero");
        assert_eq!(symbol_name("big-boss v2"), "big_boss_v2");
        assert_eq!(symbol_name("2nd_enemy"), "_2nd_enemy");
        assert_eq!(symbol_name("héros"), "h_ros");
        assert_eq!(symbol_name(""), "sprite");
    }

    #[test]
    fn test_symbols() {
        let palette = Palette::from_spec(&CharacterSpec::default());
        let frames = vec![IndexedFrame::new(2, 2, vec![0; 4]); 3];
        let sprite = EncodedSprite::encode("npc", 2, &palette, &frames);

        assert_eq!(sprite.palette_symbol(), "npc_palette");
        assert_eq!(sprite.frame_symbol(2), "npc_frame2");
        assert_eq!(sprite.frame_data_symbol(0), "npc_frame0_data");
        assert_eq!(sprite.animation_symbol(), "npc_animation");
        assert_eq!(sprite.macro_prefix(), "NPC");
        assert!(sprite.has_animation());
        assert_eq!(sprite.frame_count(), 3);
        assert_eq!(sprite.frames[0], vec![0, 0]);
        assert_eq!((sprite.tiles_per_axis, sprite.tile_count), (1, 1));
    }
}
