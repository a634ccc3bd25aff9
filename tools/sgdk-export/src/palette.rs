//! Sprite palette
//!
//! The palette comes from the character spec, not from the rendered pixels,
//! so every frame of a character shares the same slot numbers.
//!
//! | slot | color                 |
//! |------|-----------------------|
//! | 0    | black (transparent)   |
//! | 1-4  | head, body, arm, leg  |
//! | 5    | black (outlines)      |
//! | 6    | white (highlights)    |
//! | 7    | gray (shadows)        |
//! | 8-15 | black (unused)        |

use crate::hardware::{encode_color_word, PALETTE_SIZE, QUANTIZER_SLOTS};
use character_gen::{CharacterSpec, HexColor};
use image::imageops::ColorMap;
use image::Rgb;

pub const TRANSPARENT_SLOT: usize = 0;
pub const OUTLINE_SLOT: usize = 5;
pub const HIGHLIGHT_SLOT: usize = 6;
pub const SHADOW_SLOT: usize = 7;

/// 16-color sprite palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [HexColor; PALETTE_SIZE],
}

impl Palette {
    pub fn from_spec(spec: &CharacterSpec) -> Self {
        let mut colors = [HexColor::BLACK; PALETTE_SIZE];
        colors[1..5].copy_from_slice(&spec.part_colors());
        colors[OUTLINE_SLOT] = HexColor::BLACK;
        colors[HIGHLIGHT_SLOT] = HexColor::WHITE;
        colors[SHADOW_SLOT] = HexColor::GRAY;
        Self { colors }
    }

    pub fn colors(&self) -> &[HexColor; PALETTE_SIZE] {
        &self.colors
    }

    /// RGB color of a slot; out-of-range indices read as black
    pub fn color(&self, index: u8) -> Rgb<u8> {
        self.colors
            .get(usize::from(index))
            .copied()
            .unwrap_or(HexColor::BLACK)
            .rgb()
    }

    /// Palette as VDP color words
    pub fn hardware_words(&self) -> [u16; PALETTE_SIZE] {
        self.colors.map(|c| encode_color_word(c.rgb()))
    }

    /// Slots of the 256-entry quantizer palette, black past slot 15
    fn quantizer_slots(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.colors
            .iter()
            .map(|c| c.0)
            .chain(std::iter::repeat([0; 3]))
            .take(QUANTIZER_SLOTS)
    }

    /// Nearest slot by squared RGB distance; ties go to the lowest slot
    pub fn nearest_index(&self, color: Rgb<u8>) -> usize {
        let distance = |slot: [u8; 3]| -> u32 {
            slot.iter()
                .zip(color.0)
                .map(|(&a, b)| {
                    let d = i32::from(a) - i32::from(b);
                    (d * d) as u32
                })
                .sum()
        };

        let mut best = (TRANSPARENT_SLOT, u32::MAX);
        for (index, slot) in self.quantizer_slots().enumerate() {
            let d = distance(slot);
            if d < best.1 {
                best = (index, d);
            }
        }
        best.0
    }
}

impl ColorMap for Palette {
    type Color = Rgb<u8>;

    fn index_of(&self, color: &Rgb<u8>) -> usize {
        self.nearest_index(*color)
    }

    fn lookup(&self, index: usize) -> Option<Rgb<u8>> {
        self.colors.get(index).map(|c| c.rgb())
    }

    fn has_lookup(&self) -> bool {
        true
    }

    fn map_color(&self, color: &mut Rgb<u8>) {
        *color = self.colors[self.nearest_index(*color)].rgb();
    }
}
