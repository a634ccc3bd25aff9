//! Random character generation

use crate::spec::{BodyShape, CharacterSpec, HeadShape, HexColor, LimbShape, PartShape};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::ops::RangeInclusive;

/// Skin tones followed by bright clothing colors
pub const PRESET_COLORS: [HexColor; 11] = [
    HexColor::new(0xFF, 0xDD, 0xAA),
    HexColor::new(0xDD, 0xAA, 0x88),
    HexColor::new(0xAA, 0x88, 0x66),
    HexColor::new(0x88, 0x66, 0x44),
    HexColor::new(0x66, 0x44, 0x22),
    HexColor::new(0xFF, 0x66, 0x66),
    HexColor::new(0x66, 0xFF, 0x66),
    HexColor::new(0x66, 0x66, 0xFF),
    HexColor::new(0xFF, 0xFF, 0x66),
    HexColor::new(0xFF, 0x66, 0xFF),
    HexColor::new(0x66, 0xFF, 0xFF),
];

pub const RANDOM_SIZE: RangeInclusive<u32> = 24..=48;
pub const RANDOM_FRAMES: RangeInclusive<u32> = 2..=6;

fn pick<T: Copy, R: Rng>(rng: &mut R, items: &[T]) -> T {
    // Every slice passed in here is a non-empty constant
    *items.choose(rng).unwrap_or(&items[0])
}

fn pick_shape<T: PartShape, R: Rng>(rng: &mut R) -> Option<T> {
    Some(pick(rng, &T::ALL))
}

/// Random character with every part drawn
pub fn random_spec<R: Rng>(rng: &mut R) -> CharacterSpec {
    CharacterSpec {
        head: pick_shape::<HeadShape, _>(rng),
        body: pick_shape::<BodyShape, _>(rng),
        arms: pick_shape::<LimbShape, _>(rng),
        legs: pick_shape::<LimbShape, _>(rng),
        head_color: pick(rng, &PRESET_COLORS),
        body_color: pick(rng, &PRESET_COLORS),
        arm_color: pick(rng, &PRESET_COLORS),
        leg_color: pick(rng, &PRESET_COLORS),
        size: rng.random_range(RANDOM_SIZE),
        animation_frames: rng.random_range(RANDOM_FRAMES),
    }
}

/// Fresh seed from the thread-local generator
pub fn entropy_seed() -> u64 {
    rand::random::<u64>()
}

/// Reproducible random character
pub fn random_spec_seeded(seed: u64) -> CharacterSpec {
    let mut rng = Pcg32::seed_from_u64(seed);
    random_spec(&mut rng)
}
