//! Walk-cycle pose offsets

use std::f64::consts::PI;

/// Per-frame animation offsets
///
/// `walk` swings limbs (added on the left, subtracted on the right) and
/// `bob` lifts the head, body and arms. Both are zero for a single-frame
/// character.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    pub walk: f64,
    pub bob: f64,
}

impl Pose {
    /// Pose for `frame` out of `total` frames
    pub fn for_frame(frame: u32, total: u32) -> Self {
        if total <= 1 {
            return Self::default();
        }
        let phase = (frame as f64 * 2.0 * PI / total as f64).sin();
        Self {
            walk: phase * 2.0,
            bob: phase.abs(),
        }
    }

    /// Limb swing in whole pixels (truncated toward zero)
    pub fn swing(&self) -> i32 {
        self.walk as i32
    }

    /// Vertical lift in whole pixels (truncated toward zero)
    pub fn lift(&self) -> i32 {
        self.bob as i32
    }
}
