//! Frame rendering

use crate::canvas::new_canvas;
use crate::parts::{draw_arms, draw_body, draw_head, draw_legs};
use crate::pose::Pose;
use crate::spec::{CharacterSpec, SpecError};
use image::RgbaImage;

/// Render one frame of the walk cycle
///
/// Parts are drawn back to front (legs, body, arms, head) onto a transparent
/// `size × size` canvas.
///
/// # Errors
/// [`SpecError::FrameOutOfRange`] if `frame >= spec.animation_frames`.
pub fn render_frame(spec: &CharacterSpec, frame: u32) -> Result<RgbaImage, SpecError> {
    if frame >= spec.animation_frames {
        return Err(SpecError::FrameOutOfRange {
            frame,
            total: spec.animation_frames,
        });
    }

    Ok(draw_frame(spec, frame))
}

/// Render every frame of the walk cycle, in order
pub fn render_frames(spec: &CharacterSpec) -> Vec<RgbaImage> {
    (0..spec.animation_frames)
        .map(|frame| draw_frame(spec, frame))
        .collect()
}

// `frame` must be below `spec.animation_frames`
fn draw_frame(spec: &CharacterSpec, frame: u32) -> RgbaImage {
    let pose = Pose::for_frame(frame, spec.animation_frames);
    let size = i32::try_from(spec.size).unwrap_or(i32::MAX);
    let mut canvas = new_canvas(spec.size);

    draw_legs(&mut canvas, spec.legs, spec.leg_color.rgba(), size, pose);
    draw_body(&mut canvas, spec.body, spec.body_color.rgba(), size, pose);
    draw_arms(&mut canvas, spec.arms, spec.arm_color.rgba(), size, pose);
    draw_head(&mut canvas, spec.head, spec.head_color.rgba(), size, pose);

    tracing::debug!(
        "Rendered frame {}/{} ({}x{}, walk {:.2}, bob {:.2})",
        frame + 1,
        spec.animation_frames,
        spec.size,
        spec.size,
        pose.walk,
        pose.bob
    );

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{OUTLINE, TRANSPARENT};
    use crate::spec::{BodyShape, HeadShape, HexColor, LimbShape};
    use image::Rgba;

    fn every_shape_combination() -> Vec<CharacterSpec> {
        use crate::spec::PartShape;
        let mut specs = Vec::new();
        for head in HeadShape::ALL {
            for body in BodyShape::ALL {
                for limb in LimbShape::ALL {
                    specs.push(CharacterSpec {
                        head: Some(head),
                        body: Some(body),
                        arms: Some(limb),
                        legs: Some(limb),
                        animation_frames: 4,
                        ..CharacterSpec::default()
                    });
                }
            }
        }
        specs
    }

    #[test]
    fn test_frame_dimensions() {
        for spec in every_shape_combination() {
            for frame in 0..spec.animation_frames {
                let img = render_frame(&spec, frame).unwrap();
                assert_eq!(img.dimensions(), (32, 32));
            }
        }
    }

    #[test]
    fn test_odd_and_degenerate_sizes() {
        for size in [0, 1, 2, 3, 7, 20, 47, 64] {
            let spec = CharacterSpec {
                size,
                animation_frames: 3,
                ..CharacterSpec::default()
            };
            for img in render_frames(&spec) {
                assert_eq!(img.dimensions(), (size, size));
            }
        }
    }

    #[test]
    fn test_frame_out_of_range() {
        let spec = CharacterSpec {
            animation_frames: 2,
            ..CharacterSpec::default()
        };
        assert!(matches!(
            render_frame(&spec, 2),
            Err(SpecError::FrameOutOfRange { frame: 2, total: 2 })
        ));
        assert_eq!(render_frames(&spec).len(), 2);
    }

    #[test]
    fn test_render_frames_matches_render_frame() {
        let spec = CharacterSpec {
            animation_frames: 3,
            ..CharacterSpec::default()
        };
        let frames = render_frames(&spec);
        assert_eq!(frames.len(), 3);
        for (frame, img) in (0..).zip(&frames) {
            assert_eq!(*img, render_frame(&spec, frame).unwrap());
        }
    }

    #[test]
    fn test_deterministic() {
        let spec = CharacterSpec {
            animation_frames: 4,
            ..CharacterSpec::default()
        };
        assert_eq!(render_frame(&spec, 1).unwrap(), render_frame(&spec, 1).unwrap());
    }

    #[test]
    fn test_walk_cycle_moves_limbs() {
        let spec = CharacterSpec {
            animation_frames: 4,
            ..CharacterSpec::default()
        };
        let frames = render_frames(&spec);
        assert_ne!(frames[0], frames[1]);
        assert_ne!(frames[1], frames[3]);
    }

    #[test]
    fn test_uses_only_spec_colors() {
        let spec = CharacterSpec {
            head_color: HexColor::new(0xFF, 0x00, 0x00),
            body_color: HexColor::new(0x00, 0xFF, 0x00),
            arm_color: HexColor::new(0x00, 0x00, 0xFF),
            leg_color: HexColor::new(0xFF, 0xFF, 0x00),
            ..CharacterSpec::default()
        };
        let img = render_frame(&spec, 0).unwrap();
        let allowed: Vec<Rgba<u8>> = spec
            .part_colors()
            .iter()
            .map(|c| c.rgba())
            .chain([OUTLINE, TRANSPARENT])
            .collect();
        for pixel in img.pixels() {
            assert!(allowed.contains(pixel), "unexpected color {:?}", pixel);
        }
        for color in spec.part_colors() {
            assert!(img.pixels().any(|p| *p == color.rgba()), "{} missing", color);
        }
    }

    #[test]
    fn test_head_drawn_over_body() {
        let spec = CharacterSpec {
            head: Some(HeadShape::Square),
            head_color: HexColor::new(0xFF, 0x00, 0x00),
            ..CharacterSpec::default()
        };
        let img = render_frame(&spec, 0).unwrap();
        // Square head spans rows 5..=13, the body starts on row 10
        assert_eq!(*img.get_pixel(13, 11), Rgba([0xFF, 0x00, 0x00, 0xFF]));
    }

    #[test]
    fn test_missing_parts_are_skipped() {
        let spec = CharacterSpec {
            body: None,
            arms: None,
            legs: None,
            ..CharacterSpec::default()
        };
        let img = render_frame(&spec, 0).unwrap();
        let body = spec.body_color.rgba();
        assert!(img.pixels().all(|p| *p != body));
        // Rows below the head stay empty
        for y in 16..32 {
            for x in 0..32 {
                assert_eq!(*img.get_pixel(x, y), TRANSPARENT);
            }
        }
    }
}
