//! Body part geometry and drawing
//!
//! Every measurement is a fixed fraction of the sprite edge length `size`,
//! using integer division. Shape variants either swap the primitive (round
//! head, round body) or scale the `normal` box.

use crate::canvas::{
    draw_arc, draw_ellipse, draw_polygon, draw_rect, Bounds, ShapeStyle, Surface, OUTLINE,
};
use crate::pose::Pose;
use crate::spec::{BodyShape, HeadShape, LimbShape};
use image::Rgba;

/// Width factor for muscular arms and legs
pub const MUSCULAR_LIMB_SCALE: f64 = 1.5;
/// Width factor for a muscular body
pub const MUSCULAR_BODY_SCALE: f64 = 1.3;
/// Width factor for thin arms and legs
pub const THIN_SCALE: f64 = 0.6;
/// Width factor for a slim body
pub const SLIM_SCALE: f64 = 0.7;
/// Length factor for long arms and legs
pub const LONG_SCALE: f64 = 1.3;

/// Extra height of an oval head over a round one
const OVAL_EXTRA_HEIGHT: i32 = 4;

fn scale(value: i32, factor: f64) -> i32 {
    (value as f64 * factor) as i32
}

/// Scale down, never below one pixel
fn narrow(value: i32, factor: f64) -> i32 {
    scale(value, factor).max(1)
}

/// Head bounding box: `(x, y, edge)`
pub fn head_box(size: i32, pose: Pose) -> (i32, i32, i32) {
    let edge = size / 4;
    (size / 2 - edge / 2, size / 6 - pose.lift(), edge)
}

pub fn draw_head<S: Surface>(
    surface: &mut S,
    shape: Option<HeadShape>,
    color: Rgba<u8>,
    size: i32,
    pose: Pose,
) {
    let (x, y, edge) = head_box(size, pose);
    let style = ShapeStyle::outlined(color);

    match shape {
        Some(HeadShape::Round) => {
            draw_ellipse(surface, Bounds::new(x, y, x + edge, y + edge), style)
        }
        Some(HeadShape::Square) => draw_rect(surface, Bounds::new(x, y, x + edge, y + edge), style),
        Some(HeadShape::Oval) => draw_ellipse(
            surface,
            Bounds::new(x, y, x + edge, y + edge + OVAL_EXTRA_HEIGHT),
            style,
        ),
        Some(HeadShape::Triangle) => draw_polygon(
            surface,
            &[(x + edge / 2, y), (x, y + edge), (x + edge, y + edge)],
            style,
        ),
        None => {}
    }

    draw_face(surface, x, y, edge);
}

/// Eyes and mouth, placed within the head box whatever its shape
fn draw_face<S: Surface>(surface: &mut S, x: i32, y: i32, edge: i32) {
    let eye = (edge / 8).max(1);
    let eye_y = y + edge / 3;
    for eye_x in [x + edge / 3, x + 2 * edge / 3] {
        draw_ellipse(
            surface,
            Bounds::new(eye_x - eye, eye_y, eye_x + eye, eye_y + eye * 2),
            ShapeStyle::solid(OUTLINE),
        );
    }

    let mouth_y = y + 2 * edge / 3;
    draw_arc(
        surface,
        Bounds::new(x + edge / 4, mouth_y, x + 3 * edge / 4, mouth_y + edge / 4),
        0.0,
        180.0,
        OUTLINE,
    );
}

/// Torso box; a round body is the ellipse inscribed in it
pub fn body_box(shape: BodyShape, size: i32, pose: Pose) -> Bounds {
    let width = match shape {
        BodyShape::Normal | BodyShape::Round => size / 3,
        BodyShape::Muscular => scale(size / 3, MUSCULAR_BODY_SCALE),
        BodyShape::Slim => narrow(size / 3, SLIM_SCALE),
    };
    let height = size / 2;
    let x = size / 2 - width / 2;
    let y = size / 3 - pose.lift();
    Bounds::new(x, y, x + width, y + height)
}

pub fn draw_body<S: Surface>(
    surface: &mut S,
    shape: Option<BodyShape>,
    color: Rgba<u8>,
    size: i32,
    pose: Pose,
) {
    let Some(shape) = shape else {
        return;
    };
    let bounds = body_box(shape, size, pose);
    let style = ShapeStyle::outlined(color);
    match shape {
        BodyShape::Round => draw_ellipse(surface, bounds, style),
        BodyShape::Normal | BodyShape::Muscular | BodyShape::Slim => {
            draw_rect(surface, bounds, style)
        }
    }
}

/// Width and length of one limb before swing is applied
fn limb_dimensions(shape: LimbShape, size: i32) -> (i32, i32) {
    let width = size / 8;
    let length = size / 3;
    match shape {
        LimbShape::Normal => (width, length),
        LimbShape::Muscular => (scale(width, MUSCULAR_LIMB_SCALE), length),
        LimbShape::Thin => (narrow(width, THIN_SCALE), length),
        LimbShape::Long => (width, scale(length, LONG_SCALE)),
    }
}

/// Left and right arm boxes
///
/// Arms hang from fixed shoulders; a wider arm grows outward from the left
/// shoulder edge and swings vertically with the walk cycle.
pub fn arm_boxes(shape: LimbShape, size: i32, pose: Pose) -> [Bounds; 2] {
    let (width, length) = limb_dimensions(shape, size);
    let left_x = size / 2 - size / 3 - size / 8;
    let right_x = size / 2 + size / 3;
    let y = size / 3 + size / 12 - pose.lift();

    [(left_x, pose.swing()), (right_x, -pose.swing())]
        .map(|(x, swing)| Bounds::new(x, y + swing, x + width, y + length + swing))
}

pub fn draw_arms<S: Surface>(
    surface: &mut S,
    shape: Option<LimbShape>,
    color: Rgba<u8>,
    size: i32,
    pose: Pose,
) {
    if let Some(shape) = shape {
        for bounds in arm_boxes(shape, size, pose) {
            draw_rect(surface, bounds, ShapeStyle::outlined(color));
        }
    }
}

/// Left and right leg boxes
///
/// Legs are centered on the hips and stay planted at the top; the walk
/// cycle lengthens one leg and shortens the other. Only the width variants
/// are recentered.
pub fn leg_boxes(shape: LimbShape, size: i32, pose: Pose) -> [Bounds; 2] {
    let (width, length) = limb_dimensions(shape, size);
    let center_width = match shape {
        LimbShape::Muscular | LimbShape::Thin => width,
        LimbShape::Normal | LimbShape::Long => size / 8,
    };
    let left_x = size / 2 - size / 6 - center_width / 2;
    let right_x = size / 2 + size / 6 - center_width / 2;
    let y = size / 2 + size / 6;

    [(left_x, pose.swing()), (right_x, -pose.swing())]
        .map(|(x, step)| Bounds::new(x, y, x + width, y + length + step))
}

pub fn draw_legs<S: Surface>(
    surface: &mut S,
    shape: Option<LimbShape>,
    color: Rgba<u8>,
    size: i32,
    pose: Pose,
) {
    if let Some(shape) = shape {
        for bounds in leg_boxes(shape, size, pose) {
            draw_rect(surface, bounds, ShapeStyle::outlined(color));
        }
    }
}
