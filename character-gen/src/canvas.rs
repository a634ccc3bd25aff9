//! Raster drawing primitives
//!
//! The renderer only needs a handful of operations: fill and outline a box,
//! an ellipse or a convex polygon, and stroke an elliptical arc. Rasterization
//! is done by `embedded-graphics`; the [`Surface`] trait is the pixel store it
//! draws into, and [`image::RgbaImage`] is the one used for rendered frames.
//!
//! Coordinates are signed. Shapes may hang off the canvas edge (a bobbing
//! head near the top, a long leg at the bottom) and are clipped per pixel.
//! Shapes are always opaque.

use embedded_graphics::{
    Drawable, Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::{Rgb888, RgbColor},
    primitives::{
        Ellipse, Line, Polyline, Primitive, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle,
        StrokeAlignment, Triangle,
    },
};
use image::{ImageBuffer, Rgba, RgbaImage};

/// Fully transparent pixel, the canvas background
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Outline color for every shape
pub const OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Pixel store the drawing primitives write into
pub trait Surface {
    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Write one pixel; coordinates outside the surface are ignored
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>);
}

impl Surface for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x < self.width() && y < self.height() {
            ImageBuffer::put_pixel(self, x, y, color);
        }
    }
}

/// Create a fully transparent square canvas
pub fn new_canvas(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, TRANSPARENT)
}

/// Inclusive pixel box `[x0, y0, x1, y1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    /// Build a box from two corners, swapping them if inverted
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Width in pixels (inclusive of both edges)
    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    /// Height in pixels (inclusive of both edges)
    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    fn center(&self) -> (f32, f32) {
        (
            (self.x0 + self.x1) as f32 / 2.0,
            (self.y0 + self.y1) as f32 / 2.0,
        )
    }
}

/// Fill and outline colors for a closed shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeStyle {
    pub fill: Option<Rgba<u8>>,
    /// 1-pixel stroke, inside the shape
    pub outline: Option<Rgba<u8>>,
}

impl ShapeStyle {
    /// Filled with `color`, outlined in black
    pub fn outlined(color: Rgba<u8>) -> Self {
        Self {
            fill: Some(color),
            outline: Some(OUTLINE),
        }
    }

    /// Filled with `color`, no outline
    pub fn solid(color: Rgba<u8>) -> Self {
        Self {
            fill: Some(color),
            outline: None,
        }
    }

    fn primitive_style(&self) -> PrimitiveStyle<Rgb888> {
        let mut builder = PrimitiveStyleBuilder::new();
        if let Some(fill) = self.fill {
            builder = builder.fill_color(rgb(fill));
        }
        if let Some(outline) = self.outline {
            builder = builder
                .stroke_color(rgb(outline))
                .stroke_width(1)
                .stroke_alignment(StrokeAlignment::Inside);
        }
        builder.build()
    }
}

fn rgb(color: Rgba<u8>) -> Rgb888 {
    Rgb888::new(color[0], color[1], color[2])
}

fn point((x, y): (i32, i32)) -> Point {
    Point::new(x, y)
}

/// Adapts a [`Surface`] to an `embedded-graphics` draw target
struct Target<'a, S: Surface>(&'a mut S);

impl<S: Surface> DrawTarget for Target<'_, S> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.0.put_pixel(x, y, Rgba([color.r(), color.g(), color.b(), 255]));
        }
        Ok(())
    }
}

impl<S: Surface> OriginDimensions for Target<'_, S> {
    fn size(&self) -> Size {
        let (width, height) = self.0.dimensions();
        Size::new(width, height)
    }
}

fn draw<S, D>(surface: &mut S, item: &D)
where
    S: Surface,
    D: Drawable<Color = Rgb888, Output = ()>,
{
    let Ok(()) = item.draw(&mut Target(surface));
}

fn area(bounds: Bounds) -> (Point, Size) {
    (
        Point::new(bounds.x0, bounds.y0),
        Size::new(bounds.width().unsigned_abs(), bounds.height().unsigned_abs()),
    )
}

/// Draw an axis-aligned rectangle
pub fn draw_rect<S: Surface>(surface: &mut S, bounds: Bounds, style: ShapeStyle) {
    let (top_left, size) = area(bounds);
    draw(
        surface,
        &Rectangle::new(top_left, size).into_styled(style.primitive_style()),
    );
}

/// Draw the ellipse inscribed in `bounds`
pub fn draw_ellipse<S: Surface>(surface: &mut S, bounds: Bounds, style: ShapeStyle) {
    let (top_left, size) = area(bounds);
    draw(
        surface,
        &Ellipse::new(top_left, size).into_styled(style.primitive_style()),
    );
}

/// Draw a closed convex polygon
///
/// The fill is a triangle fan from the first vertex; the outline strokes
/// every edge including the closing one.
pub fn draw_polygon<S: Surface>(surface: &mut S, points: &[(i32, i32)], style: ShapeStyle) {
    let [first, rest @ ..] = points else {
        return;
    };
    if rest.len() < 2 {
        return;
    }

    if let Some(fill) = style.fill {
        let fill = PrimitiveStyle::with_fill(rgb(fill));
        for pair in rest.windows(2) {
            let triangle = Triangle::new(point(*first), point(pair[0]), point(pair[1]));
            draw(surface, &triangle.into_styled(fill));
        }
    }

    if let Some(outline) = style.outline {
        let closed: Vec<Point> = points.iter().chain([first]).copied().map(point).collect();
        draw(
            surface,
            &Polyline::new(&closed).into_styled(PrimitiveStyle::with_stroke(rgb(outline), 1)),
        );
    }
}

/// Draw a 1-pixel line, both endpoints included
pub fn draw_line<S: Surface>(surface: &mut S, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
    draw(
        surface,
        &Line::new(point(from), point(to)).into_styled(PrimitiveStyle::with_stroke(rgb(color), 1)),
    );
}

/// Stroke part of the ellipse inscribed in `bounds`
///
/// Angles are in degrees, clockwise from 3 o'clock, so `0..180` is the
/// lower half.
pub fn draw_arc<S: Surface>(
    surface: &mut S,
    bounds: Bounds,
    start_deg: f32,
    end_deg: f32,
    color: Rgba<u8>,
) {
    let (cx, cy) = bounds.center();
    let rx = (bounds.x1 - bounds.x0) as f32 / 2.0;
    let ry = (bounds.y1 - bounds.y0) as f32 / 2.0;
    let steps = (2 * (bounds.width() + bounds.height())).max(8);

    let vertices: Vec<Point> = (0..=steps)
        .map(|step| {
            let rad = (start_deg + (end_deg - start_deg) * step as f32 / steps as f32).to_radians();
            Point::new(
                (cx + rx * rad.cos()).round() as i32,
                (cy + ry * rad.sin()).round() as i32,
            )
        })
        .collect();
    draw(
        surface,
        &Polyline::new(&vertices).into_styled(PrimitiveStyle::with_stroke(rgb(color), 1)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn count(img: &RgbaImage, color: Rgba<u8>) -> usize {
        img.pixels().filter(|&&p| p == color).count()
    }

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = new_canvas(16);
        assert_eq!(Surface::dimensions(&canvas), (16, 16));
        assert!(canvas.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_zero_size_canvas() {
        let mut canvas = new_canvas(0);
        draw_rect(&mut canvas, Bounds::new(0, 0, 4, 4), ShapeStyle::outlined(RED));
        assert_eq!(canvas.len(), 0);
    }

    #[test]
    fn test_bounds_normalize() {
        let b = Bounds::new(5, 7, 1, 2);
        assert_eq!(b, Bounds { x0: 1, y0: 2, x1: 5, y1: 7 });
        assert_eq!(b.width(), 5);
        assert_eq!(b.height(), 6);
    }

    #[test]
    fn test_rect_fill_and_outline() {
        let mut canvas = new_canvas(8);
        draw_rect(&mut canvas, Bounds::new(1, 1, 5, 4), ShapeStyle::outlined(RED));

        // 5x4 box: 3x2 interior, the rest is border
        assert_eq!(count(&canvas, RED), 6);
        assert_eq!(count(&canvas, OUTLINE), 20 - 6);
        assert_eq!(*canvas.get_pixel(3, 2), RED);
        assert_eq!(*canvas.get_pixel(1, 1), OUTLINE);
        assert_eq!(*canvas.get_pixel(5, 4), OUTLINE);
        assert_eq!(*canvas.get_pixel(6, 4), TRANSPARENT);
    }

    #[test]
    fn test_rect_clips_at_edges() {
        let mut canvas = new_canvas(4);
        draw_rect(&mut canvas, Bounds::new(-2, -2, 10, 1), ShapeStyle::solid(RED));
        assert_eq!(count(&canvas, RED), 8);
    }

    #[test]
    fn test_ellipse_fill_and_outline() {
        let mut canvas = new_canvas(16);
        draw_ellipse(&mut canvas, Bounds::new(2, 2, 12, 12), ShapeStyle::outlined(RED));

        assert_eq!(*canvas.get_pixel(7, 7), RED);
        assert_eq!(*canvas.get_pixel(2, 2), TRANSPARENT);
        assert_eq!(*canvas.get_pixel(12, 12), TRANSPARENT);

        // Middle column: outline at both ends, fill in between
        let column: Vec<_> = (0..16).filter(|&y| canvas.get_pixel(7, y)[3] != 0).collect();
        let (top, bottom) = (column[0], column[column.len() - 1]);
        assert!(top >= 2 && bottom <= 12);
        assert_eq!(*canvas.get_pixel(7, top), OUTLINE);
        assert_eq!(*canvas.get_pixel(7, bottom), OUTLINE);
        assert_eq!(column.len() as u32, bottom - top + 1);

        for (x, y, p) in canvas.enumerate_pixels() {
            if p[3] != 0 {
                assert!((2..=12).contains(&x) && (2..=12).contains(&y), "outside at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_ellipse_clips_at_edges() {
        let mut canvas = new_canvas(8);
        draw_ellipse(&mut canvas, Bounds::new(-6, -6, 5, 5), ShapeStyle::solid(RED));
        assert_eq!(*canvas.get_pixel(0, 0), RED);
        assert_eq!(*canvas.get_pixel(7, 7), TRANSPARENT);
    }

    #[test]
    fn test_polygon_triangle() {
        let mut canvas = new_canvas(16);
        draw_polygon(&mut canvas, &[(8, 2), (2, 12), (14, 12)], ShapeStyle::outlined(RED));

        assert_eq!(*canvas.get_pixel(8, 9), RED);
        assert_eq!(*canvas.get_pixel(8, 2), OUTLINE);
        assert_eq!(*canvas.get_pixel(2, 12), OUTLINE);
        assert_eq!(*canvas.get_pixel(14, 12), OUTLINE);
        assert_eq!(*canvas.get_pixel(2, 2), TRANSPARENT);
    }

    #[test]
    fn test_degenerate_polygon_draws_nothing() {
        let mut canvas = new_canvas(8);
        draw_polygon(&mut canvas, &[(1, 1), (5, 5)], ShapeStyle::outlined(RED));
        assert!(canvas.pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn test_polygon_quad_fan() {
        let mut canvas = new_canvas(12);
        let quad = [(1, 1), (10, 1), (10, 8), (1, 8)];
        draw_polygon(&mut canvas, &quad, ShapeStyle::outlined(RED));

        // Same pixels as the equivalent rectangle
        let mut rect = new_canvas(12);
        draw_rect(&mut rect, Bounds::new(1, 1, 10, 8), ShapeStyle::outlined(RED));
        assert_eq!(canvas, rect);
    }

    #[test]
    fn test_polygon_fill_only() {
        let mut canvas = new_canvas(16);
        draw_polygon(&mut canvas, &[(8, 2), (2, 12), (14, 12)], ShapeStyle::solid(RED));
        assert_eq!(*canvas.get_pixel(8, 9), RED);
        assert_eq!(count(&canvas, OUTLINE), 0);
    }

    #[test]
    fn test_line_endpoints() {
        let mut canvas = new_canvas(8);
        draw_line(&mut canvas, (0, 7), (7, 0), RED);
        assert_eq!(count(&canvas, RED), 8);
        assert_eq!(*canvas.get_pixel(0, 7), RED);
        assert_eq!(*canvas.get_pixel(7, 0), RED);
    }

    #[test]
    fn test_arc_lower_half_only() {
        let mut canvas = new_canvas(16);
        draw_arc(&mut canvas, Bounds::new(2, 2, 12, 12), 0.0, 180.0, RED);

        // Endpoints at 3 and 9 o'clock, bottom of the ellipse reached
        assert_eq!(*canvas.get_pixel(12, 7), RED);
        assert_eq!(*canvas.get_pixel(2, 7), RED);
        assert_eq!(*canvas.get_pixel(7, 12), RED);
        for y in 0..7 {
            for x in 0..16 {
                assert_eq!(*canvas.get_pixel(x, y), TRANSPARENT, "upper half at ({x}, {y})");
            }
        }
    }
}
