use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};

use crate::renderer::DrawingSurface;
use crate::symmetry::LinePrimitive;

/// Offscreen RGBA buffer the export path draws into.
///
/// Lines are filled as capsules (round caps at both ends) with a one pixel
/// coverage ramp along the edge, and blended source-over.
#[derive(Clone, Debug)]
pub struct RasterCanvas {
    image: RgbaImage,
}

impl RasterCanvas {
    /// Fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Color at `(x, y)`, or `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.image
            .get_pixel_checked(x, y)
            .map(|Rgba([r, g, b, a])| Color32::from_rgba_unmultiplied(*r, *g, *b, *a))
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Hand the finished buffer over; nothing can draw into it afterwards.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn blend(&mut self, x: u32, y: u32, [r, g, b]: [u8; 3], alpha: f32) {
        let dst = self.image.get_pixel_mut(x, y);
        *dst = blend_over(*dst, [r, g, b], alpha);
    }
}

impl DrawingSurface for RasterCanvas {
    fn fill_background(&mut self, color: Color32) {
        let fill = Rgba(color.to_srgba_unmultiplied());
        for pixel in self.image.pixels_mut() {
            *pixel = fill;
        }
    }

    fn draw_line(&mut self, line: &LinePrimitive) {
        let radius = line.width / 2.0;
        let finite = [line.start.x, line.start.y, line.end.x, line.end.y]
            .iter()
            .all(|c| c.is_finite());
        if !finite || radius.is_nan() || radius <= 0.0 || self.is_empty() {
            return;
        }

        let [r, g, b, a] = line.color.to_srgba_unmultiplied();
        if a == 0 {
            return;
        }
        let alpha = a as f32 / 255.0;

        let pad = radius + 1.0;
        let x0 = (line.start.x.min(line.end.x) - pad).floor().max(0.0) as u32;
        let y0 = (line.start.y.min(line.end.y) - pad).floor().max(0.0) as u32;
        let x1 = ((line.start.x.max(line.end.x) + pad).ceil().max(0.0) as u32).min(self.width());
        let y1 = ((line.start.y.max(line.end.y) + pad).ceil().max(0.0) as u32).min(self.height());

        for y in y0..y1 {
            for x in x0..x1 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let distance = distance_to_segment(center, line.start, line.end);
                let coverage = (radius + 0.5 - distance).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(x, y, [r, g, b], alpha * coverage);
                }
            }
        }
    }
}

fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let along = end - start;
    let len_sq = along.length_sq();
    if len_sq <= f32::EPSILON {
        return point.distance(start);
    }
    let t = ((point - start).dot(along) / len_sq).clamp(0.0, 1.0);
    point.distance(start + along * t)
}

fn blend_over(dst: Rgba<u8>, src: [u8; 3], src_alpha: f32) -> Rgba<u8> {
    let Rgba([dr, dg, db, da]) = dst;
    let sa = src_alpha.clamp(0.0, 1.0);
    let da = da as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= f32::EPSILON {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| -> u8 {
        ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(src[0], dr),
        channel(src[1], dg),
        channel(src[2], db),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(start: (f32, f32), end: (f32, f32), color: Color32, width: f32) -> LinePrimitive {
        LinePrimitive {
            start: Pos2::new(start.0, start.1),
            end: Pos2::new(end.0, end.1),
            color,
            width,
        }
    }

    #[test]
    fn test_fill_background_covers_every_pixel() {
        let mut canvas = RasterCanvas::new(8, 4);
        canvas.fill_background(Color32::from_rgb(10, 20, 30));
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(canvas.pixel(x, y), Some(Color32::from_rgb(10, 20, 30)));
            }
        }
        assert_eq!(canvas.pixel(8, 0), None);
    }

    #[test]
    fn test_opaque_line_paints_its_body() {
        let mut canvas = RasterCanvas::new(20, 20);
        canvas.fill_background(Color32::BLACK);
        canvas.draw_line(&line((2.0, 10.0), (18.0, 10.0), Color32::WHITE, 4.0));

        assert_eq!(canvas.pixel(10, 9), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(10, 10), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(10, 2), Some(Color32::BLACK));
    }

    #[test]
    fn test_round_caps_extend_past_endpoints() {
        let mut canvas = RasterCanvas::new(20, 20);
        canvas.fill_background(Color32::BLACK);
        canvas.draw_line(&line((10.0, 10.0), (10.0, 10.0), Color32::WHITE, 6.0));

        // A zero-length line is a dot of radius 3
        assert_eq!(canvas.pixel(11, 10), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(9, 9), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(16, 10), Some(Color32::BLACK));
    }

    #[test]
    fn test_translucent_line_blends_with_background() {
        let mut canvas = RasterCanvas::new(10, 10);
        canvas.fill_background(Color32::BLACK);
        let half_red = Color32::from_rgba_unmultiplied(255, 0, 0, 128);
        canvas.draw_line(&line((0.0, 5.0), (10.0, 5.0), half_red, 4.0));

        let [r, g, b, a] = canvas.pixel(5, 5).map(|c| c.to_array()).unwrap_or_default();
        assert!((120..=136).contains(&r));
        assert_eq!((g, b, a), (0, 0, 255));
    }

    #[test]
    fn test_offscreen_and_degenerate_lines_are_skipped() {
        let mut canvas = RasterCanvas::new(10, 10);
        canvas.fill_background(Color32::BLACK);
        canvas.draw_line(&line((-100.0, -100.0), (-50.0, -50.0), Color32::WHITE, 4.0));
        canvas.draw_line(&line((1e9, 1e9), (2e9, 2e9), Color32::WHITE, 4.0));
        canvas.draw_line(&line((f32::NAN, 0.0), (5.0, 5.0), Color32::WHITE, 4.0));
        canvas.draw_line(&line((0.0, 0.0), (5.0, 5.0), Color32::WHITE, 0.0));
        assert!(canvas.as_image().pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn test_zero_sized_canvas_accepts_drawing() {
        let mut canvas = RasterCanvas::new(0, 0);
        canvas.fill_background(Color32::BLACK);
        canvas.draw_line(&line((0.0, 0.0), (5.0, 5.0), Color32::WHITE, 4.0));
        assert!(canvas.is_empty());
    }
}
