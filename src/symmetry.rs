//! Geometry that turns one recorded segment into its kaleidoscope copies.

use egui::{Color32, Pos2, Vec2};

use crate::segment::LineSegment;

/// A single round-capped line ready to be drawn, in canvas-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePrimitive {
    pub start: Pos2,
    pub end: Pos2,
    pub color: Color32,
    pub width: f32,
}

impl LinePrimitive {
    /// Same line with `offset` added to both endpoints
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
            ..*self
        }
    }

    /// True for the dot laid down when a drag starts
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }
}

/// Canvas center, or the origin while the canvas has no usable area
pub fn pivot(canvas_size: Vec2) -> Pos2 {
    let usable = canvas_size.x.is_finite()
        && canvas_size.y.is_finite()
        && canvas_size.x > 0.0
        && canvas_size.y > 0.0;
    if usable {
        Pos2::new(canvas_size.x / 2.0, canvas_size.y / 2.0)
    } else {
        Pos2::ZERO
    }
}

/// Rotate `v` about the origin. Positive angles turn clockwise on a y-down canvas.
pub fn rotate(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Reflect across the horizontal axis through the origin
pub fn mirror(v: Vec2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}

/// Expand one segment into `2 * N` primitives around `pivot`.
///
/// For each of the N rotations the rotated copy is emitted first, then its
/// mirror image. Mirroring happens in pivot-relative space after rotating.
pub fn expand_segment(segment: &LineSegment, pivot: Pos2) -> impl Iterator<Item = LinePrimitive> + '_ {
    let order = segment.symmetry_order().max(1);
    let step = 360.0 / order as f32;
    let rel_start = segment.start() - pivot;
    let rel_end = segment.end() - pivot;
    let color = segment.color();
    let width = segment.stroke_width();

    (0..order).flat_map(move |i| {
        let angle = i as f32 * step;
        let start = rotate(rel_start, angle);
        let end = rotate(rel_end, angle);

        let rotated = LinePrimitive {
            start: pivot + start,
            end: pivot + end,
            color,
            width,
        };
        let mirrored = LinePrimitive {
            start: pivot + mirror(start),
            end: pivot + mirror(end),
            color,
            width,
        };
        [rotated, mirrored]
    })
}

/// Number of primitives `expand_segment` produces for `segment`
pub fn primitive_count(segment: &LineSegment) -> usize {
    2 * segment.symmetry_order().max(1) as usize
}

/// Expand every segment in paint order
pub fn expand_all(segments: &[LineSegment], canvas_size: Vec2) -> Vec<LinePrimitive> {
    let pivot = pivot(canvas_size);
    let mut primitives = Vec::with_capacity(segments.iter().map(primitive_count).sum());
    for segment in segments {
        primitives.extend(expand_segment(segment, pivot));
    }
    primitives
}
