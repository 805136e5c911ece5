use egui::{Color32, Pos2};

/// One recorded line of the drawing history.
///
/// Everything needed to render the segment is frozen at creation time, so
/// later changes to the brush, the color cursor or the symmetry order never
/// alter segments that are already on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment {
    start: Pos2,
    end: Pos2,
    color: Color32,
    stroke_width: f32,
    symmetry_order: u32,
}

impl LineSegment {
    pub fn new(start: Pos2, end: Pos2, color: Color32, stroke_width: f32, symmetry_order: u32) -> Self {
        Self {
            start,
            end,
            color,
            stroke_width,
            symmetry_order,
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Symmetry order that was in effect when this segment was drawn
    pub fn symmetry_order(&self) -> u32 {
        self.symmetry_order
    }
}
