use egui::{Color32, Pos2, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::color::{self, ColorCursor};
use crate::segment::LineSegment;
use crate::symmetry;

pub const MIN_SYMMETRY_ORDER: u32 = 2;
/// Upper bound of the symmetry slider. The engine itself accepts larger orders.
pub const MAX_UI_SYMMETRY_ORDER: u32 = 9;
pub const DEFAULT_SYMMETRY_ORDER: u32 = 6;

pub const MIN_BRUSH_WIDTH: f32 = 1.0;
pub const MAX_BRUSH_WIDTH: f32 = 30.0;
pub const DEFAULT_BRUSH_WIDTH: f32 = 4.0;

/// The stroke store: recorded segments plus the live drawing configuration.
///
/// Every mutation goes through the methods below. Out-of-range input is
/// clamped or ignored, never reported as an error.
#[derive(Debug)]
pub struct DrawingState {
    segments: Vec<LineSegment>,
    symmetry_order: u32,
    brush_width: f32,
    cursor: ColorCursor,
    canvas_size: Vec2,
    background: Color32,
    generation: u64,
    rng: StdRng,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl DrawingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic state for tests and reproducible sessions
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut state = Self {
            segments: Vec::new(),
            symmetry_order: DEFAULT_SYMMETRY_ORDER,
            brush_width: DEFAULT_BRUSH_WIDTH,
            cursor: ColorCursor::default(),
            canvas_size: Vec2::ZERO,
            background: color::INITIAL_BACKGROUND,
            generation: 0,
            rng,
        };
        state.change_color();
        state
    }

    /// Lay down the dot that starts a drag
    pub fn begin_stroke(&mut self, point: Pos2) {
        self.push_segment(point, point);
    }

    /// Record one incremental pointer movement
    pub fn continue_stroke(&mut self, from: Pos2, to: Pos2) {
        self.push_segment(from, to);
    }

    fn push_segment(&mut self, start: Pos2, end: Pos2) {
        if !(start.x.is_finite() && start.y.is_finite() && end.x.is_finite() && end.y.is_finite()) {
            log::debug!("Ignoring non-finite stroke points {:?} -> {:?}", start, end);
            return;
        }

        self.segments.push(LineSegment::new(
            start,
            end,
            self.cursor.resolve(),
            self.brush_width,
            self.symmetry_order,
        ));
        self.cursor.drift();
    }

    pub fn set_symmetry_order(&mut self, order: i32) {
        match u32::try_from(order) {
            Ok(order) if order >= MIN_SYMMETRY_ORDER => self.symmetry_order = order,
            _ => log::debug!("Ignoring symmetry order {}", order),
        }
    }

    pub fn set_brush_width(&mut self, width: f32) {
        if width.is_nan() {
            log::debug!("Ignoring NaN brush width");
            return;
        }
        self.brush_width = width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH);
    }

    pub fn nudge_brush_width(&mut self, delta: f32) {
        self.set_brush_width(self.brush_width + delta);
    }

    pub fn increase_brush_width(&mut self) {
        self.nudge_brush_width(1.0);
    }

    pub fn decrease_brush_width(&mut self) {
        self.nudge_brush_width(-1.0);
    }

    /// Drop every segment and pick a new dark background
    pub fn clear(&mut self) {
        self.segments.clear();
        self.generation = self.generation.wrapping_add(1);
        self.background = color::random_background(&mut self.rng);
        log::info!("Canvas cleared, new background {:?}", self.background);
    }

    pub fn change_color(&mut self) {
        self.cursor.reroll(&mut self.rng);
        log::debug!("Color cursor now at hue {:.1}", self.cursor.hue());
    }

    /// Safe to call every frame
    pub fn update_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas_size = Vec2::new(sanitize_extent(width), sanitize_extent(height));
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn symmetry_order(&self) -> u32 {
        self.symmetry_order
    }

    pub fn brush_width(&self) -> f32 {
        self.brush_width
    }

    pub fn cursor(&self) -> &ColorCursor {
        &self.cursor
    }

    pub fn cursor_hue(&self) -> f32 {
        self.cursor.hue()
    }

    pub fn swatch_color(&self) -> Color32 {
        self.cursor.swatch()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Center of all rotation and mirror transforms
    pub fn pivot(&self) -> Pos2 {
        symmetry::pivot(self.canvas_size)
    }

    /// Bumped by every `clear`
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn sanitize_extent(extent: f32) -> f32 {
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        0.0
    }
}
