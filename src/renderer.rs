use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::raster::RasterCanvas;
use crate::state::DrawingState;
use crate::symmetry::{self, LinePrimitive};

/// Largest export buffer, in pixels (256 MiB of RGBA)
pub const MAX_EXPORT_PIXELS: u64 = 1 << 26;

/// Something the kaleidoscope can be drawn onto.
///
/// Both the live canvas and the export buffer implement this, so the two
/// paths share one expansion and one draw order.
pub trait DrawingSurface {
    /// Cover the whole surface with `color`
    fn fill_background(&mut self, color: Color32);

    /// Draw a round-capped line given in canvas-local coordinates
    fn draw_line(&mut self, line: &LinePrimitive);
}

/// Live canvas backed by an egui painter
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    /// `rect` is where the canvas sits on screen; its top-left is canvas (0, 0).
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }
}

impl DrawingSurface for PainterSurface<'_> {
    fn fill_background(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn draw_line(&mut self, line: &LinePrimitive) {
        let line = line.translated(self.rect.min.to_vec2());
        self.painter.add(capsule_shape(&line));
    }
}

/// The single egui shape a primitive is drawn as.
///
/// One filled shape per primitive covers translucent caps once, like `RasterCanvas`.
pub fn capsule_shape(line: &LinePrimitive) -> Shape {
    if line.is_point() {
        Shape::circle_filled(line.start, line.width / 2.0, line.color)
    } else {
        Shape::convex_polygon(capsule_outline(line), line.color, Stroke::NONE)
    }
}

/// Outline of a round-capped line: an arc around `end`, then one around `start`.
///
/// Points run clockwise on screen. A zero-length line degenerates to a circle.
pub fn capsule_outline(line: &LinePrimitive) -> Vec<Pos2> {
    let radius = line.width / 2.0;
    let along = line.end - line.start;
    let heading = if along.length_sq() > 0.0 { along.y.atan2(along.x) } else { 0.0 };
    let steps = ((radius * 2.0).ceil() as usize).clamp(4, 32);

    let mut points = Vec::with_capacity(2 * (steps + 1));
    for (center, from) in [
        (line.end, heading - std::f32::consts::FRAC_PI_2),
        (line.start, heading + std::f32::consts::FRAC_PI_2),
    ] {
        for i in 0..=steps {
            let angle = from + std::f32::consts::PI * i as f32 / steps as f32;
            points.push(center + radius * Vec2::angled(angle));
        }
    }
    points
}

/// Expanded primitives for the segments seen so far.
///
/// Segments are append-only between clears, so as long as the generation
/// and canvas size match only the new tail needs expanding.
#[derive(Debug, Default)]
struct ExpansionCache {
    generation: u64,
    canvas_size: Vec2,
    segments_seen: usize,
    primitives: Vec<LinePrimitive>,
}

impl ExpansionCache {
    fn refresh(&mut self, state: &DrawingState) -> &[LinePrimitive] {
        let segments = state.segments();
        let stale = self.generation != state.generation()
            || self.canvas_size != state.canvas_size()
            || segments.len() < self.segments_seen;

        if stale {
            log::trace!(
                "Re-expanding {} segments for canvas {:?}",
                segments.len(),
                state.canvas_size()
            );
            self.primitives.clear();
            self.segments_seen = 0;
            self.generation = state.generation();
            self.canvas_size = state.canvas_size();
        }

        let pivot = state.pivot();
        for segment in &segments[self.segments_seen..] {
            self.primitives.extend(symmetry::expand_segment(segment, pivot));
        }
        self.segments_seen = segments.len();

        &self.primitives
    }
}

/// Expands the stroke store into symmetric primitives and draws them.
#[derive(Debug, Default)]
pub struct Renderer {
    cache: ExpansionCache,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every primitive of the current drawing in paint order
    ///
    /// Args:
    ///     state (DrawingState): The drawing to expand
    ///
    /// Returns:
    ///     &[LinePrimitive]: Same content as `symmetry::expand_all` for `state`
    pub fn primitives(&mut self, state: &DrawingState) -> &[LinePrimitive] {
        self.cache.refresh(state)
    }

    /// Draws the background and every primitive onto `surface`
    ///
    /// Args:
    ///     surface (DrawingSurface): Where to draw, usually a `PainterSurface`
    ///     state (DrawingState): The drawing to render
    pub fn paint(&mut self, surface: &mut impl DrawingSurface, state: &DrawingState) {
        let background = state.background();
        paint_primitives(surface, background, self.cache.refresh(state));
    }

    /// Same drawing as `paint`, without touching the cache
    pub fn paint_uncached(surface: &mut impl DrawingSurface, state: &DrawingState) {
        let primitives = symmetry::expand_all(state.segments(), state.canvas_size());
        paint_primitives(surface, state.background(), &primitives);
    }

    /// Renders the full drawing into a new buffer sized to the current canvas
    ///
    /// Args:
    ///     state (DrawingState): The drawing to export
    ///
    /// Returns:
    ///     RasterCanvas: Background plus every primitive. Empty (0x0) while
    ///     the canvas has no area or exceeds `MAX_EXPORT_PIXELS`.
    pub fn export(state: &DrawingState) -> RasterCanvas {
        let (width, height) = export_dimensions(state.canvas_size());
        let mut canvas = RasterCanvas::new(width, height);
        Self::paint_uncached(&mut canvas, state);
        log::debug!(
            "Rendered {} segments into {}x{} export buffer",
            state.segments().len(),
            canvas.width(),
            canvas.height()
        );
        canvas
    }
}

fn export_dimensions(size: Vec2) -> (u32, u32) {
    let width = size.x.floor() as u32;
    let height = size.y.floor() as u32;
    if u64::from(width) * u64::from(height) > MAX_EXPORT_PIXELS {
        log::warn!("Canvas {:?} is too large to export", size);
        return (0, 0);
    }
    (width, height)
}

fn paint_primitives(surface: &mut impl DrawingSurface, background: Color32, primitives: &[LinePrimitive]) {
    surface.fill_background(background);
    for primitive in primitives {
        surface.draw_line(primitive);
    }
}

/// Canvas-local position of a screen point inside `canvas_rect`
pub fn to_canvas(canvas_rect: Rect, screen: Pos2) -> Pos2 {
    (screen - canvas_rect.min).to_pos2()
}
