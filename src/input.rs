use egui::{Context, Key, Pos2, Rect, Response};

use crate::renderer::to_canvas;
use crate::state::DrawingState;

/// Engine-level actions produced from raw egui input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasAction {
    /// Pointer pressed on the canvas
    BeginStroke(Pos2),
    /// Pointer moved while held, canvas-local coordinates
    ContinueStroke { from: Pos2, to: Pos2 },
    ChangeColor,
    IncreaseBrush,
    DecreaseBrush,
    Clear,
    /// Export request; the app owns the image sink, so `apply` leaves it alone
    Save,
}

impl CanvasAction {
    /// Apply to the drawing. Returns false for actions the app must handle itself.
    pub fn apply(&self, state: &mut DrawingState) -> bool {
        match *self {
            CanvasAction::BeginStroke(point) => state.begin_stroke(point),
            CanvasAction::ContinueStroke { from, to } => state.continue_stroke(from, to),
            CanvasAction::ChangeColor => state.change_color(),
            CanvasAction::IncreaseBrush => state.increase_brush_width(),
            CanvasAction::DecreaseBrush => state.decrease_brush_width(),
            CanvasAction::Clear => state.clear(),
            CanvasAction::Save => return false,
        }
        true
    }
}

/// Turns a pointer drag into one segment per movement sample
#[derive(Debug, Default)]
pub struct StrokeInput {
    last_position: Option<Pos2>,
}

impl StrokeInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.last_position.is_some()
    }

    pub fn pointer_down(&mut self, pos: Pos2) -> CanvasAction {
        self.last_position = Some(pos);
        CanvasAction::BeginStroke(pos)
    }

    /// `None` when no drag is in progress or the pointer did not move
    pub fn pointer_move(&mut self, pos: Pos2) -> Option<CanvasAction> {
        let from = self.last_position?;
        if from == pos {
            return None;
        }
        self.last_position = Some(pos);
        Some(CanvasAction::ContinueStroke { from, to: pos })
    }

    pub fn pointer_up(&mut self) {
        self.last_position = None;
    }

    /// Read this frame's drag state from the canvas response
    pub fn process(&mut self, response: &Response, canvas_rect: Rect) -> Vec<CanvasAction> {
        let mut actions = Vec::new();
        let pos = response
            .interact_pointer_pos()
            .map(|screen| to_canvas(canvas_rect, screen));

        if response.drag_started() {
            if let Some(pos) = pos {
                actions.push(self.pointer_down(pos));
            }
        } else if response.dragged() {
            match pos {
                Some(pos) if self.is_drawing() => actions.extend(self.pointer_move(pos)),
                // Drag that began outside the canvas
                Some(pos) => actions.push(self.pointer_down(pos)),
                None => {}
            }
        }

        if response.drag_stopped() {
            self.pointer_up();
        }
        actions
    }
}

/// Keyboard shortcuts, skipped while a widget wants text input
pub fn shortcut_actions(ctx: &Context) -> Vec<CanvasAction> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }

    ctx.input(|input| {
        let mut actions = Vec::new();
        if input.modifiers.command && input.key_pressed(Key::S) {
            actions.push(CanvasAction::Save);
        }
        if input.key_pressed(Key::Space) {
            actions.push(CanvasAction::ChangeColor);
        }
        if input.key_pressed(Key::Plus) || input.key_pressed(Key::Equals) {
            actions.push(CanvasAction::IncreaseBrush);
        }
        if input.key_pressed(Key::Minus) {
            actions.push(CanvasAction::DecreaseBrush);
        }
        if input.key_pressed(Key::Delete) {
            actions.push(CanvasAction::Clear);
        }
        actions
    })
}
