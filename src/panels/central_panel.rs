use egui::{Rect, Sense, Stroke, Vec2};

use crate::KaleidoscopeApp;
use crate::input::CanvasAction;
use crate::renderer::PainterSurface;

const SWATCH_BUTTON_SIZE: f32 = 56.0;
const SWATCH_MARGIN: f32 = 16.0;

pub fn central_panel(app: &mut KaleidoscopeApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().inner_margin(8.0))
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
            let canvas_rect = response.rect;
            app.state_mut()
                .update_canvas_size(canvas_rect.width(), canvas_rect.height());

            // Color button floats over the bottom-right corner of the canvas
            let swatch_rect = Rect::from_min_size(
                canvas_rect.right_bottom() - Vec2::splat(SWATCH_BUTTON_SIZE + SWATCH_MARGIN),
                Vec2::splat(SWATCH_BUTTON_SIZE),
            );

            // A press that lands on the swatch never starts a stroke
            let pressed_on_swatch = ctx
                .input(|input| input.pointer.press_origin())
                .is_some_and(|origin| swatch_rect.contains(origin));
            let actions = if pressed_on_swatch {
                app.stroke_input_mut().pointer_up();
                Vec::new()
            } else {
                app.stroke_input_mut().process(&response, canvas_rect)
            };
            let drawing = !actions.is_empty();
            for action in actions {
                app.handle_action(action);
            }

            let mut surface = PainterSurface::new(&painter, canvas_rect);
            app.paint(&mut surface);

            let swatch = ui
                .allocate_rect(swatch_rect, Sense::click_and_drag())
                .on_hover_text("Change color (Space)");
            let visuals = ui.style().interact(&swatch);
            painter.circle(
                swatch_rect.center(),
                SWATCH_BUTTON_SIZE / 2.0,
                ui.visuals().selection.bg_fill,
                visuals.fg_stroke,
            );
            painter.circle(
                swatch_rect.center(),
                SWATCH_BUTTON_SIZE / 3.5,
                app.state().swatch_color(),
                Stroke::NONE,
            );
            if swatch.clicked() {
                app.handle_action(CanvasAction::ChangeColor);
            }

            if drawing {
                ctx.request_repaint();
            }
        });
}
