use egui::{RichText, Slider};

use crate::KaleidoscopeApp;
use crate::state::{MAX_BRUSH_WIDTH, MAX_UI_SYMMETRY_ORDER, MIN_BRUSH_WIDTH, MIN_SYMMETRY_ORDER};

const LABEL_WIDTH: f32 = 90.0;

pub fn controls_panel(app: &mut KaleidoscopeApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("controls_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(6.0);

            let mut brush = app.state().brush_width();
            ui.horizontal(|ui| {
                ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new(format!("Brush: {}", brush as i32)));
                let slider = Slider::new(&mut brush, MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH)
                    .step_by(1.0)
                    .show_value(false);
                if ui.add(slider).changed() {
                    app.state_mut().set_brush_width(brush);
                }
            });

            let mut pairs = app.state().symmetry_order() as i32;
            ui.horizontal(|ui| {
                ui.add_sized([LABEL_WIDTH, 20.0], egui::Label::new(format!("Pairs: {}", pairs)));
                let slider = Slider::new(&mut pairs, MIN_SYMMETRY_ORDER as i32..=MAX_UI_SYMMETRY_ORDER as i32)
                    .show_value(false);
                if ui.add(slider).changed() {
                    app.state_mut().set_symmetry_order(pairs);
                }
            });

            if let Some(status) = app.status() {
                let text = RichText::new(&status.text);
                let text = if status.is_error {
                    text.color(ui.visuals().error_fg_color)
                } else {
                    text.weak()
                };
                ui.label(text);
            }
            ui.add_space(4.0);
        });
}
