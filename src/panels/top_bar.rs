use crate::KaleidoscopeApp;
use crate::input::CanvasAction;

pub fn top_bar(app: &mut KaleidoscopeApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new("Kaleidoscope").strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Clear").on_hover_text("Clear canvas (Del)").clicked() {
                    log::info!("Clear requested from toolbar");
                    app.handle_action(CanvasAction::Clear);
                }
                if ui.button("Save").on_hover_text("Save as PNG (Ctrl+S)").clicked() {
                    app.handle_action(CanvasAction::Save);
                }
            });
        });
    });
}
