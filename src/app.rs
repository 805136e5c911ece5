use crate::export::{ImageSink, PngFileSink};
use crate::input::{self, CanvasAction, StrokeInput};
use crate::panels;
use crate::renderer::{DrawingSurface, Renderer};
use crate::settings::Settings;
use crate::state::DrawingState;

/// Outcome line shown under the controls
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// The desktop shell around the drawing engine.
///
/// Only `Settings` survive a restart; the drawing is per session.
pub struct KaleidoscopeApp {
    settings: Settings,
    state: DrawingState,
    renderer: Renderer,
    stroke_input: StrokeInput,
    status: Option<StatusMessage>,
}

impl Default for KaleidoscopeApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl KaleidoscopeApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!("Starting with {:?}", settings);
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        let mut state = DrawingState::new();
        settings.apply_to(&mut state);
        Self {
            settings,
            state,
            renderer: Renderer::new(),
            stroke_input: StrokeInput::new(),
            status: None,
        }
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DrawingState {
        &mut self.state
    }

    pub fn stroke_input_mut(&mut self) -> &mut StrokeInput {
        &mut self.stroke_input
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Render the current drawing onto `surface`
    pub fn paint(&mut self, surface: &mut impl DrawingSurface) {
        self.renderer.paint(surface, &self.state);
    }

    pub fn handle_action(&mut self, action: CanvasAction) {
        if let CanvasAction::Save = action {
            self.save_drawing();
        } else {
            action.apply(&mut self.state);
        }
    }

    /// Export the canvas and hand it to the PNG sink
    pub fn save_drawing(&mut self) {
        let image = Renderer::export(&self.state).into_image();
        let sink = PngFileSink::new(&self.settings.export_dir);

        self.status = Some(match sink.persist(&image, &self.settings.export_name) {
            Ok(path) => StatusMessage::info(format!("Image saved to {}", path.display())),
            Err(err) => {
                log::error!("Saving drawing failed: {}", err);
                StatusMessage::error(format!("Error saving image: {}", err))
            }
        });
    }
}

impl eframe::App for KaleidoscopeApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.capture_from(&self.state);
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in input::shortcut_actions(ctx) {
            self.handle_action(action);
        }

        // Side panels must be added before the central panel
        panels::top_bar(self, ctx);
        panels::controls_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
