use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::export::{self, DEFAULT_EXPORT_NAME};
use crate::state::{DEFAULT_BRUSH_WIDTH, DEFAULT_SYMMETRY_ORDER, DrawingState};

/// User preferences persisted between sessions. Drawings themselves are not.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub symmetry_order: u32,
    pub brush_width: f32,
    pub export_dir: PathBuf,
    pub export_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            symmetry_order: DEFAULT_SYMMETRY_ORDER,
            brush_width: DEFAULT_BRUSH_WIDTH,
            export_dir: export::default_export_dir(),
            export_name: DEFAULT_EXPORT_NAME.to_owned(),
        }
    }
}

impl Settings {
    /// Push the stored brush configuration into a drawing.
    ///
    /// Goes through the regular setters, so a hand-edited value is clamped
    /// or ignored exactly like slider input.
    pub fn apply_to(&self, state: &mut DrawingState) {
        state.set_symmetry_order(i32::try_from(self.symmetry_order).unwrap_or(i32::MAX));
        state.set_brush_width(self.brush_width);
    }

    /// Remember the brush configuration currently in use
    pub fn capture_from(&mut self, state: &DrawingState) {
        self.symmetry_order = state.symmetry_order();
        self.brush_width = state.brush_width();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "brush_width": 12.0 }"#).unwrap();
        assert_eq!(settings.brush_width, 12.0);
        assert_eq!(settings.symmetry_order, DEFAULT_SYMMETRY_ORDER);
        assert_eq!(settings.export_name, DEFAULT_EXPORT_NAME);
    }

    #[test]
    fn test_round_trip_through_json() {
        let settings = Settings {
            symmetry_order: 8,
            brush_width: 3.0,
            export_dir: PathBuf::from("/tmp/art"),
            export_name: "Mandala".to_owned(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_apply_clamps_out_of_range_values() {
        let settings = Settings {
            symmetry_order: 1,
            brush_width: 500.0,
            ..Settings::default()
        };
        let mut state = DrawingState::with_seed(3);
        settings.apply_to(&mut state);
        assert_eq!(state.symmetry_order(), DEFAULT_SYMMETRY_ORDER);
        assert_eq!(state.brush_width(), 30.0);
    }

    #[test]
    fn test_capture_from_state() {
        let mut state = DrawingState::with_seed(4);
        state.set_symmetry_order(7);
        state.set_brush_width(9.0);
        let mut settings = Settings::default();
        settings.capture_from(&state);
        assert_eq!(settings.symmetry_order, 7);
        assert_eq!(settings.brush_width, 9.0);
    }
}
