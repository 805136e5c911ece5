#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod segment;
pub mod settings;
pub mod state;
pub mod symmetry;

pub use app::KaleidoscopeApp;
pub use color::ColorCursor;
pub use error::{ExportError, ExportResult};
pub use export::{ImageSink, PngFileSink};
pub use raster::RasterCanvas;
pub use renderer::{DrawingSurface, PainterSurface, Renderer};
pub use segment::LineSegment;
pub use settings::Settings;
pub use state::DrawingState;
pub use symmetry::LinePrimitive;
