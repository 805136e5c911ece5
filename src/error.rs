use thiserror::Error;

/// Errors that can occur while persisting an exported image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: canvas is {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
