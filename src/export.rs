use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::{ExportError, ExportResult};

/// Name offered for saved drawings
pub const DEFAULT_EXPORT_NAME: &str = "KaleidoscopeArt";

/// Encodes and stores a finished export buffer
pub trait ImageSink {
    /// Persist `image`, returning where it ended up
    fn persist(&self, image: &RgbaImage, suggested_name: &str) -> ExportResult<PathBuf>;
}

/// Writes PNG files into a directory
#[derive(Clone, Debug)]
pub struct PngFileSink {
    directory: PathBuf,
}

impl PngFileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// `<name>-<uuid>.png` so repeated saves never overwrite each other
    fn file_name(suggested_name: &str) -> String {
        let stem = sanitize_stem(suggested_name);
        format!("{}-{}.png", stem, uuid::Uuid::new_v4().simple())
    }
}

impl ImageSink for PngFileSink {
    fn persist(&self, image: &RgbaImage, suggested_name: &str) -> ExportResult<PathBuf> {
        if image.width() == 0 || image.height() == 0 {
            return Err(ExportError::EmptyImage {
                width: image.width(),
                height: image.height(),
            });
        }

        fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(Self::file_name(suggested_name));
        image.save_with_format(&path, ImageFormat::Png)?;

        log::info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
        Ok(path)
    }
}

fn sanitize_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() {
        DEFAULT_EXPORT_NAME.to_owned()
    } else {
        stem
    }
}

/// The user's pictures folder when the platform has one, otherwise the working directory
pub fn default_export_dir() -> PathBuf {
    dirs_next::picture_dir()
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("."))
}
