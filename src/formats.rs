//! Extension-based media detection.
//!
//! Everything here trusts the file name suffix; content is never sniffed. A `.png`
//! that actually holds JPEG data is treated as PNG and will fail (or succeed) at
//! decode time accordingly.

use crate::constants::{IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
use std::fmt;
use std::path::Path;

/// Encodings the batch tools write. Output always mirrors the input family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossy, honours quality
    Jpeg,
    /// Lossless, quality is ignored
    Png,
}

impl OutputFormat {
    /// Maps an input path to the format its output is written in.
    pub fn from_path(path: &Path) -> Option<Self> {
        match lowercase_extension(path)?.as_str() {
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "png" => Some(OutputFormat::Png),
            _ => None,
        }
    }

    /// Canonical extension for written files. `.jpeg` inputs come out as `.jpg`.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
        };
        write!(f, "{}", name)
    }
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// True for `.jpg`, `.jpeg` and `.png`, in any letter case.
pub fn is_image_file(path: &Path) -> bool {
    lowercase_extension(path)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// True for `.mov` and `.mp4`, in any letter case.
pub fn is_video_file(path: &Path) -> bool {
    lowercase_extension(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}
