pub const DEFAULT_COMPRESS_QUALITY: u8 = 50;
pub const DEFAULT_RESIZE_QUALITY: u8 = 85;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const COMPRESSED_SUFFIX: &str = "_compressed";
pub const RESIZED_SUFFIX: &str = "_resized";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
pub const VIDEO_EXTENSIONS: &[&str] = &["mov", "mp4"];

// Orientation thresholds on width / height.
pub const LANDSCAPE_MIN_RATIO: f64 = 1.5;
pub const PORTRAIT_MAX_RATIO: f64 = 1.0;

pub const LANDSCAPE_FOLDER: &str = "landscape_images";
pub const PORTRAIT_FOLDER: &str = "portrait_images";
pub const SQUARE_FOLDER: &str = "square_images";
pub const VIDEO_FOLDER: &str = "videos";

/// oxipng preset used when `--optimize` is on for PNG output.
pub const OXIPNG_PRESET: u8 = 4;

pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}";

/// Process exit code when a run finished but skipped at least one file.
pub const EXIT_PARTIAL: u8 = 2;
