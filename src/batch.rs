use crate::constants::{COMPRESSED_SUFFIX, PROGRESS_BAR_TEMPLATE, RESIZED_SUFFIX};
use crate::error::{Result, ToolError};
use crate::formats::{is_image_file, OutputFormat};
use crate::processing::{encode_image, load_image, resize_to_fit, write_output, EncodeOptions};
use crate::validation::{ensure_output_dir, validate_input_dir};
use crate::{verbose, warn};
use image::DynamicImage;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One input that made it to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub original_size: u64,
    pub output_size: u64,
    pub dimensions: (u32, u32),
}

/// One input that was left out of the run, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: Vec<ProcessedFile>,
    pub skipped: Vec<SkippedFile>,
}

impl BatchReport {
    pub fn total_original_size(&self) -> u64 {
        self.processed.iter().map(|f| f.original_size).sum()
    }

    pub fn total_output_size(&self) -> u64 {
        self.processed.iter().map(|f| f.output_size).sum()
    }

    /// No file was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Lists regular files directly inside `input_dir` with an image extension,
/// ordered by file name. Subdirectories are not entered.
pub fn collect_image_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    validate_input_dir(input_dir)?;

    let mut image_files = Vec::new();
    for entry in WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.path().is_file() && is_image_file(entry.path()) {
            image_files.push(entry.into_path());
        }
    }

    Ok(image_files)
}

/// Builds `<output_dir>/<stem><suffix>.<jpg|png>` for an input image.
pub fn generate_output_path(input_path: &Path, output_dir: &Path, suffix: &str) -> Result<PathBuf> {
    let format = OutputFormat::from_path(input_path)
        .ok_or_else(|| ToolError::UnsupportedFormat(input_path.display().to_string()))?;
    let file_stem = input_path
        .file_stem()
        .ok_or_else(|| ToolError::InvalidFileName(input_path.to_path_buf()))?;

    let output_filename = format!(
        "{}{}.{}",
        file_stem.to_string_lossy(),
        suffix,
        format.extension()
    );
    Ok(output_dir.join(output_filename))
}

/// Re-encodes every top-level image in `input_dir` into `output_dir` with the
/// `_compressed` suffix. Pixel dimensions are unchanged.
pub fn compress_images_in_directory(
    input_dir: &Path,
    output_dir: &Path,
    options: &EncodeOptions,
) -> Result<BatchReport> {
    run_batch(input_dir, output_dir, COMPRESSED_SUFFIX, options, |img| Ok(img))
}

/// Scales every top-level image in `input_dir` to fit `width` x `height`,
/// preserving aspect ratio, and writes it with the `_resized` suffix.
pub fn resize_images_in_directory(
    input_dir: &Path,
    output_dir: &Path,
    width: u32,
    height: u32,
    options: &EncodeOptions,
) -> Result<BatchReport> {
    if width == 0 || height == 0 {
        return Err(ToolError::InvalidDimensions(width, height));
    }
    run_batch(input_dir, output_dir, RESIZED_SUFFIX, options, |img| {
        resize_to_fit(&img, width, height)
    })
}

/// Shared driver: the input is validated and the output created before any
/// file is touched, then each image goes through load -> transform -> encode
/// -> write on its own. A failing file is recorded and the loop moves on.
fn run_batch<F>(
    input_dir: &Path,
    output_dir: &Path,
    suffix: &str,
    options: &EncodeOptions,
    transform: F,
) -> Result<BatchReport>
where
    F: Fn(DynamicImage) -> Result<DynamicImage>,
{
    let image_files = collect_image_files(input_dir)?;
    ensure_output_dir(output_dir)?;

    let progress = create_progress_bar(image_files.len() as u64);
    let mut report = BatchReport::default();

    for input_path in image_files {
        progress.set_message(display_name(&input_path));

        match process_single_image(&input_path, output_dir, suffix, options, &transform) {
            Ok(processed) => {
                verbose!(
                    "{} -> {} ({}x{})",
                    input_path.display(),
                    processed.output.display(),
                    processed.dimensions.0,
                    processed.dimensions.1
                );
                report.processed.push(processed);
            }
            Err(e) => {
                progress.suspend(|| {
                    warn!("Skipping {}: {}", input_path.display(), e);
                });
                report.skipped.push(SkippedFile {
                    path: input_path,
                    reason: e.to_string(),
                });
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(report)
}

fn process_single_image<F>(
    input_path: &Path,
    output_dir: &Path,
    suffix: &str,
    options: &EncodeOptions,
    transform: &F,
) -> Result<ProcessedFile>
where
    F: Fn(DynamicImage) -> Result<DynamicImage>,
{
    let output_path = generate_output_path(input_path, output_dir, suffix)?;
    let format = OutputFormat::from_path(input_path)
        .ok_or_else(|| ToolError::UnsupportedFormat(input_path.display().to_string()))?;

    let original_size = std::fs::metadata(input_path)?.len();
    let img = transform(load_image(input_path)?)?;
    let bytes = encode_image(&img, format, options)?;
    let output_size = write_output(&output_path, &bytes)?;

    Ok(ProcessedFile {
        input: input_path.to_path_buf(),
        output: output_path,
        original_size,
        output_size,
        dimensions: (img.width(), img.height()),
    })
}

fn create_progress_bar(len: u64) -> ProgressBar {
    if crate::logger::is_quiet() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
