use crate::constants::{MAX_QUALITY, MIN_QUALITY, OXIPNG_PRESET};
use crate::error::{Result, ToolError};
use crate::formats::OutputFormat;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use jpeg_encoder::{ColorType, Encoder as JpegEncoder};
use oxipng::Options;
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub quality: u8,
    pub optimize: bool,
}

impl EncodeOptions {
    pub fn new(quality: u8, optimize: bool) -> Result<Self> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(ToolError::InvalidQuality(quality));
        }
        Ok(Self { quality, optimize })
    }
}

/// Decodes an image, picking the decoder from the path's extension.
///
/// # Errors
/// * `ToolError::InputNotFound` if nothing exists at `path`
/// * `ToolError::Image` if the bytes are not a valid image of that format
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(ToolError::InputNotFound(path.to_path_buf()));
    }
    Ok(ImageReader::open(path)?.decode()?)
}

/// Reads width and height from the image header without decoding pixels.
pub fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    if !path.exists() {
        return Err(ToolError::InputNotFound(path.to_path_buf()));
    }
    Ok(ImageReader::open(path)?.into_dimensions()?)
}

pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    width as f64 / height as f64
}

/// Computes the largest size with the source's aspect ratio that fits in
/// `box_width` x `box_height`, touching exactly one bound.
///
/// A source relatively wider than the box is pinned to the box width, anything
/// else to the box height. The free axis is floored so it never overflows the
/// box. Smaller sources are scaled up.
///
/// # Example
/// ```
/// use img_batch::fit_within;
///
/// assert_eq!(fit_within(2000, 500, 800, 600), (800, 200));
/// assert_eq!(fit_within(500, 2000, 800, 600), (150, 600));
/// ```
pub fn fit_within(src_width: u32, src_height: u32, box_width: u32, box_height: u32) -> (u32, u32) {
    let ratio = aspect_ratio(src_width, src_height);
    let box_ratio = aspect_ratio(box_width, box_height);

    if ratio > box_ratio {
        let height = (box_width as f64 / ratio).floor() as u32;
        (box_width, height.max(1))
    } else {
        let width = (box_height as f64 * ratio).floor() as u32;
        (width.max(1), box_height)
    }
}

/// Resamples `img` with Lanczos3 to the size chosen by [`fit_within`].
pub fn resize_to_fit(img: &DynamicImage, box_width: u32, box_height: u32) -> Result<DynamicImage> {
    if box_width == 0 || box_height == 0 {
        return Err(ToolError::InvalidDimensions(box_width, box_height));
    }
    let (width, height) = fit_within(img.width(), img.height(), box_width, box_height);
    Ok(img.resize_exact(width, height, FilterType::Lanczos3))
}

/// Encodes `img` into an in-memory buffer.
///
/// JPEG uses `options.quality`; sources with alpha or 16-bit channels are
/// flattened to 8-bit RGB first. With `options.optimize` the JPEG encoder
/// builds Huffman tables from the image instead of using the standard ones.
/// PNG ignores quality and, when `options.optimize` is set, is recompressed
/// losslessly by oxipng.
pub fn encode_image(
    img: &DynamicImage,
    format: OutputFormat,
    options: &EncodeOptions,
) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();

    match format {
        OutputFormat::Jpeg => {
            let img = jpeg_compatible(img);
            let (width, height) = jpeg_dimensions(&img)?;
            let color_type = match *img {
                DynamicImage::ImageLuma8(_) => ColorType::Luma,
                _ => ColorType::Rgb,
            };

            let mut encoder = JpegEncoder::new(&mut buffer, options.quality);
            encoder.set_optimized_huffman_tables(options.optimize);
            encoder.encode(img.as_bytes(), width, height, color_type)?;
        }
        OutputFormat::Png => {
            let encoder = if options.optimize {
                PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, PngFilter::Adaptive)
            } else {
                PngEncoder::new(&mut buffer)
            };
            img.write_with_encoder(encoder)?;

            if options.optimize {
                let oxipng_options = Options::from_preset(OXIPNG_PRESET);
                buffer = oxipng::optimize_from_memory(&buffer, &oxipng_options)
                    .map_err(|e| ToolError::PngOptimization(e.to_string()))?;
            }
        }
    }

    Ok(buffer)
}

// JPEG frame headers store each side in 16 bits.
fn jpeg_dimensions(img: &DynamicImage) -> Result<(u16, u16)> {
    match (u16::try_from(img.width()), u16::try_from(img.height())) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(ToolError::ImageTooLarge(img.width(), img.height())),
    }
}

fn jpeg_compatible(img: &DynamicImage) -> Cow<'_, DynamicImage> {
    match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => Cow::Borrowed(img),
        _ => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
    }
}

/// Writes `bytes` to `path` via a sibling temp file and an atomic rename.
///
/// An existing file at `path` is replaced. Returns the number of bytes written.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<u64> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.flush()?;
    temp.persist(path).map_err(|e| ToolError::Io(e.error))?;

    Ok(bytes.len() as u64)
}
