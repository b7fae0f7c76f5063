pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod organize;
pub mod processing;
pub mod utils;
pub mod validation;

pub use batch::{
    collect_image_files, compress_images_in_directory, generate_output_path,
    resize_images_in_directory, BatchReport, ProcessedFile, SkippedFile,
};
pub use constants::EXIT_PARTIAL;
pub use error::{Result, ToolError};
pub use formats::{is_image_file, is_video_file, OutputFormat};
pub use organize::{
    classify_file, count_files, organize_media, Category, Orientation, OrganizeReport,
};
pub use processing::{
    aspect_ratio, encode_image, fit_within, load_image, read_dimensions, resize_to_fit,
    write_output, EncodeOptions,
};
