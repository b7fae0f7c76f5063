use crate::constants::{
    DEFAULT_COMPRESS_QUALITY, DEFAULT_RESIZE_QUALITY, MAX_QUALITY, MIN_QUALITY,
};
use clap::{Args, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

/// Console verbosity flags shared by every tool.
#[derive(Args, Debug, Clone, Copy)]
pub struct LogArgs {
    #[arg(short = 'q', long, help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print one line per processed file")]
    pub verbose: bool,
}

/// `--optimize` / `--no-optimize`; the last one on the command line wins.
#[derive(Args, Debug, Clone, Copy)]
pub struct OptimizeArgs {
    #[arg(
        long,
        overrides_with = "no_optimize",
        help = "Spend extra effort minimizing output size (default)",
        long_help = "Ask the encoder for a smaller file at the same quality. \
                     JPEG output gets Huffman tables tuned to the image. \
                     PNG output is recompressed losslessly with oxipng."
    )]
    optimize: bool,

    #[arg(long, overrides_with = "optimize", help = "Skip the extra optimization pass")]
    no_optimize: bool,
}

impl OptimizeArgs {
    pub fn enabled(&self) -> bool {
        self.optimize || !self.no_optimize
    }
}

/// Parses the process arguments into `T`.
///
/// Usage errors print clap's message and map to exit code 1, leaving 2 for
/// runs that skipped files. `--help` and `--version` map to 0.
pub fn parse_args<T: Parser>() -> Result<T, ExitCode> {
    T::try_parse().map_err(|e| {
        let _ = e.print();
        if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "compress",
    about = "Re-encode every JPEG/PNG in a directory at a given quality",
    long_about = "Reads each .jpg, .jpeg and .png directly inside INPUT_DIR, re-encodes it \
                  in its own format and writes <name>_compressed.<ext> into OUTPUT_DIR. \
                  Quality applies to JPEG only; PNG is lossless. Formats are decided by \
                  file extension, not by file contents.",
    version,
    after_help = "EXAMPLES:\n  \
    compress ./photos ./photos/compressed\n  \
    compress ./photos ./out --quality 70 --no-optimize"
)]
pub struct CompressArgs {
    #[arg(help = "Directory containing the images")]
    pub input_dir: PathBuf,

    #[arg(help = "Directory for compressed copies (created if missing)")]
    pub output_dir: PathBuf,

    #[arg(
        short = 'Q',
        long,
        default_value_t = DEFAULT_COMPRESS_QUALITY,
        value_parser = clap::value_parser!(u8).range(MIN_QUALITY as i64..=MAX_QUALITY as i64),
        help = "JPEG quality (1-100)"
    )]
    pub quality: u8,

    #[command(flatten)]
    pub optimize: OptimizeArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "resize",
    about = "Scale every JPEG/PNG in a directory to fit a box, keeping aspect ratio",
    long_about = "Each image directly inside INPUT_DIR is scaled so it touches one side of \
                  the WIDTH x HEIGHT box and fits inside the other, then written as \
                  <name>_resized.<ext> into OUTPUT_DIR. Images smaller than the box are \
                  scaled up. Resampling uses a Lanczos3 filter.",
    version,
    after_help = "EXAMPLES:\n  \
    resize ./photos ./thumbs --width 800 --height 600\n  \
    resize ./photos ./banners -w 1518 -H 628 --quality 90"
)]
pub struct ResizeArgs {
    #[arg(help = "Directory containing the images")]
    pub input_dir: PathBuf,

    #[arg(help = "Directory for resized copies (created if missing)")]
    pub output_dir: PathBuf,

    #[arg(
        short = 'w',
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Bounding box width in pixels"
    )]
    pub width: u32,

    #[arg(
        short = 'H',
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Bounding box height in pixels"
    )]
    pub height: u32,

    #[arg(
        short = 'Q',
        long,
        default_value_t = DEFAULT_RESIZE_QUALITY,
        value_parser = clap::value_parser!(u8).range(MIN_QUALITY as i64..=MAX_QUALITY as i64),
        help = "JPEG quality (1-100)"
    )]
    pub quality: u8,

    #[command(flatten)]
    pub optimize: OptimizeArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "organize",
    about = "Organize images and videos by orientation and type",
    long_about = "Walks SOURCE_DIR recursively and copies images into landscape_images \
                  (ratio > 1.5), portrait_images (ratio < 1.0) or square_images, and \
                  .mov/.mp4 files into videos, all under DESTINATION_DIR. Relative paths \
                  are preserved and sources are left untouched.",
    version
)]
pub struct OrganizeArgs {
    #[arg(help = "Source folder containing images and videos")]
    pub source_dir: PathBuf,

    #[arg(help = "Destination folder for organized files")]
    pub destination_dir: PathBuf,

    #[command(flatten)]
    pub log: LogArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions_are_valid() {
        CompressArgs::command().debug_assert();
        ResizeArgs::command().debug_assert();
        OrganizeArgs::command().debug_assert();
    }

    #[test]
    fn test_compress_defaults() {
        let args = CompressArgs::try_parse_from(["compress", "in", "out"]).unwrap();
        assert_eq!(args.input_dir, PathBuf::from("in"));
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert_eq!(args.quality, 50);
        assert!(args.optimize.enabled());
        assert!(!args.log.quiet);
    }

    #[test]
    fn test_optimize_last_flag_wins() {
        let args =
            CompressArgs::try_parse_from(["compress", "in", "out", "--no-optimize"]).unwrap();
        assert!(!args.optimize.enabled());

        let args = CompressArgs::try_parse_from([
            "compress",
            "in",
            "out",
            "--no-optimize",
            "--optimize",
        ])
        .unwrap();
        assert!(args.optimize.enabled());
    }

    #[test]
    fn test_quality_out_of_range_rejected() {
        assert!(CompressArgs::try_parse_from(["compress", "in", "out", "--quality", "0"]).is_err());
        assert!(
            CompressArgs::try_parse_from(["compress", "in", "out", "--quality", "101"]).is_err()
        );
    }

    #[test]
    fn test_resize_requires_dimensions() {
        assert!(ResizeArgs::try_parse_from(["resize", "in", "out"]).is_err());
        assert!(ResizeArgs::try_parse_from(["resize", "in", "out", "--width", "10"]).is_err());
        assert!(ResizeArgs::try_parse_from([
            "resize", "in", "out", "--width", "0", "--height", "10"
        ])
        .is_err());

        let args = ResizeArgs::try_parse_from([
            "resize", "in", "out", "-w", "800", "-H", "600",
        ])
        .unwrap();
        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.quality, 85);
        assert!(args.optimize.enabled());
    }

    #[test]
    fn test_organize_positional_only() {
        let args = OrganizeArgs::try_parse_from(["organize", "src", "dst", "-v"]).unwrap();
        assert_eq!(args.source_dir, PathBuf::from("src"));
        assert_eq!(args.destination_dir, PathBuf::from("dst"));
        assert!(args.log.verbose);
        assert!(OrganizeArgs::try_parse_from(["organize", "src"]).is_err());
    }
}
