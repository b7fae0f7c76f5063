use anyhow::{Context, Result};
use img_batch::cli::{parse_args, CompressArgs};
use img_batch::utils::print_batch_summary;
use img_batch::{
    compress_images_in_directory, error, info, logger, success, BatchReport, EncodeOptions,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match parse_args::<CompressArgs>() {
        Ok(args) => args,
        Err(code) => return code,
    };
    logger::init(args.log.quiet, args.log.verbose);

    match run(&args) {
        Ok(report) => {
            print_batch_summary("Compression", &report);
            if report.is_clean() {
                success!("Image compression successful!");
                ExitCode::SUCCESS
            } else {
                ExitCode::from(img_batch::EXIT_PARTIAL)
            }
        }
        Err(e) => {
            error!("Error during image compression: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CompressArgs) -> Result<BatchReport> {
    let options = EncodeOptions::new(args.quality, args.optimize.enabled())?;

    info!("🗜️  Compressing images in {:?}", args.input_dir);
    info!("📁 Output: {:?}", args.output_dir);

    compress_images_in_directory(&args.input_dir, &args.output_dir, &options)
        .with_context(|| format!("compressing {}", args.input_dir.display()))
}
