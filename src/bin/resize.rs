use anyhow::{Context, Result};
use img_batch::cli::{parse_args, ResizeArgs};
use img_batch::utils::print_batch_summary;
use img_batch::{
    error, info, logger, resize_images_in_directory, success, BatchReport, EncodeOptions,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match parse_args::<ResizeArgs>() {
        Ok(args) => args,
        Err(code) => return code,
    };
    logger::init(args.log.quiet, args.log.verbose);

    match run(&args) {
        Ok(report) => {
            print_batch_summary("Resize", &report);
            if report.is_clean() {
                success!("Image resizing with fixed resolution successful!");
                ExitCode::SUCCESS
            } else {
                ExitCode::from(img_batch::EXIT_PARTIAL)
            }
        }
        Err(e) => {
            error!("Error during image resizing: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &ResizeArgs) -> Result<BatchReport> {
    let options = EncodeOptions::new(args.quality, args.optimize.enabled())?;

    info!(
        "🔄 Resizing images in {:?} to fit {}x{}",
        args.input_dir, args.width, args.height
    );
    info!("📁 Output: {:?}", args.output_dir);

    resize_images_in_directory(
        &args.input_dir,
        &args.output_dir,
        args.width,
        args.height,
        &options,
    )
    .with_context(|| format!("resizing {}", args.input_dir.display()))
}
