use anyhow::{Context, Result};
use img_batch::cli::{parse_args, OrganizeArgs};
use img_batch::utils::print_organize_summary;
use img_batch::{error, info, logger, organize_media, success, OrganizeReport};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match parse_args::<OrganizeArgs>() {
        Ok(args) => args,
        Err(code) => return code,
    };
    logger::init(args.log.quiet, args.log.verbose);

    match run(&args) {
        Ok(report) => {
            print_organize_summary(&report);
            if report.skipped.is_empty() {
                success!("Images and videos organized successfully!");
                ExitCode::SUCCESS
            } else {
                ExitCode::from(img_batch::EXIT_PARTIAL)
            }
        }
        Err(e) => {
            error!("Error while organizing images and videos: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &OrganizeArgs) -> Result<OrganizeReport> {
    info!(
        "🗂️  Organizing {:?} into {:?}",
        args.source_dir, args.destination_dir
    );

    organize_media(&args.source_dir, &args.destination_dir)
        .with_context(|| format!("organizing {}", args.source_dir.display()))
}
