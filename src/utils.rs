//! Formatting and console summaries shared by the three binaries.

use crate::batch::{BatchReport, SkippedFile};
use crate::info;
use crate::organize::{Category, OrganizeReport};

/// Format file size in human-readable format
///
/// # Arguments
/// * `bytes` - Size in bytes
///
/// # Returns
/// * Human-readable size string (e.g., "1.2 MB", "512 B")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Percentage saved going from `original_size` to `output_size`.
/// Negative when the output grew.
pub fn calculate_compression_ratio(original_size: u64, output_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - output_size as f64) / original_size as f64) * 100.0
}

/// Prints the end-of-run summary for the compress and resize tools.
pub fn print_batch_summary(title: &str, report: &BatchReport) {
    let before = report.total_original_size();
    let after = report.total_output_size();

    info!("\n📊 {} Summary:", title);
    info!("  📁 Files written: {}", report.processed.len());
    info!("  📊 Total original size: {}", format_file_size(before));
    info!("  📈 Total output size: {}", format_file_size(after));
    if before > 0 {
        let ratio = calculate_compression_ratio(before, after);
        if ratio >= 0.0 {
            info!("  🎯 Reduced total size by {:.1}%", ratio);
        } else {
            info!("  🎯 Total size increased by {:.1}%", ratio.abs());
        }
    }
    print_skipped(&report.skipped);
}

/// Prints the before/after counts for the organize tool.
pub fn print_organize_summary(report: &OrganizeReport) {
    info!("📊 Total files before organizing: {}", report.files_before);
    info!("📦 Total files copied to new folders: {}", report.total_copied());
    for category in Category::ALL {
        info!("  📁 {}: {}", category, report.copied.get(category));
    }
    info!("📊 Total files after organizing: {}", report.files_after);
    print_skipped(&report.skipped);
}

fn print_skipped(skipped: &[SkippedFile]) {
    if skipped.is_empty() {
        return;
    }
    info!("  ⚠️  Skipped files: {}", skipped.len());
    for file in skipped {
        info!("    - {}: {}", file.path.display(), file.reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1.0 GB");
    }

    #[test]
    fn test_calculate_compression_ratio() {
        assert_eq!(calculate_compression_ratio(1000, 800), 20.0);
        assert_eq!(calculate_compression_ratio(1000, 1200), -20.0);
        assert_eq!(calculate_compression_ratio(1000, 1000), 0.0);
        assert_eq!(calculate_compression_ratio(0, 500), 0.0);
    }
}
