//! Sorting a media tree into orientation and type folders.
//!
//! Images are bucketed by `width / height` against two fixed thresholds;
//! videos go to their own folder; every other file is ignored. Files are
//! copied, never moved, and keep their path relative to the source root.

use crate::batch::SkippedFile;
use crate::constants::{
    LANDSCAPE_FOLDER, LANDSCAPE_MIN_RATIO, PORTRAIT_FOLDER, PORTRAIT_MAX_RATIO, SQUARE_FOLDER,
    VIDEO_FOLDER,
};
use crate::error::{Result, ToolError};
use crate::formats::{is_image_file, is_video_file};
use crate::processing::{aspect_ratio, read_dimensions};
use crate::validation::{ensure_output_dir, is_within, validate_input_dir};
use crate::{verbose, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    /// `> 1.5` is landscape, `< 1.0` is portrait, the closed range between is square.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > LANDSCAPE_MIN_RATIO {
            Orientation::Landscape
        } else if ratio < PORTRAIT_MAX_RATIO {
            Orientation::Portrait
        } else {
            Orientation::Square
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Landscape,
    Portrait,
    Square,
    Video,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Landscape,
        Category::Portrait,
        Category::Square,
        Category::Video,
    ];

    pub fn folder_name(&self) -> &'static str {
        match self {
            Category::Landscape => LANDSCAPE_FOLDER,
            Category::Portrait => PORTRAIT_FOLDER,
            Category::Square => SQUARE_FOLDER,
            Category::Video => VIDEO_FOLDER,
        }
    }
}

impl From<Orientation> for Category {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Landscape => Category::Landscape,
            Orientation::Portrait => Category::Portrait,
            Orientation::Square => Category::Square,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.folder_name())
    }
}

/// Decides where a file belongs.
///
/// Returns `Ok(None)` for extensions the organizer ignores. Images are
/// classified from their header, so an unreadable image is an `Err` rather
/// than a guess.
pub fn classify_file(path: &Path) -> Result<Option<Category>> {
    if is_video_file(path) {
        return Ok(Some(Category::Video));
    }
    if !is_image_file(path) {
        return Ok(None);
    }

    let (width, height) = read_dimensions(path)?;
    let orientation = Orientation::from_ratio(aspect_ratio(width, height));
    Ok(Some(orientation.into()))
}

/// Counts files anywhere under `folder`, including symlinks to files. A
/// missing folder has none.
pub fn count_files(folder: &Path) -> Result<usize> {
    if !folder.exists() {
        return Ok(0);
    }
    let mut count = 0;
    for entry in WalkDir::new(folder) {
        if entry?.path().is_file() {
            count += 1;
        }
    }
    Ok(count)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCounts {
    pub landscape: usize,
    pub portrait: usize,
    pub square: usize,
    pub videos: usize,
}

impl CategoryCounts {
    fn record(&mut self, category: Category) {
        match category {
            Category::Landscape => self.landscape += 1,
            Category::Portrait => self.portrait += 1,
            Category::Square => self.square += 1,
            Category::Video => self.videos += 1,
        }
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Landscape => self.landscape,
            Category::Portrait => self.portrait,
            Category::Square => self.square,
            Category::Video => self.videos,
        }
    }

    pub fn total(&self) -> usize {
        self.landscape + self.portrait + self.square + self.videos
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrganizeReport {
    pub files_before: usize,
    pub files_after: usize,
    pub copied: CategoryCounts,
    pub skipped: Vec<SkippedFile>,
}

impl OrganizeReport {
    pub fn total_copied(&self) -> usize {
        self.copied.total()
    }
}

/// Copies every image and video under `source` into
/// `<destination>/<category folder>/<relative path>`.
///
/// The four category folders are created even when nothing lands in them.
/// Unreadable images and failed copies are reported in
/// [`OrganizeReport::skipped`] and the walk carries on. Category folders that
/// sit inside `source` are not walked, so organizing a folder into itself
/// copies each file once.
pub fn organize_media(source: &Path, destination: &Path) -> Result<OrganizeReport> {
    validate_input_dir(source)?;
    let files_before = count_files(source)?;

    for category in Category::ALL {
        ensure_output_dir(&destination.join(category.folder_name()))?;
    }

    let source_root = source.canonicalize()?;
    let destination_root = destination.canonicalize()?;
    let excluded: Vec<PathBuf> = Category::ALL
        .iter()
        .map(|category| destination_root.join(category.folder_name()))
        .filter(|folder| is_within(folder, &source_root))
        .collect();
    for folder in &excluded {
        verbose!("Not scanning {}, it is a destination folder", folder.display());
    }

    let mut report = OrganizeReport {
        files_before,
        ..Default::default()
    };

    let walker = WalkDir::new(&source_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !excluded.iter().any(|folder| e.path() == folder.as_path()));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(source_root.as_path()).to_path_buf();
                warn!("Cannot read {}: {}", path.display(), e);
                report.skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        if !entry.path().is_file() {
            continue;
        }

        let path = entry.path();
        match organize_file(path, &source_root, destination) {
            Ok(Some(category)) => report.copied.record(category),
            Ok(None) => {}
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                report.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report.files_after = count_files(destination)?;
    Ok(report)
}

fn organize_file(path: &Path, source_root: &Path, destination: &Path) -> Result<Option<Category>> {
    let Some(category) = classify_file(path)? else {
        return Ok(None);
    };

    let relative = path
        .strip_prefix(source_root)
        .map_err(|_| ToolError::InvalidFileName(path.to_path_buf()))?;
    let target = destination.join(category.folder_name()).join(relative);

    if let Some(parent) = target.parent() {
        ensure_output_dir(parent)?;
    }
    fs::copy(path, &target)?;
    verbose!("{} -> {}", relative.display(), category);

    Ok(Some(category))
}
