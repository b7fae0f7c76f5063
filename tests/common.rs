#![allow(dead_code)]

use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes a noisy RGB image; the encoder is chosen from `path`'s extension.
pub fn write_test_image(path: &Path, width: u32, height: u32) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x.wrapping_mul(31) % 256) as u8,
            (y.wrapping_mul(17) % 256) as u8,
            ((x ^ y) % 256) as u8,
        ])
    });
    img.save(path).unwrap();
    path.to_path_buf()
}

/// A directory with one JPEG, one PNG, one text file and a nested JPEG.
pub fn create_image_directory(root: &Path) -> PathBuf {
    let input = root.join("images");
    write_test_image(&input.join("test_image.jpg"), 800, 600);
    write_test_image(&input.join("test_image.png"), 600, 800);
    fs::write(input.join("notes.txt"), b"not an image").unwrap();
    write_test_image(&input.join("subdir/nested.jpg"), 100, 100);
    input
}

/// A tree mixing landscape, portrait and square images with videos and noise.
pub fn create_media_tree(root: &Path) -> PathBuf {
    let source = root.join("source");
    write_test_image(&source.join("landscape.jpg"), 1600, 800);
    write_test_image(&source.join("portrait.jpg"), 600, 1200);
    write_test_image(&source.join("square.png"), 1000, 1000);
    write_test_image(&source.join("album/2023/wide.PNG"), 400, 100);
    fs::write(source.join("video.mp4"), b"fake mp4").unwrap();
    fs::write(source.join("album/clip.MOV"), b"fake mov").unwrap();
    fs::write(source.join("document.pdf"), b"ignored").unwrap();
    source
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}
