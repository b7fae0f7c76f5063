use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{DynamicImage, Rgb, RgbImage};
use img_batch::{encode_image, fit_within, resize_to_fit, EncodeOptions, OutputFormat};

fn create_test_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }))
}

fn bench_fit_within(c: &mut Criterion) {
    c.bench_function("fit_within", |b| {
        b.iter(|| fit_within(black_box(4032), black_box(3024), black_box(1518), black_box(628)))
    });
}

fn bench_resize_to_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_to_fit");

    for size in [Small, Medium, Large].iter() {
        let (width, height) = match size {
            Small => (800, 600),
            Medium => (1920, 1080),
            Large => (3840, 2160),
        };
        let img = create_test_image(width, height);

        group.bench_with_input(
            BenchmarkId::new("lanczos3", format!("{}x{}", width, height)),
            &img,
            |b, img| b.iter(|| resize_to_fit(black_box(img), 800, 600)),
        );
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let img = create_test_image(1280, 720);

    for (format, optimize) in [
        (OutputFormat::Jpeg, true),
        (OutputFormat::Png, false),
        (OutputFormat::Png, true),
    ] {
        let options = EncodeOptions::new(50, optimize).unwrap();
        group.bench_function(format!("{}_optimize_{}", format, optimize), |b| {
            b.iter(|| encode_image(black_box(&img), format, &options))
        });
    }

    group.finish();
}

enum ImageSize {
    Small,
    Medium,
    Large,
}

use ImageSize::*;

criterion_group!(benches, bench_fit_within, bench_resize_to_fit, bench_encode);
criterion_main!(benches);
