use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{Rgb, RgbImage};
use img_press::transcode::{transcode, ImageTask, TranscodeOptions};
use img_press::utils::format_size;
use std::path::PathBuf;
use tempfile::TempDir;

fn create_test_image(width: u32, height: u32) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.jpg");

    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save(&test_file).unwrap();

    (test_file, temp_dir)
}

fn bench_format_size(c: &mut Criterion) {
    c.bench_function("format_size", |b| {
        b.iter(|| format_size(black_box(123_456_789)))
    });
}

fn bench_options_creation(c: &mut Criterion) {
    c.bench_function("transcode_options_creation", |b| {
        b.iter(|| TranscodeOptions::new(black_box(85)))
    });
}

fn bench_transcode_by_quality(c: &mut Criterion) {
    let (test_file, _input_dir) = create_test_image(800, 600);
    let output_dir = TempDir::new().unwrap();

    let mut group = c.benchmark_group("transcode_quality");
    for quality in [30u8, 60, 85, 95] {
        let task = ImageTask::new(
            test_file.clone(),
            output_dir.path().to_path_buf(),
            quality,
        );
        group.bench_with_input(BenchmarkId::new("quality", quality), &task, |b, task| {
            b.iter(|| transcode(black_box(task)))
        });
    }
    group.finish();
}

fn bench_transcode_by_size(c: &mut Criterion) {
    let output_dir = TempDir::new().unwrap();

    let mut group = c.benchmark_group("transcode_size");
    for (width, height) in [(320, 240), (800, 600), (1920, 1080)] {
        let (test_file, _input_dir) = create_test_image(width, height);
        let task = ImageTask::new(test_file, output_dir.path().to_path_buf(), 85);
        group.bench_with_input(
            BenchmarkId::new("dimensions", format!("{}x{}", width, height)),
            &task,
            |b, task| b.iter(|| transcode(black_box(task))),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_format_size,
    bench_options_creation,
    bench_transcode_by_quality,
    bench_transcode_by_size
);
criterion_main!(benches);
