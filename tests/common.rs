use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::path::Path;

pub fn write_rgb_jpeg(path: &Path) {
    let img = RgbImage::from_fn(32, 32, |x, y| Rgb([(x * 8) as u8, (y * 8) as u8, 128]));
    img.save(path).unwrap();
}

pub fn write_rgba_png(path: &Path) {
    let img = RgbaImage::from_fn(16, 16, |x, y| Rgba([220, 30, 30, (x * y) as u8]));
    img.save(path).unwrap();
}

/// Fills `dir` with the canonical fixture set: one alpha PNG, one JPEG and
/// one non-image file. Returns the number of eligible files.
pub fn populate_input_dir(dir: &Path) -> usize {
    write_rgba_png(&dir.join("a.png"));
    write_rgb_jpeg(&dir.join("b.jpg"));
    fs::write(dir.join("notes.txt"), b"not an image").unwrap();
    2
}
