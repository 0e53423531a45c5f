#![allow(dead_code)]

use image::{DynamicImage, Rgba, RgbaImage};

/// Opaque image where every pixel encodes its own position:
/// red = x, green = y, blue = x ^ y.
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, (x ^ y) as u8, 255])
    })
}

pub fn gradient_dynamic(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(gradient_image(width, height))
}

/// Write an opaque gradient PNG into `dir` and return its path.
pub fn write_test_png(dir: &tempfile::TempDir, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.path().join(name);
    gradient_image(width, height)
        .save(&path)
        .expect("write test png");
    path
}
