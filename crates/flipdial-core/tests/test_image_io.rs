mod common;

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use flipdial_core::error::FlipdialError;
use flipdial_core::io::image_io::{
    format_for_path, load_image, save_image, OPEN_FILTERS, SAVE_FILTERS,
};

use common::{gradient_image, write_test_png};

#[test]
fn test_load_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_test_png(&dir, "in.png", 5, 3);
    let img = load_image(&path).unwrap();
    assert_eq!(img, gradient_image(5, 3));
}

#[test]
fn test_load_sniffs_content_over_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("actually_png.jpg");
    gradient_image(4, 4)
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    assert_eq!(load_image(&path).unwrap().dimensions(), (4, 4));
}

#[test]
fn test_load_drops_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alpha.png");
    RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]))
        .save(&path)
        .unwrap();
    let img = load_image(&path).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 255]);
}

#[test]
fn test_load_empty_path() {
    assert!(matches!(load_image(Path::new("")), Err(FlipdialError::EmptyPath)));
}

#[test]
fn test_load_undecodable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noise.bmp");
    std::fs::write(&path, [0u8, 1, 2, 3, 4, 5]).unwrap();
    assert!(load_image(&path).is_err());
}

#[test]
fn test_save_jpeg_strips_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.jpg");
    let img = RgbaImage::from_pixel(8, 8, Rgba([120, 120, 120, 0]));
    save_image(&img, &path).unwrap();

    let reloaded = image::open(&path).unwrap();
    assert_eq!(reloaded.color(), image::ColorType::Rgb8);
    assert_eq!((reloaded.width(), reloaded.height()), (8, 8));
}

#[test]
fn test_save_format_follows_extension() {
    let dir = tempfile::tempdir().unwrap();
    for (name, format) in [
        ("a.png", ImageFormat::Png),
        ("b.bmp", ImageFormat::Bmp),
        ("c.JPG", ImageFormat::Jpeg),
    ] {
        let path = dir.path().join(name);
        assert_eq!(format_for_path(&path).unwrap(), format);
        save_image(&gradient_image(3, 3), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), format);
    }
}

#[test]
fn test_save_without_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_extension");
    assert!(matches!(
        save_image(&gradient_image(2, 2), &path),
        Err(FlipdialError::UnknownFormat(_))
    ));
}

#[test]
fn test_dialog_filters() {
    assert_eq!(OPEN_FILTERS[0].extensions, &["png", "jpg", "jpeg", "bmp", "gif"]);
    assert_eq!(OPEN_FILTERS[1].extensions, &["*"]);
    let save: Vec<_> = SAVE_FILTERS.iter().flat_map(|f| f.extensions.iter().copied()).collect();
    assert_eq!(save, ["png", "jpg", "bmp"]);
}
