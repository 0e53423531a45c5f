mod common;

use approx::assert_abs_diff_eq;
use image::{Rgba, RgbaImage};

use flipdial_core::sample::{gray, pointer_sample, status_line};
use flipdial_core::transform::{mirror, rotate, zoom, MirrorFlags, RotationAngle, ZoomStep};

use common::gradient_image;

// ---------------------------------------------------------------------------
// Mirror
// ---------------------------------------------------------------------------

#[test]
fn test_mirror_no_flags_is_identity() {
    let img = gradient_image(7, 5);
    let out = mirror(&img, MirrorFlags::NONE);
    assert_eq!(out.as_raw(), img.as_raw());
}

#[test]
fn test_mirror_horizontal_moves_columns() {
    let img = gradient_image(7, 5);
    let out = mirror(&img, MirrorFlags::new(true, false));
    assert_eq!(out.dimensions(), (7, 5));
    assert_eq!(out.get_pixel(0, 2), img.get_pixel(6, 2));
    assert_eq!(out.get_pixel(6, 4), img.get_pixel(0, 4));
}

#[test]
fn test_mirror_vertical_moves_rows() {
    let img = gradient_image(7, 5);
    let out = mirror(&img, MirrorFlags::new(false, true));
    assert_eq!(out.get_pixel(3, 0), img.get_pixel(3, 4));
}

#[test]
fn test_mirror_both_axes() {
    let img = gradient_image(7, 5);
    let out = mirror(&img, MirrorFlags::new(true, true));
    assert_eq!(out.get_pixel(0, 0), img.get_pixel(6, 4));
    assert_eq!(out.get_pixel(2, 1), img.get_pixel(4, 3));
}

#[test]
fn test_mirror_twice_restores() {
    let img = gradient_image(9, 4);
    let flags = MirrorFlags::new(true, false);
    let twice = mirror(&mirror(&img, flags), flags);
    assert_eq!(twice.as_raw(), img.as_raw());
}

#[test]
fn test_mirror_flags_display() {
    assert_eq!(MirrorFlags::NONE.to_string(), "None");
    assert_eq!(MirrorFlags::new(true, true).to_string(), "Horizontal + Vertical");
}

// ---------------------------------------------------------------------------
// Rotate
// ---------------------------------------------------------------------------

#[test]
fn test_rotate_zero_is_identity() {
    let img = gradient_image(11, 6);
    let out = rotate(&img, RotationAngle::ZERO);
    assert_eq!(out.as_raw(), img.as_raw());
}

#[test]
fn test_rotate_full_turn_is_identity() {
    let img = gradient_image(11, 6);
    let out = rotate(&img, RotationAngle::new(360));
    assert_eq!(out.as_raw(), img.as_raw());
}

#[test]
fn test_rotate_90_is_clockwise() {
    let img = gradient_image(4, 3);
    let out = rotate(&img, RotationAngle::new(90));
    assert_eq!(out.dimensions(), (3, 4));
    // Top-left of the source ends up at the top-right.
    assert_eq!(out.get_pixel(2, 0), img.get_pixel(0, 0));
    // Bottom-left of the source ends up at the top-left.
    assert_eq!(out.get_pixel(0, 0), img.get_pixel(0, 2));
}

#[test]
fn test_rotate_180_matches_double_mirror() {
    let img = gradient_image(5, 8);
    let rotated = rotate(&img, RotationAngle::new(180));
    let mirrored = mirror(&img, MirrorFlags::new(true, true));
    assert_eq!(rotated.as_raw(), mirrored.as_raw());
}

#[test]
fn test_rotate_45_expands_canvas() {
    let img = RgbaImage::from_pixel(20, 10, Rgba([50, 100, 150, 255]));
    let out = rotate(&img, RotationAngle::new(45));
    // (20 + 10) * cos(45) = 21.2
    assert_eq!(out.dimensions(), (22, 22));

    // Corners fall outside the rotated source.
    assert_eq!(out.get_pixel(0, 0).0[3], 0);
    assert_eq!(out.get_pixel(21, 21).0[3], 0);

    // The center keeps the source color.
    assert_eq!(*out.get_pixel(11, 11), Rgba([50, 100, 150, 255]));
}

#[test]
fn test_rotate_preserves_mean_color_of_flat_image() {
    let img = RgbaImage::from_pixel(32, 32, Rgba([200, 10, 90, 255]));
    let out = rotate(&img, RotationAngle::new(30));
    for p in out.pixels().filter(|p| p.0[3] > 0) {
        assert_abs_diff_eq!(p.0[0] as f32, 200.0, epsilon = 1.0);
        assert_abs_diff_eq!(p.0[1] as f32, 10.0, epsilon = 1.0);
        assert_abs_diff_eq!(p.0[2] as f32, 90.0, epsilon = 1.0);
    }
}

#[test]
fn test_rotate_large_image_uses_same_geometry() {
    // Big enough to take the parallel path.
    let img = RgbaImage::from_pixel(300, 300, Rgba([1, 2, 3, 255]));
    let out = rotate(&img, RotationAngle::new(10));
    let expected = (300.0f64 * (10f64.to_radians().cos() + 10f64.to_radians().sin())).ceil() as u32;
    assert_eq!(out.dimensions(), (expected, expected));
    assert_eq!(*out.get_pixel(expected / 2, expected / 2), Rgba([1, 2, 3, 255]));
}

#[test]
fn test_angle_display() {
    assert_eq!(RotationAngle::new(45).to_string(), "45°");
}

// ---------------------------------------------------------------------------
// Zoom
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_in_dimensions() {
    let img = gradient_image(600, 400);
    let view = zoom(&img, ZoomStep::In.factor());
    assert_eq!(view.image.dimensions(), (750, 500));
    assert_eq!(view.title(), "Zoom x1.25");
}

#[test]
fn test_zoom_out_dimensions() {
    let img = gradient_image(600, 400);
    let view = zoom(&img, ZoomStep::Out.factor());
    assert_eq!(view.image.dimensions(), (480, 320));
    assert_eq!(view.title(), "Zoom x0.80");
}

#[test]
fn test_zoom_window_size_is_capped() {
    let big = zoom(&gradient_image(1000, 1000), 1.25);
    assert_eq!(big.window_size(), (900, 700));

    let small = zoom(&gradient_image(100, 50), 1.25);
    assert_eq!(small.image.dimensions(), (125, 63));
    assert_eq!(small.window_size(), (165, 143));
}

#[test]
fn test_zoom_tiny_image_floors_at_one_pixel() {
    let img = gradient_image(1, 1);
    let view = zoom(&img, 0.8);
    assert_eq!(view.image.dimensions(), (1, 1));
}

// ---------------------------------------------------------------------------
// Pointer sampling
// ---------------------------------------------------------------------------

#[test]
fn test_pointer_sample_out_of_bounds() {
    let img = gradient_image(10, 5);
    assert_eq!(pointer_sample(&img, -1, 0), None);
    assert_eq!(pointer_sample(&img, 0, -1), None);
    assert_eq!(pointer_sample(&img, 10, 0), None);
    assert_eq!(pointer_sample(&img, 0, 5), None);
    assert_eq!(status_line(pointer_sample(&img, 10, 5)), "x: -, y: -, Gray: -");
}

#[test]
fn test_pointer_sample_reads_exact_pixel() {
    let img = gradient_image(10, 5);
    let s = pointer_sample(&img, 9, 4).expect("inside");
    assert_eq!((s.x, s.y), (9, 4));
    assert_eq!(s.gray, gray(*img.get_pixel(9, 4)));
    assert_eq!(status_line(Some(s)), format!("x: 9, y: 4, Gray: {}", s.gray));
}

#[test]
fn test_gray_weights() {
    // (11 * 100 + 16 * 50 + 5 * 200) / 32 = 90.6
    assert_eq!(gray(Rgba([100, 50, 200, 255])), 90);
}
