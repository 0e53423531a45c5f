use std::borrow::Cow;

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Convert a straight-alpha RGBA buffer to an egui ColorImage.
pub fn rgba_to_color_image(image: &RgbaImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

/// Shrink `image` so neither side exceeds `max_side`, keeping the aspect.
/// Images that already fit are borrowed untouched.
pub fn fit_texture_side(image: &RgbaImage, max_side: usize) -> Cow<'_, RgbaImage> {
    let (w, h) = image.dimensions();
    let longest = w.max(h) as usize;
    if max_side == 0 || longest <= max_side {
        return Cow::Borrowed(image);
    }
    let scale = max_side as f64 / longest as f64;
    let fit = |dim: u32| ((f64::from(dim) * scale).floor() as u32).clamp(1, max_side as u32);
    Cow::Owned(imageops::resize(image, fit(w), fit(h), FilterType::Triangle))
}

/// Texture-ready copy of `image` that the GPU backend can accept.
///
/// The caller still lays the texture out at the full image size; only the
/// uploaded resolution drops.
pub fn texture_image(ctx: &egui::Context, image: &RgbaImage) -> egui::ColorImage {
    let max_side = ctx.input(|i| i.max_texture_side);
    rgba_to_color_image(&fit_texture_side(image, max_side))
}
