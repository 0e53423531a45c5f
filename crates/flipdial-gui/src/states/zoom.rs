use flipdial_core::transform::ZoomView;

use crate::convert::texture_image;

/// One open zoom window. Owns its texture, independent of the controller.
pub struct ZoomWindow {
    pub id: egui::Id,
    pub title: String,
    pub texture: egui::TextureHandle,
    pub image_size: egui::Vec2,
    pub window_size: egui::Vec2,
    pub open: bool,
}

impl ZoomWindow {
    pub fn new(ctx: &egui::Context, serial: u64, view: &ZoomView) -> Self {
        let (iw, ih) = view.image.dimensions();
        let image_size = egui::vec2(iw as f32, ih as f32);
        let image = texture_image(ctx, &view.image);
        let texture = ctx.load_texture(
            format!("zoom-{serial}"),
            image,
            egui::TextureOptions::LINEAR,
        );
        let (w, h) = view.window_size();
        Self {
            id: egui::Id::new(("zoom", serial)),
            title: view.title(),
            texture,
            image_size,
            window_size: egui::vec2(w as f32, h as f32),
            open: true,
        }
    }
}
