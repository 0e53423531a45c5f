use flipdial_core::controller::TransformController;

use crate::convert::texture_image;

/// Texture mirror of the controller's displayed image.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Full image size; the texture itself may be downscaled to fit the GPU.
    pub image_size: Option<[usize; 2]>,
    /// Controller view generation the texture was built from.
    generation: u64,
}

impl ViewportState {
    /// Re-upload the texture if the controller shows a different image.
    /// Returns `true` when it did.
    pub fn sync(&mut self, ctx: &egui::Context, controller: &TransformController) -> bool {
        if self.generation == controller.view_generation() {
            return false;
        }
        self.generation = controller.view_generation();

        match controller.displayed() {
            Some(img) => {
                self.image_size = Some([img.width() as usize, img.height() as usize]);
                let image = texture_image(ctx, img);
                self.texture = Some(ctx.load_texture(
                    "viewport",
                    image,
                    egui::TextureOptions::NEAREST,
                ));
            }
            None => {
                self.texture = None;
                self.image_size = None;
            }
        }
        true
    }
}
