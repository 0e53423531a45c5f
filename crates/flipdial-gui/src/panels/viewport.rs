use flipdial_core::consts::PLACEHOLDER_SIZE;

use crate::app::FlipdialApp;

/// Main image view: 1:1, top-left aligned, scrollable, on white.
pub fn show(ctx: &egui::Context, app: &mut FlipdialApp) {
    let texture_info = app.viewport.texture.as_ref().map(|t| {
        let size = app
            .viewport
            .image_size
            .map(|s| egui::vec2(s[0] as f32, s[1] as f32))
            .unwrap_or_else(|| t.size_vec2());
        (t.id(), size)
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| match texture_info {
                Some((texture_id, size)) => {
                    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
                    paint_background(ui, rect);
                    draw_image(ui, texture_id, rect);

                    // Laid out at one point per image pixel whatever the texture
                    // resolution, so the offset is the pixel position.
                    let hover = response.hover_pos().map(|p| p - rect.min);
                    app.hover(hover);
                }
                None => show_placeholder(ui),
            });
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().rect_filled(rect, 0.0, egui::Color32::WHITE);
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    let size = egui::vec2(PLACEHOLDER_SIZE.0 as f32, PLACEHOLDER_SIZE.1 as f32);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    paint_background(ui, rect);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Open an image to begin",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(140),
    );
}
