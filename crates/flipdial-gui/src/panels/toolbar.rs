use flipdial_core::transform::ZoomStep;

use crate::app::FlipdialApp;
use crate::panels::dialogs;

pub fn show(ctx: &egui::Context, app: &mut FlipdialApp) {
    let has_image = app.controller.has_image();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Open").clicked() {
                dialogs::open_image(ctx, app);
            }
            if ui.add_enabled(has_image, egui::Button::new("Save")).clicked() {
                dialogs::save_image(ctx, app);
            }
            ui.separator();
            for step in [ZoomStep::Out, ZoomStep::In] {
                if ui.add_enabled(has_image, egui::Button::new(step.to_string())).clicked() {
                    app.zoom(ctx, step);
                }
            }
        });
    });
}
