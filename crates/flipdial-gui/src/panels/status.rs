use crate::app::FlipdialApp;

pub fn show(ctx: &egui::Context, app: &mut FlipdialApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            ui.monospace(app.ui_state.status.as_str());
            if let Some(name) = app.ui_state.file_path.as_ref().and_then(|p| p.file_name()) {
                ui.separator();
                ui.label(name.to_string_lossy().into_owned());
            }
            if let Some(size) = app.viewport.image_size {
                ui.separator();
                ui.label(format!("{}x{}", size[0], size[1]));
            }
            if let Some(msg) = app.ui_state.log_messages.last() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(msg.as_str());
                });
            }
        });
        ui.add_space(2.0);
    });
}
