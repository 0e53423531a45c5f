pub mod controls;
pub mod dial;
pub mod dialogs;
pub mod menu_bar;
pub mod status;
pub mod toolbar;
pub mod viewport;
pub mod zoom_windows;

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}
