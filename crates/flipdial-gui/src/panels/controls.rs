use flipdial_core::consts::MAX_ANGLE;
use flipdial_core::transform::RotationAngle;

use crate::app::FlipdialApp;
use crate::panels::dial::dial;
use crate::panels::section_header;

const LEFT_PANEL_WIDTH: f32 = 160.0;
const DIAL_DIAMETER: f32 = 120.0;

pub fn show(ctx: &egui::Context, app: &mut FlipdialApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            // Advisory only: the controller no-ops without an image anyway.
            let enabled = app.controller.has_image();

            mirror_section(ui, app, enabled);
            ui.separator();
            rotate_section(ui, app, enabled);
        });
}

fn mirror_section(ui: &mut egui::Ui, app: &mut FlipdialApp, enabled: bool) {
    section_header(ui, "Mirror", None);
    ui.add_space(4.0);

    ui.add_enabled_ui(enabled, |ui| {
        ui.checkbox(&mut app.ui_state.mirror.horizontal, "Horizontal");
        ui.checkbox(&mut app.ui_state.mirror.vertical, "Vertical");
        if ui.button("Execute").clicked() {
            app.mirror();
        }
    });
}

fn rotate_section(ui: &mut egui::Ui, app: &mut FlipdialApp, enabled: bool) {
    let label = app.ui_state.dial_angle.to_string();
    section_header(ui, "Rotate", Some(label.as_str()));
    ui.add_space(4.0);

    ui.add_enabled_ui(enabled, |ui| {
        let mut angle = app.ui_state.dial_angle;
        let mut changed = ui
            .vertical_centered(|ui| dial(ui, &mut angle, DIAL_DIAMETER))
            .inner
            .changed();

        let mut degrees = angle.degrees();
        if ui
            .add(
                egui::DragValue::new(&mut degrees)
                    .range(0..=MAX_ANGLE)
                    .suffix("°"),
            )
            .changed()
        {
            angle = RotationAngle::from(degrees);
            changed = true;
        }

        if changed {
            app.set_angle(angle);
        }
    });
}
