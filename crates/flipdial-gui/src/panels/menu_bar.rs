use flipdial_core::transform::ZoomStep;

use crate::app::FlipdialApp;
use crate::panels::dialogs;

const OPEN: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const SAVE: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
const QUIT: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

pub fn show(ctx: &egui::Context, app: &mut FlipdialApp) {
    let has_image = app.controller.has_image();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&OPEN))).clicked() {
                    ui.close();
                    dialogs::open_image(ctx, app);
                }

                if ui
                    .add_enabled(
                        has_image,
                        egui::Button::new("Save As...").shortcut_text(ctx.format_shortcut(&SAVE)),
                    )
                    .clicked()
                {
                    ui.close();
                    dialogs::save_image(ctx, app);
                }

                ui.separator();

                if ui.button("Import Settings...").clicked() {
                    ui.close();
                    dialogs::import_settings(ctx, app);
                }

                if ui.button("Export Settings...").clicked() {
                    ui.close();
                    dialogs::export_settings(ctx, app);
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&QUIT))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Tools", |ui| {
                for step in [ZoomStep::Out, ZoomStep::In] {
                    if ui.add_enabled(has_image, egui::Button::new(step.to_string())).clicked() {
                        ui.close();
                        app.zoom(ctx, step);
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN)) {
            dialogs::open_image(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE)) {
            dialogs::save_image(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&QUIT)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
