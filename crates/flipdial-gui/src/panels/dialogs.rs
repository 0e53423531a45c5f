//! Native file dialogs. Each runs on its own thread and posts the outcome
//! back as a [`UiCommand`]; a cancelled dialog posts nothing.

use std::path::Path;

use anyhow::{Context, Result};
use flipdial_core::io::image_io::{FileFilter, OPEN_FILTERS, SAVE_FILTERS};
use flipdial_core::settings::TransformSettings;

use crate::app::FlipdialApp;
use crate::messages::UiCommand;

fn with_filters(mut dialog: rfd::FileDialog, filters: &[FileFilter]) -> rfd::FileDialog {
    for filter in filters {
        dialog = dialog.add_filter(filter.name, filter.extensions);
    }
    dialog
}

pub fn open_image(ctx: &egui::Context, app: &FlipdialApp) {
    let cmd_tx = app.cmd_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = with_filters(rfd::FileDialog::new(), OPEN_FILTERS)
            .set_title("Open Image")
            .pick_file()
        {
            let _ = cmd_tx.send(UiCommand::Open { path });
            ctx.request_repaint();
        }
    });
}

pub fn save_image(ctx: &egui::Context, app: &FlipdialApp) {
    if !app.controller.has_image() {
        return;
    }
    let cmd_tx = app.cmd_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = with_filters(rfd::FileDialog::new(), SAVE_FILTERS)
            .set_title("Save Image")
            .set_file_name("output.png")
            .save_file()
        {
            let _ = cmd_tx.send(UiCommand::Save { path });
            ctx.request_repaint();
        }
    });
}

pub fn import_settings(ctx: &egui::Context, app: &FlipdialApp) {
    let cmd_tx = app.cmd_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let cmd = match TransformSettings::load(&path) {
            Ok(settings) => UiCommand::ImportSettings { settings },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Settings import failed");
                UiCommand::Log {
                    message: format!("Could not read settings: {e}"),
                }
            }
        };
        let _ = cmd_tx.send(cmd);
        ctx.request_repaint();
    });
}

pub fn export_settings(ctx: &egui::Context, app: &FlipdialApp) {
    let settings = app.ui_state.settings();
    let cmd_tx = app.cmd_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("flipdial.toml")
            .save_file()
        else {
            return;
        };
        let message = match write_settings(&settings, &path) {
            Ok(()) => format!("Settings exported: {}", path.display()),
            Err(e) => format!("ERROR: {e:#}"),
        };
        let _ = cmd_tx.send(UiCommand::Log { message });
        ctx.request_repaint();
    });
}

fn write_settings(settings: &TransformSettings, path: &Path) -> Result<()> {
    settings
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}
