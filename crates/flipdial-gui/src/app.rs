use std::path::PathBuf;
use std::sync::mpsc;

use flipdial_core::controller::TransformController;
use flipdial_core::sample::{status_line, IDLE_STATUS};
use flipdial_core::settings::TransformSettings;
use flipdial_core::transform::{RotationAngle, ZoomStep};
use tracing::warn;

use crate::messages::UiCommand;
use crate::panels;
use crate::states::{UIState, ViewportState, ZoomWindow};

pub struct FlipdialApp {
    pub cmd_tx: mpsc::Sender<UiCommand>,
    cmd_rx: mpsc::Receiver<UiCommand>,
    pub controller: TransformController,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub zoom_windows: Vec<ZoomWindow>,
    pub show_about: bool,
    zoom_serial: u64,
}

impl FlipdialApp {
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();

        Self {
            cmd_tx,
            cmd_rx,
            controller: TransformController::new(),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            zoom_windows: Vec::new(),
            show_about: false,
            zoom_serial: 0,
        }
    }

    /// Apply everything the dialog threads posted since the last frame.
    fn poll_commands(&mut self, ctx: &egui::Context) {
        while let Ok(cmd) = self.cmd_rx.try_recv() {
            match cmd {
                UiCommand::Open { path } => self.open(path),
                UiCommand::Save { path } => self.save(path),
                UiCommand::ImportSettings { settings } => self.import_settings(settings),
                UiCommand::Log { message } => self.ui_state.add_log(message),
            }
        }
        self.viewport.sync(ctx, &self.controller);
    }

    pub fn open(&mut self, path: PathBuf) {
        match self.controller.open(&path) {
            Ok(()) => {
                self.ui_state.dial_angle = self.controller.angle();
                self.ui_state.status = IDLE_STATUS.to_string();
                self.ui_state.add_log(format!("Opened: {}", path.display()));
                self.ui_state.file_path = Some(path);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "Open failed, keeping current image"),
        }
    }

    pub fn save(&mut self, path: PathBuf) {
        match self.controller.save(&path) {
            Ok(()) => self.ui_state.add_log(format!("Saved: {}", path.display())),
            Err(e) => warn!(path = %path.display(), error = %e, "Save failed"),
        }
    }

    /// Mirror with the current checkbox state.
    pub fn mirror(&mut self) {
        self.controller.mirror(self.ui_state.mirror);
    }

    /// The dial moved.
    pub fn set_angle(&mut self, angle: RotationAngle) {
        self.ui_state.dial_angle = angle;
        self.controller.rotate(angle);
    }

    pub fn zoom(&mut self, ctx: &egui::Context, step: ZoomStep) {
        if let Some(view) = self.controller.zoom(step.factor()) {
            self.zoom_serial += 1;
            self.zoom_windows
                .push(ZoomWindow::new(ctx, self.zoom_serial, &view));
        }
    }

    /// Pointer moved over the main view; `pos` is in image pixels.
    pub fn hover(&mut self, pos: Option<egui::Vec2>) {
        let sample = pos.and_then(|p| {
            self.controller
                .pointer_sample(p.x.floor() as i64, p.y.floor() as i64)
        });
        self.ui_state.status = status_line(sample);
    }

    fn import_settings(&mut self, settings: TransformSettings) {
        self.ui_state.mirror = settings.mirror;
        self.set_angle(settings.angle);
        self.ui_state.add_log("Settings imported".into());
    }
}

impl eframe::App for FlipdialApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_commands(ctx);

        panels::menu_bar::show(ctx, self);
        panels::toolbar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::zoom_windows::show(ctx, self);

        // Intents handled this frame may have changed the view.
        if self.viewport.sync(ctx, &self.controller) {
            ctx.request_repaint();
        }

        if self.show_about {
            egui::Window::new("About Flipdial")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Flipdial");
                        ui.label("Mirror, rotate and zoom images");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
