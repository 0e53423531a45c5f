use crate::app::FlipdialApp;
use crate::states::ZoomWindow;

/// Draw every open zoom window and forget the ones the user closed.
pub fn show(ctx: &egui::Context, app: &mut FlipdialApp) {
    for window in &mut app.zoom_windows {
        let ZoomWindow {
            id,
            title,
            texture,
            image_size,
            window_size,
            open,
        } = window;

        egui::Window::new(title.as_str())
            .id(*id)
            .open(open)
            .default_size(*window_size)
            .resizable(true)
            .collapsible(false)
            .show(ctx, |ui| {
                egui::ScrollArea::both()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.image((texture.id(), *image_size));
                    });
            });
    }
    app.zoom_windows.retain(|w| w.open);
}
