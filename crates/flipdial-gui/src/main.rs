mod app;
mod convert;
mod messages;
mod panels;
mod states;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Flipdial"),
        ..Default::default()
    };

    eframe::run_native(
        "Flipdial",
        options,
        Box::new(|_cc| Ok(Box::new(app::FlipdialApp::new()))),
    )
}
