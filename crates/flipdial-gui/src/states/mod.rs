mod ui;
mod viewport;
mod zoom;

pub use ui::UIState;
pub use viewport::ViewportState;
pub use zoom::ZoomWindow;
