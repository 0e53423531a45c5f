use std::path::PathBuf;

use flipdial_core::settings::TransformSettings;

/// Results posted back to the UI thread by file-dialog threads.
///
/// Dialogs never touch the controller; every intent is applied on the UI
/// thread when the queue is drained.
pub enum UiCommand {
    /// The user picked a file to open.
    Open { path: PathBuf },

    /// The user picked a destination for the current image.
    Save { path: PathBuf },

    /// Settings were read from a TOML file.
    ImportSettings { settings: TransformSettings },

    Log { message: String },
}
