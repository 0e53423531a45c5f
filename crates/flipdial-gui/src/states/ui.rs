use std::path::PathBuf;

use flipdial_core::sample::IDLE_STATUS;
use flipdial_core::settings::TransformSettings;
use flipdial_core::transform::{MirrorFlags, RotationAngle};

/// Oldest log lines are dropped beyond this.
pub const MAX_LOG_MESSAGES: usize = 50;

/// Widget-owned state: checkbox flags, dial position, status text.
pub struct UIState {
    pub file_path: Option<PathBuf>,
    pub mirror: MirrorFlags,
    pub dial_angle: RotationAngle,
    /// Pointer status line (`x: .., y: .., Gray: ..`).
    pub status: String,
    pub log_messages: Vec<String>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            file_path: None,
            mirror: MirrorFlags::NONE,
            dial_angle: RotationAngle::ZERO,
            status: IDLE_STATUS.to_string(),
            log_messages: Vec::new(),
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_MESSAGES {
            let excess = self.log_messages.len() - MAX_LOG_MESSAGES;
            self.log_messages.drain(..excess);
        }
    }

    pub fn settings(&self) -> TransformSettings {
        TransformSettings {
            angle: self.dial_angle,
            mirror: self.mirror,
        }
    }
}
