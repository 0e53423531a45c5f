use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FlipdialError, Result};
use crate::transform::{MirrorFlags, RotationAngle};

/// Dial and mirror checkbox state, persisted as TOML.
///
/// ```toml
/// angle = 30
///
/// [mirror]
/// horizontal = true
/// vertical = false
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformSettings {
    #[serde(default)]
    pub angle: RotationAngle,
    #[serde(default)]
    pub mirror: MirrorFlags,
}

impl TransformSettings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FlipdialError::Settings(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FlipdialError::Settings(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
