use image::{imageops, RgbaImage};
use serde::{Deserialize, Serialize};

/// Axis flips to apply when the mirror action fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorFlags {
    /// Flip left-to-right.
    #[serde(default)]
    pub horizontal: bool,
    /// Flip top-to-bottom.
    #[serde(default)]
    pub vertical: bool,
}

impl MirrorFlags {
    pub const NONE: Self = Self {
        horizontal: false,
        vertical: false,
    };

    pub fn new(horizontal: bool, vertical: bool) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn is_empty(self) -> bool {
        !self.horizontal && !self.vertical
    }
}

impl std::fmt::Display for MirrorFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.horizontal, self.vertical) {
            (false, false) => write!(f, "None"),
            (true, false) => write!(f, "Horizontal"),
            (false, true) => write!(f, "Vertical"),
            (true, true) => write!(f, "Horizontal + Vertical"),
        }
    }
}

/// Flip an image on the axes selected by `flags`.
///
/// With no flag set the result is a plain copy. Flipping on both axes is the
/// same permutation as a 180 degree turn.
pub fn mirror(image: &RgbaImage, flags: MirrorFlags) -> RgbaImage {
    match (flags.horizontal, flags.vertical) {
        (false, false) => image.clone(),
        (true, false) => imageops::flip_horizontal(image),
        (false, true) => imageops::flip_vertical(image),
        (true, true) => imageops::rotate180(image),
    }
}
