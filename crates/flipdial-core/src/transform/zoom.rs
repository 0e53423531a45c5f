use image::{imageops, imageops::FilterType, RgbaImage};

use crate::consts::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR, ZOOM_WINDOW_CHROME, ZOOM_WINDOW_MAX};

/// The two fixed zoom actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomStep {
    In,
    Out,
}

impl ZoomStep {
    pub fn factor(self) -> f64 {
        match self {
            Self::In => ZOOM_IN_FACTOR,
            Self::Out => ZOOM_OUT_FACTOR,
        }
    }
}

impl std::fmt::Display for ZoomStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::In => write!(f, "Zoom In"),
            Self::Out => write!(f, "Zoom Out"),
        }
    }
}

/// A scaled, detached copy of an image for an auxiliary zoom window.
#[derive(Clone, Debug)]
pub struct ZoomView {
    pub factor: f64,
    pub image: RgbaImage,
}

impl ZoomView {
    /// Window title, e.g. `Zoom x1.25`.
    pub fn title(&self) -> String {
        format!("Zoom x{:.2}", self.factor)
    }

    /// Initial window size: the image plus frame chrome, capped at 900x700.
    pub fn window_size(&self) -> (u32, u32) {
        let (w, h) = self.image.dimensions();
        (
            (w + ZOOM_WINDOW_CHROME.0).min(ZOOM_WINDOW_MAX.0),
            (h + ZOOM_WINDOW_CHROME.1).min(ZOOM_WINDOW_MAX.1),
        )
    }
}

/// Scaled size `max(1, round(dim * factor))` on each axis.
pub fn zoom_size(width: u32, height: u32, factor: f64) -> (u32, u32) {
    let scale = |dim: u32| ((f64::from(dim) * factor).round() as u32).max(1);
    (scale(width), scale(height))
}

/// Render `image` scaled by `factor` with smooth filtering.
///
/// Aspect ratio is not preserved beyond what the per-axis rounding gives.
pub fn zoom(image: &RgbaImage, factor: f64) -> ZoomView {
    let (w, h) = zoom_size(image.width(), image.height(), factor);
    ZoomView {
        factor,
        image: imageops::resize(image, w, h, FilterType::Triangle),
    }
}
