use std::path::Path;

use image::{DynamicImage, RgbaImage};
use tracing::{debug, info};

use crate::error::{FlipdialError, Result};
use crate::io::image_io::{load_image, normalize, save_image};
use crate::sample::{pointer_sample, PixelSample};
use crate::transform::{self, MirrorFlags, RotationAngle, ZoomView};

/// Which buffer the view currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewSlot {
    Source,
    Destination,
}

/// Owns the source/destination images and applies user intents to them.
///
/// The destination is always either empty or the current source rotated by
/// the current angle. Operations that need an image quietly do nothing
/// without one, whatever the UI's enabled state says.
#[derive(Debug, Default)]
pub struct TransformController {
    source: Option<RgbaImage>,
    destination: Option<RgbaImage>,
    displayed: Option<ViewSlot>,
    angle: RotationAngle,
    generation: u64,
}

impl TransformController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&RgbaImage> {
        self.source.as_ref()
    }

    pub fn destination(&self) -> Option<&RgbaImage> {
        self.destination.as_ref()
    }

    pub fn displayed_slot(&self) -> Option<ViewSlot> {
        self.displayed
    }

    /// The most recently produced image, the one pointer samples read from.
    pub fn displayed(&self) -> Option<&RgbaImage> {
        match self.displayed? {
            ViewSlot::Source => self.source.as_ref(),
            ViewSlot::Destination => self.destination.as_ref(),
        }
    }

    /// Angle applied by the last rotation (reset to zero on open).
    pub fn angle(&self) -> RotationAngle {
        self.angle
    }

    /// Bumped whenever the displayed image changes.
    pub fn view_generation(&self) -> u64 {
        self.generation
    }

    pub fn has_image(&self) -> bool {
        self.source.is_some() || self.destination.is_some()
    }

    /// Image that zoom and save operate on: destination if present, else source.
    pub fn output_image(&self) -> Option<&RgbaImage> {
        self.destination.as_ref().or(self.source.as_ref())
    }

    /// Load a file as the new source. On failure nothing changes.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let image = load_image(path)?;
        info!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Opened image"
        );
        self.replace_source(image);
        Ok(())
    }

    /// Install an already decoded image as the new source.
    pub fn open_image(&mut self, image: DynamicImage) {
        self.replace_source(normalize(image));
    }

    fn replace_source(&mut self, image: RgbaImage) {
        self.source = Some(image);
        self.destination = None;
        self.angle = RotationAngle::ZERO;
        self.show(ViewSlot::Source);
    }

    /// Fold a flip into the source, then re-apply the current rotation.
    ///
    /// Each call flips whatever the source holds now, so two horizontal
    /// mirrors cancel out. Returns `false` when there is no source.
    pub fn mirror(&mut self, flags: MirrorFlags) -> bool {
        let Some(source) = self.source.as_ref() else {
            return false;
        };
        debug!(%flags, "Mirror");
        // rotate() rebuilds the destination from the new source.
        self.source = Some(transform::mirror(source, flags));
        self.rotate(self.angle)
    }

    /// Rotate the source into the destination. Returns `false` when there
    /// is no source, in which case the angle is not recorded either.
    pub fn rotate(&mut self, angle: RotationAngle) -> bool {
        let Some(source) = self.source.as_ref() else {
            return false;
        };
        debug!(%angle, "Rotate");
        self.destination = Some(transform::rotate(source, angle));
        self.angle = angle;
        self.show(ViewSlot::Destination);
        true
    }

    /// Scaled copy of the output image. Stored images are not touched.
    pub fn zoom(&self, factor: f64) -> Option<ZoomView> {
        let base = self.output_image()?;
        debug!(factor, "Zoom");
        Some(transform::zoom(base, factor))
    }

    /// Write the output image to `path`; the extension picks the format.
    pub fn save(&self, path: &Path) -> Result<()> {
        let image = self.output_image().ok_or(FlipdialError::NoImage)?;
        save_image(image, path)?;
        info!(path = %path.display(), "Saved image");
        Ok(())
    }

    /// Gray level under the pointer, in displayed-image pixel coordinates.
    pub fn pointer_sample(&self, x: i64, y: i64) -> Option<PixelSample> {
        pointer_sample(self.displayed()?, x, y)
    }

    fn show(&mut self, slot: ViewSlot) {
        self.displayed = Some(slot);
        self.generation = self.generation.wrapping_add(1);
    }
}
