use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};

use crate::error::{FlipdialError, Result};

/// A named group of file extensions offered by a file dialog.
#[derive(Clone, Copy, Debug)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

/// Filters for the open dialog.
pub const OPEN_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "Image Files",
        extensions: &["png", "jpg", "jpeg", "bmp", "gif"],
    },
    FileFilter {
        name: "All Files",
        extensions: &["*"],
    },
];

/// Filters for the save dialog. The chosen extension decides the encoder.
pub const SAVE_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "PNG Files",
        extensions: &["png"],
    },
    FileFilter {
        name: "JPG Files",
        extensions: &["jpg"],
    },
    FileFilter {
        name: "BMP Files",
        extensions: &["bmp"],
    },
];

/// Convert any decoded image to 8-bit RGBA with every pixel opaque.
pub fn normalize(image: DynamicImage) -> RgbaImage {
    DynamicImage::ImageRgb8(image.into_rgb8()).into_rgba8()
}

/// Load and normalize an image file. The format is sniffed from content,
/// so a misleading extension still decodes.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    if path.as_os_str().is_empty() {
        return Err(FlipdialError::EmptyPath);
    }
    let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(normalize(decoded))
}

/// Encoder chosen for `path`, from its extension.
pub fn format_for_path(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path).map_err(|_| FlipdialError::UnknownFormat(path.to_path_buf()))
}

/// Save an image, choosing the format from the file extension.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(FlipdialError::EmptyPath);
    }
    let format = format_for_path(path)?;
    match format {
        // The JPEG encoder has no alpha channel.
        ImageFormat::Jpeg => {
            DynamicImage::ImageRgba8(image.clone())
                .into_rgb8()
                .save_with_format(path, format)?;
        }
        _ => image.save_with_format(path, format)?,
    }
    Ok(())
}
