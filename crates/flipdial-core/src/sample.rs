use image::{Rgba, RgbaImage};

use crate::consts::{GRAY_DIVISOR, GRAY_WEIGHTS};

/// Status text shown when no pixel is under the pointer.
pub const IDLE_STATUS: &str = "x: -, y: -, Gray: -";

/// Pixel position and gray level under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelSample {
    pub x: u32,
    pub y: u32,
    pub gray: u8,
}

/// Integer luminance of a pixel: `(11r + 16g + 5b) / 32`. Alpha is ignored.
pub fn gray(pixel: Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    let sum = u32::from(r) * GRAY_WEIGHTS[0]
        + u32::from(g) * GRAY_WEIGHTS[1]
        + u32::from(b) * GRAY_WEIGHTS[2];
    (sum / GRAY_DIVISOR) as u8
}

/// Sample `image` at `(x, y)`; `None` outside `[0, w) x [0, h)`.
pub fn pointer_sample(image: &RgbaImage, x: i64, y: i64) -> Option<PixelSample> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    let pixel = image.get_pixel_checked(x, y)?;
    Some(PixelSample {
        x,
        y,
        gray: gray(*pixel),
    })
}

/// Format a sample for the status bar.
pub fn status_line(sample: Option<PixelSample>) -> String {
    match sample {
        Some(s) => format!("x: {}, y: {}, Gray: {}", s.x, s.y, s.gray),
        None => IDLE_STATUS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_extremes() {
        assert_eq!(gray(Rgba([0, 0, 0, 255])), 0);
        assert_eq!(gray(Rgba([255, 255, 255, 255])), 255);
        assert_eq!(gray(Rgba([255, 0, 0, 0])), 87);
    }

    #[test]
    fn status_line_formats() {
        let s = PixelSample { x: 3, y: 7, gray: 128 };
        assert_eq!(status_line(Some(s)), "x: 3, y: 7, Gray: 128");
        assert_eq!(status_line(None), "x: -, y: -, Gray: -");
    }
}
