use image::{imageops, Rgba, RgbaImage};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::consts::{BOUNDS_EPSILON, MAX_ANGLE, PARALLEL_PIXEL_THRESHOLD};

/// Rotation in whole degrees, always within `0..=360`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "i64", into = "u16")]
pub struct RotationAngle(u16);

impl RotationAngle {
    pub const ZERO: Self = Self(0);

    /// Build an angle, clamping anything outside `0..=360`.
    pub fn new(degrees: i32) -> Self {
        Self(degrees.clamp(0, i32::from(MAX_ANGLE)) as u16)
    }

    pub fn degrees(self) -> u16 {
        self.0
    }

    /// The equivalent angle in `0..360` (360 folds onto 0).
    pub fn normalized(self) -> u16 {
        self.0 % 360
    }
}

impl From<u16> for RotationAngle {
    fn from(degrees: u16) -> Self {
        Self(degrees.min(MAX_ANGLE))
    }
}

impl From<i64> for RotationAngle {
    fn from(degrees: i64) -> Self {
        Self(degrees.clamp(0, i64::from(MAX_ANGLE)) as u16)
    }
}

impl From<RotationAngle> for u16 {
    fn from(angle: RotationAngle) -> Self {
        angle.0
    }
}

impl std::fmt::Display for RotationAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Rotate an image clockwise (y axis pointing down) by `angle`.
///
/// The canvas grows to the bounding box of the rotated image; pixels not
/// covered by the source are fully transparent. Quarter turns are exact
/// pixel permutations, every other angle is resampled bilinearly.
pub fn rotate(image: &RgbaImage, angle: RotationAngle) -> RgbaImage {
    match angle.normalized() {
        0 => image.clone(),
        90 => imageops::rotate90(image),
        180 => imageops::rotate180(image),
        270 => imageops::rotate270(image),
        degrees => rotate_bilinear(image, f64::from(degrees)),
    }
}

/// Inverse mapping from an output pixel back into source coordinates.
#[derive(Clone, Copy)]
struct Rotation {
    sin: f64,
    cos: f64,
    src_center: (f64, f64),
    dst_center: (f64, f64),
    dst_width: usize,
}

impl Rotation {
    fn source_of(&self, col: usize, row: usize) -> (f64, f64) {
        let dx = col as f64 + 0.5 - self.dst_center.0;
        let dy = row as f64 + 0.5 - self.dst_center.1;
        let x = dx * self.cos + dy * self.sin + self.src_center.0 - 0.5;
        let y = -dx * self.sin + dy * self.cos + self.src_center.1 - 0.5;
        (x, y)
    }

    fn fill_row(&self, image: &RgbaImage, row: usize, line: &mut [u8]) {
        for col in 0..self.dst_width {
            let (x, y) = self.source_of(col, row);
            let px = bilinear_sample(image, x, y);
            line[col * 4..col * 4 + 4].copy_from_slice(&px.0);
        }
    }
}

fn rotate_bilinear(image: &RgbaImage, degrees: f64) -> RgbaImage {
    let (w, h) = image.dimensions();
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (out_w, out_h) = rotated_bounds(w, h, sin, cos);

    let rotation = Rotation {
        sin,
        cos,
        src_center: (f64::from(w) / 2.0, f64::from(h) / 2.0),
        dst_center: (f64::from(out_w) / 2.0, f64::from(out_h) / 2.0),
        dst_width: out_w as usize,
    };

    let mut out = RgbaImage::new(out_w, out_h);
    let row_len = out_w as usize * 4;
    if (out_w as usize) * (out_h as usize) >= PARALLEL_PIXEL_THRESHOLD {
        out.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(row, line)| rotation.fill_row(image, row, line));
    } else {
        out.chunks_mut(row_len)
            .enumerate()
            .for_each(|(row, line)| rotation.fill_row(image, row, line));
    }
    out
}

/// Size of the axis-aligned box that holds a `w`x`h` image after rotation.
fn rotated_bounds(w: u32, h: u32, sin: f64, cos: f64) -> (u32, u32) {
    let (w, h) = (f64::from(w), f64::from(h));
    let bw = w * cos.abs() + h * sin.abs();
    let bh = w * sin.abs() + h * cos.abs();
    let edge = |v: f64| ((v - BOUNDS_EPSILON).ceil() as u32).max(1);
    (edge(bw), edge(bh))
}

/// Sample an RGBA image at a fractional position.
///
/// Positions are in pixel-index space (pixel centers sit on integers).
/// Taps outside the image count as transparent, and color is blended with
/// alpha weighting so transparent neighbours do not darken edges.
pub fn bilinear_sample(image: &RgbaImage, x: f64, y: f64) -> Rgba<u8> {
    let (w, h) = image.dimensions();

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let taps = [
        (x0, y0, (1.0 - fx) * (1.0 - fy)),
        (x0 + 1, y0, fx * (1.0 - fy)),
        (x0, y0 + 1, (1.0 - fx) * fy),
        (x0 + 1, y0 + 1, fx * fy),
    ];

    let mut color = [0.0f64; 3];
    let mut alpha = 0.0f64;
    for (tx, ty, weight) in taps {
        if weight <= 0.0 || tx < 0 || ty < 0 || tx >= i64::from(w) || ty >= i64::from(h) {
            continue;
        }
        let p = image.get_pixel(tx as u32, ty as u32).0;
        let a = weight * f64::from(p[3]);
        for (acc, &c) in color.iter_mut().zip(&p[..3]) {
            *acc += a * f64::from(c);
        }
        alpha += a;
    }

    if alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |v: f64| (v / alpha).round().clamp(0.0, 255.0) as u8;
    Rgba([
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        alpha.round().clamp(0.0, 255.0) as u8,
    ])
}
