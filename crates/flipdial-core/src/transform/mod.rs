pub mod mirror;
pub mod rotate;
pub mod zoom;

pub use mirror::{mirror, MirrorFlags};
pub use rotate::{bilinear_sample, rotate, RotationAngle};
pub use zoom::{zoom, zoom_size, ZoomStep, ZoomView};
