/// Minimum pixel count (w*h) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Scale factor used by the "Zoom In" action.
pub const ZOOM_IN_FACTOR: f64 = 1.25;

/// Scale factor used by the "Zoom Out" action.
pub const ZOOM_OUT_FACTOR: f64 = 0.80;

/// Largest initial size of a zoom window, in points. Bigger images scroll.
pub const ZOOM_WINDOW_MAX: (u32, u32) = (900, 700);

/// Room for the window frame around the zoomed image (horizontal, vertical).
pub const ZOOM_WINDOW_CHROME: (u32, u32) = (40, 80);

/// Size of the empty image placeholder in the main view.
pub const PLACEHOLDER_SIZE: (u32, u32) = (600, 400);

/// Largest angle the rotation dial can produce, in degrees.
pub const MAX_ANGLE: u16 = 360;

/// Integer gray weights for (red, green, blue); they sum to `GRAY_DIVISOR`.
pub const GRAY_WEIGHTS: [u32; 3] = [11, 16, 5];

/// Divisor for `GRAY_WEIGHTS`.
pub const GRAY_DIVISOR: u32 = 32;

/// Tolerance when deciding whether a rotated bounding box edge is integral.
pub const BOUNDS_EPSILON: f64 = 1e-6;
