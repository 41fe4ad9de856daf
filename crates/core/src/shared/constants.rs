/// Scanner oval width as a fraction of the viewport width.
pub const SCANNER_WIDTH_RATIO: f32 = 0.7;

/// Scanner oval aspect ratio (width / height), portrait 3:4.
pub const SCANNER_ASPECT: f32 = 0.75;

/// Vertical anchor: the oval center sits at this fraction of screen height.
pub const SCANNER_VERTICAL_ANCHOR: f32 = 0.35;

/// Max normalized deviation of the face center from the frame center.
pub const MAX_HORIZONTAL_DEVIATION: f32 = 0.15;
pub const MAX_VERTICAL_DEVIATION: f32 = 0.20;

/// Acceptable face-to-frame size ratio, exclusive on both ends.
/// Below = too far from the camera, above = too close.
pub const MIN_FACE_RATIO: f32 = 0.30;
pub const MAX_FACE_RATIO: f32 = 0.85;

/// A head pose counts as "straight" when |yaw|, |roll| and |pitch| are all
/// below this many degrees.
pub const MAX_POSE_ANGLE_DEGREES: f32 = 15.0;

/// Minimum per-eye open probability. Detectors without an eye classifier
/// report `None`, which is treated as open.
pub const MIN_EYE_OPEN_PROBABILITY: f32 = 0.3;

/// JPEG quality for cheap detection passes.
pub const DETECTION_QUALITY: f32 = 0.7;

/// JPEG quality for the one final recapture that gets handed off.
pub const FINAL_QUALITY: f32 = 0.95;

/// Detection frames are downscaled to this width to bound inference latency.
pub const DETECTION_TARGET_WIDTH: u32 = 480;

/// The final recapture keeps more resolution for server-side matching.
pub const FINAL_TARGET_WIDTH: u32 = 1080;

/// Default polling cadence of the detection scheduler.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
