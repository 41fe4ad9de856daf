use crate::shared::frame::CapturedFrame;

/// Bounding box of a detected face, in pixels of the normalized frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl FaceBounds {
    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// One face reported by a detector backend.
///
/// Pose angles and eye classifications are optional: not every device ships
/// the full classifier set. Absent fields are treated as passing downstream
/// ("assume straight/open when unknown") rather than failing the capture.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectedFace {
    pub bounds: FaceBounds,
    /// Head rotation around the vertical axis, degrees.
    pub yaw: Option<f32>,
    /// Head tilt toward a shoulder, degrees.
    pub roll: Option<f32>,
    /// Head nod up/down, degrees.
    pub pitch: Option<f32>,
    pub left_eye_open: Option<f32>,
    pub right_eye_open: Option<f32>,
}

impl DetectedFace {
    /// A face with the given bounds and no pose/eye classifications.
    pub fn with_bounds(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: FaceBounds {
                left,
                top,
                width,
                height,
            },
            yaw: None,
            roll: None,
            pitch: None,
            left_eye_open: None,
            right_eye_open: None,
        }
    }
}

/// Domain interface for face detection.
///
/// Implementations may be stateful (e.g. tracking across frames), hence
/// `&mut self`. Pipeline callers expect the "must not throw" contract and
/// wrap fallible backends in
/// [`crate::detection::infrastructure::fail_safe_detector::FailSafeDetector`].
pub trait FaceDetector: Send {
    fn detect(
        &mut self,
        frame: &CapturedFrame,
    ) -> Result<Vec<DetectedFace>, Box<dyn std::error::Error>>;
}
