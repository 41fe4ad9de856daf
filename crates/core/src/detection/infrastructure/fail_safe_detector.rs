use crate::detection::domain::face_detector::{DetectedFace, FaceDetector};
use crate::shared::frame::CapturedFrame;

/// Decorator enforcing the pipeline's "must not throw" detector contract.
///
/// Any error from the inner backend is logged and degraded to an empty face
/// list, so a flaky ML runtime reads as "no face found this tick" instead of
/// aborting the detection session.
pub struct FailSafeDetector {
    inner: Box<dyn FaceDetector>,
}

impl FailSafeDetector {
    pub fn new(inner: Box<dyn FaceDetector>) -> Self {
        Self { inner }
    }
}

impl FaceDetector for FailSafeDetector {
    fn detect(
        &mut self,
        frame: &CapturedFrame,
    ) -> Result<Vec<DetectedFace>, Box<dyn std::error::Error>> {
        match self.inner.detect(frame) {
            Ok(faces) => Ok(faces),
            Err(e) => {
                log::warn!("face detection failed, treating as no faces: {e}");
                Ok(Vec::new())
            }
        }
    }
}
