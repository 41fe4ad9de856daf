use crate::detection::domain::face_detector::DetectedFace;
use crate::shared::frame::CapturedFrame;

/// Per-tick feedback: the validated faces of the current cycle, possibly
/// empty, for live UI hints.
pub type FacesSink = Box<dyn Fn(&[DetectedFace]) + Send>;

/// Receives the one final captured frame of a successful session.
pub type CompletionSink = Box<dyn FnMut(CapturedFrame) + Send>;

/// Delivers the final captured frame to the caller's completion sink at most
/// once per armed session.
///
/// Delivery happens synchronously within the cycle that passed the quality
/// gate. After the first delivery the owner is expected to stop or re-arm
/// the scheduler; the session itself keeps polling without delivering again.
pub struct Handoff {
    sink: CompletionSink,
    delivered: bool,
}

impl Handoff {
    pub fn new(sink: CompletionSink) -> Self {
        Self {
            sink,
            delivered: false,
        }
    }

    /// Invoke the sink with `frame`. Returns `false` without invoking it if
    /// a frame was already delivered this session.
    pub fn deliver(&mut self, frame: CapturedFrame) -> bool {
        if self.delivered {
            return false;
        }
        self.delivered = true;
        (self.sink)(frame);
        true
    }

    pub fn is_delivered(&self) -> bool {
        self.delivered
    }
}
