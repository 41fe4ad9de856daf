use crate::capture::domain::camera_device::CameraDevice;
use crate::capture::domain::frame_capturer::FrameCapturer;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::{position_validator, quality_gate};
use crate::pipeline::handoff::{FacesSink, Handoff};
use crate::pipeline::session::DetectionSession;

/// How a single detection cycle ended. Every variant except `Delivered`
/// leaves the session polling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The session was torn down while this cycle was in flight; all
    /// remaining effects were skipped.
    Inactive,
    /// Camera missing or acquisition failed; the tick is skipped.
    NoFrame,
    /// No face survived detection and position validation.
    NoCandidate,
    /// The best candidate failed the pose/eyes quality gate.
    QualityRejected,
    /// The quality gate passed but the final recapture failed; the next
    /// qualifying tick retries.
    RecaptureFailed,
    /// A frame was already handed off this session; feedback only.
    AlreadyDelivered,
    /// The final frame was handed off to the completion sink.
    Delivered,
}

/// Run one capture → detect → validate → (gate → recapture → handoff) pass.
///
/// Strictly sequential within the cycle. The session's active flag is
/// re-checked after every suspension point, before any further side effect.
#[allow(clippy::too_many_arguments)]
pub fn run(
    session: &DetectionSession,
    camera: &mut Option<Box<dyn CameraDevice>>,
    detector: &mut dyn FaceDetector,
    capturer: &FrameCapturer,
    validate_position: bool,
    on_faces: &FacesSink,
    handoff: &mut Handoff,
) -> CycleOutcome {
    let Some(frame) = capturer.capture(camera.as_deref_mut()) else {
        return CycleOutcome::NoFrame;
    };
    if !session.is_active() {
        return CycleOutcome::Inactive;
    }

    let faces = match detector.detect(&frame) {
        Ok(faces) => faces,
        Err(e) => {
            log::warn!("detector violated its no-throw contract: {e}");
            Vec::new()
        }
    };
    let faces = if validate_position {
        position_validator::filter_centered(&faces, frame.width, frame.height)
    } else {
        faces
    };

    if !session.is_active() {
        return CycleOutcome::Inactive;
    }
    on_faces(&faces);

    let Some(candidate) = faces.first() else {
        return CycleOutcome::NoCandidate;
    };
    if handoff.is_delivered() {
        return CycleOutcome::AlreadyDelivered;
    }
    if !quality_gate::is_acceptable_quality(candidate) {
        return CycleOutcome::QualityRejected;
    }

    let Some(final_frame) = capturer.capture_final(camera.as_deref_mut()) else {
        return CycleOutcome::RecaptureFailed;
    };
    if !session.is_active() {
        return CycleOutcome::Inactive;
    }
    if handoff.deliver(final_frame) {
        CycleOutcome::Delivered
    } else {
        CycleOutcome::AlreadyDelivered
    }
}
