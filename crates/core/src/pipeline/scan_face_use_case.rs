use crate::capture::domain::camera_device::CameraDevice;
use crate::capture::domain::frame_capturer::FrameCapturer;
use crate::detection::domain::face_detector::FaceDetector;
use crate::pipeline::handoff::{CompletionSink, FacesSink};
use crate::pipeline::scheduler::{DetectionScheduler, SchedulerConfig};

/// Orchestrates one face scan session.
///
/// Wires the camera, detector and sinks together and delegates polling to a
/// [`DetectionScheduler`]. This is a single-use struct: `start` consumes the
/// owned components into the scheduler's worker, so starting twice without
/// constructing a new use case is an error. Re-arming after a rejected or
/// failed submission is the owner's call — build a fresh use case.
pub struct ScanFaceUseCase {
    camera: Option<Box<dyn CameraDevice>>,
    detector: Option<Box<dyn FaceDetector>>,
    capturer: Option<FrameCapturer>,
    on_faces: Option<FacesSink>,
    on_complete: Option<CompletionSink>,
    config: SchedulerConfig,
    scheduler: DetectionScheduler,
}

impl ScanFaceUseCase {
    /// `camera` may be `None` when the hosting screen's camera is not ready;
    /// the session then polls without capturing until torn down.
    pub fn new(
        camera: Option<Box<dyn CameraDevice>>,
        detector: Box<dyn FaceDetector>,
        capturer: FrameCapturer,
        config: SchedulerConfig,
        on_faces: FacesSink,
        on_complete: CompletionSink,
    ) -> Self {
        Self {
            camera,
            detector: Some(detector),
            capturer: Some(capturer),
            on_faces: Some(on_faces),
            on_complete: Some(on_complete),
            config,
            scheduler: DetectionScheduler::new(),
        }
    }

    pub fn start(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let detector = self
            .detector
            .take()
            .ok_or("scan session already started")?;
        let capturer = self.capturer.take().ok_or("scan session already started")?;
        let on_faces = self.on_faces.take().ok_or("scan session already started")?;
        let on_complete = self
            .on_complete
            .take()
            .ok_or("scan session already started")?;

        self.scheduler.start(
            self.config,
            self.camera.take(),
            detector,
            capturer,
            on_faces,
            on_complete,
        );
        Ok(())
    }

    /// Stop polling; an in-flight cycle finishes first.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Tear down: no callback fires after this returns.
    pub fn cleanup(&mut self) {
        self.scheduler.cleanup();
    }

    pub fn is_active(&self) -> bool {
        self.scheduler.is_active()
    }

    pub fn is_cycle_running(&self) -> bool {
        self.scheduler.is_cycle_running()
    }
}
