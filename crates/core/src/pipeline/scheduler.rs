use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{select, Receiver, RecvTimeoutError, Sender, TryRecvError};

use crate::capture::domain::camera_device::CameraDevice;
use crate::capture::domain::frame_capturer::FrameCapturer;
use crate::detection::domain::face_detector::FaceDetector;
use crate::pipeline::cycle;
use crate::pipeline::handoff::{CompletionSink, FacesSink, Handoff};
use crate::pipeline::session::DetectionSession;
use crate::shared::constants::DEFAULT_INTERVAL_MS;

/// Inbound knobs supplied by the hosting application.
#[derive(Clone, Copy, Debug)]
pub struct SchedulerConfig {
    /// Polling cadence between detection cycles.
    pub interval: Duration,
    /// Delay before the first cycle, e.g. while the camera warms up.
    pub init_delay: Duration,
    /// Whether faces must be centered in the frame to count.
    pub validate_position: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            init_delay: Duration::ZERO,
            validate_position: true,
        }
    }
}

/// Owns the polling loop: fixed-interval ticks, at most one in-flight cycle,
/// lifecycle-aware teardown.
///
/// States: Idle (not started) → Polling → CycleRunning → Polling → … →
/// Stopped. Each session runs on a dedicated worker thread; the camera,
/// detector and sinks move into it on `start` and the owner coordinates only
/// through the shared [`DetectionSession`] flags.
///
/// Backpressure is drop-not-queue: a tick that arrives while a cycle is
/// still in flight is discarded, so concurrency stays bounded at 0 or 1
/// cycles at the cost of skipped cadence slots on slow hardware.
pub struct DetectionScheduler {
    session: Arc<DetectionSession>,
    stop_tx: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl DetectionScheduler {
    pub fn new() -> Self {
        Self {
            session: Arc::new(DetectionSession::new()),
            stop_tx: None,
            worker: None,
        }
    }

    /// Begin polling. Any previous session is force-stopped first, so a
    /// repeated `start` is an idempotent restart and the worker is never
    /// aliased to two sessions.
    ///
    /// `camera` may be `None` when the device is not ready yet; ticks then
    /// skip until the owner restarts with a live camera.
    pub fn start(
        &mut self,
        config: SchedulerConfig,
        camera: Option<Box<dyn CameraDevice>>,
        detector: Box<dyn FaceDetector>,
        capturer: FrameCapturer,
        on_faces: FacesSink,
        on_complete: CompletionSink,
    ) {
        self.stop();

        let session = Arc::new(DetectionSession::new());
        session.activate();
        self.session = session.clone();

        let (stop_tx, stop_rx) = crossbeam_channel::unbounded();
        let handoff = Handoff::new(on_complete);
        let worker = std::thread::spawn(move || {
            run_worker(
                session, config, stop_rx, camera, detector, capturer, on_faces, handoff,
            );
        });

        self.stop_tx = Some(stop_tx);
        self.worker = Some(worker);
    }

    /// Stop polling. Safe to call repeatedly; a cycle already in flight
    /// finishes (including a pending handoff) before the worker exits.
    pub fn stop(&mut self) {
        // Dropping the sender disconnects the stop channel, which the worker
        // observes as the stop signal.
        drop(self.stop_tx.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("detection worker panicked");
            }
        }
    }

    /// Tear the session down. Unlike [`stop`](Self::stop), continuations of
    /// an in-flight cycle observe the inactive session and skip their
    /// remaining side effects, so no callback fires after cleanup returns.
    pub fn cleanup(&mut self) {
        self.session.deactivate();
        self.stop();
        self.session.clear_cycle_flag();
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    pub fn is_cycle_running(&self) -> bool {
        self.session.is_cycle_running()
    }
}

impl Default for DetectionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DetectionScheduler {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[allow(clippy::too_many_arguments)]
fn run_worker(
    session: Arc<DetectionSession>,
    config: SchedulerConfig,
    stop_rx: Receiver<()>,
    mut camera: Option<Box<dyn CameraDevice>>,
    mut detector: Box<dyn FaceDetector>,
    capturer: FrameCapturer,
    on_faces: FacesSink,
    mut handoff: Handoff,
) {
    if !config.init_delay.is_zero() {
        match stop_rx.recv_timeout(config.init_delay) {
            Err(RecvTimeoutError::Timeout) => {}
            _ => return,
        }
    }

    let ticks = crossbeam_channel::tick(config.interval);
    run_tick(
        &session,
        &mut camera,
        detector.as_mut(),
        &capturer,
        &config,
        &on_faces,
        &mut handoff,
    );
    drain(&ticks);

    loop {
        select! {
            recv(stop_rx) -> _ => break,
            recv(ticks) -> _ => {
                // A stop requested while both channels are ready wins.
                if !matches!(stop_rx.try_recv(), Err(TryRecvError::Empty)) {
                    break;
                }
                if !session.is_active() {
                    break;
                }
                run_tick(
                    &session,
                    &mut camera,
                    detector.as_mut(),
                    &capturer,
                    &config,
                    &on_faces,
                    &mut handoff,
                );
                drain(&ticks);
            }
        }
    }
}

fn run_tick(
    session: &DetectionSession,
    camera: &mut Option<Box<dyn CameraDevice>>,
    detector: &mut dyn FaceDetector,
    capturer: &FrameCapturer,
    config: &SchedulerConfig,
    on_faces: &FacesSink,
    handoff: &mut Handoff,
) {
    if !session.is_active() {
        return;
    }
    let Some(_guard) = session.try_begin_cycle() else {
        log::debug!("detection cycle already in flight, dropping tick");
        return;
    };
    let outcome = cycle::run(
        session,
        camera,
        detector,
        capturer,
        config.validate_position,
        on_faces,
        handoff,
    );
    log::debug!("detection cycle finished: {outcome:?}");
}

/// Discard ticks that fired while a cycle was running: dropped, not queued.
fn drain(ticks: &Receiver<std::time::Instant>) {
    while ticks.try_recv().is_ok() {}
}
