use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use facegate_core::capture::domain::camera_device::CameraDevice;
use facegate_core::capture::domain::frame_capturer::FrameCapturer;
use facegate_core::capture::infrastructure::image_sequence_camera::ImageSequenceCamera;
use facegate_core::detection::domain::face_detector::{DetectedFace, FaceDetector};
use facegate_core::detection::infrastructure::fail_safe_detector::FailSafeDetector;
use facegate_core::detection::infrastructure::scripted_detector::ScriptedDetector;
use facegate_core::pipeline::scan_face_use_case::ScanFaceUseCase;
use facegate_core::pipeline::scheduler::SchedulerConfig;
use facegate_core::shared::frame::CapturedFrame;

/// Continuous face capture against a recorded frame sequence.
///
/// Replays image frames as the camera feed and a JSON detection script as
/// the ML backend, then runs the real polling pipeline until a qualifying
/// face is captured or the timeout expires.
#[derive(Parser)]
#[command(name = "facegate")]
struct Cli {
    /// Directory of image files served, in order, as the camera feed.
    frames: PathBuf,

    /// JSON detection script replayed per frame.
    detections: PathBuf,

    /// Where to write the final captured JPEG.
    #[arg(long, default_value = "capture.jpg")]
    output: PathBuf,

    /// Polling cadence in milliseconds.
    #[arg(long, default_value = "200")]
    interval_ms: u64,

    /// Delay before the first detection cycle in milliseconds.
    #[arg(long, default_value = "0")]
    init_delay_ms: u64,

    /// Give up after this many milliseconds without a qualifying capture.
    #[arg(long, default_value = "10000")]
    timeout_ms: u64,

    /// Accept faces anywhere in the frame instead of requiring centering.
    #[arg(long)]
    no_validate_position: bool,

    /// Restart the frame sequence once it is exhausted.
    #[arg(long)]
    loop_frames: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mut camera = ImageSequenceCamera::new(&cli.frames)?;
    if cli.loop_frames {
        camera = camera.looping();
    }
    log::info!("camera feed: {} frames", camera.len());

    let detector: Box<dyn FaceDetector> = Box::new(FailSafeDetector::new(Box::new(
        ScriptedDetector::from_file(&cli.detections)?,
    )));

    let (capture_tx, capture_rx) = crossbeam_channel::bounded::<CapturedFrame>(1);
    let on_complete = Box::new(move |frame: CapturedFrame| {
        let _ = capture_tx.try_send(frame);
    });
    let on_faces = Box::new(|faces: &[DetectedFace]| {
        if !faces.is_empty() {
            log::info!("face detected in scanner area");
        }
    });

    let camera: Box<dyn CameraDevice> = Box::new(camera);
    let mut use_case = ScanFaceUseCase::new(
        Some(camera),
        detector,
        FrameCapturer::default(),
        SchedulerConfig {
            interval: Duration::from_millis(cli.interval_ms),
            init_delay: Duration::from_millis(cli.init_delay_ms),
            validate_position: !cli.no_validate_position,
        },
        on_faces,
        on_complete,
    );
    use_case.start()?;

    let result = capture_rx.recv_timeout(Duration::from_millis(cli.timeout_ms));
    use_case.cleanup();

    match result {
        Ok(frame) => {
            std::fs::write(&cli.output, &frame.data)?;
            log::info!(
                "captured {}x{} frame ({} bytes) written to {}",
                frame.width,
                frame.height,
                frame.data.len(),
                cli.output.display()
            );
            Ok(())
        }
        Err(_) => Err(format!("no qualifying face within {}ms", cli.timeout_ms).into()),
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.frames.is_dir() {
        return Err(format!("frames directory not found: {}", cli.frames.display()).into());
    }
    if !cli.detections.exists() {
        return Err(format!("detection script not found: {}", cli.detections.display()).into());
    }
    if cli.interval_ms == 0 {
        return Err("interval must be at least 1ms".into());
    }
    if cli.timeout_ms == 0 {
        return Err("timeout must be at least 1ms".into());
    }
    Ok(())
}
