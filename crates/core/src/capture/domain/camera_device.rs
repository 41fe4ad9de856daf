use crate::shared::frame::RawFrame;

/// Acquires raw frames from a camera feed.
///
/// Implementations handle device I/O (sensor access, color conversion);
/// the pipeline works with the abstract [`RawFrame`] type. The quality hint
/// is in `0.0..=1.0`; devices without an adjustable encoder may ignore it.
pub trait CameraDevice: Send {
    fn acquire(&mut self, quality: f32) -> Result<RawFrame, Box<dyn std::error::Error>>;
}
