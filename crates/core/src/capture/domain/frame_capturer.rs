use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ImageEncoder, RgbImage};
use thiserror::Error;

use crate::capture::domain::camera_device::CameraDevice;
use crate::shared::constants::{
    DETECTION_QUALITY, DETECTION_TARGET_WIDTH, FINAL_QUALITY, FINAL_TARGET_WIDTH,
};
use crate::shared::frame::{CapturedFrame, RawFrame};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("frame has zero dimensions")]
    ZeroDimensions,
    #[error("expected RGB frame, got {0} channels")]
    UnsupportedChannels(u8),
    #[error("frame buffer does not match its dimensions")]
    InvalidBuffer,
    #[error("failed to encode frame: {0}")]
    Encode(String),
}

/// Acquires one frame from a camera and normalizes it for the pipeline.
///
/// Detection passes are downscaled to a fixed target width and re-encoded at
/// bounded quality to keep inference latency and payload size predictable;
/// the final recapture keeps more resolution and embeds a base64 copy of the
/// encoding for the handoff.
///
/// Capture failures are never fatal: a missing camera or any acquisition or
/// processing error is logged and surfaces as `None`, skipping that tick.
/// Retries happen naturally on the next scheduled tick, never in here.
pub struct FrameCapturer {
    detection_quality: f32,
    final_quality: f32,
    detection_target_width: u32,
    final_target_width: u32,
}

impl Default for FrameCapturer {
    fn default() -> Self {
        Self {
            detection_quality: DETECTION_QUALITY,
            final_quality: FINAL_QUALITY,
            detection_target_width: DETECTION_TARGET_WIDTH,
            final_target_width: FINAL_TARGET_WIDTH,
        }
    }
}

impl FrameCapturer {
    pub fn new(
        detection_quality: f32,
        final_quality: f32,
        detection_target_width: u32,
        final_target_width: u32,
    ) -> Self {
        Self {
            detection_quality,
            final_quality,
            detection_target_width,
            final_target_width,
        }
    }

    /// Capture one bounded-quality frame for a detection pass.
    pub fn capture(&self, camera: Option<&mut (dyn CameraDevice + '_)>) -> Option<CapturedFrame> {
        self.capture_with(
            camera,
            self.detection_quality,
            self.detection_target_width,
            false,
            FilterType::Triangle,
        )
    }

    /// Capture the one high-fidelity frame that gets handed off.
    pub fn capture_final(&self, camera: Option<&mut (dyn CameraDevice + '_)>) -> Option<CapturedFrame> {
        self.capture_with(
            camera,
            self.final_quality,
            self.final_target_width,
            true,
            FilterType::Lanczos3,
        )
    }

    fn capture_with(
        &self,
        camera: Option<&mut (dyn CameraDevice + '_)>,
        quality: f32,
        target_width: u32,
        embed_base64: bool,
        filter: FilterType,
    ) -> Option<CapturedFrame> {
        let camera = camera?;
        let raw = match camera.acquire(quality) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("frame acquisition failed: {e}");
                return None;
            }
        };
        match normalize(&raw, target_width, quality, embed_base64, filter) {
            Ok(frame) => Some(frame),
            Err(e) => {
                log::warn!("frame normalization failed: {e}");
                None
            }
        }
    }
}

/// Downscale to `target_width` (never upscale), re-encode as JPEG at
/// `quality`, optionally embedding a base64 copy of the encoding.
fn normalize(
    raw: &RawFrame,
    target_width: u32,
    quality: f32,
    embed_base64: bool,
    filter: FilterType,
) -> Result<CapturedFrame, NormalizeError> {
    if raw.width() == 0 || raw.height() == 0 {
        return Err(NormalizeError::ZeroDimensions);
    }
    if raw.channels() != 3 {
        return Err(NormalizeError::UnsupportedChannels(raw.channels()));
    }
    let rgb = RgbImage::from_raw(raw.width(), raw.height(), raw.data().to_vec())
        .ok_or(NormalizeError::InvalidBuffer)?;

    let rgb = if raw.width() > target_width {
        let height = ((raw.height() as f64 / raw.width() as f64) * target_width as f64).round()
            as u32;
        image::imageops::resize(&rgb, target_width, height.max(1), filter)
    } else {
        rgb
    };

    let quality_percent = (quality * 100.0).round().clamp(1.0, 100.0) as u8;
    let mut data = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut data, quality_percent);
    encoder
        .write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| NormalizeError::Encode(e.to_string()))?;

    let base64 = embed_base64.then(|| BASE64.encode(&data));

    Ok(CapturedFrame {
        width: rgb.width(),
        height: rgb.height(),
        data,
        base64,
    })
}
