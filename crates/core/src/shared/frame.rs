/// A single raw camera frame: contiguous RGB bytes in row-major order.
///
/// Format conversion happens at the device boundary only; the pipeline
/// treats pixel data as opaque until normalization.
#[derive(Clone, Debug)]
pub struct RawFrame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl RawFrame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Monotonically increasing acquisition sequence number.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// The normalized result of one camera acquisition: downscaled, re-encoded
/// JPEG bytes plus the dimensions the detector sees.
///
/// Created by the frame capturer, consumed by the face detector and, for the
/// final recapture, by the capture handoff. `base64` is populated only on the
/// final recapture so the hosting application can embed the image in its
/// check-in request without re-encoding.
#[derive(Clone, Debug)]
pub struct CapturedFrame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub base64: Option<String>,
}

impl CapturedFrame {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
