use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::detection::domain::face_detector::{DetectedFace, FaceBounds, FaceDetector};
use crate::shared::frame::CapturedFrame;

/// Replays pre-recorded detections, keyed by acquisition order.
///
/// Stands in for a device ML backend in the CLI harness and end-to-end
/// tests: each `detect` call consumes the script entry for the next frame,
/// scaled from the script's reference frame size to the frame actually seen.
/// Frames past the end of the script (or without an entry) yield no faces.
pub struct ScriptedDetector {
    by_frame: HashMap<usize, Vec<ScriptedFace>>,
    reference_width: f32,
    reference_height: f32,
    calls: usize,
}

/// Serialized form of one scripted detection run.
#[derive(Debug, Deserialize)]
pub struct DetectionScript {
    /// Frame size the scripted coordinates refer to.
    pub frame_width: f32,
    pub frame_height: f32,
    pub frames: Vec<ScriptedFrame>,
}

#[derive(Debug, Deserialize)]
pub struct ScriptedFrame {
    /// Zero-based acquisition index this entry applies to.
    pub frame: usize,
    #[serde(default)]
    pub faces: Vec<ScriptedFace>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScriptedFace {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub yaw: Option<f32>,
    #[serde(default)]
    pub roll: Option<f32>,
    #[serde(default)]
    pub pitch: Option<f32>,
    #[serde(default)]
    pub left_eye_open: Option<f32>,
    #[serde(default)]
    pub right_eye_open: Option<f32>,
}

impl ScriptedDetector {
    pub fn new(script: DetectionScript) -> Self {
        let by_frame = script
            .frames
            .into_iter()
            .map(|f| (f.frame, f.faces))
            .collect();
        Self {
            by_frame,
            reference_width: script.frame_width,
            reference_height: script.frame_height,
            calls: 0,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<DetectionScript>(json).map(Self::new)
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    fn to_face(&self, scripted: &ScriptedFace, frame: &CapturedFrame) -> DetectedFace {
        let sx = frame.width as f32 / self.reference_width;
        let sy = frame.height as f32 / self.reference_height;
        DetectedFace {
            bounds: FaceBounds {
                left: scripted.left * sx,
                top: scripted.top * sy,
                width: scripted.width * sx,
                height: scripted.height * sy,
            },
            yaw: scripted.yaw,
            roll: scripted.roll,
            pitch: scripted.pitch,
            left_eye_open: scripted.left_eye_open,
            right_eye_open: scripted.right_eye_open,
        }
    }
}

impl FaceDetector for ScriptedDetector {
    fn detect(
        &mut self,
        frame: &CapturedFrame,
    ) -> Result<Vec<DetectedFace>, Box<dyn std::error::Error>> {
        let index = self.calls;
        self.calls += 1;
        let faces = self
            .by_frame
            .get(&index)
            .map(|scripted| scripted.iter().map(|s| self.to_face(s, frame)).collect())
            .unwrap_or_default();
        Ok(faces)
    }
}
