use std::path::{Path, PathBuf};

use crate::capture::domain::camera_device::CameraDevice;
use crate::shared::constants::IMAGE_EXTENSIONS;
use crate::shared::frame::RawFrame;

/// Adapts a directory of image files to the [`CameraDevice`] interface.
///
/// Files are served in lexicographic order, one per acquisition, which makes
/// a recorded frame sequence behave like a live feed in the CLI harness and
/// in end-to-end tests. A looping camera restarts from the first file once
/// the sequence is exhausted; a non-looping one fails further acquisitions,
/// which the pipeline treats as skipped ticks.
pub struct ImageSequenceCamera {
    paths: Vec<PathBuf>,
    next: usize,
    looping: bool,
}

impl ImageSequenceCamera {
    pub fn new(dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_image(path))
            .collect();
        paths.sort();
        if paths.is_empty() {
            return Err(format!("no image files found in {}", dir.display()).into());
        }
        Ok(Self {
            paths,
            next: 0,
            looping: false,
        })
    }

    /// Restart from the first file when the sequence runs out.
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

impl CameraDevice for ImageSequenceCamera {
    fn acquire(&mut self, _quality: f32) -> Result<RawFrame, Box<dyn std::error::Error>> {
        if self.next >= self.paths.len() {
            if !self.looping {
                return Err("image sequence exhausted".into());
            }
            self.next = 0;
        }
        let index = self.next;
        let path = &self.paths[index];
        self.next += 1;

        let rgb = image::open(path)?.to_rgb8();
        let (width, height) = (rgb.width(), rgb.height());
        Ok(RawFrame::new(rgb.into_raw(), width, height, 3, index))
    }
}
