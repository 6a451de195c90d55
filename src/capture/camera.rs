use super::CaptureError;
use crate::FRAMES_PER_SECOND;
use crate::render::Frame;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;

/// A source of frames, read strictly in acquisition order.
pub trait Camera {
    /// Next frame, or `None` at end of stream. A failed read ends the
    /// stream.
    fn read(&mut self) -> Option<Frame>;
    /// Give the device back. Idempotent; reads afterwards return `None`.
    fn release(&mut self);
}

/// Replays the image files of a directory, in file-name order, paced to a
/// fixed frame rate.
pub struct FolderCamera {
    root: PathBuf,
    frames: Vec<PathBuf>,
    cursor: usize,
    looping: bool,
    interval: Duration,
    last: Option<Instant>,
    released: bool,
}

impl FolderCamera {
    pub fn open(root: &Path) -> Result<Self, CaptureError> {
        let entries = std::fs::read_dir(root).map_err(|source| CaptureError::NoDevice {
            path: root.to_path_buf(),
            source,
        })?;
        let mut frames = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| Self::is_frame(path))
            .collect::<Vec<PathBuf>>();
        frames.sort();
        if frames.is_empty() {
            return Err(CaptureError::EmptySource {
                path: root.to_path_buf(),
            });
        }
        log::info!("camera opened: {} frames in {}", frames.len(), root.display());
        Ok(Self {
            root: root.to_path_buf(),
            frames,
            cursor: 0,
            looping: false,
            interval: Duration::from_secs_f32(1.0 / FRAMES_PER_SECOND),
            last: None,
            released: false,
        })
    }
    /// Start over from the first frame instead of ending the stream.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }
    /// Pace reads to `fps`; zero or less disables pacing. Rates too slow
    /// to represent saturate to the longest interval.
    pub fn fps(mut self, fps: f32) -> Self {
        self.interval = match fps > 0.0 {
            true => Duration::try_from_secs_f32(1.0 / fps).unwrap_or(Duration::MAX),
            false => Duration::ZERO,
        };
        self
    }
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    fn is_frame(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .is_some_and(|ext| matches!(ext.as_str(), "png" | "jpg" | "jpeg"))
    }
    fn pace(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

impl Camera for FolderCamera {
    fn read(&mut self) -> Option<Frame> {
        if self.released {
            return None;
        }
        if self.cursor >= self.frames.len() {
            match self.looping {
                true => self.cursor = 0,
                false => return None,
            }
        }
        self.pace();
        let path = &self.frames[self.cursor];
        self.cursor += 1;
        match image::open(path) {
            Ok(image) => Some(image.to_rgb8()),
            Err(e) => {
                log::warn!("frame read failed at {}: {}", path.display(), e);
                None
            }
        }
    }
    fn release(&mut self) {
        if !self.released {
            self.released = true;
            log::debug!("camera released: {}", self.root.display());
        }
    }
}

impl Drop for FolderCamera {
    fn drop(&mut self) {
        self.release();
    }
}
