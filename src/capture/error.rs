use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    /// The frame source could not be opened at all.
    #[error("camera unavailable at {path}")]
    NoDevice {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The frame source opened but has nothing to read.
    #[error("no frames found in {path}")]
    EmptySource { path: PathBuf },
}
