//! PNG output for frames.
//!
//! Feature-gated behind `png` (default on) so consumers that only need the
//! frame loop do not pull in the `image` crate.

use rdm_core::{Display, Frame, RdmError};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a frame as an RGB PNG.
///
/// Returns `RdmError::InvalidDimensions` if the frame dimensions overflow
/// `u32`, or `RdmError::Io` on write failure.
pub fn write_png(frame: &Frame, path: &Path) -> Result<(), RdmError> {
    let w = u32::try_from(frame.width()).map_err(|_| RdmError::InvalidDimensions)?;
    let h = u32::try_from(frame.height()).map_err(|_| RdmError::InvalidDimensions)?;
    let img = image::RgbImage::from_raw(w, h, frame.data().to_vec())
        .ok_or_else(|| RdmError::Io("RGB buffer size mismatch".into()))?;
    img.save(path)
        .map_err(|e| RdmError::Io(format!("{}: {e}", path.display())))
}

/// A [`Display`] that writes every presented frame to
/// `<dir>/frame_00000.png`, `<dir>/frame_00001.png`, and so on.
#[derive(Debug)]
pub struct PngSequence {
    dir: PathBuf,
    written: usize,
}

impl PngSequence {
    /// Creates `dir` (and parents) if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, RdmError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| RdmError::Io(format!("{}: {e}", dir.display())))?;
        Ok(Self { dir, written: 0 })
    }

    /// Number of frames written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Path the next presented frame will be written to.
    pub fn next_path(&self) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", self.written))
    }
}

impl Display for PngSequence {
    fn present(&mut self, frame: &Frame) -> Result<(), RdmError> {
        let path = self.next_path();
        write_png(frame, &path)?;
        log::debug!("wrote {}", path.display());
        self.written += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), RdmError> {
        log::info!("{} frames written to {}", self.written, self.dir.display());
        Ok(())
    }

    fn name(&self) -> &str {
        "png-sequence"
    }
}
