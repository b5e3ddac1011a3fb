//! The seam between the simulation and whatever shows its frames.
//!
//! The core never owns a window. A consumer that wants frames pushed
//! somewhere (a live window, a PNG sequence, a test recorder) implements
//! [`Display`] and hands it to the task wrapper. Pacing is the
//! consumer's concern.
//!
//! The trait is object-safe so displays can be stored as `Box<dyn Display>`.

use crate::canvas::Frame;
use crate::error::RdmError;

/// A surface frames can be presented to.
pub trait Display {
    /// Shows `frame`. Failures are reported as `RdmError::RenderBackend`
    /// (or `RdmError::Io` for file-backed displays) and are not retried.
    fn present(&mut self, frame: &Frame) -> Result<(), RdmError>;

    /// Releases backend resources. Called once, by `quit`.
    fn close(&mut self) -> Result<(), RdmError> {
        Ok(())
    }

    /// Human-readable label, e.g. a window title.
    fn name(&self) -> &str {
        "display"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FrameCanvas;
    use crate::color::Rgb;

    /// Records shapes of presented frames.
    #[derive(Default)]
    struct Recorder {
        shapes: Vec<(usize, usize, usize)>,
        closed: bool,
    }

    impl Display for Recorder {
        fn present(&mut self, frame: &Frame) -> Result<(), RdmError> {
            self.shapes.push(frame.shape());
            Ok(())
        }

        fn close(&mut self) -> Result<(), RdmError> {
            self.closed = true;
            Ok(())
        }
    }

    struct Broken;

    impl Display for Broken {
        fn present(&mut self, _frame: &Frame) -> Result<(), RdmError> {
            Err(RdmError::RenderBackend("surface lost".into()))
        }
    }

    fn frame() -> Frame {
        FrameCanvas::new(6, Rgb::BLACK).unwrap().extract_frame()
    }

    #[test]
    fn display_trait_is_object_safe() {
        let mut display: Box<dyn Display> = Box::new(Recorder::default());
        display.present(&frame()).unwrap();
        display.close().unwrap();
        assert_eq!(display.name(), "display");
    }

    #[test]
    fn recorder_sees_presented_frames() {
        let mut recorder = Recorder::default();
        recorder.present(&frame()).unwrap();
        recorder.present(&frame()).unwrap();
        recorder.close().unwrap();
        assert_eq!(recorder.shapes, vec![(6, 6, 3), (6, 6, 3)]);
        assert!(recorder.closed);
    }

    #[test]
    fn default_close_is_ok() {
        let mut broken = Broken;
        assert!(broken.close().is_ok());
    }

    #[test]
    fn backend_errors_surface_unchanged() {
        let mut broken = Broken;
        match broken.present(&frame()) {
            Err(RdmError::RenderBackend(msg)) => assert_eq!(msg, "surface lost"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
