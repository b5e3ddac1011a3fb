#![deny(unsafe_code)]
//! Task wrapper around the random-dot-motion core.
//!
//! [`Task`] is what decision-task wrappers, CLIs and live viewers drive:
//! `run_frame` advances the simulation, `render_frame` pushes the current
//! frame to an attached [`Display`] (if any) and paces it, `get_frame`
//! returns the observation, `quit` releases the display. A headless task
//! never touches a display and never sleeps.

pub mod clock;
pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use clock::FrameClock;
use log::{debug, info};
use rdm_core::{Config, Display, DotField, Frame, RdmError};

/// Frame rate used to pace a live display when none is given.
pub const DEFAULT_FPS: u32 = 30;

/// A dot field plus an optional display and frame limiter.
pub struct Task {
    field: DotField,
    display: Option<Box<dyn Display>>,
    clock: Option<FrameClock>,
    presented: u64,
}

impl Task {
    /// Wraps an existing field with no display attached.
    pub fn new(field: DotField) -> Self {
        Self {
            field,
            display: None,
            clock: None,
            presented: 0,
        }
    }

    /// Builds a headless task from a configuration and seed.
    pub fn headless(config: Config, seed: u64) -> Result<Self, RdmError> {
        Ok(Self::new(DotField::from_seed(config, seed)?))
    }

    /// Attaches a display that every [`render_frame`](Self::render_frame)
    /// presents to.
    pub fn with_display(mut self, display: Box<dyn Display>) -> Self {
        info!("attached display '{}'", display.name());
        self.display = Some(display);
        self
    }

    /// Limits presentation to `fps` frames per second. Only applies while
    /// a display is attached.
    pub fn with_fps(mut self, fps: u32) -> Result<Self, RdmError> {
        self.clock = Some(FrameClock::new(fps)?);
        Ok(self)
    }

    /// Advances the simulation one tick and redraws the internal canvas.
    /// No display side effects.
    pub fn run_frame(&mut self) {
        self.field.step();
    }

    /// Presents the current canvas to the attached display and waits out
    /// the frame slot. Does nothing when headless.
    ///
    /// Display failures are returned unchanged.
    pub fn render_frame(&mut self) -> Result<(), RdmError> {
        let Some(display) = self.display.as_mut() else {
            return Ok(());
        };
        display.present(&self.field.frame())?;
        self.presented += 1;
        if let Some(clock) = self.clock.as_mut() {
            clock.tick();
        }
        Ok(())
    }

    /// Current observation, shape `(display_size, display_size, 3)`.
    pub fn get_frame(&self) -> Frame {
        self.field.frame()
    }

    /// Runs `n_frames` ticks, presenting each one.
    pub fn run(&mut self, n_frames: usize) -> Result<(), RdmError> {
        debug!("running {n_frames} frames");
        for _ in 0..n_frames {
            self.run_frame();
            self.render_frame()?;
        }
        Ok(())
    }

    /// Detaches and closes the display. Safe to call more than once.
    pub fn quit(&mut self) -> Result<(), RdmError> {
        if let Some(mut display) = self.display.take() {
            info!(
                "closing display '{}' after {} frames",
                display.name(),
                self.presented
            );
            display.close()?;
        }
        Ok(())
    }

    pub fn field(&self) -> &DotField {
        &self.field
    }

    pub fn has_display(&self) -> bool {
        self.display.is_some()
    }

    /// Frames handed to a display so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }
}
