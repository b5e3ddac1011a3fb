//! Real-time frame limiter for live displays.

use rdm_core::RdmError;
use std::thread;
use std::time::{Duration, Instant};

/// Sleeps just long enough to hold a target frame rate.
///
/// The first [`tick`](FrameClock::tick) never sleeps. If a frame overruns
/// its slot the schedule restarts from the current instant instead of
/// trying to catch up.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    deadline: Option<Instant>,
}

impl FrameClock {
    /// Returns `RdmError::InvalidConfig` for a zero frame rate.
    pub fn new(fps: u32) -> Result<Self, RdmError> {
        if fps == 0 {
            return Err(RdmError::InvalidConfig("fps must be positive".into()));
        }
        Ok(Self {
            period: Duration::from_secs(1) / fps,
            deadline: None,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Blocks until the current frame's slot ends. Returns the time slept.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        match self.deadline {
            Some(deadline) if deadline > now => {
                let wait = deadline - now;
                thread::sleep(wait);
                self.deadline = Some(deadline + self.period);
                wait
            }
            _ => {
                self.deadline = Some(now + self.period);
                Duration::ZERO
            }
        }
    }
}
