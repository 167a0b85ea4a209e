//! Pico W Timer implementation
//!
//! Blocking delays and timestamps over the RP2040 64-bit microsecond timer
//! via `embassy-time`.

use crate::platform::{traits::TimerInterface, Result};
use embassy_time::{block_for, Duration, Instant};

/// RP2040 timer implementation
///
/// # Note
///
/// Delays busy-wait the current execution context. Inside an embassy
/// executor this stalls all tasks on the core for the duration, which is the
/// intended semantics of the blink loop's unconditional sleeps.
#[derive(Debug, Default)]
pub struct PicoTimer;

impl PicoTimer {
    /// Create a new timer handle
    pub fn new() -> Self {
        Self
    }
}

impl TimerInterface for PicoTimer {
    fn delay_us(&mut self, us: u64) -> Result<()> {
        block_for(Duration::from_micros(us));
        Ok(())
    }

    fn delay_ms(&mut self, ms: u64) -> Result<()> {
        block_for(Duration::from_millis(ms));
        Ok(())
    }

    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}
