//! Timer interface trait
//!
//! This module defines the timing interface that platform implementations must
//! provide. Delays are blocking: the calling context makes no progress until
//! the requested duration has elapsed.

use crate::platform::Result;

/// Timer interface trait
///
/// Platform implementations must provide this interface for delays and
/// timestamps.
pub trait TimerInterface {
    /// Block for the given number of microseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the duration cannot be represented
    /// by the underlying timer.
    fn delay_us(&mut self, us: u64) -> Result<()>;

    /// Block for the given number of milliseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the duration cannot be represented
    /// by the underlying timer.
    fn delay_ms(&mut self, ms: u64) -> Result<()>;

    /// Microseconds elapsed since timer start
    fn now_us(&self) -> u64;

    /// Milliseconds elapsed since timer start
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
