//! Root platform trait
//!
//! This module defines the root Platform trait that aggregates the peripheral
//! interfaces the blinker needs.

use super::{TimerInterface, WirelessInterface};
use crate::platform::Result;

/// Root platform trait
///
/// Platform implementations provide concrete types for each peripheral
/// interface via associated types, enabling zero-cost abstractions through
/// compile-time dispatch.
pub trait Platform: Sized {
    /// Wireless subsystem type
    type Wireless: WirelessInterface;

    /// Timer type
    type Timer: TimerInterface;

    /// Initialize the platform
    ///
    /// Performs platform-specific initialization (clocks, standard I/O).
    /// Radio bring-up is a separate step via [`WirelessInterface::enable`].
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InitializationFailed` if initialization fails.
    fn init() -> Result<Self>;

    /// Get system clock frequency in Hz
    fn system_clock_hz(&self) -> u32;

    /// Get the wireless subsystem
    fn wireless(&mut self) -> &mut Self::Wireless;

    /// Get timer instance
    fn timer(&self) -> &Self::Timer;

    /// Get mutable timer instance
    fn timer_mut(&mut self) -> &mut Self::Timer;
}
