//! LED interface trait
//!
//! This module defines the LED output interface that platform implementations
//! must provide.

use crate::platform::Result;

/// LED interface trait
///
/// Platform implementations must provide this interface for driving a single
/// LED output line.
///
/// # Safety Invariants
///
/// - Only one owner per LED instance; the line is exclusively owned and
///   mutated through that handle
/// - No concurrent access to the same output line from multiple contexts
pub trait LedInterface {
    /// Drive the output line high (LED on)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Led(LedError::HardwareFault)` if the write to
    /// the output line fails.
    fn set_high(&mut self) -> Result<()>;

    /// Drive the output line low (LED off)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Led(LedError::HardwareFault)` if the write to
    /// the output line fails.
    fn set_low(&mut self) -> Result<()>;

    /// Toggle the output line
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Led(LedError::HardwareFault)` if the write to
    /// the output line fails.
    fn toggle(&mut self) -> Result<()>;

    /// Read the current output level
    ///
    /// Returns `true` if the line is driven high, `false` if low.
    fn read(&self) -> bool;
}
