//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum PlatformError {
    /// Wireless chip operation failed
    Wireless(WirelessError),
    /// LED operation failed
    Led(LedError),
    /// Timer operation failed
    Timer(TimerError),
    /// Platform initialization failed
    InitializationFailed,
    /// Resource not available
    ResourceUnavailable,
}

/// Wireless-chip-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum WirelessError {
    /// Radio bring-up failed
    EnableFailed,
    /// Radio bring-up did not complete in time
    Timeout,
    /// Operation requires the radio to be enabled first
    NotEnabled,
}

/// LED-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum LedError {
    /// Driving the output line failed
    HardwareFault,
}

/// Timer-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum TimerError {
    /// Invalid duration
    InvalidDuration,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Wireless(e) => write!(f, "Wireless error: {:?}", e),
            PlatformError::Led(e) => write!(f, "LED error: {:?}", e),
            PlatformError::Timer(e) => write!(f, "Timer error: {:?}", e),
            PlatformError::InitializationFailed => write!(f, "Platform initialization failed"),
            PlatformError::ResourceUnavailable => write!(f, "Resource not available"),
        }
    }
}
