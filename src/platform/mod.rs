//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the blinker. All
//! platform-specific code must be isolated to this module.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico_w")]
pub mod pico_w;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{LedInterface, Platform, TimerInterface, WirelessInterface};
