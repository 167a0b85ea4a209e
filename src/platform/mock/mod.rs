//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be
//! used for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! use pico_blink::platform::mock::MockPlatform;
//! use pico_blink::platform::traits::{Platform, WirelessInterface};
//!
//! let mut platform = MockPlatform::new();
//! platform.wireless().enable().unwrap();
//! let led = platform.wireless().claim_led().unwrap();
//! ```

#![cfg(any(test, feature = "mock"))]

mod led;
mod platform;
mod timer;
mod wireless;

pub use led::MockLed;
pub use platform::MockPlatform;
pub use timer::MockTimer;
pub use wireless::MockWireless;
