//! Pico W platform implementation for Raspberry Pi Pico W (RP2040)
//!
//! This module provides concrete implementations of the platform abstraction
//! for the Pico W using `embassy-rp` and the `cyw43` wireless driver.
//!
//! # Feature Gate
//!
//! This module is only available when the `pico_w` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! pico_blink = { version = "0.1", features = ["pico_w"] }
//! ```
//!
//! The cyw43 driver is fully async, so the wireless bring-up lives in
//! [`wireless`] as standalone async functions rather than behind the
//! blocking [`WirelessInterface`](crate::platform::traits::WirelessInterface)
//! trait; firmware entry points drive it directly.

mod led;
mod timer;

pub mod wireless;

pub use led::PicoLed;
pub use timer::PicoTimer;
pub use wireless::{init_wireless, WirelessLed, WirelessPins};
