#![cfg_attr(not(test), no_std)]

//! pico_blink - Wireless-chip LED blinker for Raspberry Pi Pico W
//!
//! This library brings up the CYW43439 wireless chip, consumes one externally
//! supplied computation result, derives a bounded blink delay from it, and
//! toggles an LED forever. The platform abstraction keeps the delay derivation
//! and blink loop testable on the host without hardware.

// Platform abstraction layer (traits, mock, Pico W hardware)
pub mod platform;

// Core systems (logging)
pub mod core;

// Computation provider capability
pub mod compute;

// Delay derivation and blink state machine
pub mod blink;

// Startup sequence: bootstrap -> compute -> derive -> blinker
pub mod app;
