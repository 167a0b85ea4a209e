//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod led;
pub mod platform;
pub mod timer;
pub mod wireless;

// Re-export trait interfaces
pub use led::LedInterface;
pub use platform::Platform;
pub use timer::TimerInterface;
pub use wireless::WirelessInterface;
