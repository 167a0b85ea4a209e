//! Wireless subsystem interface trait
//!
//! This module defines the radio bring-up interface that platform
//! implementations must provide. The wireless chip owns the onboard LED line
//! on the Pico W, so the LED handle is claimed through this interface after
//! the radio is enabled.

use super::LedInterface;
use crate::platform::Result;

/// Wireless subsystem interface trait
///
/// # Safety Invariants
///
/// - `enable` must be called at most once per process lifetime; the chip
///   cannot be de-initialized within this process
/// - The LED line can be claimed by exactly one owner
pub trait WirelessInterface {
    /// LED handle type owned by the wireless chip
    type Led: LedInterface;

    /// Bring up the radio subsystem
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Wireless(WirelessError::EnableFailed)` if the
    /// chip does not come up. This is surfaced to the caller rather than
    /// handled here; the embedding process decides whether to halt, retry,
    /// or report.
    fn enable(&mut self) -> Result<()>;

    /// Whether the radio has been brought up
    fn is_enabled(&self) -> bool;

    /// Claim the chip's LED output line
    ///
    /// Hands out the LED handle exactly once.
    ///
    /// # Errors
    ///
    /// - `PlatformError::Wireless(WirelessError::NotEnabled)` if the radio
    ///   has not been enabled
    /// - `PlatformError::ResourceUnavailable` if the LED was already claimed
    fn claim_led(&mut self) -> Result<Self::Led>;
}
