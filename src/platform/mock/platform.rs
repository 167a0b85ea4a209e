//! Mock Platform implementation for testing

use super::{MockTimer, MockWireless};
use crate::platform::{traits::Platform, Result};

/// Mock Platform implementation
///
/// Aggregates the mock peripherals for hardware-free testing.
///
/// # Example
///
/// ```
/// use pico_blink::platform::mock::MockPlatform;
/// use pico_blink::platform::traits::{Platform, WirelessInterface};
///
/// let mut platform = MockPlatform::new();
/// platform.wireless().enable().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockPlatform {
    wireless: MockWireless,
    timer: MockTimer,
}

impl MockPlatform {
    /// Create a new mock platform
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock platform whose radio bring-up always fails
    pub fn with_radio_failure() -> Self {
        Self {
            wireless: MockWireless::failing(),
            timer: MockTimer::new(),
        }
    }
}

impl Platform for MockPlatform {
    type Wireless = MockWireless;
    type Timer = MockTimer;

    fn init() -> Result<Self> {
        Ok(Self::new())
    }

    fn system_clock_hz(&self) -> u32 {
        125_000_000 // Simulated 125 MHz system clock
    }

    fn wireless(&mut self) -> &mut Self::Wireless {
        &mut self.wireless
    }

    fn timer(&self) -> &Self::Timer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut Self::Timer {
        &mut self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::traits::{TimerInterface, WirelessInterface};

    #[test]
    fn test_mock_platform_init() {
        let mut platform = MockPlatform::init().unwrap();
        assert_eq!(platform.system_clock_hz(), 125_000_000);
        assert!(!platform.wireless().is_enabled());
    }

    #[test]
    fn test_mock_platform_timer_access() {
        let mut platform = MockPlatform::new();
        platform.timer_mut().delay_ms(2).unwrap();
        assert_eq!(platform.timer().now_ms(), 2);
    }
}
